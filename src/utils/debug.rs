use std::env;

pub const DEBUG_ENV: &str = "PERM_POOL_DEBUG";

pub fn debug_enabled() -> bool {
    env::var_os(DEBUG_ENV).is_some()
}

/// Prints to stderr when `PERM_POOL_DEBUG` is set. The message is only built when enabled.
pub fn debug_log<F: FnOnce() -> String>(message: F) {
    if debug_enabled() {
        eprintln!("[perm_pool] {}", message());
    }
}
