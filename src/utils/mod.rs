pub mod debug;
pub mod output;
