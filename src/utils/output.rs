use crate::pool::PermutationPool;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes one permutation per line, newline-terminated, then flushes.
pub fn write_pool<W: Write>(pool: &PermutationPool, writer: W) -> io::Result<()> {
    let mut out = BufWriter::new(writer);
    for permutation in pool.iter() {
        out.write_all(permutation.as_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

pub fn save_pool<P: AsRef<Path>>(path: P, pool: &PermutationPool) -> io::Result<()> {
    let file = File::create(path)?;
    write_pool(pool, file)
}
