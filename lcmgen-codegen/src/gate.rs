//! Regeneration gates.
//!
//! A gate decides, per struct, whether its output file must be written
//! again given the schema file that declares it.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

/// Decides whether an output file is stale.
pub trait RegenerationGate {
    /// Returns true if `output` must be (re)generated from `source`.
    fn needs_generation(&self, source: &Path, output: &Path) -> bool;
}

/// Regenerates every file unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

impl RegenerationGate for Always {
    fn needs_generation(&self, _source: &Path, _output: &Path) -> bool {
        true
    }
}

/// Regenerates a file only when it is missing or older than its schema
/// source.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lazy;

impl RegenerationGate for Lazy {
    fn needs_generation(&self, source: &Path, output: &Path) -> bool {
        let source_time = match modified(source) {
            Ok(time) => time,
            Err(e) => {
                tracing::warn!("Can't stat schema source {}: {}", source.display(), e);
                return true;
            }
        };

        match modified(output) {
            Ok(output_time) => source_time > output_time,
            Err(_) => true,
        }
    }
}

impl<F> RegenerationGate for F
where
    F: Fn(&Path, &Path) -> bool,
{
    fn needs_generation(&self, source: &Path, output: &Path) -> bool {
        self(source, output)
    }
}

fn modified(path: &Path) -> std::io::Result<SystemTime> {
    fs::metadata(path)?.modified()
}
