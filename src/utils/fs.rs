//! File system utilities

use std::path::Path;

/// Existence checks used by marker detection
///
/// Implementations must report any access error as "does not exist".
pub trait Probe {
    /// Returns true if `name` exists inside `base`
    fn exists(&self, base: &Path, name: &str) -> bool;
}

/// Probe backed by the real file system
#[derive(Clone, Copy, Debug, Default)]
pub struct FsProbe;

impl Probe for FsProbe {
    fn exists(&self, base: &Path, name: &str) -> bool {
        exists(base, name)
    }
}

/// Checks whether `base/name` exists, treating any stat error as absent
pub fn exists(base: &Path, name: &str) -> bool {
    std::fs::metadata(base.join(name)).is_ok()
}
