//! Version-control root discovery

use std::path::{Path, PathBuf};

use super::config::{FILESYSTEM_ROOT, VCS_MARKER};
use crate::utils::Probe;

/// Walks up from `start` to the nearest directory containing a `.git` entry
///
/// Stops without a match once the candidate becomes the filesystem root or
/// empty. The root itself is never reported as a project root. Both `.git`
/// directories and `.git` files (worktrees, submodules) count as markers.
pub fn find_vcs_root(start: &Path, probe: &dyn Probe) -> Option<PathBuf> {
    let mut candidate = Some(start);

    while let Some(dir) = candidate {
        if dir.as_os_str().is_empty() || dir == Path::new(FILESYSTEM_ROOT) {
            break;
        }
        if probe.exists(dir, VCS_MARKER) {
            tracing::debug!(root = %dir.display(), "found version-control root");
            return Some(dir.to_path_buf());
        }
        candidate = dir.parent();
    }

    None
}
