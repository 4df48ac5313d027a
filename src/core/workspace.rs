//! Language workspace recognition (`$GOPATH/src/...`)

use super::config::{WORKSPACE_LABEL, WORKSPACE_SKIP, WORKSPACE_SOURCE_DIR};
use super::context::{strip_dir_prefix, Environment};
use super::segment::{PathSegment, PrefixClaim, SegmentationMode};

/// Claims `cwd` when it lies in the workspace source tree
///
/// The workspace glyph replaces `<root>/src`; the next two components
/// (host and owner) are skipped and the rest is shown joined.
pub fn recognize_workspace<'a>(cwd: &'a str, env: &Environment) -> Option<PrefixClaim<'a>> {
    let root = env.workspace_root.as_deref()?.trim_end_matches('/');
    let source_dir = format!("{root}/{WORKSPACE_SOURCE_DIR}");
    let rest = strip_dir_prefix(cwd, &source_dir)?;

    tracing::debug!(workspace = %source_dir, "path claimed by workspace");
    Some(PrefixClaim {
        segment: PathSegment::home(WORKSPACE_LABEL),
        rest,
        mode: SegmentationMode {
            skip: WORKSPACE_SKIP,
            joined: true,
        },
    })
}
