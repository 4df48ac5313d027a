//! Path segment types

use serde::Serialize;

use super::config::{ELLIPSIS, HOME_LABEL, ROOT_LABEL};

/// Kind of a path segment; drives coloring and separator suppression
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    #[default]
    Plain,
    /// Home directory, project root or workspace root
    Home,
    /// The filesystem root itself
    Root,
    /// Placeholder for collapsed interior segments
    Ellipsis,
}

/// One labeled unit of the rendered path
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathSegment {
    pub text: String,
    pub kind: SegmentKind,
}

impl PathSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SegmentKind::Plain,
        }
    }

    pub fn home(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SegmentKind::Home,
        }
    }

    pub fn home_dir() -> Self {
        Self::home(HOME_LABEL)
    }

    pub fn root() -> Self {
        Self {
            text: ROOT_LABEL.to_string(),
            kind: SegmentKind::Root,
        }
    }

    pub fn ellipsis() -> Self {
        Self {
            text: ELLIPSIS.to_string(),
            kind: SegmentKind::Ellipsis,
        }
    }

    pub fn is_home(&self) -> bool {
        self.kind == SegmentKind::Home
    }

    pub fn is_ellipsis(&self) -> bool {
        self.kind == SegmentKind::Ellipsis
    }
}

/// How the components left after prefix detection are turned into segments
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentationMode {
    /// Leading components to drop
    pub skip: usize,
    /// Emit the remaining components as one slash-joined segment
    pub joined: bool,
}

/// Outcome of a prefix detector claiming the path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixClaim<'a> {
    /// Segment emitted in place of the claimed prefix
    pub segment: PathSegment,
    /// Path left after stripping the prefix
    pub rest: &'a str,
    pub mode: SegmentationMode,
}
