//! Public API for the core module.
//!
//! This module provides the stable public API for core functionality including:
//! - Path segmentation and prefix detection
//! - Project root discovery and ecosystem classification
//! - Depth truncation
//! - Options and environment context
//!
//! Internal implementation details are not exposed through this API.

// Segment types
pub use super::segment::{PathSegment, PrefixClaim, SegmentKind, SegmentationMode};

// Detection
pub use super::ecosystem::{classify, Ecosystem, ECOSYSTEMS, GENERIC_VCS};
pub use super::root::find_vcs_root;
pub use super::workspace::recognize_workspace;

// Segmentation
pub use super::segmenter::{apply_skip, cwd_to_segments, resolve_cwd, split_components};

// Truncation
pub use super::truncate::{dir_only, truncate_segments, Advisory, Truncation};

// Configuration
pub use super::config::{CwdMode, CwdOptions};
pub use super::context::{strip_dir_prefix, Environment};
