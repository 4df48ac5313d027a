//! Formatting of path segments for a prompt renderer

pub mod formatter;
pub mod shell;
pub mod sink;
pub mod theme;

pub use formatter::{format_segment, format_segments, maybe_shorten_name, segment_colors};
pub use shell::ShellInfo;
pub use sink::{Emitted, Segment, SegmentSink, Separator, VecSink};
pub use theme::Theme;
