//! Per-segment shortening, escaping and coloring

use super::shell::ShellInfo;
use super::sink::{Segment, SegmentSink, Separator};
use super::theme::Theme;
use crate::core::config::{ORIGIN_CWD, ORIGIN_CWD_PATH};
use crate::core::PathSegment;

/// Cuts `text` to at most `max_size` characters; `max_size <= 0` disables it
pub fn maybe_shorten_name(text: &str, max_size: i32) -> &str {
    let Ok(max_size) = usize::try_from(max_size) else {
        return text;
    };
    if max_size == 0 {
        return text;
    }
    match text.char_indices().nth(max_size) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

/// Picks `(foreground, background)` for a segment
pub fn segment_colors(segment: &PathSegment, is_last: bool, theme: &Theme) -> (u8, u8) {
    if segment.is_home() && theme.home_special_display {
        (theme.home_fg, theme.home_bg)
    } else if is_last {
        (theme.cwd_fg, theme.path_bg)
    } else {
        (theme.path_fg, theme.path_bg)
    }
}

/// Formats one segment given its position
pub fn format_segment(
    segment: &PathSegment,
    is_last: bool,
    max_dir_size: i32,
    theme: &Theme,
    shell: &ShellInfo,
) -> Segment {
    let (foreground, background) = segment_colors(segment, is_last, theme);
    let content = shell.escape(maybe_shorten_name(&segment.text, max_dir_size));

    let special_home = segment.is_home() && theme.home_special_display;
    let separator = (!special_home && !is_last).then(|| Separator {
        symbol: theme.thin_separator.clone(),
        foreground: theme.separator_fg,
    });

    Segment {
        content,
        foreground,
        background,
        separator,
    }
}

/// Formats `segments` and appends them to `sink` in order
pub fn format_segments(
    segments: &[PathSegment],
    max_dir_size: i32,
    theme: &Theme,
    shell: &ShellInfo,
    sink: &mut dyn SegmentSink,
) {
    let last = segments.len().saturating_sub(1);
    for (idx, segment) in segments.iter().enumerate() {
        let is_last = idx == last;
        let origin = if is_last { ORIGIN_CWD } else { ORIGIN_CWD_PATH };
        sink.append_segment(
            origin,
            format_segment(segment, is_last, max_dir_size, theme, shell),
        );
    }
}
