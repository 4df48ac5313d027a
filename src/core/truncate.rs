//! Depth limiting for path segments

use std::fmt;

use super::config::MAX_HEAD_SEGMENTS;
use super::segment::PathSegment;

/// Non-fatal notice returned alongside a result
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// The maximum depth was `<= 0`, so no truncation was applied
    MaxDepthIgnored { max_depth: i32 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::MaxDepthIgnored { max_depth } => write!(
                f,
                "Ignoring --cwd-max-depth argument since it's smaller than or equal to 0 (got {max_depth})"
            ),
        }
    }
}

/// Segments after applying a depth limit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Truncation {
    pub segments: Vec<PathSegment>,
    pub advisory: Option<Advisory>,
}

/// Collapses the middle of `segments` into an ellipsis when longer than `max_depth`
///
/// Keeps up to two head segments, then one ellipsis, then the tail
/// `segments[len + n_before - max_depth..]`. The result therefore holds
/// `max_depth + 1` segments.
pub fn truncate_segments(segments: Vec<PathSegment>, max_depth: i32) -> Truncation {
    if max_depth <= 0 {
        let advisory = Advisory::MaxDepthIgnored { max_depth };
        tracing::warn!(max_depth, "{advisory}");
        return Truncation {
            segments,
            advisory: Some(advisory),
        };
    }

    // max_depth > 0 here, so the conversion cannot fail
    let max_depth = usize::try_from(max_depth).unwrap_or(usize::MAX);
    let len = segments.len();
    if len <= max_depth {
        return Truncation {
            segments,
            advisory: None,
        };
    }

    let n_before = head_count(max_depth);
    let tail_start = len + n_before - max_depth;
    tracing::debug!(len, max_depth, n_before, tail_start, "truncating path segments");

    let mut truncated = Vec::with_capacity(max_depth + 1);
    truncated.extend_from_slice(&segments[..n_before]);
    truncated.push(PathSegment::ellipsis());
    truncated.extend_from_slice(&segments[tail_start..]);

    Truncation {
        segments: truncated,
        advisory: None,
    }
}

/// Head segments kept in front of the ellipsis: `min(2, max_depth - 1)`
fn head_count(max_depth: usize) -> usize {
    (max_depth - 1).min(MAX_HEAD_SEGMENTS as usize)
}

/// Keeps only the last segment
pub fn dir_only(mut segments: Vec<PathSegment>) -> Vec<PathSegment> {
    match segments.pop() {
        Some(last) => vec![last],
        None => Vec::new(),
    }
}
