//! Destination for formatted segments

use serde::Serialize;

/// Separator drawn after a segment
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Separator {
    pub symbol: String,
    pub foreground: u8,
}

/// A formatted segment ready for the prompt renderer
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub content: String,
    pub foreground: u8,
    pub background: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<Separator>,
}

/// Receives segments in display order
///
/// `origin` is `"cwd"` for the final directory and `"cwd-path"` for the
/// segments leading up to it.
pub trait SegmentSink {
    fn append_segment(&mut self, origin: &str, segment: Segment);
}

/// Segment tagged with the origin it was appended under
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Emitted {
    pub origin: String,
    #[serde(flatten)]
    pub segment: Segment,
}

/// Sink that collects everything appended to it
#[derive(Clone, Debug, Default)]
pub struct VecSink {
    pub segments: Vec<Emitted>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents in order, without colors
    pub fn contents(&self) -> Vec<&str> {
        self.segments
            .iter()
            .map(|e| e.segment.content.as_str())
            .collect()
    }
}

impl SegmentSink for VecSink {
    fn append_segment(&mut self, origin: &str, segment: Segment) {
        self.segments.push(Emitted {
            origin: origin.to_string(),
            segment,
        });
    }
}
