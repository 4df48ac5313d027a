// Internal modules - not part of public API
pub(crate) mod context;
pub(crate) mod ecosystem;
pub(crate) mod root;
pub(crate) mod segment;
pub(crate) mod segmenter;
pub(crate) mod truncate;
pub(crate) mod workspace;

// Constants are read by the renderer and the binary
pub mod config;

// Public API - curated exports only
pub mod api;

// Re-export key items at module level for convenience
pub use api::*;
