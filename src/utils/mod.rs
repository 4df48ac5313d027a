pub(crate) mod fs;
pub(crate) mod logging;

// Public API - utilities used by the core and the binary
pub use fs::{exists, FsProbe, Probe};
pub use logging::init_tracing;
