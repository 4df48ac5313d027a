//! Command implementations driven by the binary

pub mod cwd;

pub use cwd::{
    abbreviate_home, handle_cwd_command, render_text, segment_cwd, segment_cwd_with_probe,
    CwdContext,
};
