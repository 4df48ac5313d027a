//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;

pub use self::fixtures::{TestTree, TestTreeBuilder};

use powerline_cwd::commands::CwdContext;
use powerline_cwd::core::{CwdMode, CwdOptions, Environment};

/// Context with default theme and bare shell for the given mode and depth
pub fn context(env: Environment, mode: CwdMode, max_depth: i32) -> CwdContext {
    CwdContext {
        options: CwdOptions {
            mode,
            max_depth,
            max_dir_size: -1,
        },
        env,
        ..CwdContext::default()
    }
}
