//! # powerline-cwd
//!
//! `powerline-cwd` turns a shell working directory into the compact, colored
//! path segments of a powerline-style prompt. It powers the `powerline-cwd` CLI.
//!
//! ## Core Features
//!
//! - **Project Detection**: The nearest `.git` root replaces the path above it,
//!   labeled by ecosystem (`package.json`, `composer.json`, `Gemfile`, ...).
//! - **Workspace Detection**: Paths under `$GOPATH/src` collapse to a workspace glyph.
//! - **Home Abbreviation**: The home directory is shown as `~`.
//! - **Depth Truncation**: Long paths keep their head and tail around an ellipsis.
//! - **Shell Escaping**: Segment text is escaped for bash or zsh prompts.
//!
//! ## Example
//!
//! ```rust,no_run
//! use powerline_cwd::commands::{segment_cwd, CwdContext};
//! use powerline_cwd::core::Environment;
//! use powerline_cwd::render::VecSink;
//!
//! let ctx = CwdContext {
//!     env: Environment::from_env(),
//!     ..CwdContext::default()
//! };
//! let mut sink = VecSink::new();
//! segment_cwd("/home/me/code/project", &ctx, &mut sink);
//! for emitted in &sink.segments {
//!     println!("{}: {}", emitted.origin, emitted.segment.content);
//! }
//! ```

pub mod commands;
pub mod core;
pub mod render;
pub mod utils;
