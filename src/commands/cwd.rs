//! Working-directory segment command implementation
//!
//! Dispatches on the configured cwd mode, runs segmentation and truncation,
//! and hands the formatted segments to a sink.

use anyhow::Result;

use crate::core::config::{HOME_LABEL, ORIGIN_CWD};
use crate::core::{
    cwd_to_segments, dir_only, resolve_cwd, strip_dir_prefix, truncate_segments, Advisory,
    CwdMode, CwdOptions, Environment,
};
use crate::render::{format_segments, Segment, SegmentSink, ShellInfo, Theme, VecSink};
use crate::utils::{FsProbe, Probe};

/// Everything one cwd rendering depends on
///
/// Groups the options, theme, shell escapes and environment snapshot so the
/// segment functions stay free of global lookups.
#[derive(Clone, Debug, Default)]
pub struct CwdContext {
    /// Mode, depth limit and per-segment size limit
    pub options: CwdOptions,
    /// Color pairs and separator symbol
    pub theme: Theme,
    /// Escape sequences of the target shell
    pub shell: ShellInfo,
    /// Home, workspace root and PWD fallback
    pub env: Environment,
}

impl CwdContext {
    pub fn new(options: CwdOptions, theme: Theme, shell: ShellInfo, env: Environment) -> Self {
        Self {
            options,
            theme,
            shell,
            env,
        }
    }
}

/// Emits the segments for `cwd` to `sink` using the real file system
pub fn segment_cwd(cwd: &str, ctx: &CwdContext, sink: &mut dyn SegmentSink) -> Option<Advisory> {
    segment_cwd_with_probe(cwd, ctx, &FsProbe, sink)
}

/// Emits the segments for `cwd` to `sink`
///
/// Returns an advisory when the depth limit had to be ignored. Nothing is
/// emitted if `cwd` and the `PWD` fallback are both empty.
pub fn segment_cwd_with_probe(
    cwd: &str,
    ctx: &CwdContext,
    probe: &dyn Probe,
    sink: &mut dyn SegmentSink,
) -> Option<Advisory> {
    let cwd = resolve_cwd(cwd, &ctx.env);
    tracing::debug!(cwd, mode = ctx.options.mode.as_str(), "rendering cwd");

    match ctx.options.mode {
        CwdMode::Plain => {
            if !cwd.is_empty() {
                sink.append_segment(
                    ORIGIN_CWD,
                    Segment {
                        content: abbreviate_home(cwd, &ctx.env),
                        foreground: ctx.theme.cwd_fg,
                        background: ctx.theme.path_bg,
                        separator: None,
                    },
                );
            }
            None
        }
        CwdMode::DirOnly => {
            let segments = dir_only(cwd_to_segments(cwd, &ctx.env, probe));
            format_segments(
                &segments,
                ctx.options.max_dir_size,
                &ctx.theme,
                &ctx.shell,
                sink,
            );
            None
        }
        CwdMode::Default => {
            let segments = cwd_to_segments(cwd, &ctx.env, probe);
            let truncation = truncate_segments(segments, ctx.options.max_depth);
            format_segments(
                &truncation.segments,
                ctx.options.max_dir_size,
                &ctx.theme,
                &ctx.shell,
                sink,
            );
            truncation.advisory
        }
    }
}

/// Replaces a leading home directory with `~`
pub fn abbreviate_home(cwd: &str, env: &Environment) -> String {
    match env.home_prefix().and_then(|home| strip_dir_prefix(cwd, home)) {
        Some(rest) => format!("{HOME_LABEL}{rest}"),
        None => cwd.to_string(),
    }
}

/// Renders `cwd` and prints the result to stdout
///
/// Text output puts each segment's content followed by its separator on one
/// line; JSON output lists every emitted segment with its origin and colors.
pub fn handle_cwd_command(cwd: &str, ctx: &CwdContext, json: bool) -> Result<()> {
    let mut sink = VecSink::new();

    if let Some(advisory) = segment_cwd(cwd, ctx, &mut sink) {
        eprintln!("⚠️  {advisory}");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&sink.segments)?);
    } else {
        println!("{}", render_text(&sink));
    }

    Ok(())
}

/// Joins emitted segments into a single prompt-ready line
pub fn render_text(sink: &VecSink) -> String {
    let parts: Vec<String> = sink
        .segments
        .iter()
        .map(|emitted| match &emitted.segment.separator {
            Some(separator) => format!("{} {}", emitted.segment.content, separator.symbol),
            None => emitted.segment.content.clone(),
        })
        .collect();
    parts.join(" ")
}
