//! powerline-cwd: working-directory segments for powerline-style prompts
//! Prints the current directory as compact prompt segments, either as a text line or as JSON.

use anyhow::Result;
use clap::{Arg, ArgAction, Command as ClapCommand};

use powerline_cwd::commands::{handle_cwd_command, CwdContext};
use powerline_cwd::core::config::{DEFAULT_CWD_MAX_DEPTH, DEFAULT_CWD_MAX_DIR_SIZE};
use powerline_cwd::core::{CwdMode, CwdOptions, Environment};
use powerline_cwd::render::{ShellInfo, Theme};
use powerline_cwd::utils::init_tracing;

fn build_cli() -> ClapCommand {
    ClapCommand::new("powerline-cwd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render the working directory as powerline prompt segments")
        .arg(
            Arg::new("cwd-mode")
                .long("cwd-mode")
                .value_name("MODE")
                .value_parser(["plain", "dironly", "default", "fancy"])
                .default_value("default")
                .help("How to display the current directory"),
        )
        .arg(
            Arg::new("cwd-max-depth")
                .long("cwd-max-depth")
                .value_name("N")
                .value_parser(clap::value_parser!(i32))
                .allow_negative_numbers(true)
                .help(format!(
                    "Maximum number of directories to show in path [default: {DEFAULT_CWD_MAX_DEPTH}]"
                )),
        )
        .arg(
            Arg::new("cwd-max-dir-size")
                .long("cwd-max-dir-size")
                .value_name("N")
                .value_parser(clap::value_parser!(i32))
                .allow_negative_numbers(true)
                .help("Maximum number of letters displayed for each directory (<= 0 disables)"),
        )
        .arg(
            Arg::new("shell")
                .long("shell")
                .value_parser(["bash", "zsh", "bare"])
                .default_value("bare")
                .help("Shell the output is escaped for"),
        )
        .arg(
            Arg::new("path")
                .long("path")
                .value_name("DIR")
                .help("Directory to render instead of the current one"),
        )
        .arg(
            Arg::new("compatible")
                .long("compatible")
                .help("Use a separator that renders without powerline-patched fonts")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print emitted segments as JSON")
                .action(ArgAction::SetTrue),
        )
}

fn main() -> Result<()> {
    init_tracing();

    let matches = build_cli().get_matches();

    let mode: CwdMode = matches
        .get_one::<String>("cwd-mode")
        .map(String::as_str)
        .unwrap_or("default")
        .parse()?;
    let options = CwdOptions {
        mode,
        max_depth: matches
            .get_one::<i32>("cwd-max-depth")
            .copied()
            .unwrap_or(DEFAULT_CWD_MAX_DEPTH),
        max_dir_size: matches
            .get_one::<i32>("cwd-max-dir-size")
            .copied()
            .unwrap_or(DEFAULT_CWD_MAX_DIR_SIZE),
    };

    let shell = ShellInfo::by_name(
        matches
            .get_one::<String>("shell")
            .map(String::as_str)
            .unwrap_or("bare"),
    )?;
    let theme = if matches.get_flag("compatible") {
        Theme::compatible()
    } else {
        Theme::default()
    };

    // An empty path falls back to $PWD inside the segmenter
    let cwd = match matches.get_one::<String>("path") {
        Some(path) => path.clone(),
        None => std::env::current_dir()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let ctx = CwdContext::new(options, theme, shell, Environment::from_env());
    handle_cwd_command(&cwd, &ctx, matches.get_flag("json"))
}
