//! Configuration constants and settings

// Glyphs
pub const ELLIPSIS: &str = "\u{2026}";
pub const HOME_LABEL: &str = "~";
pub const ROOT_LABEL: &str = "/";
pub const WORKSPACE_LABEL: &str = "🐭"; // go

// Path handling
pub const PATH_SEPARATOR: char = '/';
pub const FILESYSTEM_ROOT: &str = "/";

// Version-control marker looked up by the root finder
pub const VCS_MARKER: &str = ".git";

// Workspace convention: sources live under `<root>/src`
pub const WORKSPACE_SOURCE_DIR: &str = "src";
pub const WORKSPACE_SKIP: usize = 2; // host + owner, e.g. github.com/user

// Head segments kept by the truncator when the depth allows it
pub const MAX_HEAD_SEGMENTS: i32 = 2;

// CLI defaults
pub const DEFAULT_CWD_MAX_DEPTH: i32 = 5;
pub const DEFAULT_CWD_MAX_DIR_SIZE: i32 = -1; // disabled

// Origin tags handed to the rendering sink
pub const ORIGIN_CWD: &str = "cwd";
pub const ORIGIN_CWD_PATH: &str = "cwd-path";

// Environment variables
pub const HOME_VAR: &str = "HOME";
pub const WORKSPACE_ROOT_VAR: &str = "GOPATH";
pub const PWD_VAR: &str = "PWD";

/// Mode of operation for the cwd segment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CwdMode {
    /// Whole path as a single segment, home abbreviated to `~`
    Plain,
    /// Only the last directory segment
    DirOnly,
    /// Full segmentation with depth truncation
    #[default]
    Default,
}

impl CwdMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CwdMode::Plain => "plain",
            CwdMode::DirOnly => "dironly",
            CwdMode::Default => "default",
        }
    }
}

impl std::str::FromStr for CwdMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(CwdMode::Plain),
            "dironly" => Ok(CwdMode::DirOnly),
            "default" | "fancy" => Ok(CwdMode::Default),
            other => anyhow::bail!(
                "Unknown cwd mode '{other}' (expected plain, dironly or default)"
            ),
        }
    }
}

/// Options controlling how the working directory is segmented
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CwdOptions {
    pub mode: CwdMode,
    /// Maximum number of segments before collapsing; `<= 0` disables truncation
    pub max_depth: i32,
    /// Maximum characters per segment; `<= 0` disables shortening
    pub max_dir_size: i32,
}

impl Default for CwdOptions {
    fn default() -> Self {
        Self {
            mode: CwdMode::Default,
            max_depth: DEFAULT_CWD_MAX_DEPTH,
            max_dir_size: DEFAULT_CWD_MAX_DIR_SIZE,
        }
    }
}
