//! Read-only environment lookups used by segmentation

use super::config::{HOME_VAR, PWD_VAR, WORKSPACE_ROOT_VAR};

/// Snapshot of the environment values the segmenter depends on
///
/// Built once per invocation and passed explicitly, so segmentation stays a
/// pure function of its inputs. Empty values are stored as `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Environment {
    /// Home directory, abbreviated to `~`
    pub home: Option<String>,
    /// Language workspace root (`GOPATH`)
    pub workspace_root: Option<String>,
    /// Fallback working directory when the caller passes an empty path
    pub pwd: Option<String>,
}

impl Environment {
    /// Captures `HOME`, `GOPATH` and `PWD` from the process environment
    ///
    /// Falls back to the platform home directory when `HOME` is unset.
    pub fn from_env() -> Self {
        let home = non_empty(std::env::var(HOME_VAR).ok()).or_else(|| {
            dirs::home_dir().and_then(|p| non_empty(p.to_str().map(str::to_string)))
        });

        Self {
            home,
            workspace_root: non_empty(std::env::var(WORKSPACE_ROOT_VAR).ok()),
            pwd: non_empty(std::env::var(PWD_VAR).ok()),
        }
    }

    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.home = non_empty(Some(home.into()));
        self
    }

    pub fn with_workspace_root(mut self, root: impl Into<String>) -> Self {
        self.workspace_root = non_empty(Some(root.into()));
        self
    }

    pub fn with_pwd(mut self, pwd: impl Into<String>) -> Self {
        self.pwd = non_empty(Some(pwd.into()));
        self
    }

    /// Home directory without trailing separators, if usable as a prefix
    pub fn home_prefix(&self) -> Option<&str> {
        self.home.as_deref().map(trim_trailing_separators).filter(|h| !h.is_empty())
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn trim_trailing_separators(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Returns the remainder of `path` after `prefix` when `prefix` names `path`
/// itself or one of its ancestor directories
///
/// `/home/u2` is not under `/home/u`.
pub fn strip_dir_prefix<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}
