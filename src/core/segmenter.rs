//! Working-directory segmentation
//!
//! Turns an absolute path into typed display segments. A prefix detector
//! may claim the start of the path and replace it with a single labeled
//! segment; the components that remain are then emitted either one per
//! segment or joined into one.
//!
//! Detectors run in order, first claim wins:
//! 1. language workspace source tree (`$GOPATH/src`)
//! 2. version-control project root, labeled by ecosystem
//! 3. home directory (`~`)
//! 4. the filesystem root itself (`/`)

use std::path::Path;

use super::config::{FILESYSTEM_ROOT, PATH_SEPARATOR};
use super::context::{strip_dir_prefix, Environment};
use super::ecosystem::classify;
use super::root::find_vcs_root;
use super::segment::{PathSegment, PrefixClaim, SegmentationMode};
use super::workspace::recognize_workspace;
use crate::utils::Probe;

/// Splits `cwd` into display segments
///
/// An empty `cwd` falls back to the environment's `PWD`. A non-empty path
/// always yields at least one segment.
pub fn cwd_to_segments(cwd: &str, env: &Environment, probe: &dyn Probe) -> Vec<PathSegment> {
    let cwd = resolve_cwd(cwd, env);
    let mut segments = Vec::new();

    let (rest, mode) = match claim_prefix(cwd, env, probe) {
        Some(claim) => {
            segments.push(claim.segment);
            (claim.rest, claim.mode)
        }
        None => (cwd, SegmentationMode::default()),
    };

    let names = split_components(rest);
    let names = apply_skip(&names, mode.skip);

    if !names.is_empty() {
        if mode.joined {
            let separator = PATH_SEPARATOR.to_string();
            segments.push(PathSegment::plain(names.join(separator.as_str())));
        } else {
            segments.extend(names.iter().map(|name| PathSegment::plain(*name)));
        }
    }

    segments
}

/// Returns `cwd`, or the environment's `PWD` when `cwd` is empty
pub fn resolve_cwd<'a>(cwd: &'a str, env: &'a Environment) -> &'a str {
    if cwd.is_empty() {
        env.pwd.as_deref().unwrap_or("")
    } else {
        cwd
    }
}

/// Runs the prefix detectors in priority order
fn claim_prefix<'a>(cwd: &'a str, env: &Environment, probe: &dyn Probe) -> Option<PrefixClaim<'a>> {
    if let Some(claim) = recognize_workspace(cwd, env) {
        return Some(claim);
    }

    if let Some(claim) = claim_project_root(cwd, probe) {
        return Some(claim);
    }

    if let Some(rest) = env.home_prefix().and_then(|home| strip_dir_prefix(cwd, home)) {
        return Some(PrefixClaim {
            segment: PathSegment::home_dir(),
            rest,
            mode: SegmentationMode::default(),
        });
    }

    if cwd == FILESYSTEM_ROOT {
        return Some(PrefixClaim {
            segment: PathSegment::root(),
            rest: "",
            mode: SegmentationMode::default(),
        });
    }

    None
}

/// Replaces everything above the project root with the ecosystem label
///
/// The root's own directory name stays in the remainder.
fn claim_project_root<'a>(cwd: &'a str, probe: &dyn Probe) -> Option<PrefixClaim<'a>> {
    let root = find_vcs_root(Path::new(cwd), probe)?;
    let ecosystem = classify(&root, probe);

    let parent = root.parent().and_then(Path::to_str).unwrap_or("");
    let rest = cwd.strip_prefix(parent).unwrap_or(cwd);

    Some(PrefixClaim {
        segment: PathSegment::home(ecosystem.label),
        rest,
        mode: SegmentationMode {
            skip: 0,
            joined: true,
        },
    })
}

/// Splits a path into its non-empty components
pub fn split_components(path: &str) -> Vec<&str> {
    path.trim_matches(PATH_SEPARATOR)
        .split(PATH_SEPARATOR)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Drops the first `skip` components
///
/// When that would leave nothing and at least two components exist, only
/// the last one is kept instead. Fewer than two components are returned
/// unchanged.
pub fn apply_skip<'a, 'b>(names: &'b [&'a str], skip: usize) -> &'b [&'a str] {
    let count = names.len();
    if skip < count {
        &names[skip..]
    } else if count >= 2 {
        &names[count - 1..]
    } else {
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::segment::SegmentKind;
    use std::collections::HashSet;
    use std::path::PathBuf;

    struct FakeProbe(HashSet<PathBuf>);

    impl FakeProbe {
        fn new(entries: &[&str]) -> Self {
            Self(entries.iter().map(PathBuf::from).collect())
        }
    }

    impl Probe for FakeProbe {
        fn exists(&self, base: &Path, name: &str) -> bool {
            self.0.contains(&base.join(name))
        }
    }

    fn texts(segments: &[PathSegment]) -> Vec<&str> {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    fn home_env() -> Environment {
        Environment::default().with_home("/home/u")
    }

    #[test]
    fn test_apply_skip_boundaries() {
        let names = ["a", "b", "c"];
        assert_eq!(apply_skip(&names, 0), &["a", "b", "c"]);
        assert_eq!(apply_skip(&names, 2), &["c"]);
        // skip == count keeps the last component
        assert_eq!(apply_skip(&names, 3), &["c"]);
        // skip > count keeps the last component
        assert_eq!(apply_skip(&names, 5), &["c"]);
        assert_eq!(apply_skip(&["a", "b"], 2), &["b"]);
    }

    #[test]
    fn test_apply_skip_with_fewer_than_two() {
        assert_eq!(apply_skip(&["a"], 2), &["a"]);
        assert_eq!(apply_skip(&["a"], 1), &["a"]);
        assert!(apply_skip(&[], 2).is_empty());
    }

    #[test]
    fn test_split_components() {
        assert_eq!(split_components("/a/b/"), vec!["a", "b"]);
        assert_eq!(split_components("a"), vec!["a"]);
        assert_eq!(split_components("/a//b"), vec!["a", "b"]);
        assert!(split_components("").is_empty());
        assert!(split_components("/").is_empty());
    }

    #[test]
    fn test_home_descendant() {
        let segments = cwd_to_segments("/home/u/proj", &home_env(), &FakeProbe::new(&[]));
        assert_eq!(
            segments,
            vec![PathSegment::home_dir(), PathSegment::plain("proj")]
        );
    }

    #[test]
    fn test_home_itself() {
        let segments = cwd_to_segments("/home/u", &home_env(), &FakeProbe::new(&[]));
        assert_eq!(segments, vec![PathSegment::home_dir()]);
    }

    #[test]
    fn test_sibling_of_home_is_not_home() {
        let segments = cwd_to_segments("/home/u2/x", &home_env(), &FakeProbe::new(&[]));
        assert_eq!(texts(&segments), vec!["home", "u2", "x"]);
        assert!(segments.iter().all(|s| s.kind == SegmentKind::Plain));
    }

    #[test]
    fn test_filesystem_root() {
        let segments = cwd_to_segments("/", &home_env(), &FakeProbe::new(&[]));
        assert_eq!(segments, vec![PathSegment::root()]);
    }

    #[test]
    fn test_outside_home_splits_per_component() {
        let segments = cwd_to_segments("/usr/local/bin", &home_env(), &FakeProbe::new(&[]));
        assert_eq!(texts(&segments), vec!["usr", "local", "bin"]);
    }

    #[test]
    fn test_project_root_is_joined() {
        let probe = FakeProbe::new(&["/home/u/code/proj/.git", "/home/u/code/proj/Gemfile"]);
        let segments = cwd_to_segments("/home/u/code/proj/lib/x", &home_env(), &probe);
        assert_eq!(
            segments,
            vec![PathSegment::home("💎"), PathSegment::plain("proj/lib/x")]
        );
    }

    #[test]
    fn test_project_root_itself() {
        let probe = FakeProbe::new(&["/srv/proj/.git"]);
        let segments = cwd_to_segments("/srv/proj", &home_env(), &probe);
        assert_eq!(
            segments,
            vec![PathSegment::home("Git"), PathSegment::plain("proj")]
        );
    }

    #[test]
    fn test_project_root_directly_under_filesystem_root() {
        let probe = FakeProbe::new(&["/proj/.git"]);
        let segments = cwd_to_segments("/proj/src", &home_env(), &probe);
        assert_eq!(texts(&segments), vec!["Git", "proj/src"]);
    }

    #[test]
    fn test_workspace_takes_precedence_over_vcs_root() {
        let env = home_env().with_workspace_root("/home/u/go");
        let probe = FakeProbe::new(&["/home/u/go/src/github.com/u/proj/.git"]);
        let segments = cwd_to_segments("/home/u/go/src/github.com/u/proj/cmd", &env, &probe);
        assert_eq!(
            segments,
            vec![PathSegment::home("🐭"), PathSegment::plain("proj/cmd")]
        );
    }

    #[test]
    fn test_workspace_with_few_components() {
        let env = home_env().with_workspace_root("/go");
        let probe = FakeProbe::new(&[]);

        let segments = cwd_to_segments("/go/src/github.com/u", &env, &probe);
        assert_eq!(texts(&segments), vec!["🐭", "u"]);

        let segments = cwd_to_segments("/go/src/github.com", &env, &probe);
        assert_eq!(texts(&segments), vec!["🐭", "github.com"]);

        let segments = cwd_to_segments("/go/src", &env, &probe);
        assert_eq!(texts(&segments), vec!["🐭"]);
    }

    #[test]
    fn test_empty_path_uses_pwd() {
        let env = home_env().with_pwd("/home/u/docs");
        let segments = cwd_to_segments("", &env, &FakeProbe::new(&[]));
        assert_eq!(texts(&segments), vec!["~", "docs"]);
    }

    #[test]
    fn test_empty_path_without_pwd() {
        assert!(cwd_to_segments("", &home_env(), &FakeProbe::new(&[])).is_empty());
    }

    #[test]
    fn test_no_ellipsis_is_produced() {
        let segments = cwd_to_segments("/a/b/c/d/e/f", &home_env(), &FakeProbe::new(&[]));
        assert!(!segments.iter().any(PathSegment::is_ellipsis));
    }
}
