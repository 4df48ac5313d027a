//! Project ecosystem classification by marker files

use std::path::Path;

use crate::utils::Probe;

/// A project ecosystem recognized by a marker file or directory in its root
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ecosystem {
    pub name: &'static str,
    /// File or directory whose presence in the root identifies the ecosystem
    pub marker: &'static str,
    /// Label shown in place of the project's parent directories
    pub label: &'static str,
}

/// Label used when a root is found but no marker matches
pub const GENERIC_VCS: Ecosystem = Ecosystem {
    name: "git",
    marker: ".git",
    label: "Git", // github
};

/// Ecosystems in priority order; the first marker found wins
///
/// `package.json` comes first because it commonly sits alongside the others.
pub const ECOSYSTEMS: &[Ecosystem] = &[
    Ecosystem {
        name: "javascript",
        marker: "package.json",
        label: "JS",
    },
    Ecosystem {
        name: "php",
        marker: "composer.json",
        label: "🐘",
    },
    Ecosystem {
        name: "ruby",
        marker: "Gemfile",
        label: "💎",
    },
    Ecosystem {
        name: "perl",
        marker: "cpanfile",
        label: "🐪",
    },
    Ecosystem {
        name: "python",
        marker: "__pycache__",
        label: "Py",
    },
];

/// Picks the ecosystem of the project rooted at `root`
pub fn classify(root: &Path, probe: &dyn Probe) -> &'static Ecosystem {
    let ecosystem = ECOSYSTEMS
        .iter()
        .find(|ecosystem| probe.exists(root, ecosystem.marker))
        .unwrap_or(&GENERIC_VCS);

    tracing::debug!(
        root = %root.display(),
        ecosystem = ecosystem.name,
        "classified project root"
    );
    ecosystem
}
