//! Shell-specific escaping of prompt text

use anyhow::Result;

/// Escape sequences for characters the shell would otherwise expand
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShellInfo {
    pub name: &'static str,
    pub escaped_backslash: &'static str,
    pub escaped_backtick: &'static str,
    pub escaped_dollar: &'static str,
}

pub const BASH: ShellInfo = ShellInfo {
    name: "bash",
    escaped_backslash: r"\\\\",
    escaped_backtick: "\\`",
    escaped_dollar: r"\$",
};

pub const ZSH: ShellInfo = ShellInfo {
    name: "zsh",
    escaped_backslash: r"\\",
    escaped_backtick: "\\`",
    escaped_dollar: r"\$",
};

/// Output used verbatim, e.g. when printed by a script
pub const BARE: ShellInfo = ShellInfo {
    name: "bare",
    escaped_backslash: r"\",
    escaped_backtick: "`",
    escaped_dollar: "$",
};

const SHELLS: &[ShellInfo] = &[BASH, ZSH, BARE];

impl ShellInfo {
    /// Looks up a shell by name
    pub fn by_name(name: &str) -> Result<Self> {
        SHELLS
            .iter()
            .find(|shell| shell.name == name)
            .copied()
            .ok_or_else(|| anyhow::anyhow!("Unsupported shell '{name}' (expected bash, zsh or bare)"))
    }

    /// Escapes backslash, backtick and dollar characters
    pub fn escape(&self, text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '\\' => escaped.push_str(self.escaped_backslash),
                '`' => escaped.push_str(self.escaped_backtick),
                '$' => escaped.push_str(self.escaped_dollar),
                _ => escaped.push(c),
            }
        }
        escaped
    }
}

impl Default for ShellInfo {
    fn default() -> Self {
        BARE
    }
}
