//! Color theme for path segments

/// Thin separator glyph from powerline-patched fonts
pub const THIN_SEPARATOR: &str = "\u{E0B1}";

/// 256-color indices used by the cwd segments
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Give home-kind segments their own colors and no trailing separator
    pub home_special_display: bool,
    pub home_fg: u8,
    pub home_bg: u8,
    pub path_fg: u8,
    pub path_bg: u8,
    pub cwd_fg: u8,
    pub separator_fg: u8,
    pub thin_separator: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            home_special_display: true,
            home_fg: 15,
            home_bg: 31,
            path_fg: 250,
            path_bg: 237,
            cwd_fg: 254,
            separator_fg: 244,
            thin_separator: THIN_SEPARATOR.to_string(),
        }
    }
}

impl Theme {
    /// Theme without the patched-font separator glyph
    pub fn compatible() -> Self {
        Self {
            thin_separator: "\u{276F}".to_string(),
            ..Self::default()
        }
    }
}
