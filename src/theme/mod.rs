//! Monokai Pro palette for the terminal renderers
//!
//! Colours are emitted as 24-bit ANSI escapes; a theme built with `new(false)` emits none.

/// Monokai Pro color palette
pub mod colors {
    pub type Rgb = (u8, u8, u8);

    pub const FG_BASE: Rgb = (0xfc, 0xfc, 0xfa); // #fcfcfa - Main text
    pub const FG_DIM: Rgb = (0x93, 0x92, 0x93); // #939293 - Dimmed text
    pub const FG_MUTED: Rgb = (0x72, 0x70, 0x72); // #727072 - Muted text

    pub const RED: Rgb = (0xff, 0x61, 0x88); // #ff6188
    pub const ORANGE: Rgb = (0xfc, 0x98, 0x67); // #fc9867
    pub const GREEN: Rgb = (0xa9, 0xdc, 0x76); // #a9dc76
    pub const CYAN: Rgb = (0x78, 0xdc, 0xe8); // #78dce8
    pub const PURPLE: Rgb = (0xab, 0x9d, 0xf2); // #ab9df2
}

use colors::Rgb;

#[derive(Clone)]
pub struct MonokaiTheme {
    enabled: bool,

    pub foreground: Rgb,
    pub foreground_dim: Rgb,
    pub foreground_muted: Rgb,

    pub accent_purple: Rgb,

    // Semantic
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
    pub info: Rgb,
}

impl Default for MonokaiTheme {
    fn default() -> Self {
        Self {
            enabled: true,
            foreground: colors::FG_BASE,
            foreground_dim: colors::FG_DIM,
            foreground_muted: colors::FG_MUTED,
            accent_purple: colors::PURPLE,
            success: colors::GREEN,
            warning: colors::ORANGE,
            error: colors::RED,
            info: colors::CYAN,
        }
    }
}

impl MonokaiTheme {
    pub fn new(color: bool) -> Self {
        Self {
            enabled: color,
            ..Self::default()
        }
    }

    pub fn paint(&self, text: &str, (r, g, b): Rgb) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
    }

    pub fn bold(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        format!("\x1b[1m{}\x1b[0m", text)
    }
}
