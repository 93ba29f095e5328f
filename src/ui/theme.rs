use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Brand colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Notice colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_page: ColorSpec,
    pub footer_form: ColorSpec,
    pub footer_debug: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    /// Parse a `#rrggbb` string.
    ///
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(ColorSpec::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::new(125, 207, 255),
            secondary: ColorSpec::new(158, 206, 106),
            accent: ColorSpec::new(255, 159, 196),
            banner: ColorSpec::new(255, 159, 196),
            text: ColorSpec::new(169, 177, 214),
            text_secondary: ColorSpec::new(192, 202, 245),
            text_muted: ColorSpec::new(117, 121, 148),
            background: ColorSpec::new(26, 27, 38),
            surface: ColorSpec::new(36, 40, 59),
            success: ColorSpec::new(158, 206, 106),
            warning: ColorSpec::new(255, 202, 40),
            error: ColorSpec::new(247, 118, 142),
            info: ColorSpec::new(125, 207, 255),
            border_active: ColorSpec::new(125, 207, 255),
            border_normal: ColorSpec::new(117, 121, 148),
            highlight_bg: ColorSpec::new(125, 207, 255),
            highlight_fg: ColorSpec::new(26, 27, 38),
            footer_page: ColorSpec::new(125, 207, 255),
            footer_form: ColorSpec::new(255, 202, 40),
            footer_debug: ColorSpec::new(158, 206, 106),
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec::new(196, 167, 231),
            secondary: ColorSpec::new(49, 116, 143),
            accent: ColorSpec::new(235, 111, 146),
            banner: ColorSpec::new(235, 111, 146),
            text: ColorSpec::new(224, 222, 244),
            text_secondary: ColorSpec::new(144, 140, 170),
            text_muted: ColorSpec::new(86, 82, 100),
            background: ColorSpec::new(25, 23, 36),
            surface: ColorSpec::new(31, 29, 43),
            success: ColorSpec::new(49, 116, 143),
            warning: ColorSpec::new(246, 193, 119),
            error: ColorSpec::new(235, 111, 146),
            info: ColorSpec::new(156, 207, 216),
            border_active: ColorSpec::new(196, 167, 231),
            border_normal: ColorSpec::new(144, 140, 170),
            highlight_bg: ColorSpec::new(156, 207, 216),
            highlight_fg: ColorSpec::new(25, 23, 36),
            footer_page: ColorSpec::new(156, 207, 216),
            footer_form: ColorSpec::new(246, 193, 119),
            footer_debug: ColorSpec::new(49, 116, 143),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::new(189, 147, 249),
            secondary: ColorSpec::new(139, 233, 253),
            accent: ColorSpec::new(255, 121, 198),
            banner: ColorSpec::new(255, 121, 198),
            text: ColorSpec::new(248, 248, 242),
            text_secondary: ColorSpec::new(189, 147, 249),
            text_muted: ColorSpec::new(98, 114, 164),
            background: ColorSpec::new(40, 42, 54),
            surface: ColorSpec::new(68, 71, 90),
            success: ColorSpec::new(80, 250, 123),
            warning: ColorSpec::new(255, 184, 108),
            error: ColorSpec::new(255, 85, 85),
            info: ColorSpec::new(139, 233, 253),
            border_active: ColorSpec::new(189, 147, 249),
            border_normal: ColorSpec::new(98, 114, 164),
            highlight_bg: ColorSpec::new(139, 233, 253),
            highlight_fg: ColorSpec::new(40, 42, 54),
            footer_page: ColorSpec::new(139, 233, 253),
            footer_form: ColorSpec::new(255, 184, 108),
            footer_debug: ColorSpec::new(80, 250, 123),
        }
    }

    /// Catppuccin Mocha theme.
    ///
    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha".to_string(),
            primary: ColorSpec::new(203, 166, 247),
            secondary: ColorSpec::new(166, 227, 161),
            accent: ColorSpec::new(250, 179, 135),
            banner: ColorSpec::new(245, 189, 230),
            text: ColorSpec::new(205, 214, 244),
            text_secondary: ColorSpec::new(186, 194, 222),
            text_muted: ColorSpec::new(166, 173, 200),
            background: ColorSpec::new(17, 17, 27),
            surface: ColorSpec::new(24, 24, 37),
            success: ColorSpec::new(166, 227, 161),
            warning: ColorSpec::new(249, 226, 175),
            error: ColorSpec::new(243, 139, 168),
            info: ColorSpec::new(137, 180, 250),
            border_active: ColorSpec::new(203, 166, 247),
            border_normal: ColorSpec::new(166, 173, 200),
            highlight_bg: ColorSpec::new(137, 180, 250),
            highlight_fg: ColorSpec::new(17, 17, 27),
            footer_page: ColorSpec::new(137, 180, 250),
            footer_form: ColorSpec::new(249, 226, 175),
            footer_debug: ColorSpec::new(166, 227, 161),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine" => Some(Self::rose_pine()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine".to_string(),
            "dracula".to_string(),
            "catppuccin-mocha".to_string(),
        ]
    }

    /// Return the theme following this one in [`available_themes`](Self::available_themes).
    ///
    pub fn next(&self) -> Theme {
        let themes = Self::available_themes();
        let next = themes
            .iter()
            .position(|name| name == &self.name)
            .map_or(0, |index| (index + 1) % themes.len());
        Self::from_name(&themes[next]).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_listed_theme_resolves() {
        for name in Theme::available_themes() {
            assert_eq!(Theme::from_name(&name).map(|t| t.name), Some(name));
        }
        assert!(Theme::from_name("solarized").is_none());
    }

    #[test]
    fn test_next_theme_wraps() {
        let last = Theme::catppuccin_mocha();
        assert_eq!(last.next().name, "tokyo-night");
        assert_eq!(Theme::default().next().name, "rose-pine");
    }

    #[test]
    fn test_color_from_hex() {
        assert_eq!(
            ColorSpec::from_hex("#22d3ee"),
            Some(ColorSpec::new(0x22, 0xd3, 0xee))
        );
        assert_eq!(ColorSpec::from_hex("22d3ee"), None);
        assert_eq!(ColorSpec::from_hex("#22d3e"), None);
        assert_eq!(ColorSpec::from_hex("#gg0000"), None);
    }
}
