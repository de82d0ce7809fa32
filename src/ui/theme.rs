use ratatui::style::Color;

use crate::config::ThemeConfig;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x94, 0xa3, 0xb8);
pub const STAR_AMBER: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);

/// Brand colors resolved from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub brand_red: Color,
    pub brand_blue: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            brand_red: Color::Rgb(0xec, 0x13, 0x13),
            brand_blue: Color::Rgb(0x1e, 0x3a, 0x8a),
        }
    }
}

impl Theme {
    /// Resolve a validated [`ThemeConfig`]. Unparseable entries keep the default.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let fallback = Self::default();
        Self {
            brand_red: parse_color(&config.brand_red).unwrap_or(fallback.brand_red),
            brand_blue: parse_color(&config.brand_blue).unwrap_or(fallback.brand_blue),
        }
    }
}

/// Parse `#rrggbb` into an RGB color.
pub fn parse_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}
