//! Color definitions for regions and chrome

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Brighten color by a factor (1.0 = unchanged), saturating at white
    pub fn brighten(&self, factor: f32) -> Self {
        let f = factor.max(1.0);
        let scale = |c: u8| (c as f32 * f).min(255.0) as u8;
        Self {
            r: scale(self.r),
            g: scale(self.g),
            b: scale(self.b),
        }
    }
}

impl From<Color> for ratatui::style::Color {
    fn from(c: Color) -> Self {
        ratatui::style::Color::Rgb(c.r, c.g, c.b)
    }
}

/// Background of the map canvas
pub const BACKGROUND: Color = Color::new(0x0f, 0x17, 0x2a);
/// Ghost outline of the not-yet-acquired map
pub const OUTLINE: Color = Color::new(0x33, 0x41, 0x55);
/// Region border stroke
pub const STROKE: Color = Color::new(0xcb, 0xd5, 0xe1);
/// Playback and progress accents
pub const ACCENT: Color = Color::new(0x3b, 0x82, 0xf6);
/// Cost figures
pub const MONEY: Color = Color::new(0x34, 0xd3, 0x99);
/// Secondary text
pub const MUTED: Color = Color::new(0x64, 0x74, 0x8b);
/// Primary text
pub const TEXT: Color = Color::new(0xf1, 0xf5, 0xf9);
/// Fallback for records whose color fails to parse
pub const FALLBACK: Color = Color::new(0x64, 0x74, 0x8b);

/// Region fill, highlighted when selected or hovered
pub fn region_tint(base: Color, selected: bool, hovered: bool) -> Color {
    if selected || hovered {
        base.brighten(1.2)
    } else {
        base
    }
}
