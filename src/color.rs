use crate::error::LogoError;
use std::{fmt, str::FromStr};

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linearly interpolate towards `other`, `t` being clamped to [0, 1].
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 { (a as f32 + (b as f32 - a as f32) * t).round().clamp(0.0, 255.0) as u8 };
        Color::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    /// Parse a hex color, accepting `#rgb`, `#rrggbb` and the same without the leading `#`.
    pub fn from_hex(input: &str) -> Option<Self> {
        let hex = input.strip_prefix('#').unwrap_or(input);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let mut channels = hex.chars().map(|c| c.to_digit(16).map(|d| (d * 17) as u8));
                Some(Color::new(channels.next()??, channels.next()??, channels.next()??))
            }
            6 => {
                let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).ok();
                Some(Color::new(channel(0)?, channel(2)?, channel(4)?))
            }
            _ => None,
        }
    }

    /// Look up a named color.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        NAMED_COLORS.iter().find(|(candidate, _)| *candidate == name).map(|(_, color)| *color)
    }
}

impl FromStr for Color {
    type Err = LogoError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        Self::from_name(input)
            .or_else(|| Self::from_hex(input))
            .ok_or_else(|| LogoError::InvalidPalette(format!("'{input}' is not a valid color")))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        crossterm::style::Color::Rgb { r: color.r, g: color.g, b: color.b }
    }
}

const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::new(0, 0, 0)),
    ("white", Color::new(255, 255, 255)),
    ("red", Color::new(255, 0, 0)),
    ("green", Color::new(0, 128, 0)),
    ("lime", Color::new(0, 255, 0)),
    ("blue", Color::new(0, 0, 255)),
    ("yellow", Color::new(255, 255, 0)),
    ("cyan", Color::new(0, 255, 255)),
    ("aqua", Color::new(0, 255, 255)),
    ("magenta", Color::new(255, 0, 255)),
    ("fuchsia", Color::new(255, 0, 255)),
    ("orange", Color::new(255, 165, 0)),
    ("purple", Color::new(128, 0, 128)),
    ("violet", Color::new(238, 130, 238)),
    ("pink", Color::new(255, 192, 203)),
    ("hotpink", Color::new(255, 105, 180)),
    ("gold", Color::new(255, 215, 0)),
    ("navy", Color::new(0, 0, 128)),
    ("teal", Color::new(0, 128, 128)),
    ("indigo", Color::new(75, 0, 130)),
    ("crimson", Color::new(220, 20, 60)),
    ("coral", Color::new(255, 127, 80)),
    ("gray", Color::new(128, 128, 128)),
    ("grey", Color::new(128, 128, 128)),
    ("silver", Color::new(192, 192, 192)),
    ("skyblue", Color::new(135, 206, 235)),
    ("deepskyblue", Color::new(0, 191, 255)),
];
