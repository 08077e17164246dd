//! ARGB colour values
//!
//! Colours are written the way Android resources write them: `#RGB`,
//! `#RRGGBB` or `#AARRGGBB`, plus a handful of named colours.

use std::fmt;

/// Scale applied to each RGB channel to derive a background shade.
/// Empirical: tuned by eye against the foreground colours, alpha is kept.
pub const BACKGROUND_SHADE: f64 = 0.3;

/// An 8-bit-per-channel colour with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const GRAY: Color = Color::rgb(0x88, 0x88, 0x88);
    pub const TRANSPARENT: Color = Color::argb(0x00, 0x00, 0x00, 0x00);

    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::argb(0xff, r, g, b)
    }

    /// Build from a packed `0xAARRGGBB` value
    pub const fn from_u32(argb: u32) -> Self {
        Self::argb(
            (argb >> 24) as u8,
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            argb as u8,
        )
    }

    /// Pack into `0xAARRGGBB`
    pub fn to_u32(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parse a hex (`#RGB`, `#RRGGBB`, `#AARRGGBB`) or named colour
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim();
        match s.strip_prefix('#') {
            Some(hex) => Self::parse_hex(hex),
            None => Self::named(s),
        }
    }

    fn parse_hex(hex: &str) -> Option<Color> {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(hex, 16).ok()?;
        match hex.len() {
            3 => {
                let expand = |nibble: u32| (nibble * 0x11) as u8;
                Some(Color::rgb(
                    expand((value >> 8) & 0xf),
                    expand((value >> 4) & 0xf),
                    expand(value & 0xf),
                ))
            }
            6 => Some(Color::from_u32(0xff00_0000 | value)),
            8 => Some(Color::from_u32(value)),
            _ => None,
        }
    }

    fn named(name: &str) -> Option<Color> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Color::BLACK,
            "white" => Color::WHITE,
            "gray" | "grey" => Color::GRAY,
            "red" => Color::rgb(0xff, 0x00, 0x00),
            "green" => Color::rgb(0x00, 0xff, 0x00),
            "blue" => Color::rgb(0x00, 0x00, 0xff),
            "yellow" => Color::rgb(0xff, 0xff, 0x00),
            "cyan" => Color::rgb(0x00, 0xff, 0xff),
            "magenta" => Color::rgb(0xff, 0x00, 0xff),
            "transparent" => Color::TRANSPARENT,
            _ => return None,
        };
        Some(color)
    }

    /// The background shade of this colour: RGB scaled by [`BACKGROUND_SHADE`]
    pub fn darken(self) -> Color {
        let scale = |c: u8| (c as f64 * BACKGROUND_SHADE) as u8;
        Color::argb(self.a, scale(self.r), scale(self.g), scale(self.b))
    }

    /// `#rrggbb` without alpha, for CSS/SVG attributes
    pub fn to_rgb_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a 0..=1 opacity
    pub fn opacity(self) -> f64 {
        self.a as f64 / 255.0
    }

    pub fn is_opaque(self) -> bool {
        self.a == 0xff
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.to_u32())
    }
}
