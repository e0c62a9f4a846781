use thiserror::Error;

/// A 24-bit colour, kept free of any terminal crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// The page's signature green.
pub const DEFAULT_ACCENT: Rgb = Rgb(0x00, 0xfc, 0x00);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid hex colour {0:?} (expected #rrggbb)")]
pub struct ColorParseError(pub String);

impl Rgb {
    /// Parse `#rrggbb` or `rrggbb`.
    pub fn parse_hex(raw: &str) -> Result<Self, ColorParseError> {
        let hex = raw.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError(raw.to_string()));
        }
        let channel = |at: usize| {
            u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| ColorParseError(raw.to_string()))
        };
        Ok(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Linear blend toward `other`; `t = 0.0` is `self`, `t = 1.0` is `other`.
    #[must_use]
    pub fn mix(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
        Rgb(lerp(self.0, other.0), lerp(self.1, other.1), lerp(self.2, other.2))
    }
}
