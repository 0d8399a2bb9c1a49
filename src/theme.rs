//! Particle palette
//!
//! Colors are kept as plain RGB triples so the core stays free of any
//! rendering crate; front ends convert at draw time.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` string
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Convert a `[0, 1]` alpha to an 8-bit channel, clamping out-of-range input
pub fn alpha_byte(alpha: f32) -> u8 {
    (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("expected #rrggbb color, got {s:?}")))
    }
}

pub mod colors {
    use super::Rgb;

    pub const CYAN: Rgb = Rgb::new(0x00, 0xf2, 0xff);   // #00f2ff
    pub const VIOLET: Rgb = Rgb::new(0x70, 0x00, 0xff); // #7000ff

    /// Connection lines are always white; only alpha varies
    pub const LINK: Rgb = Rgb::new(255, 255, 255);

    pub const PALETTE: [Rgb; 2] = [CYAN, VIOLET];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parse() {
        assert_eq!(Rgb::from_hex("#00f2ff"), Some(colors::CYAN));
        assert_eq!(Rgb::from_hex("#7000FF"), Some(colors::VIOLET));
        assert_eq!(Rgb::from_hex("00f2ff"), None);
        assert_eq!(Rgb::from_hex("#00f2f"), None);
        assert_eq!(Rgb::from_hex("#zzzzzz"), None);
        assert_eq!(Rgb::from_hex("#+f+f+f"), None);
        assert_eq!(Rgb::from_hex("#-1-1-1"), None);
    }

    #[test]
    fn test_alpha_byte() {
        assert_eq!(alpha_byte(0.0), 0);
        assert_eq!(alpha_byte(1.0), 255);
        assert_eq!(alpha_byte(0.5), 128);
        // 0.1 - 50/1000
        assert_eq!(alpha_byte(0.05), 13);
        assert_eq!(alpha_byte(-0.2), 0);
        assert_eq!(alpha_byte(3.0), 255);
    }

    #[test]
    fn test_hex_display() {
        assert_eq!(colors::VIOLET.to_string(), "#7000ff");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&colors::CYAN).unwrap();
        assert_eq!(json, r##""#00f2ff""##);
        let back: Rgb = serde_json::from_str(&json).unwrap();
        assert_eq!(back, colors::CYAN);
        assert!(serde_json::from_str::<Rgb>(r#""red""#).is_err());
    }
}
