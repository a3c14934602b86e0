//! Display colors with an opacity channel.
//!
//! Colors are written in theme files as `#RRGGBB` or `#AARRGGBB` strings.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An sRGB color with a fractional alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_argb(0xFFFF_FFFF);
    pub const BLACK: Color = Color::from_argb(0xFF00_0000);
    pub const GRAY: Color = Color::from_argb(0xFF88_8888);
    pub const RED: Color = Color::from_argb(0xFFFF_0000);

    /// Build a color from a packed `0xAARRGGBB` value.
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            red: ((argb >> 16) & 0xFF) as u8,
            green: ((argb >> 8) & 0xFF) as u8,
            blue: (argb & 0xFF) as u8,
            alpha: ((argb >> 24) & 0xFF) as f32 / 255.0,
        }
    }

    /// Return the same color with a different opacity.
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Composite this color over an opaque background.
    ///
    /// Terminals have no alpha channel, so faded colors are flattened
    /// against the surface they are drawn on.
    pub fn blend_over(self, background: Color) -> Color {
        let alpha = self.alpha.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| -> u8 {
            (fg as f32 * alpha + bg as f32 * (1.0 - alpha)).round() as u8
        };
        Color {
            red: mix(self.red, background.red),
            green: mix(self.green, background.green),
            blue: mix(self.blue, background.blue),
            alpha: 1.0,
        }
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`.
    pub fn parse_hex(value: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidColor {
            value: value.to_string(),
        };

        let digits = value.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let packed = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            6 => Ok(Self::from_argb(0xFF00_0000 | packed)),
            8 => Ok(Self::from_argb(packed)),
            _ => Err(invalid()),
        }
    }

    /// Format as `#RRGGBB`, or `#AARRGGBB` when not fully opaque.
    pub fn to_hex(self) -> String {
        let alpha = (self.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        if alpha == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                alpha, self.red, self.green, self.blue
            )
        }
    }
}

impl TryFrom<String> for Color {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_argb_unpacks_channels() {
        let color = Color::from_argb(0xFF2C_C09C);
        assert_eq!(color.red, 0x2C);
        assert_eq!(color.green, 0xC0);
        assert_eq!(color.blue, 0x9C);
        assert_eq!(color.alpha, 1.0);
    }

    #[test]
    fn test_parse_hex_rgb() {
        let color = Color::parse_hex("#F26950").unwrap();
        assert_eq!(color, Color::from_argb(0xFFF2_6950));
    }

    #[test]
    fn test_parse_hex_argb_keeps_alpha() {
        let color = Color::parse_hex("#80FFFFFF").unwrap();
        assert!((color.alpha - 128.0 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_parse_hex_rejects_missing_hash() {
        assert!(matches!(
            Color::parse_hex("F26950"),
            Err(CoreError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_parse_hex_rejects_bad_length() {
        assert!(Color::parse_hex("#FFF").is_err());
        assert!(Color::parse_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_to_hex_opaque_is_six_digits() {
        assert_eq!(Color::from_argb(0xFF5A_55CA).to_hex(), "#5A55CA");
    }

    #[test]
    fn test_to_hex_translucent_is_eight_digits() {
        assert_eq!(Color::WHITE.with_alpha(0.0).to_hex(), "#00FFFFFF");
    }

    #[test]
    fn test_blend_over_full_alpha_is_foreground() {
        let fg = Color::from_argb(0xFFF2_6950);
        assert_eq!(fg.blend_over(Color::WHITE), fg);
    }

    #[test]
    fn test_blend_over_partial_alpha_moves_toward_background() {
        let fg = Color::BLACK.with_alpha(0.5);
        let blended = fg.blend_over(Color::WHITE);
        assert_eq!(blended.red, 128);
        assert_eq!(blended.alpha, 1.0);
    }

    #[test]
    fn test_serde_uses_hex_strings() {
        let json = serde_json::to_string(&Color::RED).unwrap();
        assert_eq!(json, "\"#FF0000\"");
        let back: Color = serde_json::from_str("\"#2CC09C\"").unwrap();
        assert_eq!(back, Color::from_argb(0xFF2C_C09C));
    }
}
