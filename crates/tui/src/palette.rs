//! Conversion from theme colors to terminal colors.

use projectmgt_core::Color;
use ratatui::style::Color as TermColor;

/// Convert an opaque color to a truecolor terminal color.
///
/// Translucent colors should go through [`flatten`] first; the alpha
/// channel is dropped here.
pub fn term(color: Color) -> TermColor {
    TermColor::Rgb(color.red, color.green, color.blue)
}

/// Flatten a possibly translucent color onto `surface` and convert it.
pub fn flatten(color: Color, surface: Color) -> TermColor {
    term(color.blend_over(surface))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_keeps_channels() {
        assert_eq!(
            term(Color::from_argb(0xFFF2_6950)),
            TermColor::Rgb(0xF2, 0x69, 0x50)
        );
    }

    #[test]
    fn test_flatten_fully_transparent_is_surface() {
        let surface = Color::from_argb(0xFFF1_F5FE);
        assert_eq!(
            flatten(Color::RED.with_alpha(0.0), surface),
            TermColor::Rgb(0xF1, 0xF5, 0xFE)
        );
    }
}
