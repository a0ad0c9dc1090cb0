#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    pub fn from_hex(hex: &str) -> Self {
        let s = hex.trim_start_matches('#');
        // Byte-range slicing below; non-ASCII input degrades like any other
        // garbage instead of panicking on a char boundary.
        if !s.is_ascii() {
            return Color(0, 0, 0, 255);
        }
        let (r, g, b, a) = match s.len() {
            6 => (
                u8::from_str_radix(&s[0..2], 16).unwrap_or(0),
                u8::from_str_radix(&s[2..4], 16).unwrap_or(0),
                u8::from_str_radix(&s[4..6], 16).unwrap_or(0),
                255,
            ),
            8 => (
                u8::from_str_radix(&s[0..2], 16).unwrap_or(0),
                u8::from_str_radix(&s[2..4], 16).unwrap_or(0),
                u8::from_str_radix(&s[4..6], 16).unwrap_or(0),
                u8::from_str_radix(&s[6..8], 16).unwrap_or(255),
            ),
            _ => (0, 0, 0, 255),
        };
        Color(r, g, b, a)
    }

    pub fn with_alpha(self, a: u8) -> Self {
        Color(self.0, self.1, self.2, a)
    }
}

/// Fill for shapes and backgrounds: a solid color or a two-stop gradient.
///
/// Widgets should talk in `Brush` rather than raw `Color` so gradients share
/// the same code path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Linear gradient from `start` to `end`, along `axis`.
    Linear {
        start: Color,
        end: Color,
        axis: GradientAxis,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientAxis {
    Horizontal,
    Vertical,
}

impl From<Color> for Brush {
    fn from(c: Color) -> Self {
        Brush::Solid(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_rgb_and_rgba() {
        assert_eq!(Color::from_hex("#FF5733"), Color(255, 87, 51, 255));
        assert_eq!(Color::from_hex("#FF5733AA"), Color(255, 87, 51, 170));
    }

    #[test]
    fn from_hex_garbage_is_black() {
        assert_eq!(Color::from_hex("nope"), Color(0, 0, 0, 255));
        // Six *bytes* but not six ASCII digits must not slice mid-character.
        assert_eq!(Color::from_hex("a✓aa"), Color(0, 0, 0, 255));
        assert_eq!(Color::from_hex("#ümlaut8"), Color(0, 0, 0, 255));
    }
}
