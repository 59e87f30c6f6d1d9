//! RGBA colors.

use crate::ParseError;

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parse any color syntax understood by `csscolorparser` (names, hex, `rgb()`, `hsl()`, ...).
    ///
    /// # Errors
    /// Returns `ParseError::InvalidValue` when the text is not a color.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let parsed = csscolorparser::parse(text.trim()).map_err(|_| ParseError::InvalidValue)?;
        let [red, green, blue, alpha] = parsed.to_rgba8();
        Ok(Self::new(red, green, blue, alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_names_and_functions() {
        assert_eq!(Rgba::parse("#ff0000"), Ok(Rgba::new(255, 0, 0, 255)));
        assert_eq!(Rgba::parse("white"), Ok(Rgba::WHITE));
        assert_eq!(Rgba::parse("rgb(10, 20, 30)"), Ok(Rgba::new(10, 20, 30, 255)));
        assert_eq!(Rgba::parse("not-a-color"), Err(ParseError::InvalidValue));
    }
}
