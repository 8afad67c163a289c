use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::deserializers::de_length;

/// A length as written in a theme document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    /// Absolute pixels, written `12px` or as a bare number.
    Px(f32),
    /// Multiples of the theme's rem size, written `1.5rem`.
    Rems(f32),
    /// A fraction of the parent, written `50%` and stored as `0.5`.
    Fraction(f32),
}

impl Length {
    /// Parses a suffixed length string. Bare numbers are not lengths.
    pub fn parse(string: &str) -> Option<Length> {
        let string = string.trim();

        if let Some(value) = string.strip_suffix('%') {
            return value.parse::<f32>().ok().map(|v| Length::Fraction(v / 100.));
        }

        if let Some(value) = string.strip_suffix("rem") {
            return value.parse::<f32>().ok().map(Length::Rems);
        }

        if let Some(value) = string.strip_suffix("px") {
            return value.parse::<f32>().ok().map(Length::Px);
        }

        None
    }

    /// Converts to pixels. Fractions depend on layout and have no pixel value.
    pub fn to_px(&self, rem_size: f32) -> Option<f32> {
        match self {
            Length::Px(px) => Some(*px),
            Length::Rems(rems) => Some(rems * rem_size),
            Length::Fraction(_) => None,
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Px(px) => write!(f, "{px}px"),
            Length::Rems(rems) => write!(f, "{rems}rem"),
            Length::Fraction(fraction) => write!(f, "{}%", fraction * 100.),
        }
    }
}

impl Serialize for Length {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        de_length(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(Length::parse("12px"), Some(Length::Px(12.)));
        assert_eq!(Length::parse("1.5rem"), Some(Length::Rems(1.5)));
        assert_eq!(Length::parse("50%"), Some(Length::Fraction(0.5)));
        assert_eq!(Length::parse("12"), None);
        assert_eq!(Length::parse("md"), None);
    }

    #[test]
    fn test_to_px() {
        assert_eq!(Length::Rems(2.).to_px(16.), Some(32.));
        assert_eq!(Length::Px(3.).to_px(16.), Some(3.));
        assert_eq!(Length::Fraction(1.).to_px(16.), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Length::Px(12.).to_string(), "12px");
        assert_eq!(Length::Rems(0.5).to_string(), "0.5rem");
        assert_eq!(Length::Fraction(1.).to_string(), "100%");
    }

    #[test]
    fn test_deserialize_bare_number_as_pixels() {
        let length: Length = serde_json::from_str("14").unwrap();
        assert_eq!(length, Length::Px(14.));
    }
}
