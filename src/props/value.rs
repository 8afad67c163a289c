use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use tesserae_theme::{Length, Rgba, TokenValue};

/// A single prop value.
///
/// A `Text` value in a token-backed prop is a token reference (`primary.500`)
/// until the resolver replaces it with the concrete token value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropValue {
    Bool(bool),
    Number(f32),
    Length(Length),
    Color(Rgba),
    Text(String),
}

impl PropValue {
    /// Parses a raw string: valid `#` colors and suffixed lengths become
    /// concrete values, everything else stays text.
    pub fn parse(raw: &str) -> PropValue {
        if raw.starts_with('#') {
            if let Ok(color) = Rgba::from_hex(raw) {
                return PropValue::Color(color);
            }
        }

        match Length::parse(raw) {
            Some(length) => PropValue::Length(length),
            None => PropValue::Text(raw.to_string()),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Rgba> {
        match self {
            PropValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f32> {
        match self {
            PropValue::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Pixel value of a number or an absolute length.
    pub fn to_px(&self, rem_size: f32) -> Option<f32> {
        match self {
            PropValue::Number(number) => Some(*number),
            PropValue::Length(length) => length.to_px(rem_size),
            _ => None,
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Bool(value) => write!(f, "{value}"),
            PropValue::Number(number) => write!(f, "{number}"),
            PropValue::Length(length) => write!(f, "{length}"),
            PropValue::Color(color) => write!(f, "{color}"),
            PropValue::Text(text) => f.write_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for PropValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Bool(bool),
            Number(f32),
            String(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Bool(value) => PropValue::Bool(value),
            Raw::Number(number) => PropValue::Number(number),
            Raw::String(string) => PropValue::parse(&string),
        })
    }
}

impl From<TokenValue> for PropValue {
    fn from(value: TokenValue) -> Self {
        match value {
            TokenValue::Color(color) => PropValue::Color(color),
            TokenValue::Length(length) => PropValue::Length(length),
            TokenValue::Number(number) => PropValue::Number(number),
            TokenValue::Text(text) => PropValue::Text(text),
        }
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::parse(value)
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::parse(&value)
    }
}

impl From<f32> for PropValue {
    fn from(value: f32) -> Self {
        PropValue::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        PropValue::Number(value as f32)
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<Rgba> for PropValue {
    fn from(value: Rgba) -> Self {
        PropValue::Color(value)
    }
}

impl From<Length> for PropValue {
    fn from(value: Length) -> Self {
        PropValue::Length(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesserae_theme::rgb_a;

    #[test]
    fn test_parse() {
        assert_eq!(PropValue::parse("#ff0000"), PropValue::Color(rgb_a(0xff0000, 1.)));
        assert_eq!(PropValue::parse("2px"), PropValue::Length(Length::Px(2.)));
        assert_eq!(
            PropValue::parse("primary.500"),
            PropValue::Text("primary.500".into())
        );
    }

    #[test]
    fn test_malformed_color_stays_text() {
        assert_eq!(PropValue::parse("#nope"), PropValue::Text("#nope".into()));
    }

    #[test]
    fn test_deserialize_json_scalars() {
        let values: Vec<PropValue> =
            serde_json::from_str(r##"[true, 4, "#000000", "50%", "red"]"##).unwrap();

        assert_eq!(
            values,
            vec![
                PropValue::Bool(true),
                PropValue::Number(4.),
                PropValue::Color(rgb_a(0x000000, 1.)),
                PropValue::Length(Length::Fraction(0.5)),
                PropValue::Text("red".into()),
            ]
        );
    }

    #[test]
    fn test_serialize_is_plain_json() {
        let json = serde_json::to_string(&vec![
            PropValue::Color(rgb_a(0x06b6d4, 1.)),
            PropValue::Length(Length::Px(12.)),
            PropValue::Number(1.5),
        ])
        .unwrap();

        assert_eq!(json, r##"["#06b6d4","12px",1.5]"##);
    }

    #[test]
    fn test_to_px() {
        assert_eq!(PropValue::Length(Length::Rems(1.5)).to_px(16.), Some(24.));
        assert_eq!(PropValue::Number(20.).to_px(16.), Some(20.));
        assert_eq!(PropValue::Text("md".into()).to_px(16.), None);
    }
}
