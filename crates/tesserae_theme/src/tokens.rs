#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::fmt;

use enum_assoc::Assoc;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Length, Rgba, ThemeError, TokenError, deserializers::de_token_groups};

/// The groups a theme organizes its tokens into.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[func(pub fn key(&self) -> &'static str)]
pub enum TokenCategory {
    #[assoc(key = "colors")]
    Colors,
    #[assoc(key = "space")]
    Space,
    #[assoc(key = "sizes")]
    Sizes,
    #[assoc(key = "radii")]
    Radii,
    #[assoc(key = "borderWidths")]
    BorderWidths,
    #[assoc(key = "fontSizes")]
    FontSizes,
    #[assoc(key = "fontWeights")]
    FontWeights,
    #[assoc(key = "lineHeights")]
    LineHeights,
    #[assoc(key = "opacity")]
    Opacity,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 9] = [
        TokenCategory::Colors,
        TokenCategory::Space,
        TokenCategory::Sizes,
        TokenCategory::Radii,
        TokenCategory::BorderWidths,
        TokenCategory::FontSizes,
        TokenCategory::FontWeights,
        TokenCategory::LineHeights,
        TokenCategory::Opacity,
    ];

    pub fn from_key(key: &str) -> Option<TokenCategory> {
        Self::ALL.into_iter().find(|category| category.key() == key)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A concrete design value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Color(Rgba),
    Length(Length),
    Number(f32),
    /// Keywords such as `normal` or `auto`.
    Text(String),
}

impl TokenValue {
    /// Parses a raw token string: `#...` is a color, suffixed values are
    /// lengths, numeric strings are numbers and anything else is a keyword.
    pub fn parse(raw: &str) -> Result<TokenValue, ThemeError> {
        if raw.starts_with('#') {
            return Rgba::from_hex(raw).map(TokenValue::Color);
        }

        if let Some(length) = Length::parse(raw) {
            return Ok(TokenValue::Length(length));
        }

        if let Ok(number) = raw.trim().parse::<f32>() {
            return Ok(TokenValue::Number(number));
        }

        Ok(TokenValue::Text(raw.to_string()))
    }
}

impl From<Rgba> for TokenValue {
    fn from(value: Rgba) -> Self {
        TokenValue::Color(value)
    }
}

impl From<Length> for TokenValue {
    fn from(value: Length) -> Self {
        TokenValue::Length(value)
    }
}

impl From<f32> for TokenValue {
    fn from(value: f32) -> Self {
        TokenValue::Number(value)
    }
}

/// Flat token table keyed by `category.dot.path`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenStore {
    tokens: IndexMap<String, TokenValue>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token, returning the updated store for chaining.
    pub fn with(
        mut self,
        category: TokenCategory,
        path: &str,
        value: impl Into<TokenValue>,
    ) -> Self {
        self.insert(category, path, value);
        self
    }

    pub fn insert(&mut self, category: TokenCategory, path: &str, value: impl Into<TokenValue>) {
        self.tokens
            .insert(format!("{}.{}", category.key(), path), value.into());
    }

    /// Looks up a token. The path may repeat the category prefix
    /// (`colors.primary.500` and `primary.500` are the same token).
    pub fn get(&self, category: TokenCategory, path: &str) -> Result<&TokenValue, TokenError> {
        let prefix = category.key();
        let path = path
            .strip_prefix(prefix)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(path);

        self.tokens
            .get(&format!("{prefix}.{path}"))
            .ok_or_else(|| TokenError::UnknownToken {
                category,
                path: path.to_string(),
            })
    }

    pub fn contains(&self, category: TokenCategory, path: &str) -> bool {
        self.get(category, path).is_ok()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterates `(full path, value)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.tokens.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<'de> Deserialize<'de> for TokenStore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tokens = de_token_groups(deserializer)?;
        Ok(Self { tokens })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rgb_a;

    #[test]
    fn test_category_keys_round_trip() {
        for category in TokenCategory::ALL {
            assert_eq!(TokenCategory::from_key(category.key()), Some(category));
        }
        assert_eq!(TokenCategory::from_key("shadows"), None);
    }

    #[test]
    fn test_token_value_parse() {
        assert_eq!(
            TokenValue::parse("#ff0000").unwrap(),
            TokenValue::Color(rgb_a(0xff0000, 1.))
        );
        assert_eq!(
            TokenValue::parse("4px").unwrap(),
            TokenValue::Length(Length::Px(4.))
        );
        assert_eq!(TokenValue::parse("1.5").unwrap(), TokenValue::Number(1.5));
        assert_eq!(
            TokenValue::parse("normal").unwrap(),
            TokenValue::Text("normal".into())
        );
        assert!(TokenValue::parse("#12").is_err());
    }

    #[test]
    fn test_get_with_and_without_prefix() {
        let store = TokenStore::new().with(TokenCategory::Colors, "primary.500", rgb_a(0x06b6d4, 1.));

        assert!(store.get(TokenCategory::Colors, "primary.500").is_ok());
        assert!(store.get(TokenCategory::Colors, "colors.primary.500").is_ok());
        assert!(store.get(TokenCategory::Space, "primary.500").is_err());
    }

    #[test]
    fn test_get_unknown_reports_path() {
        let store = TokenStore::new();
        let err = store.get(TokenCategory::Colors, "colors.brand.999").unwrap_err();

        assert_eq!(
            err,
            TokenError::UnknownToken {
                category: TokenCategory::Colors,
                path: "brand.999".into(),
            }
        );
    }

    #[test]
    fn test_deserialize_flattens_groups() {
        let store: TokenStore = serde_json::from_str(
            r##"{
                "colors": { "white": "#ffffff", "primary": { "500": "#06b6d4" } },
                "space": { "1": "4px", "2": 8 }
            }"##,
        )
        .unwrap();

        assert_eq!(store.len(), 4);
        assert_eq!(
            store.get(TokenCategory::Colors, "primary.500").unwrap(),
            &TokenValue::Color(rgb_a(0x06b6d4, 1.))
        );
        assert_eq!(
            store.get(TokenCategory::Space, "2").unwrap(),
            &TokenValue::Number(8.)
        );
    }

    #[test]
    fn test_deserialize_rejects_unknown_category() {
        let result = serde_json::from_str::<TokenStore>(r#"{ "shadows": { "sm": "1px" } }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_invalid_color() {
        let result = serde_json::from_str::<TokenStore>(r##"{ "colors": { "bad": "#xyz" } }"##);
        assert!(result.is_err());
    }
}
