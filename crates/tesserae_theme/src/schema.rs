#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::sync::LazyLock;

use enum_assoc::Assoc;
use serde::{Deserialize, Serialize};

use super::deserializers::{de_breakpoints, de_pixels};
use crate::{RgbaExt, ThemeError, TokenCategory, TokenError, TokenStore, TokenValue};

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Theme {
    pub name: String,
    #[serde(default = "default_rem_size", deserialize_with = "de_pixels")]
    pub rem_size: f32,
    #[serde(default, deserialize_with = "de_breakpoints")]
    pub breakpoints: Breakpoints,
    pub tokens: TokenStore,
}

fn default_rem_size() -> f32 {
    16.
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident, $getter:ident] ),+ ) => {
        $(
            static $name: LazyLock<Theme> = LazyLock::new(|| {
                Theme::from_string(include_str!($path)).expect("bundled theme is valid")
            });
        )+

        impl Theme {
            $(
                pub fn $getter() -> &'static Theme {
                    &$name
                }
            )+
        }
    };
}

generate_builtin_themes!(["../themes/default.json", DEFAULT_THEME, default_theme]);

impl Theme {
    /// Creates a theme with default breakpoints from a token store.
    pub fn new(name: impl Into<String>, tokens: TokenStore) -> Self {
        Self {
            name: name.into(),
            rem_size: default_rem_size(),
            breakpoints: Breakpoints::default(),
            tokens,
        }
    }

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(str.as_ref())?)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Resolves a token by category and dot path.
    pub fn resolve_token(
        &self,
        category: TokenCategory,
        path: &str,
    ) -> Result<&TokenValue, TokenError> {
        self.tokens.get(category, path)
    }

    /// Resolves a color reference of the form `<color>:alpha.<opacity>`.
    ///
    /// Returns `None` when `path` carries no alpha suffix.
    pub fn resolve_alpha_color(&self, path: &str) -> Option<Result<TokenValue, TokenError>> {
        let (color, opacity) = path.split_once(":alpha.")?;
        let unknown = || TokenError::UnknownToken {
            category: TokenCategory::Colors,
            path: path.to_string(),
        };

        let resolved = match (
            self.resolve_token(TokenCategory::Colors, color),
            self.resolve_token(TokenCategory::Opacity, opacity),
        ) {
            (Ok(TokenValue::Color(color)), Ok(TokenValue::Number(alpha))) => {
                Ok(TokenValue::Color(color.alpha(*alpha)))
            }
            _ => Err(unknown()),
        };
        Some(resolved)
    }

    /// The breakpoint active for a viewport of the given width.
    pub fn breakpoint_for_width(&self, width: f32) -> Breakpoint {
        self.breakpoints.for_width(width)
    }
}

/// Responsive breakpoints, narrowest first.
#[derive(
    Assoc, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[func(pub fn key(&self) -> &'static str)]
pub enum Breakpoint {
    #[default]
    #[assoc(key = "base")]
    Base,
    #[assoc(key = "sm")]
    Sm,
    #[assoc(key = "md")]
    Md,
    #[assoc(key = "lg")]
    Lg,
    #[assoc(key = "xl")]
    Xl,
}

impl Breakpoint {
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Base,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    pub fn from_key(key: &str) -> Option<Breakpoint> {
        Self::ALL.into_iter().find(|breakpoint| breakpoint.key() == key)
    }
}

/// Minimum viewport width, in pixels, of every [`Breakpoint`].
#[derive(Debug, Clone, PartialEq)]
pub struct Breakpoints {
    min_widths: [f32; 5],
}

impl Breakpoints {
    /// Widths must be ascending; the theme deserializer checks this.
    pub(crate) fn from_min_widths(min_widths: [f32; 5]) -> Self {
        Self { min_widths }
    }

    pub fn min_width(&self, breakpoint: Breakpoint) -> f32 {
        self.min_widths[breakpoint as usize]
    }

    pub fn for_width(&self, width: f32) -> Breakpoint {
        Breakpoint::ALL
            .into_iter()
            .rev()
            .find(|breakpoint| width >= self.min_width(*breakpoint))
            .unwrap_or(Breakpoint::Base)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::from_min_widths([0., 480., 768., 992., 1280.])
    }
}

/// Light or dark color mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}
