#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::borrow::Cow;

use anyhow::Result;
use enum_assoc::Assoc;
use rust_embed::RustEmbed;

use crate::assets::assets::AssetProvider;

/// Theme and component documents bundled with the crate.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "themes/**/*.json"]
#[include = "components/**/*.json"]
#[exclude = "*.DS_Store"]
pub struct BuiltinAssets;

impl AssetProvider for BuiltinAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(BuiltinAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into_owned()))
            .collect())
    }
}

/// Paths of the bundled documents.
#[derive(Assoc, Debug, Clone, Copy, PartialEq, Eq)]
#[func(pub fn path(&self) -> &'static str)]
pub enum BuiltinDocument {
    /// Specs of every component facade.
    #[assoc(path = "components/default.json")]
    DefaultComponents,

    /// A larger, higher contrast theme.
    #[assoc(path = "themes/contrast.json")]
    ContrastTheme,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assets, registry::ComponentRegistry};

    #[test]
    fn test_bundled_registry_matches_default() {
        let registry = assets![BuiltinAssets]
            .load_registry(BuiltinDocument::DefaultComponents.path())
            .unwrap();
        assert_eq!(&registry, ComponentRegistry::default_registry());
    }

    #[test]
    fn test_contrast_theme_loads() {
        let theme = assets![BuiltinAssets]
            .load_theme(BuiltinDocument::ContrastTheme.path())
            .unwrap();
        assert_eq!(theme.name, "High Contrast");
        assert_eq!(theme.rem_size, 18.);
    }

    #[test]
    fn test_list() {
        let themes = BuiltinAssets.list("themes/").unwrap();
        assert_eq!(themes, vec![BuiltinDocument::ContrastTheme.path().to_string()]);
    }
}
