use std::borrow::Cow;

use anyhow::{Context, Result, anyhow};
use smallvec::SmallVec;
use tesserae_theme::Theme;

use crate::registry::ComponentRegistry;

/// A chain of asset providers, searched in order.
pub struct Assets<const N: usize> {
    providers: SmallVec<[Box<dyn AssetProvider>; N]>,
}

impl<const N: usize> Assets<N> {
    pub fn new(providers: [Box<dyn AssetProvider>; N]) -> Assets<N> {
        Self {
            providers: SmallVec::from(providers),
        }
    }

    /// Loads the first asset found at `path`. An empty path loads nothing.
    pub fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        for provider in &self.providers {
            let asset = provider.get(path);

            if asset.is_some() {
                return Ok(asset);
            }
        }

        Err(anyhow!("could not find asset at path \"{path}\""))
    }

    /// Lists the asset paths under `path` across every provider.
    pub fn list(&self, path: &str) -> Result<Vec<String>> {
        Ok(self
            .providers
            .iter()
            .flat_map(|assets| assets.list(path).into_iter())
            .flatten()
            .collect())
    }

    pub fn load_theme(&self, path: &str) -> Result<Theme> {
        let bytes = self.load_document(path)?;
        Theme::from_slice(&bytes).with_context(|| format!("invalid theme at \"{path}\""))
    }

    pub fn load_registry(&self, path: &str) -> Result<ComponentRegistry> {
        let bytes = self.load_document(path)?;
        ComponentRegistry::from_slice(&bytes)
            .with_context(|| format!("invalid component specs at \"{path}\""))
    }

    fn load_document(&self, path: &str) -> Result<Cow<'static, [u8]>> {
        self.load(path)?
            .ok_or_else(|| anyhow!("a document path is required"))
    }
}

#[macro_export]
macro_rules! assets {
    ( $( $item:expr ),* $(,)? ) => {
        $crate::Assets::new([
            $( Box::new($item) ),*
        ])
    };
}

pub trait AssetProvider: Send + Sync {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>>;
    fn list(&self, path: &str) -> Result<Vec<String>>;
}
