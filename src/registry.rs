#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::{Map, Value};

use crate::{
    ResolveError,
    conditions::{Condition, ConditionalStyleSet},
    env::RenderMode,
    props::Props,
};

/// Props plus the conditional styles declared beside them.
///
/// In JSON the conditions sit next to the props:
/// `{ "bg": "primary.500", "_hover": { "bg": "primary.600" } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleRule {
    #[serde(flatten)]
    pub props: Props,
    #[serde(flatten)]
    pub conditions: ConditionalStyleSet,
}

impl StyleRule {
    pub fn new(props: Props) -> Self {
        Self {
            props,
            conditions: ConditionalStyleSet::new(),
        }
    }

    pub fn with_condition(mut self, condition: Condition, props: Props) -> Self {
        self.conditions.insert(condition, props);
        self
    }

    /// Layers `other` over `self`.
    pub fn overlay(&self, other: &StyleRule) -> StyleRule {
        StyleRule {
            props: self.props.merge(&other.props),
            conditions: self.conditions.overlay(&other.conditions),
        }
    }
}

impl<'de> Deserialize<'de> for StyleRule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Map::<String, Value>::deserialize(deserializer)?;

        let mut props = Map::new();
        let mut conditions = ConditionalStyleSet::new();

        for (key, value) in entries {
            // Nested props such as `_item` also start with `_`, so only keys
            // that parse as a condition are taken out.
            match key.parse::<Condition>() {
                Ok(condition) => {
                    let layer = serde_json::from_value(value)
                        .map_err(|err| D::Error::custom(format!("{key}: {err}")))?;
                    conditions.insert(condition, layer);
                }
                Err(_) => {
                    props.insert(key, value);
                }
            }
        }

        let props = serde_json::from_value(Value::Object(props)).map_err(D::Error::custom)?;

        Ok(StyleRule { props, conditions })
    }
}

/// Defaults, variants and sizes of one component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ComponentSpec {
    #[serde(default)]
    pub base_style: StyleRule,
    #[serde(default)]
    pub default_props: Props,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_variant: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_size: Option<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub variants: IndexMap<String, StyleRule>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub sizes: IndexMap<String, StyleRule>,
    /// Specs rendering takes over per mode, e.g. `Select` → `NativeSelect`.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub render_modes: IndexMap<RenderMode, String>,
}

impl ComponentSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_style(mut self, base_style: StyleRule) -> Self {
        self.base_style = base_style;
        self
    }

    pub fn default_props(mut self, default_props: Props) -> Self {
        self.default_props = default_props;
        self
    }

    pub fn default_variant(mut self, variant: impl Into<String>) -> Self {
        self.default_variant = Some(variant.into());
        self
    }

    pub fn default_size(mut self, size: impl Into<String>) -> Self {
        self.default_size = Some(size.into());
        self
    }

    pub fn variant(mut self, name: impl Into<String>, rule: StyleRule) -> Self {
        self.variants.insert(name.into(), rule);
        self
    }

    pub fn size(mut self, name: impl Into<String>, rule: StyleRule) -> Self {
        self.sizes.insert(name.into(), rule);
        self
    }

    pub fn render_mode(mut self, mode: RenderMode, target: impl Into<String>) -> Self {
        self.render_modes.insert(mode, target.into());
        self
    }
}

/// Component specs by component name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRegistry(IndexMap<String, ComponentSpec>);

static DEFAULT_REGISTRY: LazyLock<ComponentRegistry> = LazyLock::new(|| {
    ComponentRegistry::from_string(include_str!("../assets/components/default.json"))
        .expect("bundled component specs are valid")
});

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled specs for every facade in [`crate::components`].
    pub fn default_registry() -> &'static ComponentRegistry {
        &DEFAULT_REGISTRY
    }

    pub fn from_string<S: AsRef<str>>(str: S) -> Result<ComponentRegistry, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    pub fn from_slice(bytes: &[u8]) -> Result<ComponentRegistry, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    pub fn with(mut self, name: impl Into<String>, spec: ComponentSpec) -> Self {
        self.insert(name, spec);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, spec: ComponentSpec) {
        self.0.insert(name.into(), spec);
    }

    /// Looks up a spec, returning the registered name alongside it.
    pub fn get(&self, name: &str) -> Result<(&str, &ComponentSpec), ResolveError> {
        self.0
            .get_key_value(name)
            .map(|(name, spec)| (name.as_str(), spec))
            .ok_or_else(|| ResolveError::UnknownComponent(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Copies every spec of `other` into `self`, replacing same-named ones.
    pub fn extend(&mut self, other: ComponentRegistry) {
        self.0.extend(other.0);
    }
}
