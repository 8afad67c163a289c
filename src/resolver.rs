//! The props resolution pipeline.
//!
//! [`PropsResolver::resolve`] computes a component's final props from four
//! layers, lowest precedence first:
//!
//! 1. defaults: the spec's base style and default props,
//! 2. the selected variant and size presets,
//! 3. conditional styles matching the [`ActiveState`],
//! 4. the caller's own props.
//!
//! Every layer is token-resolved against the theme before the layers are
//! merged with [`merge_final`]. Resolution is a pure read of the theme and
//! registry, so one resolver can be shared between threads.

use std::ops::Deref;

use indexmap::IndexMap;
use serde::Serialize;
use smallvec::SmallVec;
use tesserae_theme::{Theme, ThemeProvider, TokenCategory, TokenError, TokenValue};
use tracing::debug;

use crate::{
    Diagnostic, Diagnostics, ResolveError,
    conditions::{ActiveState, Condition, ConditionalStyleSet, apply_conditionals},
    env::RenderMode,
    props::{PropValue, Props},
    registry::{ComponentRegistry, ComponentSpec, StyleRule},
};

/// Merges the four pipeline layers. Later layers win key by key; nested
/// records are replaced whole. The inputs are left untouched.
pub fn merge_final(defaults: &Props, variant: &Props, conditional: &Props, caller: &Props) -> Props {
    defaults.merge(variant).merge(conditional).merge(caller)
}

/// What a component asks the resolver for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentProps {
    pub component: String,
    pub render_mode: RenderMode,
    pub variant: Option<String>,
    pub size: Option<String>,
    pub props: Props,
    pub conditions: ConditionalStyleSet,
}

impl ComponentProps {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
            ..Default::default()
        }
    }

    pub fn render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Adds caller conditional props, which beat the spec's for the same
    /// condition.
    pub fn condition(mut self, condition: Condition, props: Props) -> Self {
        self.conditions.insert(condition, props);
        self
    }
}

/// Token-resolved output of the variant resolver.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedVariant {
    /// The spec the presets came from, after any render mode redirect.
    pub component: String,
    pub variant: Option<String>,
    pub size: Option<String>,
    /// Base style and default props.
    pub defaults: Props,
    /// Variant props overlaid with size props.
    pub props: Props,
    /// Conditional styles of the base style, variant and size.
    pub conditions: ConditionalStyleSet,
    pub diagnostics: Diagnostics,
}

/// Final props of one resolution, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedProps {
    component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    variant: Option<String>,
    #[serde(rename = "size", skip_serializing_if = "Option::is_none")]
    size_preset: Option<String>,
    props: Props,
    #[serde(skip)]
    diagnostics: Diagnostics,
}

impl ResolvedProps {
    pub fn component(&self) -> &str {
        &self.component
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    pub fn size(&self) -> Option<&str> {
        self.size_preset.as_deref()
    }

    pub fn props(&self) -> &Props {
        &self.props
    }

    /// Problems recovered from while resolving.
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_props(self) -> Props {
        self.props
    }
}

impl Deref for ResolvedProps {
    type Target = Props;

    fn deref(&self) -> &Self::Target {
        &self.props
    }
}

#[derive(Clone, Copy)]
enum Preset {
    Variant,
    Size,
}

impl Preset {
    fn rules(self, spec: &ComponentSpec) -> &IndexMap<String, StyleRule> {
        match self {
            Preset::Variant => &spec.variants,
            Preset::Size => &spec.sizes,
        }
    }

    fn default_name(self, spec: &ComponentSpec) -> Option<&str> {
        match self {
            Preset::Variant => spec.default_variant.as_deref(),
            Preset::Size => spec.default_size.as_deref(),
        }
    }

    fn invalid(self, component: &str, requested: &str, fallback: Option<&str>) -> Diagnostic {
        let (component, requested) = (component.to_string(), requested.to_string());
        let fallback = fallback.map(str::to_string);

        match self {
            Preset::Variant => Diagnostic::InvalidVariant {
                component,
                requested,
                fallback,
            },
            Preset::Size => Diagnostic::InvalidSize {
                component,
                requested,
                fallback,
            },
        }
    }
}

/// Requested spec first, render mode target (if any) last.
type SpecChain<'a> = SmallVec<[(&'a str, &'a ComponentSpec); 2]>;

/// Unresolved layers picked for one request.
struct Selection<'a> {
    component: &'a str,
    variant: Option<&'a str>,
    size: Option<&'a str>,
    defaults: Props,
    presets: Props,
    conditions: ConditionalStyleSet,
}

/// Resolves component props against an injected theme and registry.
#[derive(Debug, Clone, Copy)]
pub struct PropsResolver<'a> {
    theme: &'a Theme,
    registry: &'a ComponentRegistry,
}

impl<'a> PropsResolver<'a> {
    pub fn new(theme: &'a Theme, registry: &'a ComponentRegistry) -> Self {
        Self { theme, registry }
    }

    pub fn from_provider<P: ThemeProvider + ?Sized>(
        provider: &'a P,
        registry: &'a ComponentRegistry,
    ) -> Self {
        Self::new(provider.get_theme(), registry)
    }

    /// A resolver over the bundled theme and component specs.
    pub fn builtin() -> PropsResolver<'static> {
        PropsResolver::new(Theme::default_theme(), ComponentRegistry::default_registry())
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn registry(&self) -> &'a ComponentRegistry {
        self.registry
    }

    pub fn resolve_token(
        &self,
        category: TokenCategory,
        path: &str,
    ) -> Result<&'a TokenValue, TokenError> {
        self.theme.resolve_token(category, path)
    }

    /// Replaces token references in every token-backed prop.
    ///
    /// Unknown references keep their raw string and record a diagnostic.
    /// Numbers are looked up by their spelling and kept as literals when no
    /// token matches.
    pub fn resolve_props(&self, props: &Props, diagnostics: &mut Diagnostics) -> Props {
        props.map_values(&mut |key, category, value| match category {
            Some(category) => self.resolve_value(key, category, value, diagnostics),
            None => value.clone(),
        })
    }

    fn resolve_value(
        &self,
        key: &'static str,
        category: TokenCategory,
        value: &PropValue,
        diagnostics: &mut Diagnostics,
    ) -> PropValue {
        match value {
            PropValue::Text(path) => match self.lookup(category, path) {
                Ok(token) => token.into(),
                Err(source) => {
                    diagnostics.push(Diagnostic::UnknownToken { prop: key, source });
                    value.clone()
                }
            },
            PropValue::Number(number) => self
                .resolve_token(category, &number.to_string())
                .map_or_else(|_| value.clone(), |token| token.clone().into()),
            _ => value.clone(),
        }
    }

    fn lookup(&self, category: TokenCategory, path: &str) -> Result<TokenValue, TokenError> {
        if category == TokenCategory::Colors
            && let Some(resolved) = self.theme.resolve_alpha_color(path)
        {
            return resolved;
        }
        self.resolve_token(category, path).cloned()
    }

    fn spec_chain(&self, component: &str, mode: RenderMode) -> Result<SpecChain<'a>, ResolveError> {
        let registry: &'a ComponentRegistry = self.registry;
        let (name, spec) = registry.get(component)?;

        let mut chain = SpecChain::new();
        chain.push((name, spec));

        if let Some(target) = spec.render_modes.get(&mode) {
            let redirected =
                registry
                    .get(target)
                    .map_err(|_| ResolveError::UnknownRenderModeTarget {
                        component: name.to_string(),
                        mode,
                        target: target.clone(),
                    })?;

            debug!(component = name, %mode, target = redirected.0, "render mode redirect");
            chain.push(redirected);
        }

        Ok(chain)
    }

    fn choose_preset(
        chain: &SpecChain<'a>,
        preset: Preset,
        requested: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) -> Option<&'a str> {
        let fallback = chain
            .iter()
            .rev()
            .find_map(|&(_, spec)| preset.default_name(spec));

        let Some(requested) = requested else {
            return fallback;
        };

        let found = chain
            .iter()
            .rev()
            .find_map(|&(_, spec)| preset.rules(spec).get_key_value(requested));

        match found {
            Some((name, _)) => Some(name.as_str()),
            None => {
                diagnostics.push(preset.invalid(chain[0].0, requested, fallback));
                fallback
            }
        }
    }

    fn select(
        &self,
        component: &str,
        mode: RenderMode,
        variant: Option<&str>,
        size: Option<&str>,
        diagnostics: &mut Diagnostics,
    ) -> Result<Selection<'a>, ResolveError> {
        let chain = self.spec_chain(component, mode)?;

        let variant = Self::choose_preset(&chain, Preset::Variant, variant, diagnostics);
        let size = Self::choose_preset(&chain, Preset::Size, size, diagnostics);

        let mut base = StyleRule::default();
        let mut default_props = Props::new();
        for &(_, spec) in &chain {
            base = base.overlay(&spec.base_style);
            default_props = default_props.merge(&spec.default_props);
        }

        let mut presets = StyleRule::default();
        for (preset, name) in [(Preset::Variant, variant), (Preset::Size, size)] {
            let Some(name) = name else { continue };

            for &(_, spec) in &chain {
                if let Some(rule) = preset.rules(spec).get(name) {
                    presets = presets.overlay(rule);
                }
            }
        }

        Ok(Selection {
            component: chain[chain.len() - 1].0,
            variant,
            size,
            defaults: base.props.merge(&default_props),
            presets: presets.props,
            conditions: base.conditions.overlay(&presets.conditions),
        })
    }

    /// Picks and token-resolves the presets of a component.
    ///
    /// Unknown variants and sizes fall back to the spec's defaults; an unknown
    /// component is an error.
    pub fn resolve_variant(
        &self,
        component: &str,
        mode: RenderMode,
        variant: Option<&str>,
        size: Option<&str>,
    ) -> Result<ResolvedVariant, ResolveError> {
        let mut diagnostics = Diagnostics::new();
        let selection = self.select(component, mode, variant, size, &mut diagnostics)?;

        let defaults = self.resolve_props(&selection.defaults, &mut diagnostics);
        let props = self.resolve_props(&selection.presets, &mut diagnostics);
        let conditions = selection
            .conditions
            .map_props(|layer| self.resolve_props(layer, &mut diagnostics));

        Ok(ResolvedVariant {
            component: selection.component.to_string(),
            variant: selection.variant.map(str::to_string),
            size: selection.size.map(str::to_string),
            defaults,
            props,
            conditions,
            diagnostics,
        })
    }

    /// Runs the whole pipeline for one render.
    pub fn resolve(
        &self,
        request: &ComponentProps,
        state: &ActiveState,
    ) -> Result<ResolvedProps, ResolveError> {
        let mut diagnostics = Diagnostics::new();
        let selection = self.select(
            &request.component,
            request.render_mode,
            request.variant.as_deref(),
            request.size.as_deref(),
            &mut diagnostics,
        )?;

        let conditions = selection.conditions.overlay(&request.conditions);
        let conditional = apply_conditionals(&Props::new(), &conditions, state);

        let props = merge_final(
            &self.resolve_props(&selection.defaults, &mut diagnostics),
            &self.resolve_props(&selection.presets, &mut diagnostics),
            &self.resolve_props(&conditional, &mut diagnostics),
            &self.resolve_props(&request.props, &mut diagnostics),
        );

        Ok(ResolvedProps {
            component: selection.component.to_string(),
            variant: selection.variant.map(str::to_string),
            size_preset: selection.size.map(str::to_string),
            props,
            diagnostics,
        })
    }
}
