//! Responsive, platform and state conditional styles.
//!
//! A [`ConditionalStyleSet`] maps conditions such as `_md`, `_android` or
//! `_hover` to partial props. [`apply_conditionals`] layers every matching
//! entry over a base in a fixed precedence order, lowest first:
//!
//! 1. breakpoints, ascending (`_base` .. `_xl`), mobile first
//! 2. color mode (`_light`, `_dark`)
//! 3. platform (`_ios`, `_android`, `_web`)
//! 4. `_disabled`
//! 5. `_invalid`
//! 6. `_hover`
//! 7. `_focus`
//! 8. `_pressed`
//!
//! Interaction states therefore beat platform rules when both set a key.

use std::{collections::BTreeMap, fmt, str::FromStr};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tesserae_theme::{Breakpoint, ColorMode};

use crate::{env::Platform, props::Props};

/// A condition a conditional style is keyed by.
///
/// The derived ordering is the precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Condition {
    Breakpoint(Breakpoint),
    ColorMode(ColorMode),
    Platform(Platform),
    Disabled,
    Invalid,
    Hover,
    Focus,
    Pressed,
}

impl Condition {
    /// Checks if the condition holds for `state`.
    pub fn matches(&self, state: &ActiveState) -> bool {
        let interaction = &state.interaction;

        match self {
            Condition::Breakpoint(breakpoint) => state.breakpoint >= *breakpoint,
            Condition::ColorMode(color_mode) => state.color_mode == *color_mode,
            Condition::Platform(platform) => state.platform == *platform,
            Condition::Disabled => interaction.disabled,
            Condition::Invalid => interaction.invalid,
            Condition::Hover => interaction.hovered && !interaction.disabled,
            Condition::Focus => interaction.focused && !interaction.disabled,
            Condition::Pressed => interaction.pressed && !interaction.disabled,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Breakpoint(breakpoint) => write!(f, "_{}", breakpoint.key()),
            Condition::ColorMode(ColorMode::Light) => f.write_str("_light"),
            Condition::ColorMode(ColorMode::Dark) => f.write_str("_dark"),
            Condition::Platform(platform) => write!(f, "_{}", platform.key()),
            Condition::Disabled => f.write_str("_disabled"),
            Condition::Invalid => f.write_str("_invalid"),
            Condition::Hover => f.write_str("_hover"),
            Condition::Focus => f.write_str("_focus"),
            Condition::Pressed => f.write_str("_pressed"),
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(key) = s.strip_prefix('_') else {
            return Err(format!("condition '{s}' must start with '_'"));
        };

        if let Some(breakpoint) = Breakpoint::from_key(key) {
            return Ok(Condition::Breakpoint(breakpoint));
        }
        if let Some(platform) = Platform::from_key(key) {
            return Ok(Condition::Platform(platform));
        }

        Ok(match key {
            "light" => Condition::ColorMode(ColorMode::Light),
            "dark" => Condition::ColorMode(ColorMode::Dark),
            "disabled" | "isDisabled" => Condition::Disabled,
            "invalid" | "isInvalid" => Condition::Invalid,
            "hover" | "isHovered" => Condition::Hover,
            "focus" | "isFocused" => Condition::Focus,
            "pressed" | "isPressed" => Condition::Pressed,
            _ => return Err(format!("unknown condition '{s}'")),
        })
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Condition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Conditional props keyed by [`Condition`], iterated in precedence order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConditionalStyleSet(BTreeMap<Condition, Props>);

impl<'de> Deserialize<'de> for ConditionalStyleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Aliases such as `_isDisabled` and `_disabled` are merged, later keys winning.
        let entries = IndexMap::<String, Props>::deserialize(deserializer)?;

        let mut set = ConditionalStyleSet::new();
        for (key, props) in entries {
            let condition = key.parse().map_err(serde::de::Error::custom)?;
            set.insert(condition, props);
        }
        Ok(set)
    }
}

impl ConditionalStyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, condition: Condition, props: Props) -> Self {
        self.insert(condition, props);
        self
    }

    /// Sets the props of a condition, merging over any already present.
    pub fn insert(&mut self, condition: Condition, props: Props) {
        let merged = match self.0.get(&condition) {
            Some(existing) => existing.merge(&props),
            None => props,
        };
        self.0.insert(condition, merged);
    }

    pub fn get(&self, condition: &Condition) -> Option<&Props> {
        self.0.get(condition)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Condition, &Props)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Layers `other` over `self`; per condition, keys set by `other` win.
    pub fn overlay(&self, other: &ConditionalStyleSet) -> ConditionalStyleSet {
        let mut combined = self.clone();
        for (condition, props) in other.iter() {
            combined.insert(*condition, props.clone());
        }
        combined
    }

    /// Rebuilds the props of every condition.
    pub(crate) fn map_props(&self, mut f: impl FnMut(&Props) -> Props) -> ConditionalStyleSet {
        ConditionalStyleSet(
            self.0
                .iter()
                .map(|(condition, props)| (*condition, f(props)))
                .collect(),
        )
    }
}

impl FromIterator<(Condition, Props)> for ConditionalStyleSet {
    fn from_iter<T: IntoIterator<Item = (Condition, Props)>>(iter: T) -> Self {
        let mut set = ConditionalStyleSet::new();
        for (condition, props) in iter {
            set.insert(condition, props);
        }
        set
    }
}

/// Interaction flags of one component instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    pub hovered: bool,
    pub focused: bool,
    pub pressed: bool,
    pub disabled: bool,
    pub invalid: bool,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

/// Everything conditional styles are matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveState {
    pub platform: Platform,
    pub breakpoint: Breakpoint,
    pub color_mode: ColorMode,
    pub interaction: Interaction,
}

impl ActiveState {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            ..Default::default()
        }
    }

    pub fn breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }

    pub fn interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }
}

/// Layers every condition of `set` that matches `state` over `base`.
pub fn apply_conditionals(base: &Props, set: &ConditionalStyleSet, state: &ActiveState) -> Props {
    set.iter()
        .filter(|(condition, _)| condition.matches(state))
        .fold(base.clone(), |props, (_, layer)| props.merge(layer))
}
