//! Platform and viewport information read at resolution time.

use std::{fmt, str::FromStr};

use cfg_if::cfg_if;
use enum_assoc::Assoc;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tesserae_theme::{Breakpoint, ColorMode, Theme};

use crate::conditions::{ActiveState, Interaction};

/// The platform a component is rendered on.
#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[func(pub fn key(&self) -> &'static str)]
pub enum Platform {
    #[assoc(key = "ios")]
    Ios,
    #[assoc(key = "android")]
    Android,
    #[default]
    #[assoc(key = "web")]
    Web,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Ios, Platform::Android, Platform::Web];

    pub fn from_key(key: &str) -> Option<Platform> {
        Self::ALL.into_iter().find(|platform| platform.key() == key)
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Platform::Ios | Platform::Android)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

cfg_if! {
    if #[cfg(target_os = "ios")] {
        /// The platform this crate was compiled for.
        pub fn current_platform() -> Platform {
            Platform::Ios
        }
    } else if #[cfg(target_os = "android")] {
        /// The platform this crate was compiled for.
        pub fn current_platform() -> Platform {
            Platform::Android
        }
    } else {
        /// The platform this crate was compiled for.
        pub fn current_platform() -> Platform {
            Platform::Web
        }
    }
}

/// Whether a component renders through a native widget or a custom web
/// element tree. Chosen once, at variant resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    Native,
    #[default]
    Web,
}

impl RenderMode {
    pub fn key(&self) -> &'static str {
        match self {
            RenderMode::Native => "native",
            RenderMode::Web => "web",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RenderMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "native" => Ok(RenderMode::Native),
            "web" => Ok(RenderMode::Web),
            _ => Err(format!("unknown render mode '{s}', expected 'native' or 'web'")),
        }
    }
}

impl Serialize for RenderMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for RenderMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Read-only view of the host environment.
pub trait EnvironmentProbe {
    fn platform(&self) -> Platform;

    /// Viewport width in pixels.
    fn window_width(&self) -> f32;

    fn color_mode(&self) -> ColorMode {
        ColorMode::Light
    }
}

/// An environment with fixed values, for hosts that know them up front and
/// for tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticEnvironment {
    pub platform: Platform,
    pub window_width: f32,
    pub color_mode: ColorMode,
}

impl StaticEnvironment {
    pub fn new(platform: Platform, window_width: f32) -> Self {
        Self {
            platform,
            window_width,
            color_mode: ColorMode::Light,
        }
    }

    pub fn with_color_mode(mut self, color_mode: ColorMode) -> Self {
        self.color_mode = color_mode;
        self
    }
}

impl Default for StaticEnvironment {
    fn default() -> Self {
        Self::new(current_platform(), 0.)
    }
}

impl EnvironmentProbe for StaticEnvironment {
    fn platform(&self) -> Platform {
        self.platform
    }

    fn window_width(&self) -> f32 {
        self.window_width
    }

    fn color_mode(&self) -> ColorMode {
        self.color_mode
    }
}

/// A probed environment with the viewport width mapped to a breakpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Environment {
    pub platform: Platform,
    pub breakpoint: Breakpoint,
    pub color_mode: ColorMode,
}

impl Environment {
    pub fn probe(probe: &impl EnvironmentProbe, theme: &Theme) -> Self {
        Self {
            platform: probe.platform(),
            breakpoint: theme.breakpoint_for_width(probe.window_width()),
            color_mode: probe.color_mode(),
        }
    }

    /// The full active state for one component instance.
    pub fn active_state(&self, interaction: Interaction) -> ActiveState {
        ActiveState {
            platform: self.platform,
            breakpoint: self.breakpoint,
            color_mode: self.color_mode,
            interaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesserae_theme::TokenStore;

    #[test]
    fn test_platform_keys() {
        assert_eq!(Platform::from_key("android"), Some(Platform::Android));
        assert_eq!(Platform::from_key("windows"), None);
        assert!(Platform::Ios.is_native());
        assert!(!Platform::Web.is_native());
    }

    #[test]
    fn test_current_platform_on_host() {
        #[cfg(not(any(target_os = "ios", target_os = "android")))]
        assert_eq!(current_platform(), Platform::Web);
    }

    #[test]
    fn test_render_mode_serde() {
        let modes: Vec<RenderMode> = serde_json::from_str(r#"["native", "web"]"#).unwrap();
        assert_eq!(modes, vec![RenderMode::Native, RenderMode::Web]);
        assert!(serde_json::from_str::<RenderMode>(r#""desktop""#).is_err());
        assert_eq!(serde_json::to_string(&RenderMode::Native).unwrap(), r#""native""#);
    }

    #[test]
    fn test_environment_probe() {
        let theme = Theme::new("test", TokenStore::new());
        let probe = StaticEnvironment::new(Platform::Android, 800.).with_color_mode(ColorMode::Dark);

        let env = Environment::probe(&probe, &theme);
        assert_eq!(env.platform, Platform::Android);
        assert_eq!(env.breakpoint, Breakpoint::Md);
        assert_eq!(env.color_mode, ColorMode::Dark);

        let state = env.active_state(Interaction::new().disabled(true));
        assert_eq!(state.platform, Platform::Android);
        assert!(state.interaction.disabled);
    }
}
