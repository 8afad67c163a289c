//! Theme-driven props resolution for cross-platform UI components.
//!
//! A component's final props are computed from the theme's design tokens,
//! the component's registered defaults and variants, conditional styles for
//! the active breakpoint, platform and interaction state, and the caller's
//! own props. See [`resolver`] for the pipeline and [`components`] for the
//! facades built on it.

pub use tesserae_theme as theme;

pub mod components;

pub mod conditions;

pub mod env;

pub mod props;

pub mod registry;

pub mod resolver;

mod error;
pub use error::*;

mod assets;
pub use assets::*;
