//! Component facades.
//!
//! Each facade collects its caller-facing options, runs the resolution
//! pipeline on every render and returns a plain element descriptor for an
//! external renderer to draw.

use tesserae_theme::Theme;

use crate::{
    ResolveError,
    conditions::Interaction,
    env::{Environment, EnvironmentProbe},
    resolver::{ComponentProps, PropsResolver, ResolvedProps},
};

mod button;
pub use button::*;

mod icon;
pub use icon::*;

mod input;
pub use input::*;

mod modal;
pub use modal::*;

pub mod select;
pub use select::{Select, SelectElement};

/// Turns a facade into its element descriptor.
pub trait RenderOnce {
    type Element;

    fn render(self, cx: &RenderContext<'_>) -> Result<Self::Element, ResolveError>;
}

/// The resolver and environment facades render against.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub resolver: PropsResolver<'a>,
    pub environment: Environment,
}

impl<'a> RenderContext<'a> {
    pub fn new(resolver: PropsResolver<'a>, environment: Environment) -> Self {
        Self {
            resolver,
            environment,
        }
    }

    /// Reads the environment from a probe.
    pub fn probe(resolver: PropsResolver<'a>, probe: &impl EnvironmentProbe) -> Self {
        Self::new(resolver, Environment::probe(probe, resolver.theme()))
    }

    pub fn theme(&self) -> &'a Theme {
        self.resolver.theme()
    }

    /// Resolves a request for one component instance.
    pub fn resolve(
        &self,
        request: &ComponentProps,
        interaction: Interaction,
    ) -> Result<ResolvedProps, ResolveError> {
        self.resolver
            .resolve(request, &self.environment.active_state(interaction))
    }
}
