use std::ops::Deref;

use smallvec::SmallVec;
use tesserae_theme::TokenError;
use thiserror::Error;
use tracing::warn;

use crate::env::RenderMode;

/// Fatal resolution errors. These point at integration bugs and are never
/// recovered from.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error("no component spec registered for '{0}'")]
    UnknownComponent(String),

    #[error("component '{component}' redirects {mode} rendering to unknown spec '{target}'")]
    UnknownRenderModeTarget {
        component: String,
        mode: RenderMode,
        target: String,
    },
}

/// A resolution problem that was recovered from with a fallback.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Diagnostic {
    #[error("prop '{prop}' kept its raw value: {source}")]
    UnknownToken {
        prop: &'static str,
        #[source]
        source: TokenError,
    },

    #[error("{component} has no variant '{requested}', using {}", describe_fallback(.fallback))]
    InvalidVariant {
        component: String,
        requested: String,
        fallback: Option<String>,
    },

    #[error("{component} has no size '{requested}', using {}", describe_fallback(.fallback))]
    InvalidSize {
        component: String,
        requested: String,
        fallback: Option<String>,
    },
}

fn describe_fallback(fallback: &Option<String>) -> String {
    match fallback {
        Some(name) => format!("'{name}'"),
        None => "no preset".to_string(),
    }
}

/// Diagnostics collected during one resolution, in the order they occurred.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics(SmallVec<[Diagnostic; 2]>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic and logs it as a warning.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!(%diagnostic, "recovered from invalid props");
        self.0.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }
}

impl Deref for Diagnostics {
    type Target = [Diagnostic];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tesserae_theme::TokenCategory;

    #[test]
    fn test_unknown_token_message() {
        let diagnostic = Diagnostic::UnknownToken {
            prop: "bg",
            source: TokenError::UnknownToken {
                category: TokenCategory::Colors,
                path: "brand.999".into(),
            },
        };

        assert_eq!(
            diagnostic.to_string(),
            "prop 'bg' kept its raw value: unknown token 'brand.999' in category 'colors'"
        );
    }

    #[test]
    fn test_invalid_variant_message() {
        let with_fallback = Diagnostic::InvalidVariant {
            component: "Select".into(),
            requested: "ghost-xyz".into(),
            fallback: Some("outline".into()),
        };
        let without_fallback = Diagnostic::InvalidSize {
            component: "Icon".into(),
            requested: "huge".into(),
            fallback: None,
        };

        assert_eq!(
            with_fallback.to_string(),
            "Select has no variant 'ghost-xyz', using 'outline'"
        );
        assert_eq!(without_fallback.to_string(), "Icon has no size 'huge', using no preset");
    }

    #[test]
    fn test_render_mode_target_message() {
        let err = ResolveError::UnknownRenderModeTarget {
            component: "Select".into(),
            mode: RenderMode::Native,
            target: "NativeSelect".into(),
        };
        assert_eq!(
            err.to_string(),
            "component 'Select' redirects native rendering to unknown spec 'NativeSelect'"
        );
    }

    #[test]
    fn test_diagnostics_keep_order() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());

        diagnostics.push(Diagnostic::InvalidSize {
            component: "Button".into(),
            requested: "xxl".into(),
            fallback: Some("md".into()),
        });
        diagnostics.push(Diagnostic::InvalidVariant {
            component: "Button".into(),
            requested: "neon".into(),
            fallback: Some("solid".into()),
        });

        assert_eq!(diagnostics.len(), 2);
        assert!(matches!(diagnostics[0], Diagnostic::InvalidSize { .. }));
        assert!(matches!(diagnostics[1], Diagnostic::InvalidVariant { .. }));
    }
}
