use crate::TokenCategory;

/// Error returned when a token path is absent from the theme.
///
/// This is recoverable: callers substitute a fallback and carry on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("unknown token '{path}' in category '{category}'")]
    UnknownToken {
        category: TokenCategory,
        path: String,
    },
}

/// Error returned when a theme document cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("could not parse theme document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid color '{0}', expected #rgb, #rgba, #rrggbb or #rrggbbaa")]
    InvalidColor(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_token_display() {
        let err = TokenError::UnknownToken {
            category: TokenCategory::Colors,
            path: "brand.999".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("brand.999"));
        assert!(msg.contains("colors"));
    }

    #[test]
    fn test_invalid_color_display() {
        let msg = ThemeError::InvalidColor("#nope".to_string()).to_string();
        assert!(msg.contains("#nope"));
    }
}
