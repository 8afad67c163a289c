use std::sync::Arc;

use crate::Theme;

/// Supplies the process-wide theme.
///
/// Implementations must hand out the same immutable theme for as long as
/// they live; resolution never mutates it.
pub trait ThemeProvider {
    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;
}

impl ThemeProvider for Theme {
    fn get_theme(&self) -> &Theme {
        self
    }
}

impl ThemeProvider for Arc<Theme> {
    fn get_theme(&self) -> &Theme {
        self.as_ref()
    }
}

impl<T: ThemeProvider + ?Sized> ThemeProvider for &T {
    fn get_theme(&self) -> &Theme {
        (**self).get_theme()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenStore;

    #[test]
    fn test_shared_theme_provider() {
        let theme = Arc::new(Theme::new("shared", TokenStore::new()));
        let clone = Arc::clone(&theme);

        assert_eq!(clone.get_theme().name, "shared");
        assert!(std::ptr::eq(theme.get_theme(), clone.get_theme()));
    }

    #[test]
    fn test_builtin_provider() {
        let provider: &Theme = Theme::default_theme();
        assert_eq!(provider.get_theme().name, Theme::default_theme().name);
    }
}
