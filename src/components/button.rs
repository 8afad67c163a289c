use crate::{
    ResolveError,
    components::{Icon, IconElement, RenderContext, RenderOnce},
    conditions::Interaction,
    props::Props,
    resolver::{ComponentProps, ResolvedProps},
};

/// A pressable button with optional text and icon.
#[derive(Debug, Clone, Default)]
pub struct Button {
    text: Option<String>,
    icon: Option<Icon>,
    variant: Option<String>,
    size: Option<String>,
    interaction: Interaction,
    props: Props,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Sets an icon. It takes the button's text color unless it has its own.
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
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

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.interaction.disabled = disabled;
        self
    }

    pub fn interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    /// Caller props, which beat every themed value.
    pub fn props(mut self, props: Props) -> Self {
        self.props = self.props.merge(&props);
        self
    }
}

/// Element descriptor of a [`Button`].
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonElement {
    pub text: Option<String>,
    pub icon: Option<IconElement>,
    pub disabled: bool,
    pub props: ResolvedProps,
}

impl RenderOnce for Button {
    type Element = ButtonElement;

    fn render(self, cx: &RenderContext<'_>) -> Result<ButtonElement, ResolveError> {
        let mut request = ComponentProps::new("Button").props(self.props);
        request.variant = self.variant;
        request.size = self.size;

        let props = cx.resolve(&request, self.interaction)?;

        let icon = match self.icon {
            Some(icon) => {
                let icon = match (&props.color, icon.has_color()) {
                    (Some(color), false) => icon.color(color.clone()),
                    _ => icon,
                };
                Some(icon.render(cx)?)
            }
            None => None,
        };

        Ok(ButtonElement {
            text: self.text,
            icon,
            disabled: self.interaction.disabled,
            props,
        })
    }
}

#[cfg(test)]
mod tests {
    use tesserae_theme::{TokenCategory, TokenValue};

    use super::*;
    use crate::{components::test_support::cx, env::Platform, props::PropValue};

    fn color(path: &str) -> PropValue {
        match cx(Platform::Web).theme().resolve_token(TokenCategory::Colors, path) {
            Ok(TokenValue::Color(color)) => PropValue::Color(*color),
            other => panic!("{path}: {other:?}"),
        }
    }

    #[test]
    fn test_defaults() {
        let button = Button::new().text("Save").render(&cx(Platform::Web)).unwrap();

        assert_eq!(button.text.as_deref(), Some("Save"));
        assert_eq!(button.props.variant(), Some("solid"));
        assert_eq!(button.props.size(), Some("md"));
        assert_eq!(button.props.bg, Some(color("primary.500")));
        assert!(!button.disabled);
    }

    #[test]
    fn test_icon_inherits_text_color() {
        let button = Button::new()
            .variant("outline")
            .icon(Icon::new().name("add"))
            .render(&cx(Platform::Ios))
            .unwrap();

        let icon = button.icon.unwrap();
        assert_eq!(icon.props.color, Some(color("primary.500")));
        assert_eq!(icon.props.color, button.props.color);
    }

    #[test]
    fn test_icon_keeps_own_color() {
        let button = Button::new()
            .icon(Icon::new().name("add").color("red.500"))
            .render(&cx(Platform::Web))
            .unwrap();

        assert_eq!(button.icon.unwrap().props.color, Some(color("red.500")));
    }

    #[test]
    fn test_disabled_ignores_pressed() {
        let interaction = Interaction::new().pressed(true).disabled(true);
        let button = Button::new()
            .interaction(interaction)
            .render(&cx(Platform::Web))
            .unwrap();

        assert!(button.disabled);
        assert_eq!(button.props.bg, Some(color("primary.500")));
        assert_eq!(button.props.opacity, Some(PropValue::Number(0.4)));
    }

    #[test]
    fn test_caller_props_win() {
        let button = Button::new()
            .variant("ghost")
            .props(Props::new().bg("red.50").px("8"))
            .render(&cx(Platform::Web))
            .unwrap();

        assert_eq!(button.props.bg, Some(color("red.50")));
        assert_eq!(button.props.px, Some(PropValue::Length(tesserae_theme::Length::Px(32.))));
    }
}
