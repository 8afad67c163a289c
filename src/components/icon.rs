use enum_assoc::Assoc;
use tesserae_theme::Rgba;

use crate::{
    ResolveError,
    components::{RenderContext, RenderOnce},
    conditions::Interaction,
    props::{PropValue, Props},
    resolver::{ComponentProps, ResolvedProps},
};

/// Icon fonts a glyph can be drawn from.
#[derive(Assoc, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[func(pub fn font_family(&self) -> &'static str)]
pub enum IconFamily {
    #[assoc(font_family = "AntDesign")]
    AntDesign,
    #[assoc(font_family = "Entypo")]
    Entypo,
    #[assoc(font_family = "EvilIcons")]
    EvilIcons,
    #[assoc(font_family = "Feather")]
    Feather,
    #[assoc(font_family = "FontAwesome")]
    FontAwesome,
    #[assoc(font_family = "FontAwesome5")]
    FontAwesome5,
    #[assoc(font_family = "Foundation")]
    Foundation,
    #[assoc(font_family = "Ionicons")]
    Ionicons,
    #[assoc(font_family = "MaterialCommunityIcons")]
    MaterialCommunityIcons,
    #[default]
    #[assoc(font_family = "MaterialIcons")]
    MaterialIcons,
    #[assoc(font_family = "Octicons")]
    Octicons,
    #[assoc(font_family = "SimpleLineIcons")]
    SimpleLineIcons,
    #[assoc(font_family = "Zocial")]
    Zocial,
}

/// What the renderer should draw.
#[derive(Debug, Clone, PartialEq)]
pub enum IconGlyph {
    /// A named glyph of an icon font.
    Font { family: IconFamily, name: String },
    /// Children drawn as SVG by the renderer.
    Svg,
}

/// An icon from an icon font, or an SVG icon when no name is given.
#[derive(Debug, Clone, Default)]
pub struct Icon {
    name: Option<String>,
    family: IconFamily,
    size: Option<String>,
    props: Props,
}

impl Icon {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn family(mut self, family: IconFamily) -> Self {
        self.family = family;
        self
    }

    /// Sets a size preset (`sm`, `lg`, ...), a `sizes` token or a pixel length.
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets a color, overriding the theme's icon color.
    pub fn color(mut self, color: impl Into<PropValue>) -> Self {
        self.props.color = Some(color.into());
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = self.props.merge(&props);
        self
    }

    pub fn has_color(&self) -> bool {
        self.props.color.is_some()
    }
}

/// Element descriptor of an [`Icon`].
#[derive(Debug, Clone, PartialEq)]
pub struct IconElement {
    pub glyph: IconGlyph,
    /// Whole pixels, truncated from the resolved size.
    pub font_size: Option<u32>,
    pub color: Option<Rgba>,
    pub props: ResolvedProps,
}

impl RenderOnce for Icon {
    type Element = IconElement;

    fn render(self, cx: &RenderContext<'_>) -> Result<IconElement, ResolveError> {
        let (_, spec) = cx.resolver.registry().get("Icon")?;

        let mut request = ComponentProps::new("Icon").props(self.props);
        match self.size {
            Some(size) if spec.sizes.contains_key(&size) => request.size = Some(size),
            // Anything that isn't a preset is a size value.
            Some(size) => request.props.size = Some(PropValue::parse(&size)),
            None => {}
        }

        let props = cx.resolve(&request, Interaction::new())?;

        let font_size = props
            .size
            .as_ref()
            .and_then(|size| size.to_px(cx.theme().rem_size))
            .map(|px| px.trunc() as u32);
        let color = props.color.as_ref().and_then(PropValue::as_color);

        let glyph = match self.name {
            Some(name) => IconGlyph::Font {
                family: self.family,
                name,
            },
            None => IconGlyph::Svg,
        };

        Ok(IconElement {
            glyph,
            font_size,
            color,
            props,
        })
    }
}

#[cfg(test)]
mod tests {
    use tesserae_theme::{TokenCategory, TokenValue};

    use super::*;
    use crate::{
        Diagnostic,
        components::test_support::cx,
        env::Platform,
    };

    #[test]
    fn test_default_family() {
        assert_eq!(IconFamily::default(), IconFamily::MaterialIcons);
        assert_eq!(IconFamily::FontAwesome5.font_family(), "FontAwesome5");
    }

    #[test]
    fn test_named_icon_uses_font_glyph() {
        let icon = Icon::new()
            .name("home")
            .family(IconFamily::Feather)
            .render(&cx(Platform::Ios))
            .unwrap();

        assert_eq!(
            icon.glyph,
            IconGlyph::Font {
                family: IconFamily::Feather,
                name: "home".into()
            }
        );
        assert_eq!(icon.font_size, Some(20), "default size preset");
    }

    #[test]
    fn test_unnamed_icon_is_svg() {
        let icon = Icon::new().render(&cx(Platform::Web)).unwrap();
        assert_eq!(icon.glyph, IconGlyph::Svg);
    }

    #[test]
    fn test_size_preset() {
        let icon = Icon::new().name("close").size("xl").render(&cx(Platform::Web)).unwrap();

        assert_eq!(icon.font_size, Some(32));
        assert_eq!(icon.props.size(), Some("xl"));
    }

    #[test]
    fn test_size_value_truncates() {
        let icon = Icon::new().name("close").size("18.9px").render(&cx(Platform::Web)).unwrap();
        assert_eq!(icon.font_size, Some(18));

        let icon = Icon::new().name("close").size("1.5rem").render(&cx(Platform::Web)).unwrap();
        assert_eq!(icon.font_size, Some(24));
    }

    #[test]
    fn test_size_token() {
        let icon = Icon::new().name("close").size("12").render(&cx(Platform::Web)).unwrap();
        assert_eq!(icon.font_size, Some(48));
    }

    #[test]
    fn test_color_token_resolved() {
        let icon = Icon::new()
            .name("warning")
            .color("error.500")
            .render(&cx(Platform::Android))
            .unwrap();

        let Ok(TokenValue::Color(expected)) =
            cx(Platform::Android).theme().resolve_token(TokenCategory::Colors, "error.500")
        else {
            panic!("error.500 should be a color");
        };
        assert_eq!(icon.color, Some(*expected));
    }

    #[test]
    fn test_unknown_color_keeps_raw_value() {
        let icon = Icon::new()
            .name("warning")
            .color("brand.999")
            .render(&cx(Platform::Web))
            .unwrap();

        assert_eq!(icon.color, None);
        assert_eq!(icon.props.color, Some(PropValue::Text("brand.999".into())));
        assert!(matches!(
            icon.props.diagnostics()[0],
            Diagnostic::UnknownToken { prop: "color", .. }
        ));
    }
}
