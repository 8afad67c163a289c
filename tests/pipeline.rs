use std::sync::Arc;

use tesserae_props::{
    Diagnostic,
    components::{Button, Icon, Modal, RenderContext, RenderOnce, Select, SelectElement},
    conditions::{Condition, Interaction},
    env::{Platform, RenderMode, StaticEnvironment},
    props::{PropValue, Props},
    registry::ComponentRegistry,
    resolver::{ComponentProps, PropsResolver},
    theme::{Breakpoint, Length, Theme, TokenCategory},
};

const APP_THEME: &str = r##"{
    "name": "App",
    "remSize": "16px",
    "tokens": {
        "colors": {
            "white": "#ffffff",
            "brand": { "500": "#6d28d9", "600": "#5b21b6" },
            "text": { "900": "#111827" }
        },
        "space": { "2": "8px", "4": "16px", "6": "24px" },
        "sizes": { "5": "20px", "full": "100%" },
        "radii": { "md": "6px", "full": "9999px" },
        "fontSizes": { "md": "16px" }
    }
}"##;

const APP_COMPONENTS: &str = r#"{
    "Button": {
        "baseStyle": { "borderRadius": "md", "_web": { "cursor": "pointer" } },
        "defaultVariant": "primary",
        "defaultSize": "md",
        "variants": {
            "primary": {
                "bg": "brand.500",
                "color": "white",
                "_hover": { "bg": "brand.600" }
            },
            "pill": { "borderRadius": "full", "bg": "brand.500" }
        },
        "sizes": {
            "md": { "px": "4", "py": "2", "fontSize": "md" },
            "wide": { "px": "6", "_md": { "w": "full" } }
        }
    },
    "Icon": { "baseStyle": { "color": "text.900" }, "sizes": { "md": { "size": "5" } }, "defaultSize": "md" }
}"#;

fn app_theme() -> Arc<Theme> {
    Arc::new(Theme::from_string(APP_THEME).unwrap())
}

#[test]
fn custom_theme_and_registry() {
    let theme = app_theme();
    let registry = ComponentRegistry::from_string(APP_COMPONENTS).unwrap();
    let resolver = PropsResolver::from_provider(&theme, &registry);
    let cx = RenderContext::probe(resolver, &StaticEnvironment::new(Platform::Web, 1024.));

    let button = Button::new()
        .text("Go")
        .size("wide")
        .interaction(Interaction::new().hovered(true))
        .icon(Icon::new().name("arrow-forward"))
        .render(&cx)
        .unwrap();

    assert_eq!(button.props.bg.as_ref().and_then(PropValue::as_color).unwrap().to_hex(), "#5b21b6");
    assert_eq!(button.props.px, Some(PropValue::Length(Length::Px(24.))));
    assert_eq!(button.props.w, Some(PropValue::Length(Length::Fraction(1.))));
    assert_eq!(button.props.cursor, Some(PropValue::Text("pointer".into())));
    assert!(button.props.diagnostics().is_empty());

    let icon = button.icon.unwrap();
    assert_eq!(icon.color.unwrap().to_hex(), "#ffffff");
    assert_eq!(icon.font_size, Some(20));
}

#[test]
fn breakpoint_rules_follow_window_width() {
    let theme = app_theme();
    let registry = ComponentRegistry::from_string(APP_COMPONENTS).unwrap();
    let resolver = PropsResolver::from_provider(&theme, &registry);

    let narrow = RenderContext::probe(resolver, &StaticEnvironment::new(Platform::Ios, 320.));
    let wide = RenderContext::probe(resolver, &StaticEnvironment::new(Platform::Ios, 800.));
    assert_eq!(narrow.environment.breakpoint, Breakpoint::Base);
    assert_eq!(wide.environment.breakpoint, Breakpoint::Md);

    let render = |cx: &RenderContext<'_>| Button::new().size("wide").render(cx).unwrap();
    assert_eq!(render(&narrow).props.w, None);
    assert_eq!(render(&wide).props.w, Some(PropValue::Length(Length::Fraction(1.))));
}

#[test]
fn unknown_token_degrades_instead_of_failing() {
    let resolver = PropsResolver::builtin();
    let request = ComponentProps::new("Button")
        .variant("solid")
        .props(Props::new().bg("colors.brand.999").color_scheme("red"));

    let resolved = resolver
        .resolve(&request, &resolver_state(Platform::Web))
        .unwrap();

    assert_eq!(resolved.bg, Some(PropValue::Text("colors.brand.999".into())));
    assert_eq!(resolved.color_scheme, Some(PropValue::Text("red".into())));
    assert!(resolved.color.is_some());
    assert!(matches!(
        resolved.diagnostics()[..],
        [Diagnostic::UnknownToken { prop: "bg", .. }]
    ));
}

#[test]
fn select_branches_on_render_mode() {
    let cx = RenderContext::probe(
        PropsResolver::builtin(),
        &StaticEnvironment::new(Platform::Android, 400.),
    );

    let native = Select::new(["one", "two"])
        .render_mode(RenderMode::Native)
        .render(&cx)
        .unwrap();
    let custom = Select::new(["one", "two"]).default_value("two").render(&cx).unwrap();

    assert!(matches!(native, SelectElement::Native(ref select) if select.android_icon_color.is_some()));
    match custom {
        SelectElement::Custom(select) => assert_eq!(select.label.as_deref(), Some("two")),
        SelectElement::Native(_) => panic!("web render mode should give a custom select"),
    }
}

#[test]
fn caller_conditions_and_modal_header() {
    let resolver = PropsResolver::builtin();
    let request = ComponentProps::new("Button")
        .condition(Condition::Platform(Platform::Ios), Props::new().px("6"))
        .condition(Condition::Pressed, Props::new().px("8"));

    let state = resolver_state(Platform::Ios).interaction(Interaction::new().pressed(true));
    let resolved = resolver.resolve(&request, &state).unwrap();
    assert_eq!(
        resolved.px,
        Some(PropValue::from(
            resolver.resolve_token(TokenCategory::Space, "8").unwrap().clone()
        ))
    );

    let cx = RenderContext::probe(resolver, &StaticEnvironment::new(Platform::Web, 1280.));
    let modal = Modal::new().size("sm").open(true).render(&cx).unwrap();
    let header = modal.header().title("Settings").render(&cx).unwrap();
    assert_eq!(header.props, modal.header);
}

fn resolver_state(platform: Platform) -> tesserae_props::conditions::ActiveState {
    tesserae_props::conditions::ActiveState::new(platform)
}
