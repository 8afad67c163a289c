//! Select: a native picker on [`RenderMode::Native`], a custom input plus
//! action sheet on [`RenderMode::Web`].
//!
//! A select resolves three specs. `Select` picks the variant, the spec it
//! redirects to for the render mode (`NativeSelect` or `CustomSelect`) adds
//! the rest, and `Input` supplies the field look for that variant at the
//! requested size.

use crate::{
    Diagnostics, ResolveError,
    components::{Icon, IconElement, RenderContext, RenderOnce},
    conditions::{Condition, Interaction},
    env::{Platform, RenderMode},
    props::{BORDER_PROPS, LAYOUT_PROPS, PropValue, Props},
    resolver::ComponentProps,
};

mod item;
pub use item::*;

const ANDROID_PROPS: &[&str] = &["androidIconColor", "androidMode", "androidPrompt"];

/// A dropdown select over a list of items.
pub struct Select<I: SelectItem> {
    items: Vec<I>,
    selected_value: Option<I::Value>,
    default_value: Option<I::Value>,
    placeholder: Option<String>,
    render_mode: RenderMode,
    variant: Option<String>,
    size: Option<String>,
    interaction: Interaction,
    dropdown_icon: Option<Icon>,
    props: Props,
}

impl<I: SelectItem> Select<I> {
    pub fn new(items: impl IntoIterator<Item = I>) -> Self {
        Self {
            items: items.into_iter().collect(),
            selected_value: None,
            default_value: None,
            placeholder: None,
            render_mode: RenderMode::default(),
            variant: None,
            size: None,
            interaction: Interaction::default(),
            dropdown_icon: None,
            props: Props::default(),
        }
    }

    /// Sets the controlled value. It wins over [`Select::default_value`].
    pub fn selected_value(mut self, value: I::Value) -> Self {
        self.selected_value = Some(value);
        self
    }

    pub fn default_value(mut self, value: I::Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
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

    /// Replaces the themed dropdown icon.
    pub fn dropdown_icon(mut self, icon: Icon) -> Self {
        self.dropdown_icon = Some(icon);
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = self.props.merge(&props);
        self
    }
}

/// Element descriptor of a [`Select`].
pub enum SelectElement<I: SelectItem> {
    Native(NativeSelectElement<I>),
    Custom(CustomSelectElement<I>),
}

impl<I: SelectItem> SelectElement<I> {
    pub fn selected_index(&self) -> Option<usize> {
        match self {
            SelectElement::Native(native) => native.selected_index,
            SelectElement::Custom(custom) => custom.selected_index,
        }
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        match self {
            SelectElement::Native(native) => &native.diagnostics,
            SelectElement::Custom(custom) => &custom.diagnostics,
        }
    }
}

/// A platform picker.
pub struct NativeSelectElement<I: SelectItem> {
    /// Margin, size, flex and background props around the picker.
    pub wrapper: Props,
    pub picker: Props,
    pub item_style: Props,
    /// Only set on Android.
    pub android_icon_color: Option<PropValue>,
    /// Only set on Android.
    pub android_mode: Option<PropValue>,
    pub prompt: Option<String>,
    pub items: Vec<I>,
    pub selected_index: Option<usize>,
    pub enabled: bool,
    pub diagnostics: Diagnostics,
}

/// A read-only input that opens an action sheet of items.
pub struct CustomSelectElement<I: SelectItem> {
    pub wrapper: Props,
    pub input: Props,
    /// Label of the selected item, shown in the input.
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub dropdown_icon: IconElement,
    pub action_sheet_content: Props,
    pub item: Props,
    pub selected_item: Props,
    pub items: Vec<I>,
    pub selected_index: Option<usize>,
    pub disabled: bool,
    pub diagnostics: Diagnostics,
}

impl<I: SelectItem> RenderOnce for Select<I> {
    type Element = SelectElement<I>;

    fn render(self, cx: &RenderContext<'_>) -> Result<SelectElement<I>, ResolveError> {
        let mut request = ComponentProps::new("Select")
            .render_mode(self.render_mode)
            .props(self.props);
        request.variant = self.variant;
        let select = cx.resolve(&request, self.interaction)?;

        // The custom select's input never takes focus; its wrapper shows the ring.
        let input_interaction = match self.render_mode {
            RenderMode::Native => self.interaction,
            RenderMode::Web => Interaction {
                focused: false,
                ..self.interaction
            },
        };

        let mut input_request = ComponentProps::new("Input");
        input_request.variant = select.variant().map(str::to_string);
        input_request.size = self.size;
        let input = cx.resolve(&input_request, input_interaction)?;

        let mut diagnostics = select.diagnostics().clone();
        diagnostics.extend(input.diagnostics().clone());

        let merged = input.merge(&select);
        let (border, rest) = merged.split(BORDER_PROPS);
        let (layout, rest) = rest.split(LAYOUT_PROPS);
        let (nested, rest) = rest.split(Props::NESTED_KEYS);

        let value = self.selected_value.or(self.default_value);
        let selected_index = value
            .as_ref()
            .and_then(|value| self.items.iter().position(|item| item.value() == value));

        let nested_or_default = |props: &Option<Box<Props>>| props.as_deref().cloned().unwrap_or_default();

        match self.render_mode {
            RenderMode::Native => {
                let (android, rest) = rest.split(ANDROID_PROPS);
                let is_android = cx.environment.platform == Platform::Android;

                let item_style = nested_or_default(&nested.item_style);
                let item_style = Props {
                    color: item_style.color.clone().or_else(|| merged.color.clone()),
                    ..item_style
                };

                let prompt = android
                    .android_prompt
                    .as_ref()
                    .map(PropValue::to_string)
                    .or(self.placeholder);

                Ok(SelectElement::Native(NativeSelectElement {
                    wrapper: layout,
                    picker: border.merge(&rest),
                    item_style,
                    android_icon_color: android.android_icon_color.filter(|_| is_android),
                    android_mode: android.android_mode.filter(|_| is_android),
                    prompt,
                    items: self.items,
                    selected_index,
                    enabled: !self.interaction.disabled,
                    diagnostics,
                }))
            }

            RenderMode::Web => {
                let ring = Props::new().border_width("1").border_color("transparent");
                let mut wrapper = cx
                    .resolver
                    .resolve_props(&ring, &mut diagnostics)
                    .merge(&layout)
                    .merge(&Props {
                        border_radius: border.border_radius.clone(),
                        ..Props::default()
                    });

                let state = cx.environment.active_state(self.interaction);
                if Condition::Focus.matches(&state) {
                    let focus = cx
                        .resolver
                        .resolve_variant(
                            "Input",
                            RenderMode::Web,
                            input_request.variant.as_deref(),
                            input_request.size.as_deref(),
                        )?
                        .conditions
                        .get(&Condition::Focus)
                        .cloned()
                        .unwrap_or_default();
                    wrapper = wrapper.merge(&focus);
                }

                let dropdown_icon = match self.dropdown_icon {
                    Some(icon) => icon,
                    None => Icon::new()
                        .name("arrow-drop-down")
                        .props(nested_or_default(&nested.dropdown_icon)),
                }
                .render(cx)?;

                let label = selected_index.map(|index| self.items[index].label().to_string());

                Ok(SelectElement::Custom(CustomSelectElement {
                    wrapper,
                    input: border.merge(&rest),
                    label,
                    placeholder: self.placeholder,
                    dropdown_icon,
                    action_sheet_content: nested_or_default(&nested.action_sheet_content),
                    item: nested_or_default(&nested.item),
                    selected_item: nested_or_default(&nested.selected_item),
                    items: self.items,
                    selected_index,
                    disabled: self.interaction.disabled,
                    diagnostics,
                }))
            }
        }
    }
}
