use crate::{
    ResolveError,
    components::{RenderContext, RenderOnce},
    conditions::Interaction,
    props::Props,
    resolver::{ComponentProps, ResolvedProps},
};

/// A single line text input.
#[derive(Debug, Clone)]
pub struct Input {
    placeholder: Option<String>,
    value: Option<String>,
    editable: bool,
    variant: Option<String>,
    size: Option<String>,
    interaction: Interaction,
    props: Props,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            placeholder: None,
            value: None,
            editable: true,
            variant: None,
            size: None,
            interaction: Interaction::default(),
            props: Props::default(),
        }
    }
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
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

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.interaction.invalid = invalid;
        self
    }

    pub fn interaction(mut self, interaction: Interaction) -> Self {
        self.interaction = interaction;
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = self.props.merge(&props);
        self
    }
}

/// Element descriptor of an [`Input`].
#[derive(Debug, Clone, PartialEq)]
pub struct InputElement {
    pub placeholder: Option<String>,
    pub value: Option<String>,
    /// False when disabled, even if the input was created editable.
    pub editable: bool,
    pub props: ResolvedProps,
}

impl RenderOnce for Input {
    type Element = InputElement;

    fn render(self, cx: &RenderContext<'_>) -> Result<InputElement, ResolveError> {
        let mut request = ComponentProps::new("Input").props(self.props);
        request.variant = self.variant;
        request.size = self.size;

        let props = cx.resolve(&request, self.interaction)?;

        Ok(InputElement {
            placeholder: self.placeholder,
            value: self.value,
            editable: self.editable && !self.interaction.disabled,
            props,
        })
    }
}
