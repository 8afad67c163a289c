use crate::{
    Diagnostics, ResolveError,
    components::{RenderContext, RenderOnce},
    conditions::Interaction,
    props::Props,
    resolver::{ComponentProps, ResolvedProps},
};

/// A dialog surface. Its header is rendered separately with [`ModalHeader`].
#[derive(Debug, Clone, Default)]
pub struct Modal {
    is_open: bool,
    size: Option<String>,
    props: Props,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = self.props.merge(&props);
        self
    }
}

/// Element descriptor of a [`Modal`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModalElement {
    pub is_open: bool,
    pub props: ResolvedProps,
    /// `ModalHeader` props at the modal's size with the modal's `_header`
    /// props on top.
    pub header: Props,
}

impl ModalElement {
    /// A header that inherits this modal's header props.
    pub fn header(&self) -> ModalHeader {
        ModalHeader::new(self.header.clone())
    }
}

impl RenderOnce for Modal {
    type Element = ModalElement;

    fn render(self, cx: &RenderContext<'_>) -> Result<ModalElement, ResolveError> {
        let mut request = ComponentProps::new("Modal").props(self.props);
        request.size = self.size;
        let props = cx.resolve(&request, Interaction::new())?;

        let mut header_request = ComponentProps::new("ModalHeader");
        header_request.size = props.size().map(str::to_string);
        let header_props = cx.resolve(&header_request, Interaction::new())?;

        let header = match &props.header {
            Some(header) => header_props.merge(header),
            None => header_props.into_props(),
        };

        Ok(ModalElement {
            is_open: self.is_open,
            props,
            header,
        })
    }
}

/// The title row of a modal.
#[derive(Debug, Clone, Default)]
pub struct ModalHeader {
    title: Option<String>,
    inherited: Props,
    props: Props,
}

impl ModalHeader {
    /// Creates a header over props inherited from its modal.
    pub fn new(inherited: Props) -> Self {
        Self {
            inherited,
            ..Default::default()
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn props(mut self, props: Props) -> Self {
        self.props = self.props.merge(&props);
        self
    }
}

/// Element descriptor of a [`ModalHeader`].
#[derive(Debug, Clone, PartialEq)]
pub struct ModalHeaderElement {
    pub title: Option<String>,
    pub props: Props,
    pub diagnostics: Diagnostics,
}

impl RenderOnce for ModalHeader {
    type Element = ModalHeaderElement;

    fn render(self, cx: &RenderContext<'_>) -> Result<ModalHeaderElement, ResolveError> {
        let mut diagnostics = Diagnostics::new();
        let caller = cx.resolver.resolve_props(&self.props, &mut diagnostics);

        Ok(ModalHeaderElement {
            title: self.title,
            props: self.inherited.merge(&caller),
            diagnostics,
        })
    }
}
