use super::PageError;

/// Parsed host page.
///
/// Borrows the source text; keep the string alive for as long as the page.
pub struct Page<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> Page<'input> {
    /// Parses an XHTML page. A `<!DOCTYPE>` declaration is allowed.
    pub fn parse(text: &'input str) -> Result<Self, PageError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let doc = roxmltree::Document::parse_with_options(text, options)
            .map_err(|e| PageError::Xml(e.to_string()))?;
        Ok(Self { doc })
    }

    /// Text of the first `<title>` element, trimmed.
    pub fn title(&self) -> Option<String> {
        self.doc
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == "title")
            .map(|n| Element { node: n }.text_content().trim().to_string())
            .filter(|t| !t.is_empty())
    }

    /// First element whose `id` attribute equals `id`, in document order.
    pub fn element_by_id<'a>(&'a self, id: &str) -> Option<Element<'a, 'input>> {
        self.doc
            .descendants()
            .find(|n| n.is_element() && n.attribute("id") == Some(id))
            .map(|node| Element { node })
    }
}

/// Element handle borrowed from a [`Page`].
#[derive(Clone, Copy)]
pub struct Element<'a, 'input> {
    node: roxmltree::Node<'a, 'input>,
}

impl<'a, 'input> Element<'a, 'input> {
    /// Local tag name, without namespace.
    pub fn tag_name(&self) -> &'a str {
        self.node.tag_name().name()
    }

    pub fn id(&self) -> Option<&'a str> {
        self.node.attribute("id")
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.node.attribute(name)
    }

    /// Concatenation of the element's direct text children, in order.
    ///
    /// Text inside nested elements is not included. CDATA sections count as
    /// text.
    pub fn text_content(&self) -> String {
        self.node
            .children()
            .filter(|c| c.is_text())
            .filter_map(|c| c.text())
            .collect()
    }

    /// Ensures the element has tag `expected`.
    pub(crate) fn expect_tag(&self, expected: &'static str) -> Result<(), PageError> {
        if self.tag_name() == expected {
            return Ok(());
        }
        Err(PageError::WrongElement {
            id: self.id().unwrap_or_default().to_string(),
            expected,
            found: self.tag_name().to_string(),
        })
    }
}
