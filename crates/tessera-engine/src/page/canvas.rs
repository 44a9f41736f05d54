use super::{Page, PageError};

/// Drawable surface declared by the page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// HTML's default canvas size when attributes are absent.
    pub const DEFAULT: Canvas = Canvas { width: 300, height: 150 };

    /// Width over height.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }
}

impl Page<'_> {
    /// Looks up the `<canvas>` element with the given id.
    pub fn canvas(&self, id: &str) -> Result<Canvas, PageError> {
        let el = self
            .element_by_id(id)
            .ok_or_else(|| PageError::MissingElement { id: id.to_string() })?;
        el.expect_tag("canvas")?;

        let dimension = |name: &'static str, default: u32| match el.attr(name) {
            None => Ok(default),
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|v| *v > 0)
                .ok_or_else(|| PageError::InvalidAttribute {
                    id: id.to_string(),
                    name,
                    value: raw.to_string(),
                }),
        };

        Ok(Canvas {
            width: dimension("width", Canvas::DEFAULT.width)?,
            height: dimension("height", Canvas::DEFAULT.height)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(body: &str) -> String {
        format!("<html><body>{body}</body></html>")
    }

    #[test]
    fn reads_declared_size() {
        let src = page_with(r#"<canvas id="mainCanvas" width="640" height="480"/>"#);
        let page = Page::parse(&src).unwrap();
        let canvas = page.canvas("mainCanvas").unwrap();
        assert_eq!(canvas, Canvas { width: 640, height: 480 });
        assert!((canvas.aspect() - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn missing_attributes_use_html_defaults() {
        let src = page_with(r#"<canvas id="c"/>"#);
        let page = Page::parse(&src).unwrap();
        assert_eq!(page.canvas("c").unwrap(), Canvas::DEFAULT);
    }

    #[test]
    fn missing_canvas_is_reported() {
        let src = page_with("");
        let page = Page::parse(&src).unwrap();
        assert_eq!(
            page.canvas("mainCanvas").unwrap_err(),
            PageError::MissingElement { id: "mainCanvas".to_string() }
        );
    }

    #[test]
    fn non_canvas_element_is_rejected() {
        let src = page_with(r#"<div id="mainCanvas"/>"#);
        let page = Page::parse(&src).unwrap();
        assert!(matches!(
            page.canvas("mainCanvas"),
            Err(PageError::WrongElement { .. })
        ));
    }

    #[test]
    fn zero_or_garbage_size_is_rejected() {
        for bad in ["0", "-5", "wide", ""] {
            let src = page_with(&format!(r#"<canvas id="c" width="{bad}"/>"#));
            let page = Page::parse(&src).unwrap();
            assert_eq!(
                page.canvas("c").unwrap_err(),
                PageError::InvalidAttribute {
                    id: "c".to_string(),
                    name: "width",
                    value: bad.to_string(),
                }
            );
        }
    }
}
