//! Host page document.
//!
//! The demo is described by a small XHTML page: a `<canvas>` giving the
//! drawable size and `<script>` elements carrying shader source, addressed by
//! element id. This module parses that page and exposes the few DOM-style
//! lookups the loader needs.

mod canvas;
mod document;
mod error;

pub use canvas::Canvas;
pub use document::{Element, Page};
pub use error::PageError;
