//! GPU rendering.
//!
//! Renderers own their GPU resources and create them lazily on first use,
//! so they can be constructed before a device exists.

mod ctx;
pub mod square;

pub use ctx::{RenderCtx, RenderTarget};
pub use square::SquareRenderer;
