//! Shader loading.
//!
//! Shader sources live in `<script>` elements of the host page. A script's
//! `type` selects the stage (`x-shader/x-vertex` or `x-shader/x-fragment`);
//! its text is WGSL. Sources are parsed and validated with `naga` up front,
//! so a broken shader is reported with its info-log before any GPU object
//! exists, and the reflected interface (attribute locations, uniform
//! bindings) is available to renderers.

mod error;
mod loader;
mod program;
mod reflect;
mod stage;

pub use error::ShaderError;
pub use loader::{get_shader, Shader};
pub use program::{Program, ProgramModules};
pub use reflect::{IoSlot, UniformBinding};
pub use stage::ShaderStage;
