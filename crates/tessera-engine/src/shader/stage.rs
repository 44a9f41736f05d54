use std::fmt;

/// Programmable pipeline stage a shader is compiled for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    pub const VERTEX_MIME: &'static str = "x-shader/x-vertex";
    pub const FRAGMENT_MIME: &'static str = "x-shader/x-fragment";

    /// Maps a script element `type` to a stage. Unknown types yield `None`.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim() {
            Self::VERTEX_MIME => Some(ShaderStage::Vertex),
            Self::FRAGMENT_MIME => Some(ShaderStage::Fragment),
            _ => None,
        }
    }

    pub(crate) fn to_naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        })
    }
}
