use std::fmt;

use super::ShaderStage;

/// Error produced while compiling or linking shaders.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// The page has no usable shader script with this id.
    MissingShader { id: String },
    /// Source failed to parse or validate; `log` is the compiler output.
    Compile { id: String, log: String },
    /// Source compiled but declares no entry point for its stage.
    MissingEntryPoint { id: String, stage: ShaderStage },
    /// A shader was passed where the other stage was expected.
    StageMismatch { id: String, expected: ShaderStage, found: ShaderStage },
    /// Vertex outputs and fragment inputs do not line up.
    Link { log: String },
    /// The program has no vertex input with this name.
    MissingAttribute { name: String },
    /// The program has no uniform with this name.
    MissingUniform { name: String },
    /// A uniform has a different type than the renderer uploads.
    UniformType { name: String, expected: String, found: String },
    /// The program uses a resource the renderer does not bind.
    UnsupportedBinding { name: String, group: u32, binding: u32 },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::MissingShader { id } => write!(f, "no shader script `{id}` in page"),
            ShaderError::Compile { id, log } => {
                write!(f, "an error occurred compiling shader `{id}`:\n{log}")
            }
            ShaderError::MissingEntryPoint { id, stage } => {
                write!(f, "shader `{id}` has no @{stage} entry point")
            }
            ShaderError::StageMismatch { id, expected, found } => {
                write!(f, "shader `{id}` is a {found} shader, expected {expected}")
            }
            ShaderError::Link { log } => {
                write!(f, "unable to initialize the shader program: {log}")
            }
            ShaderError::MissingAttribute { name } => {
                write!(f, "shader program has no vertex attribute `{name}`")
            }
            ShaderError::MissingUniform { name } => {
                write!(f, "shader program has no uniform `{name}`")
            }
            ShaderError::UniformType { name, expected, found } => {
                write!(f, "uniform `{name}` is `{found}`, expected `{expected}`")
            }
            ShaderError::UnsupportedBinding { name, group, binding } => write!(
                f,
                "shader program uses `{name}` at @group({group}) @binding({binding}), which is never bound"
            ),
        }
    }
}

impl std::error::Error for ShaderError {}
