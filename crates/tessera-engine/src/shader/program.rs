use super::reflect::ResourceUse;
use super::{Shader, ShaderError, ShaderStage, UniformBinding};

/// Linked vertex + fragment pair.
#[derive(Debug, Clone)]
pub struct Program {
    vertex: Shader,
    fragment: Shader,
}

/// GPU shader modules created from a [`Program`].
pub struct ProgramModules {
    pub vertex: wgpu::ShaderModule,
    pub vertex_entry: String,
    pub fragment: wgpu::ShaderModule,
    pub fragment_entry: String,
}

impl Program {
    /// Links two compiled stages.
    ///
    /// Every `@location` the fragment stage reads must be written by the
    /// vertex stage.
    pub fn link(vertex: Shader, fragment: Shader) -> Result<Self, ShaderError> {
        expect_stage(&vertex, ShaderStage::Vertex)?;
        expect_stage(&fragment, ShaderStage::Fragment)?;

        let unmatched: Vec<String> = fragment
            .interface
            .inputs
            .iter()
            .filter(|input| {
                !vertex
                    .interface
                    .outputs
                    .iter()
                    .any(|out| out.location == input.location)
            })
            .map(|input| match &input.name {
                Some(name) => format!("`{name}` (location {})", input.location),
                None => format!("location {}", input.location),
            })
            .collect();

        if !unmatched.is_empty() {
            return Err(ShaderError::Link {
                log: format!(
                    "fragment shader `{}` reads {} not written by vertex shader `{}`",
                    fragment.id(),
                    unmatched.join(", "),
                    vertex.id(),
                ),
            });
        }

        log::debug!("linked program `{}` + `{}`", vertex.id(), fragment.id());
        Ok(Self { vertex, fragment })
    }

    pub fn vertex(&self) -> &Shader {
        &self.vertex
    }

    pub fn fragment(&self) -> &Shader {
        &self.fragment
    }

    /// Location of the vertex input named `name`.
    pub fn attrib_location(&self, name: &str) -> Option<u32> {
        self.vertex
            .interface
            .inputs
            .iter()
            .find(|slot| slot.name.as_deref() == Some(name))
            .map(|slot| slot.location)
    }

    /// Bind point of the uniform named `name` in either stage.
    pub fn uniform_binding(&self, name: &str) -> Option<UniformBinding> {
        [&self.vertex, &self.fragment]
            .into_iter()
            .flat_map(|s| s.interface.uniforms.iter())
            .find(|u| u.name == name)
            .map(|u| u.binding)
    }

    /// WGSL type of the uniform named `name`, e.g. `mat4x4<f32>`.
    pub fn uniform_type(&self, name: &str) -> Option<&str> {
        [&self.vertex, &self.fragment]
            .into_iter()
            .flat_map(|s| s.interface.uniforms.iter())
            .find(|u| u.name == name)
            .map(|u| u.ty.as_str())
    }

    /// Resources used by either entry point.
    pub(crate) fn resources(&self) -> impl Iterator<Item = &ResourceUse> {
        self.vertex
            .interface
            .resources
            .iter()
            .chain(self.fragment.interface.resources.iter())
    }

    /// Hands both validated sources to the device.
    pub fn create_modules(&self, device: &wgpu::Device) -> ProgramModules {
        let module = |shader: &Shader| {
            device.create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some(shader.id()),
                source: wgpu::ShaderSource::Wgsl(shader.source().into()),
            })
        };

        ProgramModules {
            vertex: module(&self.vertex),
            vertex_entry: self.vertex.entry_point().to_string(),
            fragment: module(&self.fragment),
            fragment_entry: self.fragment.entry_point().to_string(),
        }
    }
}

fn expect_stage(shader: &Shader, expected: ShaderStage) -> Result<(), ShaderError> {
    if shader.stage() == expected {
        return Ok(());
    }
    Err(ShaderError::StageMismatch {
        id: shader.id().to_string(),
        expected,
        found: shader.stage(),
    })
}
