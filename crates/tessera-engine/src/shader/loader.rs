use crate::page::Page;

use super::reflect::{self, Interface};
use super::{ShaderError, ShaderStage};

/// A compiled and validated shader stage.
#[derive(Debug, Clone)]
pub struct Shader {
    id: String,
    stage: ShaderStage,
    source: String,
    entry_point: String,
    pub(crate) interface: Interface,
}

impl Shader {
    /// Compiles WGSL `source` for `stage`.
    ///
    /// The module must parse, validate and declare an entry point for
    /// `stage`; the first such entry point is used.
    pub fn compile(
        id: impl Into<String>,
        stage: ShaderStage,
        source: impl Into<String>,
    ) -> Result<Self, ShaderError> {
        let id = id.into();
        let source = source.into();

        let module = naga::front::wgsl::parse_str(&source).map_err(|e| ShaderError::Compile {
            id: id.clone(),
            log: e.emit_to_string(&source),
        })?;

        // Only what a device without optional features supports.
        let info = naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::default(),
        )
        .validate(&module)
        .map_err(|e| ShaderError::Compile {
            id: id.clone(),
            log: error_chain(e.as_inner()),
        })?;

        let (index, entry) = module
            .entry_points
            .iter()
            .enumerate()
            .find(|(_, ep)| ep.stage == stage.to_naga())
            .ok_or_else(|| ShaderError::MissingEntryPoint { id: id.clone(), stage })?;

        let interface = reflect::entry_interface(&module, entry, info.get_entry_point(index));
        let entry_point = entry.name.clone();

        log::debug!("compiled {stage} shader `{id}` (entry point `{entry_point}`)");

        Ok(Self {
            id,
            stage,
            source,
            entry_point,
            interface,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn entry_point(&self) -> &str {
        &self.entry_point
    }
}

/// Loads the shader stored in the page's script element `id`.
///
/// Returns `Ok(None)` when no element has that id or when its `type` is not
/// a known shader MIME type. Compilation failures are errors.
pub fn get_shader(page: &Page<'_>, id: &str) -> Result<Option<Shader>, ShaderError> {
    let Some(script) = page.element_by_id(id) else {
        log::warn!("no shader script with id `{id}`");
        return Ok(None);
    };

    let mime = script.attr("type").unwrap_or_default();
    let Some(stage) = ShaderStage::from_mime(mime) else {
        log::warn!("script `{id}` has unknown shader type `{mime}`");
        return Ok(None);
    };

    Shader::compile(id, stage, script.text_content()).map(Some)
}

fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut cur = err.source();
    while let Some(e) = cur {
        out.push_str(": ");
        out.push_str(&e.to_string());
        cur = e.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::fixtures::{FS, VS};
    use crate::shader::IoSlot;

    fn page(scripts: &str) -> String {
        format!("<html><head>{scripts}</head></html>")
    }

    fn script(id: &str, mime: &str, src: &str) -> String {
        format!(r#"<script id="{id}" type="{mime}"><![CDATA[{src}]]></script>"#)
    }

    #[test]
    fn loads_vertex_and_fragment_scripts() {
        let src = page(&format!(
            "{}{}",
            script("shader-vs", ShaderStage::VERTEX_MIME, VS),
            script("shader-fs", ShaderStage::FRAGMENT_MIME, FS),
        ));
        let page = Page::parse(&src).unwrap();

        let vs = get_shader(&page, "shader-vs").unwrap().unwrap();
        assert_eq!(vs.stage(), ShaderStage::Vertex);
        assert_eq!(vs.entry_point(), "vs_main");
        assert_eq!(vs.id(), "shader-vs");

        let fs = get_shader(&page, "shader-fs").unwrap().unwrap();
        assert_eq!(fs.stage(), ShaderStage::Fragment);
        assert_eq!(fs.entry_point(), "fs_main");
    }

    #[test]
    fn missing_script_is_none() {
        let src = page("");
        let page = Page::parse(&src).unwrap();
        assert!(get_shader(&page, "shader-vs").unwrap().is_none());
    }

    #[test]
    fn unknown_type_is_none() {
        let src = page(&script("shader-vs", "text/javascript", VS));
        let page = Page::parse(&src).unwrap();
        assert!(get_shader(&page, "shader-vs").unwrap().is_none());
    }

    #[test]
    fn syntax_error_carries_the_info_log() {
        let src = page(&script("shader-fs", ShaderStage::FRAGMENT_MIME, "@fragment fn fs_main( {"));
        let page = Page::parse(&src).unwrap();

        match get_shader(&page, "shader-fs") {
            Err(ShaderError::Compile { id, log }) => {
                assert_eq!(id, "shader-fs");
                assert!(!log.is_empty());
            }
            other => panic!("expected compile error, got {other:?}"),
        }
    }

    #[test]
    fn validation_error_is_a_compile_error() {
        // Parses, but returns the wrong type.
        let bad = "@fragment fn fs_main() -> @location(0) vec4<f32> { return 1.0; }";
        let err = Shader::compile("shader-fs", ShaderStage::Fragment, bad).unwrap_err();
        assert!(matches!(err, ShaderError::Compile { .. }));
    }

    #[test]
    fn optional_device_features_are_rejected() {
        let f64_fs = r#"
@fragment
fn fs_main() -> @location(0) vec4<f32> {
    let x: f64 = 1.0lf;
    return vec4<f32>(f32(x));
}
"#;
        let err = Shader::compile("shader-fs", ShaderStage::Fragment, f64_fs).unwrap_err();
        assert!(matches!(err, ShaderError::Compile { .. }));
    }

    #[test]
    fn wrong_stage_entry_point_is_reported() {
        let err = Shader::compile("shader-fs", ShaderStage::Fragment, VS).unwrap_err();
        assert_eq!(
            err,
            ShaderError::MissingEntryPoint {
                id: "shader-fs".to_string(),
                stage: ShaderStage::Fragment,
            }
        );
    }

    #[test]
    fn interface_is_reflected() {
        let vs = Shader::compile("vs", ShaderStage::Vertex, VS).unwrap();
        assert_eq!(
            vs.interface.inputs,
            vec![IoSlot { name: Some("vertexPosition".to_string()), location: 0 }]
        );
        assert!(vs.interface.outputs.is_empty());
        assert_eq!(vs.interface.uniforms.len(), 1);
        assert_eq!(vs.interface.uniforms[0].name, "transform");
        assert_eq!(vs.interface.uniforms[0].ty, "mat4x4<f32>");
        assert_eq!(vs.interface.resources.len(), 1);
        assert!(vs.interface.resources[0].uniform);
    }

    #[test]
    fn unused_bindings_are_not_resources() {
        let fs = format!("@group(0) @binding(3) var<uniform> tint: vec4<f32>;\n{FS}");
        let fs = Shader::compile("shader-fs", ShaderStage::Fragment, fs).unwrap();
        assert_eq!(fs.interface.uniforms[0].ty, "vec4<f32>");
        assert!(fs.interface.resources.is_empty());
    }
}
