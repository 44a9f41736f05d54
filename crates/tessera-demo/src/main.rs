use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use winit::dpi::LogicalSize;

use tessera_engine::device::GpuInit;
use tessera_engine::logging::{init_logging, LoggingConfig};
use tessera_engine::page::Page;
use tessera_engine::shader::{get_shader, Program, ShaderError};
use tessera_engine::window::{Runtime, RuntimeConfig};

mod motion;
mod scene;

use scene::{DemoApp, SceneKind};

/// Page used when no path is given on the command line.
const BUILTIN_PAGE: &str = include_str!("../page/index.xhtml");

const CANVAS_ID: &str = "mainCanvas";
const VERTEX_SHADER_ID: &str = "shader-vs";
const FRAGMENT_SHADER_ID: &str = "shader-fs";

const USAGE: &str = "Usage: tessera-demo [clear|square] [page]";

fn main() -> ExitCode {
    init_logging(LoggingConfig::default());

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let options = CliOptions::parse(std::env::args().skip(1))?;

    let source = match &options.page {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read page {}", path.display()))?,
        None => BUILTIN_PAGE.to_string(),
    };
    let page = Page::parse(&source).context("failed to load page")?;
    let canvas = page.canvas(CANVAS_ID)?;

    log::info!(
        "scene `{}` on {}x{} canvas",
        options.scene.name(),
        canvas.width,
        canvas.height
    );

    let app = match options.scene {
        SceneKind::Clear => DemoApp::clear(),
        SceneKind::Square => DemoApp::square(load_program(&page)?)?,
    };

    let config = RuntimeConfig {
        title: page.title().unwrap_or_else(|| "tessera".to_string()),
        initial_size: LogicalSize::new(canvas.width as f64, canvas.height as f64),
        frame_interval: Some(RuntimeConfig::DEFAULT_FRAME_INTERVAL),
    };

    Runtime::run(config, GpuInit::default(), app)
}

/// Compiles and links the page's shader pair.
fn load_program(page: &Page<'_>) -> Result<Program, ShaderError> {
    let fragment = get_shader(page, FRAGMENT_SHADER_ID)?.ok_or_else(|| {
        ShaderError::MissingShader {
            id: FRAGMENT_SHADER_ID.to_string(),
        }
    })?;
    let vertex = get_shader(page, VERTEX_SHADER_ID)?.ok_or_else(|| {
        ShaderError::MissingShader {
            id: VERTEX_SHADER_ID.to_string(),
        }
    })?;

    Program::link(vertex, fragment)
}

#[derive(Debug, PartialEq)]
struct CliOptions {
    scene: SceneKind,
    page: Option<PathBuf>,
}

impl CliOptions {
    fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut scene = None;
        let mut page = None;

        for arg in args {
            if arg == "-h" || arg == "--help" {
                return Err(anyhow!(USAGE));
            }
            if arg.starts_with('-') {
                return Err(anyhow!("unknown option `{arg}`. {USAGE}"));
            }
            // A leading scene name is optional; the next positional is the page.
            if scene.is_none() && page.is_none() {
                if let Some(kind) = SceneKind::from_name(&arg) {
                    scene = Some(kind);
                    continue;
                }
            }
            if page.is_none() {
                page = Some(PathBuf::from(arg));
                continue;
            }
            return Err(anyhow!("unexpected argument `{arg}`. {USAGE}"));
        }

        Ok(Self {
            scene: scene.unwrap_or(SceneKind::Square),
            page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions> {
        CliOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_to_square_with_builtin_page() {
        let o = parse(&[]).unwrap();
        assert_eq!(o, CliOptions { scene: SceneKind::Square, page: None });
    }

    #[test]
    fn scene_and_page() {
        let o = parse(&["clear", "demo.xhtml"]).unwrap();
        assert_eq!(o.scene, SceneKind::Clear);
        assert_eq!(o.page, Some(PathBuf::from("demo.xhtml")));
    }

    #[test]
    fn page_alone() {
        let o = parse(&["pages/other.xhtml"]).unwrap();
        assert_eq!(o.scene, SceneKind::Square);
        assert!(o.page.is_some());
    }

    #[test]
    fn page_may_have_any_extension() {
        let o = parse(&["square", "page.xml"]).unwrap();
        assert_eq!(o.page, Some(PathBuf::from("page.xml")));

        let o = parse(&["index.html"]).unwrap();
        assert_eq!(o, CliOptions { scene: SceneKind::Square, page: Some(PathBuf::from("index.html")) });
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(parse(&["square", "a.xhtml", "b.xhtml"]).is_err());
        assert!(parse(&["a.xhtml", "b.xhtml"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["--help"]).is_err());
    }

    #[test]
    fn builtin_page_is_complete() {
        let page = Page::parse(BUILTIN_PAGE).unwrap();
        let canvas = page.canvas(CANVAS_ID).unwrap();
        assert_eq!((canvas.width, canvas.height), (640, 480));
        assert!(page.title().is_some());

        let program = load_program(&page).unwrap();
        assert_eq!(program.attrib_location("vertexPosition"), Some(0));
        assert!(program.uniform_binding("transform").is_some());
    }

    #[test]
    fn page_without_shaders_reports_the_missing_one() {
        let page = Page::parse("<html><body/></html>").unwrap();
        let err = load_program(&page).unwrap_err();
        assert_eq!(err, ShaderError::MissingShader { id: FRAGMENT_SHADER_ID.to_string() });
    }
}
