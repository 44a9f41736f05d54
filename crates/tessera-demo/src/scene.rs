use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use tessera_engine::core::{App, AppControl, FrameCtx};
use tessera_engine::math::{self, ModelView};
use tessera_engine::paint::Color;
use tessera_engine::render::SquareRenderer;
use tessera_engine::shader::{Program, ShaderError};

use crate::motion::Drift;

/// Vertical field of view, degrees.
const FIELD_OF_VIEW: f32 = 45.0;
const Z_NEAR: f32 = 10.0;
const Z_FAR: f32 = 100_000.0;

/// Which demo to show.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SceneKind {
    /// Clear to gray with depth testing on; draws nothing.
    Clear,
    /// Clear to black and draw the drifting square.
    Square,
}

impl SceneKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clear" => Some(SceneKind::Clear),
            "square" => Some(SceneKind::Square),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Clear => "clear",
            SceneKind::Square => "square",
        }
    }

    pub fn clear_color(self) -> Color {
        match self {
            SceneKind::Clear => Color::gray(0.25),
            SceneKind::Square => Color::BLACK,
        }
    }
}

struct Square {
    renderer: SquareRenderer,
    model_view: ModelView,
    drift: Drift,
}

/// The demo application: one clear per tick, plus the square when present.
pub struct DemoApp {
    kind: SceneKind,
    square: Option<Square>,
}

impl DemoApp {
    pub fn clear() -> Self {
        Self {
            kind: SceneKind::Clear,
            square: None,
        }
    }

    pub fn square(program: Program) -> Result<Self, ShaderError> {
        Ok(Self {
            kind: SceneKind::Square,
            square: Some(Square {
                renderer: SquareRenderer::new(program)?,
                model_view: ModelView::new(),
                drift: Drift::default(),
            }),
        })
    }
}

impl App for DemoApp {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.logical_key == Key::Named(NamedKey::Escape) =>
            {
                log::info!("escape pressed; exiting");
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let clear = self.kind.clear_color();

        let Some(square) = self.square.as_mut() else {
            return ctx.render(clear, |_, _| {});
        };

        square.drift.step();
        if ctx.time.frame_index % 600 == 0 {
            log::trace!("frame {} drift {:.2}", ctx.time.frame_index, square.drift.offset());
        }

        ctx.render(clear, |rctx, target| {
            let projection = math::perspective(FIELD_OF_VIEW, rctx.aspect(), Z_NEAR, Z_FAR);

            square.model_view.load_identity();
            square.model_view.translate(square.drift.translation());

            let transform = math::transform(projection, &square.model_view);
            square.renderer.draw(rctx, target, transform);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_names_round_trip() {
        for kind in [SceneKind::Clear, SceneKind::Square] {
            assert_eq!(SceneKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(SceneKind::from_name("cube"), None);
    }

    #[test]
    fn clear_colors_match_each_scene() {
        assert_eq!(SceneKind::Clear.clear_color(), Color::from_premul(0.25, 0.25, 0.25, 1.0));
        assert_eq!(SceneKind::Square.clear_color(), Color::BLACK);
    }

    #[test]
    fn clear_scene_has_no_square() {
        assert!(DemoApp::clear().square.is_none());
    }
}
