use glam::{Mat4, Vec3};

/// Model-view matrix with the usual immediate-mode helpers.
///
/// All operations post-multiply, so the last transform applied is the first
/// one a vertex sees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelView {
    matrix: Mat4,
}

impl ModelView {
    /// Starts at identity.
    pub const fn new() -> Self {
        Self { matrix: Mat4::IDENTITY }
    }

    /// Resets to identity, the "center of the scene".
    pub fn load_identity(&mut self) {
        self.matrix = Mat4::IDENTITY;
    }

    /// Post-multiplies by `m`.
    pub fn mult(&mut self, m: Mat4) {
        self.matrix *= m;
    }

    /// Post-multiplies by a translation of `v`.
    pub fn translate(&mut self, v: Vec3) {
        self.mult(Mat4::from_translation(v));
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

impl Default for ModelView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_identity() {
        assert_eq!(ModelView::new().matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn translations_accumulate() {
        let mut mv = ModelView::new();
        mv.translate(Vec3::new(1.0, 0.0, 0.0));
        mv.translate(Vec3::new(0.0, 2.0, -6.0));
        assert_eq!(mv.matrix(), Mat4::from_translation(Vec3::new(1.0, 2.0, -6.0)));
    }

    #[test]
    fn load_identity_discards_previous_frame() {
        let mut mv = ModelView::new();
        mv.translate(Vec3::new(3.0, 3.0, 3.0));
        mv.load_identity();
        assert_eq!(mv.matrix(), Mat4::IDENTITY);
    }

    #[test]
    fn mult_post_multiplies() {
        let mut mv = ModelView::new();
        mv.mult(Mat4::from_scale(Vec3::splat(2.0)));
        mv.translate(Vec3::new(1.0, 0.0, 0.0));

        // Translation is applied first, then the scale.
        let p = mv.matrix().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(2.0, 0.0, 0.0));
    }
}
