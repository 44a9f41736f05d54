//! Transform helpers for the classic fixed-function style of positioning
//! geometry: a perspective projection and a model-view matrix that is reset
//! and translated each frame.
//!
//! Matrices are `glam::Mat4`, right-handed, with clip-space depth in `0..1`
//! as wgpu expects.

mod model_view;

pub use model_view::ModelView;

use glam::Mat4;

/// Builds a perspective projection.
///
/// `aspect` is width over height. A non-finite or non-positive aspect (for
/// example a window minimized to zero height) falls back to `1.0`.
pub fn perspective(fovy_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    let aspect = if aspect.is_finite() && aspect > 0.0 { aspect } else { 1.0 };
    Mat4::perspective_rh(fovy_degrees.to_radians(), aspect, near, far)
}

/// Combined transform uploaded to the vertex shader: `projection × model_view`.
#[inline]
pub fn transform(projection: Mat4, model_view: &ModelView) -> Mat4 {
    projection * model_view.matrix()
}

/// Flattens a matrix into the column-major layout of a WGSL `mat4x4<f32>`.
#[inline]
pub fn to_uniform(m: Mat4) -> [f32; 16] {
    m.to_cols_array()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec3, Vec4};

    fn approx(a: Mat4, b: Mat4) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn transform_is_projection_times_translation() {
        let projection = perspective(45.0, 640.0 / 480.0, 10.0, 100_000.0);

        let mut mv = ModelView::new();
        mv.load_identity();
        mv.translate(Vec3::new(0.0, 0.0, -6.0));

        let expected = projection * Mat4::from_translation(Vec3::new(0.0, 0.0, -6.0));
        assert!(approx(transform(projection, &mv), expected));
    }

    #[test]
    fn uniform_is_column_major() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let u = to_uniform(m);
        assert_eq!(&u[12..16], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(u[0], 1.0);
        assert_eq!(u[3], 0.0);
    }

    #[test]
    fn perspective_maps_near_and_far_to_unit_depth() {
        let p = perspective(45.0, 1.0, 10.0, 100_000.0);

        let near = p * Vec4::new(0.0, 0.0, -10.0, 1.0);
        let far = p * Vec4::new(0.0, 0.0, -100_000.0, 1.0);

        assert!((near.z / near.w).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-3);
    }

    #[test]
    fn square_corner_projects_inside_clip_space() {
        let projection = perspective(45.0, 640.0 / 480.0, 10.0, 100_000.0);
        let mut mv = ModelView::new();
        mv.translate(Vec3::new(0.0, 0.0, -6.0));

        let clip = transform(projection, &mv) * Vec4::new(50.0, 50.0, -250.0, 1.0);
        let ndc = clip.truncate() / clip.w;

        assert!(ndc.x > 0.0 && ndc.x < 1.0);
        assert!(ndc.y > 0.0 && ndc.y < 1.0);
        assert!(ndc.z > 0.0 && ndc.z < 1.0);
    }

    #[test]
    fn degenerate_aspect_falls_back_to_square() {
        let expected = perspective(45.0, 1.0, 10.0, 100.0);
        assert!(approx(perspective(45.0, f32::INFINITY, 10.0, 100.0), expected));
        assert!(approx(perspective(45.0, 0.0, 10.0, 100.0), expected));
        assert!(approx(perspective(45.0, f32::NAN, 10.0, 100.0), expected));
    }
}
