/// 4x4 homogeneous transform matrices
///
/// All matrices use the row-vector convention: a point is transformed as
/// `[x, y, z, 1] * M`, so translation lives in the last row.
use nalgebra::Matrix4;

use crate::geometry::Axis;

/// Transform builder for homogeneous 3D transformations
pub struct Transform;

impl Transform {
    pub fn identity() -> Matrix4<f64> {
        Matrix4::identity()
    }

    /// Create a translation matrix
    #[rustfmt::skip]
    pub fn translation_matrix(dx: f64, dy: f64, dz: f64) -> Matrix4<f64> {
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            dx, dy, dz, 1.0,
        )
    }

    /// Create a scale matrix about the origin
    #[rustfmt::skip]
    pub fn scale_matrix(sx: f64, sy: f64, sz: f64) -> Matrix4<f64> {
        Matrix4::new(
            sx, 0.0, 0.0, 0.0,
            0.0, sy, 0.0, 0.0,
            0.0, 0.0, sz, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn uniform_scale_matrix(factor: f64) -> Matrix4<f64> {
        Self::scale_matrix(factor, factor, factor)
    }

    /// Rotation about the X axis; +Y turns toward +Z
    #[rustfmt::skip]
    pub fn rotate_x_matrix(radians: f64) -> Matrix4<f64> {
        let (s, c) = radians.sin_cos();
        Matrix4::new(
            1.0, 0.0, 0.0, 0.0,
            0.0, c, s, 0.0,
            0.0, -s, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about the Y axis; +Z turns toward +X
    #[rustfmt::skip]
    pub fn rotate_y_matrix(radians: f64) -> Matrix4<f64> {
        let (s, c) = radians.sin_cos();
        Matrix4::new(
            c, 0.0, -s, 0.0,
            0.0, 1.0, 0.0, 0.0,
            s, 0.0, c, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    /// Rotation about the Z axis; +X turns toward +Y
    #[rustfmt::skip]
    pub fn rotate_z_matrix(radians: f64) -> Matrix4<f64> {
        let (s, c) = radians.sin_cos();
        Matrix4::new(
            c, s, 0.0, 0.0,
            -s, c, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        )
    }

    pub fn rotation_matrix(axis: Axis, radians: f64) -> Matrix4<f64> {
        match axis {
            Axis::X => Self::rotate_x_matrix(radians),
            Axis::Y => Self::rotate_y_matrix(radians),
            Axis::Z => Self::rotate_z_matrix(radians),
        }
    }

    /// Combine two transforms so that `first` is applied before `then`
    pub fn compose(first: &Matrix4<f64>, then: &Matrix4<f64>) -> Matrix4<f64> {
        first * then
    }
}
