//! Camera state for a single frame.

use crate::angle::Angle;
use nalgebra::{Isometry3, Matrix4, Point3, UnitVector3, Vector3};

/// The camera matrices and frame counter for the current frame.
///
/// A new state is produced once per frame by whatever owns the camera and is
/// only read by the visibility computations for the rest of the frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraState {
    view_matrix: Matrix4<f32>,
    inverse_view_matrix: Matrix4<f32>,
    projection_matrix: Matrix4<f32>,
    view_projection_matrix: Matrix4<f32>,
    current_frame: u64,
}

/// A perspective transformation with the far plane at infinity, mapping
/// points in a view frustum pointing along the negative z-axis into the
/// cube spanning from -1 to 1 along all axes in normalized device
/// coordinates.
///
/// Points at infinite distance map to a depth of exactly 1 unless a depth
/// epsilon is applied, which pulls them slightly inside the depth range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InfinitePerspectiveTransform {
    matrix: Matrix4<f32>,
}

impl CameraState {
    /// Creates the camera state for the given rigid transformation from world
    /// space to camera space, projection matrix and frame number.
    pub fn new(
        view_transform: &Isometry3<f32>,
        projection_matrix: Matrix4<f32>,
        current_frame: u64,
    ) -> Self {
        let view_matrix = view_transform.to_homogeneous();
        Self {
            view_matrix,
            inverse_view_matrix: view_transform.inverse().to_homogeneous(),
            projection_matrix,
            view_projection_matrix: projection_matrix * view_matrix,
            current_frame,
        }
    }

    /// Creates the camera state from the given view matrix, which must
    /// represent a rigid transformation, as well as the projection matrix and
    /// frame number.
    pub fn from_rigid_view_matrix(
        view_matrix: Matrix4<f32>,
        projection_matrix: Matrix4<f32>,
        current_frame: u64,
    ) -> Self {
        let rotation_transpose = view_matrix.fixed_view::<3, 3>(0, 0).transpose();
        let translation = view_matrix.fixed_view::<3, 1>(0, 3);
        let inverse_translation = -(rotation_transpose * translation);

        let mut inverse_view_matrix = Matrix4::identity();
        inverse_view_matrix
            .fixed_view_mut::<3, 3>(0, 0)
            .copy_from(&rotation_transpose);
        inverse_view_matrix
            .fixed_view_mut::<3, 1>(0, 3)
            .copy_from(&inverse_translation);

        Self {
            view_matrix,
            inverse_view_matrix,
            projection_matrix,
            view_projection_matrix: projection_matrix * view_matrix,
            current_frame,
        }
    }

    /// Returns the matrix transforming from world space to camera space.
    pub fn view_matrix(&self) -> &Matrix4<f32> {
        &self.view_matrix
    }

    /// Returns the matrix transforming from camera space to world space.
    pub fn inverse_view_matrix(&self) -> &Matrix4<f32> {
        &self.inverse_view_matrix
    }

    /// Returns the projection matrix.
    pub fn projection_matrix(&self) -> &Matrix4<f32> {
        &self.projection_matrix
    }

    /// Returns the product of the projection and view matrix.
    pub fn view_projection_matrix(&self) -> &Matrix4<f32> {
        &self.view_projection_matrix
    }

    /// Returns the number of the current frame.
    pub fn current_frame(&self) -> u64 {
        self.current_frame
    }

    /// Computes the world space position of the camera.
    pub fn compute_world_position(&self) -> Point3<f32> {
        self.inverse_view_matrix.transform_point(&Point3::origin())
    }

    /// Computes the world space direction the camera is looking in.
    pub fn compute_world_view_direction(&self) -> UnitVector3<f32> {
        UnitVector3::new_normalize(self.inverse_view_matrix.transform_vector(&-Vector3::z()))
    }
}

impl InfinitePerspectiveTransform {
    /// Creates a new infinite perspective transformation.
    ///
    /// `field_of_view` is the full angle spanned by the view frustum along
    /// the x-axis, and `aspect_ratio` is the ratio of width to height of the
    /// view plane.
    ///
    /// # Panics
    /// If `aspect_ratio` or `near_distance` is not positive.
    pub fn new(field_of_view: impl Angle, aspect_ratio: f32, near_distance: f32) -> Self {
        Self::with_depth_epsilon(field_of_view, aspect_ratio, near_distance, 0.0)
    }

    /// Creates a new infinite perspective transformation that maps infinitely
    /// distant points to the normalized device depth `1 - epsilon` rather
    /// than exactly to 1.
    ///
    /// # Panics
    /// If `aspect_ratio` or `near_distance` is not positive.
    pub fn with_depth_epsilon(
        field_of_view: impl Angle,
        aspect_ratio: f32,
        near_distance: f32,
        epsilon: f32,
    ) -> Self {
        assert!(aspect_ratio > 0.0);
        assert!(near_distance > 0.0);

        let e = 1.0 / (0.5 * field_of_view.radians()).tan();

        let mut matrix = Matrix4::zeros();
        matrix.m11 = e;
        matrix.m22 = e * aspect_ratio;
        matrix.m33 = epsilon - 1.0;
        matrix.m34 = near_distance * (epsilon - 2.0);
        matrix.m43 = -1.0;

        Self { matrix }
    }

    /// Returns the projection matrix.
    pub fn as_matrix(&self) -> &Matrix4<f32> {
        &self.matrix
    }

    /// Returns the projection matrix.
    pub fn to_matrix(&self) -> Matrix4<f32> {
        self.matrix
    }
}
