//! Representation of planes.

use super::Sphere;
use approx::AbsDiffEq;
use nalgebra::{Matrix4, Point3, UnitVector3, Vector3, Vector4};

/// A plane in 3D, represented by a unit normal and a displacement.
///
/// The displacement `d` can be determined from the normal `n` and any point
/// `p` lying on the plane as `d = -n.dot(p)`. The homogeneous coefficients of
/// the plane are thus `(n, d)`, and the plane equation is `n.dot(x) + d = 0`.
///
/// The plane divides space into two halfspaces, the positive and negative
/// halfspace. The positive one is defined as the halfspace the unit normal
/// is pointing into. Every volume in this crate defined by a set of planes
/// considers the positive halfspaces of its planes as its inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    unit_normal: UnitVector3<f32>,
    displacement: f32,
}

/// How a sphere is positioned relative to a plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SphereRelationToPlane {
    /// The center of the sphere lies strictly in the negative halfspace of
    /// the plane.
    CenterInNegativeHalfspace(IntersectsPlane),
    /// The center of the sphere lies in or on the boundary of the positive
    /// halfspace of the plane.
    CenterInPositiveHalfspace(IntersectsPlane),
}

/// Whether any part of a sphere intersects a plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum IntersectsPlane {
    /// Some part of the sphere intersects the plane.
    Yes,
    /// No part of the sphere intersects the plane.
    No,
}

impl Plane {
    /// Creates a new plane defined by the given unit normal vector and
    /// displacement.
    pub fn new(unit_normal: UnitVector3<f32>, displacement: f32) -> Self {
        Self {
            unit_normal,
            displacement,
        }
    }

    /// Creates a new plane defined by the given unit normal vector and point
    /// in the plane.
    pub fn from_normal_and_point(unit_normal: UnitVector3<f32>, point_in_plane: &Point3<f32>) -> Self {
        Self::new(
            unit_normal,
            Self::calculate_displacement(&unit_normal, point_in_plane),
        )
    }

    /// Creates a new plane from the given homogeneous coefficients
    /// `(a, b, c, d)`, which need not be normalized. Returns [`None`] if the
    /// normal part of the coefficients is (close to) zero.
    pub fn from_homogeneous_coefficients(coefficients: &Vector4<f32>) -> Option<Self> {
        let (unit_normal, magnitude) =
            UnitVector3::try_new_and_get(coefficients.xyz(), f32::EPSILON)?;
        Some(Self::new(unit_normal, coefficients.w / magnitude))
    }

    /// Creates the plane containing the three given points. The normal points
    /// along `(point_1 - point_0).cross(point_2 - point_0)`. Returns [`None`]
    /// if the points are (close to) collinear.
    pub fn from_points(
        point_0: &Point3<f32>,
        point_1: &Point3<f32>,
        point_2: &Point3<f32>,
    ) -> Option<Self> {
        Self::from_unnormalized_normal_and_point(
            (point_1 - point_0).cross(&(point_2 - point_0)),
            point_0,
        )
    }

    /// Creates the plane with the given (not necessarily normalized) normal
    /// passing through the given point. Returns [`None`] if the normal is
    /// (close to) zero.
    pub fn from_unnormalized_normal_and_point(
        normal: Vector3<f32>,
        point_in_plane: &Point3<f32>,
    ) -> Option<Self> {
        UnitVector3::try_new(normal, f32::EPSILON)
            .map(|unit_normal| Self::from_normal_and_point(unit_normal, point_in_plane))
    }

    /// Returns the unit normal vector of the plane.
    pub fn unit_normal(&self) -> &UnitVector3<f32> {
        &self.unit_normal
    }

    /// Returns the displacement of the plane.
    pub fn displacement(&self) -> f32 {
        self.displacement
    }

    /// Returns the homogeneous coefficients `(a, b, c, d)` of the plane.
    pub fn to_homogeneous(&self) -> Vector4<f32> {
        self.unit_normal.into_inner().push(self.displacement)
    }

    /// Computes the signed distance from the plane to the given point. If the
    /// signed distance is negative, the point lies in the negative halfspace
    /// of the plane.
    pub fn compute_signed_distance(&self, point: &Point3<f32>) -> f32 {
        self.unit_normal.dot(&point.coords) + self.displacement
    }

    /// Computes the dot product of the homogeneous plane coefficients with
    /// the given homogeneous vector. For `w = 1` this is the signed distance
    /// to the point, while for `w = 0` it is the projection of the direction
    /// onto the normal.
    pub fn compute_homogeneous_dot(&self, homogeneous: &Vector4<f32>) -> f32 {
        self.unit_normal.dot(&homogeneous.xyz()) + self.displacement * homogeneous.w
    }

    /// Whether the given point is strictly in the positive halfspace of the
    /// plane.
    pub fn point_lies_in_positive_halfspace(&self, point: &Point3<f32>) -> bool {
        self.compute_signed_distance(point) > 0.0
    }

    /// Whether the given point is strictly in the negative halfspace of the
    /// plane.
    pub fn point_lies_in_negative_halfspace(&self, point: &Point3<f32>) -> bool {
        self.compute_signed_distance(point) < 0.0
    }

    /// Determines how the given sphere is positioned relative to the plane.
    pub fn determine_sphere_relation(&self, sphere: &Sphere) -> SphereRelationToPlane {
        let signed_distance = self.compute_signed_distance(sphere.center());

        let intersects_plane = if signed_distance.abs() < sphere.radius() {
            IntersectsPlane::Yes
        } else {
            IntersectsPlane::No
        };

        if signed_distance < 0.0 {
            SphereRelationToPlane::CenterInNegativeHalfspace(intersects_plane)
        } else {
            SphereRelationToPlane::CenterInPositiveHalfspace(intersects_plane)
        }
    }

    /// Returns the same plane with the positive and negative halfspaces
    /// swapped.
    pub fn flipped(&self) -> Self {
        Self::new(-self.unit_normal, -self.displacement)
    }

    /// Returns the plane flipped if necessary so that the given point does
    /// not lie in its negative halfspace.
    pub fn oriented_towards_point(&self, point: &Point3<f32>) -> Self {
        if self.point_lies_in_negative_halfspace(point) {
            self.flipped()
        } else {
            *self
        }
    }

    /// Returns the plane with the same normal passing through the given
    /// point.
    pub fn translated_to_point(&self, point: &Point3<f32>) -> Self {
        Self::from_normal_and_point(self.unit_normal, point)
    }

    /// Computes the plane whose homogeneous coefficients are the product of
    /// the transpose of the given matrix with the coefficients of this plane.
    ///
    /// If the matrix maps points from space A to space B and this plane is
    /// defined in space B, the result is the same plane expressed in space A,
    /// provided the matrix is a rigid transformation.
    pub fn transformed_with_transpose_of(&self, matrix: &Matrix4<f32>) -> Self {
        let coefficients = matrix.tr_mul(&self.to_homogeneous());
        let (unit_normal, magnitude) = UnitVector3::new_and_get(coefficients.xyz());
        Self::new(unit_normal, coefficients.w / magnitude)
    }

    fn calculate_displacement(unit_normal: &UnitVector3<f32>, point_in_plane: &Point3<f32>) -> f32 {
        -unit_normal.dot(&point_in_plane.coords)
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(Vector3::z_axis(), 0.0)
    }
}

impl AbsDiffEq for Plane {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.unit_normal.abs_diff_eq(&other.unit_normal, epsilon)
            && self.displacement.abs_diff_eq(&other.displacement, epsilon)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra::{Isometry3, Translation3, UnitQuaternion, point, vector};

    #[test]
    fn creating_plane_through_origin_gives_zero_displacement() {
        let plane = Plane::from_normal_and_point(
            UnitVector3::new_normalize(vector![1.2, -0.1, 2.7]),
            &Point3::origin(),
        );
        assert_abs_diff_eq!(plane.displacement(), 0.0);
    }

    #[test]
    fn signed_distance_is_correct() {
        let plane = Plane::from_normal_and_point(Vector3::y_axis(), &point![1.0, 2.0, 0.0]);
        assert_abs_diff_eq!(
            plane.compute_signed_distance(&point![-1.2, 0.0, 42.4]),
            -2.0
        );
        assert_abs_diff_eq!(
            plane.compute_signed_distance(&point![-2.1, 10.0, 4.42]),
            8.0
        );
    }

    #[test]
    fn homogeneous_dot_with_direction_ignores_displacement() {
        let plane = Plane::new(Vector3::x_axis(), 5.0);
        assert_abs_diff_eq!(
            plane.compute_homogeneous_dot(&vector![2.0, 3.0, 4.0, 0.0]),
            2.0
        );
        assert_abs_diff_eq!(
            plane.compute_homogeneous_dot(&vector![2.0, 3.0, 4.0, 1.0]),
            7.0
        );
    }

    #[test]
    fn plane_from_unnormalized_coefficients_is_normalized() {
        let plane = Plane::from_homogeneous_coefficients(&vector![0.0, 0.0, -2.0, -4.0]).unwrap();
        assert_abs_diff_eq!(plane.unit_normal().into_inner(), vector![0.0, 0.0, -1.0]);
        assert_abs_diff_eq!(plane.displacement(), -2.0);
    }

    #[test]
    fn plane_from_zero_coefficients_is_rejected() {
        assert!(Plane::from_homogeneous_coefficients(&vector![0.0, 0.0, 0.0, 1.0]).is_none());
    }

    #[test]
    fn plane_from_points_contains_points() {
        let points = [
            point![1.0, 0.0, 2.0],
            point![0.0, 3.0, -1.0],
            point![-2.0, 1.0, 0.5],
        ];
        let plane = Plane::from_points(&points[0], &points[1], &points[2]).unwrap();
        for point in &points {
            assert_abs_diff_eq!(plane.compute_signed_distance(point), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn plane_from_collinear_points_is_rejected() {
        assert!(
            Plane::from_points(
                &point![0.0, 0.0, 0.0],
                &point![1.0, 1.0, 1.0],
                &point![2.0, 2.0, 2.0]
            )
            .is_none()
        );
    }

    #[test]
    fn orienting_plane_towards_point_puts_point_in_positive_halfspace() {
        let plane = Plane::new(Vector3::y_axis(), 0.0);
        let point = point![0.0, -3.0, 0.0];
        let oriented = plane.oriented_towards_point(&point);
        assert!(oriented.point_lies_in_positive_halfspace(&point));
        assert_abs_diff_eq!(oriented, plane.flipped());
        assert_abs_diff_eq!(oriented.oriented_towards_point(&point), oriented);
    }

    #[test]
    fn translating_plane_to_point_keeps_normal() {
        let plane = Plane::new(Vector3::x_axis(), 3.0);
        let translated = plane.translated_to_point(&point![-2.0, 7.0, 1.0]);
        assert_abs_diff_eq!(translated.unit_normal(), plane.unit_normal());
        assert_abs_diff_eq!(translated.displacement(), 2.0);
    }

    #[test]
    fn transforming_plane_with_transpose_maps_it_to_source_space() {
        let transform = Isometry3::from_parts(
            Translation3::new(1.0, -2.0, 3.0),
            UnitQuaternion::from_euler_angles(0.3, -0.7, 1.1),
        );
        let matrix = transform.to_homogeneous();
        let plane_in_target = Plane::new(UnitVector3::new_normalize(vector![1.0, 2.0, -0.5]), 0.7);

        let plane_in_source = plane_in_target.transformed_with_transpose_of(&matrix);

        let point_in_source = point![4.0, -1.5, 0.25];
        let point_in_target = transform.transform_point(&point_in_source);
        assert_abs_diff_eq!(
            plane_in_source.compute_signed_distance(&point_in_source),
            plane_in_target.compute_signed_distance(&point_in_target),
            epsilon = 1e-5
        );
    }

    #[test]
    fn sphere_relation_is_determined_from_center_side_and_distance() {
        let plane = Plane::new(Vector3::z_axis(), 0.0);
        assert_eq!(
            plane.determine_sphere_relation(&Sphere::new(point![0.0, 0.0, -0.5], 1.0)),
            SphereRelationToPlane::CenterInNegativeHalfspace(IntersectsPlane::Yes)
        );
        assert_eq!(
            plane.determine_sphere_relation(&Sphere::new(point![0.0, 0.0, 2.0], 1.0)),
            SphereRelationToPlane::CenterInPositiveHalfspace(IntersectsPlane::No)
        );
    }
}
