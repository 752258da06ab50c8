//! Pyramid-shaped volumes.

use super::Sphere;
use nalgebra::{Point3, UnitVector3};
use tinyvec::ArrayVec;

/// The maximum number of vertices, including the apex, of a [`Pyramid`].
pub const MAX_PYRAMID_VERTICES: usize = 8;

/// A pyramid defined by its apex and the ring of vertices forming its base.
#[derive(Clone, Debug, PartialEq)]
pub struct Pyramid {
    vertices: ArrayVec<[Point3<f32>; MAX_PYRAMID_VERTICES]>,
}

/// A pyramid whose base is the far end of a cone-like region, described by
/// the cone axis, the distance from the apex to the base and the half angle
/// of the cone enclosing the pyramid.
#[derive(Clone, Debug, PartialEq)]
pub struct PyramidCone {
    pyramid: Pyramid,
    axis: UnitVector3<f32>,
    length: f32,
    cos_half_angle: f32,
    sin_half_angle: f32,
}

/// The part of a [`PyramidCone`] infinitely far away along its axis, which
/// is fully described by the axis and the angular extent of the cone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InfinitePyramidBase {
    apex: Point3<f32>,
    axis: UnitVector3<f32>,
    cos_half_angle: f32,
    sin_half_angle: f32,
}

impl Pyramid {
    /// Creates a pyramid with the given apex and base vertices. The base
    /// vertices must be ordered cyclically.
    ///
    /// # Panics
    /// If there are fewer than three base vertices or more than
    /// `MAX_PYRAMID_VERTICES - 1`.
    pub fn new(apex: Point3<f32>, base_vertices: &[Point3<f32>]) -> Self {
        assert!(
            base_vertices.len() >= 3,
            "Tried to create pyramid with fewer than three base vertices"
        );
        assert!(
            base_vertices.len() < MAX_PYRAMID_VERTICES,
            "Tried to create pyramid with more than {} base vertices",
            MAX_PYRAMID_VERTICES - 1
        );
        let mut vertices = ArrayVec::new();
        vertices.push(apex);
        vertices.extend_from_slice(base_vertices);
        Self { vertices }
    }

    /// Returns the apex of the pyramid.
    pub fn apex(&self) -> &Point3<f32> {
        &self.vertices[0]
    }

    /// Returns the base vertices of the pyramid.
    pub fn base_vertices(&self) -> &[Point3<f32>] {
        &self.vertices[1..]
    }

    /// Returns all vertices of the pyramid, starting with the apex.
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }
}

impl PyramidCone {
    /// Creates a pyramid cone from the given pyramid, the axis from the apex
    /// towards the base, the distance along the axis from the apex to the
    /// base and the cosine of the half angle of the cone enclosing the
    /// pyramid.
    ///
    /// # Panics
    /// If `cos_half_angle` is not in the range [0, 1].
    pub fn new(pyramid: Pyramid, axis: UnitVector3<f32>, length: f32, cos_half_angle: f32) -> Self {
        assert!((0.0..=1.0).contains(&cos_half_angle));
        Self {
            pyramid,
            axis,
            length,
            cos_half_angle,
            sin_half_angle: (1.0 - cos_half_angle * cos_half_angle).sqrt(),
        }
    }

    /// Returns the pyramid.
    pub fn pyramid(&self) -> &Pyramid {
        &self.pyramid
    }

    /// Returns the axis from the apex towards the base.
    pub fn axis(&self) -> &UnitVector3<f32> {
        &self.axis
    }

    /// Returns the distance along the axis from the apex to the base.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Computes a sphere around the apex containing the whole pyramid.
    pub fn compute_bounding_sphere(&self) -> Sphere {
        let apex = self.pyramid.apex();
        let radius = self
            .pyramid
            .base_vertices()
            .iter()
            .map(|vertex| nalgebra::distance(apex, vertex))
            .fold(0.0, f32::max);
        Sphere::new(*apex, radius)
    }

    /// Returns the infinitely distant base of the pyramid cone.
    pub fn infinite_base(&self) -> InfinitePyramidBase {
        InfinitePyramidBase {
            apex: *self.pyramid.apex(),
            axis: self.axis,
            cos_half_angle: self.cos_half_angle,
            sin_half_angle: self.sin_half_angle,
        }
    }
}

impl InfinitePyramidBase {
    /// Returns the apex the base is projected from.
    pub fn apex(&self) -> &Point3<f32> {
        &self.apex
    }

    /// Returns the direction towards the base.
    pub fn axis(&self) -> &UnitVector3<f32> {
        &self.axis
    }

    /// Returns the cosine of the half angle of the enclosing cone.
    pub fn cos_half_angle(&self) -> f32 {
        self.cos_half_angle
    }

    /// Returns the sine of the half angle of the enclosing cone.
    pub fn sin_half_angle(&self) -> f32 {
        self.sin_half_angle
    }
}
