//! Representation of spheres.

use super::AxisAlignedBox;
use nalgebra::{self as na, Point3, Vector3};

/// A sphere represented by the center point and the radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    center: Point3<f32>,
    radius: f32,
}

impl Sphere {
    /// Creates a new sphere with the given center and radius.
    ///
    /// # Panics
    /// If `radius` is negative.
    pub fn new(center: Point3<f32>, radius: f32) -> Self {
        assert!(radius >= 0.0);
        Self { center, radius }
    }

    /// Returns the center point of the sphere.
    pub fn center(&self) -> &Point3<f32> {
        &self.center
    }

    /// Returns the radius of the sphere.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the square of the radius of the sphere.
    pub fn radius_squared(&self) -> f32 {
        self.radius * self.radius
    }

    /// Whether the given sphere is fully inside this sphere. A sphere is
    /// considered to enclose itself.
    pub fn encloses_sphere(&self, sphere: &Self) -> bool {
        sphere.radius() + na::distance(self.center(), sphere.center()) <= self.radius()
    }

    /// Whether the given point is strictly inside this sphere.
    pub fn contains_point(&self, point: &Point3<f32>) -> bool {
        na::distance_squared(self.center(), point) < self.radius_squared()
    }

    /// Computes the axis-aligned box tightly enclosing the sphere.
    pub fn compute_aabb(&self) -> AxisAlignedBox {
        let half_extents = Vector3::repeat(self.radius);
        AxisAlignedBox::new(self.center - half_extents, self.center + half_extents)
    }
}
