//! Spherical sectors, the regions lit by spot lights.

use super::{AxisAlignedBox, Cylinder, Sphere};
use crate::angle::Angle;
use nalgebra::{Point3, UnitVector3};

/// The part of a sphere inside a cone whose apex is at the sphere center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphericalSector {
    apex: Point3<f32>,
    axis: UnitVector3<f32>,
    radius: f32,
    cos_half_angle: f32,
    sin_half_angle: f32,
}

/// The part of a [`SphericalSector`] infinitely far away along its axis,
/// which is fully described by the axis and the half angle of the cone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InfiniteSphericalSector {
    apex: Point3<f32>,
    axis: UnitVector3<f32>,
    cos_half_angle: f32,
    sin_half_angle: f32,
}

impl SphericalSector {
    /// Creates a new spherical sector with the given apex, cone axis, sphere
    /// radius and cone half angle.
    ///
    /// # Panics
    /// If `radius` is negative.
    pub fn new(
        apex: Point3<f32>,
        axis: UnitVector3<f32>,
        radius: f32,
        half_angle: impl Angle,
    ) -> Self {
        assert!(radius >= 0.0);
        let (sin_half_angle, cos_half_angle) = half_angle.radians().sin_cos();
        Self {
            apex,
            axis,
            radius,
            cos_half_angle,
            sin_half_angle,
        }
    }

    /// Returns the apex of the cone, which is also the center of the sphere.
    pub fn apex(&self) -> &Point3<f32> {
        &self.apex
    }

    /// Returns the cone axis.
    pub fn axis(&self) -> &UnitVector3<f32> {
        &self.axis
    }

    /// Returns the radius of the sphere.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Returns the cosine of the cone half angle.
    pub fn cos_half_angle(&self) -> f32 {
        self.cos_half_angle
    }

    /// Returns the sine of the cone half angle.
    pub fn sin_half_angle(&self) -> f32 {
        self.sin_half_angle
    }

    /// Returns the infinitely distant end of the sector.
    pub fn infinite_end(&self) -> InfiniteSphericalSector {
        InfiniteSphericalSector {
            apex: self.apex,
            axis: self.axis,
            cos_half_angle: self.cos_half_angle,
            sin_half_angle: self.sin_half_angle,
        }
    }

    /// Computes a sphere enclosing the sector. For narrow cones this is the
    /// sphere through the apex and the rim of the spherical cap, otherwise
    /// it is the full sphere of the sector.
    pub fn compute_bounding_sphere(&self) -> Sphere {
        if self.cos_half_angle >= 0.5 {
            let radius = self.radius / (2.0 * self.cos_half_angle);
            Sphere::new(self.apex + self.axis.into_inner() * radius, radius)
        } else {
            Sphere::new(self.apex, self.radius)
        }
    }

    /// Computes a cylinder along the cone axis enclosing the sector.
    pub fn compute_bounding_cylinder(&self) -> Cylinder {
        let (length, radius) = if self.cos_half_angle >= 0.0 {
            (self.radius, self.radius * self.sin_half_angle)
        } else {
            (self.radius * (1.0 - self.cos_half_angle), self.radius)
        };
        let center_offset = self.radius - 0.5 * length;
        Cylinder::new(
            self.apex + self.axis.into_inner() * center_offset,
            self.axis,
            length,
            radius,
        )
    }

    /// Computes an axis-aligned box enclosing the sector.
    pub fn compute_aabb(&self) -> AxisAlignedBox {
        self.compute_bounding_cylinder()
            .compute_aabb()
            .intersection_with(&Sphere::new(self.apex, self.radius).compute_aabb())
    }

    /// Whether the given point lies inside the sector or on its boundary.
    pub fn contains_point(&self, point: &Point3<f32>) -> bool {
        let displacement = point - self.apex;
        let distance_squared = displacement.magnitude_squared();
        if distance_squared > self.radius * self.radius {
            return false;
        }
        self.axis.dot(&displacement) >= self.cos_half_angle * distance_squared.sqrt()
    }
}

impl InfiniteSphericalSector {
    /// Returns the apex the sector is projected from.
    pub fn apex(&self) -> &Point3<f32> {
        &self.apex
    }

    /// Returns the cone axis.
    pub fn axis(&self) -> &UnitVector3<f32> {
        &self.axis
    }

    /// Returns the cosine of the cone half angle.
    pub fn cos_half_angle(&self) -> f32 {
        self.cos_half_angle
    }

    /// Returns the sine of the cone half angle.
    pub fn sin_half_angle(&self) -> f32 {
        self.sin_half_angle
    }
}
