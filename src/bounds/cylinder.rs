//! Representation of cylinders.

use super::{AxisAlignedBox, Sphere};
use nalgebra::{Point3, UnitVector3, Vector3};

/// A finite cylinder represented by its center, the unit vector along its
/// axis, its length along the axis and its radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cylinder {
    center: Point3<f32>,
    axis: UnitVector3<f32>,
    length: f32,
    radius: f32,
}

/// A cylinder starting at an endpoint and extending infinitely along its
/// axis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HalfCylinder {
    endpoint: Point3<f32>,
    axis: UnitVector3<f32>,
    radius: f32,
}

impl Cylinder {
    /// Creates a new cylinder with the given center, axis direction, length
    /// and radius.
    ///
    /// # Panics
    /// If `length` or `radius` is negative.
    pub fn new(center: Point3<f32>, axis: UnitVector3<f32>, length: f32, radius: f32) -> Self {
        assert!(length >= 0.0);
        assert!(radius >= 0.0);
        Self {
            center,
            axis,
            length,
            radius,
        }
    }

    /// Returns the center of the cylinder.
    pub fn center(&self) -> &Point3<f32> {
        &self.center
    }

    /// Returns the unit vector along the cylinder axis.
    pub fn axis(&self) -> &UnitVector3<f32> {
        &self.axis
    }

    /// Returns the length of the cylinder along its axis.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Returns the radius of the cylinder.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Computes the centers of the two end caps of the cylinder, the first
    /// one lying in the negative axis direction from the center.
    pub fn compute_endpoints(&self) -> [Point3<f32>; 2] {
        let half_axis = self.axis.into_inner() * (0.5 * self.length);
        [self.center - half_axis, self.center + half_axis]
    }

    /// Computes the half extent of the cylinder projected onto the given unit
    /// normal.
    pub fn compute_effective_radius(&self, unit_normal: &UnitVector3<f32>) -> f32 {
        let cos_angle = self.axis.dot(&unit_normal.into_inner()).abs();
        0.5 * self.length * cos_angle + self.radius * (1.0 - cos_angle * cos_angle).max(0.0).sqrt()
    }

    /// Whether the given point is inside the cylinder or on its boundary.
    pub fn contains_point(&self, point: &Point3<f32>) -> bool {
        let displacement = point - self.center;
        let axial_distance = self.axis.dot(&displacement);
        let radial_distance_squared = displacement.magnitude_squared() - axial_distance.powi(2);
        axial_distance.abs() <= 0.5 * self.length
            && radial_distance_squared <= self.radius * self.radius
    }

    /// Computes the smallest sphere centered on the cylinder that contains
    /// it.
    pub fn compute_bounding_sphere(&self) -> Sphere {
        Sphere::new(
            self.center,
            (0.25 * self.length * self.length + self.radius * self.radius).sqrt(),
        )
    }

    /// Computes the axis-aligned box tightly enclosing the cylinder.
    pub fn compute_aabb(&self) -> AxisAlignedBox {
        let half_extents = Vector3::from_fn(|dim, _| {
            let axis_component = self.axis[dim];
            0.5 * self.length * axis_component.abs()
                + self.radius * (1.0 - axis_component * axis_component).max(0.0).sqrt()
        });
        AxisAlignedBox::new(self.center - half_extents, self.center + half_extents)
    }

    /// Computes the eight corners of a box enclosing the cylinder, aligned
    /// with the cylinder axis. Corners 0-3 form one face parallel to the
    /// axis and corners 4-7 the opposite face, with corners `i` and `i + 4`
    /// sharing an edge.
    ///
    /// The orientation of the box around the axis is determined from a
    /// reference up vector, which is chosen so that it is never close to
    /// parallel with the axis.
    pub fn compute_bounding_box_corners(&self) -> [Point3<f32>; 8] {
        let axis = self.axis.into_inner();

        let up = if axis.x.abs() < 0.01 && axis.z.abs() < 0.01 {
            if axis.y > 0.0 {
                -Vector3::z()
            } else {
                Vector3::z()
            }
        } else {
            Vector3::y()
        };

        let first_tangent = up.cross(&axis).normalize() * self.radius;
        let second_tangent = axis.cross(&first_tangent);

        let [start, end] = self.compute_endpoints();

        let face_points = [
            end + first_tangent,
            start + first_tangent,
            start - first_tangent,
            end - first_tangent,
        ];

        std::array::from_fn(|idx| {
            if idx < 4 {
                face_points[idx] + second_tangent
            } else {
                face_points[idx - 4] - second_tangent
            }
        })
    }
}

impl HalfCylinder {
    /// Creates a new half-cylinder starting at the given endpoint and
    /// extending along the given axis with the given radius.
    ///
    /// # Panics
    /// If `radius` is negative.
    pub fn new(endpoint: Point3<f32>, axis: UnitVector3<f32>, radius: f32) -> Self {
        assert!(radius >= 0.0);
        Self {
            endpoint,
            axis,
            radius,
        }
    }

    /// Returns the point where the half-cylinder starts.
    pub fn endpoint(&self) -> &Point3<f32> {
        &self.endpoint
    }

    /// Returns the unit vector along which the half-cylinder extends.
    pub fn axis(&self) -> &UnitVector3<f32> {
        &self.axis
    }

    /// Returns the radius of the half-cylinder.
    pub fn radius(&self) -> f32 {
        self.radius
    }
}
