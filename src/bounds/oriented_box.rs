//! Representation of boxes with arbitrary orientations.

use super::{AxisAlignedBox, Plane, Sphere};
use nalgebra::{Point3, UnitQuaternion, UnitVector3, Vector3};

/// A box with arbitrary position, orientation and extents.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrientedBox {
    center: Point3<f32>,
    orientation: UnitQuaternion<f32>,
    half_width: f32,
    half_height: f32,
    half_depth: f32,
}

impl OrientedBox {
    /// Creates a new box with the given center position, orientation quaternion
    /// and half extents along each of its three axes.
    ///
    /// # Panics
    /// If any of the half extents is negative.
    pub fn new(
        center: Point3<f32>,
        orientation: UnitQuaternion<f32>,
        half_width: f32,
        half_height: f32,
        half_depth: f32,
    ) -> Self {
        assert!(half_width >= 0.0 && half_height >= 0.0 && half_depth >= 0.0);
        Self {
            center,
            orientation,
            half_width,
            half_height,
            half_depth,
        }
    }

    /// Creates the oriented box equivalent to the given axis-aligned box.
    pub fn from_axis_aligned_box(aabb: &AxisAlignedBox) -> Self {
        let half_extents = 0.5 * aabb.extents();
        Self::new(
            aabb.center(),
            UnitQuaternion::identity(),
            half_extents.x,
            half_extents.y,
            half_extents.z,
        )
    }

    /// Returns the center of the box.
    pub fn center(&self) -> &Point3<f32> {
        &self.center
    }

    /// Returns the orientation of the box.
    pub fn orientation(&self) -> &UnitQuaternion<f32> {
        &self.orientation
    }

    /// Returns half the width of the box.
    pub fn half_width(&self) -> f32 {
        self.half_width
    }

    /// Returns half the height of the box.
    pub fn half_height(&self) -> f32 {
        self.half_height
    }

    /// Returns half the depth of the box.
    pub fn half_depth(&self) -> f32 {
        self.half_depth
    }

    /// Computes the unit vector representing the width axis of the box.
    pub fn compute_width_axis(&self) -> UnitVector3<f32> {
        UnitVector3::new_unchecked(self.orientation.transform_vector(&Vector3::x_axis()))
    }

    /// Computes the unit vector representing the height axis of the box.
    pub fn compute_height_axis(&self) -> UnitVector3<f32> {
        UnitVector3::new_unchecked(self.orientation.transform_vector(&Vector3::y_axis()))
    }

    /// Computes the unit vector representing the depth axis of the box.
    pub fn compute_depth_axis(&self) -> UnitVector3<f32> {
        UnitVector3::new_unchecked(self.orientation.transform_vector(&Vector3::z_axis()))
    }

    /// Computes the half extent of the box projected onto the given unit
    /// normal. A plane with this normal cannot intersect the box if its
    /// distance from the box center exceeds the effective radius.
    pub fn compute_effective_radius(&self, unit_normal: &UnitVector3<f32>) -> f32 {
        let normal = unit_normal.into_inner();
        self.half_width * self.compute_width_axis().dot(&normal).abs()
            + self.half_height * self.compute_height_axis().dot(&normal).abs()
            + self.half_depth * self.compute_depth_axis().dot(&normal).abs()
    }

    /// Computes the sphere centered on the box passing through its corners.
    pub fn compute_bounding_sphere(&self) -> Sphere {
        Sphere::new(
            self.center,
            Vector3::new(self.half_width, self.half_height, self.half_depth).magnitude(),
        )
    }

    /// Computes the eight corners of the box. Corners 0-3 form the face on
    /// the positive side of the depth axis and corners 4-7 the opposite face,
    /// both traversed in the same rotational order so that corners `i` and
    /// `i + 4` share an edge.
    pub fn compute_corners(&self) -> [Point3<f32>; 8] {
        let width_offset = self.compute_width_axis().into_inner() * self.half_width;
        let height_offset = self.compute_height_axis().into_inner() * self.half_height;
        let depth_offset = self.compute_depth_axis().into_inner() * self.half_depth;

        let face_offsets = [
            width_offset + height_offset,
            -width_offset + height_offset,
            -width_offset - height_offset,
            width_offset - height_offset,
        ];

        std::array::from_fn(|idx| {
            let depth_offset = if idx < 4 { depth_offset } else { -depth_offset };
            self.center + face_offsets[idx % 4] + depth_offset
        })
    }

    /// Computes the six planes bounding the box, with normals pointing into
    /// the box.
    pub fn compute_bounding_planes(&self) -> [Plane; 6] {
        let axes_and_half_extents = [
            (self.compute_width_axis(), self.half_width),
            (self.compute_height_axis(), self.half_height),
            (self.compute_depth_axis(), self.half_depth),
        ];
        std::array::from_fn(|idx| {
            let (axis, half_extent) = axes_and_half_extents[idx / 2];
            let axis = if idx % 2 == 0 { axis } else { -axis };
            Plane::from_normal_and_point(-axis, &(self.center + axis.into_inner() * half_extent))
        })
    }

    /// Whether the given point is inside the box or on its boundary.
    pub fn contains_point(&self, point: &Point3<f32>) -> bool {
        let displacement = point - self.center;
        self.compute_width_axis().dot(&displacement).abs() <= self.half_width
            && self.compute_height_axis().dot(&displacement).abs() <= self.half_height
            && self.compute_depth_axis().dot(&displacement).abs() <= self.half_depth
    }
}
