//! Representation of axis-aligned boxes.

use nalgebra::{self as na, Point3, Vector3, point};

use Corner::{Lower, Upper};

/// A box with orientation aligned with the coordinate system axes.
///
/// A box whose lower corner exceeds its upper corner along any axis is
/// empty. [`AxisAlignedBox::empty`] returns the canonical empty box, which
/// acts as the identity for [`AxisAlignedBox::union_with`] and
/// [`AxisAlignedBox::extend_to_contain_point`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AxisAlignedBox {
    corners: [Point3<f32>; 2],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Corner {
    Lower = 0,
    Upper = 1,
}

const ALL_CORNER_COMPONENTS: [[Corner; 3]; 8] = [
    [Lower, Lower, Lower],
    [Lower, Lower, Upper],
    [Lower, Upper, Lower],
    [Lower, Upper, Upper],
    [Upper, Lower, Lower],
    [Upper, Lower, Upper],
    [Upper, Upper, Lower],
    [Upper, Upper, Upper],
];

impl AxisAlignedBox {
    /// Creates a new box with the given lower and upper corner points.
    pub fn new(lower_corner: Point3<f32>, upper_corner: Point3<f32>) -> Self {
        Self {
            corners: [lower_corner, upper_corner],
        }
    }

    /// Creates an empty box that any point or box can be merged into.
    pub fn empty() -> Self {
        Self::new(Point3::from(Vector3::repeat(f32::MAX)), Point3::from(Vector3::repeat(-f32::MAX)))
    }

    /// Creates the axis-aligned bounding box for the given points. The box
    /// is empty if there are no points.
    pub fn aabb_for_points<'a>(points: impl IntoIterator<Item = &'a Point3<f32>>) -> Self {
        points.into_iter().fold(Self::empty(), |mut aabb, point| {
            aabb.extend_to_contain_point(point);
            aabb
        })
    }

    /// Returns a reference to the lower corner of the box.
    pub fn lower_corner(&self) -> &Point3<f32> {
        &self.corners[0]
    }

    /// Returns a reference to the upper corner of the box.
    pub fn upper_corner(&self) -> &Point3<f32> {
        &self.corners[1]
    }

    /// Calculates and returns the center point of the box.
    pub fn center(&self) -> Point3<f32> {
        na::center(self.lower_corner(), self.upper_corner())
    }

    /// Returns the extents of the box along the three axes.
    pub fn extents(&self) -> Vector3<f32> {
        self.upper_corner() - self.lower_corner()
    }

    /// Whether the box contains no points.
    pub fn is_empty(&self) -> bool {
        let extents = self.extents();
        extents.x < 0.0 || extents.y < 0.0 || extents.z < 0.0
    }

    /// Returns the box corner with the given index. The corners are ordered
    /// from smaller to larger coordinates, with the z-component varying
    /// fastest.
    ///
    /// # Panics
    /// If the given index exceeds 7.
    pub fn corner(&self, corner_idx: usize) -> Point3<f32> {
        let corner_components = &ALL_CORNER_COMPONENTS[corner_idx];
        point![
            self.corners[corner_components[0] as usize].x,
            self.corners[corner_components[1] as usize].y,
            self.corners[corner_components[2] as usize].z
        ]
    }

    /// Returns all eight corners of the box, ordered as for
    /// [`AxisAlignedBox::corner`].
    pub fn all_corners(&self) -> [Point3<f32>; 8] {
        std::array::from_fn(|idx| self.corner(idx))
    }

    /// Extends the box so that it also contains the given point.
    pub fn extend_to_contain_point(&mut self, point: &Point3<f32>) {
        self.corners[0] = self.corners[0].inf(point);
        self.corners[1] = self.corners[1].sup(point);
    }

    /// Returns the smallest box containing both this and the given box.
    pub fn union_with(&self, other: &Self) -> Self {
        Self::new(
            self.lower_corner().inf(other.lower_corner()),
            self.upper_corner().sup(other.upper_corner()),
        )
    }

    /// Returns the box covering the region shared by this and the given box.
    /// The result is empty if the boxes do not overlap.
    pub fn intersection_with(&self, other: &Self) -> Self {
        Self::new(
            self.lower_corner().sup(other.lower_corner()),
            self.upper_corner().inf(other.upper_corner()),
        )
    }
}
