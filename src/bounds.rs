//! Bounding volumes and the intersection tests between them.
//!
//! Volumes bounded by planes consider the positive halfspace of each plane as
//! their inside. Tests involving boxes and cylinders compare the signed
//! distance of the shape center to each plane with the effective radius of
//! the shape along the plane normal, which may report an intersection for a
//! shape that only overlaps the region near an edge or corner of the
//! limiting volume. No test ever reports a false negative.

mod axis_aligned_box;
mod convex_hull;
mod cylinder;
mod intersection;
mod object;
mod oriented_box;
mod plane;
mod pyramid;
mod sphere;
mod spherical_sector;

pub use axis_aligned_box::AxisAlignedBox;
pub use convex_hull::{
    ConvexHull, ConvexHullFull, ConvexHullWithVertices, MAX_CONVEX_HULL_PLANES, compute_centroid,
};
pub use cylinder::{Cylinder, HalfCylinder};
pub use object::ObjectBounds;
pub use oriented_box::OrientedBox;
pub use plane::{IntersectsPlane, Plane, SphereRelationToPlane};
pub use pyramid::{InfinitePyramidBase, Pyramid, PyramidCone};
pub use sphere::Sphere;
pub use spherical_sector::{InfiniteSphericalSector, SphericalSector};

/// How a volume is positioned relative to another volume.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoundsCheckResult {
    /// The volumes do not overlap.
    Outside,
    /// The volumes overlap, but the first volume is not fully inside the
    /// second.
    Intersecting,
    /// The first volume is fully inside the second.
    Inside,
}

/// Boolean overlap test between two volumes.
pub trait Intersects<Rhs: ?Sized> {
    /// Whether this volume may overlap the other volume. Returning `true`
    /// for volumes that do not actually overlap is allowed, the opposite is
    /// not.
    fn intersects(&self, other: &Rhs) -> bool;
}

/// Overlap test between two volumes that also detects full containment.
pub trait QueryIntersection<Rhs: ?Sized> {
    /// Determines how this volume is positioned relative to the other volume.
    fn query_intersection(&self, other: &Rhs) -> BoundsCheckResult;
}

/// Containment test between two volumes.
pub trait IsCompletelyInside<Rhs: ?Sized> {
    /// Whether all of this volume is inside the other volume.
    fn is_completely_inside(&self, other: &Rhs) -> bool;
}
