//! Bounding volumes of renderable objects.

use super::{OrientedBox, Sphere};

/// The bounding volumes of a renderable object: a bounding sphere that is
/// always present and an optional tighter oriented bounding box that is
/// consulted after the sphere fails to reject.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ObjectBounds {
    sphere: Sphere,
    oriented_box: Option<OrientedBox>,
}

impl ObjectBounds {
    /// Creates object bounds consisting only of the given sphere.
    pub fn from_sphere(sphere: Sphere) -> Self {
        Self {
            sphere,
            oriented_box: None,
        }
    }

    /// Creates object bounds from the given box, using the sphere through
    /// the box corners as the bounding sphere.
    pub fn from_oriented_box(oriented_box: OrientedBox) -> Self {
        Self {
            sphere: oriented_box.compute_bounding_sphere(),
            oriented_box: Some(oriented_box),
        }
    }

    /// Creates object bounds from the given sphere and box, which are
    /// assumed to both enclose the object.
    pub fn new(sphere: Sphere, oriented_box: OrientedBox) -> Self {
        Self {
            sphere,
            oriented_box: Some(oriented_box),
        }
    }

    /// Returns the bounding sphere.
    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    /// Returns the bounding box, if any.
    pub fn oriented_box(&self) -> Option<&OrientedBox> {
        self.oriented_box.as_ref()
    }
}
