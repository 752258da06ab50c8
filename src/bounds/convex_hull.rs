//! Convex regions defined as intersections of halfspaces.

use super::{Plane, Sphere};
use nalgebra::Point3;
use tinyvec::ArrayVec;

/// The maximum number of planes a [`ConvexHull`] can hold.
pub const MAX_CONVEX_HULL_PLANES: usize = 12;

/// A convex region defined as the intersection of the positive halfspaces
/// of a set of at most [`MAX_CONVEX_HULL_PLANES`] planes. A hull without
/// planes covers all of space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvexHull {
    planes: ArrayVec<[Plane; MAX_CONVEX_HULL_PLANES]>,
}

/// A [`ConvexHull`] together with the vertices of the region it bounds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConvexHullWithVertices {
    hull: ConvexHull,
    vertices: Vec<Point3<f32>>,
}

/// A [`ConvexHullWithVertices`] that also carries a center and the radius of
/// a sphere around the center enclosing all the vertices, allowing planes
/// far from the region to be classified without visiting the vertices.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvexHullFull {
    hull_with_vertices: ConvexHullWithVertices,
    bounding_sphere: Sphere,
}

impl ConvexHull {
    /// Creates a new hull without planes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a hull bounded by the given planes. Planes beyond the
    /// capacity of the hull are dropped with a warning.
    pub fn from_planes(planes: impl IntoIterator<Item = Plane>) -> Self {
        let mut hull = Self::new();
        for plane in planes {
            hull.push_plane(plane);
        }
        hull
    }

    /// Returns the planes bounding the hull.
    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    /// Returns the number of planes bounding the hull.
    pub fn n_planes(&self) -> usize {
        self.planes.len()
    }

    /// Whether the hull has no bounding planes.
    pub fn has_no_planes(&self) -> bool {
        self.planes.is_empty()
    }

    /// Adds the given plane to the hull. If the hull is full, the plane is
    /// ignored and a warning is logged.
    pub fn push_plane(&mut self, plane: Plane) {
        if self.planes.try_push(plane).is_some() {
            log::warn!(
                "Convex hull already has {} planes, ignoring additional plane",
                MAX_CONVEX_HULL_PLANES
            );
        }
    }

    /// Returns a hull bounded by only the first `n_planes` planes of this
    /// hull.
    pub fn with_first_planes(&self, n_planes: usize) -> Self {
        Self::from_planes(self.planes.iter().take(n_planes).copied())
    }

    /// Whether the given point is inside the hull or on its boundary.
    pub fn contains_point(&self, point: &Point3<f32>) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.compute_signed_distance(point) >= 0.0)
    }
}

impl ConvexHullWithVertices {
    /// Creates a hull with the given planes and vertices.
    pub fn new(hull: ConvexHull, vertices: Vec<Point3<f32>>) -> Self {
        Self { hull, vertices }
    }

    /// Returns the hull planes.
    pub fn hull(&self) -> &ConvexHull {
        &self.hull
    }

    /// Returns the vertices of the hull.
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    /// Computes the arithmetic mean of the vertices, or [`None`] if there are
    /// no vertices.
    pub fn compute_vertex_centroid(&self) -> Option<Point3<f32>> {
        compute_centroid(&self.vertices)
    }
}

impl ConvexHullFull {
    /// Wraps the given hull, computing the sphere around the vertex centroid
    /// that encloses all vertices. Returns [`None`] if the hull has no
    /// vertices.
    pub fn new(hull_with_vertices: ConvexHullWithVertices) -> Option<Self> {
        let center = hull_with_vertices.compute_vertex_centroid()?;
        let radius = hull_with_vertices
            .vertices()
            .iter()
            .map(|vertex| nalgebra::distance(&center, vertex))
            .fold(0.0, f32::max);
        Some(Self {
            hull_with_vertices,
            bounding_sphere: Sphere::new(center, radius),
        })
    }

    /// Returns the hull with its vertices.
    pub fn hull_with_vertices(&self) -> &ConvexHullWithVertices {
        &self.hull_with_vertices
    }

    /// Returns the sphere enclosing all the vertices.
    pub fn bounding_sphere(&self) -> &Sphere {
        &self.bounding_sphere
    }
}

/// Computes the arithmetic mean of the given points, or [`None`] if there are
/// no points.
pub fn compute_centroid(points: &[Point3<f32>]) -> Option<Point3<f32>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(nalgebra::Vector3::zeros(), |sum, point| sum + point.coords);
    Some(Point3::from(sum / points.len() as f32))
}
