//! Light source descriptions consumed by the visibility computations.

use crate::bounds::{Cylinder, Sphere};
use nalgebra::{Point3, UnitVector3, Vector4};

/// Where a light is located, either infinitely far away in a given direction
/// or at a specific point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum LightPosition {
    /// A light infinitely far away. The direction points from the scene
    /// towards the light, opposite to the direction the light travels in.
    Directional(UnitVector3<f32>),
    /// A light at the given world space position.
    Positional(Point3<f32>),
}

/// The type of a light source.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Point,
    Spot,
    Beam,
}

/// A light source together with the volumes bounding the region it can
/// illuminate.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    kind: LightKind,
    position: LightPosition,
    bounding_sphere: Option<Sphere>,
    bounding_cylinder: Option<Cylinder>,
}

impl LightPosition {
    /// Returns the homogeneous representation of the position, with `w = 0`
    /// for directional lights and `w = 1` for positional lights.
    pub fn to_homogeneous(&self) -> Vector4<f32> {
        match self {
            Self::Directional(direction) => direction.into_inner().push(0.0),
            Self::Positional(point) => point.to_homogeneous(),
        }
    }

    /// Returns the point if the light is positional.
    pub fn point(&self) -> Option<&Point3<f32>> {
        match self {
            Self::Directional(_) => None,
            Self::Positional(point) => Some(point),
        }
    }

    /// Whether the light is infinitely far away.
    pub fn is_directional(&self) -> bool {
        matches!(self, Self::Directional(_))
    }
}

impl Light {
    /// Creates a directional light shining from the given direction.
    pub fn directional(direction_towards_light: UnitVector3<f32>) -> Self {
        Self {
            kind: LightKind::Directional,
            position: LightPosition::Directional(direction_towards_light),
            bounding_sphere: None,
            bounding_cylinder: None,
        }
    }

    /// Creates a point light at the given position that can illuminate
    /// objects at most `range` away.
    pub fn point(position: Point3<f32>, range: f32) -> Self {
        Self {
            kind: LightKind::Point,
            position: LightPosition::Positional(position),
            bounding_sphere: Some(Sphere::new(position, range)),
            bounding_cylinder: None,
        }
    }

    /// Creates a spot light at the given position whose illuminated region
    /// is bounded by the given sphere and cylinder.
    pub fn spot(position: Point3<f32>, bounding_sphere: Sphere, bounding_cylinder: Cylinder) -> Self {
        Self {
            kind: LightKind::Spot,
            position: LightPosition::Positional(position),
            bounding_sphere: Some(bounding_sphere),
            bounding_cylinder: Some(bounding_cylinder),
        }
    }

    /// Creates a beam light at the given position whose illuminated region
    /// is bounded by the given sphere and cylinder.
    pub fn beam(position: Point3<f32>, bounding_sphere: Sphere, bounding_cylinder: Cylinder) -> Self {
        Self {
            kind: LightKind::Beam,
            position: LightPosition::Positional(position),
            bounding_sphere: Some(bounding_sphere),
            bounding_cylinder: Some(bounding_cylinder),
        }
    }

    /// Returns the type of the light.
    pub fn kind(&self) -> LightKind {
        self.kind
    }

    /// Returns the position of the light.
    pub fn position(&self) -> &LightPosition {
        &self.position
    }

    /// Returns the sphere bounding the illuminated region, which is absent
    /// for directional lights.
    pub fn bounding_sphere(&self) -> Option<&Sphere> {
        self.bounding_sphere.as_ref()
    }

    /// Returns the cylinder bounding the illuminated region, which is only
    /// present for spot and beam lights.
    pub fn bounding_cylinder(&self) -> Option<&Cylinder> {
        self.bounding_cylinder.as_ref()
    }
}
