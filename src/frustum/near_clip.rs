//! The volume between a light and the near rectangle of the frustum.

use super::Frustum;
use crate::{
    bounds::{ConvexHull, Intersects, ObjectBounds, Plane},
    light::LightPosition,
};
use nalgebra::{UnitVector3, Vector3};

/// Signed distances from the near plane closer to zero than this put the
/// light in the near plane.
const NEAR_PLANE_TOLERANCE: f32 = 1e-3;

/// The edges of the near rectangle, as pairs of frustum vertex indices, in
/// the order left, right, bottom, top.
const NEAR_RECTANGLE_EDGES: [[usize; 2]; 4] = [[1, 2], [3, 0], [2, 3], [0, 1]];

/// Where a light lies relative to the near plane of the frustum.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LightPositionType {
    /// On the same side as the camera.
    Behind,
    /// On the same side as the visible region.
    InFront,
    /// Within a small distance of the near plane.
    InNearPlane,
}

/// The convex region enclosed by a light and the near rectangle of the
/// frustum.
///
/// Objects in this region may cast shadows onto the near plane, which
/// determines how their stencil shadow volumes must be rendered.
#[derive(Clone, Debug)]
pub struct NearClipVolume {
    hull: ConvexHull,
    light_position_type: LightPositionType,
    is_point_light: bool,
    near_plane: Plane,
}

impl Frustum {
    /// Computes the volume enclosed by the given light and the near
    /// rectangle.
    ///
    /// The volume is bounded by one plane through each edge of the near
    /// rectangle and the light and by the near plane itself. A positional
    /// light adds a plane through the light facing the near rectangle. When
    /// the light lies in the near plane the volume is degenerate and has no
    /// planes.
    pub fn calculate_near_clip_volume(&self, light_position: &LightPosition) -> NearClipVolume {
        let near_plane = *self.world_near_plane();
        let light = light_position.to_homogeneous();

        let distance = near_plane.compute_homogeneous_dot(&light);

        let light_position_type = if distance < -NEAR_PLANE_TOLERANCE {
            LightPositionType::Behind
        } else if distance > NEAR_PLANE_TOLERANCE {
            LightPositionType::InFront
        } else {
            LightPositionType::InNearPlane
        };

        let is_point_light = !light_position.is_directional();

        let mut hull = ConvexHull::new();

        if light_position_type != LightPositionType::InNearPlane {
            let orient = |plane: Plane| {
                if light_position_type == LightPositionType::Behind {
                    plane.flipped()
                } else {
                    plane
                }
            };

            let vertices = self.world_vertices();

            for [start_idx, end_idx] in NEAR_RECTANGLE_EDGES {
                let start = &vertices[start_idx];
                let edge = vertices[end_idx] - start;
                let towards_light = light.xyz() - start.coords * light.w;

                if let Some(plane) =
                    Plane::from_unnormalized_normal_and_point(edge.cross(&towards_light), start)
                {
                    hull.push_plane(orient(plane));
                } else {
                    log::trace!("Skipping degenerate near clip volume side plane");
                }
            }

            hull.push_plane(orient(near_plane));

            if let Some(light_point) = light_position.point() {
                let near_center = vertices[..4]
                    .iter()
                    .fold(Vector3::zeros(), |sum, vertex| sum + vertex.coords)
                    / 4.0;
                if let Some(unit_normal) =
                    UnitVector3::try_new(near_center - light_point.coords, f32::EPSILON)
                {
                    hull.push_plane(Plane::from_normal_and_point(unit_normal, light_point));
                }
            }
        }

        log::trace!(
            "Near clip volume has {} planes with light {:?} the near plane",
            hull.n_planes(),
            light_position_type
        );

        NearClipVolume {
            hull,
            light_position_type,
            is_point_light,
            near_plane,
        }
    }
}

impl NearClipVolume {
    /// Returns the planes bounding the volume.
    pub fn hull(&self) -> &ConvexHull {
        &self.hull
    }

    /// Returns the number of planes bounding the volume.
    pub fn n_planes(&self) -> usize {
        self.hull.n_planes()
    }

    /// Returns where the light lies relative to the near plane.
    pub fn light_position_type(&self) -> LightPositionType {
        self.light_position_type
    }

    /// Whether the volume was computed for a positional light.
    pub fn is_point_light(&self) -> bool {
        self.is_point_light
    }

    /// Whether the given object may overlap the volume.
    ///
    /// When the light lies in the near plane, the volume collapses onto the
    /// plane, and only objects whose bounding sphere straddles the near plane
    /// are considered intersecting.
    pub fn intersects_object(&self, object: &ObjectBounds) -> bool {
        match self.light_position_type {
            LightPositionType::InNearPlane => {
                let sphere = object.sphere();
                self.near_plane
                    .compute_signed_distance(sphere.center())
                    .abs()
                    < sphere.radius()
            }
            LightPositionType::Behind | LightPositionType::InFront => {
                object.intersects(&self.hull)
            }
        }
    }
}

impl Intersects<NearClipVolume> for ObjectBounds {
    fn intersects(&self, other: &NearClipVolume) -> bool {
        other.intersects_object(self)
    }
}
