//! The volume containing every object that may cast a shadow into the
//! frustum.

use super::{BOTTOM_PLANE_IDX, Frustum, LEFT_PLANE_IDX, RIGHT_PLANE_IDX, TOP_PLANE_IDX};
use crate::{
    bounds::{ConvexHull, Plane},
    light::LightPosition,
};
use tinyvec::ArrayVec;

/// The edges of the frustum as `[plane_0, plane_1, vertex_0, vertex_1]`,
/// where the edge from `vertex_0` to `vertex_1` is shared by the two planes.
/// The first 8 edges do not involve the far plane.
const FRUSTUM_EDGES: [[usize; 4]; 12] = [
    [0, 1, 1, 2],
    [0, 2, 3, 0],
    [0, 3, 2, 3],
    [0, 4, 0, 1],
    [1, 3, 2, 6],
    [1, 4, 1, 5],
    [2, 3, 3, 7],
    [2, 4, 0, 4],
    [5, 1, 5, 6],
    [5, 2, 4, 7],
    [5, 3, 6, 7],
    [5, 4, 4, 5],
];

/// The convex region swept out by the frustum when moved towards a light.
///
/// For a directional light, the frustum edges whose planes make up the
/// silhouette of the frustum as seen from the light are also recorded, as
/// pairs of frustum vertex indices.
#[derive(Clone, Debug)]
pub struct ShadowCasterVolume {
    hull: ConvexHull,
    silhouette_edges: ArrayVec<[[usize; 2]; 12]>,
}

impl Frustum {
    /// Computes the volume bounding all objects that may cast a shadow from
    /// the given light into the frustum.
    ///
    /// At least `min_frustum_plane_count` frustum planes are considered,
    /// which allows including the far plane even when the frustum does not
    /// use it (see [`Self::min_shadow_caster_plane_count`]).
    ///
    /// A volume without planes covers all of space.
    pub fn calculate_shadow_caster_volume(
        &self,
        light_position: &LightPosition,
        min_frustum_plane_count: usize,
    ) -> ShadowCasterVolume {
        let n_planes = min_frustum_plane_count.max(self.n_active_planes()).min(6);
        let frustum_planes = &self.all_world_planes()[..n_planes];

        let mut volume = ShadowCasterVolume {
            hull: ConvexHull::new(),
            silhouette_edges: ArrayVec::new(),
        };

        if let Some(light_point) = light_position.point() {
            if frustum_planes
                .iter()
                .all(|plane| plane.compute_signed_distance(light_point) >= 0.0)
            {
                // Only objects inside the frustum can shadow the frustum.
                volume.hull = ConvexHull::from_planes(frustum_planes.iter().copied());
                log::trace!("Light is inside frustum, using frustum as shadow caster volume");
                return volume;
            }
        }

        let light = light_position.to_homogeneous();

        let mut faces_light = [false; 6];
        for (faces, plane) in faces_light.iter_mut().zip(frustum_planes) {
            *faces = plane.compute_homogeneous_dot(&light) > 0.0;
        }

        for (plane, _) in frustum_planes
            .iter()
            .zip(faces_light)
            .filter(|(_, faces)| *faces)
        {
            volume.hull.push_plane(*plane);
        }

        if volume.hull.has_no_planes() {
            if let Some(light_point) = light_position.point() {
                // A point light behind the camera sees the inside of every
                // plane, so the frustum sides are moved to the light instead.
                for plane_idx in [LEFT_PLANE_IDX, RIGHT_PLANE_IDX, BOTTOM_PLANE_IDX, TOP_PLANE_IDX] {
                    volume
                        .hull
                        .push_plane(self.all_world_planes()[plane_idx].translated_to_point(light_point));
                }
                log::trace!("Light sees no frustum planes, using translated side planes");
                return volume;
            }
        }

        let n_edges = if n_planes == 6 { 12 } else { 8 };
        let vertices = self.world_vertices();

        for [plane_0, plane_1, vertex_0, vertex_1] in &FRUSTUM_EDGES[..n_edges] {
            if faces_light[*plane_0] == faces_light[*plane_1] {
                continue;
            }

            let start = &vertices[*vertex_0];
            let end = &vertices[*vertex_1];

            let plane = match light_position {
                LightPosition::Positional(light_point) => Plane::from_points(start, end, light_point),
                LightPosition::Directional(direction) => {
                    let plane = Plane::from_points(start, end, &(start + direction.into_inner()));
                    if plane.is_some() {
                        volume.silhouette_edges.push([*vertex_0, *vertex_1]);
                    }
                    plane
                }
            };

            if let Some(plane) = plane {
                volume.hull.push_plane(plane.oriented_towards_point(self.centroid()));
            }
        }

        log::trace!(
            "Shadow caster volume has {} planes and {} silhouette edges",
            volume.hull.n_planes(),
            volume.silhouette_edges.len()
        );

        volume
    }
}

impl ShadowCasterVolume {
    /// Returns the planes bounding the volume.
    pub fn hull(&self) -> &ConvexHull {
        &self.hull
    }

    /// Returns the number of planes bounding the volume.
    pub fn n_planes(&self) -> usize {
        self.hull.n_planes()
    }

    /// Returns the frustum edges on the silhouette of the frustum as seen
    /// from a directional light.
    pub fn silhouette_edges(&self) -> &[[usize; 2]] {
        &self.silhouette_edges
    }
}
