//! Screen space regions affected by lights.

use super::Frustum;
use crate::{
    bounds::{Cylinder, Sphere},
    light::{Light, LightKind},
    scissors::Scissors,
};
use nalgebra::Vector4;

impl Frustum {
    /// Computes the region of the screen and range of depths that the given
    /// light can affect.
    ///
    /// Spot and beam lights are bounded by the box around their bounding
    /// cylinder, point lights by the tangent planes of their bounding sphere.
    /// Lights without bounding volumes affect the full region.
    pub fn calculate_light_scissors(&self, light: &Light) -> Scissors {
        let scissors = match (light.kind(), light.bounding_cylinder(), light.bounding_sphere()) {
            (LightKind::Spot | LightKind::Beam, Some(cylinder), _) => {
                self.calculate_cylinder_scissors(cylinder)
            }
            (LightKind::Point | LightKind::Spot | LightKind::Beam, _, Some(sphere)) => {
                self.calculate_sphere_scissors(sphere)
            }
            _ => Scissors::full(),
        };

        log::trace!("Light scissors for {:?} light: {scissors}", light.kind());

        scissors
    }

    fn calculate_cylinder_scissors(&self, cylinder: &Cylinder) -> Scissors {
        let corners = cylinder.compute_bounding_box_corners();

        let mut scissors = Scissors::empty();
        scissors.update_with_world_space_bounding_box(&corners, self);
        scissors.clamp_empty_region();
        scissors.clamp_region_and_depth_bounds();
        scissors
    }

    fn calculate_sphere_scissors(&self, sphere: &Sphere) -> Scissors {
        let mut scissors = Scissors::full();

        let light = self.view_matrix().transform_point(sphere.center());
        let r = sphere.radius();
        let n = self.near_distance();

        let closest_z = light.z + r;
        if closest_z <= -n {
            scissors.set_near(self.compute_depth_at_view_z(closest_z));
        }

        let farthest_z = light.z - r;
        scissors.set_far(if farthest_z <= -n {
            self.compute_depth_at_view_z(farthest_z)
        } else {
            0.0
        });

        let horizontal_scale = self.e();
        for (normal_component, ndc_x) in
            compute_tangent_plane_bounds(light.x, light.z, r, horizontal_scale)
        {
            if normal_component > 0.0 {
                scissors.set_left(ndc_x.max(-1.0));
            } else {
                scissors.set_right(ndc_x.min(1.0));
            }
        }

        let vertical_scale = self.e() * self.aspect_ratio();
        for (normal_component, ndc_y) in
            compute_tangent_plane_bounds(light.y, light.z, r, vertical_scale)
        {
            if normal_component > 0.0 {
                scissors.set_bottom(ndc_y.max(-1.0));
            } else {
                scissors.set_top(ndc_y.min(1.0));
            }
        }

        scissors
    }

    /// Computes the normalized device depth of a point at the given camera
    /// space z-coordinate.
    fn compute_depth_at_view_z(&self, z: f32) -> f64 {
        let clip = self.projection_matrix() * Vector4::new(0.0, 0.0, z, 1.0);
        0.5 * f64::from(clip.z) / f64::from(clip.w) + 0.5
    }
}

/// Finds the planes through the camera tangent to a sphere, considering only
/// the given lateral axis and the depth axis of camera space.
///
/// Returns, for each tangent plane whose tangent point lies in front of the
/// camera, the lateral component of the plane normal together with the
/// normalized device coordinate where the plane crosses the view plane. A
/// positive normal component means the sphere lies on the positive side of
/// the plane, so the plane bounds the sphere from below.
fn compute_tangent_plane_bounds(
    lateral: f32,
    depth: f32,
    radius: f32,
    projection_scale: f32,
) -> impl Iterator<Item = (f32, f32)> {
    let lateral_squared = lateral * lateral;
    let distance_squared = lateral_squared + depth * depth;

    let discriminant =
        radius * radius * lateral_squared - distance_squared * (radius * radius - depth * depth);

    let roots = if discriminant > 0.0 && depth != 0.0 {
        let sqrt_discriminant = discriminant.sqrt();
        [sqrt_discriminant, -sqrt_discriminant]
            .map(|signed_sqrt| (radius * lateral + signed_sqrt) / distance_squared)
    } else {
        [0.0; 2]
    };

    roots.into_iter().filter_map(move |normal_lateral| {
        if normal_lateral == 0.0 {
            return None;
        }
        let normal_depth = (radius - normal_lateral * lateral) / depth;
        let tangent_point_depth = depth - radius * normal_depth;
        (tangent_point_depth < 0.0)
            .then(|| (normal_lateral, normal_depth * projection_scale / normal_lateral))
    })
}
