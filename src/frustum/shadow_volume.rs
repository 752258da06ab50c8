//! Culling of light shadow volumes against the frustum.

use super::Frustum;
use crate::bounds::{
    Cylinder, HalfCylinder, InfinitePyramidBase, InfiniteSphericalSector, Intersects, Pyramid,
    PyramidCone, SphericalSector,
};
use nalgebra::UnitVector3;
use std::f32::consts::PI;

/// The region in which a light casts shadows, in the shape suited for its
/// type.
#[derive(Clone, Debug, PartialEq)]
pub enum ShadowVolume {
    /// The light casts no shadows.
    Empty,
    /// The light may cast shadows anywhere.
    Everywhere,
    HalfCylinder(HalfCylinder),
    Pyramid(Pyramid),
    PyramidCone(PyramidCone),
    Cylinder(Cylinder),
    SphericalSector(SphericalSector),
}

impl Frustum {
    /// Whether the given shadow volume lies entirely outside the frustum.
    /// Volumes that cannot be ruled out are reported as not outside.
    pub fn shadow_volume_is_outside(&self, shadow_volume: &ShadowVolume) -> bool {
        let hull = self.world_hull();
        let is_outside = match shadow_volume {
            ShadowVolume::Empty => true,
            ShadowVolume::Everywhere => false,
            ShadowVolume::HalfCylinder(half_cylinder) => !half_cylinder.intersects(hull),
            ShadowVolume::Pyramid(pyramid) => {
                !self.contains_point(pyramid.apex()) && !pyramid.intersects(hull)
            }
            ShadowVolume::PyramidCone(pyramid_cone) => {
                !self.contains_point(pyramid_cone.pyramid().apex()) && !pyramid_cone.intersects(hull)
            }
            ShadowVolume::Cylinder(cylinder) => !cylinder.intersects(hull),
            ShadowVolume::SphericalSector(spherical_sector) => !spherical_sector.intersects(hull),
        };

        log::trace!("Shadow volume outside frustum: {is_outside}");

        is_outside
    }

    /// Whether the dark cap of the given shadow volume, which is its end
    /// infinitely far from the light, lies entirely outside the frustum.
    ///
    /// Only pyramid cones and spherical sectors have a dark cap. Other
    /// volumes are never reported as outside.
    pub fn dark_cap_is_outside(&self, shadow_volume: &ShadowVolume) -> bool {
        let is_outside = match shadow_volume {
            ShadowVolume::Empty => true,
            ShadowVolume::PyramidCone(pyramid_cone) => !pyramid_cone.infinite_base().intersects(self),
            ShadowVolume::SphericalSector(spherical_sector) => {
                !spherical_sector.infinite_end().intersects(self)
            }
            ShadowVolume::Everywhere
            | ShadowVolume::HalfCylinder(_)
            | ShadowVolume::Pyramid(_)
            | ShadowVolume::Cylinder(_) => false,
        };

        log::trace!("Shadow volume dark cap outside frustum: {is_outside}");

        is_outside
    }

    /// Whether the directions within the given angle of the given axis
    /// overlap the directions within the frustum. At infinite distance only
    /// directions matter, so this decides whether the infinitely distant end
    /// of a cone is visible.
    fn infinite_cone_is_visible(
        &self,
        axis: &UnitVector3<f32>,
        cos_half_angle: f32,
        sin_half_angle: f32,
    ) -> bool {
        let cone_half_angle = sin_half_angle.atan2(cos_half_angle);
        let frustum_half_angle = self
            .sin_max_half_angular_size()
            .atan2(self.cos_max_half_angular_size());

        let combined_half_angle = cone_half_angle + frustum_half_angle;
        if combined_half_angle >= PI {
            return true;
        }

        let angle_between_axes = axis.dot(&self.view_direction().into_inner()).clamp(-1.0, 1.0).acos();
        angle_between_axes < combined_half_angle
    }
}

impl Intersects<Frustum> for InfinitePyramidBase {
    fn intersects(&self, frustum: &Frustum) -> bool {
        frustum.infinite_cone_is_visible(self.axis(), self.cos_half_angle(), self.sin_half_angle())
    }
}

impl Intersects<Frustum> for InfiniteSphericalSector {
    fn intersects(&self, frustum: &Frustum) -> bool {
        frustum.infinite_cone_is_visible(self.axis(), self.cos_half_angle(), self.sin_half_angle())
    }
}
