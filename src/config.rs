//! Configuration of the visibility computations.

use crate::{
    angle::{Angle, Degrees},
    bounds::AxisAlignedBox,
};
use anyhow::{Context, Result, bail, ensure};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Configuration parameters for visibility determination.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisibilityConfig {
    /// Configuration of the view frustum.
    pub frustum: FrustumConfig,
    /// Configuration of shadow rendering, which determines the volumes
    /// derived from the frustum for each light.
    pub shadows: ShadowConfig,
}

/// Configuration parameters for the view frustum.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrustumConfig {
    /// The full horizontal angle spanned by the frustum, in degrees.
    pub field_of_view: f32,
    /// The ratio of width to height of the view plane.
    pub aspect_ratio: f32,
    /// The distance from the camera to the near plane.
    pub near_distance: f32,
    /// The distance from the camera to the far plane. Also used to place the
    /// far vertices of the frustum when no far plane is used.
    pub far_distance: f32,
    /// Whether the far plane bounds the frustum.
    pub use_far_plane: bool,
}

/// How shadows are rendered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadowRenderingMode {
    #[default]
    None,
    ShadowVolumes,
    ShadowMapping,
}

/// Configuration parameters for shadow rendering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// The technique used for rendering shadows.
    pub mode: ShadowRenderingMode,
    /// The camera space region covered by the shadow map of directional
    /// lights.
    pub shadow_map_region: Option<ShadowMapRegion>,
}

/// An axis-aligned camera space region, given by its lower and upper
/// corners.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShadowMapRegion {
    pub lower_corner: [f32; 3],
    pub upper_corner: [f32; 3],
}

impl VisibilityConfig {
    /// Parses the configuration from the RON file at the given path.
    pub fn from_ron_file(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_path = file_path.as_ref();

        let text = fs::read_to_string(file_path)
            .map_err(anyhow::Error::from)
            .with_context(|| format!("Could not open {}", file_path.display()))?;

        let config = ron::from_str::<Self>(&text)
            .map_err(anyhow::Error::from)
            .with_context(|| format!("Invalid syntax in {}", file_path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", file_path.display()))?;

        Ok(config)
    }

    /// Parses the configuration from the given RON string.
    pub fn from_ron_str(text: &str) -> Result<Self> {
        let config: Self = ron::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that all parameters are within their allowed ranges.
    pub fn validate(&self) -> Result<()> {
        self.frustum.validate()?;
        self.shadows.validate()
    }
}

impl FrustumConfig {
    /// Returns the horizontal field of view as an angle.
    pub fn field_of_view(&self) -> Degrees {
        Degrees(self.field_of_view)
    }

    /// Checks that all parameters are within their allowed ranges.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.field_of_view > 0.0 && self.field_of_view < 180.0,
            "Field of view must be between 0 and 180 degrees, got {}",
            self.field_of_view
        );
        ensure!(
            self.aspect_ratio > 0.0,
            "Aspect ratio must be positive, got {}",
            self.aspect_ratio
        );
        ensure!(
            self.near_distance > 0.0,
            "Near distance must be positive, got {}",
            self.near_distance
        );
        if self.far_distance <= self.near_distance {
            bail!(
                "Far distance ({}) must exceed near distance ({})",
                self.far_distance,
                self.near_distance
            );
        }
        Ok(())
    }

    pub(crate) fn half_angle_radians(&self) -> f32 {
        0.5 * self.field_of_view().radians()
    }
}

impl Default for FrustumConfig {
    fn default() -> Self {
        Self {
            field_of_view: 60.0,
            aspect_ratio: 1.0,
            near_distance: 1.0,
            far_distance: 1000.0,
            use_far_plane: false,
        }
    }
}

impl ShadowConfig {
    /// Checks that the shadow map region, if any, is not inverted.
    pub fn validate(&self) -> Result<()> {
        if let Some(region) = &self.shadow_map_region {
            for (lower, upper) in region.lower_corner.iter().zip(&region.upper_corner) {
                ensure!(
                    lower <= upper,
                    "Shadow map region has lower corner {:?} above upper corner {:?}",
                    region.lower_corner,
                    region.upper_corner
                );
            }
        }
        Ok(())
    }
}

impl ShadowMapRegion {
    /// Converts the region into an axis-aligned box.
    pub fn to_aabb(&self) -> AxisAlignedBox {
        AxisAlignedBox::new(
            Point3::from(self.lower_corner),
            Point3::from(self.upper_corner),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_ron_gives_default_config() {
        let config = VisibilityConfig::from_ron_str("()").unwrap();
        assert_eq!(config, VisibilityConfig::default());
        assert_eq!(config.shadows.mode, ShadowRenderingMode::None);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = VisibilityConfig::from_ron_str(
            "(frustum: (field_of_view: 90.0, use_far_plane: true), shadows: (mode: ShadowMapping))",
        )
        .unwrap();
        assert_eq!(config.frustum.field_of_view, 90.0);
        assert!(config.frustum.use_far_plane);
        assert_eq!(config.frustum.near_distance, 1.0);
        assert_eq!(config.shadows.mode, ShadowRenderingMode::ShadowMapping);
        assert!(config.shadows.shadow_map_region.is_none());
    }

    #[test]
    fn shadow_map_region_converts_to_aabb() {
        let config = VisibilityConfig::from_ron_str(
            "(shadows: (shadow_map_region: Some((lower_corner: (-1.0, -2.0, -30.0), upper_corner: (1.0, 2.0, -1.0)))))",
        )
        .unwrap();
        let aabb = config.shadows.shadow_map_region.unwrap().to_aabb();
        assert_abs_diff_eq!(*aabb.lower_corner(), Point3::new(-1.0, -2.0, -30.0));
        assert_abs_diff_eq!(*aabb.upper_corner(), Point3::new(1.0, 2.0, -1.0));
    }

    #[test]
    fn invalid_syntax_is_an_error() {
        assert!(VisibilityConfig::from_ron_str("(frustum: (field_of_view: ))").is_err());
    }

    #[test]
    fn far_distance_below_near_distance_is_rejected() {
        let config = FrustumConfig {
            near_distance: 10.0,
            far_distance: 5.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn field_of_view_of_half_turn_is_rejected() {
        let config = FrustumConfig {
            field_of_view: 180.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn inverted_shadow_map_region_is_rejected() {
        let config = ShadowConfig {
            mode: ShadowRenderingMode::ShadowMapping,
            shadow_map_region: Some(ShadowMapRegion {
                lower_corner: [0.0, 0.0, 1.0],
                upper_corner: [1.0, 1.0, 0.0],
            }),
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(VisibilityConfig::from_ron_file("this/file/does/not/exist.ron").is_err());
    }
}
