//! Per-frame visibility determination for a real-time renderer.
//!
//! The [`Frustum`](frustum::Frustum) is recomputed from the
//! [`CameraState`](camera::CameraState) once per frame. For each light it
//! derives the volumes used to cull shadow casters and shadow volumes, and
//! the [`Scissors`](scissors::Scissors) region bounding the screen space
//! influence of the light. The [`bounds`] module provides the bounding
//! volumes and intersection tests used for culling individual objects.

pub mod angle;
pub mod bounds;
pub mod camera;
pub mod config;
pub mod frustum;
pub mod light;
pub mod scissors;

pub use angle::{Angle, Degrees, Radians};
pub use config::VisibilityConfig;
pub use frustum::Frustum;
pub use scissors::{Scissors, ScissorsRegionType};
