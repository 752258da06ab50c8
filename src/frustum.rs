//! The view frustum and the volumes derived from it for shadow rendering.

mod light_scissors;
mod near_clip;
mod shadow_caster;
mod shadow_volume;

pub use near_clip::{LightPositionType, NearClipVolume};
pub use shadow_caster::ShadowCasterVolume;
pub use shadow_volume::ShadowVolume;

use crate::{
    angle::Radians,
    bounds::{AxisAlignedBox, ConvexHull, Intersects, Plane, Sphere, compute_centroid},
    camera::CameraState,
    config::{FrustumConfig, ShadowRenderingMode, VisibilityConfig},
    light::LightPosition,
};
use nalgebra::{Matrix4, Point3, UnitVector3, Vector3, point, vector};

/// Index of the near plane among the frustum planes.
pub const NEAR_PLANE_IDX: usize = 0;
/// Index of the left plane among the frustum planes.
pub const LEFT_PLANE_IDX: usize = 1;
/// Index of the right plane among the frustum planes.
pub const RIGHT_PLANE_IDX: usize = 2;
/// Index of the bottom plane among the frustum planes.
pub const BOTTOM_PLANE_IDX: usize = 3;
/// Index of the top plane among the frustum planes.
pub const TOP_PLANE_IDX: usize = 4;
/// Index of the far plane among the frustum planes.
pub const FAR_PLANE_IDX: usize = 5;

/// The view frustum of a perspective camera, in both camera space and world
/// space.
///
/// The frustum has 8 vertices, with 0-3 on the near plane and 4-7 on the far
/// plane, ordered top right, top left, bottom left, bottom right as seen from
/// the camera. It is bounded by up to six inward facing planes, ordered near,
/// left, right, bottom, top, far. When no far plane is used the frustum is
/// conceptually infinite, and the far vertices only serve as a reference for
/// the extent of the frustum.
///
/// The camera space quantities follow from the parameters alone, while the
/// world space quantities are recomputed by [`Self::calculate`] for each
/// frame.
#[derive(Clone, Debug)]
pub struct Frustum {
    aspect_ratio: f32,
    near_distance: f32,
    far_distance: f32,
    use_far_plane: bool,
    e: f32,
    cos_half_angle: f32,
    sin_half_angle: f32,
    near_half_width: f32,
    near_half_height: f32,
    far_half_width: f32,
    far_half_height: f32,
    max_half_angular_size: Radians,
    cos_max_half_angular_size: f32,
    sin_max_half_angular_size: f32,
    shadow_rendering_mode: ShadowRenderingMode,
    eye_vertices: [Point3<f32>; 8],
    eye_planes: [Plane; 6],
    world_vertices: [Point3<f32>; 8],
    world_planes: [Plane; 6],
    world_hull: ConvexHull,
    world_hull_without_far_plane: ConvexHull,
    centroid: Point3<f32>,
    bounding_sphere: Option<Sphere>,
    camera_position: Point3<f32>,
    view_direction: UnitVector3<f32>,
    view_matrix: Matrix4<f32>,
    projection_matrix: Matrix4<f32>,
    view_projection_matrix: Matrix4<f32>,
    shadow_map_region: Option<AxisAlignedBox>,
    shadow_map_region_aabb: Option<AxisAlignedBox>,
    last_calculated_frame: u64,
    changing_every_frame: bool,
}

impl Frustum {
    /// Creates a new frustum with the given parameters. The world space
    /// quantities coincide with the camera space ones until
    /// [`Self::calculate`] is called.
    pub fn new(config: &FrustumConfig) -> Self {
        let mut frustum = Self {
            aspect_ratio: 1.0,
            near_distance: 1.0,
            far_distance: 2.0,
            use_far_plane: false,
            e: 1.0,
            cos_half_angle: 1.0,
            sin_half_angle: 0.0,
            near_half_width: 0.0,
            near_half_height: 0.0,
            far_half_width: 0.0,
            far_half_height: 0.0,
            max_half_angular_size: Radians(0.0),
            cos_max_half_angular_size: 1.0,
            sin_max_half_angular_size: 0.0,
            shadow_rendering_mode: ShadowRenderingMode::None,
            eye_vertices: [Point3::origin(); 8],
            eye_planes: [Plane::default(); 6],
            world_vertices: [Point3::origin(); 8],
            world_planes: [Plane::default(); 6],
            world_hull: ConvexHull::new(),
            world_hull_without_far_plane: ConvexHull::new(),
            centroid: Point3::origin(),
            bounding_sphere: None,
            camera_position: Point3::origin(),
            view_direction: -Vector3::z_axis(),
            view_matrix: Matrix4::identity(),
            projection_matrix: Matrix4::identity(),
            view_projection_matrix: Matrix4::identity(),
            shadow_map_region: None,
            shadow_map_region_aabb: None,
            last_calculated_frame: 0,
            changing_every_frame: false,
        };
        frustum.set_parameters(config);
        frustum.world_vertices = frustum.eye_vertices;
        frustum.world_planes = frustum.eye_planes;
        frustum.update_world_space_quantities();
        frustum
    }

    /// Creates a new frustum with the frustum parameters and shadow settings
    /// of the given configuration.
    pub fn from_config(config: &VisibilityConfig) -> Self {
        let mut frustum = Self::new(&config.frustum);
        frustum.set_shadow_rendering_mode(config.shadows.mode);
        frustum.set_shadow_map_region(
            config
                .shadows
                .shadow_map_region
                .as_ref()
                .map(|region| region.to_aabb()),
        );
        frustum
    }

    /// Stores the given parameters and recomputes the camera space frustum
    /// from them. [`Self::calculate`] must be called afterwards to update
    /// the world space frustum.
    ///
    /// The parameters are assumed valid (see [`FrustumConfig::validate`]).
    pub fn set_parameters(&mut self, config: &FrustumConfig) {
        let half_angle = config.half_angle_radians();

        self.aspect_ratio = config.aspect_ratio;
        self.near_distance = config.near_distance;
        self.far_distance = config.far_distance;
        self.use_far_plane = config.use_far_plane;

        self.cos_half_angle = half_angle.cos();
        self.sin_half_angle = half_angle.sin();
        self.e = self.cos_half_angle / self.sin_half_angle;

        self.near_half_width = self.near_distance / self.e;
        self.near_half_height = self.near_half_width / self.aspect_ratio;
        self.far_half_width = self.far_distance / self.e;
        self.far_half_height = self.far_half_width / self.aspect_ratio;

        let near_corner_distance_from_axis = self.near_half_width.hypot(self.near_half_height);
        let near_corner_distance = near_corner_distance_from_axis.hypot(self.near_distance);
        self.cos_max_half_angular_size = self.near_distance / near_corner_distance;
        self.sin_max_half_angular_size = near_corner_distance_from_axis / near_corner_distance;
        self.max_half_angular_size =
            Radians(near_corner_distance_from_axis.atan2(self.near_distance));

        self.eye_vertices = self.compute_eye_space_vertices();
        self.eye_planes = self.compute_eye_space_planes();
    }

    /// Sets the technique used for rendering shadows, which determines
    /// whether the shadow map region is computed and how many frustum planes
    /// shadow caster volumes require.
    pub fn set_shadow_rendering_mode(&mut self, mode: ShadowRenderingMode) {
        self.shadow_rendering_mode = mode;
    }

    /// Sets the camera space region that the shadow maps of directional
    /// lights should cover.
    pub fn set_shadow_map_region(&mut self, region: Option<AxisAlignedBox>) {
        self.shadow_map_region = region;
    }

    /// Computes the world space frustum for the given camera state. Should
    /// be called once per frame in which the camera changes.
    pub fn calculate(&mut self, camera: &CameraState) {
        self.view_matrix = *camera.view_matrix();
        self.projection_matrix = *camera.projection_matrix();
        self.view_projection_matrix = *camera.view_projection_matrix();

        let inverse_view_matrix = camera.inverse_view_matrix();

        for (world_vertex, eye_vertex) in self.world_vertices.iter_mut().zip(&self.eye_vertices) {
            *world_vertex = inverse_view_matrix.transform_point(eye_vertex);
        }
        for (world_plane, eye_plane) in self.world_planes.iter_mut().zip(&self.eye_planes) {
            *world_plane = eye_plane.transformed_with_transpose_of(&self.view_matrix);
        }

        self.camera_position = camera.compute_world_position();
        self.view_direction = camera.compute_world_view_direction();

        self.update_world_space_quantities();

        self.shadow_map_region_aabb = match (self.shadow_rendering_mode, &self.shadow_map_region)
        {
            (ShadowRenderingMode::ShadowMapping, Some(region)) => {
                let corners = region
                    .all_corners()
                    .map(|corner| inverse_view_matrix.transform_point(&corner));
                Some(AxisAlignedBox::aabb_for_points(&corners))
            }
            _ => None,
        };

        self.update_changing_every_frame(camera.current_frame());

        log::trace!(
            "Calculated frustum for frame {} with {} active planes",
            camera.current_frame(),
            self.n_active_planes()
        );
    }

    /// Returns the ratio of width to height of the view plane.
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Returns the distance from the camera to the near plane.
    pub fn near_distance(&self) -> f32 {
        self.near_distance
    }

    /// Returns the distance from the camera to the far plane.
    pub fn far_distance(&self) -> f32 {
        self.far_distance
    }

    /// Whether the frustum is bounded by a far plane.
    pub fn uses_far_plane(&self) -> bool {
        self.use_far_plane
    }

    /// Returns the cotangent of half the horizontal field of view.
    pub fn e(&self) -> f32 {
        self.e
    }

    /// Returns the cosine of half the horizontal field of view.
    pub fn cos_half_angle(&self) -> f32 {
        self.cos_half_angle
    }

    /// Returns the sine of half the horizontal field of view.
    pub fn sin_half_angle(&self) -> f32 {
        self.sin_half_angle
    }

    pub fn near_half_width(&self) -> f32 {
        self.near_half_width
    }

    pub fn near_half_height(&self) -> f32 {
        self.near_half_height
    }

    pub fn far_half_width(&self) -> f32 {
        self.far_half_width
    }

    pub fn far_half_height(&self) -> f32 {
        self.far_half_height
    }

    /// Returns the angle between the view direction and the direction to a
    /// corner of the near rectangle, which is the largest angle between the
    /// view direction and any direction inside the frustum.
    pub fn max_half_angular_size(&self) -> Radians {
        self.max_half_angular_size
    }

    pub fn cos_max_half_angular_size(&self) -> f32 {
        self.cos_max_half_angular_size
    }

    pub fn sin_max_half_angular_size(&self) -> f32 {
        self.sin_max_half_angular_size
    }

    /// Returns the number of planes bounding the frustum, which is 6 with a
    /// far plane and 5 otherwise.
    pub fn n_active_planes(&self) -> usize {
        if self.use_far_plane { 6 } else { 5 }
    }

    /// Returns the camera space vertices.
    pub fn eye_vertices(&self) -> &[Point3<f32>; 8] {
        &self.eye_vertices
    }

    /// Returns the active camera space planes.
    pub fn eye_planes(&self) -> &[Plane] {
        &self.eye_planes[..self.n_active_planes()]
    }

    /// Returns the world space vertices.
    pub fn world_vertices(&self) -> &[Point3<f32>; 8] {
        &self.world_vertices
    }

    /// Returns the active world space planes.
    pub fn world_planes(&self) -> &[Plane] {
        &self.world_planes[..self.n_active_planes()]
    }

    /// Returns all six world space planes, including the far plane when it
    /// is not active.
    pub fn all_world_planes(&self) -> &[Plane; 6] {
        &self.world_planes
    }

    /// Returns the world space near plane.
    pub fn world_near_plane(&self) -> &Plane {
        &self.world_planes[NEAR_PLANE_IDX]
    }

    /// Returns the world space frustum as a convex hull of the active planes.
    pub fn world_hull(&self) -> &ConvexHull {
        &self.world_hull
    }

    /// Returns the world space frustum without the far plane.
    pub fn world_hull_without_far_plane(&self) -> &ConvexHull {
        &self.world_hull_without_far_plane
    }

    /// Returns the mean of the world space vertices, which always lies
    /// inside the frustum.
    pub fn centroid(&self) -> &Point3<f32> {
        &self.centroid
    }

    /// Returns the world space sphere around the centroid enclosing the
    /// frustum, which only exists when the frustum has a far plane.
    pub fn bounding_sphere(&self) -> Option<&Sphere> {
        self.bounding_sphere.as_ref()
    }

    /// Returns the world space position of the camera.
    pub fn camera_position(&self) -> &Point3<f32> {
        &self.camera_position
    }

    /// Returns the world space direction the camera is looking in.
    pub fn view_direction(&self) -> &UnitVector3<f32> {
        &self.view_direction
    }

    /// Returns the view matrix the frustum was last calculated with.
    pub fn view_matrix(&self) -> &Matrix4<f32> {
        &self.view_matrix
    }

    /// Returns the projection matrix the frustum was last calculated with.
    pub fn projection_matrix(&self) -> &Matrix4<f32> {
        &self.projection_matrix
    }

    /// Returns the view projection matrix the frustum was last calculated
    /// with.
    pub fn view_projection_matrix(&self) -> &Matrix4<f32> {
        &self.view_projection_matrix
    }

    /// Returns the world space bounding box of the shadow map region, which
    /// is only computed when shadow mapping is enabled and a region is set.
    pub fn shadow_map_region_aabb(&self) -> Option<&AxisAlignedBox> {
        self.shadow_map_region_aabb.as_ref()
    }

    /// Whether the frustum was calculated in the previous frame as well as
    /// in the current one. A new frustum counts as calculated in frame 0, so
    /// a first calculation in frame 1 reports `true`.
    pub fn changing_every_frame(&self) -> bool {
        self.changing_every_frame
    }

    /// Whether the given world space point lies inside the frustum.
    pub fn contains_point(&self, point: &Point3<f32>) -> bool {
        point.intersects(&self.world_hull)
    }

    /// Returns the smallest number of frustum planes a shadow caster volume
    /// for a light at the given position must include.
    ///
    /// Shadow maps of directional lights cover the space behind the far
    /// plane as well, so all six planes are required for them.
    pub fn min_shadow_caster_plane_count(&self, light_position: &LightPosition) -> usize {
        if light_position.is_directional()
            && self.shadow_rendering_mode == ShadowRenderingMode::ShadowMapping
        {
            6
        } else {
            self.n_active_planes()
        }
    }

    fn compute_eye_space_vertices(&self) -> [Point3<f32>; 8] {
        let n = self.near_distance;
        let f = self.far_distance;
        let nw = self.near_half_width;
        let nh = self.near_half_height;
        let fw = self.far_half_width;
        let fh = self.far_half_height;
        [
            point![nw, nh, -n],
            point![-nw, nh, -n],
            point![-nw, -nh, -n],
            point![nw, -nh, -n],
            point![fw, fh, -f],
            point![-fw, fh, -f],
            point![-fw, -fh, -f],
            point![fw, -fh, -f],
        ]
    }

    fn compute_eye_space_planes(&self) -> [Plane; 6] {
        let e = self.e;
        let a = 1.0 / self.aspect_ratio;
        [
            Plane::new(-Vector3::z_axis(), -self.near_distance),
            Plane::new(UnitVector3::new_normalize(vector![e, 0.0, -1.0]), 0.0),
            Plane::new(UnitVector3::new_normalize(vector![-e, 0.0, -1.0]), 0.0),
            Plane::new(UnitVector3::new_normalize(vector![0.0, e, -a]), 0.0),
            Plane::new(UnitVector3::new_normalize(vector![0.0, -e, -a]), 0.0),
            Plane::new(Vector3::z_axis(), self.far_distance),
        ]
    }

    fn update_world_space_quantities(&mut self) {
        self.world_hull = ConvexHull::from_planes(self.world_planes().iter().copied());
        self.world_hull_without_far_plane = self.world_hull.with_first_planes(5);

        self.centroid = compute_centroid(&self.world_vertices).unwrap_or(self.camera_position);

        self.bounding_sphere = self.use_far_plane.then(|| {
            Sphere::new(
                self.centroid,
                (self.world_vertices[4] - self.centroid).norm(),
            )
        });
    }

    fn update_changing_every_frame(&mut self, current_frame: u64) {
        if current_frame != self.last_calculated_frame {
            self.changing_every_frame =
                self.last_calculated_frame.checked_add(1) == Some(current_frame);
            self.last_calculated_frame = current_frame;
        }
    }
}
