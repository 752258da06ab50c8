//! Screen space regions bounding the influence of a light.

use crate::frustum::Frustum;
use nalgebra::{Matrix4, Point3};
use std::fmt;
use tinyvec::ArrayVec;

/// Clip space depths below this are considered to lie in front of the near
/// plane.
const MIN_CLIP_SPACE_DEPTH: f64 = -1.001;

/// The most vertices a bounding box or pyramid for scissors can have.
const MAX_BOUNDING_VERTICES: usize = 8;

/// Upper bound on the number of points emitted when clipping a bounding box
/// or pyramid against the near plane.
const MAX_CLIPPED_POINTS: usize = 24;

/// An axis-aligned rectangle in normalized device coordinates together with
/// an interval of depths in the range [0, 1].
///
/// The region is an accumulator: it is reset to either the empty or the full
/// region and then grown to contain projected points.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scissors {
    left: f32,
    right: f32,
    bottom: f32,
    top: f32,
    near: f64,
    far: f64,
}

/// The outcome of bounding a pyramid with a scissors region.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ScissorsRegionType {
    /// No part of the pyramid is visible.
    Empty,
    /// The pyramid could not be processed and the region was left untouched.
    Undefined,
    /// The region was grown to contain the visible part of the pyramid.
    Defined,
}

impl Scissors {
    /// Creates an empty region that will contain exactly the first point it
    /// is updated with.
    pub fn empty() -> Self {
        Self {
            left: 1.0,
            right: -1.0,
            bottom: 1.0,
            top: -1.0,
            near: 1.0,
            far: 0.0,
        }
    }

    /// Creates a region covering the whole viewport and all depths.
    pub fn full() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            near: 0.0,
            far: 1.0,
        }
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    /// Returns the smallest depth in the region.
    pub fn near(&self) -> f64 {
        self.near
    }

    /// Returns the largest depth in the region.
    pub fn far(&self) -> f64 {
        self.far
    }

    pub(crate) fn set_near(&mut self, near: f64) {
        self.near = near;
    }

    pub(crate) fn set_far(&mut self, far: f64) {
        self.far = far;
    }

    pub(crate) fn set_left(&mut self, left: f32) {
        self.left = left;
    }

    pub(crate) fn set_right(&mut self, right: f32) {
        self.right = right;
    }

    pub(crate) fn set_bottom(&mut self, bottom: f32) {
        self.bottom = bottom;
    }

    pub(crate) fn set_top(&mut self, top: f32) {
        self.top = top;
    }

    /// Resets to the empty region.
    pub fn set_empty(&mut self) {
        *self = Self::empty();
    }

    /// Makes the rectangle cover the whole viewport without touching the
    /// depth bounds.
    pub fn set_full_region(&mut self) {
        self.left = -1.0;
        self.right = 1.0;
        self.bottom = -1.0;
        self.top = 1.0;
    }

    /// Resets to the full region with all depths.
    pub fn set_full_region_and_depth_bounds(&mut self) {
        *self = Self::full();
    }

    /// Whether the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.left >= self.right || self.bottom >= self.top
    }

    /// Whether the rectangle has no area or lies entirely outside the
    /// viewport.
    pub fn is_empty_or_outside(&self) -> bool {
        self.is_empty()
            || self.left >= 1.0
            || self.right <= -1.0
            || self.bottom >= 1.0
            || self.top <= -1.0
    }

    /// Collapses an empty rectangle to a rectangle with zero area at the
    /// viewport center, so that it stays valid when clamped. The depth bounds
    /// are left untouched.
    pub fn clamp_empty_region(&mut self) {
        if self.is_empty() {
            self.left = 0.0;
            self.right = 0.0;
            self.bottom = 0.0;
            self.top = 0.0;
        }
    }

    /// Clamps the rectangle to the viewport and the depth bounds to [0, 1].
    pub fn clamp_region_and_depth_bounds(&mut self) {
        self.left = self.left.clamp(-1.0, 1.0);
        self.right = self.right.clamp(-1.0, 1.0);
        self.bottom = self.bottom.clamp(-1.0, 1.0);
        self.top = self.top.clamp(-1.0, 1.0);
        self.near = self.near.clamp(0.0, 1.0);
        self.far = self.far.clamp(0.0, 1.0);
    }

    /// Grows the region to contain the given point in normalized device
    /// coordinates, with `z` in the clip space range [-1, 1].
    ///
    /// A point in front of the near plane means the input was not properly
    /// clipped, so the region is grown to also cover the whole viewport and
    /// all depths.
    pub fn update_with_projected_point(&mut self, x: f32, y: f32, z: f64) {
        if z >= MIN_CLIP_SPACE_DEPTH {
            let depth = 0.5 * z.max(-1.0) + 0.5;
            self.left = self.left.min(x);
            self.right = self.right.max(x);
            self.bottom = self.bottom.min(y);
            self.top = self.top.max(y);
            self.near = self.near.min(depth);
            self.far = self.far.max(depth);
        } else {
            log::warn!(
                "Projected point has clip space depth {z} in front of the near plane, growing scissors to full region"
            );
            self.left = self.left.min(-1.0);
            self.right = self.right.max(1.0);
            self.bottom = self.bottom.min(-1.0);
            self.top = self.top.max(1.0);
            self.near = self.near.min(0.0);
            self.far = self.far.max(1.0);
        }
    }

    /// Projects the given world space point with the view projection matrix
    /// and grows the region to contain it.
    pub fn update_with_world_space_point(
        &mut self,
        point: &Point3<f32>,
        view_projection_matrix: &Matrix4<f32>,
    ) {
        let clip = view_projection_matrix * point.to_homogeneous();
        let inverse_w = clip.w.recip();
        self.update_with_projected_point(
            clip.x * inverse_w,
            clip.y * inverse_w,
            f64::from(clip.z) / f64::from(clip.w),
        );
    }

    /// Grows the region to contain the projections of all the given world
    /// space points. The points are assumed to lie behind the near plane.
    ///
    /// The points are projected four at a time, with the remainder projected
    /// one by one.
    pub fn update_with_world_space_bounding_hull(
        &mut self,
        points: &[Point3<f32>],
        view_projection_matrix: &Matrix4<f32>,
    ) {
        let chunks = points.chunks_exact(4);
        let remainder = chunks.remainder();

        for chunk in chunks {
            let homogeneous_points = Matrix4::from_columns(&[
                chunk[0].to_homogeneous(),
                chunk[1].to_homogeneous(),
                chunk[2].to_homogeneous(),
                chunk[3].to_homogeneous(),
            ]);
            let clip_points = view_projection_matrix * homogeneous_points;

            for clip in clip_points.column_iter() {
                let inverse_w = clip.w.recip();
                self.update_with_projected_point(
                    clip.x * inverse_w,
                    clip.y * inverse_w,
                    f64::from(clip.z) / f64::from(clip.w),
                );
            }
        }

        for point in remainder {
            self.update_with_world_space_point(point, view_projection_matrix);
        }
    }

    /// Grows the region to contain the part of the given box lying behind
    /// the near plane of the frustum.
    ///
    /// The box is given by either the 4 vertices of a single quad or the 8
    /// vertices of a full box, where vertices 0-3 and 4-7 make up opposite
    /// faces and vertices with the same index modulo 4 are connected.
    ///
    /// Returns `false` if no part of the box is visible, in which case the
    /// region may or may not have been modified.
    pub fn update_with_world_space_bounding_box(
        &mut self,
        points: &[Point3<f32>],
        frustum: &Frustum,
    ) -> bool {
        let n_points = points.len();
        if n_points != 4 && n_points != 8 {
            log::warn!("Bounding box for scissors must have 4 or 8 vertices, got {n_points}");
            return false;
        }

        let near_plane = frustum.world_near_plane();
        let distances: ArrayVec<[f32; MAX_BOUNDING_VERTICES]> = points
            .iter()
            .map(|point| near_plane.compute_signed_distance(point))
            .collect();

        let n_outside = distances.iter().filter(|&&distance| distance < 0.0).count();

        if n_outside == n_points {
            return false;
        }

        if n_outside == 0 {
            self.update_with_world_space_bounding_hull(points, frustum.view_projection_matrix());
            return !self.is_empty_or_outside();
        }

        let mut clipped_points = ArrayVec::<[Point3<f32>; MAX_CLIPPED_POINTS]>::new();

        for i in 0..n_points {
            if distances[i] >= 0.0 {
                clipped_points.push(points[i]);
            }
            let j = (i & 4) | ((i + 1) & 3);
            if let Some(crossing) =
                compute_near_plane_crossing(points, &distances, frustum, i, j)
            {
                clipped_points.push(crossing);
            }
        }

        if n_points == 8 {
            for i in 0..4 {
                if let Some(crossing) =
                    compute_near_plane_crossing(points, &distances, frustum, i, i + 4)
                {
                    clipped_points.push(crossing);
                }
            }
        }

        self.update_with_world_space_bounding_hull(
            &clipped_points,
            frustum.view_projection_matrix(),
        );

        !self.is_empty_or_outside()
    }

    /// Grows the region to contain the part of the given pyramid lying
    /// behind the near plane of the frustum.
    ///
    /// Vertex 0 is the apex and the remaining 4, 6 or 7 vertices make up the
    /// base, ordered around its perimeter.
    pub fn update_with_world_space_bounding_pyramid(
        &mut self,
        points: &[Point3<f32>],
        frustum: &Frustum,
    ) -> ScissorsRegionType {
        let n_points = points.len();
        if !matches!(n_points, 5 | 7 | 8) {
            log::warn!("Bounding pyramid for scissors must have 5, 7 or 8 vertices, got {n_points}");
            return ScissorsRegionType::Undefined;
        }

        let near_plane = frustum.world_near_plane();
        let distances: ArrayVec<[f32; MAX_BOUNDING_VERTICES]> = points
            .iter()
            .map(|point| near_plane.compute_signed_distance(point))
            .collect();

        let n_outside = distances.iter().filter(|&&distance| distance < 0.0).count();

        if n_outside == n_points {
            return ScissorsRegionType::Empty;
        }

        if n_outside == 0 {
            self.update_with_world_space_bounding_hull(points, frustum.view_projection_matrix());
        } else {
            let mut clipped_points = ArrayVec::<[Point3<f32>; MAX_CLIPPED_POINTS]>::new();

            if distances[0] >= 0.0 {
                clipped_points.push(points[0]);
            }
            for i in 1..n_points {
                if let Some(crossing) =
                    compute_near_plane_crossing(points, &distances, frustum, 0, i)
                {
                    clipped_points.push(crossing);
                }
            }

            for i in 1..n_points {
                if distances[i] >= 0.0 {
                    clipped_points.push(points[i]);
                }
                let j = if i + 1 == n_points { 1 } else { i + 1 };
                if let Some(crossing) =
                    compute_near_plane_crossing(points, &distances, frustum, i, j)
                {
                    clipped_points.push(crossing);
                }
            }

            self.update_with_world_space_bounding_hull(
                &clipped_points,
                frustum.view_projection_matrix(),
            );
        }

        if self.is_empty_or_outside() {
            ScissorsRegionType::Empty
        } else {
            ScissorsRegionType::Defined
        }
    }

    /// Grows the region to contain the part of the given polyhedron lying
    /// behind the near plane of the frustum.
    ///
    /// Only polyhedra with 8 vertices, which are treated as boxes, are
    /// supported. Returns `false` for other polyhedra without modifying the
    /// region.
    pub fn update_with_world_space_bounding_polyhedron(
        &mut self,
        points: &[Point3<f32>],
        frustum: &Frustum,
    ) -> bool {
        if points.len() == 8 {
            self.update_with_world_space_bounding_box(points, frustum)
        } else {
            log::warn!(
                "Scissors for bounding polyhedron with {} vertices not implemented",
                points.len()
            );
            false
        }
    }
}

impl Default for Scissors {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Scissors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Scissors = ({}, {}), ({}, {}), near/far = ({}, {})",
            self.left, self.right, self.bottom, self.top, self.near, self.far
        )
    }
}

/// Computes where the edge between vertices `i` and `j` crosses the near
/// plane, if it does.
fn compute_near_plane_crossing(
    points: &[Point3<f32>],
    distances: &[f32],
    frustum: &Frustum,
    i: usize,
    j: usize,
) -> Option<Point3<f32>> {
    if (distances[i] < 0.0) == (distances[j] < 0.0) {
        return None;
    }
    let edge = points[j] - points[i];
    let denominator = frustum.world_near_plane().unit_normal().dot(&edge);
    if denominator == 0.0 {
        return None;
    }
    let t = -distances[i] / denominator;
    Some(points[i] + edge * t)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        camera::{CameraState, InfinitePerspectiveTransform},
        config::FrustumConfig,
    };
    use approx::{abs_diff_eq, assert_abs_diff_eq};
    use nalgebra::{Isometry3, point};
    use proptest::prelude::*;

    fn frustum_with_identity_view() -> Frustum {
        let config = FrustumConfig {
            field_of_view: 90.0,
            aspect_ratio: 1.0,
            near_distance: 1.0,
            far_distance: 100.0,
            use_far_plane: true,
        };
        let projection = InfinitePerspectiveTransform::new(config.field_of_view(), 1.0, 1.0);
        let camera = CameraState::new(&Isometry3::identity(), projection.to_matrix(), 1);
        let mut frustum = Frustum::new(&config);
        frustum.calculate(&camera);
        frustum
    }

    fn contains(outer: &Scissors, inner: &Scissors) -> bool {
        outer.left() <= inner.left()
            && outer.right() >= inner.right()
            && outer.bottom() <= inner.bottom()
            && outer.top() >= inner.top()
            && outer.near() <= inner.near()
            && outer.far() >= inner.far()
    }

    #[test]
    fn empty_scissors_are_empty() {
        let scissors = Scissors::empty();
        assert!(scissors.is_empty());
        assert!(scissors.is_empty_or_outside());
        assert!(!Scissors::full().is_empty_or_outside());
    }

    #[test]
    fn first_projected_point_defines_degenerate_region() {
        let mut scissors = Scissors::empty();
        scissors.update_with_projected_point(0.25, -0.5, 0.0);
        assert_eq!(scissors.left(), 0.25);
        assert_eq!(scissors.right(), 0.25);
        assert_eq!(scissors.bottom(), -0.5);
        assert_eq!(scissors.top(), -0.5);
        assert_eq!(scissors.near(), 0.5);
        assert_eq!(scissors.far(), 0.5);
    }

    #[test]
    fn point_slightly_in_front_of_near_plane_is_clamped_to_zero_depth() {
        let mut scissors = Scissors::empty();
        scissors.update_with_projected_point(0.0, 0.0, -1.0005);
        assert_eq!(scissors.near(), 0.0);
    }

    #[test]
    fn point_far_in_front_of_near_plane_gives_full_region() {
        let mut scissors = Scissors::empty();
        scissors.update_with_projected_point(0.1, 0.1, 0.2);
        scissors.update_with_projected_point(0.0, 0.0, -1.5);
        assert_eq!(scissors, Scissors::full());
    }

    #[test]
    fn point_in_front_of_near_plane_keeps_off_screen_extent() {
        let mut scissors = Scissors::empty();
        scissors.update_with_projected_point(-3.0, 0.0, 0.0);
        scissors.update_with_projected_point(2.5, 0.0, 0.0);
        let before = scissors;

        scissors.update_with_projected_point(0.0, 0.0, -1.5);

        assert!(contains(&scissors, &before));
        assert_eq!(scissors.left(), -3.0);
        assert_eq!(scissors.right(), 2.5);
        assert_eq!(scissors.bottom(), -1.0);
        assert_eq!(scissors.top(), 1.0);
        assert_eq!(scissors.near(), 0.0);
        assert_eq!(scissors.far(), 1.0);
    }

    #[test]
    fn explicit_resets_replace_accumulated_region() {
        let mut scissors = Scissors::empty();
        scissors.update_with_projected_point(-3.0, 0.5, 0.0);

        scissors.set_full_region();
        assert_eq!(scissors.left(), -1.0);
        assert_eq!(scissors.top(), 1.0);
        assert_eq!(scissors.near(), 0.5);

        scissors.set_full_region_and_depth_bounds();
        assert_eq!(scissors, Scissors::full());

        scissors.set_empty();
        assert_eq!(scissors, Scissors::empty());
    }

    #[test]
    fn region_outside_viewport_is_detected() {
        let mut scissors = Scissors::empty();
        scissors.update_with_projected_point(1.2, 0.0, 0.0);
        scissors.update_with_projected_point(1.5, 0.5, 0.0);
        assert!(!scissors.is_empty());
        assert!(scissors.is_empty_or_outside());
    }

    #[test]
    fn clamping_empty_region_collapses_it_to_center() {
        let mut scissors = Scissors::empty();
        scissors.clamp_empty_region();
        scissors.clamp_region_and_depth_bounds();
        assert_eq!(scissors.left(), 0.0);
        assert_eq!(scissors.right(), 0.0);
        assert_eq!(scissors.bottom(), 0.0);
        assert_eq!(scissors.top(), 0.0);
        assert_eq!(scissors.near(), 1.0);
        assert_eq!(scissors.far(), 0.0);
    }

    #[test]
    fn clamping_restricts_region_to_viewport() {
        let mut scissors = Scissors::empty();
        scissors.update_with_projected_point(-3.0, -0.5, 0.0);
        scissors.update_with_projected_point(0.5, 2.0, 0.5);
        scissors.clamp_region_and_depth_bounds();
        assert_eq!(scissors.left(), -1.0);
        assert_eq!(scissors.right(), 0.5);
        assert_eq!(scissors.bottom(), -0.5);
        assert_eq!(scissors.top(), 1.0);
    }

    #[test]
    fn scissors_display_lists_bounds() {
        assert_eq!(
            Scissors::full().to_string(),
            "Scissors = (-1, 1), (-1, 1), near/far = (0, 1)"
        );
    }

    #[test]
    fn projecting_near_plane_vertices_gives_full_region_at_zero_depth() {
        let frustum = frustum_with_identity_view();
        let mut scissors = Scissors::empty();
        scissors.update_with_world_space_bounding_hull(
            &frustum.world_vertices()[..4],
            frustum.view_projection_matrix(),
        );
        assert_abs_diff_eq!(scissors.left(), -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(scissors.right(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(scissors.bottom(), -1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(scissors.top(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(scissors.near(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn box_behind_camera_is_rejected_without_modifying_region() {
        let frustum = frustum_with_identity_view();
        let points = [
            point![1.0, 1.0, 2.0],
            point![-1.0, 1.0, 2.0],
            point![-1.0, -1.0, 2.0],
            point![1.0, -1.0, 2.0],
            point![1.0, 1.0, 4.0],
            point![-1.0, 1.0, 4.0],
            point![-1.0, -1.0, 4.0],
            point![1.0, -1.0, 4.0],
        ];
        let mut scissors = Scissors::empty();
        scissors.update_with_projected_point(0.1, 0.2, 0.3);
        let before = scissors;

        assert!(!scissors.update_with_world_space_bounding_box(&points, &frustum));
        assert_eq!(scissors, before);
    }

    #[test]
    fn box_in_front_of_camera_is_projected_directly() {
        let frustum = frustum_with_identity_view();
        let points = [
            point![1.0, 1.0, -5.0],
            point![-1.0, 1.0, -5.0],
            point![-1.0, -1.0, -5.0],
            point![1.0, -1.0, -5.0],
            point![1.0, 1.0, -10.0],
            point![-1.0, 1.0, -10.0],
            point![-1.0, -1.0, -10.0],
            point![1.0, -1.0, -10.0],
        ];
        let mut scissors = Scissors::empty();
        assert!(scissors.update_with_world_space_bounding_box(&points, &frustum));
        assert_abs_diff_eq!(scissors.left(), -0.2, epsilon = 1e-5);
        assert_abs_diff_eq!(scissors.right(), 0.2, epsilon = 1e-5);
        assert_abs_diff_eq!(scissors.bottom(), -0.2, epsilon = 1e-5);
        assert_abs_diff_eq!(scissors.top(), 0.2, epsilon = 1e-5);
    }

    #[test]
    fn box_straddling_near_plane_is_clipped_to_it() {
        let frustum = frustum_with_identity_view();
        let points = [
            point![0.5, 0.5, 1.0],
            point![-0.5, 0.5, 1.0],
            point![-0.5, -0.5, 1.0],
            point![0.5, -0.5, 1.0],
            point![0.5, 0.5, -3.0],
            point![-0.5, 0.5, -3.0],
            point![-0.5, -0.5, -3.0],
            point![0.5, -0.5, -3.0],
        ];
        let mut scissors = Scissors::empty();
        assert!(scissors.update_with_world_space_bounding_box(&points, &frustum));
        // The crossings at z = -1 project to +-0.5.
        assert_abs_diff_eq!(scissors.left(), -0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(scissors.right(), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(scissors.near(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn box_with_wrong_vertex_count_is_rejected() {
        let frustum = frustum_with_identity_view();
        let mut scissors = Scissors::empty();
        assert!(!scissors.update_with_world_space_bounding_box(
            &[point![0.0, 0.0, -2.0]; 5],
            &frustum
        ));
        assert!(scissors.is_empty());
    }

    #[test]
    fn pyramid_with_apex_behind_camera_is_clipped() {
        let frustum = frustum_with_identity_view();
        let points = [
            point![0.0, 0.0, 1.0],
            point![1.0, 1.0, -3.0],
            point![-1.0, 1.0, -3.0],
            point![-1.0, -1.0, -3.0],
            point![1.0, -1.0, -3.0],
        ];
        let mut scissors = Scissors::empty();
        assert_eq!(
            scissors.update_with_world_space_bounding_pyramid(&points, &frustum),
            ScissorsRegionType::Defined
        );
        // Apex edges cross z = -1 at half way, projecting to +-0.5.
        assert_abs_diff_eq!(scissors.left(), -0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(scissors.top(), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(scissors.near(), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn pyramid_fully_behind_camera_is_empty() {
        let frustum = frustum_with_identity_view();
        let points = [point![0.0, 0.0, 5.0]; 5];
        let mut scissors = Scissors::empty();
        assert_eq!(
            scissors.update_with_world_space_bounding_pyramid(&points, &frustum),
            ScissorsRegionType::Empty
        );
    }

    #[test]
    fn pyramid_with_unsupported_vertex_count_is_undefined() {
        let frustum = frustum_with_identity_view();
        let mut scissors = Scissors::empty();
        assert_eq!(
            scissors.update_with_world_space_bounding_pyramid(&[point![0.0, 0.0, -2.0]; 6], &frustum),
            ScissorsRegionType::Undefined
        );
    }

    #[test]
    fn non_box_polyhedron_is_not_supported() {
        let frustum = frustum_with_identity_view();
        let mut scissors = Scissors::empty();
        assert!(!scissors.update_with_world_space_bounding_polyhedron(
            &[point![0.0, 0.0, -2.0]; 6],
            &frustum
        ));
        assert!(scissors.is_empty());
    }

    prop_compose! {
        fn visible_point_strategy()(
            x in -50.0_f32..50.0,
            y in -50.0_f32..50.0,
            z in -100.0_f32..-1.0,
        ) -> Point3<f32> {
            point![x, y, z]
        }
    }

    prop_compose! {
        fn point_ahead_of_camera_strategy()(
            x in -50.0_f32..50.0,
            y in -50.0_f32..50.0,
            z in -100.0_f32..-0.05,
        ) -> Point3<f32> {
            point![x, y, z]
        }
    }

    proptest! {
        #[test]
        fn adding_points_never_shrinks_region(
            first in prop::collection::vec(visible_point_strategy(), 1..10),
            second in prop::collection::vec(visible_point_strategy(), 0..10),
        ) {
            let frustum = frustum_with_identity_view();
            let view_projection_matrix = frustum.view_projection_matrix();

            let mut scissors = Scissors::empty();
            scissors.update_with_world_space_bounding_hull(&first, view_projection_matrix);
            let after_first = scissors;
            scissors.update_with_world_space_bounding_hull(&second, view_projection_matrix);

            prop_assert!(contains(&scissors, &after_first));
        }
    }

    proptest! {
        #[test]
        fn adding_points_in_front_of_near_plane_never_shrinks_region(
            first in prop::collection::vec(point_ahead_of_camera_strategy(), 1..10),
            second in prop::collection::vec(point_ahead_of_camera_strategy(), 0..10),
        ) {
            let frustum = frustum_with_identity_view();
            let view_projection_matrix = frustum.view_projection_matrix();

            let mut scissors = Scissors::empty();
            for point in &first {
                scissors.update_with_world_space_point(point, view_projection_matrix);
            }
            let after_first = scissors;
            for point in &second {
                scissors.update_with_world_space_point(point, view_projection_matrix);
            }

            prop_assert!(contains(&scissors, &after_first));
        }
    }

    proptest! {
        #[test]
        fn batched_projection_matches_pointwise_projection(
            points in prop::collection::vec(visible_point_strategy(), 0..15),
        ) {
            let frustum = frustum_with_identity_view();
            let view_projection_matrix = frustum.view_projection_matrix();

            let mut batched = Scissors::empty();
            batched.update_with_world_space_bounding_hull(&points, view_projection_matrix);

            let mut pointwise = Scissors::empty();
            for point in &points {
                pointwise.update_with_world_space_point(point, view_projection_matrix);
            }

            prop_assert!(abs_diff_eq!(batched.left(), pointwise.left(), epsilon = 1e-5));
            prop_assert!(abs_diff_eq!(batched.right(), pointwise.right(), epsilon = 1e-5));
            prop_assert!(abs_diff_eq!(batched.bottom(), pointwise.bottom(), epsilon = 1e-5));
            prop_assert!(abs_diff_eq!(batched.top(), pointwise.top(), epsilon = 1e-5));
            prop_assert!(abs_diff_eq!(batched.near(), pointwise.near(), epsilon = 1e-6));
            prop_assert!(abs_diff_eq!(batched.far(), pointwise.far(), epsilon = 1e-6));
        }
    }
}
