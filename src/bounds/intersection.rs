//! Implementations of the intersection tests between pairs of volumes.

use super::{
    AxisAlignedBox, BoundsCheckResult, ConvexHull, ConvexHullFull, ConvexHullWithVertices,
    Cylinder, HalfCylinder, Intersects, IsCompletelyInside, ObjectBounds, OrientedBox, Plane,
    Pyramid, PyramidCone, QueryIntersection, Sphere, SphericalSector,
};
use nalgebra::{Point3, UnitVector3, Vector3};

impl Intersects<AxisAlignedBox> for Point3<f32> {
    fn intersects(&self, aabb: &AxisAlignedBox) -> bool {
        let lower = aabb.lower_corner();
        let upper = aabb.upper_corner();
        (0..3).all(|dim| self[dim] >= lower[dim] && self[dim] <= upper[dim])
    }
}

impl IsCompletelyInside<AxisAlignedBox> for Point3<f32> {
    fn is_completely_inside(&self, aabb: &AxisAlignedBox) -> bool {
        self.intersects(aabb)
    }
}

impl Intersects<Sphere> for Point3<f32> {
    fn intersects(&self, sphere: &Sphere) -> bool {
        sphere.contains_point(self)
    }
}

impl Intersects<OrientedBox> for Point3<f32> {
    fn intersects(&self, oriented_box: &OrientedBox) -> bool {
        oriented_box.contains_point(self)
    }
}

impl Intersects<Cylinder> for Point3<f32> {
    fn intersects(&self, cylinder: &Cylinder) -> bool {
        cylinder.contains_point(self)
    }
}

impl Intersects<ConvexHull> for Point3<f32> {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        hull.contains_point(self)
    }
}

impl Intersects<Sphere> for Sphere {
    fn intersects(&self, other: &Sphere) -> bool {
        let max_distance = self.radius() + other.radius();
        nalgebra::distance_squared(self.center(), other.center()) < max_distance * max_distance
    }
}

impl QueryIntersection<Sphere> for Sphere {
    fn query_intersection(&self, other: &Sphere) -> BoundsCheckResult {
        let distance = nalgebra::distance(self.center(), other.center());
        if distance >= self.radius() + other.radius() {
            BoundsCheckResult::Outside
        } else if distance + self.radius() <= other.radius() {
            BoundsCheckResult::Inside
        } else {
            BoundsCheckResult::Intersecting
        }
    }
}

impl IsCompletelyInside<Sphere> for Sphere {
    fn is_completely_inside(&self, other: &Sphere) -> bool {
        other.encloses_sphere(self)
    }
}

impl Intersects<AxisAlignedBox> for Sphere {
    fn intersects(&self, aabb: &AxisAlignedBox) -> bool {
        let closest_point = self
            .center()
            .sup(aabb.lower_corner())
            .inf(aabb.upper_corner());
        nalgebra::distance_squared(self.center(), &closest_point) < self.radius_squared()
    }
}

impl IsCompletelyInside<AxisAlignedBox> for Sphere {
    fn is_completely_inside(&self, aabb: &AxisAlignedBox) -> bool {
        let lower = aabb.lower_corner();
        let upper = aabb.upper_corner();
        let center = self.center();
        (0..3).all(|dim| {
            center[dim] - self.radius() >= lower[dim] && center[dim] + self.radius() <= upper[dim]
        })
    }
}

impl Intersects<OrientedBox> for Sphere {
    fn intersects(&self, oriented_box: &OrientedBox) -> bool {
        oriented_box.intersects(self)
    }
}

impl Intersects<ConvexHull> for Sphere {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        hull.planes()
            .iter()
            .all(|plane| plane.compute_signed_distance(self.center()) > -self.radius())
    }
}

impl QueryIntersection<ConvexHull> for Sphere {
    fn query_intersection(&self, hull: &ConvexHull) -> BoundsCheckResult {
        classify_against_planes(hull.planes(), self.center(), |_| self.radius())
    }
}

impl Intersects<Cylinder> for Sphere {
    fn intersects(&self, cylinder: &Cylinder) -> bool {
        self.query_intersection(cylinder) != BoundsCheckResult::Outside
    }
}

impl QueryIntersection<Cylinder> for Sphere {
    fn query_intersection(&self, cylinder: &Cylinder) -> BoundsCheckResult {
        let displacement = self.center() - cylinder.center();
        let axial_distance = cylinder.axis().dot(&displacement).abs();
        let radial_distance = (displacement.magnitude_squared() - axial_distance.powi(2))
            .max(0.0)
            .sqrt();
        let half_length = 0.5 * cylinder.length();

        if axial_distance >= half_length + self.radius()
            || radial_distance >= cylinder.radius() + self.radius()
        {
            BoundsCheckResult::Outside
        } else if axial_distance + self.radius() <= half_length
            && radial_distance + self.radius() <= cylinder.radius()
        {
            BoundsCheckResult::Inside
        } else {
            BoundsCheckResult::Intersecting
        }
    }
}

impl Intersects<AxisAlignedBox> for AxisAlignedBox {
    fn intersects(&self, other: &AxisAlignedBox) -> bool {
        (0..3).all(|dim| {
            self.lower_corner()[dim] < other.upper_corner()[dim]
                && self.upper_corner()[dim] > other.lower_corner()[dim]
        })
    }
}

impl IsCompletelyInside<AxisAlignedBox> for AxisAlignedBox {
    fn is_completely_inside(&self, other: &AxisAlignedBox) -> bool {
        (0..3).all(|dim| {
            self.lower_corner()[dim] >= other.lower_corner()[dim]
                && self.upper_corner()[dim] <= other.upper_corner()[dim]
        })
    }
}

impl Intersects<ConvexHull> for AxisAlignedBox {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        self.query_intersection(hull) != BoundsCheckResult::Outside
    }
}

impl QueryIntersection<ConvexHull> for AxisAlignedBox {
    fn query_intersection(&self, hull: &ConvexHull) -> BoundsCheckResult {
        let half_extents = 0.5 * self.extents();
        classify_against_planes(hull.planes(), &self.center(), |unit_normal| {
            half_extents.dot(&unit_normal.abs())
        })
    }
}

impl QueryIntersection<Sphere> for AxisAlignedBox {
    fn query_intersection(&self, sphere: &Sphere) -> BoundsCheckResult {
        if !sphere.intersects(self) {
            return BoundsCheckResult::Outside;
        }
        let center = sphere.center();
        let farthest_corner = Point3::from(Vector3::from_fn(|dim, _| {
            let lower = self.lower_corner()[dim];
            let upper = self.upper_corner()[dim];
            if (center[dim] - lower).abs() > (upper - center[dim]).abs() {
                lower
            } else {
                upper
            }
        }));
        if nalgebra::distance_squared(center, &farthest_corner) <= sphere.radius_squared() {
            BoundsCheckResult::Inside
        } else {
            BoundsCheckResult::Intersecting
        }
    }
}

impl IsCompletelyInside<Sphere> for AxisAlignedBox {
    fn is_completely_inside(&self, sphere: &Sphere) -> bool {
        self.query_intersection(sphere) == BoundsCheckResult::Inside
    }
}

impl Intersects<Sphere> for OrientedBox {
    fn intersects(&self, sphere: &Sphere) -> bool {
        let displacement = sphere.center() - self.center();
        let closest_offset = [
            (self.compute_width_axis(), self.half_width()),
            (self.compute_height_axis(), self.half_height()),
            (self.compute_depth_axis(), self.half_depth()),
        ]
        .into_iter()
        .fold(Vector3::zeros(), |offset, (axis, half_extent)| {
            let projection = axis.dot(&displacement).clamp(-half_extent, half_extent);
            offset + axis.into_inner() * projection
        });
        (displacement - closest_offset).magnitude_squared() < sphere.radius_squared()
    }
}

impl Intersects<ConvexHull> for OrientedBox {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        reject_by_effective_radius(hull.planes(), self.center(), |unit_normal| {
            self.compute_effective_radius(unit_normal)
        })
    }
}

impl Intersects<Cylinder> for OrientedBox {
    fn intersects(&self, cylinder: &Cylinder) -> bool {
        if !self.compute_bounding_sphere().intersects(cylinder) {
            return false;
        }
        let box_planes = self.compute_bounding_planes();
        reject_by_effective_radius(&box_planes, cylinder.center(), |unit_normal| {
            cylinder.compute_effective_radius(unit_normal)
        })
    }
}

impl Intersects<ConvexHull> for Cylinder {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        reject_by_effective_radius(hull.planes(), self.center(), |unit_normal| {
            self.compute_effective_radius(unit_normal)
        })
    }
}

impl Intersects<ConvexHull> for HalfCylinder {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        hull.planes().iter().all(|plane| {
            let cos_angle = self.axis().dot(&plane.unit_normal().into_inner());
            if cos_angle > 0.0 {
                // Extends infinitely into the positive halfspace
                return true;
            }
            let radial_extent = self.radius() * (1.0 - cos_angle * cos_angle).max(0.0).sqrt();
            plane.compute_signed_distance(self.endpoint()) + radial_extent > 0.0
        })
    }
}

impl Intersects<ConvexHull> for ConvexHullWithVertices {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        vertices_intersect_hull(self.vertices(), hull)
    }
}

impl Intersects<ConvexHull> for ConvexHullFull {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        let sphere = self.bounding_sphere();
        let vertices = self.hull_with_vertices().vertices();
        hull.planes().iter().all(|plane| {
            let distance = plane.compute_signed_distance(sphere.center());
            if distance >= sphere.radius() {
                true
            } else if distance <= -sphere.radius() {
                false
            } else {
                vertices
                    .iter()
                    .any(|vertex| plane.compute_signed_distance(vertex) >= 0.0)
            }
        })
    }
}

impl Intersects<ConvexHull> for Pyramid {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        vertices_intersect_hull(self.vertices(), hull)
    }
}

impl Intersects<ConvexHull> for PyramidCone {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        self.compute_bounding_sphere().intersects(hull) && self.pyramid().intersects(hull)
    }
}

impl Intersects<ConvexHull> for SphericalSector {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        hull.planes().iter().all(|plane| {
            let cos_angle = self.axis().dot(&plane.unit_normal().into_inner());
            let max_projection = if cos_angle >= self.cos_half_angle() {
                1.0
            } else {
                let sin_angle = (1.0 - cos_angle * cos_angle).max(0.0).sqrt();
                (cos_angle * self.cos_half_angle() + sin_angle * self.sin_half_angle()).max(0.0)
            };
            plane.compute_signed_distance(self.apex()) + self.radius() * max_projection > 0.0
        })
    }
}

impl Intersects<ConvexHull> for ObjectBounds {
    fn intersects(&self, hull: &ConvexHull) -> bool {
        self.sphere().intersects(hull)
            && self
                .oriented_box()
                .is_none_or(|oriented_box| oriented_box.intersects(hull))
    }
}

impl Intersects<Sphere> for ObjectBounds {
    fn intersects(&self, sphere: &Sphere) -> bool {
        self.sphere().intersects(sphere)
            && self
                .oriented_box()
                .is_none_or(|oriented_box| oriented_box.intersects(sphere))
    }
}

impl QueryIntersection<Sphere> for ObjectBounds {
    fn query_intersection(&self, sphere: &Sphere) -> BoundsCheckResult {
        let result = self.sphere().query_intersection(sphere);
        match (result, self.oriented_box()) {
            (BoundsCheckResult::Intersecting, Some(oriented_box)) => {
                if !oriented_box.intersects(sphere) {
                    BoundsCheckResult::Outside
                } else if oriented_box
                    .compute_corners()
                    .iter()
                    .all(|corner| nalgebra::distance_squared(corner, sphere.center()) <= sphere.radius_squared())
                {
                    BoundsCheckResult::Inside
                } else {
                    BoundsCheckResult::Intersecting
                }
            }
            _ => result,
        }
    }
}

/// Classifies a shape with the given center against the planes, using
/// `extent_along` to obtain the extent of the shape along each plane normal.
fn classify_against_planes(
    planes: &[Plane],
    center: &Point3<f32>,
    extent_along: impl Fn(&UnitVector3<f32>) -> f32,
) -> BoundsCheckResult {
    let mut result = BoundsCheckResult::Inside;
    for plane in planes {
        let distance = plane.compute_signed_distance(center);
        let extent = extent_along(plane.unit_normal());
        if distance <= -extent {
            return BoundsCheckResult::Outside;
        }
        if distance < extent {
            result = BoundsCheckResult::Intersecting;
        }
    }
    result
}

fn reject_by_effective_radius(
    planes: &[Plane],
    center: &Point3<f32>,
    effective_radius: impl Fn(&UnitVector3<f32>) -> f32,
) -> bool {
    planes.iter().all(|plane| {
        plane.compute_signed_distance(center) > -effective_radius(plane.unit_normal())
    })
}

fn vertices_intersect_hull(vertices: &[Point3<f32>], hull: &ConvexHull) -> bool {
    hull.planes().iter().all(|plane| {
        vertices
            .iter()
            .any(|vertex| plane.compute_signed_distance(vertex) >= 0.0)
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::angle::Degrees;
    use nalgebra::{UnitQuaternion, point};

    fn unit_cube_hull() -> ConvexHull {
        ConvexHull::from_planes([
            Plane::new(Vector3::x_axis(), 0.0),
            Plane::new(-Vector3::x_axis(), 1.0),
            Plane::new(Vector3::y_axis(), 0.0),
            Plane::new(-Vector3::y_axis(), 1.0),
            Plane::new(Vector3::z_axis(), 0.0),
            Plane::new(-Vector3::z_axis(), 1.0),
        ])
    }

    #[test]
    fn point_on_aabb_boundary_intersects() {
        let aabb = AxisAlignedBox::new(point![0.0, 0.0, 0.0], point![1.0, 1.0, 1.0]);
        assert!(point![1.0, 0.5, 0.0].intersects(&aabb));
        assert!(point![0.5, 0.5, 0.5].is_completely_inside(&aabb));
        assert!(!point![1.01, 0.5, 0.0].intersects(&aabb));
    }

    #[test]
    fn touching_spheres_do_not_intersect() {
        let sphere_1 = Sphere::new(point![0.0, 0.0, 0.0], 1.0);
        let sphere_2 = Sphere::new(point![2.0, 0.0, 0.0], 1.0);
        assert!(!sphere_1.intersects(&sphere_2));
        assert_eq!(
            sphere_1.query_intersection(&sphere_2),
            BoundsCheckResult::Outside
        );
    }

    #[test]
    fn small_sphere_inside_large_sphere_is_inside() {
        let small = Sphere::new(point![0.5, 0.0, 0.0], 1.0);
        let large = Sphere::new(point![0.0, 0.0, 0.0], 2.0);
        assert_eq!(small.query_intersection(&large), BoundsCheckResult::Inside);
        assert_eq!(large.query_intersection(&small), BoundsCheckResult::Intersecting);
        assert!(small.is_completely_inside(&large));
    }

    #[test]
    fn sphere_against_hull_is_classified_by_plane_distances() {
        let hull = unit_cube_hull();
        assert_eq!(
            Sphere::new(point![0.5, 0.5, 0.5], 0.25).query_intersection(&hull),
            BoundsCheckResult::Inside
        );
        assert_eq!(
            Sphere::new(point![1.1, 0.5, 0.5], 0.25).query_intersection(&hull),
            BoundsCheckResult::Intersecting
        );
        assert_eq!(
            Sphere::new(point![1.5, 0.5, 0.5], 0.25).query_intersection(&hull),
            BoundsCheckResult::Outside
        );
        assert!(!Sphere::new(point![1.5, 0.5, 0.5], 0.25).intersects(&hull));
    }

    #[test]
    fn sphere_against_aabb_uses_closest_point() {
        let aabb = AxisAlignedBox::new(point![0.0, 0.0, 0.0], point![1.0, 1.0, 1.0]);
        // Near the corner but outside the sphere distance to it
        assert!(!Sphere::new(point![1.5, 1.5, 1.5], 0.8).intersects(&aabb));
        assert!(Sphere::new(point![1.5, 1.5, 1.5], 0.9).intersects(&aabb));
        assert!(Sphere::new(point![0.5, 0.5, 0.5], 0.5).is_completely_inside(&aabb));
        assert!(!Sphere::new(point![0.5, 0.5, 0.5], 0.6).is_completely_inside(&aabb));
    }

    #[test]
    fn aabbs_sharing_a_face_do_not_intersect() {
        let aabb_1 = AxisAlignedBox::new(point![0.0, 0.0, 0.0], point![1.0, 1.0, 1.0]);
        let aabb_2 = AxisAlignedBox::new(point![1.0, 0.0, 0.0], point![2.0, 1.0, 1.0]);
        let aabb_3 = AxisAlignedBox::new(point![0.5, 0.5, 0.5], point![2.0, 1.0, 1.0]);
        assert!(!aabb_1.intersects(&aabb_2));
        assert!(aabb_1.intersects(&aabb_3));
        assert!(!aabb_3.is_completely_inside(&aabb_1));
        assert!(aabb_1.is_completely_inside(&aabb_1));
    }

    #[test]
    fn aabb_against_hull_uses_effective_radius() {
        let hull = unit_cube_hull();
        let inside = AxisAlignedBox::new(point![0.25, 0.25, 0.25], point![0.75, 0.75, 0.75]);
        let straddling = AxisAlignedBox::new(point![0.75, 0.25, 0.25], point![1.25, 0.75, 0.75]);
        let outside = AxisAlignedBox::new(point![1.25, 0.25, 0.25], point![1.75, 0.75, 0.75]);
        assert_eq!(inside.query_intersection(&hull), BoundsCheckResult::Inside);
        assert_eq!(straddling.query_intersection(&hull), BoundsCheckResult::Intersecting);
        assert_eq!(outside.query_intersection(&hull), BoundsCheckResult::Outside);
        assert!(!outside.intersects(&hull));
    }

    #[test]
    fn aabb_against_sphere_detects_containment() {
        let sphere = Sphere::new(Point3::origin(), 2.0);
        let small = AxisAlignedBox::new(point![-0.5, -0.5, -0.5], point![0.5, 0.5, 0.5]);
        let large = AxisAlignedBox::new(point![-2.0, -2.0, -2.0], point![2.0, 2.0, 2.0]);
        let far = AxisAlignedBox::new(point![3.0, 3.0, 3.0], point![4.0, 4.0, 4.0]);
        assert_eq!(small.query_intersection(&sphere), BoundsCheckResult::Inside);
        assert!(small.is_completely_inside(&sphere));
        assert_eq!(large.query_intersection(&sphere), BoundsCheckResult::Intersecting);
        assert_eq!(far.query_intersection(&sphere), BoundsCheckResult::Outside);
    }

    #[test]
    fn rotated_box_against_hull_uses_effective_radius() {
        let hull = ConvexHull::from_planes([Plane::new(Vector3::x_axis(), 0.0)]);
        let oriented_box = OrientedBox::new(
            point![-1.2, 0.0, 0.0],
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f32::consts::FRAC_PI_4),
            1.0,
            1.0,
            1.0,
        );
        // Diagonal half extent is sqrt(2) > 1.2
        assert!(oriented_box.intersects(&hull));
        let shifted = OrientedBox::new(
            point![-1.5, 0.0, 0.0],
            *oriented_box.orientation(),
            1.0,
            1.0,
            1.0,
        );
        assert!(!shifted.intersects(&hull));
    }

    #[test]
    fn oriented_box_against_sphere_uses_closest_point() {
        let oriented_box = OrientedBox::new(
            Point3::origin(),
            UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f32::consts::FRAC_PI_4),
            1.0,
            1.0,
            1.0,
        );
        let corner_distance = 2.0_f32.sqrt();
        assert!(Sphere::new(point![corner_distance + 0.4, 0.0, 0.0], 0.5).intersects(&oriented_box));
        assert!(!Sphere::new(point![1.0, 1.0, 0.0], 0.3).intersects(&oriented_box));
    }

    #[test]
    fn cylinder_against_hull_uses_effective_radius() {
        let hull = ConvexHull::from_planes([Plane::new(Vector3::x_axis(), 0.0)]);
        let along_normal = Cylinder::new(point![-1.5, 0.0, 0.0], Vector3::x_axis(), 4.0, 0.5);
        let across_normal = Cylinder::new(point![-1.5, 0.0, 0.0], Vector3::y_axis(), 4.0, 0.5);
        assert!(along_normal.intersects(&hull));
        assert!(!across_normal.intersects(&hull));
    }

    #[test]
    fn sphere_against_cylinder_is_classified() {
        let cylinder = Cylinder::new(Point3::origin(), Vector3::z_axis(), 4.0, 1.0);
        assert_eq!(
            Sphere::new(point![0.0, 0.0, 1.0], 0.5).query_intersection(&cylinder),
            BoundsCheckResult::Inside
        );
        assert_eq!(
            Sphere::new(point![0.0, 1.2, 0.0], 0.5).query_intersection(&cylinder),
            BoundsCheckResult::Intersecting
        );
        assert_eq!(
            Sphere::new(point![0.0, 0.0, 2.6], 0.5).query_intersection(&cylinder),
            BoundsCheckResult::Outside
        );
        assert!(!Sphere::new(point![2.0, 0.0, 0.0], 0.5).intersects(&cylinder));
    }

    #[test]
    fn oriented_box_against_cylinder_rejects_distant_box() {
        let cylinder = Cylinder::new(Point3::origin(), Vector3::z_axis(), 4.0, 1.0);
        let near_box = OrientedBox::new(point![1.5, 0.0, 0.0], UnitQuaternion::identity(), 0.6, 0.6, 0.6);
        let far_box = OrientedBox::new(point![3.0, 0.0, 0.0], UnitQuaternion::identity(), 0.6, 0.6, 0.6);
        assert!(near_box.intersects(&cylinder));
        assert!(!far_box.intersects(&cylinder));
    }

    #[test]
    fn half_cylinder_pointing_into_hull_always_intersects_its_plane() {
        let hull = ConvexHull::from_planes([Plane::new(Vector3::x_axis(), -10.0)]);
        let towards = HalfCylinder::new(Point3::origin(), Vector3::x_axis(), 1.0);
        let away = HalfCylinder::new(Point3::origin(), -Vector3::x_axis(), 1.0);
        let sideways = HalfCylinder::new(point![9.5, 0.0, 0.0], Vector3::y_axis(), 1.0);
        assert!(towards.intersects(&hull));
        assert!(!away.intersects(&hull));
        assert!(sideways.intersects(&hull));
    }

    #[test]
    fn hull_with_vertices_is_rejected_only_when_all_vertices_are_outside_one_plane() {
        let hull = unit_cube_hull();
        let outside = ConvexHullWithVertices::new(
            ConvexHull::new(),
            vec![point![2.0, 0.0, 0.0], point![3.0, 1.0, 0.0], point![2.5, 0.5, 1.0]],
        );
        let straddling = ConvexHullWithVertices::new(
            ConvexHull::new(),
            vec![point![0.5, 0.5, 0.5], point![3.0, 1.0, 0.0], point![2.5, 0.5, 1.0]],
        );
        assert!(!outside.intersects(&hull));
        assert!(straddling.intersects(&hull));

        let full_outside = ConvexHullFull::new(outside).unwrap();
        let full_straddling = ConvexHullFull::new(straddling).unwrap();
        assert!(!full_outside.intersects(&hull));
        assert!(full_straddling.intersects(&hull));
    }

    #[test]
    fn pyramid_against_hull_uses_vertices() {
        let hull = unit_cube_hull();
        let base = [
            point![3.0, 0.0, 0.0],
            point![3.0, 1.0, 0.0],
            point![3.0, 1.0, 1.0],
        ];
        let outside = Pyramid::new(point![2.0, 0.5, 0.5], &base);
        let apex_inside = Pyramid::new(point![0.5, 0.5, 0.5], &base);
        assert!(!outside.intersects(&hull));
        assert!(apex_inside.intersects(&hull));
        let cone = PyramidCone::new(apex_inside, Vector3::x_axis(), 2.5, 0.8);
        assert!(cone.intersects(&hull));
    }

    #[test]
    fn spherical_sector_pointing_away_from_plane_is_rejected() {
        let hull = ConvexHull::from_planes([Plane::new(Vector3::x_axis(), -1.0)]);
        let away = SphericalSector::new(Point3::origin(), -Vector3::x_axis(), 5.0, Degrees(30.0));
        let towards = SphericalSector::new(Point3::origin(), Vector3::x_axis(), 5.0, Degrees(30.0));
        let sideways_narrow =
            SphericalSector::new(Point3::origin(), Vector3::y_axis(), 5.0, Degrees(10.0));
        let sideways_wide =
            SphericalSector::new(Point3::origin(), Vector3::y_axis(), 5.0, Degrees(45.0));
        assert!(!away.intersects(&hull));
        assert!(towards.intersects(&hull));
        // Max reach along x is 5 sin(10°) < 1
        assert!(!sideways_narrow.intersects(&hull));
        assert!(sideways_wide.intersects(&hull));
    }

    #[test]
    fn object_bounds_use_box_after_sphere() {
        let hull = ConvexHull::from_planes([Plane::new(Vector3::x_axis(), 0.0)]);
        let oriented_box = OrientedBox::new(
            point![-1.2, 0.0, 0.0],
            UnitQuaternion::identity(),
            1.0,
            1.0,
            1.0,
        );
        let object = ObjectBounds::from_oriented_box(oriented_box);
        // The sphere through the corners reaches the plane, the box does not
        assert!(object.sphere().intersects(&hull));
        assert!(!object.intersects(&hull));
        assert!(ObjectBounds::from_sphere(*object.sphere()).intersects(&hull));
    }

    #[test]
    fn object_bounds_query_against_sphere_refines_with_box() {
        let light_sphere = Sphere::new(Point3::origin(), 3.0);
        let inside_box = OrientedBox::new(point![0.5, 0.0, 0.0], UnitQuaternion::identity(), 1.0, 1.0, 1.0);
        let object = ObjectBounds::new(Sphere::new(point![0.5, 0.0, 0.0], 3.0), inside_box);
        assert_eq!(
            object.query_intersection(&light_sphere),
            BoundsCheckResult::Inside
        );
        let far_object = ObjectBounds::from_sphere(Sphere::new(point![10.0, 0.0, 0.0], 1.0));
        assert!(!far_object.intersects(&light_sphere));
        assert_eq!(
            far_object.query_intersection(&light_sphere),
            BoundsCheckResult::Outside
        );
    }
}
