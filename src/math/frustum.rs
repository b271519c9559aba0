//! View-frustum tests for culling
//!
//! Two mechanisms, one per geometry scale. Single voxel cubes use the
//! clip-space corner test ([`cube_in_frustum`]): project all 8 corners and
//! keep the cube if any lands inside the canonical view volume. Larger
//! boxes (chunk bounds) use a 6-plane [`Frustum`], because a pure corner
//! test can reject a box that straddles the volume with every corner
//! outside.

use crate::core::types::{Mat4, Vec3, Vec4};
use crate::math::aabb::Aabb;

/// Test whether the unit cube centered at `center` is at least partially
/// inside the view volume of `view_proj`.
///
/// Conservative: a cube with any corner inside `[-1, 1]^3` after
/// perspective division is kept, which can admit false positives at cube
/// edges but never drops a cube with a visible corner. Projections with a
/// `[0, 1]` depth range pass a strictly smaller volume, so the test stays
/// conservative for those as well.
pub fn cube_in_frustum(center: Vec3, view_proj: &Mat4) -> bool {
    for corner in Aabb::unit_cube(center).corners() {
        let clip = *view_proj * corner.extend(1.0);
        if clip.w == 0.0 {
            continue;
        }
        let ndc = clip / clip.w;

        if ndc.x >= -1.0
            && ndc.x <= 1.0
            && ndc.y >= -1.0
            && ndc.y <= 1.0
            && ndc.z >= -1.0
            && ndc.z <= 1.0
        {
            return true;
        }
    }

    false
}

/// A plane defined by normal and distance from origin
#[derive(Clone, Copy, Debug)]
pub struct Plane {
    pub normal: Vec3,
    pub distance: f32,
}

impl Plane {
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Signed distance from point to plane (positive = in front)
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum with 6 planes (near, far, left, right, top, bottom)
#[derive(Clone, Copy, Debug)]
pub struct Frustum {
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix
    /// (Gribb/Hartmann method)
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        let row = |i: usize| Vec4::new(m[0][i], m[1][i], m[2][i], m[3][i]);
        let w = row(3);

        let near = Self::normalize_plane(w + row(2));
        let far = Self::normalize_plane(w - row(2));
        let left = Self::normalize_plane(w + row(0));
        let right = Self::normalize_plane(w - row(0));
        let top = Self::normalize_plane(w - row(1));
        let bottom = Self::normalize_plane(w + row(1));

        Self {
            planes: [near, far, left, right, top, bottom],
        }
    }

    fn normalize_plane(plane: Vec4) -> Plane {
        let normal = plane.truncate();
        let len = normal.length();
        Plane {
            normal: normal / len,
            distance: plane.w / len,
        }
    }

    /// Check if point is inside frustum
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Check if AABB intersects frustum (conservative test)
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        for plane in &self.planes {
            // p-vertex: the corner most aligned with the plane normal
            let p = Vec3::new(
                if plane.normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
                if plane.normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
                if plane.normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
            );

            if plane.distance_to_point(p) < 0.0 {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::camera::Camera;

    #[test]
    fn test_plane_distance() {
        let plane = Plane::new(Vec3::Y, 0.0); // XZ plane
        assert_eq!(plane.distance_to_point(Vec3::new(0.0, 5.0, 0.0)), 5.0);
        assert_eq!(plane.distance_to_point(Vec3::new(0.0, -3.0, 0.0)), -3.0);
    }

    #[test]
    fn test_cube_in_front_is_kept() {
        let camera = Camera::new(Vec3::ZERO, 60.0, 4.0 / 3.0);
        let vp = camera.view_projection();
        assert!(cube_in_frustum(Vec3::new(0.0, 0.0, -10.0), &vp));
    }

    #[test]
    fn test_cube_beyond_far_plane_is_rejected() {
        // 60 degree fov, near/far [0.1, 100]: a cube 1000 units down the
        // view axis must be culled no matter which way the camera faces.
        let camera = Camera::new(Vec3::ZERO, 60.0, 4.0 / 3.0);
        let vp = camera.view_projection();
        assert!(!cube_in_frustum(Vec3::new(0.0, 0.0, -1000.0), &vp));

        let turned = Camera::look_at(Vec3::ZERO, Vec3::new(0.0, 0.0, 1000.0), Vec3::Y);
        let vp = turned.view_projection();
        assert!(!cube_in_frustum(Vec3::new(0.0, 0.0, 1000.0), &vp));
    }

    #[test]
    fn test_cube_behind_camera_is_rejected() {
        let camera = Camera::new(Vec3::ZERO, 60.0, 4.0 / 3.0);
        let vp = camera.view_projection();
        assert!(!cube_in_frustum(Vec3::new(0.0, 0.0, 1000.0), &vp));
    }

    #[test]
    fn test_cube_far_off_axis_is_rejected() {
        let camera = Camera::new(Vec3::ZERO, 60.0, 4.0 / 3.0);
        let vp = camera.view_projection();
        assert!(!cube_in_frustum(Vec3::new(500.0, 0.0, -10.0), &vp));
    }

    #[test]
    fn test_frustum_contains_point() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 5.0), 60.0, 4.0 / 3.0);
        let frustum = Frustum::from_view_projection(&camera.view_projection());

        assert!(frustum.contains_point(Vec3::ZERO));
        assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 500.0)));
    }

    #[test]
    fn test_frustum_intersects_straddling_aabb() {
        let camera = Camera::new(Vec3::ZERO, 60.0, 4.0 / 3.0);
        let frustum = Frustum::from_view_projection(&camera.view_projection());

        // A box much wider than the frustum: every corner is outside, but
        // the box itself crosses the view volume.
        let wide = Aabb::new(Vec3::new(-1000.0, -1000.0, -60.0), Vec3::new(1000.0, 1000.0, -40.0));
        assert!(frustum.intersects_aabb(&wide));

        let behind = Aabb::new(Vec3::new(-1.0, -1.0, 10.0), Vec3::new(1.0, 1.0, 12.0));
        assert!(!frustum.intersects_aabb(&behind));
    }
}
