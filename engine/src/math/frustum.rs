//! View Frustum
//!
//! A perspective view frustum for a camera sitting at the origin and looking
//! down -Z. The frustum is built from 8 corner points (4 on the near plane,
//! 4 on the far plane) and stores 6 planes whose normals all face *inward*,
//! so a point inside the frustum has a positive signed distance to every
//! plane.
//!
//! ## Plane order
//!
//! Planes are stored far, near, left, right, bottom, top. The SIMD kernel
//! depends on this order: the first four planes fill one 4-wide register
//! group and the last two fill the second group (duplicated).

use glam::Vec3;

use super::plane::Plane;
use super::sphere::Sphere;

/// Index of the far plane in [`Frustum::planes`].
pub const PLANE_FAR: usize = 0;
/// Index of the near plane.
pub const PLANE_NEAR: usize = 1;
/// Index of the left plane.
pub const PLANE_LEFT: usize = 2;
/// Index of the right plane.
pub const PLANE_RIGHT: usize = 3;
/// Index of the bottom plane.
pub const PLANE_BOTTOM: usize = 4;
/// Index of the top plane.
pub const PLANE_TOP: usize = 5;
/// Number of frustum planes.
pub const PLANE_COUNT: usize = 6;

// Corner order within a near/far corner quad.
const TOP_LEFT: usize = 0;
const TOP_RIGHT: usize = 1;
const BOTTOM_LEFT: usize = 2;
const BOTTOM_RIGHT: usize = 3;

/// View frustum: 6 inward-facing planes plus the corner points they were
/// derived from. Never mutated after construction.
#[derive(Copy, Clone, Debug)]
pub struct Frustum {
    /// Bounding planes in far, near, left, right, bottom, top order.
    pub planes: [Plane; PLANE_COUNT],
    /// Near-plane corners: top-left, top-right, bottom-left, bottom-right.
    pub near_corners: [Vec3; 4],
    /// Far-plane corners, same order as `near_corners`.
    pub far_corners: [Vec3; 4],
}

impl Frustum {
    /// Build a perspective frustum from a vertical field of view (degrees),
    /// aspect ratio and near/far plane depths. Camera at the origin, looking
    /// down -Z, +Y up.
    pub fn perspective(fov_deg: f32, aspect: f32, znear: f32, zfar: f32) -> Self {
        Self::from_corners(
            cross_section_corners(fov_deg, aspect, -znear),
            cross_section_corners(fov_deg, aspect, -zfar),
        )
    }

    /// Build the 6 bounding planes from corner quads. The winding of each
    /// point triple is chosen so that every normal faces into the frustum.
    pub fn from_corners(near: [Vec3; 4], far: [Vec3; 4]) -> Self {
        let planes = [
            Plane::from_points(far[TOP_LEFT], far[BOTTOM_LEFT], far[BOTTOM_RIGHT]),
            Plane::from_points(near[TOP_LEFT], near[TOP_RIGHT], near[BOTTOM_RIGHT]),
            Plane::from_points(far[TOP_LEFT], near[TOP_LEFT], near[BOTTOM_LEFT]),
            Plane::from_points(near[TOP_RIGHT], far[TOP_RIGHT], far[BOTTOM_RIGHT]),
            Plane::from_points(near[BOTTOM_LEFT], near[BOTTOM_RIGHT], far[BOTTOM_RIGHT]),
            Plane::from_points(far[TOP_LEFT], far[TOP_RIGHT], near[TOP_RIGHT]),
        ];
        Self {
            planes,
            near_corners: near,
            far_corners: far,
        }
    }

    /// True when the sphere lies entirely outside at least one plane, i.e.
    /// the whole sphere is invisible and can be culled.
    ///
    /// The test is `dot(-normal, center) - d > radius` per plane, with a
    /// strict comparison: a sphere exactly touching a plane counts as
    /// visible.
    #[inline]
    pub fn culls_sphere(&self, s: &Sphere) -> bool {
        self.planes
            .iter()
            .any(|p| (-p.normal).dot(s.center) - p.d > s.radius)
    }
}

/// Corners of the frustum cross-section at depth `plane_z` (negative, since
/// the camera looks down -Z), in top-left, top-right, bottom-left,
/// bottom-right order.
fn cross_section_corners(fov_deg: f32, aspect: f32, plane_z: f32) -> [Vec3; 4] {
    let (w, h) = cross_section_extent(fov_deg, aspect, plane_z);
    let center = Vec3::new(0.0, 0.0, plane_z);
    let up = Vec3::Y * (h / 2.0);
    let right = Vec3::X * (w / 2.0);
    [
        center + up - right,
        center + up + right,
        center - up - right,
        center - up + right,
    ]
}

/// Width and height of the frustum cross-section at depth `plane_z`.
fn cross_section_extent(fov_deg: f32, aspect: f32, plane_z: f32) -> (f32, f32) {
    let h = 2.0 * (fov_deg.to_radians() / 2.0).tan() * plane_z.abs();
    (h * aspect, h)
}

// ============================================================================
// Tests
// ============================================================================
