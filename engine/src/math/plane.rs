//! Plane Primitive
//!
//! An infinite oriented plane stored as `(normal, d)` satisfying
//! `dot(normal, p) + d == 0` for every point `p` on the plane. The signed
//! distance is positive on the side the normal faces, which by convention
//! here is the *inside* of any volume the plane bounds.

use glam::Vec3;

/// Oriented plane: `dot(normal, p) + d == 0` on the plane surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Plane {
    /// Unit-length plane normal, facing the positive half-space.
    pub normal: Vec3,
    /// Offset term, `d = -dot(normal, any point on the plane)`.
    pub d: f32,
}

impl Plane {
    /// Plane through `origin` with the given unit `normal`.
    pub fn new(origin: Vec3, normal: Vec3) -> Self {
        Self {
            normal,
            d: -normal.dot(origin),
        }
    }

    /// Plane through three points with counter-clockwise winding.
    ///
    /// The normal is `normalize(cross(v2 - v1, v3 - v1))`: it faces the
    /// viewer for whom `v1, v2, v3` appear counter-clockwise.
    pub fn from_points(v1: Vec3, v2: Vec3, v3: Vec3) -> Self {
        let normal = (v2 - v1).cross(v3 - v1).normalize();
        Self {
            normal,
            d: -normal.dot(v1),
        }
    }

    /// Signed distance from `point` to the plane, positive on the normal side.
    #[inline]
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.d
    }
}
