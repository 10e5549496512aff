//! Bounding Sphere Primitive
//!
//! A sphere is a 16-byte unpadded POD record (three center floats plus a
//! radius float). Kept that way deliberately: four consecutive spheres span
//! exactly one 64-byte cache line, and the culling kernels rely on the
//! center/radius components sitting at fixed offsets within each record.

use glam::Vec3;

/// Bounding sphere: `center` plus `radius`. Invariant: `radius >= 0`.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Sphere {
    /// World-space center of the sphere.
    pub center: Vec3,
    /// Sphere radius in world units.
    pub radius: f32,
}

impl Sphere {
    /// Create a sphere from its center and radius.
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

// Sphere must stay exactly 4 floats: the SIMD kernel assumes 16-byte records.
static_assertions::assert_eq_size!(Sphere, [f32; 4]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_size() {
        assert_eq!(std::mem::size_of::<Sphere>(), 16);
    }

    #[test]
    fn test_four_spheres_per_cache_line() {
        // 4 spheres x 16 bytes = 64 bytes, one cache line
        assert_eq!(4 * std::mem::size_of::<Sphere>(), 64);
    }

    #[test]
    fn test_field_layout() {
        let s = Sphere::new(Vec3::new(1.0, 2.0, 3.0), 4.0);
        let floats: [f32; 4] = bytemuck::cast(s);
        assert_eq!(floats, [1.0, 2.0, 3.0, 4.0]);
    }
}
