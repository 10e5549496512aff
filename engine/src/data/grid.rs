//! Logical Sphere Grid
//!
//! The benchmark's workload is a cubic grid of unit spheres centered around
//! the origin. The grid defines a deterministic *logical* order for the
//! objects — `offset_3d` scan order — which stays the canonical identity of
//! each sphere no matter how a layout later scatters the data physically.
//!
//! A cell `(x, y, z)` produces a radius-1 sphere centered at
//! `((x, y, z) - size/2) * 2`, so neighboring spheres sit 2 units apart and
//! the whole grid straddles the camera at the origin.

use glam::IVec3;

use crate::math::Sphere;

/// Logical index of grid cell `(x, y, z)`: z-major, then y, then x.
#[inline]
pub fn offset_3d(x: usize, y: usize, z: usize, size: usize) -> usize {
    (z * size + y) * size + x
}

/// Cubic grid of evenly spaced unit spheres.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SphereGrid {
    /// Side length in cells; the grid holds `size^3` spheres.
    pub size: usize,
}

impl SphereGrid {
    /// Grid with the given side length.
    pub const fn new(size: usize) -> Self {
        Self { size }
    }

    /// Total number of spheres in the grid.
    pub fn volume(&self) -> usize {
        self.size * self.size * self.size
    }

    /// Bytes of sphere data the grid generates.
    pub fn sphere_bytes(&self) -> usize {
        self.volume() * std::mem::size_of::<Sphere>()
    }

    /// Sphere for cell `(x, y, z)`.
    #[inline]
    pub fn sphere_at(&self, x: usize, y: usize, z: usize) -> Sphere {
        let half = (self.size / 2) as i32;
        let p = (IVec3::new(x as i32, y as i32, z as i32) - IVec3::splat(half)) * 2;
        Sphere::new(p.as_vec3(), 1.0)
    }

    /// All spheres in logical scan order (`offset_3d` order).
    pub fn spheres(&self) -> impl Iterator<Item = Sphere> + '_ {
        let size = self.size;
        (0..size).flat_map(move |z| {
            (0..size).flat_map(move |y| (0..size).map(move |x| self.sphere_at(x, y, z)))
        })
    }
}
