//! SIMD Cull Kernel
//!
//! Culls spheres four at a time using 4-wide [`wide::f32x4`] arithmetic.
//!
//! ## Lane packing
//!
//! The 6 frustum planes are transposed into two lane-packed groups before
//! the loop. Each group holds one register per coefficient (nx, ny, nz, d),
//! with one plane per lane:
//!
//! - group 0 lanes: far, near, left, right
//! - group 1 lanes: bottom, top, bottom, top
//!
//! Only 6 planes exist, so group 1 pads its spare lanes by duplicating the
//! bottom/top planes. Re-testing a plane is idempotent under the OR
//! reduction, which is why padding never uses a sentinel value that could
//! flip a bit on its own.
//!
//! All coefficients are negated up front: the cull test per lane becomes
//! `dot(-normal, center) - d > radius`, which is the scalar predicate with
//! the radius left unnegated.
//!
//! ## Batching
//!
//! Each loop iteration evaluates 4 spheres (one cache line) and commits
//! their 4 result bits with a single OR into the output word. Batch starts
//! are 4-aligned, so the 4 bits never straddle a word boundary. A trailing
//! partial batch is handed to the scalar kernel at the right bit offsets,
//! so callers can pass any object count.

use wide::{CmpGt, f32x4};

use crate::math::{Frustum, Sphere};

use super::bits::{BITS_PER_WORD, CullBits};
use super::scalar::cull_scalar_offset;

/// Spheres evaluated per SIMD loop iteration.
pub const BATCH_WIDTH: usize = 4;

/// Four planes lane-packed into one register per coefficient, negated.
struct PlaneGroupX4 {
    nx: f32x4,
    ny: f32x4,
    nz: f32x4,
    d: f32x4,
}

/// The 6 frustum planes as two negated lane-packed groups.
struct PackedFrustum {
    groups: [PlaneGroupX4; 2],
}

impl PackedFrustum {
    fn new(frustum: &Frustum) -> Self {
        let pack = |a: usize, b: usize, c: usize, e: usize| {
            let p = &frustum.planes;
            PlaneGroupX4 {
                nx: f32x4::new([-p[a].normal.x, -p[b].normal.x, -p[c].normal.x, -p[e].normal.x]),
                ny: f32x4::new([-p[a].normal.y, -p[b].normal.y, -p[c].normal.y, -p[e].normal.y]),
                nz: f32x4::new([-p[a].normal.z, -p[b].normal.z, -p[c].normal.z, -p[e].normal.z]),
                d: f32x4::new([-p[a].d, -p[b].d, -p[c].d, -p[e].d]),
            }
        };
        Self {
            groups: [pack(0, 1, 2, 3), pack(4, 5, 4, 5)],
        }
    }

    /// True when any lane of either group judges the sphere outside.
    #[inline]
    fn sphere_outside(&self, sphere: &Sphere) -> bool {
        let cx = f32x4::splat(sphere.center.x);
        let cy = f32x4::splat(sphere.center.y);
        let cz = f32x4::splat(sphere.center.z);
        let radius = f32x4::splat(sphere.radius);

        // dot(-normal, center) - d per lane, three multiply-adds deep.
        let g = &self.groups[0];
        let mut v = cx.mul_add(g.nx, g.d);
        v = cy.mul_add(g.ny, v);
        v = cz.mul_add(g.nz, v);
        let mut outside = v.cmp_gt(radius);

        let g = &self.groups[1];
        let mut v = cx.mul_add(g.nx, g.d);
        v = cy.mul_add(g.ny, v);
        v = cz.mul_add(g.nz, v);
        outside = outside | v.cmp_gt(radius);

        // Horizontal OR across lanes: any plane culling the sphere culls it.
        outside.any()
    }
}

/// Cull `spheres` against `frustum` four at a time, ORing bit `i` for
/// sphere `i`. Bit-for-bit equivalent to [`cull_scalar`], including for
/// object counts that are not a multiple of [`BATCH_WIDTH`] (the remainder
/// runs through the scalar kernel).
///
/// `results` must hold at least `spheres.len()` bits and should be zeroed
/// for a clean pass; existing bits are never cleared.
///
/// [`cull_scalar`]: super::scalar::cull_scalar
pub fn cull_simd(results: &mut CullBits, spheres: &[Sphere], frustum: &Frustum) {
    assert!(
        results.len() >= spheres.len(),
        "result buffer holds {} bits, need {}",
        results.len(),
        spheres.len()
    );

    let packed = PackedFrustum::new(frustum);

    let batches = spheres.chunks_exact(BATCH_WIDTH);
    let tail = batches.remainder();

    for (batch_index, batch) in batches.enumerate() {
        let mut batch_bits = 0u32;
        for (lane, sphere) in batch.iter().enumerate() {
            if packed.sphere_outside(sphere) {
                batch_bits |= 1 << lane;
            }
        }
        let first_bit = batch_index * BATCH_WIDTH;
        results.or_word(first_bit / BITS_PER_WORD, batch_bits << (first_bit % BITS_PER_WORD));
    }

    if !tail.is_empty() {
        cull_scalar_offset(results, tail, frustum, spheres.len() - tail.len());
    }
}

// ============================================================================
// Tests
// ============================================================================
