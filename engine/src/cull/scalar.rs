//! Scalar Cull Kernel
//!
//! The straightforward per-object kernel: evaluate the sphere-vs-frustum
//! predicate one sphere at a time and OR the verdict into the result bits.
//! Serves as the reference the SIMD kernel must agree with bit for bit, and
//! as the tail loop for object counts that are not a multiple of the SIMD
//! batch width.

use crate::math::{Frustum, Sphere};

use super::bits::CullBits;

/// Cull `spheres` against `frustum`, ORing bit `i` for sphere `i`.
///
/// `results` must hold at least `spheres.len()` bits and should be zeroed
/// for a clean pass; existing bits are never cleared.
pub fn cull_scalar(results: &mut CullBits, spheres: &[Sphere], frustum: &Frustum) {
    cull_scalar_offset(results, spheres, frustum, 0);
}

/// Same as [`cull_scalar`] but writing bits starting at `first_bit`, so a
/// caller can cull a sub-range of a larger object sequence in place.
pub fn cull_scalar_offset(
    results: &mut CullBits,
    spheres: &[Sphere],
    frustum: &Frustum,
    first_bit: usize,
) {
    for (i, sphere) in spheres.iter().enumerate() {
        if frustum.culls_sphere(sphere) {
            results.set(first_bit + i);
        }
    }
}
