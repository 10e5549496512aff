//! Culling Kernels
//!
//! The two sphere-vs-frustum kernels and the packed bit buffer they write
//! into. Both kernels share one contract: bit `i` of the result buffer is
//! OR'd to 1 when sphere `i` is entirely outside the frustum, bits are never
//! cleared, and the two kernels agree bit for bit for identical input.
//!
//! [`CullKernel`] wraps the pair behind one dispatch point so callers pick a
//! kernel without caring about batch widths or tail handling.

pub mod bits;
pub mod scalar;
pub mod simd;

pub use bits::{BITS_PER_WORD, CullBits};
pub use scalar::{cull_scalar, cull_scalar_offset};
pub use simd::{BATCH_WIDTH, cull_simd};

use crate::math::{Frustum, Sphere};

/// Kernel selector for benchmark scenarios.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CullKernel {
    /// One sphere at a time, reference implementation.
    Scalar,
    /// Four spheres per iteration via [`wide::f32x4`], scalar tail.
    Simd,
}

impl CullKernel {
    /// Run the selected kernel over `spheres`, ORing results into `results`.
    pub fn run(self, results: &mut CullBits, spheres: &[Sphere], frustum: &Frustum) {
        match self {
            CullKernel::Scalar => cull_scalar(results, spheres, frustum),
            CullKernel::Simd => cull_simd(results, spheres, frustum),
        }
    }
}
