//! Cullbench Engine Library
//!
//! Core of a frustum-vs-sphere visibility culling benchmark: the geometry
//! types, the scalar and SIMD cull kernels, the two memory layouts the
//! kernels run over, and the timing harness that reports on them.
//!
//! # Modules
//!
//! - [`math`] - Planes, spheres and the six-plane view frustum with its
//!   sphere test
//! - [`cull`] - Cull kernels (scalar reference and 4-wide SIMD) writing
//!   into a shared bit buffer
//! - [`data`] - Grid data generation and the flat / chunked memory layouts,
//!   each in structured and random flavors
//! - [`bench`] - Warmup-then-measure timing loop and the ASCII result
//!   slice printer
//!
//! # Example
//!
//! ```ignore
//! use cullbench_engine::cull::CullKernel;
//! use cullbench_engine::data::{DataKind, FlatSet, SphereGrid};
//! use cullbench_engine::math::Frustum;
//!
//! let frustum = Frustum::perspective(75.0, 1.333, 0.5, 100.0);
//! let grid = SphereGrid::new(80);
//!
//! let mut rng = rand::rng();
//! let mut set = FlatSet::generate(DataKind::Structured, grid, &mut rng);
//!
//! // Cull every sphere against the frustum with the SIMD kernel.
//! set.cull(CullKernel::Simd, &frustum);
//!
//! // Read results back in logical grid order.
//! let culled = set.gather_results();
//! println!("{} of {} spheres culled", culled.count_set(), set.len());
//! ```

pub mod bench;
pub mod cull;
pub mod data;
pub mod math;

// Re-export the core vocabulary types at crate level for convenience
pub use cull::{CullBits, CullKernel};
pub use data::{ChunkedSet, DataKind, FlatSet, SphereGrid};
pub use math::{Frustum, Plane, Sphere};
