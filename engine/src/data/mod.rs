//! Data Generation & Memory Layouts
//!
//! Builds the benchmark's sphere population — a dense cubic grid of unit
//! spheres around the origin — and arranges it in memory two ways:
//!
//! - [`FlatSet`]: one contiguous sphere array plus one shared result bit
//!   buffer (layout A)
//! - [`ChunkedSet`]: fixed-capacity chunks, each with its own spheres and
//!   result bits, walked in a separate traversal order (layout B)
//!
//! Both layouts come in a `Structured` flavor (memory order matches logical
//! scan order) and a `Random` flavor (same objects, deliberately scattered)
//! so cull passes can be timed under friendly and hostile access patterns
//! over identical workloads.

pub mod chunked;
pub mod flat;
pub mod grid;
pub mod prefetch;

pub use chunked::{Chunk, ChunkedSet};
pub use flat::FlatSet;
pub use grid::{SphereGrid, offset_3d};
pub use prefetch::prefetch_nta;

/// How a data set arranges its objects in memory relative to logical order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DataKind {
    /// Memory order equals logical scan order.
    Structured,
    /// Same objects, shuffled placement (flat) or shuffled traversal
    /// (chunked).
    Random,
}
