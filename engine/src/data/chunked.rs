//! Layout B — Chunked Sphere List
//!
//! Spheres are partitioned into fixed-capacity chunks, each owning its own
//! sphere buffer and its own result bits. The chunks themselves live in an
//! arena in creation order — that order *is* the logical identity of the
//! data — while a separate traversal list of chunk indices decides the order
//! cull passes walk the chunks in.
//!
//! Random data shuffles only the traversal list. Intra-chunk content never
//! moves, so gathering stays trivial: concatenate every chunk's bits in
//! creation order, ignoring traversal order entirely. Shuffled traversal is
//! purely a cache-behavior experiment — it fragments the access pattern the
//! way a real scene's allocation churn would.
//!
//! The prefetching cull variant hints the next chunk's sphere and result
//! memory before culling the current chunk, hiding part of the miss latency
//! the shuffled traversal produces.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::cull::{CullBits, cull_simd};
use crate::math::{Frustum, Sphere};

use super::DataKind;
use super::grid::SphereGrid;
use super::prefetch::prefetch_nta;

/// One fixed-capacity slice of the data set with its own result bits.
pub struct Chunk {
    spheres: Vec<Sphere>,
    results: CullBits,
}

impl Chunk {
    fn new(spheres: Vec<Sphere>) -> Self {
        let results = CullBits::new(spheres.len());
        Self { spheres, results }
    }

    /// Number of spheres in this chunk.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// True when the chunk holds no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Spheres in chunk-local order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Result bits, one per sphere, chunk-local indexing.
    pub fn results(&self) -> &CullBits {
        &self.results
    }
}

/// Chunk arena (creation order) plus the traversal order cull passes use.
pub struct ChunkedSet {
    chunks: Vec<Chunk>,
    traversal: Vec<u32>,
}

impl ChunkedSet {
    /// Generate the grid's spheres into chunks of at most `chunk_capacity`
    /// objects, filled in logical scan order.
    ///
    /// `Random` shuffles the traversal list; the arena keeps creation order
    /// either way. A trailing chunk that would hold zero objects is never
    /// created.
    pub fn generate(
        kind: DataKind,
        grid: SphereGrid,
        chunk_capacity: usize,
        rng: &mut impl Rng,
    ) -> Self {
        assert!(chunk_capacity > 0, "chunk capacity must be at least 1");

        let mut chunks = Vec::new();
        let mut current: Vec<Sphere> = Vec::with_capacity(chunk_capacity);
        for sphere in grid.spheres() {
            current.push(sphere);
            if current.len() == chunk_capacity {
                let full = std::mem::replace(&mut current, Vec::with_capacity(chunk_capacity));
                chunks.push(Chunk::new(full));
            }
        }
        if !current.is_empty() {
            chunks.push(Chunk::new(current));
        }

        let mut traversal: Vec<u32> = (0..chunks.len() as u32).collect();
        if kind == DataKind::Random {
            traversal.shuffle(rng);
        }

        Self { chunks, traversal }
    }

    /// Total number of spheres across all chunks.
    pub fn len(&self) -> usize {
        self.chunks.iter().map(Chunk::len).sum()
    }

    /// True when the set holds no spheres.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Chunks in creation order.
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// Chunk indices in the order cull passes visit them.
    pub fn traversal_order(&self) -> &[u32] {
        &self.traversal
    }

    /// SIMD-cull every chunk, visiting chunks in traversal order.
    pub fn cull(&mut self, frustum: &Frustum) {
        for &index in &self.traversal {
            let chunk = &mut self.chunks[index as usize];
            cull_simd(&mut chunk.results, &chunk.spheres, frustum);
        }
    }

    /// Like [`cull`](Self::cull), but hints the next chunk's sphere and
    /// result memory into cache before culling the current chunk. Output
    /// bits are identical to the plain path.
    pub fn cull_with_prefetch(&mut self, frustum: &Frustum) {
        let n = self.traversal.len();
        for i in 0..n {
            if i != n - 1 {
                let next = &self.chunks[self.traversal[i + 1] as usize];
                prefetch_nta(next.spheres.as_ptr());
                prefetch_nta(next.results.words().as_ptr());
            }
            let chunk = &mut self.chunks[self.traversal[i] as usize];
            cull_simd(&mut chunk.results, &chunk.spheres, frustum);
        }
    }

    /// Zero every chunk's result bits.
    pub fn zero_results(&mut self) {
        for chunk in &mut self.chunks {
            chunk.results.clear();
        }
    }

    /// Concatenate per-chunk bits in creation order into one canonical
    /// logical-order sequence. Traversal order never matters here: chunk
    /// identity is fixed at generation time.
    pub fn gather_results(&self) -> CullBits {
        let mut out = CullBits::new(self.len());
        let mut out_index = 0;
        for chunk in &self.chunks {
            for i in 0..chunk.len() {
                if chunk.results.get(i) {
                    out.set(out_index);
                }
                out_index += 1;
            }
        }
        out
    }
}

// ============================================================================
// Tests
// ============================================================================
