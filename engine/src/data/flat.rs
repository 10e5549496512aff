//! Layout A — Flat Array with Permutation Map
//!
//! All spheres live in one contiguous buffer with one shared result buffer.
//! A permutation map records, for every logical grid index, which physical
//! slot stores that object. Structured data uses the identity map; random
//! data shuffles the map and physically relocates the spheres, so kernels
//! walk the same contiguous memory while object placement no longer matches
//! spatial order.
//!
//! The map is what keeps verification layout-independent: gathering reads
//! the physical bit at `mapping[i]` back into logical position `i`, so a
//! structured and a random set produce identical gathered results.

use glam::Vec3;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::cull::{CullBits, CullKernel};
use crate::math::{Frustum, Sphere};

use super::DataKind;
use super::grid::SphereGrid;

/// Contiguous sphere storage plus the logical-to-physical permutation.
pub struct FlatSet {
    spheres: Vec<Sphere>,
    results: CullBits,
    /// `mapping[logical grid index] == physical slot`.
    mapping: Vec<u32>,
}

impl FlatSet {
    /// Generate the grid's spheres in one buffer.
    ///
    /// `Structured` keeps logical scan order and an identity map. `Random`
    /// draws a uniform permutation from `rng`, relocates every sphere to its
    /// permuted slot and keeps the map for gathering.
    pub fn generate(kind: DataKind, grid: SphereGrid, rng: &mut impl Rng) -> Self {
        let spheres: Vec<Sphere> = grid.spheres().collect();
        let n = spheres.len();
        let mut mapping: Vec<u32> = (0..n as u32).collect();

        let spheres = match kind {
            DataKind::Structured => spheres,
            DataKind::Random => {
                mapping.shuffle(rng);
                let mut relocated = vec![Sphere::new(Vec3::ZERO, 0.0); n];
                for (i, sphere) in spheres.into_iter().enumerate() {
                    relocated[mapping[i] as usize] = sphere;
                }
                relocated
            }
        };

        Self {
            spheres,
            results: CullBits::new(n),
            mapping,
        }
    }

    /// Number of spheres in the set.
    pub fn len(&self) -> usize {
        self.spheres.len()
    }

    /// True when the set holds no spheres.
    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }

    /// Spheres in physical storage order.
    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    /// Result bits in physical storage order.
    pub fn results(&self) -> &CullBits {
        &self.results
    }

    /// Logical-to-physical permutation map.
    pub fn mapping(&self) -> &[u32] {
        &self.mapping
    }

    /// Run a cull kernel over the whole set, ORing into the result bits.
    pub fn cull(&mut self, kernel: CullKernel, frustum: &Frustum) {
        kernel.run(&mut self.results, &self.spheres, frustum);
    }

    /// Zero the result bits so the next pass is a clean one.
    pub fn zero_results(&mut self) {
        self.results.clear();
    }

    /// Translate physical result bits back into logical grid order: output
    /// bit `i` is the physical bit at `mapping[i]`.
    pub fn gather_results(&self) -> CullBits {
        let mut out = CullBits::new(self.spheres.len());
        for (i, &slot) in self.mapping.iter().enumerate() {
            if self.results.get(slot as usize) {
                out.set(i);
            }
        }
        out
    }
}
