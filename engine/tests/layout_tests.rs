//! Layout Tests - Gather Invariants Across Placements
//!
//! Integration tests for the two memory layouts: gathered results must
//! depend only on object identity, never on physical placement, chunk
//! traversal order, or the prefetch path.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cullbench_engine::cull::CullKernel;
use cullbench_engine::data::{ChunkedSet, DataKind, FlatSet, SphereGrid};
use cullbench_engine::math::Frustum;

fn bench_frustum() -> Frustum {
    Frustum::perspective(75.0, 1.333, 0.5, 100.0)
}

// ============================================================================
// Layout A - Permutation Round-Trip
// ============================================================================

#[test]
fn test_flat_gather_is_placement_independent() {
    let frustum = bench_frustum();
    let grid = SphereGrid::new(6);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let mut structured = FlatSet::generate(DataKind::Structured, grid, &mut rng);
    let mut random = FlatSet::generate(DataKind::Random, grid, &mut rng);
    structured.cull(CullKernel::Simd, &frustum);
    random.cull(CullKernel::Simd, &frustum);

    // Same objects, same frustum: identical logical-order results no matter
    // how physical storage was scattered.
    assert_eq!(structured.gather_results(), random.gather_results());
}

#[test]
fn test_flat_gather_independent_of_shuffle_seed() {
    let frustum = bench_frustum();
    let grid = SphereGrid::new(5);
    let mut gathered = Vec::new();
    for seed in [1, 2, 3] {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut set = FlatSet::generate(DataKind::Random, grid, &mut rng);
        set.cull(CullKernel::Simd, &frustum);
        gathered.push(set.gather_results());
    }
    assert_eq!(gathered[0], gathered[1]);
    assert_eq!(gathered[1], gathered[2]);
}

#[test]
fn test_flat_kernels_agree_through_gather() {
    let frustum = bench_frustum();
    let grid = SphereGrid::new(5);
    let mut rng = ChaCha8Rng::seed_from_u64(13);

    let mut scalar_set = FlatSet::generate(DataKind::Random, grid, &mut rng);
    let mut simd_set = FlatSet::generate(DataKind::Random, grid, &mut rng);
    scalar_set.cull(CullKernel::Scalar, &frustum);
    simd_set.cull(CullKernel::Simd, &frustum);
    assert_eq!(scalar_set.gather_results(), simd_set.gather_results());
}

// ============================================================================
// Layout B - Chunk Concatenation Invariant
// ============================================================================

#[test]
fn test_chunked_gather_is_traversal_independent() {
    let frustum = bench_frustum();
    let grid = SphereGrid::new(6);
    let mut rng = ChaCha8Rng::seed_from_u64(17);

    let mut structured = ChunkedSet::generate(DataKind::Structured, grid, 32, &mut rng);
    let mut shuffled = ChunkedSet::generate(DataKind::Random, grid, 32, &mut rng);
    structured.cull(&frustum);
    shuffled.cull(&frustum);

    assert_eq!(structured.gather_results(), shuffled.gather_results());
}

#[test]
fn test_chunked_matches_flat_for_same_grid() {
    // Both layouts hold the same logical objects, so their gathered results
    // must be bit-identical.
    let frustum = bench_frustum();
    let grid = SphereGrid::new(6);
    let mut rng = ChaCha8Rng::seed_from_u64(19);

    let mut flat = FlatSet::generate(DataKind::Random, grid, &mut rng);
    let mut chunked = ChunkedSet::generate(DataKind::Random, grid, 8, &mut rng);
    flat.cull(CullKernel::Simd, &frustum);
    chunked.cull(&frustum);

    assert_eq!(flat.gather_results(), chunked.gather_results());
}

#[test]
fn test_chunk_capacity_does_not_change_results() {
    let frustum = bench_frustum();
    let grid = SphereGrid::new(6);
    let mut gathered = Vec::new();
    for capacity in [512, 256, 128, 64, 32, 8, 3, 1] {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        let mut set = ChunkedSet::generate(DataKind::Random, grid, capacity, &mut rng);
        set.cull(&frustum);
        gathered.push(set.gather_results());
    }
    for pair in gathered.windows(2) {
        assert_eq!(pair[0], pair[1]);
    }
}

// ============================================================================
// Prefetch Neutrality
// ============================================================================

#[test]
fn test_prefetch_never_changes_output() {
    let frustum = bench_frustum();
    let grid = SphereGrid::new(6);
    for capacity in [512, 64, 8] {
        let mut rng = ChaCha8Rng::seed_from_u64(29);
        let mut plain = ChunkedSet::generate(DataKind::Random, grid, capacity, &mut rng);
        let mut rng = ChaCha8Rng::seed_from_u64(29);
        let mut prefetched = ChunkedSet::generate(DataKind::Random, grid, capacity, &mut rng);

        plain.cull(&frustum);
        prefetched.cull_with_prefetch(&frustum);
        assert_eq!(
            plain.gather_results(),
            prefetched.gather_results(),
            "capacity {capacity}"
        );
    }
}

#[test]
fn test_prefetch_on_single_chunk_set() {
    // One chunk means there is never a "next chunk" to prefetch; the loop
    // must still cull it.
    let frustum = bench_frustum();
    let grid = SphereGrid::new(3);
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let mut set = ChunkedSet::generate(DataKind::Structured, grid, 1024, &mut rng);
    assert_eq!(set.chunks().len(), 1);
    set.cull_with_prefetch(&frustum);
    assert!(set.gather_results().count_set() > 0);
}

// ============================================================================
// Clean-Pass Discipline
// ============================================================================

#[test]
fn test_zero_results_gives_clean_second_scenario() {
    let frustum = bench_frustum();
    let grid = SphereGrid::new(4);
    let mut rng = ChaCha8Rng::seed_from_u64(37);
    let mut set = FlatSet::generate(DataKind::Structured, grid, &mut rng);

    set.cull(CullKernel::Simd, &frustum);
    let first = set.gather_results();

    // A second pass against a much tighter frustum would cull more spheres;
    // without zeroing, the old bits would shadow the new verdicts.
    let tight = Frustum::perspective(10.0, 1.0, 0.5, 20.0);
    set.zero_results();
    set.cull(CullKernel::Simd, &tight);
    let second = set.gather_results();

    assert!(second.count_set() > first.count_set());
}
