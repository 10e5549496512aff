//! Frustum-culling benchmark driver.
//!
//! Run with: cargo run --release --bin cullbench
//!
//! Usage:
//!   cullbench                  Run the default 80x80x80 grid
//!   cullbench -s 40            Smaller grid (faster, noisier)
//!   cullbench -v               Verbose: per-run timings + result slices
//!   cullbench --seed 42        Reproduce a specific shuffle
//!   cullbench --pin-core 2     Pin the benchmark thread to one core
//!
//! Two suites run back to back: the flat-array suite (naive vs SIMD kernel,
//! structured vs random placement) and the chunked suite (SIMD kernel over
//! fixed-capacity chunks at several capacities, with and without software
//! prefetch).

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use cullbench_engine::bench::{MeasureOpts, measure, print_result_slice};
use cullbench_engine::cull::CullKernel;
use cullbench_engine::data::{ChunkedSet, DataKind, FlatSet, SphereGrid};
use cullbench_engine::math::Frustum;

/// Chunk capacities the chunked suite sweeps, largest first.
const CHUNK_CAPACITIES: [usize; 6] = [512, 256, 128, 64, 32, 8];

#[derive(Parser)]
#[command(name = "cullbench")]
#[command(about = "Benchmark scalar vs SIMD frustum culling over flat and chunked layouts")]
struct Args {
    /// Verbose output: per-run timings and an ASCII slice of each result
    #[arg(short, long)]
    verbose: bool,

    /// Grid side length; the workload is size^3 unit spheres
    #[arg(short = 's', long = "size", default_value_t = 80)]
    size: usize,

    /// Shuffle seed; drawn from OS entropy (and printed) when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Untimed warmup runs before each measurement
    #[arg(long, default_value_t = 50)]
    warmup: u32,

    /// Timed runs per measurement
    #[arg(long, default_value_t = 10)]
    runs: u32,

    /// Pin the benchmark thread to this core index
    #[arg(long)]
    pin_core: Option<usize>,
}

fn main() {
    let args = Args::parse();

    if let Some(index) = args.pin_core
        && let Some(core_ids) = core_affinity::get_core_ids()
    {
        match core_ids.get(index) {
            Some(&core_id) => {
                let _ = core_affinity::set_for_current(core_id);
            }
            None => eprintln!(
                "core index {index} out of range ({} cores), not pinning",
                core_ids.len()
            ),
        }
    }

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    println!("Shuffle seed: {seed}");

    let grid = SphereGrid::new(args.size);
    println!(
        "Data size: {0}x{0}x{0} ({1} objects, {2} bytes)",
        args.size,
        grid.volume(),
        grid.sphere_bytes()
    );

    let opts = MeasureOpts {
        warmup: args.warmup,
        runs: args.runs,
        verbose: args.verbose,
    };
    let frustum = Frustum::perspective(75.0, 1.333, 0.5, 100.0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    do_arrays(grid, &frustum, opts, &mut rng);
    do_chunks(grid, &frustum, opts, &mut rng);
}

/// Flat-array suite: both kernels over structured and random placement.
fn do_arrays(grid: SphereGrid, frustum: &Frustum, opts: MeasureOpts, rng: &mut impl Rng) {
    let scenarios = [
        (CullKernel::Scalar, DataKind::Structured, "Naive culling / structured data"),
        (CullKernel::Scalar, DataKind::Random, "Naive culling / random data"),
        (CullKernel::Simd, DataKind::Structured, "SIMD culling / structured data"),
        (CullKernel::Simd, DataKind::Random, "SIMD culling / random data"),
    ];
    for (kernel, kind, label) in scenarios {
        let mut set = FlatSet::generate(kind, grid, rng);
        measure(label, opts, || set.cull(kernel, frustum));
        if opts.verbose {
            print_result_slice(&set.gather_results(), grid.size);
        }
    }
}

/// Chunked suite: SIMD kernel over each chunk capacity, structured and
/// random traversal, prefetch on and off.
fn do_chunks(grid: SphereGrid, frustum: &Frustum, opts: MeasureOpts, rng: &mut impl Rng) {
    for capacity in CHUNK_CAPACITIES {
        println!("{}", "-".repeat(40));

        let mut set = ChunkedSet::generate(DataKind::Structured, grid, capacity, rng);
        let label =
            format!("SIMD culling / chunks / structured data / {capacity:>3} per chunk (w/o  prefetch)");
        measure(&label, opts, || set.cull(frustum));
        if opts.verbose {
            print_result_slice(&set.gather_results(), grid.size);
        }

        let mut set = ChunkedSet::generate(DataKind::Random, grid, capacity, rng);
        let label =
            format!("SIMD culling / chunks / random data     / {capacity:>3} per chunk (w/o  prefetch)");
        measure(&label, opts, || set.cull(frustum));
        if opts.verbose {
            print_result_slice(&set.gather_results(), grid.size);
        }

        let mut set = ChunkedSet::generate(DataKind::Random, grid, capacity, rng);
        let label =
            format!("SIMD culling / chunks / random data     / {capacity:>3} per chunk (with prefetch)");
        measure(&label, opts, || set.cull_with_prefetch(frustum));
        if opts.verbose {
            print_result_slice(&set.gather_results(), grid.size);
        }
    }
}
