//! Wall-Clock Measurement Harness
//!
//! Times a closure over a fixed number of runs after a warmup phase and
//! reports the arithmetic mean in milliseconds. Warmup runs are executed
//! but never timed; they exist to populate caches, settle the branch
//! predictor and get the CPU out of low-power states before the clock
//! starts.
//!
//! The harness never resets state between runs — a pass that dirties its
//! buffers keeps them dirty for the next run. Cull passes only ever OR
//! bits in, so repeated runs converge on the same bit pattern and the
//! measured work stays comparable.

use std::time::Instant;

/// Knobs for a measurement: how many untimed warmup runs, how many timed
/// runs, and whether to dump per-run timings after the summary line.
#[derive(Copy, Clone, Debug)]
pub struct MeasureOpts {
    pub warmup: u32,
    pub runs: u32,
    pub verbose: bool,
}

impl Default for MeasureOpts {
    fn default() -> Self {
        Self {
            warmup: 50,
            runs: 10,
            verbose: false,
        }
    }
}

/// Per-run timings from one measurement.
#[derive(Clone, Debug)]
pub struct MeasureStats {
    run_ms: Vec<f64>,
}

impl MeasureStats {
    /// Individual run durations in milliseconds, in run order.
    pub fn run_ms(&self) -> &[f64] {
        &self.run_ms
    }

    /// Arithmetic mean over all runs, in milliseconds.
    pub fn average_ms(&self) -> f64 {
        if self.run_ms.is_empty() {
            return 0.0;
        }
        self.run_ms.iter().sum::<f64>() / self.run_ms.len() as f64
    }
}

/// Run `work` through warmup and timed phases, returning per-run timings
/// without printing anything.
pub fn run_timed(opts: MeasureOpts, mut work: impl FnMut()) -> MeasureStats {
    for _ in 0..opts.warmup {
        work();
    }
    let mut run_ms = Vec::with_capacity(opts.runs as usize);
    for _ in 0..opts.runs {
        let start = Instant::now();
        work();
        run_ms.push(start.elapsed().as_secs_f64() * 1000.0);
    }
    MeasureStats { run_ms }
}

/// Measure `work` and print the standard report line:
///
/// ```text
/// '<label>' done in <runs> runs, average: <avg>ms
/// ```
///
/// With `opts.verbose` set, per-run timings follow.
pub fn measure(label: &str, opts: MeasureOpts, work: impl FnMut()) -> MeasureStats {
    let stats = run_timed(opts, work);
    println!(
        "'{label}' done in {} runs, average: {:.6}ms",
        opts.runs,
        stats.average_ms()
    );
    if opts.verbose {
        println!("per-run info:");
        for (i, ms) in stats.run_ms().iter().enumerate() {
            println!(" [{i}] {ms:.6}ms");
        }
    }
    stats
}

// ============================================================================
// Tests
// ============================================================================
