//! Benchmark Harness
//!
//! Shared plumbing for the benchmark driver: the warmup-then-measure timing
//! loop with its report format, and the ASCII slice printer used to sanity
//! check cull output by eye.

pub mod measure;
pub mod print;

pub use measure::{MeasureOpts, MeasureStats, measure, run_timed};
pub use print::{format_result_slice, print_result_slice};
