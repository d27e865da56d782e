//! Job descriptors and results.

use crate::color::ColorGrid;
use crate::options::GenerationOptions;

/// One accepted unit of work: a validated set of options, the resolved
/// input grid, and the seed assigned at build time.
///
/// Immutable once built. The trial scheduler consumes a descriptor and
/// produces a fresh [`JobResult`]; it never mutates the descriptor.
#[derive(Debug, Clone)]
pub struct JobDescriptor {
    pub name: String,
    pub options: GenerationOptions,
    pub input: ColorGrid,
    pub seed: u32,
}

/// The outcome of running one job through the bounded trial loop.
///
/// `output` is `None` when every attempt failed to converge; that is a
/// normal per-job outcome, not an error. Both timings are running totals
/// across all attempts made for the job.
#[derive(Debug)]
pub struct JobResult {
    pub name: String,
    pub seed: u32,
    pub output: Option<ColorGrid>,
    /// 1-based index of the first successful attempt, or the attempt limit
    /// if none succeeded.
    pub attempts_used: u32,
    pub wall_time_secs: f64,
    pub cpu_time_secs: f64,
}

impl JobResult {
    pub fn converged(&self) -> bool {
        self.output.is_some()
    }
}
