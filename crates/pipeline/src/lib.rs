//! The orchestration pipeline: bounded retry scheduling of accepted jobs
//! against the generation engine, and aggregation/persistence of results.

pub mod report;
pub mod scheduler;

pub use report::{success_count, write_outputs, JobSummary, RunSummary};
pub use scheduler::{run_all, run_job};
