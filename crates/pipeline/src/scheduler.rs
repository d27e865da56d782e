//! Bounded retry scheduling of jobs against the generation engine.

use std::time::Instant;

use wfcrun_core::{timing, GenerationEngine, JobDescriptor, JobResult};

/// Run one job through up to `max_attempts` trials, stopping at the first
/// convergence.
///
/// `attempts_used` is the 1-based index of the first successful trial, or
/// `max_attempts` when every trial failed. Exhaustion is a normal outcome,
/// not an error; the result simply carries no output.
///
/// Both timings are single running totals across all trials made for the
/// job: sampled once before the first trial and once after the terminating
/// trial, never reset in between. The seed is fixed for the whole job;
/// whether a retry can change the outcome is a property of the engine, not
/// something this loop assumes.
pub fn run_job(
    engine: &dyn GenerationEngine,
    descriptor: &JobDescriptor,
    max_attempts: u32,
) -> JobResult {
    let wall_start = Instant::now();
    let cpu_start = timing::process_cpu_time();

    let mut output = None;
    let mut attempts_used = max_attempts;
    for attempt in 1..=max_attempts {
        match engine.generate(&descriptor.input, &descriptor.options, descriptor.seed) {
            Some(grid) => {
                output = Some(grid);
                attempts_used = attempt;
                break;
            }
            None => {
                tracing::debug!(name = %descriptor.name, attempt, "Trial did not converge");
            }
        }
    }

    let wall_time_secs = wall_start.elapsed().as_secs_f64();
    let cpu_time_secs = timing::process_cpu_time()
        .saturating_sub(cpu_start)
        .as_secs_f64();

    JobResult {
        name: descriptor.name.clone(),
        seed: descriptor.seed,
        output,
        attempts_used,
        wall_time_secs,
        cpu_time_secs,
    }
}

/// Run every job strictly sequentially, in declaration order, one result
/// per descriptor.
pub fn run_all(
    engine: &dyn GenerationEngine,
    descriptors: &[JobDescriptor],
    max_attempts: u32,
) -> Vec<JobResult> {
    descriptors
        .iter()
        .map(|descriptor| {
            let result = run_job(engine, descriptor, max_attempts);
            tracing::info!(
                name = %result.name,
                seed = result.seed,
                converged = result.converged(),
                attempts = result.attempts_used,
                wall_secs = result.wall_time_secs,
                cpu_secs = result.cpu_time_secs,
                "Job finished",
            );
            result
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    use wfcrun_engine::testing::{AlwaysConverges, NeverConverges, SucceedAfter};
    use wfcrun_core::{Color, ColorGrid, GenerationOptions};

    fn descriptor() -> JobDescriptor {
        JobDescriptor {
            name: "maze".to_string(),
            options: GenerationOptions {
                pattern_size: 2,
                ..GenerationOptions::default()
            },
            input: ColorGrid::filled(4, 4, Color::new(255, 0, 0)),
            seed: 42,
        }
    }

    #[test]
    fn stops_at_first_success() {
        let engine = SucceedAfter::new(2);
        let result = run_job(&engine, &descriptor(), 10);

        assert!(result.converged());
        assert_eq!(result.attempts_used, 3);
        assert_eq!(engine.calls(), 3);
    }

    #[test]
    fn first_attempt_success_uses_one_trial() {
        let result = run_job(&AlwaysConverges, &descriptor(), 5);
        assert_eq!(result.attempts_used, 1);
        assert_eq!(
            result.output.as_ref().map(|g| (g.height(), g.width())),
            Some((48, 48))
        );
    }

    #[test]
    fn exhaustion_makes_exactly_max_attempts() {
        let engine = NeverConverges::new();
        let result = run_job(&engine, &descriptor(), 4);

        assert!(!result.converged());
        assert_eq!(result.attempts_used, 4);
        assert_eq!(engine.calls(), 4);
    }

    #[test]
    fn never_exceeds_the_attempt_bound() {
        let engine = SucceedAfter::new(10);
        let result = run_job(&engine, &descriptor(), 3);

        assert!(!result.converged());
        assert_eq!(engine.calls(), 3);
    }

    #[test]
    fn timings_are_non_negative_running_totals() {
        let engine = SucceedAfter::new(1);
        let result = run_job(&engine, &descriptor(), 2);
        assert!(result.wall_time_secs >= 0.0);
        assert!(result.cpu_time_secs >= 0.0);
    }

    #[test]
    fn run_all_preserves_declaration_order() {
        let mut first = descriptor();
        first.name = "first".to_string();
        let mut second = descriptor();
        second.name = "second".to_string();

        let results = run_all(&AlwaysConverges, &[first, second], 1);
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
