//! Result aggregation and output persistence.

use std::path::Path;

use image::RgbImage;
use wfcrun_core::{ColorGrid, CoreError, JobResult};

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Count of results whose job converged.
pub fn success_count(results: &[JobResult]) -> usize {
    results.iter().filter(|r| r.converged()).count()
}

/// Serializable per-run summary backing the operator report.
#[derive(Debug, serde::Serialize)]
pub struct RunSummary {
    pub total: usize,
    pub successes: usize,
    pub jobs: Vec<JobSummary>,
}

#[derive(Debug, serde::Serialize)]
pub struct JobSummary {
    pub name: String,
    pub seed: u32,
    pub converged: bool,
    pub attempts_used: u32,
    pub wall_time_secs: f64,
    pub cpu_time_secs: f64,
}

impl RunSummary {
    pub fn from_results(results: &[JobResult]) -> Self {
        Self {
            total: results.len(),
            successes: success_count(results),
            jobs: results
                .iter()
                .map(|r| JobSummary {
                    name: r.name.clone(),
                    seed: r.seed,
                    converged: r.converged(),
                    attempts_used: r.attempts_used,
                    wall_time_secs: r.wall_time_secs,
                    cpu_time_secs: r.cpu_time_secs,
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Output persistence
// ---------------------------------------------------------------------------

/// Persist every present output as `{output_dir}/{name}.png`.
///
/// Results without output are skipped; no placeholder file is written.
/// The output directory is normally created up front before any job runs,
/// but is created here as well so the writer is safe to call on its own.
pub fn write_outputs(results: &[JobResult], output_dir: &Path) -> Result<(), CoreError> {
    std::fs::create_dir_all(output_dir)?;
    for result in results {
        let Some(grid) = &result.output else {
            continue;
        };
        let path = output_dir.join(format!("{}.png", result.name));
        encode_png(grid, &path)?;
        tracing::debug!(name = %result.name, path = %path.display(), "Wrote output");
    }
    Ok(())
}

/// Encode one grid as a PNG file.
pub fn encode_png(grid: &ColorGrid, path: &Path) -> Result<(), CoreError> {
    let img = RgbImage::from_raw(grid.width(), grid.height(), grid.as_raw().to_vec())
        .ok_or_else(|| CoreError::Validation("Grid buffer size mismatch".to_string()))?;
    img.save(path).map_err(|source| CoreError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
