//! Subprocess-backed engine adapter.
//!
//! Invokes an external engine executable once per trial: the input grid is
//! written to a scratch PNG, options and seed are passed as flags, and the
//! engine is expected to write its output PNG and exit 0 on convergence.
//! A non-zero exit is the engine's non-convergence signal.
//!
//! The call blocks until the engine exits; there is no orchestrator-level
//! timeout or cancellation.

use std::path::PathBuf;
use std::process::Command;

use image::RgbImage;
use wfcrun_core::{ColorGrid, GenerationEngine, GenerationOptions};

pub struct SubprocessEngine {
    command: PathBuf,
}

impl SubprocessEngine {
    pub fn new(command: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn run_once(
        &self,
        input: &ColorGrid,
        options: &GenerationOptions,
        seed: u32,
    ) -> std::io::Result<Option<ColorGrid>> {
        let scratch = tempfile::tempdir()?;
        let input_path = scratch.path().join("input.png");
        let output_path = scratch.path().join("output.png");

        let img = RgbImage::from_raw(input.width(), input.height(), input.as_raw().to_vec())
            .ok_or_else(|| std::io::Error::other("input grid buffer size mismatch"))?;
        img.save(&input_path).map_err(std::io::Error::other)?;

        let mut cmd = Command::new(&self.command);
        cmd.arg("--input")
            .arg(&input_path)
            .arg("--output")
            .arg(&output_path)
            .arg("--seed")
            .arg(seed.to_string())
            .arg("--pattern-size")
            .arg(options.pattern_size.to_string())
            .arg("--height")
            .arg(options.out_height.to_string())
            .arg("--width")
            .arg(options.out_width.to_string())
            .arg("--symmetry")
            .arg(options.symmetry.to_string())
            .arg("--ground")
            .arg(options.ground.to_string());
        if options.periodic_input {
            cmd.arg("--periodic-input");
        }
        if options.periodic_output {
            cmd.arg("--periodic-output");
        }

        let status = cmd.status()?;
        if !status.success() {
            tracing::debug!(code = ?status.code(), "Engine exited without converging");
            return Ok(None);
        }

        let decoded = image::open(&output_path).map_err(std::io::Error::other)?;
        let rgb = decoded.to_rgb8();
        let (width, height) = rgb.dimensions();
        Ok(ColorGrid::from_raw(height, width, rgb.into_raw()))
    }
}

impl GenerationEngine for SubprocessEngine {
    fn generate(
        &self,
        input: &ColorGrid,
        options: &GenerationOptions,
        seed: u32,
    ) -> Option<ColorGrid> {
        match self.run_once(input, options, seed) {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(
                    command = %self.command.display(),
                    error = %e,
                    "Engine invocation failed",
                );
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
