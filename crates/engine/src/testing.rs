//! In-process engine doubles for exercising the orchestrator without an
//! external executable.

use std::cell::Cell;

use wfcrun_core::{ColorGrid, GenerationEngine, GenerationOptions};

/// The output a converging double produces: a grid of the requested output
/// dimensions filled with the input's top-left cell.
fn stub_output(input: &ColorGrid, options: &GenerationOptions) -> ColorGrid {
    ColorGrid::filled(options.out_height, options.out_width, input.get(0, 0))
}

/// Fails the first `failures` trials, then converges on every later one.
pub struct SucceedAfter {
    failures: u32,
    calls: Cell<u32>,
}

impl SucceedAfter {
    pub fn new(failures: u32) -> Self {
        Self {
            failures,
            calls: Cell::new(0),
        }
    }

    /// Number of trials made so far.
    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl GenerationEngine for SucceedAfter {
    fn generate(
        &self,
        input: &ColorGrid,
        options: &GenerationOptions,
        _seed: u32,
    ) -> Option<ColorGrid> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        if call <= self.failures {
            None
        } else {
            Some(stub_output(input, options))
        }
    }
}

/// Never converges, mimicking a seed/option combination with no solution.
pub struct NeverConverges {
    calls: Cell<u32>,
}

impl NeverConverges {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl Default for NeverConverges {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationEngine for NeverConverges {
    fn generate(
        &self,
        _input: &ColorGrid,
        _options: &GenerationOptions,
        _seed: u32,
    ) -> Option<ColorGrid> {
        self.calls.set(self.calls.get() + 1);
        None
    }
}

/// Converges on every trial.
pub struct AlwaysConverges;

impl GenerationEngine for AlwaysConverges {
    fn generate(
        &self,
        input: &ColorGrid,
        options: &GenerationOptions,
        _seed: u32,
    ) -> Option<ColorGrid> {
        Some(stub_output(input, options))
    }
}
