//! Options for one overlapping-model generation job.

/// Immutable per-job generation options.
///
/// The defaults mirror the engine's built-in values; `pattern_size` has no
/// meaningful default and must always come from the manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct GenerationOptions {
    /// Side length of the overlapping patterns (the manifest's `N`).
    pub pattern_size: u32,
    /// Whether the input wraps around at its edges.
    pub periodic_input: bool,
    /// Whether the generated output should wrap around at its edges.
    pub periodic_output: bool,
    pub out_height: u32,
    pub out_width: u32,
    /// Number of pattern symmetries (rotations/reflections) to consider.
    pub symmetry: u32,
    /// Ground pattern index, `0` meaning no ground constraint.
    pub ground: i32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            pattern_size: 0,
            periodic_input: true,
            periodic_output: false,
            out_height: 48,
            out_width: 48,
            symmetry: 8,
            ground: 0,
        }
    }
}
