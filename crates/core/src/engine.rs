//! The generation engine boundary.

use crate::color::ColorGrid;
use crate::options::GenerationOptions;

/// Largest seed value accepted by the engine (`2^31 - 1`).
pub const MAX_SEED: u32 = 2_147_483_647;

/// One call is one trial against the external generation engine.
///
/// The engine is a black box: given an input grid, options, and a seed it
/// either produces an output grid or fails to converge. Failure is signaled
/// purely by `None`; there are no partial or best-effort outputs. The call
/// must be side-effect-free on `input` and `options`.
///
/// Whether a repeated call with identical arguments can produce a different
/// outcome is an engine property the scheduler does not assume either way;
/// it only bounds the number of trials.
pub trait GenerationEngine {
    fn generate(
        &self,
        input: &ColorGrid,
        options: &GenerationOptions,
        seed: u32,
    ) -> Option<ColorGrid>;
}
