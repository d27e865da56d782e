//! Core types shared across the wfcrun workspace: the pixel grid exchanged
//! with the generation engine, generation options, job descriptors and
//! results, the engine trait, and the workspace error type.

pub mod color;
pub mod engine;
pub mod error;
pub mod job;
pub mod options;
pub mod timing;

pub use color::{Color, ColorGrid};
pub use engine::{GenerationEngine, MAX_SEED};
pub use error::CoreError;
pub use job::{JobDescriptor, JobResult};
pub use options::GenerationOptions;
