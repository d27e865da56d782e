//! Engine adapters implementing [`wfcrun_core::GenerationEngine`].
//!
//! The real generation algorithm lives in an external executable; the
//! orchestrator only ever sees the trait. [`SubprocessEngine`] bridges to
//! that executable, and [`testing`] provides in-process doubles for tests.

pub mod subprocess;
pub mod testing;

pub use subprocess::SubprocessEngine;
