//! Declarative job manifest handling: XML parsing, input artifact
//! resolution, and validation of raw declarations into runnable
//! [`wfcrun_core::JobDescriptor`]s.

pub mod artifact;
pub mod builder;
pub mod error;
pub mod manifest;

pub use error::{BuildError, ManifestError};
pub use manifest::{load_jobs, JobFamily, Manifest, RawJobDeclaration};
