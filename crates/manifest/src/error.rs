use std::path::PathBuf;

use wfcrun_core::CoreError;

/// Fatal manifest-level failure. The whole document is rejected; no
/// partial manifest is ever loaded.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unparsable manifest markup: {0}")]
    Markup(#[from] roxmltree::Error),

    #[error("Manifest root tag must be 'samples', found '{found}'")]
    WrongRoot { found: String },
}

/// Why one declaration failed to become a descriptor.
///
/// Every variant except `Decode` is recovered per declaration: the
/// declaration is dropped with a warning and the load continues. `Decode`
/// means an input file exists but is corrupt, which aborts the load.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Missing required option attribute(s): {}", .0.join(", "))]
    MissingFields(Vec<String>),

    #[error("Invalid value '{value}' for option attribute '{field}'")]
    InvalidField { field: String, value: String },

    #[error("Input artifact not found: {0}")]
    MissingInput(PathBuf),

    #[error(transparent)]
    Decode(CoreError),
}
