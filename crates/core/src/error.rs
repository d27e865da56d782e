use std::path::PathBuf;

/// Fatal error for the whole run.
///
/// Per-declaration problems (missing option attributes, missing input files)
/// are not represented here; they are recovered declaration-by-declaration
/// and surface as `BuildError` in the manifest crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Failed to decode input image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode output image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}
