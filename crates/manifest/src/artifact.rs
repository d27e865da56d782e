//! Input artifact resolution and decoding.

use std::path::Path;

use wfcrun_core::{ColorGrid, CoreError};

/// Resolve and decode one input artifact.
///
/// Returns `Ok(None)` when no regular file exists at `path` — an expected
/// absence, recovered by the caller. A file that exists but cannot be
/// decoded is an operator data-integrity problem and is fatal.
///
/// Channel depth is normalized to 8-bit unsigned RGB. No gamma or
/// color-space transform is applied.
pub fn load_input(path: &Path) -> Result<Option<ColorGrid>, CoreError> {
    if !path.is_file() {
        return Ok(None);
    }
    let img = image::open(path).map_err(|source| CoreError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let grid = ColorGrid::from_raw(height, width, rgb.into_raw()).ok_or_else(|| {
        CoreError::Validation(format!(
            "Decoded buffer size does not match {width}x{height} for {}",
            path.display()
        ))
    })?;
    Ok(Some(grid))
}
