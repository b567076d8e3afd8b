//! Where finished canvases go

use image::{DynamicImage, ImageFormat};
use std::path::Path;

use crate::error::AssetError;

/// Persistence for finished images. Shared across jobs, so it must be `Sync`.
pub trait AssetSink: Sync {
    fn save(&self, image: &DynamicImage, path: &Path) -> Result<(), AssetError>;
}

/// Writes PNG files. Parent directories must already exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngSink;

impl AssetSink for PngSink {
    fn save(&self, image: &DynamicImage, path: &Path) -> Result<(), AssetError> {
        image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|source| AssetError::Save {
                path: path.to_path_buf(),
                source,
            })
    }
}
