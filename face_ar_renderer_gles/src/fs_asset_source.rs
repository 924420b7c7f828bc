/// FsAssetSource - asset loading from a directory on disk

use std::fs;
use std::path::{Path, PathBuf};

use face_ar::facear::graphics::{AssetSource, ImageData};
use face_ar::facear::{Error, Result};
use face_ar::ar_debug;

const SOURCE: &str = "facear::gles::FsAssetSource";

/// Decode an encoded image (PNG) into RGBA8 pixels
///
/// Hosts reading assets through another API (e.g. the Android asset
/// manager) can decode the bytes with this function.
///
/// # Errors
///
/// Returns `AssetError` tagged with `path` if the bytes cannot be decoded.
pub fn decode_image(path: &str, bytes: &[u8]) -> Result<ImageData> {
    let decoded = image::load_from_memory(bytes).map_err(|err| Error::AssetError {
        path: path.to_string(),
        message: format!("Failed to decode image: {}", err),
    })?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    ImageData::new(width, height, rgba.into_raw())
}

/// Asset source rooted at a directory
#[derive(Debug, Clone)]
pub struct FsAssetSource {
    root: PathBuf,
}

impl FsAssetSource {
    /// # Arguments
    ///
    /// * `root` - Directory asset paths are relative to
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = self.resolve(path);
        ar_debug!(SOURCE, "Loading {}", full_path.display());
        fs::read(&full_path).map_err(|err| Error::AssetError {
            path: path.to_string(),
            message: err.to_string(),
        })
    }
}

impl AssetSource for FsAssetSource {
    fn read_to_string(&self, path: &str) -> Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes).map_err(|err| Error::AssetError {
            path: path.to_string(),
            message: format!("Not valid UTF-8: {}", err),
        })
    }

    fn load_image(&self, path: &str) -> Result<ImageData> {
        let bytes = self.read(path)?;
        decode_image(path, &bytes)
    }
}

#[cfg(test)]
#[path = "fs_asset_source_tests.rs"]
mod tests;
