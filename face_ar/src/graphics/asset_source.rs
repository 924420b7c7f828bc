/// Asset loading capability

use crate::error::Result;
use crate::graphics::ImageData;

/// Read-only access to bundled assets (shader sources, images)
///
/// On Android this is backed by the APK asset manager; the GLES backend
/// crate provides a filesystem implementation.
pub trait AssetSource {
    /// Read a UTF-8 text asset
    ///
    /// # Arguments
    ///
    /// * `path` - Path relative to the asset root (e.g. "shaders/face.vert")
    fn read_to_string(&self, path: &str) -> Result<String>;

    /// Load and decode an image asset into RGBA8 pixels
    ///
    /// # Arguments
    ///
    /// * `path` - Path relative to the asset root (e.g. "models/mask.png")
    fn load_image(&self, path: &str) -> Result<ImageData>;
}
