/// Texture trait, texture ids, and CPU-side image data

use crate::error::{Error, Result};

/// Backend texture name (the GL texture id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub u32);

/// Texture binding target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureTarget {
    /// Regular 2D texture with application-uploaded pixels
    Texture2D,
    /// Texture whose storage is supplied by the camera pipeline (GL_TEXTURE_EXTERNAL_OES)
    ExternalOes,
}

/// GPU texture
///
/// Implementations release the underlying GPU texture when dropped.
pub trait Texture: std::fmt::Debug {
    /// Backend texture name
    fn id(&self) -> TextureId;

    /// Binding target of this texture
    fn target(&self) -> TextureTarget;
}

/// Decoded RGBA8 image, ready for upload
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageData {
    /// Wrap tightly packed RGBA8 pixels
    ///
    /// # Errors
    ///
    /// Returns `InvalidResource` if a dimension is zero or the pixel buffer
    /// length is not `width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidResource(format!(
                "image has empty dimensions {}x{}", width, height
            )));
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(Error::InvalidResource(format!(
                "image {}x{} expects {} bytes of RGBA8, got {}",
                width, height, expected, pixels.len()
            )));
        }
        Ok(Self { width, height, pixels })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA8 pixels, row-major, first row first
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
