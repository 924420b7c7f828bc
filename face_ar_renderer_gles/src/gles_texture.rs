/// GlesTexture - GL texture object implementing the Texture trait

use std::fmt;
use std::num::NonZeroU32;
use std::rc::Rc;

use face_ar::facear::graphics::{Texture, TextureId, TextureTarget};
use glow::HasContext;

/// Non-standard target of camera textures (GL_OES_EGL_image_external)
pub(crate) const TEXTURE_EXTERNAL_OES: u32 = 0x8D65;

/// GL binding target of a texture
pub(crate) fn gl_texture_target(target: TextureTarget) -> u32 {
    match target {
        TextureTarget::Texture2D => glow::TEXTURE_2D,
        TextureTarget::ExternalOes => TEXTURE_EXTERNAL_OES,
    }
}

/// Rebuild the native handle from a texture id
///
/// Returns `None` for the reserved name 0.
pub(crate) fn native_texture(id: TextureId) -> Option<glow::Texture> {
    NonZeroU32::new(id.0).map(glow::NativeTexture)
}

/// GL texture, deleted on drop
pub struct GlesTexture {
    gl: Rc<glow::Context>,
    texture: glow::Texture,
    target: TextureTarget,
}

impl GlesTexture {
    pub(crate) fn new(gl: Rc<glow::Context>, texture: glow::Texture, target: TextureTarget) -> Self {
        Self { gl, texture, target }
    }

    /// Native GL handle
    pub fn raw(&self) -> glow::Texture {
        self.texture
    }
}

impl fmt::Debug for GlesTexture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlesTexture")
            .field("id", &self.texture.0.get())
            .field("target", &self.target)
            .finish()
    }
}

impl Texture for GlesTexture {
    fn id(&self) -> TextureId {
        TextureId(self.texture.0.get())
    }

    fn target(&self) -> TextureTarget {
        self.target
    }
}

impl Drop for GlesTexture {
    fn drop(&mut self) {
        unsafe {
            self.gl.delete_texture(self.texture);
        }
    }
}

#[cfg(test)]
#[path = "gles_texture_tests.rs"]
mod tests;
