/*!
# FaceAR - OpenGL ES Backend

OpenGL ES 2.0/3.0 implementation of the FaceAR GPU capability.

This crate implements the `face_ar` graphics traits on top of `glow`, and
provides a filesystem asset source decoding images with the `image` crate.
The GL context must be created and made current by the host (EGL on
Android, GLSurfaceView, or any windowing library) before the device is built.
*/

// GLES implementation modules
mod gles_device;
mod gles_texture;
mod gles_program;
mod fs_asset_source;

// Main facear namespace module
pub mod facear {
    pub use crate::gles_device::GlesGraphicsDevice;
    pub use crate::gles_texture::GlesTexture;
    pub use crate::gles_program::GlesProgram;
    pub use crate::fs_asset_source::{FsAssetSource, decode_image};
}
