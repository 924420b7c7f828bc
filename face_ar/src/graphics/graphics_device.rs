/// GraphicsDevice trait - GPU capability used by the renderers

use glam::Mat4;
use crate::error::Result;
use crate::graphics::{
    Texture, Program, ProgramDesc, ImageData,
    UniformLocation, AttribLocation,
};

/// Viewport rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    /// Viewport covering a whole surface of the given size
    pub fn full(width: i32, height: i32) -> Self {
        Self { x: 0, y: 0, width, height }
    }
}

/// Primitive topology for draw calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    TriangleList,
    TriangleStrip,
}

/// Blend factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendFactor {
    Zero,
    One,
    SrcAlpha,
    OneMinusSrcAlpha,
}

/// Blend equation (additive, `src * src_factor + dst * dst_factor`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendState {
    pub src_factor: BlendFactor,
    pub dst_factor: BlendFactor,
}

impl BlendState {
    /// Standard "over" alpha blending
    pub const ALPHA: BlendState = BlendState {
        src_factor: BlendFactor::SrcAlpha,
        dst_factor: BlendFactor::OneMinusSrcAlpha,
    };
}

/// Uniform value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Integer uniform (also used for sampler units)
    I32(i32),
    /// Column-major 4x4 matrix
    Mat4(Mat4),
}

/// GPU capability
///
/// Immediate-mode interface over an OpenGL ES context. All calls must happen
/// on the thread owning the context. Resource creation returns owned objects
/// that release their GPU storage when dropped.
pub trait GraphicsDevice {
    /// Allocate a texture bound to the external camera image stream
    ///
    /// The texture uses linear min/mag filtering.
    fn create_external_texture(&mut self) -> Result<Box<dyn Texture>>;

    /// Create a 2D texture from RGBA8 pixels
    ///
    /// # Arguments
    ///
    /// * `image` - Decoded pixels
    /// * `generate_mipmaps` - Build the full mip chain after upload
    fn create_texture_2d(&mut self, image: &ImageData, generate_mipmaps: bool) -> Result<Box<dyn Texture>>;

    /// Compile and link a vertex + fragment program
    ///
    /// # Errors
    ///
    /// Returns `BackendError` with the compiler/linker log on failure.
    fn create_program(&mut self, desc: &ProgramDesc) -> Result<Box<dyn Program>>;

    /// Set the viewport rectangle
    fn set_viewport(&mut self, viewport: Viewport);

    /// Set the color used by `clear`
    fn set_clear_color(&mut self, color: [f32; 4]);

    /// Clear color and depth buffers
    fn clear(&mut self);

    /// Enable or disable depth writes
    fn set_depth_write(&mut self, enabled: bool);

    /// Enable blending with the given state, or disable it with `None`
    fn set_blend(&mut self, blend: Option<BlendState>);

    /// Make a program current, or unbind with `None`
    fn use_program(&mut self, program: Option<&dyn Program>);

    /// Bind a texture on a texture unit (its own target is used)
    fn bind_texture(&mut self, unit: u32, texture: &dyn Texture);

    /// Upload a uniform on the current program
    fn set_uniform(&mut self, location: UniformLocation, value: UniformValue);

    /// Feed a float vertex attribute and enable its array
    ///
    /// # Arguments
    ///
    /// * `location` - Attribute location
    /// * `components` - Components per vertex (2 or 3)
    /// * `data` - Tightly packed attribute data
    fn set_vertex_attribute(&mut self, location: AttribLocation, components: u32, data: &[f32]);

    /// Disable a vertex attribute array
    fn disable_vertex_attribute(&mut self, location: AttribLocation);

    /// Non-indexed draw
    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: u32, count: u32);

    /// Indexed draw using 16-bit indices
    fn draw_indexed(&mut self, topology: PrimitiveTopology, indices: &[u16]);

    /// Check for pending GPU errors
    ///
    /// # Arguments
    ///
    /// * `context` - Label included in the error message
    fn check_error(&mut self, context: &str) -> Result<()>;
}
