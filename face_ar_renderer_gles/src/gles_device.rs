/// GlesGraphicsDevice - GraphicsDevice over an OpenGL ES context
///
/// Vertex and index data arrive as client-side slices every draw. They are
/// streamed into per-attribute buffers (and one index buffer) owned by the
/// device, all recorded in a single vertex array object.

use std::fmt;
use std::rc::Rc;

use face_ar::facear::graphics::{
    GraphicsDevice, Texture, TextureTarget, Program, ProgramDesc, ImageData,
    UniformLocation, AttribLocation, UniformValue, Viewport, BlendState, BlendFactor,
    PrimitiveTopology,
};
use face_ar::facear::{Error, Result};
use face_ar::{ar_bail, ar_err, ar_info};
use glow::HasContext;
use rustc_hash::FxHashMap;

use crate::gles_program::{GlesProgram, native_program};
use crate::gles_texture::{GlesTexture, gl_texture_target, native_texture};

const SOURCE: &str = "facear::gles::GlesGraphicsDevice";

// ===== CONVERSIONS =====

pub(crate) fn gl_topology(topology: PrimitiveTopology) -> u32 {
    match topology {
        PrimitiveTopology::TriangleList => glow::TRIANGLES,
        PrimitiveTopology::TriangleStrip => glow::TRIANGLE_STRIP,
    }
}

pub(crate) fn gl_blend_factor(factor: BlendFactor) -> u32 {
    match factor {
        BlendFactor::Zero => glow::ZERO,
        BlendFactor::One => glow::ONE,
        BlendFactor::SrcAlpha => glow::SRC_ALPHA,
        BlendFactor::OneMinusSrcAlpha => glow::ONE_MINUS_SRC_ALPHA,
    }
}

/// Symbolic name of a `glGetError` code
pub(crate) fn gl_error_name(code: u32) -> &'static str {
    match code {
        glow::NO_ERROR => "GL_NO_ERROR",
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "unknown GL error",
    }
}

// ===== DEVICE =====

/// OpenGL ES implementation of `GraphicsDevice`
///
/// The context is shared with every texture and program created by the
/// device, so they can delete themselves when dropped.
pub struct GlesGraphicsDevice {
    gl: Rc<glow::Context>,
    vertex_array: glow::VertexArray,
    index_buffer: glow::Buffer,
    attribute_buffers: FxHashMap<u32, glow::Buffer>,
}

impl GlesGraphicsDevice {
    /// Create the device on the current context
    ///
    /// # Arguments
    ///
    /// * `gl` - Context current on this thread (ES 3.0, or ES 2.0 with
    ///   OES_vertex_array_object)
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the vertex array or index buffer cannot be
    /// created.
    pub fn new(gl: Rc<glow::Context>) -> Result<Self> {
        unsafe {
            let vertex_array = gl
                .create_vertex_array()
                .map_err(|err| ar_err!(SOURCE, "Cannot create vertex array: {}", err))?;
            gl.bind_vertex_array(Some(vertex_array));

            let index_buffer = match gl.create_buffer() {
                Ok(buffer) => buffer,
                Err(err) => {
                    gl.delete_vertex_array(vertex_array);
                    ar_bail!(SOURCE, "Cannot create index buffer: {}", err);
                }
            };

            ar_info!(
                SOURCE,
                "GL device created ({})",
                gl.get_parameter_string(glow::VERSION)
            );

            Ok(Self {
                gl,
                vertex_array,
                index_buffer,
                attribute_buffers: FxHashMap::default(),
            })
        }
    }

    /// Shared handle on the context
    pub fn context(&self) -> &Rc<glow::Context> {
        &self.gl
    }

    /// Stream buffer dedicated to an attribute location
    fn attribute_buffer(&mut self, location: u32) -> Result<glow::Buffer> {
        if let Some(buffer) = self.attribute_buffers.get(&location) {
            return Ok(*buffer);
        }
        let buffer = unsafe { self.gl.create_buffer() }
            .map_err(|err| ar_err!(SOURCE, "Cannot create vertex buffer: {}", err))?;
        self.attribute_buffers.insert(location, buffer);
        Ok(buffer)
    }
}

impl fmt::Debug for GlesGraphicsDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlesGraphicsDevice")
            .field("attribute_buffers", &self.attribute_buffers.len())
            .finish()
    }
}

impl GraphicsDevice for GlesGraphicsDevice {
    fn create_external_texture(&mut self) -> Result<Box<dyn Texture>> {
        let target = gl_texture_target(TextureTarget::ExternalOes);
        unsafe {
            let texture = self
                .gl
                .create_texture()
                .map_err(|err| ar_err!(SOURCE, "Cannot create camera texture: {}", err))?;
            self.gl.bind_texture(target, Some(texture));
            self.gl.tex_parameter_i32(target, glow::TEXTURE_MIN_FILTER, glow::LINEAR as i32);
            self.gl.tex_parameter_i32(target, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
            self.gl.bind_texture(target, None);

            Ok(Box::new(GlesTexture::new(self.gl.clone(), texture, TextureTarget::ExternalOes)))
        }
    }

    fn create_texture_2d(&mut self, image: &ImageData, generate_mipmaps: bool) -> Result<Box<dyn Texture>> {
        unsafe {
            let texture = self
                .gl
                .create_texture()
                .map_err(|err| ar_err!(SOURCE, "Cannot create texture: {}", err))?;
            self.gl.bind_texture(glow::TEXTURE_2D, Some(texture));

            let min_filter = if generate_mipmaps { glow::LINEAR_MIPMAP_LINEAR } else { glow::LINEAR };
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, min_filter as i32);
            self.gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);

            self.gl.tex_image_2d(
                glow::TEXTURE_2D,
                0,
                glow::RGBA as i32,
                image.width() as i32,
                image.height() as i32,
                0,
                glow::RGBA,
                glow::UNSIGNED_BYTE,
                Some(image.pixels()),
            );
            if generate_mipmaps {
                self.gl.generate_mipmap(glow::TEXTURE_2D);
            }
            self.gl.bind_texture(glow::TEXTURE_2D, None);

            Ok(Box::new(GlesTexture::new(self.gl.clone(), texture, TextureTarget::Texture2D)))
        }
    }

    fn create_program(&mut self, desc: &ProgramDesc) -> Result<Box<dyn Program>> {
        let program = GlesProgram::link(self.gl.clone(), desc)?;
        Ok(Box::new(program))
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        unsafe {
            self.gl.viewport(viewport.x, viewport.y, viewport.width, viewport.height);
        }
    }

    fn set_clear_color(&mut self, color: [f32; 4]) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
        }
    }

    fn clear(&mut self) {
        unsafe {
            self.gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
        }
    }

    fn set_depth_write(&mut self, enabled: bool) {
        unsafe {
            self.gl.depth_mask(enabled);
        }
    }

    fn set_blend(&mut self, blend: Option<BlendState>) {
        unsafe {
            match blend {
                Some(state) => {
                    self.gl.enable(glow::BLEND);
                    self.gl.blend_func(
                        gl_blend_factor(state.src_factor),
                        gl_blend_factor(state.dst_factor),
                    );
                }
                None => self.gl.disable(glow::BLEND),
            }
        }
    }

    fn use_program(&mut self, program: Option<&dyn Program>) {
        unsafe {
            self.gl.use_program(program.and_then(|program| native_program(program.id())));
        }
    }

    fn bind_texture(&mut self, unit: u32, texture: &dyn Texture) {
        unsafe {
            self.gl.active_texture(glow::TEXTURE0 + unit);
            self.gl.bind_texture(gl_texture_target(texture.target()), native_texture(texture.id()));
        }
    }

    fn set_uniform(&mut self, location: UniformLocation, value: UniformValue) {
        let location = glow::NativeUniformLocation(location.0);
        unsafe {
            match value {
                UniformValue::I32(value) => self.gl.uniform_1_i32(Some(&location), value),
                UniformValue::Mat4(matrix) => {
                    self.gl.uniform_matrix_4_f32_slice(Some(&location), false, &matrix.to_cols_array())
                }
            }
        }
    }

    fn set_vertex_attribute(&mut self, location: AttribLocation, components: u32, data: &[f32]) {
        let buffer = match self.attribute_buffer(location.0) {
            Ok(buffer) => buffer,
            Err(_) => return,
        };
        unsafe {
            self.gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
            self.gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(data),
                glow::STREAM_DRAW,
            );
            self.gl.vertex_attrib_pointer_f32(location.0, components as i32, glow::FLOAT, false, 0, 0);
            self.gl.enable_vertex_attrib_array(location.0);
            self.gl.bind_buffer(glow::ARRAY_BUFFER, None);
        }
    }

    fn disable_vertex_attribute(&mut self, location: AttribLocation) {
        unsafe {
            self.gl.disable_vertex_attrib_array(location.0);
        }
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: u32, count: u32) {
        unsafe {
            self.gl.draw_arrays(gl_topology(topology), first as i32, count as i32);
        }
    }

    fn draw_indexed(&mut self, topology: PrimitiveTopology, indices: &[u16]) {
        unsafe {
            self.gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.index_buffer));
            self.gl.buffer_data_u8_slice(
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
                glow::STREAM_DRAW,
            );
            self.gl.draw_elements(gl_topology(topology), indices.len() as i32, glow::UNSIGNED_SHORT, 0);
        }
    }

    fn check_error(&mut self, context: &str) -> Result<()> {
        let code = unsafe { self.gl.get_error() };
        if code != glow::NO_ERROR {
            return Err(Error::BackendError(format!(
                "{}: {} (0x{:04X})",
                context,
                gl_error_name(code),
                code
            )));
        }
        Ok(())
    }
}

impl Drop for GlesGraphicsDevice {
    fn drop(&mut self) {
        unsafe {
            for (_, buffer) in self.attribute_buffers.drain() {
                self.gl.delete_buffer(buffer);
            }
            self.gl.delete_buffer(self.index_buffer);
            self.gl.delete_vertex_array(self.vertex_array);
        }
    }
}

#[cfg(test)]
#[path = "gles_device_tests.rs"]
mod tests;
