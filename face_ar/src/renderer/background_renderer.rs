/// BackgroundRenderer - draws the camera feed as a full-screen quad

use crate::app::FrameState;
use crate::config::AssetPaths;
use crate::error::{Error, Result};
use crate::graphics::{
    GraphicsDevice, AssetSource, Texture, TextureId, Program,
    UniformLocation, AttribLocation, UniformValue, PrimitiveTopology,
};
use crate::renderer::create_program_from_assets;
use crate::{ar_error, ar_info};

/// Quad corners in clip space (x, y), laid out as a triangle strip.
/// The same values are fed as texture coordinates.
const QUAD_VERTICES: [f32; 8] = [
    -1.0, -1.0,
    1.0, -1.0,
    -1.0, 1.0,
    1.0, 1.0,
];

const QUAD_VERTEX_COUNT: u32 = 4;

const SOURCE: &str = "facear::BackgroundRenderer";

/// Camera quad program with its resolved locations
#[derive(Debug)]
struct CameraProgram {
    program: Box<dyn Program>,
    texture_uniform: Option<UniformLocation>,
    position_attrib: Option<AttribLocation>,
    tex_coord_attrib: Option<AttribLocation>,
}

impl CameraProgram {
    fn new(program: Box<dyn Program>) -> Self {
        Self {
            texture_uniform: program.uniform_location("sTexture"),
            position_attrib: program.attrib_location("a_Position"),
            tex_coord_attrib: program.attrib_location("a_TexCoord"),
            program,
        }
    }
}

/// Draws the live camera image behind everything else
///
/// Owns one external texture the session writes camera images into, and the
/// program sampling it. Both are released when the renderer is dropped.
#[derive(Debug, Default)]
pub struct BackgroundRenderer {
    camera_texture: Option<Box<dyn Texture>>,
    program: Option<CameraProgram>,
}

impl BackgroundRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the camera texture and compile the camera quad program
    ///
    /// Must be called once on the rendering thread, with a current context,
    /// before any call to `draw`. A shader failure is logged and leaves the
    /// renderer without a program (draws become no-ops).
    ///
    /// # Errors
    ///
    /// Returns `InitializationFailed` if called twice, or the device error if
    /// the camera texture cannot be allocated.
    pub fn initialize_gl_content(
        &mut self,
        device: &mut dyn GraphicsDevice,
        assets: &dyn AssetSource,
        paths: &AssetPaths,
    ) -> Result<()> {
        if self.camera_texture.is_some() {
            return Err(Error::InitializationFailed(
                "BackgroundRenderer GL content already initialized".to_string(),
            ));
        }

        self.camera_texture = Some(device.create_external_texture()?);

        match create_program_from_assets(
            device,
            assets,
            &paths.background_vertex_shader,
            &paths.background_fragment_shader,
        ) {
            Ok(program) => self.program = Some(CameraProgram::new(program)),
            Err(err) => ar_error!(SOURCE, "Could not create program: {}", err),
        }

        ar_info!(SOURCE, "GL content initialized (camera texture {:?})", self.texture_id());
        Ok(())
    }

    /// Draw the camera quad
    ///
    /// Skipped until the session produced its first camera image, and when
    /// the texture or the program is missing.
    pub fn draw(&self, device: &mut dyn GraphicsDevice, frame: &FrameState) {
        if !frame.has_camera_image() {
            return;
        }
        let (Some(texture), Some(camera)) = (&self.camera_texture, &self.program) else {
            return;
        };

        device.set_depth_write(false);

        device.bind_texture(0, texture.as_ref());
        device.use_program(Some(camera.program.as_ref()));
        if let Some(location) = camera.texture_uniform {
            device.set_uniform(location, UniformValue::I32(0));
        }

        if let Some(location) = camera.position_attrib {
            device.set_vertex_attribute(location, 2, &QUAD_VERTICES);
        }
        if let Some(location) = camera.tex_coord_attrib {
            device.set_vertex_attribute(location, 2, &QUAD_VERTICES);
        }

        device.draw_arrays(PrimitiveTopology::TriangleStrip, 0, QUAD_VERTEX_COUNT);

        if let Some(location) = camera.position_attrib {
            device.disable_vertex_attribute(location);
        }
        if let Some(location) = camera.tex_coord_attrib {
            device.disable_vertex_attribute(location);
        }

        device.use_program(None);
        device.set_depth_write(true);

        if let Err(err) = device.check_error("BackgroundRenderer::draw()") {
            ar_error!(SOURCE, "{}", err);
        }
    }

    /// Camera texture name, to register with the session
    ///
    /// `None` before `initialize_gl_content`.
    pub fn texture_id(&self) -> Option<TextureId> {
        self.camera_texture.as_ref().map(|texture| texture.id())
    }

    /// Whether the camera program compiled
    pub fn has_program(&self) -> bool {
        self.program.is_some()
    }
}

#[cfg(test)]
#[path = "background_renderer_tests.rs"]
mod tests;
