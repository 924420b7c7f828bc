/// FaceRenderer - draws tracked face meshes with an alpha mask

use glam::Mat4;

use crate::app::FrameState;
use crate::config::AssetPaths;
use crate::error::{Error, Result};
use crate::graphics::{
    GraphicsDevice, AssetSource, Texture, TextureId, Program,
    UniformLocation, AttribLocation, UniformValue, PrimitiveTopology, BlendState,
};
use crate::renderer::create_program_from_assets;
use crate::session::AugmentedFace;
use crate::{ar_debug, ar_error, ar_info, ar_warn};

const SOURCE: &str = "facear::FaceRenderer";

/// Texture unit of the mask texture
const MASK_TEXTURE_UNIT: u32 = 0;
/// Texture unit of the camera texture
const CAMERA_TEXTURE_UNIT: u32 = 1;

/// Face program with its resolved locations
#[derive(Debug)]
struct FaceProgram {
    program: Box<dyn Program>,
    mvp_uniform: Option<UniformLocation>,
    mask_uniform: Option<UniformLocation>,
    camera_uniform: Option<UniformLocation>,
    position_attrib: Option<AttribLocation>,
    tex_coord_attrib: Option<AttribLocation>,
}

impl FaceProgram {
    fn new(program: Box<dyn Program>) -> Self {
        Self {
            mvp_uniform: program.uniform_location("u_modelViewProjection"),
            mask_uniform: program.uniform_location("u_texture"),
            camera_uniform: program.uniform_location("camTexture"),
            position_attrib: program.attrib_location("a_position"),
            tex_coord_attrib: program.attrib_location("a_texCoord"),
            program,
        }
    }
}

/// Draws every tracked face as a textured, alpha-blended mesh
///
/// The mesh is shaded with a mask texture (its alpha drives blending) and can
/// sample the camera image through its own external texture.
#[derive(Debug, Default)]
pub struct FaceRenderer {
    program: Option<FaceProgram>,
    mask_texture: Option<Box<dyn Texture>>,
    camera_texture: Option<Box<dyn Texture>>,
}

impl FaceRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile the face program and load the mask texture
    ///
    /// Must be called once on the rendering thread, with a current context.
    /// A shader or mask failure is logged and leaves that resource missing;
    /// faces are then skipped (no program) or drawn without a mask.
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
                "FaceRenderer GL content already initialized".to_string(),
            ));
        }

        match create_program_from_assets(
            device,
            assets,
            &paths.face_vertex_shader,
            &paths.face_fragment_shader,
        ) {
            Ok(program) => self.program = Some(FaceProgram::new(program)),
            Err(err) => ar_error!(SOURCE, "Could not create program: {}", err),
        }

        match assets
            .load_image(&paths.face_mask_texture)
            .and_then(|image| device.create_texture_2d(&image, true))
        {
            Ok(texture) => self.mask_texture = Some(texture),
            Err(err) => ar_warn!(SOURCE, "Could not load mask texture: {}", err),
        }

        self.camera_texture = Some(device.create_external_texture()?);

        ar_info!(SOURCE, "GL content initialized (camera texture {:?})", self.texture_id());
        Ok(())
    }

    /// Draw one face
    ///
    /// # Arguments
    ///
    /// * `projection` - Camera projection matrix of the current frame
    /// * `view` - Camera view matrix of the current frame
    /// * `face` - Tracked face; its mesh is borrowed for the duration of the call
    /// * `frame` - Snapshot of the current frame
    ///
    /// # Returns
    ///
    /// `true` if a draw call was issued. Nothing is drawn without a program,
    /// before the first camera image, or for an empty mesh.
    pub fn draw(
        &self,
        device: &mut dyn GraphicsDevice,
        projection: &Mat4,
        view: &Mat4,
        face: &dyn AugmentedFace,
        frame: &FrameState,
    ) -> bool {
        let Some(face_program) = &self.program else {
            ar_debug!(SOURCE, "No program, face skipped");
            return false;
        };
        if !frame.has_camera_image() {
            return false;
        }

        let mesh = face.mesh();
        if mesh.is_empty() {
            return false;
        }

        device.use_program(Some(face_program.program.as_ref()));
        device.set_depth_write(false);

        if let Some(mask) = &self.mask_texture {
            device.bind_texture(MASK_TEXTURE_UNIT, mask.as_ref());
        }
        if let Some(location) = face_program.mask_uniform {
            device.set_uniform(location, UniformValue::I32(MASK_TEXTURE_UNIT as i32));
        }

        if let Some(camera) = &self.camera_texture {
            device.bind_texture(CAMERA_TEXTURE_UNIT, camera.as_ref());
        }
        if let Some(location) = face_program.camera_uniform {
            device.set_uniform(location, UniformValue::I32(CAMERA_TEXTURE_UNIT as i32));
        }

        let model = face.center_pose().to_matrix();
        let model_view_projection = *projection * *view * model;
        if let Some(location) = face_program.mvp_uniform {
            device.set_uniform(location, UniformValue::Mat4(model_view_projection));
        }

        if let Some(location) = face_program.position_attrib {
            device.set_vertex_attribute(location, 3, mesh.vertices());
        }
        if let Some(location) = face_program.tex_coord_attrib {
            device.set_vertex_attribute(location, 2, mesh.texture_coordinates());
        }

        device.set_blend(Some(BlendState::ALPHA));
        device.draw_indexed(PrimitiveTopology::TriangleList, mesh.draw_indices());
        device.set_blend(None);

        if let Some(location) = face_program.position_attrib {
            device.disable_vertex_attribute(location);
        }
        if let Some(location) = face_program.tex_coord_attrib {
            device.disable_vertex_attribute(location);
        }

        device.use_program(None);
        device.set_depth_write(true);

        if let Err(err) = device.check_error("FaceRenderer::draw()") {
            ar_error!(SOURCE, "{}", err);
        }
        true
    }

    /// Camera texture name, to register with the session
    pub fn texture_id(&self) -> Option<TextureId> {
        self.camera_texture.as_ref().map(|texture| texture.id())
    }

    pub fn has_program(&self) -> bool {
        self.program.is_some()
    }

    pub fn has_mask(&self) -> bool {
        self.mask_texture.is_some()
    }
}

#[cfg(test)]
#[path = "face_renderer_tests.rs"]
mod tests;
