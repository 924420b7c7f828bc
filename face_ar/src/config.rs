/// Application configuration

use crate::session::{AugmentedFaceMode, CameraFacing};

/// Asset paths, relative to the asset root of the host
#[derive(Debug, Clone, PartialEq)]
pub struct AssetPaths {
    /// Camera quad vertex shader
    pub background_vertex_shader: String,
    /// Camera quad fragment shader
    pub background_fragment_shader: String,
    /// Face mesh vertex shader
    pub face_vertex_shader: String,
    /// Face mesh fragment shader
    pub face_fragment_shader: String,
    /// Alpha mask applied to the face mesh
    pub face_mask_texture: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background_vertex_shader: "shaders/screenquad.vert".to_string(),
            background_fragment_shader: "shaders/screenquad.frag".to_string(),
            face_vertex_shader: "shaders/face.vert".to_string(),
            face_fragment_shader: "shaders/face.frag".to_string(),
            face_mask_texture: "models/mask.png".to_string(),
        }
    }
}

/// Application configuration
///
/// Everything the driver needs that is not provided by the host at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Asset locations
    pub assets: AssetPaths,
    /// Color used to clear the surface every frame (RGBA)
    pub clear_color: [f32; 4],
    /// Near clip plane for the camera projection
    pub near_plane: f32,
    /// Far clip plane for the camera projection
    pub far_plane: f32,
    /// Which camera the session is configured with
    pub camera_facing: CameraFacing,
    /// Face tracking mode requested from the session
    pub face_mode: AugmentedFaceMode,
    /// Update the session a second time before enumerating faces
    pub update_twice_per_frame: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            assets: AssetPaths::default(),
            clear_color: [0.1, 0.1, 0.1, 1.0],
            near_plane: 0.1,
            far_plane: 100.0,
            camera_facing: CameraFacing::Front,
            face_mode: AugmentedFaceMode::Mesh3d,
            update_twice_per_frame: true,
        }
    }
}

impl AppConfig {
    pub fn with_assets(mut self, assets: AssetPaths) -> Self {
        self.assets = assets;
        self
    }

    pub fn with_clear_color(mut self, clear_color: [f32; 4]) -> Self {
        self.clear_color = clear_color;
        self
    }

    /// Clip planes passed to the camera projection query
    pub fn with_clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near_plane = near;
        self.far_plane = far;
        self
    }

    pub fn with_camera_facing(mut self, facing: CameraFacing) -> Self {
        self.camera_facing = facing;
        self
    }

    pub fn with_face_mode(mut self, mode: AugmentedFaceMode) -> Self {
        self.face_mode = mode;
        self
    }

    pub fn with_update_twice_per_frame(mut self, enabled: bool) -> Self {
        self.update_twice_per_frame = enabled;
        self
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
