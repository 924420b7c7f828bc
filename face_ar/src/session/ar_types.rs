/// AR session value types: statuses, configuration, geometry, poses, meshes

use glam::{Mat4, Quat, Vec3};

// ===== STATUS =====

/// Failure status reported by the AR SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArStatus {
    ErrorFatal,
    ErrorInvalidArgument,
    ErrorSessionPaused,
    ErrorSessionNotPaused,
    ErrorNotTracking,
    ErrorTextureNotSet,
    ErrorMissingGlContext,
    ErrorUnsupportedConfiguration,
    ErrorCameraPermissionNotGranted,
    ErrorCameraNotAvailable,
    UnavailableArcoreNotInstalled,
    UnavailableDeviceNotCompatible,
    UnavailableApkTooOld,
    UnavailableSdkTooOld,
    UnavailableUserDeclinedInstallation,
}

/// Outcome of an install request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallStatus {
    /// The AR services are installed and up to date
    Installed,
    /// An install was started; the host will be paused and resumed afterwards
    InstallRequested,
}

/// Tracking state of a camera or trackable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingState {
    Tracking,
    Paused,
    Stopped,
}

// ===== CONFIGURATION =====

/// Camera facing direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraFacing {
    Back,
    Front,
}

/// Filter applied when listing supported camera configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraConfigFilter {
    pub facing: CameraFacing,
}

/// One supported camera configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraConfig {
    /// Camera id as reported by the platform
    pub camera_id: String,
    pub facing: CameraFacing,
    /// CPU image size (width, height)
    pub image_size: (u32, u32),
    /// GPU texture size (width, height)
    pub texture_size: (u32, u32),
}

/// Augmented face tracking mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AugmentedFaceMode {
    Disabled,
    /// Full 3D face mesh
    Mesh3d,
}

/// Depth mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthMode {
    Disabled,
    Automatic,
}

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub augmented_face_mode: AugmentedFaceMode,
}

// ===== DISPLAY GEOMETRY =====

/// Display rotation, as reported by the platform surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayRotation {
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

impl DisplayRotation {
    /// Map the platform's `Surface.ROTATION_*` constant (0..=3)
    ///
    /// Out-of-range values wrap, the platform only ever reports 0..=3.
    pub fn from_surface_rotation(rotation: i32) -> Self {
        match rotation.rem_euclid(4) {
            0 => DisplayRotation::Rotation0,
            1 => DisplayRotation::Rotation90,
            2 => DisplayRotation::Rotation180,
            _ => DisplayRotation::Rotation270,
        }
    }

    /// Platform rotation constant (0..=3)
    pub fn as_surface_rotation(&self) -> i32 {
        match self {
            DisplayRotation::Rotation0 => 0,
            DisplayRotation::Rotation90 => 1,
            DisplayRotation::Rotation180 => 2,
            DisplayRotation::Rotation270 => 3,
        }
    }
}

/// Display rotation and surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub rotation: DisplayRotation,
    pub width: i32,
    pub height: i32,
}

impl Default for DisplayGeometry {
    fn default() -> Self {
        Self {
            rotation: DisplayRotation::Rotation0,
            width: 1,
            height: 1,
        }
    }
}

// ===== POSE =====

/// Rigid transform of a tracked entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub rotation: Quat,
    pub translation: Vec3,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
    };

    pub fn new(rotation: Quat, translation: Vec3) -> Self {
        Self { rotation, translation }
    }

    /// Build from the SDK's raw layout `[qx, qy, qz, qw, tx, ty, tz]`
    pub fn from_raw(raw: [f32; 7]) -> Self {
        Self {
            rotation: Quat::from_xyzw(raw[0], raw[1], raw[2], raw[3]),
            translation: Vec3::new(raw[4], raw[5], raw[6]),
        }
    }

    /// Column-major model matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }
}

// ===== FACE MESH =====

/// Borrowed view of a face mesh
///
/// The slices point into SDK-owned memory and are only valid while the face
/// handle they were obtained from is borrowed.
#[derive(Debug, Clone, Copy)]
pub struct FaceMesh<'a> {
    vertices: &'a [f32],
    triangle_indices: &'a [u16],
    texture_coordinates: &'a [f32],
}

impl<'a> FaceMesh<'a> {
    /// # Arguments
    ///
    /// * `vertices` - xyz triples in face-local space
    /// * `triangle_indices` - three indices per triangle
    /// * `texture_coordinates` - uv pairs, one per vertex
    pub fn new(vertices: &'a [f32], triangle_indices: &'a [u16], texture_coordinates: &'a [f32]) -> Self {
        Self { vertices, triangle_indices, texture_coordinates }
    }

    pub fn vertices(&self) -> &'a [f32] {
        self.vertices
    }

    pub fn triangle_indices(&self) -> &'a [u16] {
        self.triangle_indices
    }

    pub fn texture_coordinates(&self) -> &'a [f32] {
        self.texture_coordinates
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.triangle_indices.len() / 3
    }

    /// Indices covering whole triangles only
    pub fn draw_indices(&self) -> &'a [u16] {
        &self.triangle_indices[..self.triangle_count() * 3]
    }

    pub fn is_empty(&self) -> bool {
        self.triangle_count() == 0
    }
}

#[cfg(test)]
#[path = "ar_types_tests.rs"]
mod tests;
