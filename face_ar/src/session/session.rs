/// AR session capability traits
///
/// These traits model the opaque AR SDK as injected capabilities. A backend
/// (e.g. bindings over the ARCore C API) implements them; the driver and the
/// renderers only ever see these traits.

use glam::Mat4;
use crate::graphics::TextureId;
use crate::session::{
    ArStatus, InstallStatus, TrackingState, CameraConfig, CameraConfigFilter,
    SessionConfig, DepthMode, DisplayGeometry, Pose, FaceMesh,
};

/// Result type for AR SDK calls
pub type ArResult<T> = std::result::Result<T, ArStatus>;

/// Entry point of the AR SDK: installation and session creation
pub trait ArRuntime {
    /// Session type created by this runtime
    type Session: Session;

    /// Ask the platform to install or update the AR services if needed
    ///
    /// # Arguments
    ///
    /// * `user_requested_install` - `true` the first time, when the user
    ///   explicitly launched the app; `false` after an install was already
    ///   requested
    fn request_install(&mut self, user_requested_install: bool) -> ArResult<InstallStatus>;

    /// Create a new, paused session
    fn create_session(&mut self) -> ArResult<Self::Session>;
}

/// An AR session
///
/// Dropping the session destroys it.
pub trait Session {
    /// Frame type filled by `update`
    type Frame: Frame;
    /// Augmented face handle type
    type Face: AugmentedFace;

    /// List supported camera configurations matching a filter
    fn supported_camera_configs(&self, filter: &CameraConfigFilter) -> Vec<CameraConfig>;

    /// Select the camera configuration
    fn set_camera_config(&mut self, config: &CameraConfig) -> ArResult<()>;

    /// Apply a session configuration
    fn configure(&mut self, config: &SessionConfig) -> ArResult<()>;

    /// Whether the device supports the given depth mode
    fn is_depth_mode_supported(&self, mode: DepthMode) -> bool;

    /// Start (or restart) camera capture and tracking
    fn resume(&mut self) -> ArResult<()>;

    /// Pause camera capture and tracking
    fn pause(&mut self) -> ArResult<()>;

    /// Tell the session about the current display rotation and size
    fn set_display_geometry(&mut self, geometry: DisplayGeometry);

    /// Register the external textures the camera image is written into
    ///
    /// The session cycles through the given textures, one per update.
    fn set_camera_texture_names(&mut self, textures: &[TextureId]);

    /// Allocate a frame object to be filled by `update`
    fn create_frame(&mut self) -> ArResult<Self::Frame>;

    /// Fetch the latest camera image and tracking data into `frame`
    fn update(&mut self, frame: &mut Self::Frame) -> ArResult<()>;

    /// Acquire handles on every known face
    ///
    /// Handles are released when dropped.
    fn all_faces(&self) -> Vec<Self::Face>;
}

/// Snapshot produced by `Session::update`
pub trait Frame {
    /// Camera handle type
    type Camera: Camera;

    /// Camera image timestamp in nanoseconds, 0 until the first image arrives
    fn timestamp(&self) -> i64;

    /// Whether the display geometry changed since the previous update
    fn display_geometry_changed(&self) -> bool;

    /// Acquire the camera of this frame
    fn acquire_camera(&self) -> Self::Camera;
}

/// Camera of a frame
pub trait Camera {
    fn tracking_state(&self) -> TrackingState;

    /// World to camera transform
    fn view_matrix(&self) -> Mat4;

    /// Camera to clip transform for the given clip planes
    fn projection_matrix(&self, near: f32, far: f32) -> Mat4;
}

/// A tracked face
pub trait AugmentedFace {
    fn tracking_state(&self) -> TrackingState;

    /// Pose of the face center (behind the nose)
    fn center_pose(&self) -> Pose;

    /// Current mesh, borrowed from the SDK for as long as `self` is borrowed
    fn mesh(&self) -> FaceMesh<'_>;
}
