/// Per-frame snapshot handed to the renderers

use glam::Mat4;
use crate::session::{Camera, Frame};

/// Read-only view of the current frame
///
/// Built by the driver after each session update and discarded at the end of
/// the frame. Renderers never query the session themselves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Camera image timestamp in nanoseconds (0 until the first image)
    pub timestamp: i64,
    /// Whether the display geometry changed since the previous update
    pub display_geometry_changed: bool,
    /// World to camera transform
    pub view: Mat4,
    /// Camera to clip transform
    pub projection: Mat4,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            timestamp: 0,
            display_geometry_changed: false,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        }
    }
}

impl FrameState {
    /// Capture the frame and its camera matrices
    ///
    /// # Arguments
    ///
    /// * `frame` - Frame just filled by `Session::update`
    /// * `near` - Near clip plane of the projection
    /// * `far` - Far clip plane of the projection
    pub fn capture<F: Frame>(frame: &F, near: f32, far: f32) -> Self {
        let camera = frame.acquire_camera();
        Self {
            timestamp: frame.timestamp(),
            display_geometry_changed: frame.display_geometry_changed(),
            view: camera.view_matrix(),
            projection: camera.projection_matrix(near, far),
        }
    }

    /// Whether the session delivered a camera image yet
    pub fn has_camera_image(&self) -> bool {
        self.timestamp != 0
    }
}
