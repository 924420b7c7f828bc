/// Mock AR runtime for unit tests (no device required)
///
/// All mock handles share one `MockArState` through `MockAr`, so a test can
/// script the session (install answers, timestamps, faces, failures) after the
/// runtime has been handed to the application driver, and inspect what the
/// driver asked for.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use glam::Mat4;

use crate::graphics::TextureId;
use crate::session::{
    ArRuntime, Session, Frame, Camera, AugmentedFace, ArResult, ArStatus,
    InstallStatus, TrackingState, CameraConfig, CameraConfigFilter, CameraFacing,
    SessionConfig, DepthMode, DisplayGeometry, Pose, FaceMesh,
};

// ============================================================================
// Shared state
// ============================================================================

/// Face scripted into the mock session
#[derive(Debug, Clone)]
pub struct MockFaceData {
    pub tracking_state: TrackingState,
    pub pose: Pose,
    pub vertices: Vec<f32>,
    pub triangle_indices: Vec<u16>,
    pub texture_coordinates: Vec<f32>,
}

impl MockFaceData {
    /// A tracking quad face (4 vertices, 2 triangles) at the given pose
    pub fn quad(tracking_state: TrackingState, pose: Pose) -> Self {
        Self {
            tracking_state,
            pose,
            vertices: vec![
                -0.1, -0.1, 0.0,
                 0.1, -0.1, 0.0,
                 0.1,  0.1, 0.0,
                -0.1,  0.1, 0.0,
            ],
            triangle_indices: vec![0, 1, 2, 2, 3, 0],
            texture_coordinates: vec![0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0],
        }
    }
}

#[derive(Debug)]
pub struct MockArState {
    /// Answers for successive install requests (Installed once exhausted)
    pub install_answers: VecDeque<ArResult<InstallStatus>>,
    pub create_session_failure: Option<ArStatus>,
    pub configure_failure: Option<ArStatus>,
    pub resume_failure: Option<ArStatus>,
    pub update_failure: Option<ArStatus>,
    pub camera_configs: Vec<CameraConfig>,
    pub depth_supported: bool,
    /// Timestamp copied into the frame on each successful update
    pub timestamp: i64,
    pub geometry_changed: bool,
    pub view: Mat4,
    pub projection: Mat4,
    pub faces: Vec<MockFaceData>,

    // Recorded by the mocks
    pub calls: Vec<String>,
    pub install_requests: Vec<bool>,
    pub sessions_created: usize,
    pub selected_camera_config: Option<CameraConfig>,
    pub applied_config: Option<SessionConfig>,
    pub display_geometry: Option<DisplayGeometry>,
    pub camera_textures: Vec<TextureId>,
    pub update_count: usize,
    pub faces_acquired: usize,
    pub faces_released: usize,
    pub projection_clip_planes: Option<(f32, f32)>,
}

impl Default for MockArState {
    fn default() -> Self {
        Self {
            install_answers: VecDeque::new(),
            create_session_failure: None,
            configure_failure: None,
            resume_failure: None,
            update_failure: None,
            camera_configs: vec![
                CameraConfig {
                    camera_id: "1".to_string(),
                    facing: CameraFacing::Front,
                    image_size: (640, 480),
                    texture_size: (1920, 1080),
                },
                CameraConfig {
                    camera_id: "1".to_string(),
                    facing: CameraFacing::Front,
                    image_size: (640, 480),
                    texture_size: (1280, 720),
                },
                CameraConfig {
                    camera_id: "0".to_string(),
                    facing: CameraFacing::Back,
                    image_size: (640, 480),
                    texture_size: (1920, 1080),
                },
            ],
            depth_supported: false,
            timestamp: 0,
            geometry_changed: false,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            faces: Vec::new(),
            calls: Vec::new(),
            install_requests: Vec::new(),
            sessions_created: 0,
            selected_camera_config: None,
            applied_config: None,
            display_geometry: None,
            camera_textures: Vec::new(),
            update_count: 0,
            faces_acquired: 0,
            faces_released: 0,
            projection_clip_planes: None,
        }
    }
}

/// Test-side handle on the mock AR state
#[derive(Debug, Clone, Default)]
pub struct MockAr {
    state: Arc<Mutex<MockArState>>,
}

impl MockAr {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runtime sharing this state
    pub fn runtime(&self) -> MockArRuntime {
        MockArRuntime { ar: self.clone() }
    }

    /// Mutate the scripted state
    pub fn with_state<R>(&self, f: impl FnOnce(&mut MockArState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    /// Snapshot of recorded call names
    pub fn calls(&self) -> Vec<String> {
        self.with_state(|state| state.calls.clone())
    }

    fn record(&self, call: &str) {
        self.with_state(|state| state.calls.push(call.to_string()));
    }
}

// ============================================================================
// Mock runtime
// ============================================================================

#[derive(Debug)]
pub struct MockArRuntime {
    ar: MockAr,
}

impl ArRuntime for MockArRuntime {
    type Session = MockSession;

    fn request_install(&mut self, user_requested_install: bool) -> ArResult<InstallStatus> {
        self.ar.record("request_install");
        self.ar.with_state(|state| {
            state.install_requests.push(user_requested_install);
            state.install_answers.pop_front().unwrap_or(Ok(InstallStatus::Installed))
        })
    }

    fn create_session(&mut self) -> ArResult<MockSession> {
        self.ar.record("create_session");
        self.ar.with_state(|state| match state.create_session_failure {
            Some(status) => Err(status),
            None => {
                state.sessions_created += 1;
                Ok(())
            }
        })?;
        Ok(MockSession { ar: self.ar.clone() })
    }
}

// ============================================================================
// Mock session
// ============================================================================

#[derive(Debug)]
pub struct MockSession {
    ar: MockAr,
}

impl Session for MockSession {
    type Frame = MockFrame;
    type Face = MockFace;

    fn supported_camera_configs(&self, filter: &CameraConfigFilter) -> Vec<CameraConfig> {
        self.ar.record("supported_camera_configs");
        self.ar.with_state(|state| {
            state.camera_configs
                .iter()
                .filter(|config| config.facing == filter.facing)
                .cloned()
                .collect()
        })
    }

    fn set_camera_config(&mut self, config: &CameraConfig) -> ArResult<()> {
        self.ar.record("set_camera_config");
        self.ar.with_state(|state| state.selected_camera_config = Some(config.clone()));
        Ok(())
    }

    fn configure(&mut self, config: &SessionConfig) -> ArResult<()> {
        self.ar.record("configure");
        self.ar.with_state(|state| match state.configure_failure {
            Some(status) => Err(status),
            None => {
                state.applied_config = Some(*config);
                Ok(())
            }
        })
    }

    fn is_depth_mode_supported(&self, mode: DepthMode) -> bool {
        self.ar.with_state(|state| mode == DepthMode::Disabled || state.depth_supported)
    }

    fn resume(&mut self) -> ArResult<()> {
        self.ar.record("resume");
        self.ar.with_state(|state| state.resume_failure.map_or(Ok(()), Err))
    }

    fn pause(&mut self) -> ArResult<()> {
        self.ar.record("pause");
        Ok(())
    }

    fn set_display_geometry(&mut self, geometry: DisplayGeometry) {
        self.ar.record("set_display_geometry");
        self.ar.with_state(|state| state.display_geometry = Some(geometry));
    }

    fn set_camera_texture_names(&mut self, textures: &[TextureId]) {
        self.ar.record("set_camera_texture_names");
        self.ar.with_state(|state| state.camera_textures = textures.to_vec());
    }

    fn create_frame(&mut self) -> ArResult<MockFrame> {
        self.ar.record("create_frame");
        Ok(MockFrame {
            ar: self.ar.clone(),
            timestamp: 0,
            geometry_changed: false,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        })
    }

    fn update(&mut self, frame: &mut MockFrame) -> ArResult<()> {
        self.ar.record("update");
        self.ar.with_state(|state| {
            state.update_count += 1;
            if let Some(status) = state.update_failure {
                return Err(status);
            }
            frame.timestamp = state.timestamp;
            frame.geometry_changed = state.geometry_changed;
            frame.view = state.view;
            frame.projection = state.projection;
            Ok(())
        })
    }

    fn all_faces(&self) -> Vec<MockFace> {
        self.ar.record("all_faces");
        let faces = self.ar.with_state(|state| {
            state.faces_acquired += state.faces.len();
            state.faces.clone()
        });
        faces
            .into_iter()
            .map(|data| MockFace { ar: self.ar.clone(), data })
            .collect()
    }
}

// ============================================================================
// Mock frame / camera / face
// ============================================================================

#[derive(Debug)]
pub struct MockFrame {
    ar: MockAr,
    timestamp: i64,
    geometry_changed: bool,
    view: Mat4,
    projection: Mat4,
}

impl Frame for MockFrame {
    type Camera = MockCamera;

    fn timestamp(&self) -> i64 {
        self.timestamp
    }

    fn display_geometry_changed(&self) -> bool {
        self.geometry_changed
    }

    fn acquire_camera(&self) -> MockCamera {
        self.ar.record("acquire_camera");
        MockCamera { ar: self.ar.clone(), view: self.view, projection: self.projection }
    }
}

#[derive(Debug)]
pub struct MockCamera {
    ar: MockAr,
    view: Mat4,
    projection: Mat4,
}

impl Camera for MockCamera {
    fn tracking_state(&self) -> TrackingState {
        TrackingState::Tracking
    }

    fn view_matrix(&self) -> Mat4 {
        self.view
    }

    fn projection_matrix(&self, near: f32, far: f32) -> Mat4 {
        self.ar.with_state(|state| state.projection_clip_planes = Some((near, far)));
        self.projection
    }
}

#[derive(Debug)]
pub struct MockFace {
    ar: MockAr,
    data: MockFaceData,
}

impl AugmentedFace for MockFace {
    fn tracking_state(&self) -> TrackingState {
        self.data.tracking_state
    }

    fn center_pose(&self) -> Pose {
        self.data.pose
    }

    fn mesh(&self) -> FaceMesh<'_> {
        FaceMesh::new(
            &self.data.vertices,
            &self.data.triangle_indices,
            &self.data.texture_coordinates,
        )
    }
}

impl Drop for MockFace {
    fn drop(&mut self) {
        self.ar.with_state(|state| state.faces_released += 1);
    }
}
