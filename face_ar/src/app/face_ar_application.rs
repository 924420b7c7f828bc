/// FaceArApplication - session lifecycle and per-frame driver
///
/// The host forwards its lifecycle callbacks (resume, pause, surface
/// creation, display changes, draw) to the driver. The driver owns the AR
/// session, the frame, both renderers and the GPU device, and sequences the
/// session updates and draw calls of each frame.

use crate::app::FrameState;
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::graphics::{GraphicsDevice, AssetSource, TextureId, Viewport};
use crate::renderer::{BackgroundRenderer, FaceRenderer};
use crate::session::{
    ArRuntime, Session, Frame, AugmentedFace, ArStatus, InstallStatus, TrackingState,
    CameraConfigFilter, SessionConfig, DepthMode, DisplayGeometry, DisplayRotation,
};
use crate::{ar_debug, ar_error, ar_info, ar_warn};

const SOURCE: &str = "facear::FaceArApplication";

const INSTALL_FAILED: &str = "Please install Google Play Services for AR (ARCore).";
const CREATE_SESSION_FAILED: &str = "Failed to create AR session.";
const CONFIGURE_SESSION_FAILED: &str = "Failed to configure AR session.";
const CREATE_FRAME_FAILED: &str = "Failed to create AR frame.";
const RESUME_SESSION_FAILED: &str = "Failed to resume AR session.";

// ===== STATE =====

/// Lifecycle state of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// No session yet (or install pending)
    Uninitialized,
    /// Session exists and is paused
    Paused,
    /// Session exists and is running
    Resumed,
}

/// Outcome of `FaceArApplication::on_resume`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeOutcome {
    /// The session is running
    Resumed,
    /// An install of the AR services was started; the host will be paused,
    /// then resumed once the install completes
    InstallPending,
}

/// Per-frame options passed by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrawFrameFlags {
    pub depth_color_visualization_enabled: bool,
    pub use_depth_for_occlusion: bool,
}

// ===== DRIVER =====

type FrameOf<R> = <<R as ArRuntime>::Session as Session>::Frame;

/// Face overlay driver
///
/// Field order matters for teardown: the frame is dropped before the
/// session, and the renderers release their GPU resources before the device.
pub struct FaceArApplication<R: ArRuntime> {
    frame: Option<FrameOf<R>>,
    session: Option<R::Session>,
    background_renderer: BackgroundRenderer,
    face_renderer: FaceRenderer,
    device: Box<dyn GraphicsDevice>,
    assets: Box<dyn AssetSource>,
    runtime: R,
    config: AppConfig,
    state: AppState,
    install_requested: bool,
    display_geometry: DisplayGeometry,
    tracked_face_count: usize,
    instant_placement_enabled: bool,
    draw_flags: DrawFrameFlags,
}

impl<R: ArRuntime> FaceArApplication<R> {
    /// Create the driver
    ///
    /// No session is created and no GPU resource is allocated until the host
    /// calls `on_resume` and `on_surface_created`.
    ///
    /// # Arguments
    ///
    /// * `runtime` - AR SDK entry point
    /// * `device` - GPU device bound to the rendering thread
    /// * `assets` - Shader and texture source
    /// * `config` - Application configuration
    pub fn new(
        runtime: R,
        device: Box<dyn GraphicsDevice>,
        assets: Box<dyn AssetSource>,
        config: AppConfig,
    ) -> Self {
        Self {
            frame: None,
            session: None,
            background_renderer: BackgroundRenderer::new(),
            face_renderer: FaceRenderer::new(),
            device,
            assets,
            runtime,
            config,
            state: AppState::Uninitialized,
            install_requested: false,
            display_geometry: DisplayGeometry::default(),
            tracked_face_count: 0,
            instant_placement_enabled: false,
            draw_flags: DrawFrameFlags::default(),
        }
    }

    // ===== LIFECYCLE =====

    /// Create the session on first call, then resume it
    ///
    /// On first use the AR services install is requested. If the platform
    /// starts an install, no session is created and `InstallPending` is
    /// returned; the next resume creates it.
    ///
    /// # Errors
    ///
    /// Returns `Error::Session` with a user-visible message if the install
    /// request fails, or if the session cannot be created, configured or
    /// resumed.
    pub fn on_resume(&mut self) -> Result<ResumeOutcome> {
        ar_info!(SOURCE, "on_resume()");

        if self.session.is_none() {
            // First resume comes from an explicit user launch
            let user_requested_install = !self.install_requested;
            match self.runtime.request_install(user_requested_install) {
                Ok(InstallStatus::Installed) => {}
                Ok(InstallStatus::InstallRequested) => {
                    self.install_requested = true;
                    ar_info!(SOURCE, "AR services install requested");
                    return Ok(ResumeOutcome::InstallPending);
                }
                Err(status) => return Err(fatal(INSTALL_FAILED, status)),
            }

            let mut session = self
                .runtime
                .create_session()
                .map_err(|status| fatal(CREATE_SESSION_FAILED, status))?;

            configure(&mut session, &self.config)?;

            let frame = session
                .create_frame()
                .map_err(|status| fatal(CREATE_FRAME_FAILED, status))?;

            session.set_display_geometry(self.display_geometry);

            self.frame = Some(frame);
            self.session = Some(session);
            ar_info!(SOURCE, "AR session created");
        }

        if let Some(session) = self.session.as_mut() {
            session
                .resume()
                .map_err(|status| fatal(RESUME_SESSION_FAILED, status))?;
        }

        self.state = AppState::Resumed;
        Ok(ResumeOutcome::Resumed)
    }

    /// Pause the session if one exists
    pub fn on_pause(&mut self) {
        ar_info!(SOURCE, "on_pause()");

        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Err(status) = session.pause() {
            ar_warn!(SOURCE, "Session pause failed ({:?})", status);
        }
        self.state = AppState::Paused;
    }

    /// Allocate GPU resources for both renderers
    ///
    /// Must be called on the rendering thread, once the GL context is current.
    ///
    /// # Errors
    ///
    /// Returns the renderer error if a camera texture cannot be allocated or
    /// the renderers were already initialized.
    pub fn on_surface_created(&mut self) -> Result<()> {
        ar_info!(SOURCE, "on_surface_created()");

        self.device.set_clear_color(self.config.clear_color);
        self.background_renderer.initialize_gl_content(
            self.device.as_mut(),
            self.assets.as_ref(),
            &self.config.assets,
        )?;
        self.face_renderer.initialize_gl_content(
            self.device.as_mut(),
            self.assets.as_ref(),
            &self.config.assets,
        )?;
        Ok(())
    }

    /// Apply a new display rotation and surface size
    ///
    /// The geometry is kept by the driver and reapplied whenever a new
    /// session is created.
    pub fn on_display_geometry_changed(&mut self, rotation: DisplayRotation, width: i32, height: i32) {
        ar_info!(SOURCE, "on_display_geometry_changed({:?}, {}, {})", rotation, width, height);

        self.device.set_viewport(Viewport::full(width, height));
        self.display_geometry = DisplayGeometry { rotation, width, height };
        if let Some(session) = self.session.as_mut() {
            session.set_display_geometry(self.display_geometry);
        }
    }

    /// Store the instant placement setting and reconfigure the session
    ///
    /// # Errors
    ///
    /// Returns `Error::Session` if the session rejects the configuration.
    pub fn on_settings_changed(&mut self, instant_placement_enabled: bool) -> Result<()> {
        ar_info!(SOURCE, "on_settings_changed({})", instant_placement_enabled);

        self.instant_placement_enabled = instant_placement_enabled;
        self.configure_session()
    }

    // ===== FRAME =====

    /// Render one frame
    ///
    /// Clears the surface, then (with a session) updates it, draws the camera
    /// background and every tracked face. Update failures are logged and the
    /// frame goes on with the previous frame data.
    pub fn on_draw_frame(&mut self, flags: DrawFrameFlags) {
        self.draw_flags = flags;
        self.device.clear();

        let (Some(session), Some(frame)) = (self.session.as_mut(), self.frame.as_mut()) else {
            return;
        };

        let textures: Vec<TextureId> = [
            self.background_renderer.texture_id(),
            self.face_renderer.texture_id(),
        ]
        .into_iter()
        .flatten()
        .collect();
        session.set_camera_texture_names(&textures);

        if let Err(status) = session.update(frame) {
            ar_error!(SOURCE, "on_draw_frame: session update failed ({:?})", status);
        }

        let mut frame_state = FrameState::capture(&*frame, self.config.near_plane, self.config.far_plane);
        self.background_renderer.draw(self.device.as_mut(), &frame_state);

        if self.config.update_twice_per_frame {
            if let Err(status) = session.update(frame) {
                ar_error!(SOURCE, "on_draw_frame: session update failed ({:?})", status);
            }
            frame_state.timestamp = frame.timestamp();
        }

        let faces = session.all_faces();
        self.tracked_face_count = faces.len();

        for face in faces {
            if face.tracking_state() != TrackingState::Tracking {
                continue;
            }
            self.face_renderer.draw(
                self.device.as_mut(),
                &frame_state.projection,
                &frame_state.view,
                &face,
                &frame_state,
            );
        }
    }

    // ===== SESSION CONFIGURATION =====

    /// Select the camera and apply the face tracking mode
    ///
    /// No-op without a session.
    ///
    /// # Errors
    ///
    /// Returns `Error::Session` if the session rejects the configuration.
    pub fn configure_session(&mut self) -> Result<()> {
        match self.session.as_mut() {
            Some(session) => configure(session, &self.config),
            None => Ok(()),
        }
    }

    /// Select the first supported camera configuration with the configured
    /// facing direction
    ///
    /// No-op without a session.
    pub fn configure_camera(&mut self) {
        if let Some(session) = self.session.as_mut() {
            configure_camera(session, &self.config);
        }
    }

    /// Whether the device supports automatic depth (`false` without a session)
    pub fn is_depth_supported(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.is_depth_mode_supported(DepthMode::Automatic))
    }

    // ===== ACCESSORS =====

    pub fn state(&self) -> AppState {
        self.state
    }

    /// Number of faces enumerated during the last frame (tracking or not)
    pub fn tracked_face_count(&self) -> usize {
        self.tracked_face_count
    }

    /// Flags of the last drawn frame
    pub fn draw_flags(&self) -> DrawFrameFlags {
        self.draw_flags
    }

    pub fn instant_placement_enabled(&self) -> bool {
        self.instant_placement_enabled
    }

    /// Display geometry applied to the next session
    pub fn display_geometry(&self) -> DisplayGeometry {
        self.display_geometry
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Camera texture names registered with the session each frame
    pub fn camera_texture_ids(&self) -> [Option<TextureId>; 2] {
        [self.background_renderer.texture_id(), self.face_renderer.texture_id()]
    }
}

// ===== HELPERS =====

/// Log a fatal session failure and build the matching error
fn fatal(message: &str, status: ArStatus) -> Error {
    ar_error!(SOURCE, "{} ({:?})", message, status);
    Error::session(message, status)
}

fn configure_camera<S: Session>(session: &mut S, config: &AppConfig) {
    let filter = CameraConfigFilter { facing: config.camera_facing };
    let Some(selected) = session.supported_camera_configs(&filter).into_iter().next() else {
        ar_warn!(SOURCE, "No {:?} camera configuration supported", config.camera_facing);
        return;
    };

    match session.set_camera_config(&selected) {
        Ok(()) => ar_debug!(
            SOURCE,
            "Camera {} selected ({}x{})",
            selected.camera_id,
            selected.texture_size.0,
            selected.texture_size.1
        ),
        Err(status) => ar_warn!(SOURCE, "Camera configuration rejected ({:?})", status),
    }
}

fn configure<S: Session>(session: &mut S, config: &AppConfig) -> Result<()> {
    configure_camera(session, config);
    session
        .configure(&SessionConfig { augmented_face_mode: config.face_mode })
        .map_err(|status| fatal(CONFIGURE_SESSION_FAILED, status))
}

#[cfg(test)]
#[path = "face_ar_application_tests.rs"]
mod tests;
