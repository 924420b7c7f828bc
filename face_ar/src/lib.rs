/*!
# FaceAR

Core traits and types for the FaceAR overlay renderer.

This crate draws the live camera feed of an AR session as a full-screen
background and overlays every tracked face with a textured mesh. The AR
session and the GPU are both consumed through capability traits, so the
driver and the renderers can run against a real backend (see the
`face_ar_renderer_gles` crate) or against test doubles.

## Architecture

- **ArRuntime / Session / Frame / Camera / AugmentedFace**: AR session capability
- **GraphicsDevice**: GPU capability (textures, programs, draw calls)
- **Texture / Program**: GPU resources, released on drop
- **AssetSource**: shader source and image loading
- **BackgroundRenderer**: camera feed as a full-screen quad
- **FaceRenderer**: face mesh overlay
- **FaceArApplication**: lifecycle and per-frame driver
*/

// Internal modules
mod error;
mod runtime;
mod config;
pub mod log;
pub mod graphics;
pub mod session;
pub mod renderer;
pub mod app;

// Main facear namespace module
pub mod facear {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::runtime::Runtime;

    // Configuration
    pub use crate::config::{AppConfig, AssetPaths};

    // Application driver
    pub use crate::app::{
        AppState, DrawFrameFlags, FaceArApplication, FrameState, ResumeOutcome, ViewportTracker,
    };

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // GPU capability sub-module
    pub mod graphics {
        pub use crate::graphics::*;
    }

    // AR session capability sub-module
    pub mod session {
        pub use crate::session::*;
    }

    // Renderers sub-module
    pub mod renderer {
        pub use crate::renderer::*;
    }
}

// Re-export math library at crate root
pub use glam;
