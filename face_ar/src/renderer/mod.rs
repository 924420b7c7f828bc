/// Renderer module - camera background and face mesh renderers

// Module declarations
pub mod shader_util;
pub mod background_renderer;
pub mod face_renderer;

// Re-export renderers
pub use background_renderer::BackgroundRenderer;
pub use face_renderer::FaceRenderer;
pub use shader_util::create_program_from_assets;
