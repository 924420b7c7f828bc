/// Graphics module - GPU capability traits and types

// Module declarations
pub mod graphics_device;
pub mod texture;
pub mod program;
pub mod asset_source;

// Re-export everything from graphics_device.rs
pub use graphics_device::*;

// Re-export from other modules
pub use texture::*;
pub use program::*;
pub use asset_source::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
