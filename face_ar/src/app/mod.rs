/// App module - lifecycle driver, frame snapshot and viewport latch

// Module declarations
pub mod face_ar_application;
pub mod frame_state;
pub mod viewport_tracker;

// Re-export everything
pub use face_ar_application::*;
pub use frame_state::*;
pub use viewport_tracker::*;
