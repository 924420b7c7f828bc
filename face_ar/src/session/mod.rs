/// Session module - AR session capability traits and value types

// Module declarations
pub mod ar_types;
pub mod session;

// Re-export everything
pub use ar_types::*;
pub use session::*;

// Mock AR runtime for tests (no device required)
#[cfg(test)]
pub mod mock_session;
