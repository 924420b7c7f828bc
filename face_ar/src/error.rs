//! Error types for FaceAR
//!
//! This module defines the error types used throughout the crate,
//! including GPU resources, asset loading, and AR session lifecycle.

use std::fmt;
use crate::session::ArStatus;

/// Result type for FaceAR operations
pub type Result<T> = std::result::Result<T, Error>;

/// FaceAR errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// GPU backend error (resource creation, GL error, etc.)
    BackendError(String),

    /// Invalid resource or resource data (texture, program, image, etc.)
    InvalidResource(String),

    /// Asset could not be read or decoded
    AssetError {
        /// Asset path, relative to the asset root
        path: String,
        /// Reason reported by the asset source
        message: String,
    },

    /// Initialization failed or was done in the wrong order
    InitializationFailed(String),

    /// Unrecoverable AR session failure, carrying a user-facing message
    Session {
        /// Message meant to be shown to the user
        message: String,
        /// Status reported by the AR SDK
        status: ArStatus,
    },
}

impl Error {
    /// Build a session error from a user-facing message and an SDK status
    pub fn session(message: impl Into<String>, status: ArStatus) -> Self {
        Error::Session {
            message: message.into(),
            status,
        }
    }

    /// Whether this error must abort the host (session creation/resume failures)
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Session { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::AssetError { path, message } => write!(f, "Asset error ({}): {}", path, message),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::Session { message, status } => write!(f, "{} ({:?})", message, status),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
