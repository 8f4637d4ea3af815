//! # Framework Errors

/// Errors that can occur within the session framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Session not found: {0}")]
    NotFound(String),
    #[error("Session error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
