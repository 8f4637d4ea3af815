//! Error types for the editor session.

use crate::api::ApiError;
use crate::ledger::ValidationError;
use thiserror::Error;

/// Errors that can occur while editing or submitting an order.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EditorError {
    /// Local input problem; the session is unchanged.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The catalog could not be fetched when the session opened.
    #[error("Could not load items: {0}")]
    CatalogUnavailable(ApiError),

    /// The order service rejected the update or could not be reached.
    #[error("Failed to update order: {0}")]
    Submission(#[from] ApiError),

    /// A submission is in flight; the session accepts nothing but its completion.
    #[error("A submission is already in progress")]
    SubmitInProgress,

    /// A submission result arrived while no submission was in flight.
    #[error("No submission in progress")]
    NoSubmissionInFlight,

    /// The session was closed or never opened.
    #[error("Edit session not found: {0}")]
    SessionNotFound(String),

    /// An error occurred while communicating with the session actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for EditorError {
    fn from(msg: String) -> Self {
        EditorError::ActorCommunicationError(msg)
    }
}
