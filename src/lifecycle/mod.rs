//! # Lifecycle
//!
//! Wiring and startup: the [`EditorSystem`] orchestrator, runtime
//! [`EditorConfig`], and the tracing subscriber used by the binary.

pub mod config;
pub mod editor_system;
pub mod tracing;

pub use config::EditorConfig;
pub use editor_system::EditorSystem;
pub use tracing::setup_tracing;
