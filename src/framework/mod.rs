//! Generic session actor framework.
//!
//! This module provides the building blocks for running many independent
//! editing sessions inside one actor task, each driven by typed messages.
//!
//! # Main Components
//!
//! - [`SessionEntity`] - Trait that session types implement to be managed by the actor
//! - [`SessionActor`] - Generic actor that owns the open sessions
//! - [`SessionClient`] - Type-safe handle for sending requests to the actor
//! - [`FrameworkError`] - Plumbing errors (actor gone, unknown session)
//!
//! # Testing
//!
//! See [`mock`] for helpers that stand in for the actor when testing client logic.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::SessionActor;
pub use client::SessionClient;
pub use entity::SessionEntity;
pub use error::FrameworkError;
pub use message::{Response, SessionRequest};
