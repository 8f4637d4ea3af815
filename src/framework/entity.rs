//! # SessionEntity Trait
//!
//! The contract a session type fulfils to be hosted by a [`SessionActor`](crate::framework::SessionActor).
//!
//! A session is opened from a seed, mutated by actions and finally closed.
//! Associated types keep every payload typed: an editor session can only be
//! sent editor actions, and the compiler rejects anything else.
//!
//! # Provided Methods (Hooks)
//! - [`SessionEntity::on_open`]
//! - [`SessionEntity::on_close`]
//!
//! Both default to doing nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any session type must implement to be managed by `SessionActor`.
///
/// # Async & Context
/// Hooks are async so they can call external services. The `Context` is
/// handed to `run()` and injected into every hook, so collaborators are wired
/// when the actor starts rather than when it is constructed.
#[async_trait]
pub trait SessionEntity: Clone + Send + Sync + 'static {
    /// Session identifier. Allocated by the actor from a `u32` counter.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data a session is opened from.
    type Seed: Send + Sync + Debug;

    /// Operations that can be applied to an open session.
    type Action: Send + Sync + Debug;

    /// The result type returned by actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook.
    type Context: Send + Sync;

    /// One error enum for the whole session type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the session from its seed. Called before `on_open`.
    fn open(id: Self::Id, seed: Self::Seed) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called once after `open`, before the session is visible to clients.
    async fn on_open(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called immediately before the session is discarded.
    async fn on_close(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Applies one action. Runs to completion before the next request is read.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
