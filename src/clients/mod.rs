//! Type-safe wrappers around [`SessionClient`](crate::framework::SessionClient).

pub mod actor_client;
pub mod editor_client;

pub use actor_client::*;
pub use editor_client::*;
