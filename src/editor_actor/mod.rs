//! The order edit session: line editing, validation and submission.

mod actions;
pub mod entity;
pub mod error;
mod session;

pub use actions::*;
pub use error::*;
pub use session::*;

use crate::api::OrderApi;
use crate::clients::EditorClient;
use crate::framework::SessionActor;
use crate::lifecycle::EditorConfig;
use std::sync::Arc;
use tokio::sync::watch;

/// Collaborators injected into every edit session.
#[derive(Clone)]
pub struct EditorContext {
    pub api: Arc<dyn OrderApi>,
    pub config: EditorConfig,
    /// Flipped after each confirmed update so parent views can refresh.
    pub refresh: Option<watch::Sender<bool>>,
}

/// Creates a new editor session actor and its client.
pub fn new(buffer_size: usize, api: Arc<dyn OrderApi>) -> (SessionActor<EditSession>, EditorClient) {
    let (actor, generic_client) = SessionActor::new(buffer_size);
    let client = EditorClient::new(generic_client, api);
    (actor, client)
}
