//! # Session Actor
//!
//! [`SessionActor`] is the server half of the framework. It owns every open
//! session and processes requests one at a time, so an action always runs to
//! completion before the next one is read. No locks guard the sessions: the
//! actor task is their only owner.

use crate::framework::{FrameworkError, SessionClient, SessionEntity, SessionRequest};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that hosts open sessions.
///
/// # Usage Pattern
///
/// 1. **Create**: `SessionActor::new()` returns the actor and its client.
/// 2. **Wire**: pass the collaborators into `actor.run(context)`.
/// 3. **Run**: spawn the returned future on the runtime.
///
/// Requests from all clients are queued on one bounded channel. Two clients
/// editing the same session therefore see their actions applied in arrival
/// order, and the last one wins.
pub struct SessionActor<T: SessionEntity> {
    receiver: mpsc::Receiver<SessionRequest<T>>,
    sessions: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: SessionEntity> SessionActor<T> {
    /// Creates a new `SessionActor` and its associated `SessionClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the request channel. When it is full,
    ///   client calls wait for room.
    pub fn new(buffer_size: usize) -> (Self, SessionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let actor = Self {
            receiver,
            sessions: HashMap::new(),
            next_id: 1,
        };
        (actor, SessionClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// The `context` is injected into every session hook.
    pub async fn run(mut self, context: T::Context) {
        let session_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(session_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                SessionRequest::Open { seed, respond_to } => {
                    debug!(session_type, ?seed, "Open");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    match T::open(id.clone(), seed) {
                        Ok(mut session) => {
                            if let Err(e) = session.on_open(&context).await {
                                warn!(session_type, %id, error = %e, "on_open failed");
                                let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.sessions.insert(id.clone(), session);
                            info!(session_type, %id, open = self.sessions.len(), "Opened");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(session_type, error = %e, "Open failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                SessionRequest::Snapshot { id, respond_to } => {
                    let session = self.sessions.get(&id).cloned();
                    debug!(session_type, %id, found = session.is_some(), "Snapshot");
                    let _ = respond_to.send(Ok(session));
                }
                SessionRequest::Action { id, action, respond_to } => {
                    debug!(session_type, %id, ?action, "Action");
                    let Some(session) = self.sessions.get_mut(&id) else {
                        warn!(session_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let result = session
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => debug!(session_type, %id, "Action ok"),
                        Err(e) => info!(session_type, %id, error = %e, "Action rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                SessionRequest::Close { id, respond_to } => {
                    debug!(session_type, %id, "Close");
                    let Some(session) = self.sessions.remove(&id) else {
                        warn!(session_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    // The session is gone even if the hook fails; the caller only learns why.
                    let result = session
                        .on_close(&context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    info!(session_type, %id, open = self.sessions.len(), "Closed");
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(session_type, open = self.sessions.len(), "Shutdown");
    }
}
