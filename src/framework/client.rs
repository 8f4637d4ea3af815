//! # Session Client

use crate::framework::{FrameworkError, SessionEntity, SessionRequest};
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for sending requests to a [`SessionActor`](crate::framework::SessionActor).
///
/// Holds only a channel sender, so clones are cheap and can be shared across tasks.
pub struct SessionClient<T: SessionEntity> {
    sender: mpsc::Sender<SessionRequest<T>>,
}

impl<T: SessionEntity> Clone for SessionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: SessionEntity> SessionClient<T> {
    pub fn new(sender: mpsc::Sender<SessionRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn open(&self, seed: T::Seed) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Open { seed, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Snapshot { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn close(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SessionRequest::Close { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
