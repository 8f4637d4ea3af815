use crate::framework::{FrameworkError, SessionClient, SessionEntity};
use async_trait::async_trait;

/// Trait for session-specific clients to inherit the generic session operations.
///
/// Implementors provide access to the inner [`SessionClient`] and an error
/// mapping; `snapshot` and `close` come for free.
#[async_trait]
pub trait ActorClient<T: SessionEntity>: Send + Sync {
    /// The session-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic SessionClient.
    fn inner(&self) -> &SessionClient<T>;

    /// Map framework errors to the session error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch a copy of a session's current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot(id).await.map_err(Self::map_error)
    }

    /// Discard a session.
    #[tracing::instrument(skip(self))]
    async fn close(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().close(id).await.map_err(Self::map_error)
    }
}
