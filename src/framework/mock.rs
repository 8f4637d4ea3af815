//! # Mock Helpers
//!
//! Testing a client wrapper (such as [`EditorClient`](crate::clients::EditorClient))
//! does not need a running actor. [`create_mock_client`] returns a client
//! whose requests land on a receiver the test controls; the `expect_*`
//! helpers pull the next request off that receiver so the test can assert on
//! it and answer through the responder.
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<EditSession>(10);
//! let task = tokio::spawn(async move { client.open(order).await });
//!
//! let (seed, responder) = expect_open(&mut receiver).await.expect("Expected Open request");
//! responder.send(Ok(SessionId(1))).unwrap();
//! ```

use crate::framework::{FrameworkError, SessionClient, SessionEntity, SessionRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a client and the receiver its requests arrive on.
pub fn create_mock_client<T: SessionEntity>(
    buffer_size: usize,
) -> (SessionClient<T>, mpsc::Receiver<SessionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (SessionClient::new(sender), receiver)
}

/// Returns the next request if it is an Open request.
pub async fn expect_open<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Seed, oneshot::Sender<Result<T::Id, FrameworkError>>)> {
    match receiver.recv().await {
        Some(SessionRequest::Open { seed, respond_to }) => Some((seed, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is an Action request.
pub async fn expect_action<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(SessionRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Returns the next request if it is a Close request.
pub async fn expect_close<T: SessionEntity>(
    receiver: &mut mpsc::Receiver<SessionRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<(), FrameworkError>>)> {
    match receiver.recv().await {
        Some(SessionRequest::Close { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}
