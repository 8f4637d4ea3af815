//! # Editor Client
//!
//! The narrow interface a presentation layer drives an edit session through:
//! one method per edit, each returning the [`SessionView`] to render next.
//! Validation failures come back as [`EditorError::Validation`] and are also
//! recorded on the session, so a fresh [`view`](EditorClient::view) shows them.
use crate::api::OrderApi;
use crate::clients::actor_client::ActorClient;
use crate::editor_actor::{EditAction, EditOutcome, EditSession, EditorError, SessionId, SessionView};
use crate::framework::{FrameworkError, SessionClient};
use crate::model::Order;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, Instrument};

/// Client for interacting with edit sessions.
#[derive(Clone)]
pub struct EditorClient {
    inner: SessionClient<EditSession>,
    api: Arc<dyn OrderApi>,
}

#[async_trait]
impl ActorClient<EditSession> for EditorClient {
    type Error = EditorError;

    fn inner(&self) -> &SessionClient<EditSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::EntityError(inner) => match inner.downcast::<EditorError>() {
                Ok(error) => *error,
                Err(other) => EditorError::ActorCommunicationError(other.to_string()),
            },
            FrameworkError::NotFound(id) => EditorError::SessionNotFound(id),
            other => EditorError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl EditorClient {
    pub fn new(inner: SessionClient<EditSession>, api: Arc<dyn OrderApi>) -> Self {
        Self { inner, api }
    }

    /// Opens an editor over `order`. Its lines are reconciled and the catalog is fetched.
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    pub async fn open(&self, order: Order) -> Result<SessionId, EditorError> {
        debug!(?order, "open called");
        self.inner.open(order).await.map_err(Self::map_error)
    }

    /// Current state of a session.
    #[instrument(skip(self))]
    pub async fn view(&self, id: SessionId) -> Result<SessionView, EditorError> {
        self.snapshot(id)
            .await?
            .map(|session| session.view())
            .ok_or_else(|| EditorError::SessionNotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn search(&self, id: SessionId, text: &str) -> Result<SessionView, EditorError> {
        self.edit(id, EditAction::Search(text.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn select_suggestion(&self, id: SessionId, index: usize) -> Result<SessionView, EditorError> {
        self.edit(id, EditAction::SelectSuggestion(index)).await
    }

    #[instrument(skip(self))]
    pub async fn set_pending_quantity(&self, id: SessionId, raw: &str) -> Result<SessionView, EditorError> {
        self.edit(id, EditAction::SetPendingQuantity(raw.to_string())).await
    }

    /// Adds the selected catalog item with the pending quantity.
    #[instrument(skip(self))]
    pub async fn add_selected(&self, id: SessionId) -> Result<SessionView, EditorError> {
        self.edit(id, EditAction::AddSelected).await
    }

    #[instrument(skip(self))]
    pub async fn remove_line(&self, id: SessionId, index: usize) -> Result<SessionView, EditorError> {
        self.edit(id, EditAction::RemoveLine(index)).await
    }

    #[instrument(skip(self))]
    pub async fn set_quantity(&self, id: SessionId, index: usize, raw: &str) -> Result<SessionView, EditorError> {
        self.edit(
            id,
            EditAction::SetQuantity {
                index,
                raw: raw.to_string(),
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn increment(&self, id: SessionId, index: usize) -> Result<SessionView, EditorError> {
        self.edit(id, EditAction::Increment(index)).await
    }

    #[instrument(skip(self))]
    pub async fn decrement(&self, id: SessionId, index: usize) -> Result<SessionView, EditorError> {
        self.edit(id, EditAction::Decrement(index)).await
    }

    #[instrument(skip(self))]
    pub async fn set_date(&self, id: SessionId, date: &str) -> Result<SessionView, EditorError> {
        self.edit(id, EditAction::SetDate(date.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn dismiss_notice(&self, id: SessionId) -> Result<SessionView, EditorError> {
        self.edit(id, EditAction::DismissNotice).await
    }

    /// Validates the session and saves it through the order service.
    ///
    /// The session is `Submitting` while the update call is in flight and
    /// refuses every other edit. On failure it returns to `Editing` with its
    /// lines intact, so the caller can simply submit again.
    ///
    /// The whole exchange runs on its own task. A caller that stops waiting
    /// (timeout, aborted task) does not leave the session stuck in
    /// `Submitting`; it returns to `Editing` once the update call finishes.
    #[instrument(skip(self))]
    pub async fn submit(&self, id: SessionId) -> Result<SessionView, EditorError> {
        let client = self.clone();
        let exchange = tokio::spawn(async move { client.submit_exchange(id).await }.in_current_span());

        exchange
            .await
            .map_err(|e| EditorError::ActorCommunicationError(format!("Submit task failed: {}", e)))?
    }

    /// Closes the session without saving.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: SessionId) -> Result<(), EditorError> {
        self.close(id).await
    }

    async fn submit_exchange(&self, id: SessionId) -> Result<SessionView, EditorError> {
        let (order_id, update) = match self.act(id, EditAction::BeginSubmit).await? {
            EditOutcome::ReadyToSubmit { order_id, update } => (order_id, update),
            other => return Err(unexpected(other)),
        };

        info!(%order_id, total_amount = update.total_amount, "Sending update_order");
        let result = self.api.update_order(&order_id, update).await;

        match self.act(id, EditAction::CompleteSubmit(result)).await? {
            EditOutcome::Saved(view) => Ok(view),
            other => Err(unexpected(other)),
        }
    }

    async fn edit(&self, id: SessionId, action: EditAction) -> Result<SessionView, EditorError> {
        match self.act(id, action).await? {
            EditOutcome::Updated(view) => Ok(view),
            other => Err(unexpected(other)),
        }
    }

    async fn act(&self, id: SessionId, action: EditAction) -> Result<EditOutcome, EditorError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(outcome: EditOutcome) -> EditorError {
    EditorError::ActorCommunicationError(format!("Unexpected outcome: {:?}", outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockOrderApi};
    use crate::framework::mock::{create_mock_client, expect_action, expect_close};
    use crate::ledger::ValidationError;
    use crate::model::{OrderId, OrderLine, OrderUpdate};
    use serde_json::json;

    fn seed_view() -> SessionView {
        EditSession::new(SessionId(1), Order::new("ord-1", Some("2024-01-02".into()), json!([]))).view()
    }

    fn update() -> OrderUpdate {
        OrderUpdate {
            date: "2024-01-02".into(),
            total_amount: 6.0,
            order_details: vec![OrderLine::new("Tea", 3, 2.0)],
        }
    }

    #[tokio::test]
    async fn test_submit_sends_payload_then_completes() {
        let (client, mut receiver) = create_mock_client::<EditSession>(10);
        let api = MockOrderApi::new();
        api.expect_update_order().return_ok();
        let editor = EditorClient::new(client, Arc::new(api.clone()));

        let submit_task = tokio::spawn(async move { editor.submit(SessionId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected BeginSubmit");
        assert_eq!(id, SessionId(1));
        assert!(matches!(action, EditAction::BeginSubmit));
        responder
            .send(Ok(EditOutcome::ReadyToSubmit {
                order_id: OrderId::from("ord-1"),
                update: update(),
            }))
            .unwrap();

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected CompleteSubmit");
        assert!(matches!(action, EditAction::CompleteSubmit(Ok(()))));
        responder.send(Ok(EditOutcome::Saved(seed_view()))).unwrap();

        let view = submit_task.await.unwrap().unwrap();
        assert_eq!(view.id, SessionId(1));
        assert_eq!(api.updates(), vec![(OrderId::from("ord-1"), update())]);
        api.verify();
    }

    #[tokio::test]
    async fn test_submit_reports_api_failure_to_session() {
        let (client, mut receiver) = create_mock_client::<EditSession>(10);
        let api = MockOrderApi::new();
        api.expect_update_order().return_err(ApiError::rejected("Order is locked"));
        let editor = EditorClient::new(client, Arc::new(api.clone()));

        let submit_task = tokio::spawn(async move { editor.submit(SessionId(1)).await });

        let (_, _, responder) = expect_action(&mut receiver).await.expect("Expected BeginSubmit");
        responder
            .send(Ok(EditOutcome::ReadyToSubmit {
                order_id: OrderId::from("ord-1"),
                update: update(),
            }))
            .unwrap();

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected CompleteSubmit");
        let reported = match action {
            EditAction::CompleteSubmit(Err(e)) => e,
            other => panic!("Expected failed CompleteSubmit, got {:?}", other),
        };
        assert_eq!(reported, ApiError::rejected("Order is locked"));
        let error = EditorError::Submission(reported);
        responder
            .send(Err(FrameworkError::EntityError(Box::new(error.clone()))))
            .unwrap();

        let result = submit_task.await.unwrap();
        assert_eq!(result, Err(error));
    }

    #[tokio::test]
    async fn test_validation_error_is_recovered_from_actor_reply() {
        let (client, mut receiver) = create_mock_client::<EditSession>(10);
        let api = MockOrderApi::new();
        let editor = EditorClient::new(client, Arc::new(api.clone()));

        let submit_task = tokio::spawn(async move { editor.submit(SessionId(1)).await });

        let (_, _, responder) = expect_action(&mut receiver).await.expect("Expected BeginSubmit");
        responder
            .send(Err(FrameworkError::EntityError(Box::new(EditorError::Validation(
                ValidationError::DateRequired,
            )))))
            .unwrap();

        let result = submit_task.await.unwrap();
        assert_eq!(result, Err(EditorError::Validation(ValidationError::DateRequired)));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_cancel_closes_session() {
        let (client, mut receiver) = create_mock_client::<EditSession>(10);
        let editor = EditorClient::new(client, Arc::new(MockOrderApi::new()));

        let cancel_task = tokio::spawn(async move { editor.cancel(SessionId(4)).await });

        let (id, responder) = expect_close(&mut receiver).await.expect("Expected Close");
        assert_eq!(id, SessionId(4));
        responder.send(Ok(())).unwrap();

        assert!(cancel_task.await.unwrap().is_ok());
    }

    #[test]
    fn test_not_found_maps_to_session_not_found() {
        let error = EditorClient::map_error(FrameworkError::NotFound("session_9".into()));
        assert_eq!(error, EditorError::SessionNotFound("session_9".into()));
    }
}
