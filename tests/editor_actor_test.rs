use async_trait::async_trait;
use order_editor::api::{ApiError, Call, MockOrderApi, OrderApi};
use order_editor::clients::{ActorClient, EditorClient};
use order_editor::editor_actor::{
    EditAction, EditOutcome, EditorContext, EditorError, Notice, Phase, SessionId, SessionView,
};
use order_editor::ledger::date::{format_date, today};
use order_editor::ledger::ValidationError;
use order_editor::lifecycle::EditorConfig;
use order_editor::model::{CatalogItem, Order, OrderId, OrderLine, OrderUpdate};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout};

/// Real session actor with a mocked order service.
///
/// Pattern 2: Actor + Mocks
/// - Real EditSession actor (tests the Editing/Submitting state machine)
/// - Mocked OrderApi (scripts catalog and update answers)
fn start(api: &MockOrderApi, refresh: Option<watch::Sender<bool>>) -> (EditorClient, JoinHandle<()>) {
    start_with(Arc::new(api.clone()), refresh)
}

fn start_with(api: Arc<dyn OrderApi>, refresh: Option<watch::Sender<bool>>) -> (EditorClient, JoinHandle<()>) {
    let (actor, client) = order_editor::editor_actor::new(10, api.clone());
    let handle = tokio::spawn(actor.run(EditorContext {
        api,
        config: EditorConfig::default(),
        refresh,
    }));
    (client, handle)
}

fn catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new("Tea", 2.0),
        CatalogItem::new("Coffee", 3.0),
        CatalogItem::new("Green Tea", 2.5),
    ]
}

fn seed() -> Order {
    Order::new(
        "ord-7",
        Some("2024-03-01".into()),
        json!([{ "item": "Tea", "quantity": 2, "price": 2 }]),
    )
}

#[tokio::test]
async fn test_empty_date_blocks_submit() {
    let api = MockOrderApi::new();
    api.expect_fetch_catalog().return_ok(catalog());
    let (client, handle) = start(&api, None);

    let session = client.open(seed()).await.unwrap();
    client.set_date(session, "").await.unwrap();

    let result = client.submit(session).await;
    assert_eq!(result, Err(EditorError::Validation(ValidationError::DateRequired)));

    let view = client.view(session).await.unwrap();
    assert_eq!(view.phase, Phase::Editing);
    assert_eq!(view.date_error.as_deref(), Some("Date is required."));
    assert_eq!(view.lines.len(), 1);

    api.verify_fetches_only();
    api.verify();

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_empty_order_blocks_submit_with_notice() {
    let api = MockOrderApi::new();
    api.expect_fetch_catalog().return_ok(catalog());
    let (client, handle) = start(&api, None);

    let session = client
        .open(Order::new("ord-8", Some("2024-03-01".into()), json!([])))
        .await
        .unwrap();

    let result = client.submit(session).await;
    assert_eq!(result, Err(EditorError::Validation(ValidationError::EmptyOrder)));

    let view = client.view(session).await.unwrap();
    assert_eq!(view.notice, Some(Notice::Error("Please add at least one item.".into())));
    assert_eq!(view.date_error, None);
    api.verify_fetches_only();

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_submit_sends_recomputed_total() {
    let api = MockOrderApi::new();
    api.expect_fetch_catalog().return_ok(catalog());
    api.expect_update_order().return_ok();
    let (client, handle) = start(&api, None);

    let session = client.open(seed()).await.unwrap();

    let view = client.search(session, "tea").await.unwrap();
    assert_eq!(view.search.text, "TEA");
    let names: Vec<_> = view.search.suggestions.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Tea", "Green Tea"]);

    client.select_suggestion(session, 1).await.unwrap();
    client.set_pending_quantity(session, "3").await.unwrap();
    let view = client.add_selected(session).await.unwrap();
    assert_eq!(view.lines.len(), 2);
    assert_eq!(view.total, 11.5);
    assert_eq!(view.search.text, "");
    assert_eq!(view.search.quantity, 1);

    let view = client.submit(session).await.unwrap();
    assert!(view.saved);
    assert_eq!(view.phase, Phase::Editing);
    assert_eq!(view.notice, Some(Notice::Success("Order updated successfully!".into())));

    let expected = OrderUpdate {
        date: "2024-03-01".into(),
        total_amount: 11.5,
        order_details: vec![OrderLine::new("Tea", 2, 2.0), OrderLine::new("Green Tea", 3, 2.5)],
    };
    assert_eq!(api.updates(), vec![(OrderId::from("ord-7"), expected)]);
    api.verify();

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_update_keeps_edits() {
    let api = MockOrderApi::new();
    api.expect_fetch_catalog().return_ok(catalog());
    api.expect_update_order().return_err(ApiError::rejected("Order is locked"));
    api.expect_update_order().return_ok();
    let (client, handle) = start(&api, None);

    let session = client.open(seed()).await.unwrap();
    client.increment(session, 0).await.unwrap();

    let result = client.submit(session).await;
    assert_eq!(result, Err(EditorError::Submission(ApiError::rejected("Order is locked"))));

    let view = client.view(session).await.unwrap();
    assert_eq!(view.phase, Phase::Editing);
    assert!(!view.saved);
    assert_eq!(view.lines.get(0).map(|l| l.quantity), Some(3));
    assert_eq!(
        view.notice,
        Some(Notice::Error("Failed to update order: Order is locked".into()))
    );

    // Edits still work, and a second submit goes through
    client.dismiss_notice(session).await.unwrap();
    let view = client.submit(session).await.unwrap();
    assert!(view.saved);
    assert_eq!(api.updates().len(), 2);
    api.verify();

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_transport_fault_returns_to_editing() {
    let api = MockOrderApi::new();
    api.expect_fetch_catalog().return_ok(catalog());
    api.expect_update_order().return_err(ApiError::Transport("connection reset".into()));
    let (client, handle) = start(&api, None);

    let session = client.open(seed()).await.unwrap();
    let result = client.submit(session).await;
    assert!(matches!(result, Err(EditorError::Submission(ApiError::Transport(_)))));

    let view = client.view(session).await.unwrap();
    assert_eq!(view.phase, Phase::Editing);
    assert_eq!(view.total, 4.0);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_catalog_failure_leaves_no_suggestions() {
    let api = MockOrderApi::new();
    api.expect_fetch_catalog().return_err(ApiError::Transport("down".into()));
    let (client, handle) = start(&api, None);

    let session = client.open(seed()).await.unwrap();
    let view = client.view(session).await.unwrap();
    assert_eq!(
        view.notice,
        Some(Notice::Error("Could not load items: Transport error: down".into()))
    );

    let view = client.search(session, "tea").await.unwrap();
    assert!(view.search.suggestions.is_empty());
    assert_eq!(view.lines.len(), 1);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_edits_refused_while_submitting() {
    let api = MockOrderApi::new();
    api.expect_fetch_catalog().return_ok(catalog());
    let (client, handle) = start(&api, None);
    let session = client.open(seed()).await.unwrap();

    let outcome = client
        .inner()
        .perform_action(session, EditAction::BeginSubmit)
        .await
        .unwrap();
    assert!(matches!(outcome, EditOutcome::ReadyToSubmit { .. }));

    assert_eq!(client.increment(session, 0).await, Err(EditorError::SubmitInProgress));
    assert_eq!(client.submit(session).await, Err(EditorError::SubmitInProgress));

    let outcome = client
        .inner()
        .perform_action(session, EditAction::CompleteSubmit(Ok(())))
        .await
        .unwrap();
    assert!(matches!(outcome, EditOutcome::Saved(_)));

    let stray = client
        .inner()
        .perform_action(session, EditAction::CompleteSubmit(Ok(())))
        .await;
    assert!(stray.is_err());

    let view = client.view(session).await.unwrap();
    assert_eq!(view.lines.get(0).map(|l| l.quantity), Some(2));
    api.verify_fetches_only();

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_refresh_flips_only_on_confirmed_update() {
    let api = MockOrderApi::new();
    api.expect_fetch_catalog().return_ok(catalog());
    api.expect_update_order().return_err(ApiError::rejected("nope"));
    api.expect_update_order().return_ok();
    let (refresh, mut refreshed) = watch::channel(false);
    let (client, handle) = start(&api, Some(refresh));

    let session = client.open(seed()).await.unwrap();

    assert!(client.submit(session).await.is_err());
    assert!(!refreshed.has_changed().unwrap());

    client.submit(session).await.unwrap();
    assert!(refreshed.has_changed().unwrap());
    assert!(*refreshed.borrow_and_update());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_cancel_makes_no_update() {
    let api = MockOrderApi::new();
    api.expect_fetch_catalog().return_ok(catalog());
    let (client, handle) = start(&api, None);

    let session = client.open(seed()).await.unwrap();
    client.remove_line(session, 0).await.unwrap();
    client.cancel(session).await.unwrap();

    assert_eq!(
        client.view(session).await,
        Err(EditorError::SessionNotFound(session.to_string()))
    );
    assert_eq!(
        client.increment(session, 0).await,
        Err(EditorError::SessionNotFound(session.to_string()))
    );
    assert_eq!(api.calls(), vec![Call::FetchCatalog]);

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_future_date_with_one_line_is_submitted() {
    let api = MockOrderApi::new();
    api.expect_fetch_catalog().return_ok(catalog());
    api.expect_update_order().return_ok();
    let (client, handle) = start(&api, None);

    let tomorrow = today().succ_opt().map(format_date).expect("tomorrow exists");
    let order = Order::new(
        "ord-9",
        Some(tomorrow.clone()),
        json!([{ "item": "Coffee", "quantity": 2, "price": 3 }]),
    );
    let session = client.open(order).await.unwrap();

    let view = client.submit(session).await.unwrap();
    assert!(view.saved);

    let updates = api.updates();
    assert_eq!(updates.len(), 1);
    let (id, update) = &updates[0];
    assert_eq!(id, &OrderId::from("ord-9"));
    assert_eq!(update.date, tomorrow);
    assert_eq!(update.total_amount, 6.0);
    assert_eq!(update.total_amount, update.order_details.iter().map(|l| l.total).sum::<f64>());
    api.verify();

    drop(client);
    handle.await.unwrap();
}

/// An order service whose update call waits until the test releases it.
#[derive(Clone, Default)]
struct GatedOrderApi {
    release: Arc<Notify>,
    updates: Arc<AtomicUsize>,
}

#[async_trait]
impl OrderApi for GatedOrderApi {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, ApiError> {
        Ok(catalog())
    }

    async fn update_order(&self, _id: &OrderId, _update: OrderUpdate) -> Result<(), ApiError> {
        self.release.notified().await;
        self.updates.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

async fn wait_until_editing(client: &EditorClient, session: SessionId) -> SessionView {
    for _ in 0..200 {
        let view = client.view(session).await.unwrap();
        if view.phase == Phase::Editing {
            return view;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("Session never left Submitting");
}

#[tokio::test]
async fn test_abandoned_submit_still_completes() {
    let api = GatedOrderApi::default();
    let (client, handle) = start_with(Arc::new(api.clone()), None);
    let session = client.open(seed()).await.unwrap();

    // The caller gives up while the update call is still in flight
    let abandoned = timeout(Duration::from_millis(50), client.submit(session)).await;
    assert!(abandoned.is_err());

    let view = client.view(session).await.unwrap();
    assert_eq!(view.phase, Phase::Submitting);
    assert_eq!(client.increment(session, 0).await, Err(EditorError::SubmitInProgress));

    api.release.notify_one();
    let view = wait_until_editing(&client, session).await;
    assert!(view.saved);
    assert_eq!(api.updates.load(Ordering::SeqCst), 1);

    // Edits and resubmits work again
    let view = client.increment(session, 0).await.unwrap();
    assert_eq!(view.lines.get(0).map(|l| l.quantity), Some(3));

    api.release.notify_one();
    let view = client.submit(session).await.unwrap();
    assert!(view.saved);
    assert_eq!(view.total, 6.0);
    assert_eq!(api.updates.load(Ordering::SeqCst), 2);

    drop(client);
    handle.await.unwrap();
}
