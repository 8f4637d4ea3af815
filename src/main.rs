//! # Order Editor Demo
//!
//! Opens one order with legacy line data against the in-memory order service,
//! edits it, and saves it.

use order_editor::api::InMemoryOrderApi;
use order_editor::lifecycle::{setup_tracing, EditorConfig, EditorSystem};
use order_editor::model::{CatalogItem, Order, OrderId};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = EditorConfig::from_env();
    info!(?config, "Starting order editor demo");

    let api = Arc::new(InMemoryOrderApi::new(vec![
        CatalogItem::new("Espresso", 2.5),
        CatalogItem::new("Earl Grey", 3.0),
        CatalogItem::new("Green Tea", 2.75),
        CatalogItem::new("Croissant", 1.8),
    ]));

    // Historical lines: a string quantity, a line without a price
    let order_id = OrderId::from("ord-1001");
    api.insert_order(Order::new(
        order_id.clone(),
        None,
        json!([
            { "item": "Espresso", "quantity": "2", "price": 2.5, "total": 5 },
            { "item": "Croissant", "quantity": 3, "total": 5.4 }
        ]),
    ))
    .await;

    let seed = api
        .order(&order_id)
        .await
        .ok_or_else(|| format!("Order not found: {}", order_id))?;

    let (system, mut refresh) = EditorSystem::with_refresh(api.clone(), config);
    let editor = system.editor_client.clone();

    let session = editor.open(seed).await.map_err(|e| e.to_string())?;
    let view = editor.view(session).await.map_err(|e| e.to_string())?;
    info!(%session, lines = view.lines.len(), total = view.total, "Session opened");

    let span = tracing::info_span!("edit");
    async {
        let view = editor.search(session, "tea").await?;
        info!(suggestions = view.search.suggestions.len(), "Searched");

        editor.select_suggestion(session, 0).await?;
        editor.set_pending_quantity(session, "2").await?;
        let view = editor.add_selected(session).await?;
        info!(lines = view.lines.len(), total = view.total, "Line added");

        editor.increment(session, 0).await?;
        editor.set_quantity(session, 1, "").await?;

        // Picking an item already on the order is refused
        editor.search(session, "espresso").await?;
        editor.select_suggestion(session, 0).await?;
        if let Err(e) = editor.add_selected(session).await {
            warn!(error = %e, "Add refused");
        }

        let view = editor.submit(session).await?;
        info!(total = view.total, notice = ?view.notice, "Submitted");
        Ok::<_, order_editor::editor_actor::EditorError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| {
        error!(error = %e, "Edit failed");
        e.to_string()
    })?;

    if refresh.has_changed().unwrap_or(false) {
        info!(flag = *refresh.borrow_and_update(), "Refresh signalled");
    }

    editor.cancel(session).await.map_err(|e| e.to_string())?;
    if let Some(saved) = api.order(&order_id).await {
        info!(date = ?saved.date, total_amount = saved.total_amount, "Stored order");
    }

    drop(editor);
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
