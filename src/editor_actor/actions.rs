//! Actions applied to an [`EditSession`](crate::editor_actor::EditSession).
//!
//! Every action is handled by [`SessionEntity::handle_action`](crate::framework::SessionEntity::handle_action)
//! and runs to completion before the next one is read.

use crate::api::ApiError;
use crate::editor_actor::SessionView;
use crate::model::{OrderId, OrderUpdate};

/// Edits a user can make to an open session.
#[derive(Debug, Clone)]
pub enum EditAction {
    /// New text in the item search box.
    Search(String),
    /// Pick the suggestion at this index.
    SelectSuggestion(usize),
    /// Raw text of the quantity input for the next line.
    SetPendingQuantity(String),
    /// Add the selected item as a new line.
    AddSelected,
    RemoveLine(usize),
    /// Raw text of a line's quantity input.
    SetQuantity { index: usize, raw: String },
    Increment(usize),
    Decrement(usize),
    SetDate(String),
    /// Validate and enter `Submitting`.
    BeginSubmit,
    /// Result of the update call started by `BeginSubmit`.
    CompleteSubmit(Result<(), ApiError>),
    /// Clear the blocking notice.
    DismissNotice,
}

/// Outcomes of [`EditAction`]s.
#[derive(Debug, Clone)]
pub enum EditOutcome {
    /// The session after the edit.
    Updated(SessionView),
    /// Validation passed; this payload must now be sent to the order service.
    ReadyToSubmit { order_id: OrderId, update: OrderUpdate },
    /// The order service accepted the update.
    Saved(SessionView),
}
