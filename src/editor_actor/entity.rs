//! SessionEntity implementation for [`EditSession`].
//!
//! This is where the editor's state machine lives:
//!
//! ```text
//! Editing --BeginSubmit (valid)--> Submitting --CompleteSubmit--> Editing
//!    ^                                                   (saved, or notice on failure)
//!    +-- every other action, and BeginSubmit that fails validation
//! ```
//!
//! Closing the session is the caller's move and is allowed in either phase.

use crate::api::ApiError;
use crate::editor_actor::{
    EditAction, EditOutcome, EditSession, EditorContext, EditorError, Notice, Phase, SessionId,
};
use crate::framework::SessionEntity;
use crate::ledger::date::{today, validate_date};
use crate::ledger::{Field, Search, ValidationError};
use crate::model::Order;
use async_trait::async_trait;
use tracing::{debug, info, warn};

const SAVED_MESSAGE: &str = "Order updated successfully!";

#[async_trait]
impl SessionEntity for EditSession {
    type Id = SessionId;
    type Seed = Order;
    type Action = EditAction;
    type ActionResult = EditOutcome;
    type Context = EditorContext;
    type Error = EditorError;

    fn open(id: SessionId, seed: Order) -> Result<Self, Self::Error> {
        Ok(Self::new(id, seed))
    }

    /// Loads the catalog. A failed fetch does not fail the open: the session
    /// shows a notice and searches find nothing until it is reopened.
    async fn on_open(&mut self, ctx: &EditorContext) -> Result<(), Self::Error> {
        match ctx.api.fetch_catalog().await {
            Ok(items) => {
                info!(order_id = %self.order_id, items = items.len(), lines = self.lines.len(), "Catalog loaded");
                self.catalog = items;
            }
            Err(e) => {
                let error = EditorError::CatalogUnavailable(e);
                warn!(order_id = %self.order_id, error = %error, "Catalog fetch failed");
                self.notice = Some(Notice::Error(error.to_string()));
            }
        }
        Ok(())
    }

    async fn on_close(&self, _ctx: &EditorContext) -> Result<(), Self::Error> {
        debug!(order_id = %self.order_id, saved = self.saved, "Discarding edit session");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: EditAction,
        ctx: &EditorContext,
    ) -> Result<EditOutcome, Self::Error> {
        if self.phase == Phase::Submitting && !matches!(action, EditAction::CompleteSubmit(_)) {
            return Err(EditorError::SubmitInProgress);
        }

        match action {
            EditAction::Search(text) => {
                self.search = self.search.type_text(&self.catalog, &text);
            }
            EditAction::SelectSuggestion(index) => {
                self.search = self.checked(self.search.select(index))?;
                self.item_error = None;
            }
            EditAction::SetPendingQuantity(raw) => {
                self.search = self.search.with_quantity(&raw);
            }
            EditAction::AddSelected => {
                let added = self.lines.add(self.search.selected.as_ref(), self.search.quantity);
                self.lines = self.checked(added)?;
                self.search = Search::default();
                self.item_error = None;
            }
            EditAction::RemoveLine(index) => {
                self.lines = self.checked(self.lines.remove(index))?;
            }
            EditAction::SetQuantity { index, raw } => {
                self.lines = self.checked(self.lines.set_quantity(index, &raw))?;
            }
            EditAction::Increment(index) => {
                self.lines = self.checked(self.lines.increment(index))?;
            }
            EditAction::Decrement(index) => {
                self.lines = self.checked(self.lines.decrement(index))?;
            }
            EditAction::SetDate(date) => {
                self.date = date;
            }
            EditAction::BeginSubmit => {
                self.validate(ctx)?;
                self.phase = Phase::Submitting;
                let update = self.update_payload();
                info!(order_id = %self.order_id, total_amount = update.total_amount, lines = update.order_details.len(), "Submitting");
                return Ok(EditOutcome::ReadyToSubmit {
                    order_id: self.order_id.clone(),
                    update,
                });
            }
            EditAction::CompleteSubmit(result) => return self.complete_submit(result, ctx),
            EditAction::DismissNotice => {
                self.notice = None;
            }
        }

        Ok(EditOutcome::Updated(self.view()))
    }
}

impl EditSession {
    /// Records a validation failure where it is displayed and passes it on.
    fn checked<T>(&mut self, result: Result<T, ValidationError>) -> Result<T, EditorError> {
        result.map_err(|e| {
            self.surface(&e);
            EditorError::Validation(e)
        })
    }

    fn surface(&mut self, error: &ValidationError) {
        let message = error.to_string();
        match error.field() {
            Field::Date => self.date_error = Some(message),
            Field::Item => self.item_error = Some(message),
            Field::Notice => self.notice = Some(Notice::Error(message)),
        }
    }

    /// Both checks run so the form can show every problem at once; the date
    /// problem is the one returned.
    fn validate(&mut self, ctx: &EditorContext) -> Result<(), EditorError> {
        let date = validate_date(&self.date, today(), ctx.config.allow_future_dates).map(|_| ());
        let lines = if self.lines.is_empty() {
            Err(ValidationError::EmptyOrder)
        } else {
            Ok(())
        };

        self.date_error = None;
        for error in [&date, &lines].into_iter().filter_map(|r| r.as_ref().err()) {
            self.surface(error);
        }
        date.and(lines).map_err(|e| {
            debug!(order_id = %self.order_id, error = %e, "Submit blocked by validation");
            EditorError::Validation(e)
        })
    }

    fn complete_submit(
        &mut self,
        result: Result<(), ApiError>,
        ctx: &EditorContext,
    ) -> Result<EditOutcome, EditorError> {
        if self.phase != Phase::Submitting {
            return Err(EditorError::NoSubmissionInFlight);
        }
        self.phase = Phase::Editing;

        match result {
            Ok(()) => {
                self.saved = true;
                self.notice = Some(Notice::Success(SAVED_MESSAGE.to_string()));
                if let Some(refresh) = &ctx.refresh {
                    refresh.send_modify(|flag| *flag = !*flag);
                }
                info!(order_id = %self.order_id, "Order saved");
                Ok(EditOutcome::Saved(self.view()))
            }
            Err(e) => {
                let error = EditorError::Submission(e);
                warn!(order_id = %self.order_id, error = %error, "Submit failed");
                self.notice = Some(Notice::Error(error.to_string()));
                Err(error)
            }
        }
    }
}
