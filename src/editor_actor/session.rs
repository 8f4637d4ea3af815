use crate::ledger::date::{format_date, today};
use crate::ledger::{reconcile, OrderLines, Search};
use crate::model::{CatalogItem, Order, OrderId, OrderUpdate};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of an open edit session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

impl From<u32> for SessionId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "session_{}", self.0)
    }
}

/// Submission state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    /// An update call is in flight. Only its completion is accepted.
    Submitting,
}

/// A message that blocks the form until dismissed.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Error(String),
    Success(String),
}

/// One open editor over one order.
///
/// The seed order's lines are reconciled on open; from then on all edits go
/// through [`OrderLines`], so every line keeps `total == price * quantity`.
/// The catalog is fetched once per session and never refreshed.
#[derive(Debug, Clone)]
pub struct EditSession {
    pub(crate) id: SessionId,
    pub(crate) order_id: OrderId,
    pub(crate) date: String,
    pub(crate) lines: OrderLines,
    pub(crate) catalog: Vec<CatalogItem>,
    pub(crate) search: Search,
    pub(crate) phase: Phase,
    pub(crate) date_error: Option<String>,
    pub(crate) item_error: Option<String>,
    pub(crate) notice: Option<Notice>,
    pub(crate) saved: bool,
}

impl EditSession {
    /// Starts a session from a seed order. A missing or empty date becomes today.
    pub fn new(id: SessionId, order: Order) -> Self {
        let date = order
            .date
            .filter(|date| !date.is_empty())
            .unwrap_or_else(|| format_date(today()));
        Self {
            id,
            order_id: order.id,
            date,
            lines: reconcile(&order.order_details),
            catalog: Vec::new(),
            search: Search::default(),
            phase: Phase::Editing,
            date_error: None,
            item_error: None,
            notice: None,
            saved: false,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    pub fn lines(&self) -> &OrderLines {
        &self.lines
    }

    pub fn total(&self) -> f64 {
        self.lines.total()
    }

    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The payload for the order service, with the total recomputed from the current lines.
    pub fn update_payload(&self) -> OrderUpdate {
        OrderUpdate {
            date: self.date.clone(),
            total_amount: self.lines.total(),
            order_details: self.lines.clone().into_vec(),
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            order_id: self.order_id.clone(),
            date: self.date.clone(),
            lines: self.lines.clone(),
            total: self.lines.total(),
            search: self.search.clone(),
            phase: self.phase,
            date_error: self.date_error.clone(),
            item_error: self.item_error.clone(),
            notice: self.notice.clone(),
            saved: self.saved,
        }
    }
}

/// What a presentation layer needs to render a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub id: SessionId,
    pub order_id: OrderId,
    pub date: String,
    pub lines: OrderLines,
    pub total: f64,
    pub search: Search,
    pub phase: Phase,
    /// Field-level message for the date input.
    pub date_error: Option<String>,
    /// Field-level message for the item search input.
    pub item_error: Option<String>,
    pub notice: Option<Notice>,
    /// The order service accepted at least one update from this session.
    pub saved: bool,
}
