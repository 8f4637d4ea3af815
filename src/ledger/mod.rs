//! Order line ledger: the pure business rules of the editor.
//!
//! Nothing in here performs I/O or holds shared state. Every operation takes
//! the current value and returns a new one, so the session actor can apply
//! them atomically and a caller can never observe a half-applied mutation.
//!
//! - [`reconcile`] turns historical, loosely typed order lines into [`OrderLine`](crate::model::OrderLine)s.
//! - [`lookup`] filters the catalog and tracks the search box selection.
//! - [`OrderLines`] carries the add / remove / quantity mutations.
//! - [`total`] aggregates line totals.
//! - [`date`] validates the order date.

pub mod date;
pub mod error;
pub mod lines;
pub mod lookup;
pub mod quantity;
pub mod reconcile;
pub mod totals;

pub use error::*;
pub use lines::OrderLines;
pub use lookup::{filter, Search};
pub use reconcile::reconcile;
pub use totals::total;
