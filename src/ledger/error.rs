//! Validation errors raised by the ledger and by submit-time checks.

use thiserror::Error;

/// Where a validation message belongs when a presentation layer renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Shown next to the date input.
    Date,
    /// Shown next to the item search input.
    Item,
    /// Shown as a blocking notice.
    Notice,
}

/// Recoverable, local errors. None of them change session state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    /// `Add` was requested without a catalog item selected.
    #[error("Please select an item.")]
    ItemSelectionRequired,

    /// The selected item already has a line in this order.
    #[error("Item already added: {0}")]
    DuplicateItem(String),

    /// A line index that does not address a current line.
    #[error("No order line at index {0}")]
    UnknownLine(usize),

    /// A suggestion index that does not address a current suggestion.
    #[error("No suggestion at index {0}")]
    UnknownSuggestion(usize),

    /// Submit was requested with an empty date.
    #[error("Date is required.")]
    DateRequired,

    /// The date is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The date lies after today.
    #[error("Date cannot be in the future: {0}")]
    FutureDate(String),

    /// Submit was requested with no order lines.
    #[error("Please add at least one item.")]
    EmptyOrder,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            ValidationError::ItemSelectionRequired
            | ValidationError::DuplicateItem(_)
            | ValidationError::UnknownSuggestion(_) => Field::Item,
            ValidationError::DateRequired
            | ValidationError::InvalidDate(_)
            | ValidationError::FutureDate(_) => Field::Date,
            ValidationError::UnknownLine(_) | ValidationError::EmptyOrder => Field::Notice,
        }
    }
}
