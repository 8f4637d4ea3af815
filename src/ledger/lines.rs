//! The order line collection and its mutations.

use crate::ledger::quantity::parse_quantity;
use crate::ledger::{total, ValidationError};
use crate::model::{CatalogItem, OrderLine};
use serde::{Deserialize, Serialize};

/// An ordered, immutable collection of order lines.
///
/// Every mutation borrows the current collection and returns a new one, so
/// a snapshot handed out earlier never changes underneath its holder. Item
/// names are unique case-insensitively among lines added through [`add`](Self::add).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderLines(Vec<OrderLine>);

impl OrderLines {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_slice(&self) -> &[OrderLine] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OrderLine> {
        self.0.iter()
    }

    pub fn get(&self, index: usize) -> Option<&OrderLine> {
        self.0.get(index)
    }

    pub fn contains_item(&self, item: &str) -> bool {
        self.0.iter().any(|line| line.is_for(item))
    }

    /// Sum of all line totals.
    pub fn total(&self) -> f64 {
        total(&self.0)
    }

    /// Appends a line for the selected catalog item.
    ///
    /// # Errors
    /// - [`ValidationError::ItemSelectionRequired`] when nothing is selected.
    /// - [`ValidationError::DuplicateItem`] when the item already has a line.
    ///   Duplicates are rejected, never merged into the existing line.
    pub fn add(&self, selected: Option<&CatalogItem>, quantity: u32) -> Result<Self, ValidationError> {
        let item = selected.ok_or(ValidationError::ItemSelectionRequired)?;
        if self.contains_item(&item.name) {
            return Err(ValidationError::DuplicateItem(item.name.clone()));
        }
        let mut lines = self.0.clone();
        lines.push(OrderLine::new(item.name.clone(), quantity, item.price));
        Ok(Self(lines))
    }

    /// Removes the line at `index`.
    pub fn remove(&self, index: usize) -> Result<Self, ValidationError> {
        self.check(index)?;
        let mut lines = self.0.clone();
        lines.remove(index);
        Ok(Self(lines))
    }

    /// Sets a line's quantity from raw input text.
    ///
    /// Empty text is the transient state of a cleared input and leaves the
    /// collection as it is.
    pub fn set_quantity(&self, index: usize, raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Ok(self.clone());
        }
        let quantity = parse_quantity(raw);
        self.replace(index, |line| line.with_quantity(quantity))
    }

    pub fn increment(&self, index: usize) -> Result<Self, ValidationError> {
        self.replace(index, |line| line.with_quantity(line.quantity.saturating_add(1)))
    }

    /// Lowers a line's quantity by one, never below 1.
    pub fn decrement(&self, index: usize) -> Result<Self, ValidationError> {
        self.replace(index, |line| line.with_quantity(line.quantity.saturating_sub(1)))
    }

    fn replace(
        &self,
        index: usize,
        f: impl FnOnce(&OrderLine) -> OrderLine,
    ) -> Result<Self, ValidationError> {
        self.check(index)?;
        let mut lines = self.0.clone();
        lines[index] = f(&self.0[index]);
        Ok(Self(lines))
    }

    fn check(&self, index: usize) -> Result<(), ValidationError> {
        if index < self.0.len() {
            Ok(())
        } else {
            Err(ValidationError::UnknownLine(index))
        }
    }

    pub fn into_vec(self) -> Vec<OrderLine> {
        self.0
    }
}

impl FromIterator<OrderLine> for OrderLines {
    fn from_iter<I: IntoIterator<Item = OrderLine>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a OrderLines {
    type Item = &'a OrderLine;
    type IntoIter = std::slice::Iter<'a, OrderLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
