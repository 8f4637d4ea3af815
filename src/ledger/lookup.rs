//! Catalog lookup and the state of the item search box.

use crate::ledger::quantity::parse_quantity;
use crate::ledger::ValidationError;
use crate::model::CatalogItem;

/// Returns the catalog items whose name contains `query`, ignoring case.
///
/// An empty query yields no suggestions rather than the whole catalog.
pub fn filter(items: &[CatalogItem], query: &str) -> Vec<CatalogItem> {
    if query.is_empty() {
        return Vec::new();
    }
    let needle = query.to_uppercase();
    items
        .iter()
        .filter(|item| item.name.to_uppercase().contains(&needle))
        .cloned()
        .collect()
}

/// What the item search box currently shows and holds.
///
/// `quantity` is the pending quantity for the next `Add`.
#[derive(Debug, Clone, PartialEq)]
pub struct Search {
    pub text: String,
    pub suggestions: Vec<CatalogItem>,
    pub selected: Option<CatalogItem>,
    pub quantity: u32,
}

impl Default for Search {
    fn default() -> Self {
        Self {
            text: String::new(),
            suggestions: Vec::new(),
            selected: None,
            quantity: 1,
        }
    }
}

impl Search {
    /// New search text typed by the user. Drops the current selection and
    /// refreshes suggestions; the text is echoed upper-cased.
    pub fn type_text(&self, catalog: &[CatalogItem], input: &str) -> Self {
        Self {
            text: input.to_uppercase(),
            suggestions: filter(catalog, input),
            selected: None,
            quantity: self.quantity,
        }
    }

    /// Picks the suggestion at `index`. Clears the suggestion list and resets
    /// the pending quantity to 1.
    pub fn select(&self, index: usize) -> Result<Self, ValidationError> {
        let item = self
            .suggestions
            .get(index)
            .cloned()
            .ok_or(ValidationError::UnknownSuggestion(index))?;
        Ok(Self {
            text: item.name.clone(),
            suggestions: Vec::new(),
            selected: Some(item),
            quantity: 1,
        })
    }

    /// Pending quantity from raw input text. Empty text is ignored.
    pub fn with_quantity(&self, raw: &str) -> Self {
        if raw.is_empty() {
            return self.clone();
        }
        Self {
            quantity: parse_quantity(raw),
            ..self.clone()
        }
    }
}
