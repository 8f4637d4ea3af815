use serde::{Deserialize, Serialize};

/// An entry of the item catalog the editor picks lines from.
///
/// Catalog items are immutable snapshots: once fetched for a session they are
/// never modified. Names are unique case-insensitively within one fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    pub price: f64,
}

impl CatalogItem {
    /// Creates a new catalog item.
    ///
    /// # Arguments
    /// * `name` - Display name, also the key order lines refer to
    /// * `price` - Unit price
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}
