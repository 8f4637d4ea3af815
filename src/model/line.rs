use serde::{Deserialize, Serialize};

/// One catalog item plus quantity, unit price and line total within an order.
///
/// Lines built through [`OrderLine::new`] or [`OrderLine::with_quantity`]
/// always satisfy `total == price * quantity` and `quantity >= 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: String,
    pub quantity: u32,
    pub price: f64,
    pub total: f64,
}

impl OrderLine {
    /// Builds a canonical line. Quantity is floored at 1, a negative or
    /// non-finite price becomes 0.
    pub fn new(item: impl Into<String>, quantity: u32, price: f64) -> Self {
        let quantity = quantity.max(1);
        let price = if price.is_finite() && price > 0.0 { price } else { 0.0 };
        Self {
            item: item.into(),
            quantity,
            price,
            total: price * f64::from(quantity),
        }
    }

    /// Returns a copy of this line carrying `quantity` and a recomputed total.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self::new(self.item.clone(), quantity, self.price)
    }

    /// Case-insensitive item comparison.
    pub fn is_for(&self, item: &str) -> bool {
        self.item.to_uppercase() == item.to_uppercase()
    }
}
