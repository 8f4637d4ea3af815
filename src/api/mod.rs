//! The persistence boundary: the remote order service the editor talks to.
//!
//! The editor only needs two calls, expressed by the [`OrderApi`] trait:
//! fetching the item catalog and saving an edited order. Transport is not
//! this crate's concern; implementations decide how the calls travel.
//!
//! - [`memory::InMemoryOrderApi`] keeps a catalog and an order table in process.
//! - [`mock::MockOrderApi`] answers from scripted expectations for tests.

pub mod memory;
pub mod mock;

pub use memory::InMemoryOrderApi;
pub use mock::{Call, MockOrderApi};

use crate::model::{CatalogItem, OrderId, OrderUpdate};
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by, or on the way to, the order service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The service answered and reported an error.
    #[error("{message}")]
    Rejected { message: String },

    /// The call did not complete (connection, serialization, timeout...).
    #[error("Transport error: {0}")]
    Transport(String),
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            message: message.into(),
        }
    }
}

/// Operations the editor consumes from the order service.
///
/// `update_order` is expected to be idempotent: resubmitting the same payload
/// for the same order is safe.
#[async_trait]
pub trait OrderApi: Send + Sync + 'static {
    /// Fetches the full item catalog. Catalogs are small; filtering happens locally.
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, ApiError>;

    /// Saves the edited order.
    async fn update_order(&self, id: &OrderId, update: OrderUpdate) -> Result<(), ApiError>;
}
