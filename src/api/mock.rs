//! # Mock Order Service
//!
//! [`MockOrderApi`] answers [`OrderApi`] calls from a queue of scripted
//! expectations, the same way the session framework's tests script actor
//! replies. It lets tests drive the editor through failures that are hard to
//! produce with a real backend (rejections, transport faults) and check
//! exactly which calls were made.
//!
//! ```rust
//! use order_editor::api::{ApiError, MockOrderApi, OrderApi};
//! use order_editor::model::CatalogItem;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mock = MockOrderApi::new();
//!     mock.expect_fetch_catalog().return_ok(vec![CatalogItem::new("Tea", 2.0)]);
//!     mock.expect_update_order().return_err(ApiError::Transport("timeout".into()));
//!
//!     let catalog = mock.fetch_catalog().await.unwrap();
//!     assert_eq!(catalog.len(), 1);
//!
//!     mock.verify_fetches_only();
//! }
//! ```
//!
//! Calls arriving with no matching expectation get a transport error and are
//! reported by [`MockOrderApi::verify`].

use crate::api::{ApiError, OrderApi};
use crate::model::{CatalogItem, OrderId, OrderUpdate};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

enum Expectation {
    FetchCatalog {
        response: Result<Vec<CatalogItem>, ApiError>,
    },
    UpdateOrder {
        response: Result<(), ApiError>,
    },
}

/// A recorded call made against the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    FetchCatalog,
    UpdateOrder { id: OrderId, update: OrderUpdate },
}

/// An [`OrderApi`] driven by expectations.
///
/// Clones share the same expectation queue and call log, so a test can hand
/// one clone to the editor and keep another for assertions.
#[derive(Clone, Default)]
pub struct MockOrderApi {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
    calls: Arc<Mutex<Vec<Call>>>,
    unexpected: Arc<Mutex<Vec<String>>>,
}

impl MockOrderApi {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects a `fetch_catalog` call.
    pub fn expect_fetch_catalog(&self) -> FetchCatalogExpectationBuilder {
        FetchCatalogExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `update_order` call.
    pub fn expect_update_order(&self) -> UpdateOrderExpectationBuilder {
        UpdateOrderExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Payloads of every `update_order` call received so far.
    pub fn updates(&self) -> Vec<(OrderId, OrderUpdate)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::UpdateOrder { id, update } => Some((id, update)),
                Call::FetchCatalog => None,
            })
            .collect()
    }

    /// Verifies that all expectations were met and nothing unexpected arrived.
    pub fn verify(&self) {
        let unexpected = self.unexpected.lock().unwrap();
        if !unexpected.is_empty() {
            panic!("Unexpected calls: {:?}", *unexpected);
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    /// Verifies that no `update_order` call was made and nothing unexpected arrived.
    pub fn verify_fetches_only(&self) {
        let updates = self.updates();
        if !updates.is_empty() {
            panic!("Expected no order updates, got {}", updates.len());
        }
        let unexpected = self.unexpected.lock().unwrap();
        if !unexpected.is_empty() {
            panic!("Unexpected calls: {:?}", *unexpected);
        }
    }

    fn next(&self) -> Option<Expectation> {
        self.expectations.lock().unwrap().pop_front()
    }

    fn unexpected(&self, call: &str) -> ApiError {
        self.unexpected.lock().unwrap().push(call.to_string());
        ApiError::Transport(format!("Unexpected call: {}", call))
    }
}

#[async_trait]
impl OrderApi for MockOrderApi {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogItem>, ApiError> {
        self.calls.lock().unwrap().push(Call::FetchCatalog);
        match self.next() {
            Some(Expectation::FetchCatalog { response }) => response,
            _ => Err(self.unexpected("fetch_catalog")),
        }
    }

    async fn update_order(&self, id: &OrderId, update: OrderUpdate) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(Call::UpdateOrder {
            id: id.clone(),
            update,
        });
        match self.next() {
            Some(Expectation::UpdateOrder { response }) => response,
            _ => Err(self.unexpected("update_order")),
        }
    }
}

/// Builder for `fetch_catalog` expectations.
pub struct FetchCatalogExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl FetchCatalogExpectationBuilder {
    /// Sets the expectation to return a catalog.
    pub fn return_ok(self, items: Vec<CatalogItem>) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::FetchCatalog { response: Ok(items) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::FetchCatalog {
            response: Err(error),
        });
    }
}

/// Builder for `update_order` expectations.
pub struct UpdateOrderExpectationBuilder {
    expectations: Arc<Mutex<VecDeque<Expectation>>>,
}

impl UpdateOrderExpectationBuilder {
    /// Sets the expectation to accept the update.
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::UpdateOrder { response: Ok(()) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: ApiError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::UpdateOrder {
            response: Err(error),
        });
    }
}
