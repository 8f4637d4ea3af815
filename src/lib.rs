#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Order Editor
//!
//! > **The engine behind an order-edit form.**
//!
//! Open an existing order, pick items from a catalog, adjust quantities, and
//! save the result back to the order service. Every line keeps
//! `total == price * quantity`, and the order total is recomputed from the
//! lines on every edit and again right before it is sent.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Pure ledger, stateful sessions
//! The line-item rules (reconciling legacy data, adding, removing,
//! re-quantifying, totalling) live in [`ledger`] as pure functions that return
//! a new collection. The stateful part, one open editor per order, lives in a
//! session actor that applies those functions one request at a time.
//!
//! ### Why an actor?
//! - **Atomic edits**: the actor owns every session, so an edit always runs to
//!   completion before the next one is read. No locks.
//! - **Serialized I/O**: the catalog fetch and the submit state machine are
//!   ordered with the edits around them.
//! - **Type Safety**: callers see typed methods on [`EditorClient`](clients::EditorClient),
//!   never raw messages.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! Each layer has its own `thiserror` enum: [`ValidationError`](ledger::ValidationError)
//! for local input problems, [`ApiError`](api::ApiError) for the order
//! service, and [`EditorError`](editor_actor::EditorError) wrapping both.
//! Errors that cross the actor boundary are recovered with their original type.
//!
//! ### 2. Two-Phase Submit
//! `submit` first asks the session to validate and enter `Submitting`, then
//! calls the order service, then reports the result back. While the call is
//! in flight the session refuses every other edit. A failure returns it to
//! `Editing` with the lines untouched.
//!
//! ### 3. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Rules ([`ledger`], [`model`])
//! Plain data and pure functions: [`reconcile`](ledger::reconcile),
//! [`filter`](ledger::filter), [`OrderLines`](ledger::OrderLines), [`total`](ledger::total).
//!
//! ### 2. The Engine ([`framework`])
//! The generic [`SessionActor`](framework::SessionActor) and the
//! [`SessionEntity`](framework::SessionEntity) trait a session type implements.
//!
//! ### 3. The Implementation ([`editor_actor`])
//! [`EditSession`](editor_actor::EditSession): the Editing/Submitting state
//! machine and the edit actions.
//!
//! ### 4. The Interface ([`clients`])
//! [`EditorClient`](clients::EditorClient), one method per edit.
//!
//! ### 5. The Boundary ([`api`])
//! The [`OrderApi`](api::OrderApi) trait plus an in-memory backend and a mock.
//!
//! ### 6. The Orchestrator ([`lifecycle`])
//! [`EditorSystem`](lifecycle::EditorSystem) starts the actor and wires in the
//! order service, [`EditorConfig`](lifecycle::EditorConfig) and the refresh signal.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Run the tests
//! cargo test
//! ```

pub mod api;
pub mod clients;
pub mod editor_actor;
pub mod framework;
pub mod ledger;
pub mod lifecycle;
pub mod model;
