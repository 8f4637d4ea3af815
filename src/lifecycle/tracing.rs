//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the subscriber for the binary. Log levels come
//! from `RUST_LOG`; the output is compact and hides module paths
//! (`with_target(false)`), since every event already carries a
//! `session_type` or `order_id` field.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup, sessions opened and closed, shutdown
//! - **Edits**: each action with its session id, at `debug`
//! - **Submission**: the payload total, the service's answer, validation blocks
//! - **Catalog**: item count on open, or the failure that left it empty
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Full seeds and actions
//! RUST_LOG=debug cargo run
//!
//! # Only the session framework
//! RUST_LOG=order_editor::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info` an end-to-end run reads:
//!
//! ```text
//! INFO Actor started session_type="EditSession"
//! INFO Catalog loaded order_id=ord-1001 items=4 lines=2
//! INFO Opened session_type="EditSession" id=session_1 open=1
//! INFO edit:submit: Sending update_order order_id=ord-1001 total_amount=31.5
//! INFO Order updated id=ord-1001 total_amount=31.5
//! INFO Order saved order_id=ord-1001
//! ```
//!
//! Client methods are `#[instrument]`ed; the actor runs in its own task, so
//! its events are not nested under the caller's span.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Events carry session_type / order_id fields instead
        .compact() // Compact format shows spans inline (e.g., "edit:submit")
        .init();
}
