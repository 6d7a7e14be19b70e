//! # Observability & Tracing
//!
//! Tracing setup shared by every binary and test harness built on the store
//! actors.
//!
//! The subscriber uses a compact format with module targets hidden
//! (`with_target(false)`) – the actor loop already records `entity_type` as a
//! structured field, which carries more signal than a module path. Log levels
//! come from `RUST_LOG`:
//!
//! ```bash
//! # Compact logs
//! RUST_LOG=info cargo run
//!
//! # Full payloads at function entry points
//! RUST_LOG=debug cargo run
//! ```
//!
//! What gets traced:
//! - **Actor lifecycle**: startup, shutdown, and final record counts
//! - **Store operations**: Create, Ensure, Get, Query, Update, and Actions
//! - **Request flow**: hierarchical spans from `#[instrument]`ed client
//!   methods
//! - **Errors**: structured fields with record ids and failure reasons

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Entity type is logged as a field instead
        .compact()
        .init();
}
