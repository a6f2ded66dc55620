//! Integration tests for Coral Bay Support.
//!
//! # Running Tests
//!
//! ```bash
//! # In-process router tests (no server needed)
//! cargo test -p coralbay-integration-tests
//!
//! # Live-server tests (start the backend first)
//! cargo run -p coralbay-support &
//! cargo test -p coralbay-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `tool_surface` - In-process tests driving the router with `oneshot`
//! - `live_server` - End-to-end tests against a running backend (ignored
//!   by default)

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use coralbay_support::config::SupportConfig;
use coralbay_support::routes;
use coralbay_support::state::AppState;
use coralbay_support::store::{EntityStore, seed::seed_demo_data};

/// Build a router over a freshly seeded store.
///
/// Every call gets its own store, so tests can mutate freely without
/// interfering with each other.
#[must_use]
pub fn seeded_router() -> Router {
    let store = EntityStore::new();
    seed_demo_data(&store);
    routes::router().with_state(AppState::new(SupportConfig::default(), store))
}

/// Base URL for the live support backend (configurable via environment).
#[must_use]
pub fn support_base_url() -> String {
    std::env::var("SUPPORT_BASE_URL").unwrap_or_else(|_| "http://localhost:3002".to_string())
}
