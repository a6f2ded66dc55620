//! Coral Bay Core - Shared domain types.
//!
//! This crate provides the domain vocabulary used across the Coral Bay
//! support backend:
//! - `support` - Customer-service tool backend (orders, tickets, customers)
//! - `integration-tests` - End-to-end test harness
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no locking, no HTTP.
//! Entity records, the in-memory store, and the lifecycle rules live in
//! the `support` crate; this crate holds the primitives they share.
//!
//! # Modules
//!
//! - [`types`] - Prefixed entity IDs, status enums, email addresses, loyalty tiers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
