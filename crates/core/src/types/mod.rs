//! Core types for Coral Bay.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod status;
pub mod tier;

pub use email::{Email, EmailError};
pub use id::{CustomerId, OrderId, TicketId};
pub use status::{EnumParseError, OrderStatus, Priority, TicketStatus};
pub use tier::LoyaltyTier;
