//! Support ticket records.

use chrono::NaiveDate;
use coralbay_core::{CustomerId, Email, OrderId, Priority, TicketId, TicketStatus};
use serde::{Deserialize, Serialize};

/// A support ticket.
///
/// Created through the ticket lifecycle engine, which assigns the
/// sequential ID and snapshots the customer contact fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub customer_id: CustomerId,
    pub customer_email: Email,
    pub customer_name: String,
    pub subject: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: Priority,
    pub created_date: NaiveDate,
    pub last_updated: NaiveDate,
    pub agent_assigned: Option<String>,
    /// Related order, if the caller referenced one. Accepted as-is; a
    /// dangling reference is tolerated.
    pub order_id: Option<OrderId>,
}
