//! Ticket lifecycle engine.
//!
//! Tickets are created `Open` and unassigned. No tool advances ticket
//! status; the `InProgress → Resolved → Closed` progression belongs to the
//! agent desk, which has no surface here.

use chrono::NaiveDate;
use coralbay_core::{CustomerId, OrderId, Priority, TicketId, TicketStatus};

use crate::error::{EntityKind, ServiceError};
use crate::models::Ticket;
use crate::store::EntityStore;

/// Arguments for creating a ticket.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub customer_id: CustomerId,
    pub subject: String,
    pub description: String,
    pub priority: Priority,
    /// Related order, if any. Stored as-is without checking that the
    /// order exists.
    pub order_id: Option<OrderId>,
}

/// Creates and reads support tickets.
pub struct TicketLifecycle<'a> {
    store: &'a EntityStore,
}

impl<'a> TicketLifecycle<'a> {
    /// Create an engine over the given store.
    #[must_use]
    pub const fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Create a new ticket.
    ///
    /// The customer must exist; the check runs before ID allocation so a
    /// failed request never consumes a sequence ordinal. The customer's
    /// email and name are snapshotted onto the ticket, and the created
    /// and last-updated dates are both set to `today`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` when the customer is unknown.
    pub fn create(&self, new: NewTicket, today: NaiveDate) -> Result<Ticket, ServiceError> {
        let customer = self.store.customer(&new.customer_id).ok_or_else(|| {
            ServiceError::not_found(EntityKind::Customer, new.customer_id.as_str())
        })?;

        let ticket = Ticket {
            id: self.store.next_ticket_id(),
            customer_id: new.customer_id,
            customer_email: customer.email,
            customer_name: customer.name,
            subject: new.subject,
            description: new.description,
            status: TicketStatus::Open,
            priority: new.priority,
            created_date: today,
            last_updated: today,
            agent_assigned: None,
            order_id: new.order_id,
        };

        self.store.insert_ticket(ticket.clone());
        tracing::info!(ticket_id = %ticket.id, customer_id = %ticket.customer_id, "Created support ticket");
        Ok(ticket)
    }

    /// Pure ticket read.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown ticket.
    pub fn ticket(&self, id: &TicketId) -> Result<Ticket, ServiceError> {
        self.store
            .ticket(id)
            .ok_or_else(|| ServiceError::not_found(EntityKind::Ticket, id.as_str()))
    }
}
