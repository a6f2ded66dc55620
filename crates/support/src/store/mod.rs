//! In-memory entity store.
//!
//! The store exclusively owns the customer, order, and ticket maps. Reads
//! hand out clones; mutation goes through [`EntityStore::update_order`],
//! which holds the map's write lock across the caller's whole
//! read-validate-write sequence so a legality check can never interleave
//! with another writer. Ticket identifiers come from an explicit atomic
//! counter, never from the current collection size.
//!
//! Identifiers follow the `ORD-` / `TKT-` / `CUST-` prefix convention, but
//! the store does not validate prefixes; callers generate conforming IDs.
//! There are no secondary indexes - email/phone lookups are linear scans
//! in the query layer.

pub mod seed;

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU32, Ordering};

use coralbay_core::{CustomerId, OrderId, TicketId};

use crate::error::{EntityKind, ServiceError};
use crate::models::{Customer, Order, Ticket};

const POISONED: &str = "entity store lock poisoned - indicates a panic in another thread";

/// Thread-safe in-memory holder of customer, order, and ticket records.
///
/// Created at process start, torn down at process exit. Nothing is
/// persisted across restarts.
#[derive(Debug)]
pub struct EntityStore {
    customers: RwLock<HashMap<CustomerId, Customer>>,
    orders: RwLock<HashMap<OrderId, Order>>,
    tickets: RwLock<HashMap<TicketId, Ticket>>,
    /// Next ticket ordinal. Allocation is a `fetch_add`, so concurrent
    /// creations always receive distinct IDs.
    ticket_seq: AtomicU32,
}

impl EntityStore {
    /// Create an empty store. The ticket sequence starts at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            customers: RwLock::new(HashMap::new()),
            orders: RwLock::new(HashMap::new()),
            tickets: RwLock::new(HashMap::new()),
            ticket_seq: AtomicU32::new(1),
        }
    }

    // -------------------------------------------------------------------
    // Lookups (clone-out)
    // -------------------------------------------------------------------

    /// Look up a customer by ID.
    #[must_use]
    pub fn customer(&self, id: &CustomerId) -> Option<Customer> {
        self.customers.read().expect(POISONED).get(id).cloned()
    }

    /// Look up an order by ID.
    #[must_use]
    pub fn order(&self, id: &OrderId) -> Option<Order> {
        self.orders.read().expect(POISONED).get(id).cloned()
    }

    /// Look up a ticket by ID.
    #[must_use]
    pub fn ticket(&self, id: &TicketId) -> Option<Ticket> {
        self.tickets.read().expect(POISONED).get(id).cloned()
    }

    /// Snapshot of all customers, in map iteration order.
    #[must_use]
    pub fn customers(&self) -> Vec<Customer> {
        self.customers.read().expect(POISONED).values().cloned().collect()
    }

    /// Snapshot of all orders, in map iteration order.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.orders.read().expect(POISONED).values().cloned().collect()
    }

    /// Number of tickets currently held.
    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.tickets.read().expect(POISONED).len()
    }

    // -------------------------------------------------------------------
    // Inserts (insert or overwrite)
    // -------------------------------------------------------------------

    /// Insert or overwrite a customer.
    pub fn insert_customer(&self, customer: Customer) {
        self.customers
            .write()
            .expect(POISONED)
            .insert(customer.id.clone(), customer);
    }

    /// Insert or overwrite an order.
    pub fn insert_order(&self, order: Order) {
        self.orders
            .write()
            .expect(POISONED)
            .insert(order.id.clone(), order);
    }

    /// Insert or overwrite a ticket.
    pub fn insert_ticket(&self, ticket: Ticket) {
        self.tickets
            .write()
            .expect(POISONED)
            .insert(ticket.id.clone(), ticket);
    }

    // -------------------------------------------------------------------
    // Exclusive mutation
    // -------------------------------------------------------------------

    /// Run `f` against the order under the map's write lock.
    ///
    /// The lock is held for the full closure, so the legality check and
    /// the mutation it guards are a single exclusive section. A closure
    /// that returns `Err` must leave the record untouched - the lifecycle
    /// engines rely on that to keep rejections side-effect free.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no order exists under `id`; otherwise
    /// whatever `f` returns.
    pub fn update_order<T>(
        &self,
        id: &OrderId,
        f: impl FnOnce(&mut Order) -> Result<T, ServiceError>,
    ) -> Result<T, ServiceError> {
        let mut orders = self.orders.write().expect(POISONED);
        let order = orders
            .get_mut(id)
            .ok_or_else(|| ServiceError::not_found(EntityKind::Order, id.as_str()))?;
        f(order)
    }

    /// Allocate the next sequential ticket ID.
    ///
    /// Callers must perform their validation (customer existence) before
    /// allocating, so failed requests never consume an ordinal.
    #[must_use]
    pub fn next_ticket_id(&self) -> TicketId {
        TicketId::from_seq(self.ticket_seq.fetch_add(1, Ordering::Relaxed))
    }

    /// The ordinal the next allocated ticket will receive.
    #[must_use]
    pub fn peek_ticket_seq(&self) -> u32 {
        self.ticket_seq.load(Ordering::Relaxed)
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
