//! Customer search and order-history retrieval.
//!
//! The store keeps no secondary indexes, so alternate-key lookups (email,
//! phone) are linear scans over the customer snapshot. An exact customer
//! ID always wins over the scan; otherwise the first matching customer in
//! store iteration order is returned.

use coralbay_core::CustomerId;

use crate::error::{EntityKind, ServiceError};
use crate::models::{Customer, Order};
use crate::store::EntityStore;

/// How many recent orders accompany a customer search hit.
const SEARCH_RECENT_ORDERS: usize = 3;

/// Search keys for customer lookup. At least one must be present.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    pub email: Option<String>,
    pub customer_id: Option<CustomerId>,
    pub phone: Option<String>,
}

impl SearchParams {
    const fn is_empty(&self) -> bool {
        self.email.is_none() && self.customer_id.is_none() && self.phone.is_none()
    }

    /// The key used for a not-found report: the ID if given, else the
    /// email, else the phone.
    fn describe(&self) -> String {
        self.customer_id
            .as_ref()
            .map(|id| id.as_str().to_owned())
            .or_else(|| self.email.clone())
            .or_else(|| self.phone.clone())
            .unwrap_or_default()
    }
}

/// A matched customer plus their most recent orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerMatch {
    pub customer: Customer,
    /// Up to three most recent orders, newest first.
    pub recent_orders: Vec<Order>,
}

/// A customer's order history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderHistory {
    pub customer: Customer,
    /// Total matching orders, independent of the requested limit.
    pub total: usize,
    /// Up to `limit` most recent orders, newest first.
    pub showing: Vec<Order>,
}

/// Alternate-key customer lookup and order-history reads.
pub struct CustomerDirectory<'a> {
    store: &'a EntityStore,
}

impl<'a> CustomerDirectory<'a> {
    /// Create a directory over the given store.
    #[must_use]
    pub const fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Find a customer by ID, email, or phone.
    ///
    /// Resolution order: exact `customer_id` match first; otherwise the
    /// first customer whose email matches case-insensitively or whose
    /// phone matches exactly. The hit carries the customer's three most
    /// recent orders, newest first.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when no search key is supplied; `NotFound` when
    /// nothing matches.
    pub fn search(&self, params: &SearchParams) -> Result<CustomerMatch, ServiceError> {
        if params.is_empty() {
            return Err(ServiceError::InvalidArgument(
                "provide at least one of: email, customer_id, phone".into(),
            ));
        }

        let customer = params
            .customer_id
            .as_ref()
            .and_then(|id| self.store.customer(id))
            .or_else(|| self.scan(params))
            .ok_or_else(|| ServiceError::not_found(EntityKind::Customer, params.describe()))?;

        let mut orders = self.orders_of(&customer.id);
        orders.truncate(SEARCH_RECENT_ORDERS);

        Ok(CustomerMatch {
            customer,
            recent_orders: orders,
        })
    }

    /// A customer's orders: total count plus up to `limit` most recent.
    ///
    /// `limit` is taken as-is; a non-positive value yields an empty
    /// listing while the total count is unaffected.
    ///
    /// # Errors
    ///
    /// `NotFound` when the customer is unknown.
    pub fn order_history(
        &self,
        customer_id: &CustomerId,
        limit: i64,
    ) -> Result<OrderHistory, ServiceError> {
        let customer = self
            .store
            .customer(customer_id)
            .ok_or_else(|| ServiceError::not_found(EntityKind::Customer, customer_id.as_str()))?;

        let mut orders = self.orders_of(customer_id);
        let total = orders.len();
        orders.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(OrderHistory {
            customer,
            total,
            showing: orders,
        })
    }

    /// First customer matching email (case-insensitive) or phone (exact),
    /// in store iteration order.
    fn scan(&self, params: &SearchParams) -> Option<Customer> {
        self.store.customers().into_iter().find(|candidate| {
            params
                .email
                .as_deref()
                .is_some_and(|email| candidate.email.eq_ignore_case(email))
                || params
                    .phone
                    .as_deref()
                    .is_some_and(|phone| candidate.phone == phone)
        })
    }

    /// All orders owned by `customer_id`, newest first. The sort is
    /// stable, so date ties keep store iteration order.
    fn orders_of(&self, customer_id: &CustomerId) -> Vec<Order> {
        let mut orders: Vec<Order> = self
            .store
            .orders()
            .into_iter()
            .filter(|order| &order.customer_id == customer_id)
            .collect();
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        orders
    }
}
