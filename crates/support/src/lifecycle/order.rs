//! Order lifecycle engine.
//!
//! Statuses move `Pending → Confirmed → Processing → Shipped → Delivered`,
//! with `Cancelled` and `Refunded` reachable as side exits:
//!
//! - cancel: legal unless the order is already shipped, delivered, or
//!   cancelled (the last is an idempotent no-op, not an error)
//! - refund: legal only for delivered or cancelled orders
//! - address update: legal until the order ships
//!
//! Every operation runs its check-and-mutate sequence under the store's
//! exclusive order access, and takes `today` from the caller so the engine
//! itself stays clock-free.

use chrono::NaiveDate;
use coralbay_core::{OrderId, OrderStatus};
use rust_decimal::Decimal;

use crate::error::ServiceError;
use crate::models::Order;
use crate::store::EntityStore;

/// Outcome of a cancellation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The order was cancelled by this call.
    Cancelled(Order),
    /// The order was already cancelled; nothing was changed.
    AlreadyCancelled(Order),
}

impl CancelOutcome {
    /// The order record after the call, whichever variant applied.
    #[must_use]
    pub const fn order(&self) -> &Order {
        match self {
            Self::Cancelled(order) | Self::AlreadyCancelled(order) => order,
        }
    }
}

/// Whether a refund covered the whole order total.
///
/// Output-only classification; it is not stored on the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefundKind {
    Full,
    Partial,
}

impl std::fmt::Display for RefundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => f.write_str("Full"),
            Self::Partial => f.write_str("Partial"),
        }
    }
}

/// Result of a successful refund.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundReceipt {
    pub order: Order,
    pub amount: Decimal,
    pub kind: RefundKind,
}

/// Result of a successful shipping-address update.
///
/// The previous address is returned to the caller but not retained on the
/// order record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressChange {
    pub order: Order,
    pub previous_address: String,
}

/// Enforces the order status state machine.
pub struct OrderLifecycle<'a> {
    store: &'a EntityStore,
}

impl<'a> OrderLifecycle<'a> {
    /// Create an engine over the given store.
    #[must_use]
    pub const fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Pure status read; no guard.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an unknown order.
    pub fn status(&self, id: &OrderId) -> Result<Order, ServiceError> {
        self.store
            .order(id)
            .ok_or_else(|| ServiceError::not_found(crate::error::EntityKind::Order, id.as_str()))
    }

    /// Cancel an order.
    ///
    /// Shipped and delivered orders reject; an already-cancelled order
    /// returns [`CancelOutcome::AlreadyCancelled`] without mutation. On
    /// success the status becomes `Cancelled` and the cancellation reason
    /// and date are recorded. Refund fields are never touched here.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown order; `IllegalTransition` when the
    /// order has shipped or been delivered.
    pub fn cancel(
        &self,
        id: &OrderId,
        reason: &str,
        today: NaiveDate,
    ) -> Result<CancelOutcome, ServiceError> {
        self.store.update_order(id, |order| match order.status {
            OrderStatus::Shipped | OrderStatus::Delivered => {
                Err(ServiceError::IllegalTransition {
                    order_id: id.clone(),
                    status: order.status,
                    action: "cancel",
                })
            }
            OrderStatus::Cancelled => Ok(CancelOutcome::AlreadyCancelled(order.clone())),
            _ => {
                order.status = OrderStatus::Cancelled;
                order.cancellation_reason = Some(reason.to_owned());
                order.cancellation_date = Some(today);
                Ok(CancelOutcome::Cancelled(order.clone()))
            }
        })
    }

    /// Refund an order.
    ///
    /// Legal only for delivered or cancelled orders. When `amount` is
    /// omitted it defaults to the stored order total. An amount exceeding
    /// the total rejects without mutation. The receipt classifies the
    /// refund `Full` when the amount equals the total, `Partial` otherwise.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown order; `IllegalTransition` when the
    /// status is not delivered or cancelled; `InvalidArgument` when the
    /// requested amount exceeds the order total.
    pub fn refund(
        &self,
        id: &OrderId,
        amount: Option<Decimal>,
        reason: &str,
        today: NaiveDate,
    ) -> Result<RefundReceipt, ServiceError> {
        self.store.update_order(id, |order| {
            if !matches!(order.status, OrderStatus::Delivered | OrderStatus::Cancelled) {
                return Err(ServiceError::IllegalTransition {
                    order_id: id.clone(),
                    status: order.status,
                    action: "refund",
                });
            }

            let amount = amount.unwrap_or(order.total);
            if amount > order.total {
                return Err(ServiceError::InvalidArgument(format!(
                    "refund amount {amount} exceeds order total {}",
                    order.total
                )));
            }

            let kind = if amount == order.total {
                RefundKind::Full
            } else {
                RefundKind::Partial
            };

            order.status = OrderStatus::Refunded;
            order.refund_amount = Some(amount);
            order.refund_reason = Some(reason.to_owned());
            order.refund_date = Some(today);

            Ok(RefundReceipt {
                order: order.clone(),
                amount,
                kind,
            })
        })
    }

    /// Update the shipping address of an order that has not shipped yet.
    ///
    /// On success the new address replaces the old one, the update date is
    /// recorded, and the previous address is returned in the
    /// [`AddressChange`].
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown order; `IllegalTransition` when the
    /// order has shipped or been delivered.
    pub fn update_address(
        &self,
        id: &OrderId,
        new_address: &str,
        today: NaiveDate,
    ) -> Result<AddressChange, ServiceError> {
        self.store.update_order(id, |order| {
            if matches!(order.status, OrderStatus::Shipped | OrderStatus::Delivered) {
                return Err(ServiceError::IllegalTransition {
                    order_id: id.clone(),
                    status: order.status,
                    action: "update the shipping address of",
                });
            }

            let previous_address =
                std::mem::replace(&mut order.shipping_address, new_address.to_owned());
            order.address_updated_date = Some(today);

            Ok(AddressChange {
                order: order.clone(),
                previous_address,
            })
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use coralbay_core::{CustomerId, Email};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn today() -> NaiveDate {
        date(2025, 7, 1)
    }

    fn order_in(status: OrderStatus) -> Order {
        Order {
            id: OrderId::new("ORD-100"),
            customer_id: CustomerId::new("CUST-1"),
            customer_email: Email::parse("c@example.com").unwrap(),
            customer_name: "Customer".into(),
            items: vec![],
            total: Decimal::new(69_999, 2),
            status,
            order_date: date(2025, 6, 25),
            tracking_number: None,
            estimated_delivery: date(2025, 6, 30),
            shipping_address: "456 Oak Ave".into(),
            cancellation_reason: None,
            cancellation_date: None,
            refund_amount: None,
            refund_reason: None,
            refund_date: None,
            address_updated_date: None,
        }
    }

    fn store_with(status: OrderStatus) -> EntityStore {
        let store = EntityStore::new();
        store.insert_order(order_in(status));
        store
    }

    fn stored(store: &EntityStore) -> Order {
        store.order(&OrderId::new("ORD-100")).unwrap()
    }

    // -------------------------------------------------------------------
    // cancel
    // -------------------------------------------------------------------

    #[test]
    fn test_cancel_pending_order() {
        let store = store_with(OrderStatus::Pending);
        let outcome = OrderLifecycle::new(&store)
            .cancel(&OrderId::new("ORD-100"), "Changed my mind", today())
            .unwrap();

        let CancelOutcome::Cancelled(order) = outcome else {
            panic!("expected fresh cancellation");
        };
        assert_eq!(order.status, OrderStatus::Cancelled);
        assert_eq!(order.cancellation_reason.as_deref(), Some("Changed my mind"));
        assert_eq!(order.cancellation_date, Some(today()));
        // Refund fields stay unset.
        assert!(order.refund_amount.is_none());
        assert!(order.refund_reason.is_none());
        assert!(order.refund_date.is_none());
        assert_eq!(stored(&store), order);
    }

    #[test]
    fn test_cancel_shipped_rejects_without_mutation() {
        for status in [OrderStatus::Shipped, OrderStatus::Delivered] {
            let store = store_with(status);
            let before = stored(&store);

            let err = OrderLifecycle::new(&store)
                .cancel(&OrderId::new("ORD-100"), "too late", today())
                .unwrap_err();

            assert!(matches!(err, ServiceError::IllegalTransition { .. }));
            assert_eq!(stored(&store), before);
        }
    }

    #[test]
    fn test_cancel_already_cancelled_is_idempotent() {
        let store = store_with(OrderStatus::Pending);
        let engine = OrderLifecycle::new(&store);
        engine
            .cancel(&OrderId::new("ORD-100"), "first", today())
            .unwrap();
        let before = stored(&store);

        let outcome = engine
            .cancel(&OrderId::new("ORD-100"), "second", date(2025, 7, 2))
            .unwrap();

        assert!(matches!(outcome, CancelOutcome::AlreadyCancelled(_)));
        // The second call must not have re-applied anything.
        let after = stored(&store);
        assert_eq!(after, before);
        assert_eq!(after.cancellation_reason.as_deref(), Some("first"));
    }

    #[test]
    fn test_cancel_unknown_order() {
        let store = EntityStore::new();
        let err = OrderLifecycle::new(&store)
            .cancel(&OrderId::new("ORD-404"), "reason", today())
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    // -------------------------------------------------------------------
    // refund
    // -------------------------------------------------------------------

    #[test]
    fn test_refund_processing_rejects() {
        let store = store_with(OrderStatus::Processing);
        let before = stored(&store);

        let err = OrderLifecycle::new(&store)
            .refund(&OrderId::new("ORD-100"), None, "why", today())
            .unwrap_err();

        assert!(matches!(err, ServiceError::IllegalTransition { .. }));
        assert_eq!(stored(&store), before);
    }

    #[test]
    fn test_refund_delivered_defaults_to_full_total() {
        let store = store_with(OrderStatus::Delivered);
        let receipt = OrderLifecycle::new(&store)
            .refund(&OrderId::new("ORD-100"), None, "Customer request", today())
            .unwrap();

        assert_eq!(receipt.amount, Decimal::new(69_999, 2));
        assert_eq!(receipt.kind, RefundKind::Full);
        assert_eq!(receipt.order.status, OrderStatus::Refunded);
        assert_eq!(receipt.order.refund_amount, Some(Decimal::new(69_999, 2)));
        assert_eq!(receipt.order.refund_date, Some(today()));
    }

    #[test]
    fn test_refund_lesser_amount_is_partial() {
        let store = store_with(OrderStatus::Cancelled);
        let receipt = OrderLifecycle::new(&store)
            .refund(
                &OrderId::new("ORD-100"),
                Some(Decimal::new(10_000, 2)),
                "partial return",
                today(),
            )
            .unwrap();

        assert_eq!(receipt.kind, RefundKind::Partial);
        assert_eq!(receipt.order.refund_amount, Some(Decimal::new(10_000, 2)));
    }

    #[test]
    fn test_refund_exceeding_total_rejects_without_mutation() {
        let store = store_with(OrderStatus::Delivered);
        let before = stored(&store);

        let err = OrderLifecycle::new(&store)
            .refund(
                &OrderId::new("ORD-100"),
                Some(Decimal::new(70_000, 2)),
                "too much",
                today(),
            )
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidArgument(_)));
        assert_eq!(stored(&store), before);
    }

    #[test]
    fn test_refund_exact_total_is_full() {
        let store = store_with(OrderStatus::Delivered);
        let receipt = OrderLifecycle::new(&store)
            .refund(
                &OrderId::new("ORD-100"),
                Some(Decimal::new(69_999, 2)),
                "exact",
                today(),
            )
            .unwrap();
        assert_eq!(receipt.kind, RefundKind::Full);
    }

    // -------------------------------------------------------------------
    // update_address
    // -------------------------------------------------------------------

    #[test]
    fn test_update_address_returns_previous() {
        let store = store_with(OrderStatus::Processing);
        let change = OrderLifecycle::new(&store)
            .update_address(&OrderId::new("ORD-100"), "789 New Rd", today())
            .unwrap();

        assert_eq!(change.previous_address, "456 Oak Ave");
        assert_eq!(change.order.shipping_address, "789 New Rd");
        assert_eq!(change.order.address_updated_date, Some(today()));
        assert_eq!(stored(&store).shipping_address, "789 New Rd");
    }

    #[test]
    fn test_update_address_after_shipping_rejects() {
        for status in [OrderStatus::Shipped, OrderStatus::Delivered] {
            let store = store_with(status);
            let before = stored(&store);

            let err = OrderLifecycle::new(&store)
                .update_address(&OrderId::new("ORD-100"), "789 New Rd", today())
                .unwrap_err();

            assert!(matches!(err, ServiceError::IllegalTransition { .. }));
            assert_eq!(stored(&store), before);
        }
    }

    // -------------------------------------------------------------------
    // end-to-end: address update → cancel → refund
    // -------------------------------------------------------------------

    #[test]
    fn test_processing_order_full_journey() {
        let store = store_with(OrderStatus::Processing);
        let engine = OrderLifecycle::new(&store);
        let id = OrderId::new("ORD-100");

        let change = engine.update_address(&id, "789 New Rd", today()).unwrap();
        assert_eq!(change.previous_address, "456 Oak Ave");

        let outcome = engine.cancel(&id, "Customer request", today()).unwrap();
        assert_eq!(outcome.order().status, OrderStatus::Cancelled);

        let receipt = engine.refund(&id, None, "Customer request", today()).unwrap();
        assert_eq!(receipt.amount, Decimal::new(69_999, 2));
        assert_eq!(receipt.kind, RefundKind::Full);

        let final_order = stored(&store);
        assert_eq!(final_order.status, OrderStatus::Refunded);
        assert_eq!(final_order.shipping_address, "789 New Rd");
        assert_eq!(final_order.cancellation_reason.as_deref(), Some("Customer request"));
    }
}
