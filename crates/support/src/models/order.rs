//! Order records.

use chrono::NaiveDate;
use coralbay_core::{CustomerId, Email, OrderId, OrderStatus};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single ordered line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: String,
    /// Always >= 1.
    pub quantity: u32,
    /// Unit price, never negative.
    pub unit_price: Decimal,
}

/// An order record.
///
/// The contact fields are a snapshot captured at order time, not a live
/// join against the customer record. `total` is the authoritative value;
/// it is never recomputed from the line items.
///
/// The optional trailing fields are populated only by their triggering
/// transition (cancellation, refund, address update) and are never cleared
/// by other operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub customer_email: Email,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub order_date: NaiveDate,
    /// Present only once the order has shipped.
    pub tracking_number: Option<String>,
    pub estimated_delivery: NaiveDate,
    pub shipping_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancellation_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_updated_date: Option<NaiveDate>,
}
