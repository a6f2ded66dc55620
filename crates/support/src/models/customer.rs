//! Customer records.

use chrono::NaiveDate;
use coralbay_core::{CustomerId, Email, LoyaltyTier};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer record.
///
/// Customers are provisioned outside this service; the tool surface only
/// reads them. The aggregate counters (`total_orders`, `total_spent`) are
/// maintained by the (out of scope) order-ingest pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: Email,
    pub phone: String,
    pub registration_date: NaiveDate,
    pub loyalty_tier: LoyaltyTier,
    pub total_orders: u32,
    pub total_spent: Decimal,
}
