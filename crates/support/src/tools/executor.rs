//! Tool executor implementations.
//!
//! Each method parses its arguments from the input JSON, runs the
//! corresponding store/lifecycle operation with today's date, and renders
//! the outcome. Domain rejections become an `{"error": ...}` payload in
//! the result string so every invocation answers the caller.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde_json::{Value, json};

use coralbay_core::{CustomerId, OrderId, Priority, TicketId};

use crate::error::{ServiceError, ToolError};
use crate::lifecycle::{CancelOutcome, NewTicket, OrderLifecycle, TicketLifecycle};
use crate::models::{Order, Ticket};
use crate::query::{CustomerDirectory, SearchParams};

use super::ToolExecutor;

fn require_str<'v>(input: &'v Value, field: &str) -> Result<&'v str, ToolError> {
    input
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolError::BadArguments(format!("missing required field: {field}")))
}

fn optional_str<'v>(input: &'v Value, field: &str) -> Option<&'v str> {
    input.get(field).and_then(Value::as_str)
}

/// Parse an optional decimal argument.
///
/// JSON numbers are parsed from their literal text so `699.99` stays
/// exactly `699.99`; strings are accepted too.
fn optional_decimal(input: &Value, field: &str) -> Result<Option<Decimal>, ToolError> {
    match input.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .to_string()
            .parse::<Decimal>()
            .map(Some)
            .map_err(|e| ToolError::BadArguments(format!("field {field}: {e}"))),
        Some(Value::String(s)) => s
            .parse::<Decimal>()
            .map(Some)
            .map_err(|e| ToolError::BadArguments(format!("field {field}: {e}"))),
        Some(_) => Err(ToolError::BadArguments(format!(
            "field {field} must be a number"
        ))),
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn render(value: &Value) -> Result<String, ToolError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a domain rejection into the tool result payload.
fn rejection(error: &ServiceError) -> Result<String, ToolError> {
    render(&json!({
        "error": {
            "kind": error.kind(),
            "message": error.to_string(),
        }
    }))
}

/// One-line order summary for listings.
fn order_summary(order: &Order) -> Value {
    json!({
        "order_id": order.id,
        "order_date": order.order_date,
        "status": order.status,
        "total": order.total,
    })
}

fn ticket_detail(ticket: &Ticket) -> Value {
    json!({
        "ticket_id": ticket.id,
        "customer_id": ticket.customer_id,
        "customer_name": ticket.customer_name,
        "customer_email": ticket.customer_email,
        "subject": ticket.subject,
        "description": ticket.description,
        "status": ticket.status,
        "priority": ticket.priority,
        "created_date": ticket.created_date,
        "last_updated": ticket.last_updated,
        "agent_assigned": ticket.agent_assigned,
        "order_id": ticket.order_id,
    })
}

impl ToolExecutor<'_> {
    // -------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------

    pub(super) fn get_order_status(&self, input: &Value) -> Result<String, ToolError> {
        let id = OrderId::new(require_str(input, "order_id")?);

        match OrderLifecycle::new(self.store).status(&id) {
            Ok(order) => render(&json!({
                "order": {
                    "order_id": order.id,
                    "customer_name": order.customer_name,
                    "customer_email": order.customer_email,
                    "order_date": order.order_date,
                    "status": order.status,
                    "tracking_number": order.tracking_number,
                    "tracking_available": order.tracking_number.is_some(),
                    "estimated_delivery": order.estimated_delivery,
                    "items": order.items,
                    "total": order.total,
                    "shipping_address": order.shipping_address,
                }
            })),
            Err(e) => rejection(&e),
        }
    }

    pub(super) fn cancel_order(&self, input: &Value) -> Result<String, ToolError> {
        let id = OrderId::new(require_str(input, "order_id")?);
        let reason = optional_str(input, "reason").unwrap_or("Customer request");

        match OrderLifecycle::new(self.store).cancel(&id, reason, today()) {
            Ok(outcome) => {
                let already_cancelled = matches!(outcome, CancelOutcome::AlreadyCancelled(_));
                let order = outcome.order();
                tracing::info!(order_id = %order.id, already_cancelled, "Cancel order");
                render(&json!({
                    "cancellation": {
                        "order_id": order.id,
                        "customer_name": order.customer_name,
                        "customer_email": order.customer_email,
                        "original_total": order.total,
                        "reason": order.cancellation_reason,
                        "cancellation_date": order.cancellation_date,
                        "already_cancelled": already_cancelled,
                    }
                }))
            }
            Err(e) => rejection(&e),
        }
    }

    pub(super) fn process_refund(&self, input: &Value) -> Result<String, ToolError> {
        let id = OrderId::new(require_str(input, "order_id")?);
        let amount = optional_decimal(input, "amount")?;
        let reason = optional_str(input, "reason").unwrap_or("Customer request");

        match OrderLifecycle::new(self.store).refund(&id, amount, reason, today()) {
            Ok(receipt) => {
                tracing::info!(order_id = %receipt.order.id, amount = %receipt.amount, "Processed refund");
                render(&json!({
                    "refund": {
                        "order_id": receipt.order.id,
                        "customer_name": receipt.order.customer_name,
                        "customer_email": receipt.order.customer_email,
                        "refund_type": receipt.kind.to_string(),
                        "refund_amount": receipt.amount,
                        "original_total": receipt.order.total,
                        "reason": receipt.order.refund_reason,
                        "refund_date": receipt.order.refund_date,
                    }
                }))
            }
            Err(e) => rejection(&e),
        }
    }

    pub(super) fn update_shipping_address(&self, input: &Value) -> Result<String, ToolError> {
        let id = OrderId::new(require_str(input, "order_id")?);
        let new_address = require_str(input, "new_address")?;

        match OrderLifecycle::new(self.store).update_address(&id, new_address, today()) {
            Ok(change) => {
                tracing::info!(order_id = %change.order.id, "Updated shipping address");
                render(&json!({
                    "address_update": {
                        "order_id": change.order.id,
                        "customer_name": change.order.customer_name,
                        "previous_address": change.previous_address,
                        "new_address": change.order.shipping_address,
                        "updated_date": change.order.address_updated_date,
                    }
                }))
            }
            Err(e) => rejection(&e),
        }
    }

    // -------------------------------------------------------------------
    // Customers
    // -------------------------------------------------------------------

    pub(super) fn search_customer(&self, input: &Value) -> Result<String, ToolError> {
        let params = SearchParams {
            email: optional_str(input, "email").map(str::to_owned),
            customer_id: optional_str(input, "customer_id").map(CustomerId::new),
            phone: optional_str(input, "phone").map(str::to_owned),
        };

        match CustomerDirectory::new(self.store).search(&params) {
            Ok(hit) => {
                let recent: Vec<Value> = hit.recent_orders.iter().map(order_summary).collect();
                render(&json!({
                    "customer": hit.customer,
                    "recent_orders": recent,
                }))
            }
            Err(e) => rejection(&e),
        }
    }

    pub(super) fn get_customer_orders(&self, input: &Value) -> Result<String, ToolError> {
        let id = CustomerId::new(require_str(input, "customer_id")?);
        // Taken as-is: a non-positive limit yields an empty listing while
        // the count is still reported.
        let limit = input
            .get("limit")
            .and_then(Value::as_i64)
            .unwrap_or(10);

        match CustomerDirectory::new(self.store).order_history(&id, limit) {
            Ok(history) => {
                let showing: Vec<Value> = history.showing.iter().map(order_summary).collect();
                render(&json!({
                    "customer": {
                        "customer_id": history.customer.id,
                        "name": history.customer.name,
                        "registration_date": history.customer.registration_date,
                        "loyalty_tier": history.customer.loyalty_tier,
                        "total_spent": history.customer.total_spent,
                    },
                    "total_found": history.total,
                    "orders": showing,
                }))
            }
            Err(e) => rejection(&e),
        }
    }

    // -------------------------------------------------------------------
    // Tickets
    // -------------------------------------------------------------------

    pub(super) fn create_support_ticket(&self, input: &Value) -> Result<String, ToolError> {
        let customer_id = CustomerId::new(require_str(input, "customer_id")?);
        let subject = require_str(input, "subject")?.to_owned();
        let description = require_str(input, "description")?.to_owned();
        let order_id = optional_str(input, "order_id").map(OrderId::new);

        let priority = match optional_str(input, "priority")
            .unwrap_or("medium")
            .parse::<Priority>()
        {
            Ok(priority) => priority,
            Err(e) => return rejection(&ServiceError::InvalidArgument(e.to_string())),
        };

        let args = NewTicket {
            customer_id,
            subject,
            description,
            priority,
            order_id,
        };

        match TicketLifecycle::new(self.store).create(args, today()) {
            Ok(ticket) => render(&json!({ "ticket": ticket_detail(&ticket) })),
            Err(e) => rejection(&e),
        }
    }

    pub(super) fn get_ticket_status(&self, input: &Value) -> Result<String, ToolError> {
        let id = TicketId::new(require_str(input, "ticket_id")?);

        match TicketLifecycle::new(self.store).ticket(&id) {
            Ok(ticket) => render(&json!({ "ticket": ticket_detail(&ticket) })),
            Err(e) => rejection(&e),
        }
    }
}
