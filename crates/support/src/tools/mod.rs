//! Support tool definitions and executor.
//!
//! Each tool is a named operation with a JSON Schema argument object and a
//! single JSON-string result. The executor is the only place that touches
//! the wall clock; the lifecycle engines receive the date as an argument.
//!
//! Domain rejections (unknown order, illegal transition, bad priority)
//! are part of the tool result payload - the caller always gets a
//! response. Only a malformed invocation (unknown tool, missing required
//! argument) surfaces as a [`ToolError`].

mod customers;
mod executor;
mod orders;
mod tickets;

pub use customers::customer_tools;
pub use orders::order_tools;
pub use tickets::ticket_tools;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::ToolError;
use crate::store::EntityStore;

/// A tool definition surfaced to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    /// Name of the tool.
    pub name: String,
    /// Description of what the tool does.
    pub description: String,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: serde_json::Value,
}

/// Get all support tools (8 total).
#[must_use]
pub fn support_tools() -> Vec<Tool> {
    let mut tools = Vec::with_capacity(8);
    tools.extend(order_tools());
    tools.extend(customer_tools());
    tools.extend(ticket_tools());
    tools
}

/// Get a tool by name.
#[must_use]
pub fn get_tool_by_name(name: &str) -> Option<Tool> {
    support_tools().into_iter().find(|t| t.name == name)
}

/// Executor for support tools.
///
/// Maps tool names to store lookups and lifecycle operations, and renders
/// each result as a pretty-printed JSON string.
pub struct ToolExecutor<'a> {
    store: &'a EntityStore,
}

impl<'a> ToolExecutor<'a> {
    /// Create a new tool executor.
    #[must_use]
    pub const fn new(store: &'a EntityStore) -> Self {
        Self { store }
    }

    /// Execute a tool and return the result as a string.
    ///
    /// # Arguments
    ///
    /// * `name` - Tool name
    /// * `input` - Tool input parameters (a JSON object)
    ///
    /// # Errors
    ///
    /// Returns an error if the tool name is unknown or a required
    /// argument is missing or ill-typed. Domain rejections are rendered
    /// into the result payload instead.
    #[instrument(skip(self, input), fields(tool_name = %name))]
    pub fn execute(&self, name: &str, input: &serde_json::Value) -> Result<String, ToolError> {
        match name {
            // Orders
            "get_order_status" => self.get_order_status(input),
            "cancel_order" => self.cancel_order(input),
            "process_refund" => self.process_refund(input),
            "update_shipping_address" => self.update_shipping_address(input),

            // Customers
            "search_customer" => self.search_customer(input),
            "get_customer_orders" => self.get_customer_orders(input),

            // Tickets
            "create_support_ticket" => self.create_support_ticket(input),
            "get_ticket_status" => self.get_ticket_status(input),

            _ => Err(ToolError::UnknownTool(name.to_string())),
        }
    }
}
