//! Order tools.

use serde_json::json;

use super::Tool;

/// Get all order-related tools.
#[must_use]
pub fn order_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "get_order_status".to_string(),
            description: "Get the current status and details of an order, including line \
                items, totals, tracking, and the shipping address."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "string",
                        "description": "The order ID to look up (e.g., ORD-001)"
                    }
                },
                "required": ["order_id"]
            }),
        },
        Tool {
            name: "cancel_order".to_string(),
            description: "Cancel an order if it's eligible for cancellation. Orders that \
                have already shipped or been delivered cannot be cancelled."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "string",
                        "description": "The order ID to cancel"
                    },
                    "reason": {
                        "type": "string",
                        "description": "Reason for cancellation (default: 'Customer request')"
                    }
                },
                "required": ["order_id"]
            }),
        },
        Tool {
            name: "process_refund".to_string(),
            description: "Process a refund for a delivered or cancelled order. The amount \
                defaults to the full order total and may not exceed it."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "string",
                        "description": "The order ID to refund"
                    },
                    "amount": {
                        "type": "number",
                        "description": "Partial refund amount (default: full order total)"
                    },
                    "reason": {
                        "type": "string",
                        "description": "Reason for the refund (default: 'Customer request')"
                    }
                },
                "required": ["order_id"]
            }),
        },
        Tool {
            name: "update_shipping_address".to_string(),
            description: "Update the shipping address for an order that has not shipped \
                yet. Returns the previous address."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "order_id": {
                        "type": "string",
                        "description": "The order ID to update"
                    },
                    "new_address": {
                        "type": "string",
                        "description": "The new shipping address"
                    }
                },
                "required": ["order_id", "new_address"]
            }),
        },
    ]
}
