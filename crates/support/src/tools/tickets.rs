//! Support ticket tools.

use serde_json::json;

use super::Tool;

/// Get all ticket-related tools.
#[must_use]
pub fn ticket_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "create_support_ticket".to_string(),
            description: "Create a new customer support ticket. The ticket is opened \
                unassigned and linked to the customer; a related order ID may be attached."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "customer_id": {
                        "type": "string",
                        "description": "The customer's ID"
                    },
                    "subject": {
                        "type": "string",
                        "description": "Brief description of the issue"
                    },
                    "description": {
                        "type": "string",
                        "description": "Detailed description of the problem"
                    },
                    "priority": {
                        "type": "string",
                        "enum": ["low", "medium", "high", "urgent"],
                        "description": "Priority level (default: medium, matched case-insensitively)"
                    },
                    "order_id": {
                        "type": "string",
                        "description": "Related order ID if applicable"
                    }
                },
                "required": ["customer_id", "subject", "description"]
            }),
        },
        Tool {
            name: "get_ticket_status".to_string(),
            description: "Get the status and details of a support ticket.".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "ticket_id": {
                        "type": "string",
                        "description": "The ticket ID to look up (e.g., TKT-001)"
                    }
                },
                "required": ["ticket_id"]
            }),
        },
    ]
}
