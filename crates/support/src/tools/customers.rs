//! Customer tools.

use serde_json::json;

use super::Tool;

/// Get all customer-related tools.
#[must_use]
pub fn customer_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "search_customer".to_string(),
            description: "Search for customer information by email, customer ID, or phone \
                number. At least one parameter is required. Returns the customer record \
                and their three most recent orders."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "email": {
                        "type": "string",
                        "description": "Customer's email address (matched case-insensitively)"
                    },
                    "customer_id": {
                        "type": "string",
                        "description": "Customer's ID (e.g., CUST-123)"
                    },
                    "phone": {
                        "type": "string",
                        "description": "Customer's phone number (matched exactly)"
                    }
                }
            }),
        },
        Tool {
            name: "get_customer_orders".to_string(),
            description: "Get all orders for a specific customer, most recent first."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "customer_id": {
                        "type": "string",
                        "description": "The customer's ID"
                    },
                    "limit": {
                        "type": "integer",
                        "description": "Maximum number of orders to return (default: 10)"
                    }
                },
                "required": ["customer_id"]
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_tools_count() {
        assert_eq!(customer_tools().len(), 2);
    }

    #[test]
    fn test_search_customer_has_no_required_fields() {
        // All three keys are optional; the executor enforces at-least-one.
        let tools = customer_tools();
        let search = tools.iter().find(|t| t.name == "search_customer").expect("tool");
        assert!(search.input_schema.get("required").is_none());
    }
}
