//! Tool Schema
//!
//! The JSON function declarations advertised to the realtime session so the
//! agent knows which tools exist and how to call them. Shapes must stay in
//! sync with the typed argument structs in [`super::models`].

use serde_json::{json, Value};

/// All tool declarations, in the order the agent sees them.
pub fn tool_definitions() -> Vec<Value> {
    vec![
        json!({
            "type": "function",
            "name": "get_menu",
            "description": "Get the full menu with every available product",
        }),
        json!({
            "type": "function",
            "name": "add_to_cart",
            "description": "Add a product to the customer's cart",
            "parameters": {
                "type": "object",
                "properties": {
                    "session_id": { "type": "string" },
                    "product_id": { "type": "string" },
                    "quantity": { "type": "integer", "default": 1 }
                },
                "required": ["session_id", "product_id"]
            }
        }),
        json!({
            "type": "function",
            "name": "get_cart",
            "description": "See the current cart contents and total",
            "parameters": {
                "type": "object",
                "properties": { "session_id": { "type": "string" } },
                "required": ["session_id"]
            }
        }),
        json!({
            "type": "function",
            "name": "remove_from_cart",
            "description": "Remove a specific product from the cart",
            "parameters": {
                "type": "object",
                "properties": {
                    "session_id": { "type": "string" },
                    "product_id": { "type": "string" }
                },
                "required": ["session_id", "product_id"]
            }
        }),
        json!({
            "type": "function",
            "name": "save_customer_data",
            "description": "Save the customer's contact and delivery details; send only the fields the customer just provided",
            "parameters": {
                "type": "object",
                "properties": {
                    "session_id": { "type": "string" },
                    "name": { "type": "string" },
                    "phone": { "type": "string" },
                    "email": { "type": "string" },
                    "address": { "type": "string" }
                },
                "required": ["session_id"]
            }
        }),
        json!({
            "type": "function",
            "name": "show_product",
            "description": "Show a specific product in the carousel when the customer asks about it",
            "parameters": {
                "type": "object",
                "properties": {
                    "session_id": { "type": "string" },
                    "product_id": { "type": "string" }
                },
                "required": ["session_id", "product_id"]
            }
        }),
        json!({
            "type": "function",
            "name": "ready_for_checkout",
            "description": "Signal that the customer is ready to proceed to payment",
            "parameters": {
                "type": "object",
                "properties": { "session_id": { "type": "string" } },
                "required": ["session_id"]
            }
        }),
        json!({
            "type": "function",
            "name": "reopen_checkout",
            "description": "Reopen the checkout screen if the customer closed it",
            "parameters": {
                "type": "object",
                "properties": { "session_id": { "type": "string" } },
                "required": ["session_id"]
            }
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tool_is_declared_once() {
        let names: Vec<String> = tool_definitions()
            .iter()
            .map(|t| t["name"].as_str().unwrap().to_string())
            .collect();

        assert_eq!(
            names,
            vec![
                "get_menu",
                "add_to_cart",
                "get_cart",
                "remove_from_cart",
                "save_customer_data",
                "show_product",
                "ready_for_checkout",
                "reopen_checkout",
            ]
        );
    }

    #[test]
    fn save_customer_data_only_requires_the_session() {
        let tools = tool_definitions();
        let save = tools
            .iter()
            .find(|t| t["name"] == "save_customer_data")
            .unwrap();
        assert_eq!(save["parameters"]["required"], serde_json::json!(["session_id"]));
    }
}
