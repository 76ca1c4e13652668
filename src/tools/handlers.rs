//! Tool Dispatch and Handlers
//!
//! This module maps the named functions the realtime agent calls onto
//! deterministic transitions over the session store. Every handler is
//! total: whatever happens, the agent gets back a result bag it can
//! narrate to the customer. Domain problems (unknown product, empty cart,
//! missing argument) are soft `success: false` results, never HTTP
//! failures.

use super::models::{AddToCartArgs, ProductArgs, SaveCustomerArgs, SessionArgs};
use crate::cart::AppState;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

/// Executes the named tool against the session store and catalog.
///
/// Unknown tool names yield a soft error so the agent can recover
/// conversationally.
pub fn dispatch(state: &AppState, name: &str, args: Value) -> Value {
    tracing::debug!(tool = name, "dispatching tool call");

    match name {
        "get_menu" => get_menu(state),
        "add_to_cart" => with_args(args, |a| add_to_cart(state, a)),
        "get_cart" => with_args(args, |a| get_cart(state, a)),
        "remove_from_cart" => with_args(args, |a| remove_from_cart(state, a)),
        "save_customer_data" => with_args(args, |a| save_customer_data(state, a)),
        "show_product" => with_args(args, |a| show_product(state, a)),
        "ready_for_checkout" => with_args(args, |a| ready_for_checkout(state, a)),
        "reopen_checkout" => with_args(args, |a| reopen_checkout(state, a)),
        _ => soft_error(format!("Tool not implemented: {}", name)),
    }
}

/// Builds the soft-error result bag shared by every failure path.
pub fn soft_error(message: impl Into<String>) -> Value {
    json!({ "success": false, "error": message.into() })
}

/// Parses the argument bag into the handler's typed arguments, turning a
/// parse failure (missing required key, wrong type) into a soft error.
fn with_args<A, F>(args: Value, handler: F) -> Value
where
    A: DeserializeOwned,
    F: FnOnce(A) -> Value,
{
    match serde_json::from_value(args) {
        Ok(parsed) => handler(parsed),
        Err(e) => soft_error(format!("Invalid arguments: {}", e)),
    }
}

fn get_menu(state: &AppState) -> Value {
    json!({
        "menu": state.catalog.list(),
        "message": "Here is our full menu",
    })
}

fn add_to_cart(state: &AppState, args: AddToCartArgs) -> Value {
    if args.quantity == 0 {
        return soft_error("quantity must be at least 1");
    }

    let Some(product) = state.catalog.find(&args.product_id).cloned() else {
        return soft_error(format!(
            "Product '{}' not found. Available product ids: {}",
            args.product_id,
            state.catalog.ids().join(", ")
        ));
    };

    // Single entry guard: the read-merge-write below is atomic per session.
    let mut session = state.store.get_or_create(&args.session_id);
    session.add_product(product.clone(), args.quantity);

    let line_price = product.price * args.quantity as f64;
    let message = format!(
        "Added {} x {} (${:.2}) to the cart",
        args.quantity, product.name, line_price
    );

    json!({
        "success": true,
        "product_added": product.name,
        "quantity": args.quantity,
        "price": product.price,
        "items": session.items,
        "total": session.total(),
        "cart_count": session.items.len(),
        "message": message,
    })
}

fn get_cart(state: &AppState, args: SessionArgs) -> Value {
    let session = state.store.read(&args.session_id);
    let total = session.total();
    let count = session.items.len();

    let message = if session.items.is_empty() {
        "The cart is empty".to_string()
    } else {
        format!("The cart has {} item(s) for a total of ${:.2}", count, total)
    };

    json!({
        "items": session.items,
        "total": total,
        "count": count,
        "is_empty": count == 0,
        "message": message,
    })
}

fn remove_from_cart(state: &AppState, args: ProductArgs) -> Value {
    let mut session = state.store.get_or_create(&args.session_id);
    let removed_name = session
        .items
        .iter()
        .find(|l| l.product.id == args.product_id)
        .map(|l| l.product.name.clone());

    let removed = session.remove_product(&args.product_id);

    let message = match &removed_name {
        Some(name) => format!("Removed {} from the cart", name),
        None => format!("No '{}' in the cart to remove", args.product_id),
    };

    json!({
        "success": removed,
        "items": session.items,
        "message": message,
    })
}

fn save_customer_data(state: &AppState, args: SaveCustomerArgs) -> Value {
    let mut session = state.store.get_or_create(&args.session_id);
    session.customer.merge(&args.profile);

    let missing = session.customer.missing_fields();
    let message = if missing.is_empty() {
        "Customer data saved, all required fields are present".to_string()
    } else {
        format!("Customer data saved, still missing: {}", missing.join(", "))
    };

    json!({
        "success": true,
        "customer": session.customer,
        "is_complete": missing.is_empty(),
        "missing_fields": missing,
        "message": message,
    })
}

// Pure lookup; the session id only ties the carousel update to a client.
fn show_product(state: &AppState, args: ProductArgs) -> Value {
    match state.catalog.find(&args.product_id) {
        Some(product) => json!({
            "success": true,
            "product": product,
            "message": format!("Showing {}", product.name),
        }),
        None => soft_error(format!("Product '{}' not found", args.product_id)),
    }
}

fn ready_for_checkout(state: &AppState, args: SessionArgs) -> Value {
    let session = state.store.read(&args.session_id);

    // Checkout gate: never signal the payment UI open for an empty order.
    if session.items.is_empty() {
        return json!({
            "success": false,
            "ready": false,
            "open_checkout": false,
            "message": "The cart is empty, add a product before checking out",
        });
    }

    json!({
        "success": true,
        "ready": true,
        "open_checkout": true,
        "items_count": session.items.len(),
        "total": session.total(),
        "has_customer_data": session.customer.name.as_deref().is_some_and(|n| !n.is_empty()),
        "message": "Ready to proceed to payment",
    })
}

fn reopen_checkout(state: &AppState, args: SessionArgs) -> Value {
    let session = state.store.read(&args.session_id);

    // Same emptiness gate as ready_for_checkout; safe to call any number
    // of times.
    if session.items.is_empty() {
        return json!({
            "success": false,
            "open_checkout": false,
            "items_count": 0,
            "total": 0.0,
            "message": "The cart is empty, there is no checkout to reopen",
        });
    }

    json!({
        "success": true,
        "open_checkout": true,
        "items_count": session.items.len(),
        "total": session.total(),
        "message": "Reopening the checkout screen",
    })
}
