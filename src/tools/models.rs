//! Tool Argument Models
//!
//! Typed argument structs for each tool the realtime agent can invoke.
//! Arguments arrive as loose JSON; deserializing into these types at the
//! dispatch boundary is what turns a missing required key into a soft
//! error instead of a defensive lookup deep in a handler.

use crate::cart::CustomerProfile;
use serde::Deserialize;

fn default_quantity() -> u32 {
    1
}

/// Arguments for tools that only need the session (`get_cart`,
/// `ready_for_checkout`, `reopen_checkout`).
#[derive(Debug, Deserialize)]
pub struct SessionArgs {
    pub session_id: String,
}

/// Arguments for `add_to_cart`
#[derive(Debug, Deserialize)]
pub struct AddToCartArgs {
    pub session_id: String,

    pub product_id: String,

    /// How many to add (defaults to 1)
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

/// Arguments for tools addressing one product in one session
/// (`remove_from_cart`, `show_product`).
#[derive(Debug, Deserialize)]
pub struct ProductArgs {
    pub session_id: String,
    pub product_id: String,
}

/// Arguments for `save_customer_data`. Every profile field is optional;
/// only the ones present and non-empty overwrite stored values.
#[derive(Debug, Deserialize)]
pub struct SaveCustomerArgs {
    pub session_id: String,

    #[serde(flatten)]
    pub profile: CustomerProfile,
}
