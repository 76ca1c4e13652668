//! Session Cart Domain Models
//!
//! Data structures for per-session order state: cart lines and the
//! customer's delivery profile.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A single line in a session's cart.
///
/// There is at most one line per product id; adding the same product again
/// merges into the existing line by summing quantities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product being ordered
    pub product: Product,

    /// Quantity of this product, always at least 1
    pub quantity: u32,
}

impl CartLine {
    /// Price contribution of this line (unit price times quantity).
    pub fn line_total(&self) -> f64 {
        self.product.price * self.quantity as f64
    }
}

/// Customer contact and delivery details, filled in field by field over the
/// course of the conversation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CustomerProfile {
    /// Merges incoming fields into the profile. Only fields that are present
    /// and non-empty overwrite stored values; everything else is left
    /// untouched.
    pub fn merge(&mut self, incoming: &CustomerProfile) {
        fn apply(slot: &mut Option<String>, value: &Option<String>) {
            if let Some(v) = value {
                if !v.trim().is_empty() {
                    *slot = Some(v.clone());
                }
            }
        }

        apply(&mut self.name, &incoming.name);
        apply(&mut self.phone, &incoming.phone);
        apply(&mut self.email, &incoming.email);
        apply(&mut self.address, &incoming.address);
    }

    /// The profile is complete once name, phone and address are all set.
    /// Email is never required.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Required fields still absent, in fixed `[name, phone, address]` order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let filled = |slot: &Option<String>| slot.as_deref().is_some_and(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        if !filled(&self.name) {
            missing.push("name");
        }
        if !filled(&self.phone) {
            missing.push("phone");
        }
        if !filled(&self.address) {
            missing.push("address");
        }
        missing
    }
}

/// Everything the backend remembers about one ordering conversation.
///
/// Created lazily the first time a session id is referenced; lives for the
/// rest of the process.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionState {
    /// Cart lines in insertion order. Merges update quantity in place and
    /// never reorder lines.
    pub items: Vec<CartLine>,

    /// Customer contact and delivery details
    pub customer: CustomerProfile,
}

impl SessionState {
    /// Cart total, recomputed from the lines on every call, never cached.
    pub fn total(&self) -> f64 {
        self.items.iter().map(CartLine::line_total).sum()
    }

    /// Merges a product into the cart: bumps the quantity of an existing
    /// line for the same product id, or appends a new line at the end.
    pub fn add_product(&mut self, product: Product, quantity: u32) {
        if let Some(existing) = self.items.iter_mut().find(|l| l.product.id == product.id) {
            existing.quantity += quantity;
        } else {
            self.items.push(CartLine { product, quantity });
        }
    }

    /// Drops the line for `product_id`, reporting whether one was removed.
    pub fn remove_product(&mut self, product_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|l| l.product.id != product_id);
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn product(id: &str) -> Product {
        Catalog::with_default_menu().find(id).unwrap().clone()
    }

    #[test]
    fn add_merges_same_product_into_one_line() {
        let mut session = SessionState::default();
        session.add_product(product("2"), 2);
        session.add_product(product("2"), 3);

        assert_eq!(session.items.len(), 1);
        assert_eq!(session.items[0].quantity, 5);
    }

    #[test]
    fn merge_keeps_first_add_position() {
        let mut session = SessionState::default();
        session.add_product(product("2"), 1);
        session.add_product(product("1"), 1);
        session.add_product(product("2"), 1);

        let ids: Vec<_> = session.items.iter().map(|l| l.product.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(session.items[0].quantity, 2);
    }

    #[test]
    fn total_matches_sum_of_lines() {
        let mut session = SessionState::default();
        session.add_product(product("2"), 2);
        session.add_product(product("1"), 1);

        let expected: f64 = session.items.iter().map(|l| l.line_total()).sum();
        assert_eq!(session.total(), expected);
        assert!((session.total() - 48.87).abs() < 1e-9);
    }

    #[test]
    fn remove_reports_whether_a_line_was_dropped() {
        let mut session = SessionState::default();
        session.add_product(product("3"), 1);

        assert!(session.remove_product("3"));
        assert!(!session.remove_product("3"));
        assert!(session.items.is_empty());
    }

    #[test]
    fn profile_merge_is_partial() {
        let mut profile = CustomerProfile::default();
        profile.merge(&CustomerProfile {
            name: Some("Ana Diaz".into()),
            address: Some("12 Main St".into()),
            ..Default::default()
        });
        profile.merge(&CustomerProfile {
            phone: Some("555-0100".into()),
            name: Some("".into()), // empty must not clobber
            ..Default::default()
        });

        assert_eq!(profile.name.as_deref(), Some("Ana Diaz"));
        assert_eq!(profile.phone.as_deref(), Some("555-0100"));
        assert_eq!(profile.address.as_deref(), Some("12 Main St"));
        assert!(profile.is_complete());
        assert!(profile.email.is_none());
    }

    #[test]
    fn missing_fields_order_is_fixed() {
        let profile = CustomerProfile {
            phone: Some("555-0100".into()),
            ..Default::default()
        };
        assert_eq!(profile.missing_fields(), vec!["name", "address"]);
    }
}
