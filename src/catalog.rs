//! Product Catalog
//!
//! This module contains the immutable menu the assistant sells from.
//! Products are loaded once at startup and never change at runtime.

use serde::{Deserialize, Serialize};

/// Category tag for a menu product
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Burger,
    Side,
    Drink,
}

/// A purchasable menu item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Stable identifier, unique within the catalog
    pub id: String,

    /// Display name
    pub name: String,

    /// Unit price, non-negative
    pub price: f64,

    /// Category tag
    pub category: Category,
}

/// Immutable, startup-loaded product list
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_default_menu()
    }
}

impl Catalog {
    /// Builds the restaurant's standard menu.
    pub fn with_default_menu() -> Self {
        let product = |id: &str, name: &str, price: f64, category: Category| Product {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category,
        };

        Self {
            products: vec![
                product("1", "Classic Burger", 14.89, Category::Burger),
                product("2", "BBQ Burger", 16.99, Category::Burger),
                product("3", "French Fries", 5.79, Category::Side),
                product("4", "Coca Cola", 2.99, Category::Drink),
            ],
        }
    }

    /// Returns every product, always in the same order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by exact id. An unknown id is a normal outcome,
    /// not an error.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All known product ids, for "not found" guidance messages.
    pub fn ids(&self) -> Vec<&str> {
        self.products.iter().map(|p| p.id.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_exact_match() {
        let catalog = Catalog::with_default_menu();
        assert_eq!(catalog.find("2").unwrap().name, "BBQ Burger");
        assert!(catalog.find("99").is_none());
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn list_order_is_stable() {
        let catalog = Catalog::with_default_menu();
        let first: Vec<_> = catalog.list().iter().map(|p| p.id.clone()).collect();
        let second: Vec<_> = catalog.list().iter().map(|p| p.id.clone()).collect();
        assert_eq!(first, vec!["1", "2", "3", "4"]);
        assert_eq!(first, second);
    }

    #[test]
    fn category_serializes_lowercase() {
        let catalog = Catalog::with_default_menu();
        let json = serde_json::to_value(catalog.find("4").unwrap()).unwrap();
        assert_eq!(json["category"], "drink");
        assert_eq!(json["price"], 2.99);
    }

    #[test]
    fn ids_cover_the_whole_menu() {
        let catalog = Catalog::with_default_menu();
        assert_eq!(catalog.ids(), vec!["1", "2", "3", "4"]);
    }
}
