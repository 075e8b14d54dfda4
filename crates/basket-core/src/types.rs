//! # Domain Types
//!
//! Wire types shared with the storefront backend.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      User       │   │      Cart       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  _id            │   │  _id            │   │  id → quantity  │       │
//! │  │  price          │   │  name, email    │   │  (cart.rs)      │       │
//! │  │  offerPrice     │   │  cartItems ─────┼──►│                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Owned by the backend. Cached locally, never edited locally except     │
//! │  for the cart.                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field names follow the backend's JSON (`_id`, camelCase).

use serde::{Deserialize, Serialize};

use crate::cart::Cart;

// =============================================================================
// Product
// =============================================================================

/// A catalog product. Read-only reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Backend identifier, the key used in cart mappings.
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub category: String,

    /// Base (list) price in major units.
    pub price: f64,

    /// Discounted unit price in major units. Cart totals use this one.
    pub offer_price: f64,

    /// Description bullet lines.
    #[serde(default)]
    pub description: Vec<String>,

    /// Image URLs.
    #[serde(default, rename = "image")]
    pub images: Vec<String>,

    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    /// Creates a product with only the fields cart math needs.
    pub fn new(id: impl Into<String>, price: f64, offer_price: f64) -> Self {
        Product {
            id: id.into(),
            name: String::new(),
            category: String::new(),
            price,
            offer_price,
            description: Vec::new(),
            images: Vec::new(),
            in_stock: true,
        }
    }

    /// Case-insensitive match of `query` against name or category.
    ///
    /// An empty (or all-whitespace) query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query) || self.category.to_lowercase().contains(&query)
    }
}

// =============================================================================
// User
// =============================================================================

/// The authenticated shopper, as returned by the auth check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    /// Server-side copy of the cart. Missing means empty.
    #[serde(default)]
    pub cart_items: Cart,
}
