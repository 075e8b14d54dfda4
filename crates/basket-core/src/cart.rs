//! # Cart
//!
//! The shopping cart as a mapping from product id to quantity.
//!
//! ## Copy-and-Replace Updates
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Update Flow                                     │
//! │                                                                         │
//! │  Shopper Action         Cart Method          Result                     │
//! │  ──────────────         ───────────          ──────                     │
//! │                                                                         │
//! │  Click "Add" ─────────► with_added(id) ────► new Cart, qty + 1          │
//! │                                                                         │
//! │  Pick quantity ───────► with_quantity(id,n)► new Cart, qty = n          │
//! │                                             (n = 0 keeps the entry)     │
//! │                                                                         │
//! │  Click "−" ───────────► with_removed(id) ──► new Cart, qty − 1          │
//! │                                             (entry dropped at 0)        │
//! │                                                                         │
//! │  Every method borrows `&self` and returns a fresh Cart. The caller      │
//! │  swaps the stored cart for the returned one.                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Totals
//! - `total_count()` sums every quantity, known product or not.
//! - `total_amount()` sums `offerPrice × qty` only for ids present in the
//!   catalog, then floors to whole cents.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::money::Money;
use crate::types::Product;

/// Product id → quantity.
///
/// Serializes as a plain JSON object (`{"p1": 2}`), the shape the backend
/// stores as `cartItems`. A `BTreeMap` keeps the serialized order stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: BTreeMap<String, u32>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Returns a copy with one more unit of `product_id`.
    pub fn with_added(&self, product_id: &str) -> Cart {
        let mut next = self.clone();
        let quantity = next.items.entry(product_id.to_string()).or_insert(0);
        *quantity = quantity.saturating_add(1);
        next
    }

    /// Returns a copy with `product_id` set to exactly `quantity`.
    ///
    /// A quantity of 0 is stored as-is; only [`Cart::with_removed`] drops
    /// entries.
    pub fn with_quantity(&self, product_id: &str, quantity: u32) -> Cart {
        let mut next = self.clone();
        next.items.insert(product_id.to_string(), quantity);
        next
    }

    /// Returns a copy with one unit of `product_id` taken away.
    ///
    /// The entry is deleted when it reaches 0. Absent ids and entries already
    /// at 0 are left untouched.
    pub fn with_removed(&self, product_id: &str) -> Cart {
        let mut next = self.clone();
        if let Some(quantity) = next.items.get_mut(product_id) {
            if *quantity > 0 {
                *quantity -= 1;
                if *quantity == 0 {
                    next.items.remove(product_id);
                }
            }
        }
        next
    }

    /// Quantity held for `product_id`, 0 when absent.
    pub fn quantity(&self, product_id: &str) -> u32 {
        self.items.get(product_id).copied().unwrap_or(0)
    }

    /// Whether an entry exists for `product_id` (even at quantity 0).
    pub fn contains(&self, product_id: &str) -> bool {
        self.items.contains_key(product_id)
    }

    /// Iterates `(product_id, quantity)` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, qty)| (id.as_str(), *qty))
    }

    /// Number of distinct entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all quantities.
    pub fn total_count(&self) -> u64 {
        self.items.values().map(|qty| u64::from(*qty)).sum()
    }

    /// Monetary total at offer prices, floored to whole cents.
    ///
    /// Entries whose id is not in `catalog`, or whose quantity is 0,
    /// contribute nothing. When the catalog lists an id twice the first
    /// listing wins.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{Cart, Product};
    ///
    /// let catalog = vec![Product::new("a", 12.0, 10.005)];
    /// let cart = Cart::new().with_added("a").with_added("ghost");
    ///
    /// assert_eq!(cart.total_amount(&catalog).unwrap().cents(), 1000);
    /// ```
    pub fn total_amount(&self, catalog: &[Product]) -> CoreResult<Money> {
        let mut by_id: HashMap<&str, &Product> = HashMap::with_capacity(catalog.len());
        for product in catalog {
            by_id.entry(product.id.as_str()).or_insert(product);
        }

        let total: f64 = self
            .items
            .iter()
            .filter(|(_, qty)| **qty > 0)
            .filter_map(|(id, qty)| {
                by_id
                    .get(id.as_str())
                    .map(|product| product.offer_price * f64::from(*qty))
            })
            .sum();

        Money::floor_from_major(total)
    }
}

impl FromIterator<(String, u32)> for Cart {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Cart {
            items: iter.into_iter().collect(),
        }
    }
}
