//! # basket-core: Pure Storefront Logic for Basket
//!
//! This crate holds the domain types and cart math for the Basket storefront
//! client. It has zero I/O dependencies: no HTTP, no files, no async.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Basket Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    basket-cli (apps/cli)                        │   │
//! │  │    products, whoami, login, cart add/set/remove                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    basket-client                                │   │
//! │  │    AppStore, CartSync effect, HttpApi, TokenStore               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │ validation│  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  catalog  │  │   │
//! │  │   │   User    │  │  floor    │  │  totals   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire types (Product, User)
//! - [`money`] - Money type held in integer cents
//! - [`cart`] - Cart mapping with copy-and-replace updates and totals
//! - [`error`] - Domain error types
//! - [`validation`] - Catalog entry validation
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{Cart, Product};
//!
//! let catalog = vec![Product::new("apple", 2.50, 1.99)];
//!
//! let cart = Cart::new().with_added("apple").with_added("apple");
//! assert_eq!(cart.quantity("apple"), 2);
//! assert_eq!(cart.total_amount(&catalog).unwrap().cents(), 398);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::{Product, User};
