//! # Storefront API
//!
//! The request/response seam between the store and the backend.
//!
//! ## Endpoints
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation          Method  Path                    Payload             │
//! │  ─────────          ──────  ────                    ───────             │
//! │  seller auth check  GET     /api/seller/is-Auth     —                   │
//! │  user auth check    GET     /api/user/is-auth       user                │
//! │  product list       GET     /api/product/list       products            │
//! │  cart update        POST    /api/cart/update        {cartItems, userId} │
//! │                                                                         │
//! │  Every response carries `success` and, on failure, `message`.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`HttpApi`](crate::http::HttpApi) is the production implementation.
//! Tests substitute an in-memory fake.

use async_trait::async_trait;
use basket_core::{Cart, Product, User};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::ClientResult;

pub const SELLER_IS_AUTH_PATH: &str = "api/seller/is-Auth";
pub const USER_IS_AUTH_PATH: &str = "api/user/is-auth";
pub const PRODUCT_LIST_PATH: &str = "api/product/list";
pub const CART_UPDATE_PATH: &str = "api/cart/update";

// =============================================================================
// Response Envelopes
// =============================================================================

/// Bare `{success, message}` response (seller check, cart update).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// User auth check response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
}

/// Product list response.
///
/// Entries that do not decode as a [`Product`] are dropped one by one; the
/// rest of the list survives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductListResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_products")]
    pub products: Vec<Product>,
}

fn lenient_products<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<Value>::deserialize(deserializer)?;

    Ok(entries
        .into_iter()
        .filter_map(|entry| {
            let id = entry
                .get("_id")
                .and_then(Value::as_str)
                .unwrap_or("<missing>")
                .to_string();
            match serde_json::from_value::<Product>(entry) {
                Ok(product) => Some(product),
                Err(e) => {
                    warn!(product_id = %id, error = %e, "Skipping undecodable catalog entry");
                    None
                }
            }
        })
        .collect())
}

/// Body of the cart update call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdateRequest {
    pub cart_items: Cart,
    pub user_id: String,
}

// =============================================================================
// API Trait
// =============================================================================

/// Backend operations the store depends on.
///
/// Implementations return `Ok` for any well-formed response, including
/// `success: false`; the caller decides what an unsuccessful envelope means.
#[async_trait]
pub trait StorefrontApi: Send + Sync {
    /// Sets or clears the bearer token sent with every request.
    fn set_bearer_token(&self, token: Option<SecretString>);

    async fn seller_is_auth(&self) -> ClientResult<AckResponse>;

    async fn user_is_auth(&self) -> ClientResult<UserResponse>;

    async fn product_list(&self) -> ClientResult<ProductListResponse>;

    async fn update_cart(&self, request: &CartUpdateRequest) -> ClientResult<AckResponse>;
}
