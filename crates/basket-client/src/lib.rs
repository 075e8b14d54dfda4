//! # basket-client: Storefront State & Backend Sync
//!
//! Everything in Basket that touches the outside world: configuration,
//! the HTTP backend, the credential token file, and the client-side store
//! whose cart changes are pushed back to the server.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ClientConfig::load ──► HttpApi::new ──► AppStore::new ──► init()       │
//! │                                              │               │          │
//! │                                              │     ┌─────────┼───────┐  │
//! │                                              │     ▼         ▼       ▼  │
//! │                                              │  fetch_user  seller  products
//! │                                              ▼                          │
//! │                                        CartSyncHandle                   │
//! │                                        (shutdown() before exit)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust,ignore
//! let config = ClientConfig::load(None)?;
//! let api = Arc::new(HttpApi::new(&config.backend)?);
//! let tokens = TokenStore::new(config.token_path().unwrap());
//! let (store, sync) = AppStore::new(api, Arc::new(TracingNotifier), tokens, config.currency());
//!
//! store.init().await;
//! store.add_to_cart("p1");
//! sync.shutdown().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod notify;
pub mod store;
pub mod sync;
pub mod token;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

pub use api::{AckResponse, CartUpdateRequest, ProductListResponse, StorefrontApi, UserResponse};
pub use config::{BackendSettings, ClientConfig, DisplaySettings, StorageSettings};
pub use error::{ClientError, ClientResult};
pub use http::HttpApi;
pub use notify::{Notifier, TracingNotifier};
pub use store::AppStore;
pub use sync::{CartChange, CartSync, CartSyncHandle};
pub use token::TokenStore;
