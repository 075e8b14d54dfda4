//! # Storefront Store
//!
//! Client-side global state: the logged-in user, the seller flag, the
//! product catalog and the cart, plus the UI flags that ride along with
//! them.
//!
//! ## Thread Safety
//! State lives in one `std::sync::RwLock` inside an `Arc<AppStore>`.
//! Guards are always dropped before any `.await`, so a slow backend never
//! blocks readers.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller                  AppStore                  Effect               │
//! │  ──────                  ────────                  ──────               │
//! │                                                                         │
//! │  add_to_cart(id) ──────► copy cart, +1 ─┐                               │
//! │  update_cart_item(id,n)► copy cart, =n ─┼─► replace, revision += 1      │
//! │  remove_from_cart(id) ─► copy cart, -1 ─┤        │                      │
//! │  set_cart_items(cart) ─► new cart ──────┘        ▼                      │
//! │                                           CartChange ──► CartSync       │
//! │                                                           (POST if user)│
//! │                                                                         │
//! │  cart_count() / cart_amount() ──────────► read only                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cart mutations and fetches never return errors. Failures are reported
//! through the [`Notifier`] and the state is left as it was.

use basket_core::validation::validate_product;
use basket_core::{Cart, Money, Product, User};
use secrecy::SecretString;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::StorefrontApi;
use crate::error::ClientResult;
use crate::notify::Notifier;
use crate::sync::{CartChange, CartSync, CartSyncHandle};
use crate::token::TokenStore;

pub const ADDED_TO_CART: &str = "Added to Cart";
pub const CART_UPDATED: &str = "Cart Updated";
pub const REMOVED_FROM_CART: &str = "Removed from Cart";

const NOT_AUTHORIZED: &str = "Not Authorized";
const PRODUCTS_UNAVAILABLE: &str = "Failed to load products";

#[derive(Debug, Default)]
struct StoreState {
    user: Option<User>,
    is_seller: bool,
    show_user_login: bool,
    products: Arc<Vec<Product>>,
    cart: Cart,
    cart_revision: u64,
    search_query: String,
}

/// The storefront's client-side state container.
pub struct AppStore {
    api: Arc<dyn StorefrontApi>,
    notifier: Arc<dyn Notifier>,
    tokens: TokenStore,
    currency: String,
    state: RwLock<StoreState>,
    changes_tx: mpsc::UnboundedSender<CartChange>,
}

impl AppStore {
    /// Creates the store and starts its cart sync effect.
    ///
    /// Must be called within a tokio runtime. Keep the returned handle and
    /// call [`CartSyncHandle::shutdown`] before exiting so queued pushes
    /// are delivered.
    pub fn new(
        api: Arc<dyn StorefrontApi>,
        notifier: Arc<dyn Notifier>,
        tokens: TokenStore,
        currency: impl Into<String>,
    ) -> (Arc<Self>, CartSyncHandle) {
        let (changes_tx, changes_rx) = mpsc::unbounded_channel();
        let sync = CartSync::spawn(Arc::clone(&api), Arc::clone(&notifier), changes_rx);

        let store = AppStore {
            api,
            notifier,
            tokens,
            currency: currency.into(),
            state: RwLock::new(StoreState::default()),
            changes_tx,
        };

        (Arc::new(store), sync)
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Startup
    // =========================================================================

    /// Attaches the stored token (if any) and loads user, seller flag and
    /// catalog concurrently.
    pub async fn init(&self) {
        match self.tokens.load() {
            Ok(Some(token)) => {
                debug!("Using stored token");
                self.api.set_bearer_token(Some(token));
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "Failed to read stored token");
                self.notifier.error(&e.to_string());
            }
        }

        tokio::join!(self.fetch_user(), self.fetch_seller(), self.fetch_products());
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Persists the token and attaches it to every subsequent request.
    pub fn save_token(&self, token: SecretString) -> ClientResult<()> {
        self.tokens.save(&token)?;
        self.api.set_bearer_token(Some(token));
        Ok(())
    }

    /// Detaches the token and deletes the stored copy.
    pub fn remove_token(&self) -> ClientResult<()> {
        self.api.set_bearer_token(None);
        self.tokens.remove()
    }

    /// Refreshes the seller flag. Transport failures leave it unchanged.
    pub async fn fetch_seller(&self) {
        match self.api.seller_is_auth().await {
            Ok(ack) => {
                debug!(is_seller = ack.success, "Seller status fetched");
                self.set_is_seller(ack.success);
            }
            Err(e) => {
                warn!(error = %e, "Seller status check failed");
                self.notifier.error(&e.to_string());
            }
        }
    }

    /// Refreshes the user and adopts the server's copy of their cart.
    ///
    /// Any failure, including an unsuccessful envelope, logs the user out
    /// locally.
    pub async fn fetch_user(&self) {
        let message = match self.api.user_is_auth().await {
            Ok(response) => match (response.success, response.user) {
                (true, Some(user)) => {
                    info!(user_id = %user.id, "User authenticated");
                    let mut state = self.write();
                    let cart = user.cart_items.clone();
                    state.user = Some(user);
                    self.replace_cart_locked(&mut state, cart);
                    return;
                }
                _ => response
                    .message
                    .unwrap_or_else(|| NOT_AUTHORIZED.to_string()),
            },
            Err(e) => {
                warn!(error = %e, "User auth check failed");
                e.to_string()
            }
        };

        debug!(%message, "No authenticated user");
        self.write().user = None;
        self.notifier.error(&message);
    }

    /// Replaces the catalog. Entries that fail validation are skipped.
    pub async fn fetch_products(&self) {
        match self.api.product_list().await {
            Ok(response) if response.success => {
                let fetched = response.products.len();
                let products: Vec<Product> = response
                    .products
                    .into_iter()
                    .filter(|product| match validate_product(product) {
                        Ok(()) => true,
                        Err(e) => {
                            warn!(product_id = %product.id, error = %e, "Skipping invalid product");
                            false
                        }
                    })
                    .collect();

                debug!(fetched, kept = products.len(), "Catalog loaded");
                self.write().products = Arc::new(products);
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| PRODUCTS_UNAVAILABLE.to_string());
                warn!(%message, "Product list rejected");
                self.notifier.error(&message);
            }
            Err(e) => {
                warn!(error = %e, "Product list fetch failed");
                self.notifier.error(&e.to_string());
            }
        }
    }

    // =========================================================================
    // Cart Mutations
    // =========================================================================

    /// Adds one unit of a product.
    pub fn add_to_cart(&self, product_id: &str) {
        let quantity = self.replace_cart(product_id, |cart| cart.with_added(product_id));
        debug!(product_id, quantity, "Added to cart");
        self.notifier.success(ADDED_TO_CART);
    }

    /// Sets a product's quantity. Zero keeps the entry.
    pub fn update_cart_item(&self, product_id: &str, quantity: u32) {
        self.replace_cart(product_id, |cart| cart.with_quantity(product_id, quantity));
        debug!(product_id, quantity, "Cart item updated");
        self.notifier.success(CART_UPDATED);
    }

    /// Removes one unit of a product, dropping the entry at zero.
    pub fn remove_from_cart(&self, product_id: &str) {
        let quantity = self.replace_cart(product_id, |cart| cart.with_removed(product_id));
        debug!(product_id, quantity, "Removed from cart");
        self.notifier.success(REMOVED_FROM_CART);
    }

    /// Replaces the whole cart. Triggers a push like any other mutation.
    pub fn set_cart_items(&self, cart: Cart) {
        let mut state = self.write();
        self.replace_cart_locked(&mut state, cart);
    }

    /// Applies `mutate` to a copy of the cart and stores the result.
    ///
    /// Returns the resulting quantity of `product_id`.
    fn replace_cart<F>(&self, product_id: &str, mutate: F) -> u32
    where
        F: FnOnce(&Cart) -> Cart,
    {
        let mut state = self.write();
        let next = mutate(&state.cart);
        let quantity = next.quantity(product_id);
        self.replace_cart_locked(&mut state, next);
        quantity
    }

    fn replace_cart_locked(&self, state: &mut StoreState, cart: Cart) {
        state.cart_revision += 1;
        let change = CartChange {
            revision: state.cart_revision,
            cart: cart.clone(),
            user_id: state.user.as_ref().map(|user| user.id.clone()),
        };
        state.cart = cart;

        // Sent under the lock so the effect sees revisions in order
        if self.changes_tx.send(change).is_err() {
            debug!("Cart sync stopped, change stays local");
        }
    }

    // =========================================================================
    // Derived Values
    // =========================================================================

    /// Sum of all quantities.
    pub fn cart_count(&self) -> u64 {
        self.read().cart.total_count()
    }

    /// Cart total over catalog-known products, floored to whole cents.
    pub fn cart_amount(&self) -> Money {
        let state = self.read();
        state
            .cart
            .total_amount(&state.products)
            .unwrap_or_else(|e| {
                warn!(error = %e, "Cart total out of range");
                Money::zero()
            })
    }

    /// Formats an amount with the configured currency symbol.
    pub fn format_amount(&self, amount: Money) -> String {
        amount.format_with(&self.currency)
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    // =========================================================================
    // Accessors & Setters
    // =========================================================================

    pub fn cart(&self) -> Cart {
        self.read().cart.clone()
    }

    /// Number of cart replacements so far.
    pub fn cart_revision(&self) -> u64 {
        self.read().cart_revision
    }

    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    /// Sets the user without touching the cart.
    pub fn set_user(&self, user: Option<User>) {
        self.write().user = user;
    }

    pub fn is_seller(&self) -> bool {
        self.read().is_seller
    }

    pub fn set_is_seller(&self, is_seller: bool) {
        self.write().is_seller = is_seller;
    }

    pub fn show_user_login(&self) -> bool {
        self.read().show_user_login
    }

    pub fn set_show_user_login(&self, show: bool) {
        self.write().show_user_login = show;
    }

    pub fn products(&self) -> Arc<Vec<Product>> {
        Arc::clone(&self.read().products)
    }

    pub fn search_query(&self) -> String {
        self.read().search_query.clone()
    }

    pub fn set_search_query(&self, query: impl Into<String>) {
        self.write().search_query = query.into();
    }

    /// Catalog entries matching the current search query.
    pub fn filtered_products(&self) -> Vec<Product> {
        let state = self.read();
        state
            .products
            .iter()
            .filter(|product| product.matches_query(&state.search_query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ProductListResponse, UserResponse};
    use crate::testing::{rejected, FakeApi, Notification, RecordingNotifier, Reply};
    use secrecy::ExposeSecret;

    struct Harness {
        store: Arc<AppStore>,
        sync: CartSyncHandle,
        api: Arc<FakeApi>,
        notifier: Arc<RecordingNotifier>,
        dir: tempfile::TempDir,
    }

    fn harness(api: FakeApi) -> Harness {
        let api = Arc::new(api);
        let notifier = Arc::new(RecordingNotifier::default());
        let dir = tempfile::tempdir().unwrap();
        let tokens = TokenStore::new(dir.path().join("token"));
        let (store, sync) = AppStore::new(api.clone(), notifier.clone(), tokens, "$");
        Harness {
            store,
            sync,
            api,
            notifier,
            dir,
        }
    }

    fn user(id: &str, cart: Cart) -> User {
        User {
            id: id.to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            cart_items: cart,
        }
    }

    fn named(id: &str, name: &str, category: &str, offer_price: f64) -> Product {
        let mut product = Product::new(id, offer_price + 1.0, offer_price);
        product.name = name.to_string();
        product.category = category.to_string();
        product
    }

    #[tokio::test]
    async fn test_add_twice_yields_two() {
        let h = harness(FakeApi::default());

        h.store.add_to_cart("p1");
        h.store.add_to_cart("p1");

        assert_eq!(h.store.cart().quantity("p1"), 2);
        assert_eq!(h.store.cart_count(), 2);
        assert_eq!(
            h.notifier.successes(),
            vec![ADDED_TO_CART.to_string(), ADDED_TO_CART.to_string()]
        );
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_update_to_zero_keeps_entry() {
        let h = harness(FakeApi::default());

        h.store.add_to_cart("p1");
        h.store.update_cart_item("p1", 0);

        let cart = h.store.cart();
        assert!(cart.contains("p1"));
        assert_eq!(cart.quantity("p1"), 0);
        assert_eq!(h.store.cart_count(), 0);
        assert_eq!(h.notifier.successes().last().unwrap(), CART_UPDATED);
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_remove_drops_entry_at_zero() {
        let h = harness(FakeApi::default());

        h.store.update_cart_item("p1", 2);
        h.store.remove_from_cart("p1");
        assert_eq!(h.store.cart().quantity("p1"), 1);

        h.store.remove_from_cart("p1");
        assert!(!h.store.cart().contains("p1"));
        assert!(h.store.cart().is_empty());
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_remove_absent_still_replaces() {
        let h = harness(FakeApi::default());

        h.store.remove_from_cart("ghost");

        assert_eq!(h.store.cart_revision(), 1);
        assert!(h.store.cart().is_empty());
        assert_eq!(h.notifier.successes(), vec![REMOVED_FROM_CART.to_string()]);
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_amount_skips_unknown_and_floors() {
        let h = harness(FakeApi::default());
        *h.api.products.lock().unwrap() = Reply::Ok(ProductListResponse {
            success: true,
            message: None,
            products: vec![Product::new("p1", 12.0, 10.005), Product::new("p2", 5.0, 2.5)],
        });
        h.store.fetch_products().await;

        h.store.add_to_cart("p1");
        h.store.add_to_cart("unknown");
        h.store.update_cart_item("p2", 0);

        let amount = h.store.cart_amount();
        assert_eq!(amount.cents(), 1000);
        assert_eq!(h.store.format_amount(amount), "$10.00");
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_changes_push_with_user() {
        let h = harness(FakeApi::default());
        h.store.set_user(Some(user("u1", Cart::new())));

        h.store.add_to_cart("p1");
        h.sync.shutdown().await;

        let pushed = h.api.pushed();
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].user_id, "u1");
        assert_eq!(pushed[0].cart_items.quantity("p1"), 1);
    }

    #[tokio::test]
    async fn test_set_cart_items_replaces_silently() {
        let h = harness(FakeApi::default());
        h.store.set_user(Some(user("u1", Cart::new())));
        let cart = Cart::new().with_quantity("p1", 2).with_quantity("p2", 1);

        h.store.set_cart_items(cart.clone());
        h.store.set_cart_items(cart.clone());

        assert_eq!(h.store.cart(), cart);
        assert_eq!(h.store.cart_revision(), 2);
        assert!(h.notifier.all().is_empty());
        h.sync.shutdown().await;

        // identical content still pushes: every replacement is a change
        assert_eq!(h.api.pushed().len(), 2);
    }

    #[tokio::test]
    async fn test_changes_without_user_stay_local() {
        let h = harness(FakeApi::default());

        h.store.add_to_cart("p1");
        h.store.update_cart_item("p1", 4);
        h.sync.shutdown().await;

        assert!(h.api.pushed().is_empty());
        assert_eq!(h.store.cart().quantity("p1"), 4);
    }

    #[tokio::test]
    async fn test_rejected_push_keeps_local_cart() {
        let h = harness(FakeApi::default());
        *h.api.cart_update.lock().unwrap() = Reply::Ok(rejected("Out of stock"));
        h.store.set_user(Some(user("u1", Cart::new())));

        h.store.add_to_cart("p1");
        h.sync.shutdown().await;

        assert_eq!(h.store.cart().quantity("p1"), 1);
        assert_eq!(
            h.notifier.all(),
            vec![
                Notification::Success(ADDED_TO_CART.to_string()),
                Notification::Error("Out of stock".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_user_adopts_server_cart() {
        let h = harness(FakeApi::default());
        let server_cart = Cart::new().with_quantity("p9", 3);
        *h.api.user.lock().unwrap() = Reply::Ok(UserResponse {
            success: true,
            message: None,
            user: Some(user("u1", server_cart.clone())),
        });

        h.store.fetch_user().await;
        assert_eq!(h.store.user().unwrap().id, "u1");
        assert_eq!(h.store.cart(), server_cart);
        h.sync.shutdown().await;

        let pushed = h.api.pushed();
        assert_eq!(pushed.len(), 1);
        assert_eq!(pushed[0].cart_items, server_cart);
        assert_eq!(pushed[0].user_id, "u1");
    }

    #[tokio::test]
    async fn test_fetch_user_rejection_resets_user() {
        let h = harness(FakeApi::default());
        h.store.set_user(Some(user("u1", Cart::new())));
        *h.api.user.lock().unwrap() = Reply::Ok(UserResponse {
            success: false,
            message: Some("Session expired".to_string()),
            user: None,
        });

        h.store.fetch_user().await;

        assert!(h.store.user().is_none());
        assert_eq!(h.notifier.errors(), vec!["Session expired".to_string()]);
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_fetch_user_success_without_user_resets() {
        let h = harness(FakeApi::default());
        h.store.set_user(Some(user("u1", Cart::new())));
        *h.api.user.lock().unwrap() = Reply::Ok(UserResponse {
            success: true,
            message: None,
            user: None,
        });

        h.store.fetch_user().await;

        assert!(h.store.user().is_none());
        assert_eq!(h.notifier.errors(), vec![NOT_AUTHORIZED.to_string()]);
        assert_eq!(h.store.cart_revision(), 0);
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_fetch_user_transport_error_resets_user() {
        let h = harness(FakeApi::default());
        h.store.set_user(Some(user("u1", Cart::new())));
        *h.api.user.lock().unwrap() = Reply::Fail("timed out".to_string());

        h.store.fetch_user().await;

        assert!(h.store.user().is_none());
        let errors = h.notifier.errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("timed out"));
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_fetch_seller_follows_success() {
        let h = harness(FakeApi::default());
        *h.api.seller.lock().unwrap() = Reply::Ok(crate::testing::ok_ack());
        h.store.fetch_seller().await;
        assert!(h.store.is_seller());

        *h.api.seller.lock().unwrap() = Reply::Ok(rejected("Not Authorized"));
        h.store.fetch_seller().await;
        assert!(!h.store.is_seller());
        // an unsuccessful envelope is an answer, not an error
        assert!(h.notifier.errors().is_empty());
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_fetch_seller_error_keeps_flag() {
        let h = harness(FakeApi::default());
        h.store.set_is_seller(true);
        *h.api.seller.lock().unwrap() = Reply::Fail("unreachable".to_string());

        h.store.fetch_seller().await;

        assert!(h.store.is_seller());
        assert_eq!(h.notifier.errors().len(), 1);
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_fetch_products_skips_invalid() {
        let h = harness(FakeApi::default());
        *h.api.products.lock().unwrap() = Reply::Ok(ProductListResponse {
            success: true,
            message: None,
            products: vec![Product::new("p1", 2.0, 1.5), Product::new("bad", -1.0, 1.0)],
        });

        h.store.fetch_products().await;

        let products = h.store.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "p1");
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_fetch_products_keeps_entries_beside_incomplete_one() {
        let h = harness(FakeApi::default());
        let response: ProductListResponse = serde_json::from_str(
            r#"{"success":true,"products":[{"_id":"p1","price":2,"offerPrice":1.5},{"_id":"p2","price":3}]}"#,
        )
        .unwrap();
        *h.api.products.lock().unwrap() = Reply::Ok(response);

        h.store.fetch_products().await;

        let products = h.store.products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "p1");
        assert!(h.notifier.errors().is_empty());

        h.store.add_to_cart("p1");
        h.store.add_to_cart("p2");
        assert_eq!(h.store.cart_amount().cents(), 150);
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_fetch_products_failure_keeps_catalog() {
        let h = harness(FakeApi::default());
        *h.api.products.lock().unwrap() = Reply::Ok(ProductListResponse {
            success: true,
            message: None,
            products: vec![Product::new("p1", 2.0, 1.5)],
        });
        h.store.fetch_products().await;

        *h.api.products.lock().unwrap() = Reply::Ok(ProductListResponse {
            success: false,
            message: Some("Database offline".to_string()),
            products: Vec::new(),
        });
        h.store.fetch_products().await;

        assert_eq!(h.store.products().len(), 1);
        assert_eq!(h.notifier.errors(), vec!["Database offline".to_string()]);
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_init_attaches_stored_token() {
        let h = harness(FakeApi::default());
        std::fs::write(h.dir.path().join("token"), "stored-token\n").unwrap();
        *h.api.seller.lock().unwrap() = Reply::Ok(crate::testing::ok_ack());

        h.store.init().await;

        assert_eq!(h.api.token().as_deref(), Some("stored-token"));
        assert!(h.store.is_seller());
        // default fake user reply is unsuccessful
        assert!(h.store.user().is_none());
        assert_eq!(h.notifier.errors(), vec![NOT_AUTHORIZED.to_string()]);
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_save_and_remove_token() {
        let h = harness(FakeApi::default());

        h.store
            .save_token(SecretString::from("fresh".to_string()))
            .unwrap();
        assert_eq!(h.api.token().as_deref(), Some("fresh"));
        let stored = TokenStore::new(h.dir.path().join("token")).load().unwrap();
        assert_eq!(stored.unwrap().expose_secret(), "fresh");

        h.store.remove_token().unwrap();
        assert!(h.api.token().is_none());
        assert!(!h.dir.path().join("token").exists());
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_filtered_products_uses_query() {
        let h = harness(FakeApi::default());
        *h.api.products.lock().unwrap() = Reply::Ok(ProductListResponse {
            success: true,
            message: None,
            products: vec![
                named("p1", "Potato", "Vegetables", 1.0),
                named("p2", "Milk", "Dairy", 2.0),
                named("p3", "Carrot", "Vegetables", 0.5),
            ],
        });
        h.store.fetch_products().await;

        assert_eq!(h.store.filtered_products().len(), 3);

        h.store.set_search_query("VEG");
        let ids: Vec<String> = h
            .store
            .filtered_products()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["p1".to_string(), "p3".to_string()]);
        assert_eq!(h.store.search_query(), "VEG");
        h.sync.shutdown().await;
    }

    #[tokio::test]
    async fn test_ui_flags() {
        let h = harness(FakeApi::default());
        assert!(!h.store.show_user_login());
        h.store.set_show_user_login(true);
        assert!(h.store.show_user_login());
        assert_eq!(h.store.currency(), "$");
        h.sync.shutdown().await;
    }
}
