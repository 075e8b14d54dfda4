//! Cart display.

use basket_client::AppStore;

/// Prints every cart line, the item count and the total.
///
/// Lines for products missing from the catalog are shown but do not count
/// toward the total.
pub fn show(store: &AppStore) {
    let cart = store.cart();
    if cart.is_empty() {
        tracing::info!("Cart is empty");
        return;
    }

    let products = store.products();
    for (product_id, quantity) in cart.iter() {
        match products.iter().find(|p| p.id == product_id) {
            Some(product) => tracing::info!("{:>4} x {} ({})", quantity, product.name, product_id),
            None => tracing::info!("{:>4} x {} (not in catalog)", quantity, product_id),
        }
    }

    tracing::info!(
        "{} item(s), total {}",
        store.cart_count(),
        store.format_amount(store.cart_amount())
    );
}
