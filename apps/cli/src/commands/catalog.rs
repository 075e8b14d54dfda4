//! Catalog listing.

use basket_client::AppStore;
use basket_core::{Money, Product};

/// Lists catalog products, filtered by `search` when given.
pub async fn products(store: &AppStore, search: Option<String>) {
    store.init().await;

    if let Some(query) = search {
        store.set_search_query(query);
    }

    let products = store.filtered_products();
    if products.is_empty() {
        tracing::info!("No products found");
        return;
    }

    for product in &products {
        tracing::info!("{}", describe(store, product));
    }
    tracing::info!("{} product(s)", products.len());
}

fn describe(store: &AppStore, product: &Product) -> String {
    let price = |value: f64| {
        Money::floor_from_major(value)
            .map(|m| store.format_amount(m))
            .unwrap_or_else(|_| value.to_string())
    };
    let stock = if product.in_stock { "" } else { " (out of stock)" };

    format!(
        "{:<26} {:<28} {:<14} {} (was {}){}",
        product.id,
        product.name,
        product.category,
        price(product.offer_price),
        price(product.price),
        stock
    )
}
