//! Login, logout and identity commands.

use basket_client::{AppStore, ClientResult};
use secrecy::SecretString;

/// Reports the authenticated user and seller status.
pub async fn whoami(store: &AppStore) {
    store.init().await;
    report(store);
}

/// Stores `token`, then checks which user it authenticates.
pub async fn login(store: &AppStore, token: String) -> ClientResult<()> {
    store.save_token(SecretString::from(token))?;
    store.init().await;
    report(store);
    Ok(())
}

/// Forgets the stored token. Works offline.
pub fn logout(store: &AppStore) -> ClientResult<()> {
    store.remove_token()?;
    store.set_user(None);
    tracing::info!("Logged out");
    Ok(())
}

fn report(store: &AppStore) {
    match store.user() {
        Some(user) => tracing::info!(
            "Logged in as {} <{}> ({} item(s) in cart)",
            user.name,
            user.email,
            store.cart_count()
        ),
        None => tracing::info!("Not logged in"),
    }

    if store.is_seller() {
        tracing::info!("Seller session active");
    }
}
