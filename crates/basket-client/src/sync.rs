//! # Cart Synchronization Effect
//!
//! Pushes every cart replacement to the backend.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppStore::replace_cart                                                 │
//! │        │  CartChange { revision, cart, user_id }                        │
//! │        ▼                                                                │
//! │  unbounded mpsc ──► CartSync::run                                       │
//! │                          │                                              │
//! │                          ├── user_id = None ──► dropped                 │
//! │                          │                                              │
//! │                          └── user_id = Some ──► JoinSet::spawn          │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                                 POST api/cart/update {cartItems,userId} │
//! │                                                   │                     │
//! │                              success ◄────────────┼──► error notify     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every change gets its own request. Requests overlap freely and may
//! complete out of order; there is no retry and no debounce. Last write
//! to reach the server wins.

use basket_core::Cart;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

use crate::api::{CartUpdateRequest, StorefrontApi};
use crate::notify::Notifier;

/// Shown when the backend rejects a push without saying why.
const DEFAULT_REJECTION: &str = "Cart update rejected";

/// One cart replacement as observed by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct CartChange {
    /// Monotonic per-store counter; bumps on every replacement.
    pub revision: u64,

    /// Snapshot of the cart after the replacement.
    pub cart: Cart,

    /// Logged-in user at the time of the change.
    pub user_id: Option<String>,
}

// =============================================================================
// Sync Handle
// =============================================================================

/// Owner of the background sync task.
pub struct CartSyncHandle {
    shutdown_tx: mpsc::Sender<()>,
    task: JoinHandle<()>,
}

impl CartSyncHandle {
    /// Stops the effect after pushing queued changes and awaiting every
    /// in-flight request.
    pub async fn shutdown(self) {
        // Already-finished loop means the store was dropped; nothing to signal
        let _ = self.shutdown_tx.send(()).await;

        if let Err(e) = self.task.await {
            warn!(error = %e, "Cart sync task ended abnormally");
        }
    }
}

// =============================================================================
// Sync Task
// =============================================================================

/// Background task that turns cart changes into cart-update requests.
pub struct CartSync {
    api: Arc<dyn StorefrontApi>,
    notifier: Arc<dyn Notifier>,
    changes_rx: mpsc::UnboundedReceiver<CartChange>,
    shutdown_rx: mpsc::Receiver<()>,
    in_flight: JoinSet<()>,
}

impl CartSync {
    /// Spawns the sync task. Must be called within a tokio runtime.
    ///
    /// The task ends when [`CartSyncHandle::shutdown`] is called or every
    /// change sender has been dropped.
    pub fn spawn(
        api: Arc<dyn StorefrontApi>,
        notifier: Arc<dyn Notifier>,
        changes_rx: mpsc::UnboundedReceiver<CartChange>,
    ) -> CartSyncHandle {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);

        let sync = CartSync {
            api,
            notifier,
            changes_rx,
            shutdown_rx,
            in_flight: JoinSet::new(),
        };

        let task = tokio::spawn(sync.run());

        CartSyncHandle { shutdown_tx, task }
    }

    async fn run(mut self) {
        debug!("Cart sync started");

        loop {
            tokio::select! {
                change = self.changes_rx.recv() => match change {
                    Some(change) => self.dispatch(change),
                    None => {
                        debug!("Store dropped, cart sync stopping");
                        break;
                    }
                },
                Some(joined) = self.in_flight.join_next(), if !self.in_flight.is_empty() => {
                    if let Err(e) = joined {
                        warn!(error = %e, "Cart push task failed");
                    }
                }
                Some(()) = self.shutdown_rx.recv() => {
                    info!("Cart sync received shutdown");
                    break;
                }
            }
        }

        // Changes already queued still go out
        self.changes_rx.close();
        while let Ok(change) = self.changes_rx.try_recv() {
            self.dispatch(change);
        }

        let pending = self.in_flight.len();
        if pending > 0 {
            debug!(pending, "Waiting for in-flight cart pushes");
        }
        while let Some(joined) = self.in_flight.join_next().await {
            if let Err(e) = joined {
                warn!(error = %e, "Cart push task failed");
            }
        }

        debug!("Cart sync stopped");
    }

    fn dispatch(&mut self, change: CartChange) {
        let Some(user_id) = change.user_id else {
            debug!(revision = change.revision, "No user, cart change stays local");
            return;
        };

        let request = CartUpdateRequest {
            cart_items: change.cart,
            user_id,
        };

        self.in_flight.spawn(push_cart(
            Arc::clone(&self.api),
            Arc::clone(&self.notifier),
            request,
            change.revision,
        ));
    }
}

async fn push_cart(
    api: Arc<dyn StorefrontApi>,
    notifier: Arc<dyn Notifier>,
    request: CartUpdateRequest,
    revision: u64,
) {
    debug!(
        revision,
        user_id = %request.user_id,
        items = request.cart_items.len(),
        "Pushing cart"
    );

    match api.update_cart(&request).await {
        Ok(ack) if ack.success => {
            debug!(revision, "Cart push accepted");
        }
        Ok(ack) => {
            let message = ack.message.unwrap_or_else(|| DEFAULT_REJECTION.to_string());
            warn!(revision, %message, "Cart push rejected");
            notifier.error(&message);
        }
        Err(e) => {
            warn!(revision, error = %e, "Cart push failed");
            notifier.error(&e.to_string());
        }
    }
}
