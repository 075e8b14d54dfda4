//! Test doubles for the backend seam and the notification sink.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use std::sync::Mutex;
use tokio::sync::Notify;

use crate::api::{AckResponse, CartUpdateRequest, ProductListResponse, StorefrontApi, UserResponse};
use crate::error::{ClientError, ClientResult};
use crate::notify::Notifier;

/// Scripted outcome of one fake endpoint.
#[derive(Debug, Clone)]
pub enum Reply<T> {
    Ok(T),
    /// Fails with a 500 carrying this message.
    Fail(String),
}

impl<T: Clone> Reply<T> {
    fn resolve(&self) -> ClientResult<T> {
        match self {
            Reply::Ok(value) => Ok(value.clone()),
            Reply::Fail(message) => Err(ClientError::Status {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}

pub fn ok_ack() -> AckResponse {
    AckResponse {
        success: true,
        message: None,
    }
}

pub fn rejected(message: &str) -> AckResponse {
    AckResponse {
        success: false,
        message: Some(message.to_string()),
    }
}

/// In-memory [`StorefrontApi`] with scripted replies.
pub struct FakeApi {
    pub seller: Mutex<Reply<AckResponse>>,
    pub user: Mutex<Reply<UserResponse>>,
    pub products: Mutex<Reply<ProductListResponse>>,
    pub cart_update: Mutex<Reply<AckResponse>>,
    pub pushed: Mutex<Vec<CartUpdateRequest>>,
    pub token: Mutex<Option<String>>,
    /// When set, cart updates wait for a `notify_one` before replying.
    pub hold_updates: Option<Notify>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            seller: Mutex::new(Reply::Ok(AckResponse::default())),
            user: Mutex::new(Reply::Ok(UserResponse::default())),
            products: Mutex::new(Reply::Ok(ProductListResponse {
                success: true,
                ..Default::default()
            })),
            cart_update: Mutex::new(Reply::Ok(ok_ack())),
            pushed: Mutex::new(Vec::new()),
            token: Mutex::new(None),
            hold_updates: None,
        }
    }
}

impl FakeApi {
    pub fn pushed(&self) -> Vec<CartUpdateRequest> {
        self.pushed.lock().unwrap().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorefrontApi for FakeApi {
    fn set_bearer_token(&self, token: Option<SecretString>) {
        *self.token.lock().unwrap() = token.map(|t| t.expose_secret().to_string());
    }

    async fn seller_is_auth(&self) -> ClientResult<AckResponse> {
        let reply = self.seller.lock().unwrap().clone();
        reply.resolve()
    }

    async fn user_is_auth(&self) -> ClientResult<UserResponse> {
        let reply = self.user.lock().unwrap().clone();
        reply.resolve()
    }

    async fn product_list(&self) -> ClientResult<ProductListResponse> {
        let reply = self.products.lock().unwrap().clone();
        reply.resolve()
    }

    async fn update_cart(&self, request: &CartUpdateRequest) -> ClientResult<AckResponse> {
        self.pushed.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.hold_updates {
            gate.notified().await;
        }
        let reply = self.cart_update.lock().unwrap().clone();
        reply.resolve()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

/// Notifier that records everything it is told.
#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<Notification> {
        self.seen.lock().unwrap().clone()
    }

    pub fn successes(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Success(m) => Some(m),
                Notification::Error(_) => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<String> {
        self.all()
            .into_iter()
            .filter_map(|n| match n {
                Notification::Error(m) => Some(m),
                Notification::Success(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.seen
            .lock()
            .unwrap()
            .push(Notification::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.seen
            .lock()
            .unwrap()
            .push(Notification::Error(message.to_string()));
    }
}
