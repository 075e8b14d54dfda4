//! # HTTP Backend Client
//!
//! `reqwest` implementation of [`StorefrontApi`].
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AppStore / CartSync                                                    │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  HttpApi::get_json / post_json                                          │
//! │        │  base_url.join("api/...")                                      │
//! │        │  + Authorization: Bearer <token>   (when a token is set)       │
//! │        │  + cookie jar                      (credentialed requests)     │
//! │        ▼                                                                │
//! │  2xx ──► decode JSON envelope ──► Ok(envelope)                          │
//! │  else ─► ClientError::Status { status, message }                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use reqwest::RequestBuilder;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{PoisonError, RwLock};
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::api::{
    AckResponse, CartUpdateRequest, ProductListResponse, StorefrontApi, UserResponse,
    CART_UPDATE_PATH, PRODUCT_LIST_PATH, SELLER_IS_AUTH_PATH, USER_IS_AUTH_PATH,
};
use crate::config::BackendSettings;
use crate::error::{ClientError, ClientResult};

/// Storefront backend over HTTP.
pub struct HttpApi {
    client: reqwest::Client,
    base_url: Url,
    token: RwLock<Option<SecretString>>,
}

impl HttpApi {
    /// Builds the HTTP client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns error if the URL does not parse or the client fails to build.
    pub fn new(settings: &BackendSettings) -> ClientResult<Self> {
        let mut base_url = Url::parse(&settings.url)?;
        // join() replaces the last path segment unless the base ends in '/'
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            token: RwLock::new(None),
        })
    }

    fn endpoint(&self, path: &str) -> ClientResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.token.read().unwrap_or_else(PoisonError::into_inner);
        match token.as_ref() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.endpoint(path)?;
        debug!(%url, "GET");
        let request = self.authorize(self.client.get(url));
        Self::read_json(request.send().await?).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(%url, "POST");
        let request = self.authorize(self.client.post(url).json(body));
        Self::read_json(request.send().await?).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Error bodies usually still carry the {success, message} envelope
            let message = serde_json::from_str::<AckResponse>(&body)
                .ok()
                .and_then(|ack| ack.message)
                .unwrap_or(body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl StorefrontApi for HttpApi {
    fn set_bearer_token(&self, token: Option<SecretString>) {
        debug!(present = token.is_some(), "Updating bearer token");
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
    }

    async fn seller_is_auth(&self) -> ClientResult<AckResponse> {
        self.get_json(SELLER_IS_AUTH_PATH).await
    }

    async fn user_is_auth(&self) -> ClientResult<UserResponse> {
        self.get_json(USER_IS_AUTH_PATH).await
    }

    async fn product_list(&self) -> ClientResult<ProductListResponse> {
        self.get_json(PRODUCT_LIST_PATH).await
    }

    async fn update_cart(&self, request: &CartUpdateRequest) -> ClientResult<AckResponse> {
        self.post_json(CART_UPDATE_PATH, request).await
    }
}
