//! REST client for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the session
//! token attached as a bearer credential.
//! Server-side (SSR) and native tests: every call fails with
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become [`ApiError::Status`] carrying the backend's own
//! message when it sent one. Callers decide whether to surface or rethrow.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{LoginRequest, LoginResponse};
use crate::config;

#[cfg(feature = "hydrate")]
use super::types::Envelope;
#[cfg(feature = "hydrate")]
use crate::util::session_storage::{BrowserSessionStore, SessionStore};
#[cfg(feature = "hydrate")]
use gloo_net::http::{Method, RequestBuilder, Response};

const LOGIN_PATH: &str = "/auth/login";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// HTTP client bound to one API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(config::api_base_url())
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: config::normalize_base_url(&base_url.into()) }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET path`, decoding a bare or `data`-wrapped JSON body.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure, non-2xx status, or an
    /// undecodable body.
    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send::<()>(Method::GET, path, None).await?;
            decode_body(&resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    /// `POST path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn post_json<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send(Method::POST, path, Some(body)).await?;
            decode_body(&resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `PUT path` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::get_json`].
    pub async fn put_json<B: Serialize + ?Sized, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = self.send(Method::PUT, path, Some(body)).await?;
            decode_body(&resp).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `DELETE path`. Any response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on transport failure or non-2xx status.
    pub async fn delete_path(&self, path: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            self.send::<()>(Method::DELETE, path, None).await?;
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Response, ApiError> {
        let url = self.url(path);
        let mut builder = RequestBuilder::new(&url)
            .method(method)
            .header("Accept", "application/json");
        if let Some(token) = BrowserSessionStore.load() {
            builder = builder.header("Authorization", &bearer_header(&token));
        }
        let request = match body {
            Some(body) => builder.json(body).map_err(|e| ApiError::Decode(e.to_string()))?,
            None => builder.build().map_err(|e| ApiError::Network(e.to_string()))?,
        };
        let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            leptos::logging::warn!("{} {url} failed: {status}", resp.status_text());
            return Err(ApiError::from_response(status, &body));
        }
        Ok(resp)
    }
}

#[cfg(feature = "hydrate")]
async fn decode_body<R: DeserializeOwned>(resp: &Response) -> Result<R, ApiError> {
    resp.json::<Envelope<R>>()
        .await
        .map(Envelope::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// The external login endpoint.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError>;
}

impl AuthApi for ApiClient {
    async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(LOGIN_PATH, credentials).await
    }
}
