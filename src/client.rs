// ABOUTME: Typed HTTP client for the external body-metrics storage and identity API
// ABOUTME: Implements auth, user profile, and body-metric CRUD calls with bearer-token handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Bodytrack Project

//! Storage/Identity API Client
//!
//! A thin typed client over the REST-like backend the tracker talks to.
//! Registration and login produce a bearer token which the client stores and
//! attaches to every subsequent call.
//!
//! Token lifecycle: a 401 or 403 from any endpoint means the token is no
//! longer acceptable. The client discards it before returning, and the error
//! reports [`crate::errors::AppError::requires_login`] so the calling layer
//! can route back to its login screen. No retries, no backpressure; every
//! operation is a single request/response exchange.
//!
//! # Example
//! ```rust,no_run
//! use bodytrack::client::{TrackerClient, TrackerClientConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TrackerClient::new(TrackerClientConfig::default())?;
//! client.login("athlete@example.com", "secret").await?;
//! let metrics = client.list_metrics().await?;
//! println!("{} records", metrics.len());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::Duration;

use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::constants::{defaults, routes};
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{
    AuthToken, BodyMetric, BodyMetricCreate, BodyMetricUpdate, User, UserCreate, UserUpdate,
};

/// Display name used in error messages for the upstream service
const SERVICE: &str = "metrics API";

/// Tracker API client configuration
#[derive(Debug, Clone)]
pub struct TrackerClientConfig {
    /// Base URL of the API, including the version prefix
    /// (default: `http://localhost:8000/api/v1`)
    pub base_url: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl Default for TrackerClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_BASE_URL.into(),
            timeout_secs: defaults::HTTP_TIMEOUT_SECS,
        }
    }
}

/// `FastAPI`-style error body: `{"detail": "..."}`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    detail: String,
}

/// Typed client for the storage/identity API
pub struct TrackerClient {
    config: TrackerClientConfig,
    http_client: reqwest::Client,
    token: Arc<RwLock<Option<String>>>,
}

impl TrackerClient {
    /// Create a new client from configuration.
    ///
    /// # Errors
    /// Returns a configuration error if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: TrackerClientConfig) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::config("failed to build HTTP client").with_source(e))?;

        Ok(Self {
            config,
            http_client,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Install a bearer token, e.g. one restored from session storage.
    pub async fn set_token(&self, token: impl Into<String>) {
        *self.token.write().await = Some(token.into());
    }

    /// Discard the stored bearer token.
    pub async fn clear_token(&self) {
        *self.token.write().await = None;
    }

    /// Whether a bearer token is currently installed.
    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Current bearer token, if any; for callers that persist the session.
    pub async fn bearer_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    /// Register a new account.
    ///
    /// # Errors
    /// Returns an invalid-input error if the email is already registered, or
    /// an external-service error on any other API failure.
    pub async fn register(&self, user: &UserCreate) -> AppResult<User> {
        debug!(email = %user.email, "registering user");
        let builder = self
            .http_client
            .post(self.endpoint(routes::SIGNUP))
            .json(user);
        self.dispatch(builder).await
    }

    /// Exchange credentials for a bearer token and store it on the client.
    ///
    /// The endpoint speaks the `OAuth2` password flow shape: a form-urlencoded
    /// body with `username` and `password` fields.
    ///
    /// # Errors
    /// Returns an auth error when the credentials are rejected, or an
    /// external-service error on any other API failure.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthToken> {
        debug!(email = %email, "requesting access token");
        let builder = self
            .http_client
            .post(self.endpoint(routes::LOGIN))
            .form(&[("username", email), ("password", password)]);
        let token: AuthToken = self.dispatch(builder).await?;
        self.set_token(token.access_token.clone()).await;
        Ok(token)
    }

    /// Fetch the authenticated user record.
    ///
    /// # Errors
    /// Returns an auth error if the token was rejected (the token is
    /// discarded first), or an external-service error otherwise.
    pub async fn current_user(&self) -> AppResult<User> {
        let builder = self.http_client.get(self.endpoint(routes::ME));
        self.dispatch(self.authorize(builder).await).await
    }

    /// Patch the authenticated user record; unset fields are left untouched.
    ///
    /// # Errors
    /// Returns an auth error if the token was rejected (the token is
    /// discarded first), or an external-service error otherwise.
    pub async fn update_current_user(&self, update: &UserUpdate) -> AppResult<User> {
        let builder = self
            .http_client
            .patch(self.endpoint(routes::ME))
            .json(update);
        self.dispatch(self.authorize(builder).await).await
    }

    /// Ask the backend to re-derive BMI/FFMI/BMR for all stored records.
    ///
    /// Used after a profile change; each record's indexes are recomputed
    /// server-side with the age at that record's date. Returns the updated
    /// records.
    ///
    /// # Errors
    /// Returns an invalid-input error when the profile lacks a height, an
    /// auth error if the token was rejected, or an external-service error
    /// otherwise.
    pub async fn recalculate_metrics(&self) -> AppResult<Vec<BodyMetric>> {
        debug!("requesting server-side metric recalculation");
        let builder = self
            .http_client
            .post(self.endpoint(routes::RECALCULATE_METRICS));
        self.dispatch(self.authorize(builder).await).await
    }

    /// List the authenticated user's body-metric records.
    ///
    /// # Errors
    /// Returns an auth error if the token was rejected (the token is
    /// discarded first), or an external-service error otherwise.
    pub async fn list_metrics(&self) -> AppResult<Vec<BodyMetric>> {
        let builder = self.http_client.get(self.endpoint(routes::BODY_METRICS));
        self.dispatch(self.authorize(builder).await).await
    }

    /// Create a body-metric record.
    ///
    /// Derived indexes should already be merged into the payload via
    /// [`BodyMetricCreate::with_derived`]; the server stores them as given.
    ///
    /// # Errors
    /// Returns an auth error if the token was rejected (the token is
    /// discarded first), or an external-service error otherwise.
    pub async fn create_metric(&self, metric: &BodyMetricCreate) -> AppResult<BodyMetric> {
        debug!(date = %metric.date, "creating body metric");
        let builder = self
            .http_client
            .post(self.endpoint(routes::BODY_METRICS))
            .json(metric);
        self.dispatch(self.authorize(builder).await).await
    }

    /// Update a body-metric record by id.
    ///
    /// # Errors
    /// Returns a not-found error for an unknown id, an auth error if the
    /// token was rejected, or an external-service error otherwise.
    pub async fn update_metric(&self, id: Uuid, update: &BodyMetricUpdate) -> AppResult<BodyMetric> {
        debug!(%id, "updating body metric");
        let builder = self
            .http_client
            .put(self.item_endpoint(id))
            .json(update);
        self.dispatch(self.authorize(builder).await).await
    }

    /// Delete a body-metric record by id; returns the deleted record.
    ///
    /// # Errors
    /// Returns a not-found error for an unknown id, an auth error if the
    /// token was rejected, or an external-service error otherwise.
    pub async fn delete_metric(&self, id: Uuid) -> AppResult<BodyMetric> {
        debug!(%id, "deleting body metric");
        let builder = self.http_client.delete(self.item_endpoint(id));
        self.dispatch(self.authorize(builder).await).await
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    fn item_endpoint(&self, id: Uuid) -> String {
        format!(
            "{}{}{id}",
            self.config.base_url.trim_end_matches('/'),
            routes::BODY_METRICS
        )
    }

    /// Attach the stored bearer token, if any.
    async fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.token.read().await.as_deref() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Send a request and decode the response, mapping failures onto the
    /// unified error taxonomy. Rejected tokens are discarded here, before
    /// the error is surfaced.
    async fn dispatch<T: DeserializeOwned>(&self, builder: RequestBuilder) -> AppResult<T> {
        let response = builder.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                AppError::external_unavailable(SERVICE, e.to_string()).with_source(e)
            } else {
                AppError::external_service(SERVICE, e.to_string()).with_source(e)
            }
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(status = %status, "token rejected by API, discarding");
            self.clear_token().await;
            return Err(if status == StatusCode::UNAUTHORIZED {
                AppError::auth_invalid(error_detail(response).await)
            } else {
                AppError::auth_expired()
            });
        }

        if !status.is_success() {
            let detail = error_detail(response).await;
            return Err(if status == StatusCode::BAD_REQUEST {
                AppError::invalid_input(detail)
            } else if status == StatusCode::NOT_FOUND {
                AppError::new(ErrorCode::ResourceNotFound, detail)
            } else {
                AppError::external_service(SERVICE, format!("HTTP {status}: {detail}"))
            });
        }

        response
            .json()
            .await
            .map_err(|e| AppError::serialization(format!("response decode failed: {e}")))
    }
}

/// Extract the `FastAPI` `detail` message from an error body, falling back to
/// the raw body text.
async fn error_detail(response: reqwest::Response) -> String {
    let text = response.text().await.unwrap_or_default();
    serde_json::from_str::<ApiErrorBody>(&text).map_or(text, |body| body.detail)
}
