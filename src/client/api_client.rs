use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::store::AuthContextStore;
use crate::torque::error::TorqueError;

/// Fixed header carrying the SDK package version on every request.
pub const PACKAGE_VERSION_HEADER: &str = "torque-sdk-package-version";

/// Fixed header carrying the customer's public API key on every request.
pub const API_PUBLIC_KEY_HEADER: &str = "torque-api-public-key";

/// Derives the `Authorization` header for a bearer token. Pure; the outbound
/// pipeline attaches the result only when a session credential exists.
pub fn make_auth_header(auth_token: &str) -> Result<(HeaderName, HeaderValue), TorqueError> {
    let value = HeaderValue::from_str(&format!("Bearer {}", auth_token))
        .map_err(|e| TorqueError::InvalidParameter(format!("auth token is not header-safe: {}", e)))?;
    Ok((AUTHORIZATION, value))
}

/// HTTP client for the Torque API: base URL plus the fixed version and
/// public-key headers on every request. When a store is attached, requests
/// sent through [`ApiClient::get_json`] pick up the persisted bearer token;
/// without a current session they are sent unauthenticated, never blocked.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_url: Url,
    store: Option<Arc<dyn AuthContextStore>>,
}

impl ApiClient {
    pub fn new(api_url: &str, api_public_key: &str) -> Result<Self, TorqueError> {
        let api_url = Url::parse(api_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static(PACKAGE_VERSION_HEADER),
            HeaderValue::from_static(env!("CARGO_PKG_VERSION")),
        );
        headers.insert(
            HeaderName::from_static(API_PUBLIC_KEY_HEADER),
            HeaderValue::from_str(api_public_key).map_err(|e| {
                TorqueError::InvalidConfig(format!("public key is not header-safe: {}", e))
            })?,
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| TorqueError::Unknown(format!("failed to build HTTP client: {}", e)))?;

        Ok(ApiClient {
            http,
            api_url,
            store: None,
        })
    }

    /// Attach the session store; subsequent [`ApiClient::get_json`] calls
    /// inject the persisted bearer token when one exists.
    pub fn with_store(mut self, store: Arc<dyn AuthContextStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    fn url(&self, path: &str) -> Result<Url, TorqueError> {
        self.api_url
            .join(path.trim_start_matches('/'))
            .map_err(TorqueError::from)
    }

    /// GET with credential injection from the attached store.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TorqueError> {
        let mut request = self.http.get(self.url(path)?);
        if let Some(store) = &self.store {
            if let Some(context) = store.load().await {
                match make_auth_header(&context.auth_token) {
                    Ok((name, value)) => request = request.header(name, value),
                    // The request still goes out, just without credentials.
                    Err(e) => warn!("Skipping auth header on {}: {}", path, e),
                }
            }
        }
        self.execute(request).await
    }

    /// GET with an explicitly supplied bearer token, bypassing the store.
    pub async fn get_json_with_token<T: DeserializeOwned>(
        &self,
        path: &str,
        auth_token: &str,
    ) -> Result<T, TorqueError> {
        let (name, value) = make_auth_header(auth_token)?;
        let request = self.http.get(self.url(path)?).header(name, value);
        self.execute(request).await
    }

    /// POST with an explicitly supplied bearer token. Used for fire-and-forget
    /// notifications; the response body is discarded.
    pub async fn post_with_token(&self, path: &str, auth_token: &str) -> Result<(), TorqueError> {
        let (name, value) = make_auth_header(auth_token)?;
        let url = self.url(path)?;
        let response = self
            .http
            .post(url)
            .header(name, value)
            .send()
            .await
            .map_err(|e| TorqueError::Unknown(format!("Error sending request: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(TorqueError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, TorqueError> {
        let response = request
            .send()
            .await
            .map_err(|e| TorqueError::Unknown(format!("Error sending request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TorqueError::Unknown(format!("Error reading response body: {}", e)))?;

        if !status.is_success() {
            debug!("Request failed with status {}: {}", status, body);
            return Err(TorqueError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            TorqueError::UnexpectedResponseFormat(format!("Error parsing JSON: {}", e))
        })
    }
}
