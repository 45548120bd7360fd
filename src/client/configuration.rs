use cached::Return;
#[allow(unused_imports)]
use cached::proc_macro::cached;
use reqwest;
use tracing::debug;

use super::api_client::{API_PUBLIC_KEY_HEADER, PACKAGE_VERSION_HEADER};
use crate::models::CustomerConfigResponse;
use crate::torque::error::TorqueError;

const CONFIGURATION_PATH: &str = "/configuration";

/// Fetches the per-customer configuration for the given public key.
/// The configuration is static per customer, so results are served from a
/// short-lived cache.
pub async fn fetch_customer_configuration(
    api_url: &str,
    api_public_key: &str,
) -> Result<CustomerConfigResponse, TorqueError> {
    let cached_config = query(api_url.to_string(), api_public_key.to_string()).await?;
    if cached_config.was_cached {
        debug!(
            cache_result = "hit",
            cache_ttl_seconds = 60,
            "customer configuration served from cache"
        );
    }
    Ok((*cached_config).clone())
}

/// Queries the configuration endpoint, returning the customer config on success.
#[cfg_attr(
    not(test),
    cached(
        time = 60,
        result = true,
        with_cached_flag = true,
        sync_writes = true
    )
)]
async fn query(
    api_url: String,
    api_public_key: String,
) -> Result<Return<CustomerConfigResponse>, TorqueError> {
    let client = reqwest::Client::new();
    let url = format!("{}{}", api_url.trim_end_matches('/'), CONFIGURATION_PATH);

    debug!("Sending customer configuration request to: {}", url);
    let response = client
        .get(&url)
        .header(PACKAGE_VERSION_HEADER, env!("CARGO_PKG_VERSION"))
        .header(API_PUBLIC_KEY_HEADER, &api_public_key)
        .send()
        .await
        .map_err(|e| TorqueError::Unknown(format!("Error sending request: {}", e)))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| TorqueError::Unknown(format!("Error reading response body: {}", e)))?;

    if !status.is_success() {
        return Err(TorqueError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    let config: CustomerConfigResponse = serde_json::from_str(&body).map_err(|e| {
        TorqueError::UnexpectedResponseFormat(format!("Error parsing JSON: {}", e))
    })?;
    Ok(Return::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    /// A valid response yields the customer handle.
    #[tokio::test]
    async fn test_fetch_customer_configuration_success() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/configuration")
            .match_header(API_PUBLIC_KEY_HEADER, "pk_live_abc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"customer_config": {"customer_handle": "acme"}}"#)
            .create_async()
            .await;

        let result = fetch_customer_configuration(&server.url(), "pk_live_abc").await;
        m.assert_async().await;
        let config = result.unwrap();
        assert_eq!(config.customer_config.customer_handle, "acme");
    }

    /// An unknown key (401) surfaces as an api error, not a panic.
    #[tokio::test]
    async fn test_fetch_customer_configuration_unauthorized() {
        let mut server = Server::new_async().await;
        let m = server
            .mock("GET", "/configuration")
            .with_status(401)
            .with_body("unknown public key")
            .create_async()
            .await;

        let result = fetch_customer_configuration(&server.url(), "pk_live_nope").await;
        m.assert_async().await;
        assert!(result.unwrap_err().is_api_error());
    }

    #[tokio::test]
    async fn test_fetch_customer_configuration_bad_schema() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("GET", "/configuration")
            .with_status(200)
            .with_body(r#"{"customer_config": {}}"#)
            .create_async()
            .await;

        let result = fetch_customer_configuration(&server.url(), "pk_live_abc").await;
        assert!(matches!(
            result.unwrap_err(),
            TorqueError::UnexpectedResponseFormat(_)
        ));
    }
}
