use std::sync::Arc;

use tracing::info;
use url::Url;

use super::error::TorqueError;
use super::navigator::NoopNavigator;
use super::torque::Torque;
use crate::client::{fetch_customer_configuration, ApiClient};
use crate::config::{load_config, ConfigV1};
use crate::models::customer::{CustomerConfig, PUBLIC_KEY_PREFIX};
use crate::resolver::ApiIdentityResolver;
use crate::store::create_store;

/// Options for [`init_torque`].
pub struct TorqueInitOptions {
    pub api_public_key: String,
    /// Where the hosted pages send the user back after authentication.
    pub auth_callback_url: Option<String>,
    /// Where the hosted pages send the user when a flow is abandoned.
    pub fallback_url: Option<String>,
    /// SDK configuration override. When `None`, `torque.yaml` and
    /// `TORQUE_`-prefixed environment variables are consulted.
    pub config: Option<ConfigV1>,
}

impl TorqueInitOptions {
    pub fn new(api_public_key: impl Into<String>) -> Self {
        TorqueInitOptions {
            api_public_key: api_public_key.into(),
            auth_callback_url: None,
            fallback_url: None,
            config: None,
        }
    }
}

/// Validates the public key, loads the SDK configuration, fetches the
/// customer configuration from the backend and assembles the facade.
///
/// Construction never resolves identity eagerly: the returned facade starts
/// logged out regardless of what the store holds, until `retrieve_user`
/// inspects the persisted context.
pub async fn init_torque(options: TorqueInitOptions) -> Result<Torque, TorqueError> {
    if options.api_public_key.is_empty() {
        return Err(TorqueError::InvalidConfig(
            "Torque API public key not defined.".to_string(),
        ));
    }
    if !options.api_public_key.starts_with(PUBLIC_KEY_PREFIX) {
        return Err(TorqueError::InvalidConfig(format!(
            "Invalid public key. All public keys start with '{}'.",
            PUBLIC_KEY_PREFIX
        )));
    }

    let config = match options.config {
        Some(config) => config,
        None => load_config()?,
    };

    let store = create_store(&config.store);
    let client =
        ApiClient::new(&config.api_url, &options.api_public_key)?.with_store(store.clone());

    let customer_response =
        fetch_customer_configuration(&config.api_url, &options.api_public_key).await?;
    let customer = CustomerConfig {
        customer_handle: customer_response.customer_config.customer_handle,
        api_public_key: options.api_public_key,
        auth_callback_url: options.auth_callback_url,
        fallback_url: options.fallback_url,
    };
    info!(
        "Initialized Torque for customer '{}'",
        customer.customer_handle
    );

    let resolver = Arc::new(ApiIdentityResolver::new(client.clone()));
    let web_app_url = Url::parse(&config.web_app_url)?;

    Ok(Torque::new(
        customer,
        web_app_url,
        client,
        store,
        resolver,
        Arc::new(NoopNavigator),
    ))
}
