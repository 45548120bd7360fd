use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use super::navigator::Navigator;
use crate::client::ApiClient;
use crate::models::{CustomerConfig, Price, TorqueUser};
use crate::resolver::IdentityResolver;
use crate::store::AuthContextStore;
use crate::torque::error::TorqueError;

const LOGIN_SEGMENT: &str = "projsim__log_in";
const REGISTRATION_SEGMENT: &str = "projsim__user_registration";

const USER_ME_LOGOUT_PATH: &str = "/user/me/logout";
const PRICE_BY_HANDLE_PATH: &str = "/price/by-handle";

const AUTH_CALLBACK_URL_PARAM: &str = "auth_callback_url";
const FALLBACK_URL_PARAM: &str = "fallback_url";
const USE_TEST_DATA_PARAM: &str = "use_test_data";
const PRICE_ID_PARAM: &str = "price_id";

/// Query keys owned by the SDK configuration. Caller-supplied parameters
/// never override these.
const BASE_PARAM_KEYS: [&str; 3] = [
    AUTH_CALLBACK_URL_PARAM,
    FALLBACK_URL_PARAM,
    USE_TEST_DATA_PARAM,
];

/// Primary Torque object: orchestrates the persisted auth context, the
/// identity resolver and the hosted-page redirects into one consistent
/// session view.
///
/// The facade holds no session state of its own. Every operation takes its
/// own snapshot of the store at invocation time, so two observable states
/// exist: logged out (empty store) and logged in (store holds a
/// valid-looking context).
pub struct Torque {
    customer: CustomerConfig,
    web_app_url: Url,
    client: ApiClient,
    store: Arc<dyn AuthContextStore>,
    resolver: Arc<dyn IdentityResolver>,
    navigator: Arc<dyn Navigator>,
}

impl std::fmt::Debug for Torque {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Torque")
            .field("customer", &self.customer)
            .field("web_app_url", &self.web_app_url)
            .finish_non_exhaustive()
    }
}

impl Torque {
    pub fn new(
        customer: CustomerConfig,
        web_app_url: Url,
        client: ApiClient,
        store: Arc<dyn AuthContextStore>,
        resolver: Arc<dyn IdentityResolver>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        info!(
            "Creating Torque facade for customer '{}'",
            customer.customer_handle
        );
        Torque {
            customer,
            web_app_url,
            client,
            store,
            resolver,
            navigator,
        }
    }

    /// Replace the redirect implementation (e.g. with a webview bridge).
    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn customer_config(&self) -> &CustomerConfig {
        &self.customer
    }

    /// Whether the hosted pages run against sandbox data.
    pub fn is_using_test_data(&self) -> bool {
        self.customer.is_test_key()
    }

    /// Resolve the current session to a user.
    ///
    /// An empty store resolves to `Unknown` without touching the network.
    /// A stored context is re-verified remotely; if the resolver rejects it,
    /// the store is cleared as a side effect so a stale local token heals
    /// itself into a clean logged-out state.
    pub async fn retrieve_user(&self) -> TorqueUser {
        let Some(context) = self.store.load().await else {
            debug!("No stored auth context, resolving to unknown user");
            return TorqueUser::Unknown;
        };

        match self.resolver.resolve_from_context(&context).await {
            user @ TorqueUser::Authenticated(_) => user,
            TorqueUser::Unknown => {
                info!("Stored auth context was rejected, clearing local session");
                self.store.clear().await;
                TorqueUser::Unknown
            }
        }
    }

    /// Complete the redirect-based auth flow: the hosted page sent the host
    /// application a bearer token, exchange it for a verified user.
    ///
    /// On success the canonical context from the server response is persisted
    /// (this is the only path that creates a persisted session). On failure
    /// nothing is written and `Unknown` is returned.
    pub async fn handle_authentication_callback(&self, auth_token: &str) -> TorqueUser {
        let user = self.resolver.resolve_from_token(auth_token).await;
        if let TorqueUser::Authenticated(authenticated) = &user {
            if let Err(e) = self.store.store(&authenticated.auth).await {
                warn!("Failed to persist auth context: {}", e);
            }
        }
        user
    }

    /// End the local session and (best-effort) tell the backend.
    ///
    /// The local transition is unconditional: the store is cleared before the
    /// remote notification is attempted, and a failed notification never
    /// resurrects the session.
    pub async fn logout(&self) -> TorqueUser {
        let context = self.store.load().await;
        self.store.clear().await;

        if let Some(context) = context {
            match self
                .client
                .post_with_token(USER_ME_LOGOUT_PATH, &context.auth_token)
                .await
            {
                Ok(()) => debug!("Remote logout notification delivered"),
                Err(e) => warn!("Remote logout notification failed: {}", e),
            }
        }

        TorqueUser::Unknown
    }

    /// Look up a price by its customer-assigned handle.
    pub async fn get_price_by_handle(&self, handle: &str) -> Result<Price, TorqueError> {
        if handle.trim().is_empty() {
            return Err(TorqueError::InvalidParameter(
                "price handle is empty".to_string(),
            ));
        }
        self.client
            .get_json(&format!("{}/{}", PRICE_BY_HANDLE_PATH, handle))
            .await
    }

    /// Merge caller-supplied query parameters with the base parameters
    /// derived from configuration (callback URL, fallback URL, test-mode
    /// flag). Base parameters always win; a colliding caller parameter is
    /// reported as a warning and dropped.
    pub fn query_params_with_base(
        &self,
        caller_params: &[(String, String)],
    ) -> Vec<(String, String)> {
        let mut params: Vec<(String, String)> = Vec::new();
        if let Some(callback_url) = &self.customer.auth_callback_url {
            params.push((AUTH_CALLBACK_URL_PARAM.to_string(), callback_url.clone()));
        }
        if let Some(fallback_url) = &self.customer.fallback_url {
            params.push((FALLBACK_URL_PARAM.to_string(), fallback_url.clone()));
        }
        if self.is_using_test_data() {
            params.push((USE_TEST_DATA_PARAM.to_string(), "true".to_string()));
        }

        for (key, value) in caller_params {
            if BASE_PARAM_KEYS.contains(&key.as_str()) {
                warn!(
                    "Query parameter '{}' is reserved for the SDK configuration, keeping the configured value",
                    key
                );
                continue;
            }
            params.push((key.clone(), value.clone()));
        }
        params
    }

    fn build_segment_url(
        &self,
        segment: &str,
        caller_params: &[(String, String)],
    ) -> Result<Url, TorqueError> {
        let mut url = self.web_app_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                TorqueError::InvalidConfig("web app URL cannot be a base".to_string())
            })?
            .pop_if_empty()
            .extend(&[self.customer.customer_handle.as_str(), segment]);
        url.query_pairs_mut()
            .extend_pairs(self.query_params_with_base(caller_params));
        Ok(url)
    }

    /// The hosted login page URL for this customer.
    pub fn build_login_url(&self) -> Result<Url, TorqueError> {
        self.build_segment_url(LOGIN_SEGMENT, &[])
    }

    /// The hosted registration page URL for this customer and price.
    pub fn build_registration_url(&self, price_id: &str) -> Result<Url, TorqueError> {
        if price_id.trim().is_empty() {
            return Err(TorqueError::InvalidParameter(
                "price id is empty".to_string(),
            ));
        }
        self.build_segment_url(
            REGISTRATION_SEGMENT,
            &[(PRICE_ID_PARAM.to_string(), price_id.to_string())],
        )
    }

    /// Send the browser into the hosted login flow. Fire-and-forget: once the
    /// navigator takes over, control leaves the application.
    pub fn start_login_segment(&self) -> Result<(), TorqueError> {
        let url = self.build_login_url()?;
        self.navigator.navigate(&url);
        Ok(())
    }

    /// Send the browser into the hosted registration flow for a price.
    pub fn start_registration_segment(&self, price_id: &str) -> Result<(), TorqueError> {
        let url = self.build_registration_url(price_id)?;
        self.navigator.navigate(&url);
        Ok(())
    }
}
