use std::sync::{Arc, Mutex};

use chrono::{TimeZone, Utc};
use url::Url;

use torque_sdk::client::ApiClient;
use torque_sdk::models::customer::CustomerConfig;
use torque_sdk::models::AuthContext;
use torque_sdk::resolver::ApiIdentityResolver;
use torque_sdk::store::memory_store::MemoryStore;
use torque_sdk::torque::navigator::Navigator;
use torque_sdk::Torque;

/// Navigator fake that records every redirect target instead of navigating.
#[derive(Default)]
pub struct RecordingNavigator {
    targets: Mutex<Vec<Url>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_target(&self) -> Option<Url> {
        self.targets.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &Url) {
        self.targets.lock().unwrap().push(url.clone());
    }
}

pub struct TestHarness {
    pub torque: Torque,
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<RecordingNavigator>,
}

/// Build a facade wired to a mock API server, with an in-memory store and a
/// recording navigator.
pub fn build_torque(api_url: &str, api_public_key: &str) -> TestHarness {
    let store = Arc::new(MemoryStore::new());
    let navigator = Arc::new(RecordingNavigator::new());

    let customer = CustomerConfig {
        customer_handle: "acme".to_string(),
        api_public_key: api_public_key.to_string(),
        auth_callback_url: Some("https://host.example/auth".to_string()),
        fallback_url: Some("https://host.example/pricing".to_string()),
    };
    let client = ApiClient::new(api_url, api_public_key)
        .expect("failed to build API client")
        .with_store(store.clone());
    let resolver = Arc::new(ApiIdentityResolver::new(client.clone()));

    let torque = Torque::new(
        customer,
        Url::parse("https://app.torque.cloud").unwrap(),
        client,
        store.clone(),
        resolver,
        navigator.clone(),
    );

    TestHarness {
        torque,
        store,
        navigator,
    }
}

pub fn auth_context(token: &str) -> AuthContext {
    AuthContext::new(token, Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap())
}

/// Canonical `/user/me` response body embedding the given server-side token.
pub fn user_me_body(canonical_token: &str) -> String {
    format!(
        r#"{{
            "auth": {{"auth_token": "{}", "expires_on_iso": "2026-06-01T12:00:00Z"}},
            "user": {{
                "id": "u1",
                "email": "ada@example.com",
                "given_name": "Ada",
                "family_name": "Lovelace",
                "customer_specific_data": {{"plan": "pro"}}
            }}
        }}"#,
        canonical_token
    )
}
