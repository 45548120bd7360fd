use tracing::info;
use url::Url;

/// Performs the full-page redirect into a hosted Torque page.
///
/// Navigation is a fire-and-forget command: control leaves the application
/// and nothing comes back to await or cancel. Hosts embed their own
/// implementation (webview, system browser, ...); the SDK only builds the
/// target URL.
pub trait Navigator: Send + Sync {
    fn navigate(&self, url: &Url);
}

/// Default navigator: records the target in the log and does nothing else.
/// Useful for headless hosts and tests.
pub struct NoopNavigator;

impl Navigator for NoopNavigator {
    fn navigate(&self, url: &Url) {
        info!("Redirecting to {}", url);
    }
}
