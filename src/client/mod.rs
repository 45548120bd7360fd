pub mod api_client;
pub mod configuration;

// Re-export the primary client items so code outside can do
// "use crate::client::{ApiClient, make_auth_header};"
pub use api_client::{make_auth_header, ApiClient};
pub use configuration::fetch_customer_configuration;
