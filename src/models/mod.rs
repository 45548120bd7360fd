pub mod auth_context;
pub mod customer;
pub mod price;
pub mod user;

// Re-export the primary model items so code outside can do
// "use crate::models::{AuthContext, TorqueUser};"
pub use auth_context::AuthContext;
pub use customer::{CustomerConfig, CustomerConfigResponse};
pub use price::Price;
pub use user::{AuthenticatedTorqueUser, TorqueUser, UserMeResponse};
