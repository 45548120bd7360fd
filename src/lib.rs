//! Client-side SDK for authenticating end users against the Torque backend.
//!
//! The SDK manages exactly one logical session: it persists the auth context
//! locally, verifies it against the remote identity endpoint, and sends the
//! user into the hosted login/registration pages.
//!
//! ```no_run
//! use torque_sdk::{init_torque, TorqueInitOptions, TorqueUser};
//!
//! # async fn example() -> Result<(), torque_sdk::TorqueError> {
//! let torque = init_torque(TorqueInitOptions::new("pk_test_abc")).await?;
//!
//! match torque.retrieve_user().await {
//!     TorqueUser::Authenticated(user) => println!("hello {}", user.given_name),
//!     TorqueUser::Unknown => torque.start_login_segment()?,
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod models;
pub mod resolver;
pub mod store;
pub mod torque;
pub mod utils;

// The public SDK surface.
pub use models::{AuthContext, AuthenticatedTorqueUser, Price, TorqueUser};
pub use torque::{init_torque, Navigator, Torque, TorqueError, TorqueInitOptions};
