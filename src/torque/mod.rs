pub mod error;
pub mod init;
pub mod navigator;
#[allow(clippy::module_inception)]
pub mod torque;

// Re-export the primary facade items so code outside can do
// "use crate::torque::{Torque, init_torque, TorqueError};"
pub use error::TorqueError;
pub use init::{init_torque, TorqueInitOptions};
pub use navigator::{Navigator, NoopNavigator};
pub use torque::Torque;
