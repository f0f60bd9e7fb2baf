pub mod freezing_admin_operations;
pub mod freezing_operations;
pub mod gpass_admin_operations;
pub mod gpass_wallet_operations;

pub use freezing_admin_operations::*;
pub use freezing_operations::*;
pub use gpass_admin_operations::*;
pub use gpass_wallet_operations::*;

#[cfg(test)]
mod scenarios;
