pub mod freezing_params;
pub mod gpass_settings;
pub mod gpass_wallet;
pub mod mint_capability;
pub mod user_info;

pub use freezing_params::*;
pub use gpass_settings::*;
pub use gpass_wallet::*;
pub use mint_capability::*;
pub use user_info::*;
