// PDA SEEDS

/// Seed for a user's GPASS wallet PDA
pub const GPASS_WALLET_SEED: &[u8] = b"user_gpass_wallet";
/// Seed for a user's freezing position PDA
pub const USER_INFO_SEED: &[u8] = b"user_info";
/// Seed for the PDA that owns the freezing treasury
pub const TREASURY_AUTH_SEED: &[u8] = b"treasury_auth";

// AUTHORITY LIST BOUNDS

/// Maximum number of GPASS minters
pub const MAX_MINTERS: usize = 1;
/// Maximum number of GPASS burners
pub const MAX_BURNERS: usize = 3;
/// Maximum number of rows in the freezing reward table
pub const MAX_REWARD_TABLE_LEN: usize = 5;

// SCALING FACTORS

/// 100 percent - upper bound for royalty values
pub const MAX_PERCENT: u8 = 100;
/// Divisor for percent calculations
pub const PERCENT_DIVISOR: u64 = 100;

/// Number of decimals for the GGWP token
pub const GGWP_DECIMALS: u8 = 9;
