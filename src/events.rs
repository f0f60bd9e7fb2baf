use anchor_lang::prelude::*;

use crate::state::RewardTableRow;

// GPASS

/// Event emitted when a GPASS settings account is initialized
/// Fields:
/// - gpass_settings: The address of the new settings account
/// - admin: The admin of the settings
/// - update_auth: The update authority of the settings
/// - burn_period: The inactivity window in seconds
#[event]
pub struct GpassInitialized {
    pub gpass_settings: Pubkey,
    pub admin: Pubkey,
    pub update_auth: Pubkey,
    pub burn_period: u64,
}

/// Event emitted when the GPASS admin is reassigned
/// Fields:
/// - gpass_settings: The address of the settings account
/// - prev_admin: The admin before the change
/// - new_admin: The admin after the change
#[event]
pub struct GpassAdminUpdated {
    pub gpass_settings: Pubkey,
    pub prev_admin: Pubkey,
    pub new_admin: Pubkey,
}

/// Event emitted when the GPASS update authority is reassigned
/// Fields:
/// - gpass_settings: The address of the settings account
/// - prev_update_auth: The update authority before the change
/// - new_update_auth: The update authority after the change
#[event]
pub struct GpassUpdateAuthoritySet {
    pub gpass_settings: Pubkey,
    pub prev_update_auth: Pubkey,
    pub new_update_auth: Pubkey,
}

/// Event emitted when the burn period changes
#[event]
pub struct BurnPeriodUpdated {
    pub gpass_settings: Pubkey,
    pub prev_burn_period: u64,
    pub new_burn_period: u64,
}

/// Event emitted when the minters list is replaced
#[event]
pub struct MintersUpdated {
    pub gpass_settings: Pubkey,
    pub minters: Vec<Pubkey>,
}

/// Event emitted when the burners list is replaced
#[event]
pub struct BurnersUpdated {
    pub gpass_settings: Pubkey,
    pub burners: Vec<Pubkey>,
}

/// Event emitted when a user's GPASS wallet is created
#[event]
pub struct GpassWalletCreated {
    pub gpass_settings: Pubkey,
    pub wallet: Pubkey,
    pub owner: Pubkey,
}

/// Event emitted when GPASS is minted to a wallet
/// Fields:
/// - wallet: The address of the credited wallet
/// - authority: The minter, or the freezing pool minting through its capability
/// - amount: The amount minted
/// - balance: The wallet balance after minting
#[event]
pub struct GpassMinted {
    pub wallet: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

/// Event emitted when GPASS is burned from a wallet
/// Fields:
/// - wallet: The address of the debited wallet
/// - authority: The burner
/// - amount: The amount requested to burn
/// - balance: The wallet balance after burning
#[event]
pub struct GpassBurned {
    pub wallet: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub balance: u64,
}

/// Event emitted when an expired wallet balance is swept to zero
#[event]
pub struct GpassDecayed {
    pub wallet: Pubkey,
    pub amount: u64,
}

// FREEZING

/// Event emitted when a freezing pool is initialized
/// Fields:
/// - freezing_params: The address of the new params account
/// - admin: The admin of the pool
/// - gpass_settings: The GPASS settings rewards are minted on
/// - treasury: The token account holding frozen principal
/// - accumulative_fund: The token account receiving royalties and penalties
#[event]
pub struct FreezingInitialized {
    pub freezing_params: Pubkey,
    pub admin: Pubkey,
    pub gpass_settings: Pubkey,
    pub treasury: Pubkey,
    pub accumulative_fund: Pubkey,
}

#[event]
pub struct FreezingAdminUpdated {
    pub freezing_params: Pubkey,
    pub prev_admin: Pubkey,
    pub new_admin: Pubkey,
}

#[event]
pub struct FreezingUpdateAuthoritySet {
    pub freezing_params: Pubkey,
    pub prev_update_auth: Pubkey,
    pub new_update_auth: Pubkey,
}

#[event]
pub struct RoyaltyUpdated {
    pub freezing_params: Pubkey,
    pub prev_royalty: u8,
    pub new_royalty: u8,
}

#[event]
pub struct UnfreezeRoyaltyUpdated {
    pub freezing_params: Pubkey,
    pub prev_unfreeze_royalty: u8,
    pub new_unfreeze_royalty: u8,
}

#[event]
pub struct RewardPeriodUpdated {
    pub freezing_params: Pubkey,
    pub prev_reward_period: u64,
    pub new_reward_period: u64,
}

#[event]
pub struct RewardTableUpdated {
    pub freezing_params: Pubkey,
    pub reward_table: Vec<RewardTableRow>,
}

#[event]
pub struct UnfreezeLockPeriodUpdated {
    pub freezing_params: Pubkey,
    pub prev_unfreeze_lock_period: u64,
    pub new_unfreeze_lock_period: u64,
}

/// Event emitted when a user opens a freezing position
/// Fields:
/// - user: The user freezing GGWP
/// - amount: The amount the user paid in
/// - royalty_amount: The part sent to the accumulative fund
/// - freezed_amount: The principal locked in the treasury
/// - gpass_reward: GPASS minted for the first period
#[event]
pub struct Freezed {
    pub freezing_params: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub royalty_amount: u64,
    pub freezed_amount: u64,
    pub gpass_reward: u64,
}

/// Event emitted when accrued GPASS is paid out
#[event]
pub struct GpassWithdrawn {
    pub freezing_params: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
}

/// Event emitted when a user closes a freezing position
/// Fields:
/// - freezed_amount: The principal that was locked
/// - penalty: The early-exit penalty sent to the accumulative fund
/// - returned_amount: The GGWP returned to the user
/// - gpass_reward: GPASS minted for periods settled on exit
#[event]
pub struct Unfreezed {
    pub freezing_params: Pubkey,
    pub user: Pubkey,
    pub freezed_amount: u64,
    pub penalty: u64,
    pub returned_amount: u64,
    pub gpass_reward: u64,
}
