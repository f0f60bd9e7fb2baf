#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
mod constants;
mod errors;
mod events;
mod instructions;
pub mod security;
mod state;
mod utils;

use instructions::*;
use state::RewardTableRow;

#[cfg(feature = "devnet")]
declare_id!("4heTXDzVV2dvzNzcxif1d51XAhaFV2A3Y6vTyJPZsB6J");
#[cfg(feature = "mainnet")]
declare_id!("D7ZqSg1Sqk6hQRwBgzwTckn5oEApyggT2JoYH2yAzkTk");
#[cfg(not(any(feature = "mainnet", feature = "devnet")))]
declare_id!("Gdz58RViuNh16E8woRPKGjHd6nzGEsbwD3QjAys7WrrA");

#[program]
pub mod ggwp_core {
    use super::*;

    // GPASS

    /// Initialize a GPASS settings account
    ///
    /// The signer becomes the admin. Minters may mint GPASS, burners may burn it,
    /// and any balance left untouched for `burn_period` seconds is swept to zero.
    pub fn initialize_gpass(
        ctx: Context<InitializeGpass>,
        burn_period: u64,
        update_auth: Pubkey,
        minters: Vec<Pubkey>,
        burners: Vec<Pubkey>,
    ) -> Result<()> {
        ctx.accounts
            .initialize_gpass(burn_period, update_auth, minters, burners)
    }

    /// Reassign the GPASS admin
    /// Signer must be the current admin
    pub fn gpass_update_admin(ctx: Context<UpdateGpassSettings>, new_admin: Pubkey) -> Result<()> {
        ctx.accounts.update_admin(new_admin)
    }

    /// Reassign the GPASS update authority
    /// Signer must be the current admin
    pub fn gpass_set_update_authority(
        ctx: Context<UpdateGpassSettings>,
        new_update_auth: Pubkey,
    ) -> Result<()> {
        ctx.accounts.set_update_authority(new_update_auth)
    }

    /// Set the GPASS burn period
    /// Signer must be the update authority
    pub fn update_burn_period(ctx: Context<UpdateGpassSettings>, burn_period: u64) -> Result<()> {
        ctx.accounts.update_burn_period(burn_period)
    }

    /// Replace the GPASS minters
    /// Signer must be the update authority
    pub fn update_minters(ctx: Context<UpdateGpassSettings>, minters: Vec<Pubkey>) -> Result<()> {
        ctx.accounts.update_minters(minters)
    }

    /// Replace the GPASS burners
    /// Signer must be the update authority
    pub fn update_burners(ctx: Context<UpdateGpassSettings>, burners: Vec<Pubkey>) -> Result<()> {
        ctx.accounts.update_burners(burners)
    }

    /// Create a user's GPASS wallet
    /// Unpermissioned, idempotent
    pub fn create_gpass_wallet(ctx: Context<CreateGpassWallet>) -> Result<()> {
        ctx.accounts.create_gpass_wallet(&ctx.bumps)
    }

    /// Mint GPASS to a wallet
    /// Signer must be a minter
    pub fn gpass_mint_to(ctx: Context<MintGpass>, amount: u64) -> Result<()> {
        ctx.accounts.gpass_mint_to(amount)
    }

    /// Burn GPASS from a wallet
    /// Signer must be a burner
    pub fn gpass_burn(ctx: Context<BurnGpass>, amount: u64) -> Result<()> {
        ctx.accounts.gpass_burn(amount)
    }

    /// Sweep a wallet whose burn period has passed
    /// Unpermissioned
    pub fn try_burn_in_period(ctx: Context<BurnInPeriod>) -> Result<()> {
        ctx.accounts.try_burn_in_period()
    }

    // FREEZING

    /// Initialize a freezing pool
    ///
    /// The signer becomes the admin. The pool records a mint capability on `gpass_settings`;
    /// the GPASS update authority must list the pool as a minter before rewards can be paid.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_freezing(
        ctx: Context<InitializeFreezing>,
        update_auth: Pubkey,
        reward_period: u64,
        royalty: u8,
        unfreeze_royalty: u8,
        unfreeze_lock_period: u64,
        reward_table: Vec<RewardTableRow>,
    ) -> Result<()> {
        ctx.accounts.initialize_freezing(
            update_auth,
            reward_period,
            royalty,
            unfreeze_royalty,
            unfreeze_lock_period,
            reward_table,
            &ctx.bumps,
        )
    }

    /// Reassign the freezing admin
    /// Signer must be the current admin
    pub fn freezing_update_admin(
        ctx: Context<UpdateFreezingParams>,
        new_admin: Pubkey,
    ) -> Result<()> {
        ctx.accounts.update_admin(new_admin)
    }

    /// Reassign the freezing update authority
    /// Signer must be the current admin
    pub fn freezing_set_update_authority(
        ctx: Context<UpdateFreezingParams>,
        new_update_auth: Pubkey,
    ) -> Result<()> {
        ctx.accounts.set_update_authority(new_update_auth)
    }

    /// Set the freezing royalty
    /// Signer must be the update authority
    pub fn update_royalty(ctx: Context<UpdateFreezingParams>, royalty: u8) -> Result<()> {
        ctx.accounts.update_royalty(royalty)
    }

    /// Set the early unfreeze penalty
    /// Signer must be the update authority
    pub fn update_unfreeze_royalty(
        ctx: Context<UpdateFreezingParams>,
        unfreeze_royalty: u8,
    ) -> Result<()> {
        ctx.accounts.update_unfreeze_royalty(unfreeze_royalty)
    }

    /// Set the reward period
    /// Signer must be the update authority
    pub fn update_reward_period(
        ctx: Context<UpdateFreezingParams>,
        reward_period: u64,
    ) -> Result<()> {
        ctx.accounts.update_reward_period(reward_period)
    }

    /// Replace the reward table
    /// Signer must be the update authority
    pub fn update_reward_table(
        ctx: Context<UpdateFreezingParams>,
        reward_table: Vec<RewardTableRow>,
    ) -> Result<()> {
        ctx.accounts.update_reward_table(reward_table)
    }

    /// Set the unfreeze lock period
    /// Signer must be the update authority
    pub fn update_unfreeze_lock_period(
        ctx: Context<UpdateFreezingParams>,
        unfreeze_lock_period: u64,
    ) -> Result<()> {
        ctx.accounts
            .update_unfreeze_lock_period(unfreeze_lock_period)
    }

    /// Freeze GGWP
    ///
    /// The royalty goes to the accumulative fund, the rest is locked in the treasury
    /// and the first period's GPASS is minted right away.
    /// One open position per user and pool
    pub fn freeze(ctx: Context<Freeze>, amount: u64) -> Result<()> {
        ctx.accounts.freeze(amount, &ctx.bumps)
    }

    /// Withdraw GPASS accrued since the last payment
    pub fn withdraw_gpass(ctx: Context<WithdrawGpass>) -> Result<()> {
        ctx.accounts.withdraw_gpass()
    }

    /// Unfreeze GGWP
    ///
    /// Pending GPASS is paid first. Unfreezing inside the lock period sends
    /// `unfreeze_royalty` percent of the principal to the accumulative fund.
    pub fn unfreeze(ctx: Context<Unfreeze>) -> Result<()> {
        ctx.accounts.unfreeze()
    }
}
