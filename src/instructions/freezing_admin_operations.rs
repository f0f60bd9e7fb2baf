use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount};

use crate::{
    constants::{GGWP_DECIMALS, TREASURY_AUTH_SEED},
    errors::FreezingError,
    events::{
        FreezingAdminUpdated, FreezingInitialized, FreezingUpdateAuthoritySet,
        RewardPeriodUpdated, RewardTableUpdated, RoyaltyUpdated, UnfreezeLockPeriodUpdated,
        UnfreezeRoyaltyUpdated,
    },
    state::{FreezingParams, GpassSettings, MintCapability, RewardTableRow},
};

/// Initialize a freezing pool
/// The signer becomes the admin and pays for the account
#[derive(Accounts)]
pub struct InitializeFreezing<'info> {
    /// The admin of the new pool, pays for account creation
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The freezing params account to be initialized
    #[account(
        init,
        payer = admin,
        space = 8 + FreezingParams::INIT_SPACE,
    )]
    pub freezing_params: Box<Account<'info, FreezingParams>>,

    /// The GPASS settings rewards will be minted on
    pub gpass_settings: Account<'info, GpassSettings>,

    /// The GGWP mint
    #[account(
        constraint = ggwp_token.decimals == GGWP_DECIMALS @ FreezingError::InvalidGgwpToken,
    )]
    pub ggwp_token: InterfaceAccount<'info, Mint>,

    /// GGWP token account receiving royalties and unfreeze penalties
    #[account(
        constraint = accumulative_fund.mint == ggwp_token.key() @ FreezingError::InvalidAccumulativeFund,
    )]
    pub accumulative_fund: InterfaceAccount<'info, TokenAccount>,

    /// The PDA owning the treasury
    /// # PDA Seeds
    /// - TREASURY_AUTH_SEED
    /// - The freezing params address
    ///
    /// CHECK: Only used as the treasury owner and transfer signer, holds no data
    #[account(
        seeds = [TREASURY_AUTH_SEED, freezing_params.key().as_ref()],
        bump,
    )]
    pub treasury_auth: UncheckedAccount<'info>,

    /// GGWP token account holding frozen principal
    /// Must be owned by `treasury_auth`
    #[account(
        constraint = treasury.mint == ggwp_token.key() @ FreezingError::InvalidTreasury,
        constraint = treasury.owner == treasury_auth.key() @ FreezingError::InvalidTreasury,
    )]
    pub treasury: InterfaceAccount<'info, TokenAccount>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeFreezing<'info> {
    /// Initialize the freezing params and record the pool's GPASS mint capability
    /// # Arguments
    /// * `update_auth` - The authority allowed to change economic parameters
    /// * `reward_period` - Length of one reward period in seconds (must be > 0)
    /// * `royalty` - Percent taken from every freeze (0-100)
    /// * `unfreeze_royalty` - Percent taken from an early unfreeze (0-100)
    /// * `unfreeze_lock_period` - Seconds before unfreezing is penalty free (must be > 0)
    /// * `reward_table` - 1 to 5 tiers, strictly ascending on both columns
    /// * `bumps` - The PDA bumps for account derivation
    /// # Returns
    /// * `Result<()>` - Ok if the pool is successfully initialized, Err otherwise
    #[allow(clippy::too_many_arguments)]
    pub fn initialize_freezing(
        &mut self,
        update_auth: Pubkey,
        reward_period: u64,
        royalty: u8,
        unfreeze_royalty: u8,
        unfreeze_lock_period: u64,
        reward_table: Vec<RewardTableRow>,
        bumps: &InitializeFreezingBumps,
    ) -> Result<()> {
        FreezingParams::validate_reward_period(reward_period)?;
        FreezingParams::validate_royalty(royalty)?;
        FreezingParams::validate_unfreeze_royalty(unfreeze_royalty)?;
        FreezingParams::validate_unfreeze_lock_period(unfreeze_lock_period)?;
        FreezingParams::validate_reward_table(&reward_table)?;

        let freezing_params_key = self.freezing_params.key();
        let gpass_settings_key = self.gpass_settings.key();

        self.freezing_params.set_inner(FreezingParams {
            admin: self.admin.key(),
            update_auth,
            ggwp_token: self.ggwp_token.key(),
            accumulative_fund: self.accumulative_fund.key(),
            treasury: self.treasury.key(),
            treasury_auth_bump: bumps.treasury_auth,
            gpass_settings: gpass_settings_key,
            gpass_mint_capability: MintCapability::new(gpass_settings_key, freezing_params_key),
            total_freezed: 0,
            reward_period,
            royalty,
            unfreeze_royalty,
            unfreeze_lock_period,
            reward_table,
        });

        // Minting only works once the GPASS update authority lists this pool as a minter
        if !self.gpass_settings.minters.contains(&freezing_params_key) {
            msg!(
                "Freezing pool {} is not yet a minter on {}",
                freezing_params_key,
                gpass_settings_key
            );
        }

        emit!(FreezingInitialized {
            freezing_params: freezing_params_key,
            admin: self.admin.key(),
            gpass_settings: gpass_settings_key,
            treasury: self.treasury.key(),
            accumulative_fund: self.accumulative_fund.key(),
        });

        Ok(())
    }
}

/// Admin and update authority operations on a freezing pool
#[derive(Accounts)]
pub struct UpdateFreezingParams<'info> {
    /// The admin or update authority, depending on the operation
    pub authority: Signer<'info>,

    /// The freezing params account to be modified
    #[account(mut)]
    pub freezing_params: Box<Account<'info, FreezingParams>>,
}

impl<'info> UpdateFreezingParams<'info> {
    /// Reassign the admin
    /// Requires the current admin
    pub fn update_admin(&mut self, new_admin: Pubkey) -> Result<()> {
        self.freezing_params.check_admin(self.authority.key())?;

        let prev_admin = self.freezing_params.admin;
        self.freezing_params.admin = new_admin;

        emit!(FreezingAdminUpdated {
            freezing_params: self.freezing_params.key(),
            prev_admin,
            new_admin,
        });

        Ok(())
    }

    /// Reassign the update authority
    /// Requires the current admin
    pub fn set_update_authority(&mut self, new_update_auth: Pubkey) -> Result<()> {
        self.freezing_params.check_admin(self.authority.key())?;

        let prev_update_auth = self.freezing_params.update_auth;
        self.freezing_params.update_auth = new_update_auth;

        emit!(FreezingUpdateAuthoritySet {
            freezing_params: self.freezing_params.key(),
            prev_update_auth,
            new_update_auth,
        });

        Ok(())
    }

    /// Set the freezing royalty
    /// # Arguments
    /// * `royalty` - The new percent taken from every freeze (0-100)
    /// # Returns
    /// * `Result<()>` - Ok if the royalty is successfully set, Err otherwise
    pub fn update_royalty(&mut self, royalty: u8) -> Result<()> {
        self.freezing_params.check_update_auth(self.authority.key())?;
        FreezingParams::validate_royalty(royalty)?;

        let prev_royalty = self.freezing_params.royalty;
        self.freezing_params.royalty = royalty;

        emit!(RoyaltyUpdated {
            freezing_params: self.freezing_params.key(),
            prev_royalty,
            new_royalty: royalty,
        });

        Ok(())
    }

    /// Set the early unfreeze penalty
    /// # Arguments
    /// * `unfreeze_royalty` - The new percent taken from an early unfreeze (0-100)
    /// # Returns
    /// * `Result<()>` - Ok if the penalty is successfully set, Err otherwise
    pub fn update_unfreeze_royalty(&mut self, unfreeze_royalty: u8) -> Result<()> {
        self.freezing_params.check_update_auth(self.authority.key())?;
        FreezingParams::validate_unfreeze_royalty(unfreeze_royalty)?;

        let prev_unfreeze_royalty = self.freezing_params.unfreeze_royalty;
        self.freezing_params.unfreeze_royalty = unfreeze_royalty;

        emit!(UnfreezeRoyaltyUpdated {
            freezing_params: self.freezing_params.key(),
            prev_unfreeze_royalty,
            new_unfreeze_royalty: unfreeze_royalty,
        });

        Ok(())
    }

    /// Set the reward period
    /// Applies to all open positions from their last payment on
    pub fn update_reward_period(&mut self, reward_period: u64) -> Result<()> {
        self.freezing_params.check_update_auth(self.authority.key())?;
        FreezingParams::validate_reward_period(reward_period)?;

        let prev_reward_period = self.freezing_params.reward_period;
        self.freezing_params.reward_period = reward_period;

        emit!(RewardPeriodUpdated {
            freezing_params: self.freezing_params.key(),
            prev_reward_period,
            new_reward_period: reward_period,
        });

        Ok(())
    }

    /// Replace the reward table
    pub fn update_reward_table(&mut self, reward_table: Vec<RewardTableRow>) -> Result<()> {
        self.freezing_params.check_update_auth(self.authority.key())?;
        FreezingParams::validate_reward_table(&reward_table)?;

        self.freezing_params.reward_table = reward_table.clone();

        emit!(RewardTableUpdated {
            freezing_params: self.freezing_params.key(),
            reward_table,
        });

        Ok(())
    }

    /// Set the unfreeze lock period
    pub fn update_unfreeze_lock_period(&mut self, unfreeze_lock_period: u64) -> Result<()> {
        self.freezing_params.check_update_auth(self.authority.key())?;
        FreezingParams::validate_unfreeze_lock_period(unfreeze_lock_period)?;

        let prev_unfreeze_lock_period = self.freezing_params.unfreeze_lock_period;
        self.freezing_params.unfreeze_lock_period = unfreeze_lock_period;

        emit!(UnfreezeLockPeriodUpdated {
            freezing_params: self.freezing_params.key(),
            prev_unfreeze_lock_period,
            new_unfreeze_lock_period: unfreeze_lock_period,
        });

        Ok(())
    }
}
