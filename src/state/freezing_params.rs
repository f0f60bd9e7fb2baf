use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_PERCENT, MAX_REWARD_TABLE_LEN},
    errors::FreezingError,
    state::{MintCapability, UserInfo},
    utils::calc_royalty_amount,
};

/// One tier of the reward table: principals of at least `ggwp_amount` earn `gpass_amount` per period
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct RewardTableRow {
    pub ggwp_amount: u64,
    pub gpass_amount: u64,
}

/// Freezing params account - custody accounts and economic parameters of one freezing pool
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct FreezingParams {
    // Full control, including reassigning the update authority
    pub admin: Pubkey,

    // Operational control over the economic parameters
    pub update_auth: Pubkey,

    // The GGWP mint users freeze
    pub ggwp_token: Pubkey,

    // GGWP token account receiving freezing royalties and unfreeze penalties
    pub accumulative_fund: Pubkey,

    // GGWP token account holding frozen principal, owned by the treasury auth PDA
    pub treasury: Pubkey,

    // Bump of the treasury auth PDA
    pub treasury_auth_bump: u8,

    // The GPASS settings account rewards are minted on
    pub gpass_settings: Pubkey,

    // Right to mint GPASS granted to this pool at initialization
    pub gpass_mint_capability: MintCapability,

    // Sum of all open positions
    pub total_freezed: u64,

    // Length of one reward period in seconds
    pub reward_period: u64,

    // Percent taken from every freeze
    pub royalty: u8,

    // Percent taken from an unfreeze inside the lock period
    pub unfreeze_royalty: u8,

    // Seconds a position must stay frozen to unfreeze without penalty
    pub unfreeze_lock_period: u64,

    // Reward tiers, strictly ascending on both columns
    #[max_len(5)]
    pub reward_table: Vec<RewardTableRow>,
}

/// Whole reward periods a position has accrued and not yet been paid for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PendingReward {
    pub periods: u64,
    pub gpass: u64,
    pub credited_until: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FreezeReceipt {
    pub royalty_amount: u64,
    pub freezed_amount: u64,
    pub gpass_reward: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnfreezeReceipt {
    pub freezed_amount: u64,
    pub penalty: u64,
    pub returned_amount: u64,
    pub gpass_reward: u64,
}

impl FreezingParams {
    pub fn validate_reward_period(reward_period: u64) -> Result<()> {
        require_neq!(reward_period, 0, FreezingError::InvalidRewardPeriod);
        Ok(())
    }

    pub fn validate_royalty(royalty: u8) -> Result<()> {
        require_gte!(MAX_PERCENT, royalty, FreezingError::InvalidRoyaltyValue);
        Ok(())
    }

    pub fn validate_unfreeze_royalty(unfreeze_royalty: u8) -> Result<()> {
        require_gte!(
            MAX_PERCENT,
            unfreeze_royalty,
            FreezingError::InvalidUnfreezeRoyaltyValue
        );
        Ok(())
    }

    pub fn validate_unfreeze_lock_period(unfreeze_lock_period: u64) -> Result<()> {
        require_neq!(
            unfreeze_lock_period,
            0,
            FreezingError::InvalidUnfreezeLockPeriod
        );
        Ok(())
    }

    pub fn validate_reward_table(reward_table: &[RewardTableRow]) -> Result<()> {
        require!(
            !reward_table.is_empty() && reward_table.len() <= MAX_REWARD_TABLE_LEN,
            FreezingError::InvalidRewardTable
        );

        let ascending = reward_table.windows(2).all(|pair| {
            pair[0].ggwp_amount < pair[1].ggwp_amount && pair[0].gpass_amount < pair[1].gpass_amount
        });
        require!(ascending, FreezingError::InvalidRewardTable);

        Ok(())
    }

    pub fn check_admin(&self, authority: Pubkey) -> Result<()> {
        require_keys_eq!(authority, self.admin, FreezingError::AccessDenied);
        Ok(())
    }

    pub fn check_update_auth(&self, authority: Pubkey) -> Result<()> {
        require_keys_eq!(authority, self.update_auth, FreezingError::AccessDenied);
        Ok(())
    }

    /// The mint capability, provided it is still scoped to this pool and its GPASS settings
    pub fn mint_capability(&self, params_key: &Pubkey) -> Result<MintCapability> {
        require!(
            self.gpass_mint_capability
                .is_scoped_to(&self.gpass_settings, params_key),
            FreezingError::InvalidMintCapability
        );
        Ok(self.gpass_mint_capability)
    }

    /// GPASS per period for a principal: the highest tier whose threshold it reaches, or zero
    pub fn gpass_per_period(&self, freezed_amount: u64) -> u64 {
        self.reward_table
            .iter()
            .rev()
            .find(|row| row.ggwp_amount <= freezed_amount)
            .map_or(0, |row| row.gpass_amount)
    }

    pub fn pending_reward(&self, user_info: &UserInfo, now: i64) -> Result<PendingReward> {
        if !user_info.has_position() {
            return Ok(PendingReward {
                credited_until: user_info.last_getting_gpass,
                ..PendingReward::default()
            });
        }

        let elapsed = now
            .checked_sub(user_info.last_getting_gpass)
            .ok_or(FreezingError::Overflow)?;
        let elapsed = u64::try_from(elapsed).map_err(|_| FreezingError::Overflow)?;

        let periods = elapsed
            .checked_div(self.reward_period)
            .ok_or(FreezingError::DivideByZero)?;
        let gpass = periods
            .checked_mul(user_info.gpass_per_period)
            .ok_or(FreezingError::Overflow)?;

        let credited = periods
            .checked_mul(self.reward_period)
            .and_then(|seconds| i64::try_from(seconds).ok())
            .ok_or(FreezingError::Overflow)?;
        let credited_until = user_info
            .last_getting_gpass
            .checked_add(credited)
            .ok_or(FreezingError::Overflow)?;

        Ok(PendingReward {
            periods,
            gpass,
            credited_until,
        })
    }

    /// True while the position is younger than the unfreeze lock period
    pub fn is_unfreeze_penalized(&self, user_info: &UserInfo, now: i64) -> Result<bool> {
        let spent_time = now
            .checked_sub(user_info.freezed_time)
            .ok_or(FreezingError::Overflow)?;
        let spent_time = u64::try_from(spent_time).map_err(|_| FreezingError::Overflow)?;

        Ok(spent_time < self.unfreeze_lock_period)
    }

    /// Open a position for `amount` of GGWP.
    /// The receipt says how the amount splits between the fund and the treasury
    /// and how much GPASS to credit for the first period.
    pub fn freeze(
        &mut self,
        user_info: &mut UserInfo,
        amount: u64,
        now: i64,
    ) -> Result<FreezeReceipt> {
        require_neq!(amount, 0, FreezingError::ZeroFreezingAmount);
        require!(
            !user_info.has_position(),
            FreezingError::AdditionalFreezingNotAvailable
        );

        let royalty_amount = calc_royalty_amount(amount, self.royalty)?;
        let freezed_amount = amount
            .checked_sub(royalty_amount)
            .ok_or(FreezingError::Overflow)?;
        require_neq!(freezed_amount, 0, FreezingError::ZeroFreezingAmount);

        let total_freezed = self
            .total_freezed
            .checked_add(freezed_amount)
            .ok_or(FreezingError::Overflow)?;

        let gpass_per_period = self.gpass_per_period(freezed_amount);

        user_info.freezed_amount = freezed_amount;
        user_info.freezed_time = now;
        user_info.last_getting_gpass = now;
        user_info.gpass_per_period = gpass_per_period;
        self.total_freezed = total_freezed;

        Ok(FreezeReceipt {
            royalty_amount,
            freezed_amount,
            gpass_reward: gpass_per_period,
        })
    }

    /// Pay out whole reward periods elapsed since the last payment.
    /// # Returns
    /// * `Result<u64>` - GPASS to mint, never zero
    pub fn withdraw_gpass(&self, user_info: &mut UserInfo, now: i64) -> Result<u64> {
        let pending = self.pending_reward(user_info, now)?;
        require_neq!(pending.gpass, 0, FreezingError::ZeroGpassEarned);

        user_info.last_getting_gpass = pending.credited_until;

        Ok(pending.gpass)
    }

    /// Close the position, settling pending rewards and charging the early-exit penalty
    pub fn unfreeze(&mut self, user_info: &mut UserInfo, now: i64) -> Result<UnfreezeReceipt> {
        require!(
            user_info.has_position(),
            FreezingError::ZeroUnfreezingAmount
        );

        let freezed_amount = user_info.freezed_amount;
        let pending = self.pending_reward(user_info, now)?;

        let penalty = if self.is_unfreeze_penalized(user_info, now)? {
            calc_royalty_amount(freezed_amount, self.unfreeze_royalty)?
        } else {
            0
        };
        let returned_amount = freezed_amount
            .checked_sub(penalty)
            .ok_or(FreezingError::Overflow)?;
        let total_freezed = self
            .total_freezed
            .checked_sub(freezed_amount)
            .ok_or(FreezingError::Overflow)?;

        user_info.freezed_amount = 0;
        user_info.freezed_time = 0;
        user_info.last_getting_gpass = 0;
        user_info.gpass_per_period = 0;
        self.total_freezed = total_freezed;

        Ok(UnfreezeReceipt {
            freezed_amount,
            penalty,
            returned_amount,
            gpass_reward: pending.gpass,
        })
    }
}
