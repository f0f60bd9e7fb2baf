use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};

use super::emit_decay;
use crate::{
    constants::{GPASS_WALLET_SEED, TREASURY_AUTH_SEED, USER_INFO_SEED},
    errors::FreezingError,
    events::{Freezed, GpassMinted, GpassWithdrawn, Unfreezed},
    state::{FreezingParams, GpassSettings, GpassWallet, MintCapability, UserInfo},
};

/// Mint a GPASS reward through the pool's capability
fn mint_reward(
    gpass_settings: &mut Account<'_, GpassSettings>,
    user_gpass_wallet: &mut Account<'_, GpassWallet>,
    capability: &MintCapability,
    amount: u64,
    now: i64,
) -> Result<()> {
    let gpass_settings_key = gpass_settings.key();
    let decayed = gpass_settings.mint_with_capability(
        &gpass_settings_key,
        capability,
        user_gpass_wallet,
        amount,
        now,
    )?;
    emit_decay(user_gpass_wallet.key(), decayed);

    emit!(GpassMinted {
        wallet: user_gpass_wallet.key(),
        authority: capability.pool,
        amount,
        balance: user_gpass_wallet.amount,
    });

    Ok(())
}

/// Freeze GGWP and open a position
/// The user's GPASS wallet must already exist
#[derive(Accounts)]
pub struct Freeze<'info> {
    /// The user freezing GGWP, pays for the position account if needed
    #[account(mut)]
    pub user: Signer<'info>,

    /// The freezing params account
    #[account(mut)]
    pub freezing_params: Box<Account<'info, FreezingParams>>,

    /// The user's position in this pool
    /// # PDA Seeds
    /// - USER_INFO_SEED
    /// - The freezing params address
    /// - The user's address
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserInfo::INIT_SPACE,
        seeds = [USER_INFO_SEED, freezing_params.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_info: Box<Account<'info, UserInfo>>,

    /// The user's GGWP token account
    #[account(
        mut,
        token::mint = ggwp_token,
        token::authority = user,
        token::token_program = token_program,
    )]
    pub user_ggwp_wallet: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The GGWP mint
    #[account(address = freezing_params.ggwp_token @ FreezingError::InvalidGgwpToken)]
    pub ggwp_token: Box<InterfaceAccount<'info, Mint>>,

    /// The pool's accumulative fund
    #[account(
        mut,
        address = freezing_params.accumulative_fund @ FreezingError::InvalidAccumulativeFund,
    )]
    pub accumulative_fund: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The pool's treasury
    #[account(
        mut,
        address = freezing_params.treasury @ FreezingError::InvalidTreasury,
    )]
    pub treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The GPASS settings rewards are minted on
    #[account(
        mut,
        address = freezing_params.gpass_settings @ FreezingError::InvalidGpassSettings,
    )]
    pub gpass_settings: Box<Account<'info, GpassSettings>>,

    /// The user's GPASS wallet
    /// # PDA Seeds
    /// - GPASS_WALLET_SEED
    /// - The GPASS settings address
    /// - The user's address
    #[account(
        mut,
        seeds = [GPASS_WALLET_SEED, gpass_settings.key().as_ref(), user.key().as_ref()],
        bump = user_gpass_wallet.bump,
        constraint = user_gpass_wallet.owner == user.key() @ FreezingError::InvalidUserWallet,
    )]
    pub user_gpass_wallet: Box<Account<'info, GpassWallet>>,

    /// The token program (SPL Token or Token-2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> Freeze<'info> {
    /// Freeze GGWP: pay the royalty, lock the rest and mint the first period's GPASS
    /// # Arguments
    /// * `amount` - The amount of GGWP to freeze, royalty included (must be > 0)
    /// * `bumps` - The PDA bumps for account derivation
    /// # Returns
    /// * `Result<()>` - Ok if the position is successfully opened, Err otherwise
    pub fn freeze(&mut self, amount: u64, bumps: &FreezeBumps) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let freezing_params_key = self.freezing_params.key();
        let capability = self.freezing_params.mint_capability(&freezing_params_key)?;

        let receipt = self
            .freezing_params
            .freeze(&mut self.user_info, amount, now)?;
        self.user_info.bump = bumps.user_info;

        if receipt.royalty_amount > 0 {
            self.transfer_from_user(
                self.accumulative_fund.to_account_info(),
                receipt.royalty_amount,
            )?;
        }
        self.transfer_from_user(self.treasury.to_account_info(), receipt.freezed_amount)?;

        if receipt.gpass_reward > 0 {
            mint_reward(
                &mut self.gpass_settings,
                &mut self.user_gpass_wallet,
                &capability,
                receipt.gpass_reward,
                now,
            )?;
        }

        msg!(
            "Freezed {} GGWP, royalty {}",
            receipt.freezed_amount,
            receipt.royalty_amount
        );
        emit!(Freezed {
            freezing_params: freezing_params_key,
            user: self.user.key(),
            amount,
            royalty_amount: receipt.royalty_amount,
            freezed_amount: receipt.freezed_amount,
            gpass_reward: receipt.gpass_reward,
        });

        Ok(())
    }

    fn transfer_from_user(&self, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        transfer_checked(
            CpiContext::new(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.user_ggwp_wallet.to_account_info(),
                    mint: self.ggwp_token.to_account_info(),
                    to,
                    authority: self.user.to_account_info(),
                },
            ),
            amount,
            self.ggwp_token.decimals,
        )
    }
}

/// Withdraw GPASS accrued on an open position
#[derive(Accounts)]
pub struct WithdrawGpass<'info> {
    /// The position owner
    pub user: Signer<'info>,

    /// The freezing params account
    pub freezing_params: Box<Account<'info, FreezingParams>>,

    /// The user's position in this pool
    /// # PDA Seeds
    /// - USER_INFO_SEED
    /// - The freezing params address
    /// - The user's address
    #[account(
        mut,
        seeds = [USER_INFO_SEED, freezing_params.key().as_ref(), user.key().as_ref()],
        bump = user_info.bump,
    )]
    pub user_info: Box<Account<'info, UserInfo>>,

    /// The GPASS settings rewards are minted on
    #[account(
        mut,
        address = freezing_params.gpass_settings @ FreezingError::InvalidGpassSettings,
    )]
    pub gpass_settings: Box<Account<'info, GpassSettings>>,

    /// The user's GPASS wallet
    #[account(
        mut,
        seeds = [GPASS_WALLET_SEED, gpass_settings.key().as_ref(), user.key().as_ref()],
        bump = user_gpass_wallet.bump,
        constraint = user_gpass_wallet.owner == user.key() @ FreezingError::InvalidUserWallet,
    )]
    pub user_gpass_wallet: Box<Account<'info, GpassWallet>>,
}

impl<'info> WithdrawGpass<'info> {
    /// Mint GPASS for every whole reward period since the last payment
    /// Fails with `ZeroGpassEarned` when nothing is due
    pub fn withdraw_gpass(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let freezing_params_key = self.freezing_params.key();
        let capability = self.freezing_params.mint_capability(&freezing_params_key)?;

        let amount = self.freezing_params.withdraw_gpass(&mut self.user_info, now)?;

        mint_reward(
            &mut self.gpass_settings,
            &mut self.user_gpass_wallet,
            &capability,
            amount,
            now,
        )?;

        emit!(GpassWithdrawn {
            freezing_params: freezing_params_key,
            user: self.user.key(),
            amount,
        });

        Ok(())
    }
}

/// Close a position and return the principal
#[derive(Accounts)]
pub struct Unfreeze<'info> {
    /// The position owner
    pub user: Signer<'info>,

    /// The freezing params account
    #[account(mut)]
    pub freezing_params: Box<Account<'info, FreezingParams>>,

    /// The user's position in this pool
    /// # PDA Seeds
    /// - USER_INFO_SEED
    /// - The freezing params address
    /// - The user's address
    #[account(
        mut,
        seeds = [USER_INFO_SEED, freezing_params.key().as_ref(), user.key().as_ref()],
        bump = user_info.bump,
    )]
    pub user_info: Box<Account<'info, UserInfo>>,

    /// The user's GGWP token account
    #[account(
        mut,
        token::mint = ggwp_token,
        token::authority = user,
        token::token_program = token_program,
    )]
    pub user_ggwp_wallet: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The GGWP mint
    #[account(address = freezing_params.ggwp_token @ FreezingError::InvalidGgwpToken)]
    pub ggwp_token: Box<InterfaceAccount<'info, Mint>>,

    /// The pool's accumulative fund
    #[account(
        mut,
        address = freezing_params.accumulative_fund @ FreezingError::InvalidAccumulativeFund,
    )]
    pub accumulative_fund: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The pool's treasury
    #[account(
        mut,
        address = freezing_params.treasury @ FreezingError::InvalidTreasury,
    )]
    pub treasury: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The PDA owning the treasury
    /// # PDA Seeds
    /// - TREASURY_AUTH_SEED
    /// - The freezing params address
    ///
    /// CHECK: Only signs treasury transfers
    #[account(
        seeds = [TREASURY_AUTH_SEED, freezing_params.key().as_ref()],
        bump = freezing_params.treasury_auth_bump,
    )]
    pub treasury_auth: UncheckedAccount<'info>,

    /// The GPASS settings rewards are minted on
    #[account(
        mut,
        address = freezing_params.gpass_settings @ FreezingError::InvalidGpassSettings,
    )]
    pub gpass_settings: Box<Account<'info, GpassSettings>>,

    /// The user's GPASS wallet
    #[account(
        mut,
        seeds = [GPASS_WALLET_SEED, gpass_settings.key().as_ref(), user.key().as_ref()],
        bump = user_gpass_wallet.bump,
        constraint = user_gpass_wallet.owner == user.key() @ FreezingError::InvalidUserWallet,
    )]
    pub user_gpass_wallet: Box<Account<'info, GpassWallet>>,

    /// The token program (SPL Token or Token-2022)
    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Unfreeze<'info> {
    /// Settle pending GPASS, charge the early-exit penalty and return the principal
    /// # Returns
    /// * `Result<()>` - Ok if the position is successfully closed, Err otherwise
    pub fn unfreeze(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let freezing_params_key = self.freezing_params.key();
        let capability = self.freezing_params.mint_capability(&freezing_params_key)?;

        let receipt = self.freezing_params.unfreeze(&mut self.user_info, now)?;

        if receipt.gpass_reward > 0 {
            mint_reward(
                &mut self.gpass_settings,
                &mut self.user_gpass_wallet,
                &capability,
                receipt.gpass_reward,
                now,
            )?;
        }

        if receipt.penalty > 0 {
            self.transfer_from_treasury(
                self.accumulative_fund.to_account_info(),
                receipt.penalty,
            )?;
        }
        if receipt.returned_amount > 0 {
            self.transfer_from_treasury(
                self.user_ggwp_wallet.to_account_info(),
                receipt.returned_amount,
            )?;
        }

        msg!(
            "Unfreezed {} GGWP, penalty {}",
            receipt.returned_amount,
            receipt.penalty
        );
        emit!(Unfreezed {
            freezing_params: freezing_params_key,
            user: self.user.key(),
            freezed_amount: receipt.freezed_amount,
            penalty: receipt.penalty,
            returned_amount: receipt.returned_amount,
            gpass_reward: receipt.gpass_reward,
        });

        Ok(())
    }

    fn transfer_from_treasury(&self, to: AccountInfo<'info>, amount: u64) -> Result<()> {
        let freezing_params_key = self.freezing_params.key();
        let seeds = &[
            TREASURY_AUTH_SEED,
            freezing_params_key.as_ref(),
            &[self.freezing_params.treasury_auth_bump],
        ];
        let signer_seeds = &[&seeds[..]];

        transfer_checked(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                TransferChecked {
                    from: self.treasury.to_account_info(),
                    mint: self.ggwp_token.to_account_info(),
                    to,
                    authority: self.treasury_auth.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
            self.ggwp_token.decimals,
        )
    }
}
