use anchor_lang::prelude::*;

use crate::{
    constants::GPASS_WALLET_SEED,
    errors::GpassError,
    events::{GpassBurned, GpassDecayed, GpassMinted, GpassWalletCreated},
    state::{GpassSettings, GpassWallet},
};

/// Log and emit a decay sweep, if one happened
pub(crate) fn emit_decay(wallet: Pubkey, decayed: u64) {
    if decayed > 0 {
        msg!("GPASS wallet {} decayed: {}", wallet, decayed);
        emit!(GpassDecayed {
            wallet,
            amount: decayed,
        });
    }
}

/// Create a user's GPASS wallet under a GPASS settings account
/// Anyone may pay; calling it for an existing wallet is a no-op
#[derive(Accounts)]
pub struct CreateGpassWallet<'info> {
    /// Pays for account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: The owner of the wallet, only used as a PDA seed
    pub user: UncheckedAccount<'info>,

    /// The GPASS settings the wallet belongs to
    pub gpass_settings: Account<'info, GpassSettings>,

    /// The user's GPASS wallet
    /// # PDA Seeds
    /// - GPASS_WALLET_SEED
    /// - The GPASS settings address
    /// - The user's address
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + GpassWallet::INIT_SPACE,
        seeds = [GPASS_WALLET_SEED, gpass_settings.key().as_ref(), user.key().as_ref()],
        bump,
    )]
    pub user_gpass_wallet: Account<'info, GpassWallet>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> CreateGpassWallet<'info> {
    /// Create the wallet with a zero balance, unless it already exists
    /// # Arguments
    /// * `bumps` - The PDA bumps for account derivation
    /// # Returns
    /// * `Result<()>` - Ok if the wallet exists after the call, Err otherwise
    pub fn create_gpass_wallet(&mut self, bumps: &CreateGpassWalletBumps) -> Result<()> {
        if self.user_gpass_wallet.is_initialized() {
            msg!("GPASS wallet {} already exists", self.user_gpass_wallet.key());
            return Ok(());
        }

        self.user_gpass_wallet.set_inner(GpassWallet {
            gpass_settings: self.gpass_settings.key(),
            owner: self.user.key(),
            amount: 0,
            last_burned: Clock::get()?.unix_timestamp,
            bump: bumps.user_gpass_wallet,
        });

        emit!(GpassWalletCreated {
            gpass_settings: self.gpass_settings.key(),
            wallet: self.user_gpass_wallet.key(),
            owner: self.user.key(),
        });

        Ok(())
    }
}

/// Mint GPASS to a wallet
/// Signer must be listed in the settings' minters
#[derive(Accounts)]
pub struct MintGpass<'info> {
    /// The minter
    pub authority: Signer<'info>,

    /// The GPASS settings account
    #[account(mut)]
    pub gpass_settings: Account<'info, GpassSettings>,

    /// The GPASS wallet to credit
    /// # PDA Seeds
    /// - GPASS_WALLET_SEED
    /// - The GPASS settings address
    /// - The wallet owner's address
    #[account(
        mut,
        seeds = [GPASS_WALLET_SEED, gpass_settings.key().as_ref(), user_gpass_wallet.owner.as_ref()],
        bump = user_gpass_wallet.bump,
        constraint = user_gpass_wallet.gpass_settings == gpass_settings.key() @ GpassError::InvalidGpassWallet,
    )]
    pub user_gpass_wallet: Account<'info, GpassWallet>,
}

impl<'info> MintGpass<'info> {
    /// Mint GPASS, sweeping an expired balance first
    /// # Arguments
    /// * `amount` - The amount of GPASS to mint (must be > 0)
    /// # Returns
    /// * `Result<()>` - Ok if the GPASS is successfully minted, Err otherwise
    pub fn gpass_mint_to(&mut self, amount: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let authority = self.authority.key();

        let decayed =
            self.gpass_settings
                .mint_to(&authority, &mut self.user_gpass_wallet, amount, now)?;
        emit_decay(self.user_gpass_wallet.key(), decayed);

        emit!(GpassMinted {
            wallet: self.user_gpass_wallet.key(),
            authority,
            amount,
            balance: self.user_gpass_wallet.amount,
        });

        Ok(())
    }
}

/// Burn GPASS from a wallet
/// Signer must be listed in the settings' burners
#[derive(Accounts)]
pub struct BurnGpass<'info> {
    /// The burner
    pub authority: Signer<'info>,

    /// The GPASS settings account
    #[account(mut)]
    pub gpass_settings: Account<'info, GpassSettings>,

    /// The GPASS wallet to debit
    /// # PDA Seeds
    /// - GPASS_WALLET_SEED
    /// - The GPASS settings address
    /// - The wallet owner's address
    #[account(
        mut,
        seeds = [GPASS_WALLET_SEED, gpass_settings.key().as_ref(), user_gpass_wallet.owner.as_ref()],
        bump = user_gpass_wallet.bump,
        constraint = user_gpass_wallet.gpass_settings == gpass_settings.key() @ GpassError::InvalidGpassWallet,
    )]
    pub user_gpass_wallet: Account<'info, GpassWallet>,
}

impl<'info> BurnGpass<'info> {
    /// Burn GPASS, sweeping an expired balance first
    /// # Arguments
    /// * `amount` - The amount of GPASS to burn (must be > 0, saturates at the balance)
    /// # Returns
    /// * `Result<()>` - Ok if the GPASS is successfully burned, Err otherwise
    pub fn gpass_burn(&mut self, amount: u64) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let authority = self.authority.key();

        let decayed =
            self.gpass_settings
                .burn(&authority, &mut self.user_gpass_wallet, amount, now)?;
        emit_decay(self.user_gpass_wallet.key(), decayed);

        emit!(GpassBurned {
            wallet: self.user_gpass_wallet.key(),
            authority,
            amount,
            balance: self.user_gpass_wallet.amount,
        });

        Ok(())
    }
}

/// Sweep an expired GPASS wallet
/// Permissionless
#[derive(Accounts)]
pub struct BurnInPeriod<'info> {
    /// The GPASS settings account
    #[account(mut)]
    pub gpass_settings: Account<'info, GpassSettings>,

    /// The GPASS wallet to sweep
    #[account(
        mut,
        seeds = [GPASS_WALLET_SEED, gpass_settings.key().as_ref(), user_gpass_wallet.owner.as_ref()],
        bump = user_gpass_wallet.bump,
        constraint = user_gpass_wallet.gpass_settings == gpass_settings.key() @ GpassError::InvalidGpassWallet,
    )]
    pub user_gpass_wallet: Account<'info, GpassWallet>,
}

impl<'info> BurnInPeriod<'info> {
    /// Zero the wallet if its burn period has passed, fail with `PeriodNotPassed` otherwise
    pub fn try_burn_in_period(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;

        let swept = self
            .gpass_settings
            .try_burn_in_period(&mut self.user_gpass_wallet, now)?;

        msg!("GPASS wallet {} swept: {}", self.user_gpass_wallet.key(), swept);
        emit!(GpassDecayed {
            wallet: self.user_gpass_wallet.key(),
            amount: swept,
        });

        Ok(())
    }
}
