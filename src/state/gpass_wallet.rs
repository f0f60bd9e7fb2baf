use anchor_lang::prelude::*;

/// GPASS wallet - a user's decaying GPASS balance under one GPASS settings account
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct GpassWallet {
    // The GPASS settings account this wallet belongs to
    pub gpass_settings: Pubkey,

    // The user who owns this wallet
    pub owner: Pubkey,

    // Current GPASS balance
    pub amount: u64,

    // Unix timestamp of the last mint, burn or decay
    pub last_burned: i64,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl GpassWallet {
    /// A wallet is created once; `last_burned` stays positive from then on.
    pub fn is_initialized(&self) -> bool {
        self.last_burned > 0
    }
}
