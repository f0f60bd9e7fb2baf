use anchor_lang::prelude::*;

/// UserInfo state account - a user's position in one freezing pool
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct UserInfo {
    // Frozen GGWP principal net of the freezing royalty, zero when no position is open
    pub freezed_amount: u64,

    // Unix timestamp the position was opened at
    pub freezed_time: i64,

    // Unix timestamp up to which GPASS rewards have been paid
    pub last_getting_gpass: i64,

    // GPASS earned per reward period, fixed by the reward table at freeze time
    pub gpass_per_period: u64,

    // The bump used to derive the PDA for this account
    // Stored so we don't need to recalculate it later
    pub bump: u8,
}

impl UserInfo {
    pub fn has_position(&self) -> bool {
        self.freezed_amount > 0
    }
}
