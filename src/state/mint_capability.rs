use anchor_lang::prelude::*;

/// Delegated right to mint GPASS, scoped to exactly one (ledger, pool) pair.
///
/// Recorded by a freezing pool when it is initialized. The ledger honours it only while
/// `pool` is listed among its minters and `ledger` is the ledger being minted on.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct MintCapability {
    // The GPASS settings account this capability mints on
    pub ledger: Pubkey,

    // The freezing params account holding this capability
    pub pool: Pubkey,
}

impl MintCapability {
    pub fn new(ledger: Pubkey, pool: Pubkey) -> Self {
        Self { ledger, pool }
    }

    pub fn is_scoped_to(&self, ledger: &Pubkey, pool: &Pubkey) -> bool {
        self.ledger == *ledger && self.pool == *pool
    }
}
