use anchor_lang::prelude::*;

#[error_code]
pub enum GpassError {
    // Signatures and access
    #[msg("Access denied")]
    AccessDenied,
    #[msg("Invalid mint authority")]
    InvalidMintAuthority,
    #[msg("Invalid burn authority")]
    InvalidBurnAuthority,

    // Misc.
    #[msg("Operation overflow")]
    Overflow,

    // Constraints
    #[msg("Max minters size exceeded")]
    MaxMintersSizeExceeded,
    #[msg("Max burners size exceeded")]
    MaxBurnersSizeExceeded,
    #[msg("Invalid burn period value")]
    InvalidBurnPeriodValue,
    #[msg("Invalid last burned value")]
    InvalidLastBurnedValue,
    #[msg("Mint amount cannot be zero")]
    ZeroMintAmount,
    #[msg("Burn amount cannot be zero")]
    ZeroBurnAmount,
    #[msg("Wallet does not belong to these GPASS settings")]
    InvalidGpassWallet,

    // Functional errors
    #[msg("Burn period not yet passed")]
    PeriodNotPassed,
}

#[error_code(offset = 6100)]
pub enum FreezingError {
    // Signatures and access
    #[msg("Access denied")]
    AccessDenied,

    // Misc.
    #[msg("Operation overflow")]
    Overflow,
    #[msg("Divide by zero")]
    DivideByZero,

    // Accounts
    #[msg("Invalid GPASS settings account")]
    InvalidGpassSettings,
    #[msg("Invalid GPASS mint capability")]
    InvalidMintCapability,
    #[msg("Invalid accumulative fund")]
    InvalidAccumulativeFund,
    #[msg("Invalid treasury")]
    InvalidTreasury,
    #[msg("Invalid GGWP token")]
    InvalidGgwpToken,
    #[msg("Invalid user GPASS wallet")]
    InvalidUserWallet,

    // Constraints
    #[msg("Invalid royalty value")]
    InvalidRoyaltyValue,
    #[msg("Invalid unfreeze royalty value")]
    InvalidUnfreezeRoyaltyValue,
    #[msg("Invalid reward table")]
    InvalidRewardTable,
    #[msg("Invalid reward period value")]
    InvalidRewardPeriod,
    #[msg("Invalid unfreeze lock period")]
    InvalidUnfreezeLockPeriod,
    #[msg("Freezing amount cannot be zero")]
    ZeroFreezingAmount,
    #[msg("Unfreezing amount cannot be zero")]
    ZeroUnfreezingAmount,

    // Functional errors
    #[msg("Additional freezing is not available")]
    AdditionalFreezingNotAvailable,
    #[msg("Zero GPASS earned")]
    ZeroGpassEarned,
}
