use anchor_lang::{prelude::*, solana_program::clock::UnixTimestamp};

use crate::errors::GpassError;

/// Seconds elapsed between `last_burned` and `current_timestamp`
/// # Arguments
/// * `current_timestamp` - The current unix timestamp
/// * `last_burned` - The timestamp a wallet was last touched at, must be positive
/// # Returns
/// * `Result<u64>` - The elapsed time in seconds
pub fn time_passed(current_timestamp: UnixTimestamp, last_burned: UnixTimestamp) -> Result<u64> {
    require_gt!(last_burned, 0, GpassError::InvalidLastBurnedValue);

    let time_passed = current_timestamp
        .checked_sub(last_burned)
        .ok_or(GpassError::Overflow)?;

    u64::try_from(time_passed).map_err(|_| GpassError::Overflow.into())
}
