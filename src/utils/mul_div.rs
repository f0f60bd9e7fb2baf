use anchor_lang::prelude::Result;

use crate::{constants::PERCENT_DIVISOR, errors::FreezingError};

/// Safely computes (n0 * n1) / d with overflow protection
/// Returns error if d is 0 or result overflows u64
/// # Arguments
/// * `n0` - The first multiplicand
/// * `n1` - The second multiplicand
/// * `d` - The divisor
/// # Returns
/// * `Result<u64>` - The result of (n0 * n1) / d, rounded down
#[inline(always)]
pub fn mul_div(n0: u64, n1: u64, d: u64) -> Result<u64> {
    if d == 0 {
        return Err(FreezingError::DivideByZero.into());
    }

    let p = (n0 as u128)
        .checked_mul(n1 as u128)
        .ok_or(FreezingError::Overflow)?;

    let result = p / d as u128;

    Ok(u64::try_from(result).map_err(|_| FreezingError::Overflow)?)
}

/// Royalty share of `amount`: floor(amount * percent / 100)
/// Multiplies before dividing so no precision is lost on small amounts.
#[inline(always)]
pub fn calc_royalty_amount(amount: u64, percent: u8) -> Result<u64> {
    mul_div(amount, percent as u64, PERCENT_DIVISOR)
}
