use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_BURNERS, MAX_MINTERS},
    errors::GpassError,
    state::{GpassWallet, MintCapability},
    utils::time_passed,
};

/// GPASS settings account - authorities, burn policy and aggregate supply of one GPASS ledger
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct GpassSettings {
    // Full control, including reassigning the update authority
    pub admin: Pubkey,

    // Operational control over burn period, minters and burners
    pub update_auth: Pubkey,

    // Inactivity window in seconds after which a wallet balance is swept to zero
    pub burn_period: u64,

    // Sum of all wallet balances under these settings
    pub total_amount: u64,

    // Addresses allowed to mint, at most MAX_MINTERS
    #[max_len(1)]
    pub minters: Vec<Pubkey>,

    // Addresses allowed to burn, at most MAX_BURNERS
    #[max_len(3)]
    pub burners: Vec<Pubkey>,
}

impl GpassSettings {
    pub fn validate_burn_period(burn_period: u64) -> Result<()> {
        require_neq!(burn_period, 0, GpassError::InvalidBurnPeriodValue);
        Ok(())
    }

    pub fn validate_minters(minters: &[Pubkey]) -> Result<()> {
        require!(
            minters.len() <= MAX_MINTERS,
            GpassError::MaxMintersSizeExceeded
        );
        Ok(())
    }

    pub fn validate_burners(burners: &[Pubkey]) -> Result<()> {
        require!(
            burners.len() <= MAX_BURNERS,
            GpassError::MaxBurnersSizeExceeded
        );
        Ok(())
    }

    pub fn check_admin(&self, authority: Pubkey) -> Result<()> {
        require_keys_eq!(authority, self.admin, GpassError::AccessDenied);
        Ok(())
    }

    pub fn check_update_auth(&self, authority: Pubkey) -> Result<()> {
        require_keys_eq!(authority, self.update_auth, GpassError::AccessDenied);
        Ok(())
    }

    /// Balance that has outlived the burn period and must be swept before the wallet is touched.
    /// `None` while the wallet is still inside its burn period.
    pub fn expired_balance(&self, wallet: &GpassWallet, now: i64) -> Result<Option<u64>> {
        let time_passed = time_passed(now, wallet.last_burned)?;
        if time_passed >= self.burn_period {
            Ok(Some(wallet.amount))
        } else {
            Ok(None)
        }
    }

    /// Wallet balance, total supply and swept amount as they stand after decay.
    /// Nothing is written here so callers can finish validating first.
    fn decayed_balances(&self, wallet: &GpassWallet, now: i64) -> Result<(u64, u64, u64)> {
        match self.expired_balance(wallet, now)? {
            Some(expired) => {
                let total = self
                    .total_amount
                    .checked_sub(expired)
                    .ok_or(GpassError::Overflow)?;
                Ok((0, total, expired))
            }
            None => Ok((wallet.amount, self.total_amount, 0)),
        }
    }

    /// Mint `amount` to `wallet` on behalf of a listed minter.
    /// # Returns
    /// * `Result<u64>` - The expired balance swept before minting
    pub fn mint_to(
        &mut self,
        authority: &Pubkey,
        wallet: &mut GpassWallet,
        amount: u64,
        now: i64,
    ) -> Result<u64> {
        require!(
            self.minters.contains(authority),
            GpassError::InvalidMintAuthority
        );

        self.apply_mint(wallet, amount, now)
    }

    /// Mint `amount` to `wallet` through a capability delegated to a freezing pool.
    /// The capability must target this ledger and its pool must still be a minter.
    /// # Returns
    /// * `Result<u64>` - The expired balance swept before minting
    pub fn mint_with_capability(
        &mut self,
        settings_key: &Pubkey,
        capability: &MintCapability,
        wallet: &mut GpassWallet,
        amount: u64,
        now: i64,
    ) -> Result<u64> {
        require_keys_eq!(
            capability.ledger,
            *settings_key,
            GpassError::InvalidMintAuthority
        );
        require!(
            self.minters.contains(&capability.pool),
            GpassError::InvalidMintAuthority
        );

        self.apply_mint(wallet, amount, now)
    }

    fn apply_mint(&mut self, wallet: &mut GpassWallet, amount: u64, now: i64) -> Result<u64> {
        require_neq!(amount, 0, GpassError::ZeroMintAmount);

        let (balance, total, decayed) = self.decayed_balances(wallet, now)?;
        let balance = balance.checked_add(amount).ok_or(GpassError::Overflow)?;
        let total = total.checked_add(amount).ok_or(GpassError::Overflow)?;

        wallet.amount = balance;
        wallet.last_burned = now;
        self.total_amount = total;

        Ok(decayed)
    }

    /// Burn up to `amount` from `wallet` on behalf of a listed burner.
    /// Burning more than the (decayed) balance empties the wallet.
    /// # Returns
    /// * `Result<u64>` - The expired balance swept before burning
    pub fn burn(
        &mut self,
        authority: &Pubkey,
        wallet: &mut GpassWallet,
        amount: u64,
        now: i64,
    ) -> Result<u64> {
        require!(
            self.burners.contains(authority),
            GpassError::InvalidBurnAuthority
        );
        require_neq!(amount, 0, GpassError::ZeroBurnAmount);

        let (balance, total, decayed) = self.decayed_balances(wallet, now)?;
        let burned = amount.min(balance);

        wallet.amount = balance - burned;
        wallet.last_burned = now;
        self.total_amount = total.saturating_sub(burned);

        Ok(decayed)
    }

    /// Sweep a wallet whose burn period has passed.
    /// # Returns
    /// * `Result<u64>` - The swept balance
    pub fn try_burn_in_period(&mut self, wallet: &mut GpassWallet, now: i64) -> Result<u64> {
        let expired = self
            .expired_balance(wallet, now)?
            .ok_or(GpassError::PeriodNotPassed)?;
        let total = self
            .total_amount
            .checked_sub(expired)
            .ok_or(GpassError::Overflow)?;

        wallet.amount = 0;
        wallet.last_burned = now;
        self.total_amount = total;

        Ok(expired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const START: i64 = 1_660_032_700;

    fn key(seed: u8) -> Pubkey {
        Pubkey::new_from_array([seed; 32])
    }

    fn create_test_settings(burn_period: u64) -> GpassSettings {
        GpassSettings {
            admin: key(1),
            update_auth: key(2),
            burn_period,
            total_amount: 0,
            minters: vec![key(10)],
            burners: vec![key(20), key(21)],
        }
    }

    fn create_test_wallet(now: i64) -> GpassWallet {
        GpassWallet {
            gpass_settings: key(100),
            owner: key(101),
            amount: 0,
            last_burned: now,
            bump: 255,
        }
    }

    #[test]
    fn test_validate_burn_period() {
        assert_eq!(
            GpassSettings::validate_burn_period(0).unwrap_err(),
            GpassError::InvalidBurnPeriodValue.into()
        );
        assert!(GpassSettings::validate_burn_period(1).is_ok());
    }

    #[test]
    fn test_validate_authority_list_sizes() {
        assert!(GpassSettings::validate_minters(&[]).is_ok());
        assert!(GpassSettings::validate_minters(&[key(1)]).is_ok());
        assert_eq!(
            GpassSettings::validate_minters(&[key(1), key(2)]).unwrap_err(),
            GpassError::MaxMintersSizeExceeded.into()
        );

        assert!(GpassSettings::validate_burners(&[key(1), key(2), key(3)]).is_ok());
        assert_eq!(
            GpassSettings::validate_burners(&[key(1), key(2), key(3), key(4)]).unwrap_err(),
            GpassError::MaxBurnersSizeExceeded.into()
        );
    }

    #[test]
    fn test_admin_and_update_auth_checks() {
        let settings = create_test_settings(5);

        assert!(settings.check_admin(key(1)).is_ok());
        assert_eq!(
            settings.check_admin(key(2)).unwrap_err(),
            GpassError::AccessDenied.into()
        );
        assert!(settings.check_update_auth(key(2)).is_ok());
        assert_eq!(
            settings.check_update_auth(key(1)).unwrap_err(),
            GpassError::AccessDenied.into()
        );
    }

    #[test]
    fn test_mint_requires_minter() {
        let mut settings = create_test_settings(5);
        let mut wallet = create_test_wallet(START);

        let result = settings.mint_to(&key(20), &mut wallet, 1000, START);
        assert_eq!(result.unwrap_err(), GpassError::InvalidMintAuthority.into());
        assert_eq!(wallet.amount, 0);
        assert_eq!(settings.total_amount, 0);
    }

    #[test]
    fn test_mint_zero_amount() {
        let mut settings = create_test_settings(5);
        let mut wallet = create_test_wallet(START);

        let result = settings.mint_to(&key(10), &mut wallet, 0, START);
        assert_eq!(result.unwrap_err(), GpassError::ZeroMintAmount.into());
    }

    #[test]
    fn test_mint_and_burn_within_period() {
        let mut settings = create_test_settings(5);
        let mut wallet = create_test_wallet(START);

        assert_eq!(settings.mint_to(&key(10), &mut wallet, 1000, START).unwrap(), 0);
        assert_eq!(wallet.amount, 1000);
        assert_eq!(settings.total_amount, 1000);

        assert_eq!(settings.burn(&key(21), &mut wallet, 500, START + 1).unwrap(), 0);
        assert_eq!(wallet.amount, 500);
        assert_eq!(wallet.last_burned, START + 1);
        assert_eq!(settings.total_amount, 500);
    }

    #[test]
    fn test_mint_after_burn_period_sweeps_old_balance_first() {
        let mut settings = create_test_settings(5);
        let mut wallet = create_test_wallet(START);

        settings.mint_to(&key(10), &mut wallet, 1000, START).unwrap();
        settings.burn(&key(20), &mut wallet, 500, START).unwrap();

        let decayed = settings
            .mint_to(&key(10), &mut wallet, 1000, START + 5)
            .unwrap();
        assert_eq!(decayed, 500);
        assert_eq!(wallet.amount, 1000);
        assert_eq!(wallet.last_burned, START + 5);
        assert_eq!(settings.total_amount, 1000);
    }

    #[test]
    fn test_burn_requires_burner() {
        let mut settings = create_test_settings(5);
        let mut wallet = create_test_wallet(START);
        settings.mint_to(&key(10), &mut wallet, 10, START).unwrap();

        let result = settings.burn(&key(10), &mut wallet, 5, START);
        assert_eq!(result.unwrap_err(), GpassError::InvalidBurnAuthority.into());
        assert_eq!(wallet.amount, 10);
    }

    #[test]
    fn test_burn_zero_amount() {
        let mut settings = create_test_settings(5);
        let mut wallet = create_test_wallet(START);

        let result = settings.burn(&key(20), &mut wallet, 0, START);
        assert_eq!(result.unwrap_err(), GpassError::ZeroBurnAmount.into());
    }

    #[test]
    fn test_burn_saturates_on_decayed_wallet() {
        let mut settings = create_test_settings(5);
        let mut wallet = create_test_wallet(START);
        settings.mint_to(&key(10), &mut wallet, 300, START).unwrap();

        let decayed = settings.burn(&key(20), &mut wallet, 100, START + 10).unwrap();
        assert_eq!(decayed, 300);
        assert_eq!(wallet.amount, 0);
        assert_eq!(settings.total_amount, 0);
    }

    #[test]
    fn test_burn_more_than_balance_keeps_total_consistent() {
        let mut settings = create_test_settings(5);
        let mut first = create_test_wallet(START);
        let mut second = create_test_wallet(START);
        settings.mint_to(&key(10), &mut first, 100, START).unwrap();
        settings.mint_to(&key(10), &mut second, 50, START).unwrap();

        settings.burn(&key(20), &mut second, 80, START + 1).unwrap();
        assert_eq!(second.amount, 0);
        assert_eq!(settings.total_amount, first.amount);
    }

    #[test]
    fn test_try_burn_before_period_fails_without_changes() {
        let mut settings = create_test_settings(5);
        let mut wallet = create_test_wallet(START);
        settings.mint_to(&key(10), &mut wallet, 1000, START).unwrap();

        let result = settings.try_burn_in_period(&mut wallet, START + 4);
        assert_eq!(result.unwrap_err(), GpassError::PeriodNotPassed.into());
        assert_eq!(wallet.amount, 1000);
        assert_eq!(wallet.last_burned, START);
        assert_eq!(settings.total_amount, 1000);
    }

    #[test]
    fn test_try_burn_after_period_sweeps_exactly_once() {
        let mut settings = create_test_settings(5);
        let mut wallet = create_test_wallet(START);
        settings.mint_to(&key(10), &mut wallet, 1000, START).unwrap();

        assert_eq!(settings.try_burn_in_period(&mut wallet, START + 5).unwrap(), 1000);
        assert_eq!(wallet.amount, 0);
        assert_eq!(wallet.last_burned, START + 5);
        assert_eq!(settings.total_amount, 0);

        let result = settings.try_burn_in_period(&mut wallet, START + 5);
        assert_eq!(result.unwrap_err(), GpassError::PeriodNotPassed.into());
    }

    #[test]
    fn test_mint_with_capability() {
        let mut settings = create_test_settings(5);
        let settings_key = key(100);
        let pool = key(10);
        let mut wallet = create_test_wallet(START);

        let capability = MintCapability::new(settings_key, pool);
        settings
            .mint_with_capability(&settings_key, &capability, &mut wallet, 5, START)
            .unwrap();
        assert_eq!(wallet.amount, 5);
        assert_eq!(settings.total_amount, 5);
    }

    #[test]
    fn test_mint_with_capability_for_other_ledger() {
        let mut settings = create_test_settings(5);
        let mut wallet = create_test_wallet(START);

        let capability = MintCapability::new(key(99), key(10));
        let result = settings.mint_with_capability(&key(100), &capability, &mut wallet, 5, START);
        assert_eq!(result.unwrap_err(), GpassError::InvalidMintAuthority.into());
    }

    #[test]
    fn test_mint_with_capability_of_removed_minter() {
        let mut settings = create_test_settings(5);
        settings.minters = vec![];
        let mut wallet = create_test_wallet(START);

        let capability = MintCapability::new(key(100), key(10));
        let result = settings.mint_with_capability(&key(100), &capability, &mut wallet, 5, START);
        assert_eq!(result.unwrap_err(), GpassError::InvalidMintAuthority.into());
        assert_eq!(wallet.amount, 0);
    }

    #[test]
    fn test_uninitialized_wallet_is_rejected() {
        let mut settings = create_test_settings(5);
        let mut wallet = GpassWallet::default();

        let result = settings.mint_to(&key(10), &mut wallet, 5, START);
        assert_eq!(result.unwrap_err(), GpassError::InvalidLastBurnedValue.into());
    }

    proptest! {
        #[test]
        fn test_total_amount_matches_wallets_fuzz(
            ops in proptest::collection::vec((0u8..3, 0usize..3, 0u64..2_000, 0i64..8), 1..64),
        ) {
            let mut settings = create_test_settings(5);
            let mut wallets = [
                create_test_wallet(START),
                create_test_wallet(START),
                create_test_wallet(START),
            ];
            let mut now = START;

            for (kind, index, amount, dt) in ops {
                now += dt;
                let wallet = &mut wallets[index];
                let expired_before = settings.expired_balance(wallet, now).unwrap().is_some();

                let result = match kind {
                    0 => settings.mint_to(&key(10), wallet, amount, now),
                    1 => settings.burn(&key(20), wallet, amount, now),
                    _ => settings.try_burn_in_period(wallet, now),
                };

                if kind == 0 && result.is_ok() && expired_before {
                    prop_assert_eq!(wallet.amount, amount);
                }

                let sum: u64 = wallets.iter().map(|w| w.amount).sum();
                prop_assert_eq!(settings.total_amount, sum);
            }
        }
    }
}
