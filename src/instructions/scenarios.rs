//! End-to-end flows across the GPASS ledger and a freezing pool, run the way the
//! instruction handlers sequence them. Token accounts are plain balances and every
//! operation commits atomically or not at all, like a transaction.

use anchor_lang::prelude::*;

use crate::{
    constants::GGWP_DECIMALS,
    errors::{FreezingError, GpassError},
    state::{
        FreezingParams, GpassSettings, GpassWallet, MintCapability, RewardTableRow, UserInfo,
    },
};

const START: i64 = 1_660_032_700;
const BURN_PERIOD: u64 = 300;
const REWARD_PERIOD: u64 = 20;
const LOCK_PERIOD: u64 = 10;

fn ggwp(amount: u64) -> u64 {
    amount * 10u64.pow(GGWP_DECIMALS as u32)
}

#[derive(Clone)]
struct Deployment {
    gpass_settings_key: Pubkey,
    gpass_settings: GpassSettings,
    freezing_params_key: Pubkey,
    freezing_params: FreezingParams,
    user_gpass_wallet: GpassWallet,
    user_info: UserInfo,
    user_ggwp: u64,
    accumulative_fund: u64,
    treasury: u64,
}

impl Deployment {
    fn new(user_ggwp: u64) -> Self {
        let gpass_settings_key = Pubkey::new_from_array([1; 32]);
        let freezing_params_key = Pubkey::new_from_array([2; 32]);

        let gpass_settings = GpassSettings {
            admin: Pubkey::new_from_array([3; 32]),
            update_auth: Pubkey::new_from_array([4; 32]),
            burn_period: BURN_PERIOD,
            total_amount: 0,
            minters: vec![freezing_params_key],
            burners: vec![],
        };

        let freezing_params = FreezingParams {
            admin: Pubkey::new_from_array([3; 32]),
            update_auth: Pubkey::new_from_array([4; 32]),
            gpass_settings: gpass_settings_key,
            gpass_mint_capability: MintCapability::new(gpass_settings_key, freezing_params_key),
            reward_period: REWARD_PERIOD,
            royalty: 8,
            unfreeze_royalty: 15,
            unfreeze_lock_period: LOCK_PERIOD,
            reward_table: vec![
                RewardTableRow {
                    ggwp_amount: ggwp(10),
                    gpass_amount: 5,
                },
                RewardTableRow {
                    ggwp_amount: ggwp(20),
                    gpass_amount: 10,
                },
                RewardTableRow {
                    ggwp_amount: ggwp(30),
                    gpass_amount: 15,
                },
            ],
            ..FreezingParams::default()
        };

        let user_gpass_wallet = GpassWallet {
            gpass_settings: gpass_settings_key,
            owner: Pubkey::new_from_array([5; 32]),
            amount: 0,
            last_burned: START,
            bump: 254,
        };

        Self {
            gpass_settings_key,
            gpass_settings,
            freezing_params_key,
            freezing_params,
            user_gpass_wallet,
            user_info: UserInfo::default(),
            user_ggwp,
            accumulative_fund: 0,
            treasury: 0,
        }
    }

    fn transact<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let snapshot = self.clone();
        let result = op(self);
        if result.is_err() {
            *self = snapshot;
        }
        result
    }

    fn mint_reward(&mut self, capability: &MintCapability, amount: u64, now: i64) -> Result<()> {
        self.gpass_settings.mint_with_capability(
            &self.gpass_settings_key,
            capability,
            &mut self.user_gpass_wallet,
            amount,
            now,
        )?;
        Ok(())
    }

    fn freeze(&mut self, amount: u64, now: i64) -> Result<()> {
        self.transact(|d| {
            let capability = d.freezing_params.mint_capability(&d.freezing_params_key)?;
            let receipt = d.freezing_params.freeze(&mut d.user_info, amount, now)?;

            d.user_ggwp = d.user_ggwp.checked_sub(amount).ok_or(FreezingError::Overflow)?;
            d.accumulative_fund += receipt.royalty_amount;
            d.treasury += receipt.freezed_amount;

            if receipt.gpass_reward > 0 {
                d.mint_reward(&capability, receipt.gpass_reward, now)?;
            }
            Ok(())
        })
    }

    fn withdraw_gpass(&mut self, now: i64) -> Result<()> {
        self.transact(|d| {
            let capability = d.freezing_params.mint_capability(&d.freezing_params_key)?;
            let amount = d.freezing_params.withdraw_gpass(&mut d.user_info, now)?;
            d.mint_reward(&capability, amount, now)
        })
    }

    fn unfreeze(&mut self, now: i64) -> Result<()> {
        self.transact(|d| {
            let capability = d.freezing_params.mint_capability(&d.freezing_params_key)?;
            let receipt = d.freezing_params.unfreeze(&mut d.user_info, now)?;

            if receipt.gpass_reward > 0 {
                d.mint_reward(&capability, receipt.gpass_reward, now)?;
            }

            d.treasury = d
                .treasury
                .checked_sub(receipt.freezed_amount)
                .ok_or(FreezingError::Overflow)?;
            d.accumulative_fund += receipt.penalty;
            d.user_ggwp += receipt.returned_amount;
            Ok(())
        })
    }
}

#[test]
fn test_gpass_mint_burn_decay() {
    let minter = Pubkey::new_from_array([10; 32]);
    let burner = Pubkey::new_from_array([11; 32]);
    let mut settings = GpassSettings {
        burn_period: 5,
        minters: vec![minter],
        burners: vec![burner],
        ..GpassSettings::default()
    };
    let mut wallet = GpassWallet {
        last_burned: START,
        ..GpassWallet::default()
    };

    settings.mint_to(&minter, &mut wallet, 1000, START).unwrap();
    assert_eq!(wallet.amount, 1000);
    assert_eq!(settings.total_amount, 1000);

    settings.burn(&burner, &mut wallet, 500, START).unwrap();
    assert_eq!(wallet.amount, 500);

    let decayed = settings.mint_to(&minter, &mut wallet, 1000, START + 5).unwrap();
    assert_eq!(decayed, 500);
    assert_eq!(wallet.amount, 1000);
    assert_eq!(settings.total_amount, 1000);
}

#[test]
fn test_freeze_mints_first_period() {
    let mut deployment = Deployment::new(ggwp(100));

    deployment.freeze(10_870_000_000, START).unwrap();

    assert_eq!(deployment.accumulative_fund, 869_600_000);
    assert_eq!(deployment.treasury, 10_000_400_000);
    assert_eq!(deployment.user_ggwp, ggwp(100) - 10_870_000_000);
    assert_eq!(deployment.user_gpass_wallet.amount, 5);
    assert_eq!(deployment.gpass_settings.total_amount, 5);
    assert_eq!(deployment.freezing_params.total_freezed, 10_000_400_000);
}

#[test]
fn test_withdraw_after_two_periods() {
    let mut deployment = Deployment::new(ggwp(100));
    deployment.freeze(10_870_000_000, START).unwrap();

    let now = START + 2 * REWARD_PERIOD as i64;
    deployment.withdraw_gpass(now).unwrap();
    assert_eq!(deployment.user_gpass_wallet.amount, 15);
    assert_eq!(deployment.gpass_settings.total_amount, 15);

    assert_eq!(
        deployment.withdraw_gpass(now).unwrap_err(),
        FreezingError::ZeroGpassEarned.into()
    );
    assert_eq!(deployment.user_gpass_wallet.amount, 15);
}

#[test]
fn test_early_unfreeze_pays_penalty_to_fund() {
    let mut deployment = Deployment::new(ggwp(100));
    deployment.freeze(10_870_000_000, START).unwrap();
    let fund_before = deployment.accumulative_fund;
    let user_before = deployment.user_ggwp;

    deployment.unfreeze(START + 1).unwrap();

    let freezed: u64 = 10_000_400_000;
    let penalty = freezed * 15 / 100;
    assert_eq!(deployment.accumulative_fund, fund_before + penalty);
    assert_eq!(deployment.user_ggwp, user_before + freezed - penalty);
    assert_eq!(deployment.treasury, 0);
    assert_eq!(deployment.user_info.freezed_amount, 0);
    assert_eq!(deployment.freezing_params.total_freezed, 0);
}

#[test]
fn test_unfreeze_after_lock_returns_full_principal() {
    let mut deployment = Deployment::new(ggwp(100));
    deployment.freeze(10_870_000_000, START).unwrap();
    let fund_before = deployment.accumulative_fund;
    let user_before = deployment.user_ggwp;

    deployment
        .unfreeze(START + LOCK_PERIOD as i64)
        .unwrap();

    assert_eq!(deployment.accumulative_fund, fund_before);
    assert_eq!(deployment.user_ggwp, user_before + 10_000_400_000);
    assert_eq!(deployment.treasury, 0);
}

#[test]
fn test_unfreeze_settles_rewards_before_returning_principal() {
    let mut deployment = Deployment::new(ggwp(100));
    deployment.freeze(ggwp(25), START).unwrap();
    assert_eq!(deployment.user_gpass_wallet.amount, 10);

    deployment
        .unfreeze(START + 3 * REWARD_PERIOD as i64 + 5)
        .unwrap();
    assert_eq!(deployment.user_gpass_wallet.amount, 40);
    assert_eq!(deployment.gpass_settings.total_amount, 40);
}

#[test]
fn test_additional_freeze_leaves_balances_unchanged() {
    let mut deployment = Deployment::new(ggwp(100));
    deployment.freeze(10_870_000_000, START).unwrap();
    let before = deployment.clone();

    assert_eq!(
        deployment.freeze(ggwp(5), START + 1).unwrap_err(),
        FreezingError::AdditionalFreezingNotAvailable.into()
    );
    assert_eq!(deployment.user_ggwp, before.user_ggwp);
    assert_eq!(deployment.accumulative_fund, before.accumulative_fund);
    assert_eq!(deployment.treasury, before.treasury);
    assert_eq!(deployment.user_gpass_wallet.amount, before.user_gpass_wallet.amount);
}

#[test]
fn test_failed_mint_leg_rolls_back_freeze() {
    let mut deployment = Deployment::new(ggwp(100));
    deployment.gpass_settings.minters = vec![];

    assert_eq!(
        deployment.freeze(10_870_000_000, START).unwrap_err(),
        GpassError::InvalidMintAuthority.into()
    );
    assert_eq!(deployment.user_ggwp, ggwp(100));
    assert_eq!(deployment.treasury, 0);
    assert_eq!(deployment.accumulative_fund, 0);
    assert!(!deployment.user_info.has_position());
    assert_eq!(deployment.freezing_params.total_freezed, 0);
}

#[test]
fn test_capability_for_another_pool_is_rejected() {
    let mut deployment = Deployment::new(ggwp(100));
    deployment.freezing_params.gpass_mint_capability =
        MintCapability::new(deployment.gpass_settings_key, Pubkey::new_from_array([9; 32]));

    assert_eq!(
        deployment.freeze(10_870_000_000, START).unwrap_err(),
        FreezingError::InvalidMintCapability.into()
    );
    assert_eq!(deployment.user_ggwp, ggwp(100));
}

#[test]
fn test_rewards_decay_when_left_unused() {
    let mut deployment = Deployment::new(ggwp(100));
    deployment.freeze(10_870_000_000, START).unwrap();
    assert_eq!(deployment.user_gpass_wallet.amount, 5);

    // The first-period GPASS expires before the next payout lands
    let now = START + BURN_PERIOD as i64;
    deployment.withdraw_gpass(now).unwrap();

    let periods = BURN_PERIOD / REWARD_PERIOD;
    assert_eq!(deployment.user_gpass_wallet.amount, periods * 5);
    assert_eq!(
        deployment.gpass_settings.total_amount,
        deployment.user_gpass_wallet.amount
    );
}

#[test]
fn test_reward_table_update_does_not_reprice_open_position() {
    let mut deployment = Deployment::new(ggwp(100));
    deployment.freeze(10_870_000_000, START).unwrap();
    assert_eq!(deployment.user_gpass_wallet.amount, 5);

    deployment.freezing_params.reward_table = vec![RewardTableRow {
        ggwp_amount: ggwp(10),
        gpass_amount: 50,
    }];

    deployment
        .withdraw_gpass(START + 2 * REWARD_PERIOD as i64)
        .unwrap();
    assert_eq!(deployment.user_gpass_wallet.amount, 15);
}
