use anchor_lang::prelude::*;

use crate::{
    events::{
        BurnPeriodUpdated, BurnersUpdated, GpassAdminUpdated, GpassInitialized,
        GpassUpdateAuthoritySet, MintersUpdated,
    },
    state::GpassSettings,
};

/// Initialize a GPASS settings account
/// The signer becomes the admin and pays for the account
#[derive(Accounts)]
pub struct InitializeGpass<'info> {
    /// The admin of the new settings, pays for account creation
    #[account(mut)]
    pub admin: Signer<'info>,

    /// The GPASS settings account to be initialized
    /// Created from a fresh keypair so one program can host several ledgers
    #[account(
        init,
        payer = admin,
        space = 8 + GpassSettings::INIT_SPACE,
    )]
    pub gpass_settings: Account<'info, GpassSettings>,

    /// The system program
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeGpass<'info> {
    /// Initialize the GPASS settings
    /// # Arguments
    /// * `burn_period` - Inactivity window in seconds (must be > 0)
    /// * `update_auth` - The authority allowed to change burn period, minters and burners
    /// * `minters` - Addresses allowed to mint (at most MAX_MINTERS)
    /// * `burners` - Addresses allowed to burn (at most MAX_BURNERS)
    /// # Returns
    /// * `Result<()>` - Ok if the settings are successfully initialized, Err otherwise
    pub fn initialize_gpass(
        &mut self,
        burn_period: u64,
        update_auth: Pubkey,
        minters: Vec<Pubkey>,
        burners: Vec<Pubkey>,
    ) -> Result<()> {
        GpassSettings::validate_burn_period(burn_period)?;
        GpassSettings::validate_minters(&minters)?;
        GpassSettings::validate_burners(&burners)?;

        self.gpass_settings.set_inner(GpassSettings {
            admin: self.admin.key(),
            update_auth,
            burn_period,
            total_amount: 0,
            minters,
            burners,
        });

        emit!(GpassInitialized {
            gpass_settings: self.gpass_settings.key(),
            admin: self.admin.key(),
            update_auth,
            burn_period,
        });

        Ok(())
    }
}

/// Admin and update authority operations on GPASS settings
#[derive(Accounts)]
pub struct UpdateGpassSettings<'info> {
    /// The admin or update authority, depending on the operation
    pub authority: Signer<'info>,

    /// The GPASS settings account to be modified
    #[account(mut)]
    pub gpass_settings: Account<'info, GpassSettings>,
}

impl<'info> UpdateGpassSettings<'info> {
    /// Reassign the admin
    /// Requires the current admin
    pub fn update_admin(&mut self, new_admin: Pubkey) -> Result<()> {
        self.gpass_settings.check_admin(self.authority.key())?;

        let prev_admin = self.gpass_settings.admin;
        self.gpass_settings.admin = new_admin;

        emit!(GpassAdminUpdated {
            gpass_settings: self.gpass_settings.key(),
            prev_admin,
            new_admin,
        });

        Ok(())
    }

    /// Reassign the update authority
    /// Requires the current admin
    pub fn set_update_authority(&mut self, new_update_auth: Pubkey) -> Result<()> {
        self.gpass_settings.check_admin(self.authority.key())?;

        let prev_update_auth = self.gpass_settings.update_auth;
        self.gpass_settings.update_auth = new_update_auth;

        emit!(GpassUpdateAuthoritySet {
            gpass_settings: self.gpass_settings.key(),
            prev_update_auth,
            new_update_auth,
        });

        Ok(())
    }

    /// Set the burn period
    /// # Arguments
    /// * `burn_period` - The new inactivity window in seconds (must be > 0)
    /// # Returns
    /// * `Result<()>` - Ok if the burn period is successfully set, Err otherwise
    pub fn update_burn_period(&mut self, burn_period: u64) -> Result<()> {
        self.gpass_settings.check_update_auth(self.authority.key())?;
        GpassSettings::validate_burn_period(burn_period)?;

        let prev_burn_period = self.gpass_settings.burn_period;
        self.gpass_settings.burn_period = burn_period;

        emit!(BurnPeriodUpdated {
            gpass_settings: self.gpass_settings.key(),
            prev_burn_period,
            new_burn_period: burn_period,
        });

        Ok(())
    }

    /// Replace the minters list
    /// Requires the update authority
    pub fn update_minters(&mut self, minters: Vec<Pubkey>) -> Result<()> {
        self.gpass_settings.check_update_auth(self.authority.key())?;
        GpassSettings::validate_minters(&minters)?;

        self.gpass_settings.minters = minters.clone();

        emit!(MintersUpdated {
            gpass_settings: self.gpass_settings.key(),
            minters,
        });

        Ok(())
    }

    /// Replace the burners list
    /// Requires the update authority
    pub fn update_burners(&mut self, burners: Vec<Pubkey>) -> Result<()> {
        self.gpass_settings.check_update_auth(self.authority.key())?;
        GpassSettings::validate_burners(&burners)?;

        self.gpass_settings.burners = burners.clone();

        emit!(BurnersUpdated {
            gpass_settings: self.gpass_settings.key(),
            burners,
        });

        Ok(())
    }
}
