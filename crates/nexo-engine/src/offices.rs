//! # Office Directory
//!
//! Tenant administration: creation, self-service registration, the
//! activation toggle and the referral hierarchy. Everything here except
//! registration is super-admin only.

use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use nexo_core::validation::{validate_email, validate_name, validate_password_confirmation};
use nexo_core::{
    build_referral_forest, OfficeStatus, OfficeUnit, ReferralForest, OFFICE_TRIAL_DAYS,
};

use crate::context::Engine;
use crate::error::EngineResult;

impl Engine {
    /// Creates an office from the admin panel.
    ///
    /// Starts active with Normal standing and a trial expiry.
    pub fn create_office(
        &mut self,
        name: &str,
        owner_email: &str,
        phone: &str,
        referrer_email: Option<&str>,
    ) -> EngineResult<OfficeUnit> {
        self.require_super_admin()?;
        let office = self.insert_office(name, owner_email, phone, referrer_email)?;
        Ok(office)
    }

    /// Self-service registration from the signup flow.
    ///
    /// Same record as [`create_office`](Engine::create_office), but the
    /// caller proves intent by typing the password twice, and no session
    /// is required.
    pub fn register_office(
        &mut self,
        name: &str,
        owner_email: &str,
        phone: &str,
        referrer_email: Option<&str>,
        password: &str,
        confirmation: &str,
    ) -> EngineResult<OfficeUnit> {
        validate_password_confirmation(password, confirmation)?;
        self.insert_office(name, owner_email, phone, referrer_email)
    }

    fn insert_office(
        &mut self,
        name: &str,
        owner_email: &str,
        phone: &str,
        referrer_email: Option<&str>,
    ) -> EngineResult<OfficeUnit> {
        validate_name("name", name)?;
        validate_email(owner_email)?;

        let office = OfficeUnit {
            id: Uuid::new_v4().to_string(),
            name: name.trim().to_string(),
            // Login key, normalized so lookup is case-insensitive
            owner_email: owner_email.trim().to_lowercase(),
            referrer_email: referrer_email
                .map(|e| e.trim().to_lowercase())
                .filter(|e| !e.is_empty()),
            active: true,
            status: OfficeStatus::Normal,
            expiry_date: Utc::now() + Duration::days(OFFICE_TRIAL_DAYS),
            phone: phone.trim().to_string(),
        };

        info!(office_id = %office.id, name = %office.name, "office registered");

        self.offices.push(office.clone());
        self.persist_offices();
        Ok(office)
    }

    /// Flips an office between active/Normal and inactive/Blocked.
    ///
    /// A blocked office cannot log in; its data stays untouched.
    pub fn toggle_office(&mut self, id: &str) -> EngineResult<()> {
        self.require_super_admin()?;

        if let Some(office) = self.offices.iter_mut().find(|o| o.id == id) {
            office.active = !office.active;
            office.status = if office.active {
                OfficeStatus::Normal
            } else {
                OfficeStatus::Blocked
            };
            info!(office_id = %id, active = office.active, "office toggled");
            self.persist_offices();
        }
        Ok(())
    }

    /// Removes an office record. The office's stamped data stays in the
    /// other collections and remains visible to the super admin.
    pub fn delete_office(&mut self, id: &str) -> EngineResult<()> {
        self.require_super_admin()?;

        let before = self.offices.len();
        self.offices.retain(|o| o.id != id);
        if self.offices.len() != before {
            info!(office_id = %id, "office deleted");
            self.persist_offices();
        }
        Ok(())
    }

    /// The referral hierarchy, with cycle members surfaced separately.
    pub fn referral_forest(&self) -> EngineResult<ReferralForest> {
        self.require_super_admin()?;
        Ok(build_referral_forest(&self.offices))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
