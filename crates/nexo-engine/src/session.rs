//! # Session / Authentication
//!
//! MVP auth model: one shared password, identity by office owner email.
//! The super admin email short-circuits office lookup entirely.
//!
//! Denials never mutate state; a successful login replaces the persisted
//! session record so the next [`Engine::open`](crate::Engine::open) resumes
//! it.

use tracing::{info, warn};

use nexo_core::{Actor, OfficeStatus, Role};
use nexo_store::{keys, save_record};

use crate::context::Engine;
use crate::error::{EngineError, EngineResult};

impl Engine {
    /// Authenticates and starts a session.
    ///
    /// ## Denial Paths
    /// - unknown owner email
    /// - wrong password
    /// - office deactivated or blocked
    ///
    /// All deny with [`AuthDenied`](crate::ErrorCode::AuthDenied) and leave
    /// everything untouched.
    pub fn login(&mut self, email: &str, password: &str) -> EngineResult<Actor> {
        let email = email.trim().to_lowercase();

        let actor = if email == self.config.super_admin_email.to_lowercase() {
            if password != self.config.access_password {
                return Err(EngineError::auth_denied("wrong password"));
            }
            Actor {
                name: self.config.super_admin_name.clone(),
                email,
                role: Role::SuperAdmin,
                office_name: "Platform".to_string(),
            }
        } else {
            let office = self
                .offices
                .iter()
                .find(|o| o.owner_email.to_lowercase() == email)
                .ok_or_else(|| EngineError::auth_denied("unknown email"))?;

            if !office.active || office.status == OfficeStatus::Blocked {
                return Err(EngineError::auth_denied("office is deactivated"));
            }
            if password != self.config.access_password {
                return Err(EngineError::auth_denied("wrong password"));
            }

            Actor {
                name: office.name.clone(),
                email,
                role: Role::OfficeAdmin,
                office_name: office.name.clone(),
            }
        };

        info!(email = %actor.email, role = ?actor.role, "login");

        if let Err(e) = save_record(self.store.as_ref(), keys::SESSION, &actor) {
            warn!(error = %e, "session save failed; session lives in memory only");
        }

        self.actor = Some(actor.clone());
        Ok(actor)
    }

    /// Ends the session and clears the persisted record.
    pub fn logout(&mut self) {
        if let Some(actor) = self.actor.take() {
            info!(email = %actor.email, "logout");
        }
        if let Err(e) = self.store.remove(keys::SESSION) {
            warn!(error = %e, "session record removal failed");
        }
    }
}
