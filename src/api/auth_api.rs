// ==========================================
// Poultry Farm Records - Auth Service
// ==========================================
// Identity is an explicit Session object created here at login and
// dropped at logout; collaborators that need to know who is acting
// receive it as an argument, never read it from ambient state
// ==========================================
// Legacy migration: a plaintext-equality login succeeds, then the
// stored value is immediately re-hashed, so the fallback path runs
// at most once per account
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::user::{Session, UserProfile};
use crate::engine::credentials::{CredentialEngine, CredentialMatch, PasswordHasher};
use crate::repository::UserRepository;
use std::sync::Arc;

pub struct AuthApi {
    user_repo: Arc<UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl AuthApi {
    pub fn new(user_repo: Arc<UserRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { user_repo, hasher }
    }

    /// Verify credentials and open a session.
    ///
    /// The failure message never distinguishes "no such user" from
    /// "wrong password", and the secret itself is never logged.
    pub fn login(&self, username: &str, password: &str) -> ApiResult<(Session, UserProfile)> {
        let user = self
            .user_repo
            .find_by_username(username)?
            .ok_or_else(|| {
                ApiError::AuthenticationFailed("invalid username or password".to_string())
            })?;

        let engine = CredentialEngine::new(self.hasher.as_ref());
        let matched = engine.verify_password(password, &user.password).ok_or_else(|| {
            tracing::warn!(username, "failed login attempt");
            ApiError::AuthenticationFailed("invalid username or password".to_string())
        })?;

        if matched == CredentialMatch::LegacyPlaintext {
            // One-time migration: replace the plaintext row with a
            // digest on the first successful legacy login.
            let digest = self
                .hasher
                .hash(password)
                .map_err(|e| ApiError::InternalError(e.to_string()))?;
            self.user_repo.update_password(&user.user_id, &digest)?;
            tracing::info!(user_id = %user.user_id, "legacy credential re-hashed");
        }

        let profile = user.profile();
        let session = Session::for_user(&profile);
        tracing::info!(user_id = %profile.user_id, "login successful");
        Ok((session, profile))
    }

    /// Close a session. Consuming the value is the point: there is no
    /// session registry to clean up behind it.
    pub fn logout(&self, session: Session) {
        tracing::info!(user_id = %session.user_id, "logout");
        drop(session);
    }

    /// Change the acting user's password. The old secret must match
    /// either the stored digest or a legacy plaintext value.
    pub fn change_password(
        &self,
        session: &Session,
        old_password: &str,
        new_password: &str,
    ) -> ApiResult<()> {
        if old_password.is_empty() || new_password.is_empty() {
            return Err(ApiError::InvalidInput(
                "old and new password are both required".to_string(),
            ));
        }

        let user = self
            .user_repo
            .find_by_id(&session.user_id)?
            .ok_or_else(|| {
                ApiError::NotFound(format!("UserAccount (id={}) does not exist", session.user_id))
            })?;

        let engine = CredentialEngine::new(self.hasher.as_ref());
        let digest = engine.change_password(old_password, &user.password, new_password)?;
        self.user_repo.update_password(&user.user_id, &digest)?;

        tracing::info!(user_id = %user.user_id, "password changed");
        Ok(())
    }

    pub fn update_profile(
        &self,
        session: &Session,
        full_name: &str,
        image_url: Option<&str>,
    ) -> ApiResult<UserProfile> {
        if full_name.trim().is_empty() {
            return Err(ApiError::InvalidInput(
                "required field missing: full_name".to_string(),
            ));
        }

        self.user_repo
            .update_profile(&session.user_id, full_name.trim(), image_url)?;

        let user = self
            .user_repo
            .find_by_id(&session.user_id)?
            .ok_or_else(|| {
                ApiError::NotFound(format!("UserAccount (id={}) does not exist", session.user_id))
            })?;
        Ok(user.profile())
    }
}
