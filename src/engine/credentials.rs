// ==========================================
// Poultry Farm Records - Credential Engine
// ==========================================
// Responsibility: sequence credential verification and re-hashing
// Collaborator: a salted adaptive hash (bcrypt in production)
// ==========================================
// Legacy bridge: rows written before hashing was introduced hold
// plaintext. A verify failure followed by exact string equality is
// accepted as a match, and the caller re-hashes the row on first
// success so the fallback retires itself.
// ==========================================

use crate::engine::guard::{GuardError, GuardResult};

// ==========================================
// PasswordHasher - hashing collaborator
// ==========================================
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, secret: &str) -> anyhow::Result<String>;
    fn verify(&self, secret: &str, digest: &str) -> bool;
}

/// Production hasher over bcrypt.
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Lower costs are for tests only.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, secret: &str) -> anyhow::Result<String> {
        Ok(bcrypt::hash(secret, self.cost)?)
    }

    fn verify(&self, secret: &str, digest: &str) -> bool {
        bcrypt::verify(secret, digest).unwrap_or(false)
    }
}

// ==========================================
// CredentialMatch - how a candidate matched
// ==========================================
// LegacyPlaintext tells the caller the stored value needs the
// one-time re-hash migration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialMatch {
    Hashed,
    LegacyPlaintext,
}

// ==========================================
// CredentialEngine
// ==========================================
pub struct CredentialEngine<'a> {
    hasher: &'a dyn PasswordHasher,
}

impl<'a> CredentialEngine<'a> {
    pub fn new(hasher: &'a dyn PasswordHasher) -> Self {
        Self { hasher }
    }

    /// Check a candidate secret against the stored value. Hash
    /// verification is tried first; exact equality against a legacy
    /// plaintext value is an equally valid fallback match.
    pub fn verify_password(&self, candidate: &str, stored: &str) -> Option<CredentialMatch> {
        if self.hasher.verify(candidate, stored) {
            return Some(CredentialMatch::Hashed);
        }
        if stored == candidate {
            return Some(CredentialMatch::LegacyPlaintext);
        }
        None
    }

    /// Verify the old secret (both paths accepted), then hash the new
    /// one. Returns the digest to store; the caller persists it.
    pub fn change_password(
        &self,
        old_secret: &str,
        stored: &str,
        new_secret: &str,
    ) -> GuardResult<String> {
        if self.verify_password(old_secret, stored).is_none() {
            return Err(GuardError::MismatchedSecret);
        }
        self.hasher
            .hash(new_secret)
            .map_err(|_| GuardError::MismatchedSecret)
    }
}

// ==========================================
// Unit tests
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    // MIN_COST keeps the adaptive hash cheap in tests
    fn hasher() -> BcryptHasher {
        BcryptHasher::with_cost(4)
    }

    #[test]
    fn test_verify_hashed_secret() {
        let h = hasher();
        let engine = CredentialEngine::new(&h);

        let digest = h.hash("rahasia").unwrap();
        assert_eq!(
            engine.verify_password("rahasia", &digest),
            Some(CredentialMatch::Hashed)
        );
        assert_eq!(engine.verify_password("salah", &digest), None);
    }

    #[test]
    fn test_verify_legacy_plaintext_fallback() {
        let h = hasher();
        let engine = CredentialEngine::new(&h);

        // Stored value was never hashed
        assert_eq!(
            engine.verify_password("admin123", "admin123"),
            Some(CredentialMatch::LegacyPlaintext)
        );
        assert_eq!(engine.verify_password("admin124", "admin123"), None);
    }

    #[test]
    fn test_change_password_with_hashed_old() {
        let h = hasher();
        let engine = CredentialEngine::new(&h);

        let stored = h.hash("old-secret").unwrap();
        let new_digest = engine
            .change_password("old-secret", &stored, "new-secret")
            .unwrap();

        assert!(h.verify("new-secret", &new_digest));
        assert!(!h.verify("old-secret", &new_digest));
    }

    #[test]
    fn test_change_password_with_legacy_old() {
        let h = hasher();
        let engine = CredentialEngine::new(&h);

        // Legacy plaintext row; the old secret matches by equality
        let new_digest = engine
            .change_password("admin123", "admin123", "new-secret")
            .unwrap();
        assert!(h.verify("new-secret", &new_digest));
    }

    #[test]
    fn test_change_password_rejects_wrong_old() {
        let h = hasher();
        let engine = CredentialEngine::new(&h);

        let stored = h.hash("old-secret").unwrap();
        assert_eq!(
            engine.change_password("wrong", &stored, "new-secret"),
            Err(GuardError::MismatchedSecret)
        );
    }
}
