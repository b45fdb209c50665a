// ==========================================
// Poultry Farm Records - User & Session
// ==========================================
// Aligned with: user_account table
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// UserAccount - stored account row
// ==========================================
// `password` holds a bcrypt digest; legacy rows may still hold
// plaintext until the first successful login re-hashes them.
#[derive(Debug, Clone)]
pub struct UserAccount {
    pub user_id: String,
    pub username: String,
    pub password: String, // digest or legacy plaintext, never serialized
    pub full_name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    /// Strip the credential for anything that leaves the crate.
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            user_id: self.user_id.clone(),
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            role: self.role.clone(),
            image_url: self.image_url.clone(),
            created_at: self.created_at,
        }
    }
}

// ==========================================
// UserProfile - credential-free view
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: String,
    pub username: String,
    pub full_name: String,
    pub role: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ==========================================
// Session - explicit identity context
// ==========================================
// Created at login, dropped at logout, and passed to any collaborator
// that needs to know who is acting. Replaces ambient logged-in-user
// state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub username: String,
    pub role: String,
    pub logged_in_at: DateTime<Utc>,
}

impl Session {
    pub fn for_user(profile: &UserProfile) -> Self {
        Self {
            user_id: profile.user_id.clone(),
            username: profile.username.clone(),
            role: profile.role.clone(),
            logged_in_at: Utc::now(),
        }
    }
}
