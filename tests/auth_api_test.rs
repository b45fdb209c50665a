// ==========================================
// Auth service integration tests
// ==========================================
// Target: login over hashed and legacy rows, the one-time re-hash
// migration, and the change-password sequencing
// ==========================================

mod test_helpers;

use chrono::Utc;
use poultry_records::api::{ApiError, AuthApi};
use poultry_records::domain::UserAccount;
use poultry_records::engine::{BcryptHasher, PasswordHasher};
use poultry_records::logging;
use poultry_records::repository::UserRepository;
use std::sync::Arc;

// Low bcrypt cost keeps the test suite fast
fn create_auth(db_path: &str) -> (AuthApi, Arc<UserRepository>, Arc<BcryptHasher>) {
    let user_repo = Arc::new(UserRepository::new(db_path).expect("open repo"));
    let hasher = Arc::new(BcryptHasher::with_cost(4));
    let auth = AuthApi::new(user_repo.clone(), hasher.clone());
    (auth, user_repo, hasher)
}

fn seed_user(repo: &UserRepository, username: &str, password: &str) {
    repo.insert(&UserAccount {
        user_id: format!("user-{username}"),
        username: username.to_string(),
        password: password.to_string(),
        full_name: "Pak Budi".to_string(),
        role: "owner".to_string(),
        image_url: None,
        created_at: Utc::now(),
    })
    .expect("insert user");
}

#[test]
fn test_login_with_hashed_credential() {
    logging::init_test();
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let (auth, user_repo, hasher) = create_auth(&db_path);

    let digest = hasher.hash("rahasia-besar").expect("hash");
    seed_user(&user_repo, "budi", &digest);

    let (session, profile) = auth.login("budi", "rahasia-besar").expect("login");
    assert_eq!(session.username, "budi");
    assert_eq!(profile.full_name, "Pak Budi");

    let err = auth.login("budi", "salah").unwrap_err();
    assert!(matches!(err, ApiError::AuthenticationFailed(_)));

    // Unknown user reads the same as a wrong password
    let err = auth.login("siapa", "rahasia-besar").unwrap_err();
    assert!(matches!(err, ApiError::AuthenticationFailed(_)));
}

#[test]
fn test_legacy_plaintext_login_migrates_to_digest() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let (auth, user_repo, hasher) = create_auth(&db_path);

    // Row predates hashing: the credential is stored as-is
    seed_user(&user_repo, "admin", "admin123");

    let (session, _) = auth.login("admin", "admin123").expect("legacy login");
    assert_eq!(session.username, "admin");

    // The stored value is now a digest that verifies the same secret
    let user = user_repo
        .find_by_username("admin")
        .expect("find")
        .expect("some");
    assert_ne!(user.password, "admin123");
    assert!(hasher.verify("admin123", &user.password));

    // Second login takes the hashed path and still succeeds
    auth.login("admin", "admin123").expect("second login");
}

#[test]
fn test_change_password_requires_matching_old_secret() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let (auth, user_repo, hasher) = create_auth(&db_path);

    let digest = hasher.hash("lama").expect("hash");
    seed_user(&user_repo, "budi", &digest);
    let (session, _) = auth.login("budi", "lama").expect("login");

    let err = auth
        .change_password(&session, "tebakan", "baru")
        .unwrap_err();
    assert!(matches!(err, ApiError::AuthenticationFailed(_)));

    auth.change_password(&session, "lama", "baru").expect("change");

    let user = user_repo
        .find_by_username("budi")
        .expect("find")
        .expect("some");
    assert!(hasher.verify("baru", &user.password));
    assert!(!hasher.verify("lama", &user.password));
}

#[test]
fn test_change_password_accepts_legacy_old_secret() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let (auth, user_repo, hasher) = create_auth(&db_path);

    seed_user(&user_repo, "admin", "admin123");
    // Build a session without logging in first: the stored row is
    // still plaintext when the password change arrives
    let user = user_repo
        .find_by_username("admin")
        .expect("find")
        .expect("some");
    let session = poultry_records::domain::Session::for_user(&user.profile());

    auth.change_password(&session, "admin123", "baru").expect("change");

    let user = user_repo
        .find_by_username("admin")
        .expect("find")
        .expect("some");
    assert!(hasher.verify("baru", &user.password));

    // Empty fields are rejected before any verification runs
    let err = auth.change_password(&session, "", "x").unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));
}

#[test]
fn test_update_profile() {
    let (_temp_file, db_path) = test_helpers::create_test_db().expect("create test db");
    let (auth, user_repo, hasher) = create_auth(&db_path);

    let digest = hasher.hash("rahasia").expect("hash");
    seed_user(&user_repo, "budi", &digest);
    let (session, _) = auth.login("budi", "rahasia").expect("login");

    let profile = auth
        .update_profile(&session, "Budi Santoso", Some("https://example.com/b.png"))
        .expect("update");
    assert_eq!(profile.full_name, "Budi Santoso");
    assert_eq!(
        profile.image_url.as_deref(),
        Some("https://example.com/b.png")
    );

    let err = auth.update_profile(&session, "  ", None).unwrap_err();
    assert!(matches!(err, ApiError::InvalidInput(_)));

    auth.logout(session);
}
