//! Settings store tests.

use snaptrade_cli::error::SnapTradeError;
use snaptrade_cli::settings::SettingsStore;

fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
    SettingsStore::load_from(dir.path().join("settings.json")).expect("load failed")
}

#[test]
fn missing_file_starts_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = store_in(&dir);
    assert_eq!(store.active_profile_name(), "default");
    assert_eq!(store.profile().client_id, None);
}

#[test]
fn updates_round_trip_through_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_in(&dir);
    store
        .update_profile(|p| {
            p.client_id = Some("MYAPP".to_owned());
            p.consumer_key = Some("key".to_owned());
            p.last_account_id = Some("acct-1".to_owned());
        })
        .expect("update failed");

    let reloaded = store_in(&dir);
    let profile = reloaded.profile();
    assert_eq!(profile.client_id.as_deref(), Some("MYAPP"));
    assert_eq!(profile.consumer_key.as_deref(), Some("key"));
    assert_eq!(profile.last_account_id.as_deref(), Some("acct-1"));
}

#[test]
fn profiles_are_isolated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_in(&dir);
    store
        .update_profile(|p| p.client_id = Some("DEFAULT-APP".to_owned()))
        .expect("update failed");

    store.set_active_profile("work").expect("switch failed");
    assert_eq!(store.profile().client_id, None);
    store
        .update_profile(|p| p.client_id = Some("WORK-APP".to_owned()))
        .expect("update failed");

    store.set_active_profile("default").expect("switch failed");
    assert_eq!(store.profile().client_id.as_deref(), Some("DEFAULT-APP"));
}

#[test]
fn deleting_the_active_profile_falls_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_in(&dir);
    store.set_active_profile("work").expect("switch failed");
    store.delete_profile("work").expect("delete failed");
    assert_ne!(store.active_profile_name(), "work");
}

#[test]
fn user_auth_requires_both_halves() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut store = store_in(&dir);
    store
        .update_profile(|p| p.user_id = Some("user-1".to_owned()))
        .expect("update failed");
    assert!(store.profile().user_auth().is_none());

    store
        .update_profile(|p| p.user_secret = Some("secret-1".to_owned()))
        .expect("update failed");
    let auth = store.profile().user_auth().expect("auth present");
    assert_eq!(auth.user_id, "user-1");
}

#[test]
fn corrupt_file_is_an_error_not_a_reset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").expect("write failed");

    let err = SettingsStore::load_from(path).expect_err("should fail");
    assert!(matches!(err, SnapTradeError::Settings(_)));
}
