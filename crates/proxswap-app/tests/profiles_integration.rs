//! Integration tests for profile management.
//!
//! These tests exercise the application layer of proxswap-app end-to-end:
//! `ProfileRegistry` + the INI-backed store + real files in a temp
//! directory.

use proxswap_app::application::manage_profiles::ProfileRegistry;
use proxswap_app::infrastructure::storage::profiles::{open_store, persist_store, PROFILE_FILE_NAME};
use proxswap_core::ProxyProfile;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn test_first_run_add_save_and_reopen_profile() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(PROFILE_FILE_NAME);

    // First run: nothing on disk yet.
    let store = open_store(&path).expect("first run");
    let mut registry = ProfileRegistry::new(store);
    assert!(registry.profiles().is_empty());

    registry
        .upsert(&ProxyProfile::new("office", "proxy.corp.example", "8080"))
        .expect("valid profile");
    registry.save(&path).expect("save");

    // Second run: the profile is back.
    let reopened = ProfileRegistry::new(open_store(&path).expect("reopen"));
    let profiles = reopened.profiles();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name, "office");
    assert_eq!(profiles[0].host, "proxy.corp.example");
    assert_eq!(profiles[0].port, "8080");
}

#[test]
fn test_rename_flow_adds_new_section_and_removes_old_one() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(PROFILE_FILE_NAME);

    let mut registry = ProfileRegistry::new(open_store(&path).expect("open"));
    registry
        .upsert(&ProxyProfile::new("ofice", "proxy.example", "8080"))
        .expect("valid profile");

    // The UI renames by saving under the new name and deleting the old
    // section.
    registry
        .upsert(&ProxyProfile::new("office", "proxy.example", "8080"))
        .expect("valid profile");
    registry.remove("ofice");
    registry.save(&path).expect("save");

    let reopened = ProfileRegistry::new(open_store(&path).expect("reopen"));
    let names: Vec<String> = reopened.profiles().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["office".to_string()]);
}

#[test]
fn test_hand_edited_sections_without_endpoint_survive_but_are_not_listed() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(PROFILE_FILE_NAME);
    std::fs::write(
        &path,
        "[office]\nhost=proxy.example\nport=8080\n\n[notes]\ntheme=dark\n",
    )
    .expect("seed file");

    let mut registry = ProfileRegistry::new(open_store(&path).expect("open"));
    assert_eq!(registry.profiles().len(), 1);

    // Editing a profile must not destroy the unrelated section.
    registry
        .upsert(&ProxyProfile::new("office", "proxy.example", "9090"))
        .expect("valid profile");
    registry.save(&path).expect("save");

    let reopened = open_store(&path).expect("reopen");
    assert_eq!(reopened.get("notes", "theme"), Some("dark"));
    assert_eq!(reopened.get("office", "port"), Some("9090"));
}

#[test]
fn test_delete_profile_persists_across_reopen() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(PROFILE_FILE_NAME);

    let mut registry = ProfileRegistry::new(open_store(&path).expect("open"));
    registry
        .upsert(&ProxyProfile::new("office", "proxy.example", "8080"))
        .expect("valid profile");
    registry
        .upsert(&ProxyProfile::new("home", "10.0.0.4", "3128"))
        .expect("valid profile");
    registry.save(&path).expect("save");

    let mut registry = ProfileRegistry::new(open_store(&path).expect("reopen"));
    registry.remove("office");
    registry.save(&path).expect("save after delete");

    let reopened = ProfileRegistry::new(open_store(&path).expect("reopen again"));
    let names: Vec<String> = reopened.profiles().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["home".to_string()]);
}

#[test]
fn test_invalid_profile_is_rejected_and_nothing_is_written() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(PROFILE_FILE_NAME);

    let mut registry = ProfileRegistry::new(open_store(&path).expect("open"));
    let result = registry.upsert(&ProxyProfile::new("office", "proxy.example", "eighty"));
    assert!(result.is_err());

    persist_store(registry.store(), &path).expect("persist");
    let reopened = open_store(&path).expect("reopen");
    assert!(reopened.is_empty());
}
