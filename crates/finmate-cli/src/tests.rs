//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use finmate_core::{InMemoryThemeStore, Profile, Theme, ThemeStore};

use crate::commands::{self, truncate};

fn profile_fixture() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("profile.json");
    Profile::sample().save(&path).unwrap();
    (dir, path)
}

// ========== Init Command Tests ==========

#[test]
fn test_cmd_init_writes_profile() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("profile.json");

    commands::cmd_init(&out, false).unwrap();

    let written = Profile::load(&out).unwrap();
    assert_eq!(written.username, Profile::sample().username);
}

#[test]
fn test_cmd_init_refuses_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("profile.json");

    commands::cmd_init(&out, false).unwrap();
    assert!(commands::cmd_init(&out, false).is_err());
    assert!(commands::cmd_init(&out, true).is_ok());
}

// ========== Project Command Tests ==========

#[test]
fn test_cmd_project_summary() {
    let result = commands::cmd_project(5000.0, 3000.0, 2000.0, None, 7.0, 3.0, 5, false);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_project_with_timeline_and_override() {
    let result = commands::cmd_project(5000.0, 0.0, 0.0, Some(250.0), 5.0, 2.0, 3, true);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_project_zero_years() {
    let result = commands::cmd_project(5000.0, 3000.0, 2000.0, None, 7.0, 3.0, 0, true);
    assert!(result.is_ok());
}

// ========== Chat Command Tests ==========

#[test]
fn test_cmd_chat_once_with_profile() {
    let (_dir, path) = profile_fixture();
    let store = InMemoryThemeStore::default();

    let result = commands::cmd_chat_once(Some(&path), &store, "how much have I saved?", false);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_chat_once_json_output() {
    let (_dir, path) = profile_fixture();
    let store = InMemoryThemeStore::default();

    let result = commands::cmd_chat_once(Some(&path), &store, "take me to my goals", true);
    assert!(result.is_ok());
}

#[test]
fn test_cmd_chat_once_missing_profile_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let store = InMemoryThemeStore::default();

    let result = commands::cmd_chat_once(Some(&missing), &store, "hello", false);
    assert!(result.is_err());
}

#[test]
fn test_cmd_chat_theme_command_persists() {
    let (_dir, path) = profile_fixture();
    let store = InMemoryThemeStore::default();

    commands::cmd_chat_once(Some(&path), &store, "switch to dark mode", false).unwrap();
    assert_eq!(store.get(), Theme::Dark);
}

// ========== Health Command Tests ==========

#[test]
fn test_cmd_health_with_profile() {
    let (_dir, path) = profile_fixture();
    let result = commands::cmd_health(Some(&path));
    assert!(result.is_ok());
}

// ========== Theme Command Tests ==========

#[test]
fn test_cmd_theme_show_set_toggle() {
    let store = InMemoryThemeStore::default();

    commands::cmd_theme_show(&store).unwrap();

    commands::cmd_theme_set(&store, "dark").unwrap();
    assert_eq!(store.get(), Theme::Dark);

    // Setting the same theme again is a no-op, not an error
    commands::cmd_theme_set(&store, "dark").unwrap();
    assert_eq!(store.get(), Theme::Dark);

    commands::cmd_theme_toggle(&store).unwrap();
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn test_cmd_theme_set_rejects_unknown() {
    let store = InMemoryThemeStore::default();
    assert!(commands::cmd_theme_set(&store, "solarized").is_err());
    assert_eq!(store.get(), Theme::Light);
}

#[test]
fn test_open_theme_store_with_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("theme");

    let store = commands::open_theme_store(Some(&path)).unwrap();
    store.set(Theme::Dark).unwrap();

    let reopened = commands::open_theme_store(Some(&path)).unwrap();
    assert_eq!(reopened.get(), Theme::Dark);
}

// ========== Helpers ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a very long category name", 10), "a very ...");
}
