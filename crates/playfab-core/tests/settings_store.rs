//! Integration test: resource-directory settings store feeding URL
//! resolution.
//!
//! Writes a settings file into a temp resources directory, loads it through
//! the store, and resolves URLs end-to-end against the loaded defaults.

use playfab_core::config::{self, SettingsStoreError};
use playfab_core::endpoint::{resolve_url, QueryParams, DEFAULT_API_HOST};
use playfab_core::settings::ApiSettings;
use tempfile::tempdir;

#[test]
fn loaded_settings_resolve_title_subdomain_urls() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("playfab.toml"),
        "title_id = \"1234\"\ndeveloper_secret_key = \"shh\"\n",
    )
    .unwrap();

    let settings = config::load_from_resources(dir.path()).unwrap();
    let url = resolve_url("/Client/LoginWithCustomID", None, None, &settings);
    assert_eq!(url, "https://1234.playfabapi.com/Client/LoginWithCustomID");
}

#[test]
fn loaded_settings_combine_with_per_call_overrides_and_query() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("playfab.toml"),
        "title_id = \"1234\"\nvertical_name = \"main\"\n",
    )
    .unwrap();

    let settings = config::load_from_resources(dir.path()).unwrap();
    let overrides = ApiSettings {
        title_id: Some("ZZZZ".to_string()),
        ..ApiSettings::default()
    };
    let mut query = QueryParams::new();
    query.insert("a", "1");
    query.insert("b", "2");

    let url = resolve_url("/X", Some(&query), Some(&overrides), &settings);
    assert_eq!(url, "https://ZZZZ.main.playfabapi.com/X?a=1&b=2");
}

#[test]
fn sparse_settings_fall_back_to_builtin_host() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("playfab.toml"), "").unwrap();

    let settings = config::load_from_resources(dir.path()).unwrap();
    let url = resolve_url("/X", None, None, &settings);
    assert_eq!(url, format!("https://{DEFAULT_API_HOST}/X"));
}

#[test]
fn missing_and_ambiguous_stores_are_fatal() {
    let empty = tempdir().unwrap();
    assert!(matches!(
        config::load_from_resources(empty.path()),
        Err(SettingsStoreError::NotFound { .. })
    ));

    let crowded = tempdir().unwrap();
    std::fs::write(crowded.path().join("a.toml"), "title_id = \"AAAA\"\n").unwrap();
    std::fs::write(crowded.path().join("b.toml"), "title_id = \"BBBB\"\n").unwrap();
    assert!(matches!(
        config::load_from_resources(crowded.path()),
        Err(SettingsStoreError::Ambiguous { .. })
    ));
}
