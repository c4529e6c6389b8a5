//! Environment-driven configuration and the on-disk API key.

mod common;

use std::path::PathBuf;
use std::sync::Arc;

use common::*;
use kakomon::adapters::FileSettingsProvider;
use kakomon::catalog::StaticCatalog;
use kakomon::cli::store_api_key;
use kakomon::config::{AppConfig, ENV_API_URL, ENV_CATALOG, ENV_DATA_DIR, ENV_LOG};
use kakomon::settings::SettingsManager;
use kakomon::traits::SettingsProvider;
use kakomon::workflow::{GenerationState, Session};
use serial_test::serial;
use tempfile::TempDir;

fn clear_env() {
    for key in [ENV_API_URL, ENV_DATA_DIR, ENV_CATALOG, ENV_LOG] {
        std::env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_from_env_overrides_defaults() {
    clear_env();
    std::env::set_var(ENV_API_URL, "https://exams.example.edu/");
    std::env::set_var(ENV_DATA_DIR, "/tmp/kakomon-env");
    std::env::set_var(ENV_CATALOG, "/tmp/catalog.json");
    std::env::set_var(ENV_LOG, "kakomon=debug");

    let config = AppConfig::from_env();
    clear_env();

    assert_eq!(
        config.generation_endpoint(),
        "https://exams.example.edu/api/generate-similar"
    );
    assert_eq!(config.data_dir, PathBuf::from("/tmp/kakomon-env"));
    assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/catalog.json")));
    assert_eq!(config.log_filter, "kakomon=debug");
}

#[test]
#[serial]
fn test_blank_env_values_are_ignored() {
    clear_env();
    std::env::set_var(ENV_API_URL, "   ");
    std::env::set_var(ENV_CATALOG, "");

    let config = AppConfig::from_env();
    clear_env();

    assert_eq!(config.api_base_url, kakomon::config::DEFAULT_API_URL);
    assert!(config.catalog_path.is_none());
}

#[tokio::test]
async fn test_stored_key_is_read_by_file_provider() {
    let dir = TempDir::new().unwrap();
    let manager = SettingsManager::new(dir.path());

    assert!(store_api_key(&manager, "   ").is_err());
    store_api_key(&manager, "  sk-file  ").unwrap();

    let provider = FileSettingsProvider::new(dir.path());
    assert_eq!(provider.api_key().await.unwrap(), Some("sk-file".to_string()));

    manager.clear().unwrap();
    assert_eq!(provider.api_key().await.unwrap(), None);
}

#[tokio::test]
async fn test_session_picks_up_key_written_after_start() {
    let dir = TempDir::new().unwrap();
    let http = MockHttpClient::new();
    http.set_response(TEST_ENDPOINT, generated("ok"));

    let mut session = Session::new(
        Arc::new(StaticCatalog::builtin()),
        Arc::new(http.clone()),
        Arc::new(FileSettingsProvider::new(dir.path())),
        Arc::new(MockClipboard::new()),
        TEST_ENDPOINT,
    );
    session.open_professor("suzuki");
    session.set_typed("Solve x+1=2").unwrap();
    assert!(session.generate().await.is_err());

    store_api_key(&SettingsManager::new(dir.path()), "sk-later").unwrap();
    session.generate().await.unwrap();

    assert_eq!(
        session.workspace().unwrap().generation(),
        &GenerationState::Succeeded {
            items: vec!["ok".into()]
        }
    );
    assert_eq!(http.get_requests()[0].json_body().unwrap()["apiKey"], "sk-later");
}
