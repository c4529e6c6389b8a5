//! `--set-api-key` and `--clear-api-key`.

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;

use crate::config::AppConfig;
use crate::settings::{Settings, SettingsManager};

/// Store `key` in the settings file, keeping any other settings.
pub fn store_api_key(manager: &SettingsManager, key: &str) -> Result<()> {
    let key = key.trim();
    if key.is_empty() {
        return Err(eyre!("API key is empty"));
    }
    let mut settings = manager.load().unwrap_or_else(|e| {
        tracing::warn!("replacing unreadable settings file: {}", e);
        Settings::default()
    });
    settings.openai_api_key = Some(key.to_string());
    manager
        .save(&settings)
        .wrap_err_with(|| format!("failed to write {}", manager.settings_path().display()))
}

/// Prompt for the key without echoing it and store it.
pub fn handle_set_api_key(config: &AppConfig) -> Result<()> {
    let manager = SettingsManager::new(&config.data_dir);
    let key = rpassword::prompt_password("OpenAI API key: ").wrap_err("failed to read API key")?;
    store_api_key(&manager, &key)?;
    println!("API key saved to {}", manager.settings_path().display());
    Ok(())
}

pub fn handle_clear_api_key(config: &AppConfig) -> Result<()> {
    let manager = SettingsManager::new(&config.data_dir);
    manager
        .clear()
        .wrap_err_with(|| format!("failed to remove {}", manager.settings_path().display()))?;
    println!("API key removed.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_api_key_trims_and_persists() {
        let dir = tempfile::TempDir::new().unwrap();
        let manager = SettingsManager::new(dir.path());

        store_api_key(&manager, "  sk-test\n").unwrap();
        assert_eq!(manager.load().unwrap().api_key(), Some("sk-test"));
    }

    #[test]
    fn test_store_api_key_rejects_blank() {
        let dir = tempfile::TempDir::new().unwrap();
        let manager = SettingsManager::new(dir.path());
        assert!(store_api_key(&manager, "   ").is_err());
        assert!(!manager.settings_path().exists());
    }
}
