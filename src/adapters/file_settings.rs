//! File-based settings provider adapter.
//!
//! Wraps [`SettingsManager`] and runs its blocking file I/O on the blocking
//! pool so the event loop never stalls on disk.

use async_trait::async_trait;
use std::path::Path;

use crate::settings::{Settings, SettingsManager};
use crate::traits::{SettingsError, SettingsProvider};

/// File-based settings provider.
///
/// Settings are stored in `<data_dir>/settings.json`.
#[derive(Debug, Clone)]
pub struct FileSettingsProvider {
    manager: SettingsManager,
}

impl FileSettingsProvider {
    /// Create a provider rooted at `data_dir`.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            manager: SettingsManager::new(data_dir),
        }
    }

    /// Get a reference to the underlying settings manager.
    pub fn manager(&self) -> &SettingsManager {
        &self.manager
    }

    async fn blocking<T, F>(&self, op: F) -> Result<T, SettingsError>
    where
        T: Send + 'static,
        F: FnOnce(SettingsManager) -> Result<T, SettingsError> + Send + 'static,
    {
        let manager = self.manager.clone();
        tokio::task::spawn_blocking(move || op(manager))
            .await
            .map_err(|e| SettingsError::Other(e.to_string()))?
    }
}

#[async_trait]
impl SettingsProvider for FileSettingsProvider {
    async fn load(&self) -> Result<Option<Settings>, SettingsError> {
        self.blocking(|manager| {
            let settings = manager.load().map_err(|e| match e.kind() {
                std::io::ErrorKind::InvalidData => SettingsError::Serialization(e.to_string()),
                _ => SettingsError::LoadFailed(e.to_string()),
            })?;
            Ok((!settings.is_empty()).then_some(settings))
        })
        .await
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        let settings = settings.clone();
        self.blocking(move |manager| {
            manager
                .save(&settings)
                .map_err(|e| SettingsError::SaveFailed(e.to_string()))
        })
        .await
    }

    async fn clear(&self) -> Result<(), SettingsError> {
        self.blocking(|manager| {
            manager
                .clear()
                .map_err(|e| SettingsError::ClearFailed(e.to_string()))
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_load_empty_dir_is_none() {
        let temp = TempDir::new().unwrap();
        let provider = FileSettingsProvider::new(temp.path());
        assert!(provider.load().await.unwrap().is_none());
        assert!(provider.api_key().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_then_api_key() {
        let temp = TempDir::new().unwrap();
        let provider = FileSettingsProvider::new(temp.path());

        provider.save(&Settings::with_api_key("sk-file")).await.unwrap();

        assert_eq!(provider.api_key().await.unwrap(), Some("sk-file".to_string()));
        assert!(provider.manager().settings_path().exists());
    }

    #[tokio::test]
    async fn test_malformed_file_is_serialization_error() {
        let temp = TempDir::new().unwrap();
        let provider = FileSettingsProvider::new(temp.path());
        std::fs::write(provider.manager().settings_path(), "{").unwrap();

        assert!(matches!(
            provider.load().await,
            Err(SettingsError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_clear_removes_key() {
        let temp = TempDir::new().unwrap();
        let provider = FileSettingsProvider::new(temp.path());
        provider.save(&Settings::with_api_key("sk-file")).await.unwrap();

        provider.clear().await.unwrap();

        assert!(provider.api_key().await.unwrap().is_none());
    }
}
