//! Settings provider trait abstraction.
//!
//! The settings store is the user-scoped key/value file that holds the API
//! key. The workflow reads it at generation time and never caches it.

use async_trait::async_trait;

use crate::settings::Settings;

/// Settings operation errors.
#[derive(Debug, Clone)]
pub enum SettingsError {
    /// Failed to load settings
    LoadFailed(String),
    /// Failed to save settings
    SaveFailed(String),
    /// Failed to clear settings
    ClearFailed(String),
    /// Serialization/deserialization error
    Serialization(String),
    /// Other error
    Other(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::LoadFailed(msg) => write!(f, "Failed to load settings: {}", msg),
            SettingsError::SaveFailed(msg) => write!(f, "Failed to save settings: {}", msg),
            SettingsError::ClearFailed(msg) => write!(f, "Failed to clear settings: {}", msg),
            SettingsError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            SettingsError::Other(msg) => write!(f, "Settings error: {}", msg),
        }
    }
}

impl std::error::Error for SettingsError {}

/// Trait for settings storage and retrieval.
///
/// # Example
///
/// ```ignore
/// use kakomon::traits::SettingsProvider;
///
/// async fn has_key<P: SettingsProvider>(provider: &P) -> bool {
///     matches!(provider.api_key().await, Ok(Some(_)))
/// }
/// ```
#[async_trait]
pub trait SettingsProvider: Send + Sync {
    /// Load settings from storage.
    ///
    /// # Returns
    /// - `Ok(Some(settings))` if settings exist and were loaded successfully
    /// - `Ok(None)` if nothing is stored
    /// - `Err(error)` if loading failed
    async fn load(&self) -> Result<Option<Settings>, SettingsError>;

    /// Save settings to storage.
    async fn save(&self, settings: &Settings) -> Result<(), SettingsError>;

    /// Clear all stored settings.
    async fn clear(&self) -> Result<(), SettingsError>;

    /// Read the stored API key, ignoring blank values.
    async fn api_key(&self) -> Result<Option<String>, SettingsError> {
        Ok(self.load().await?.and_then(|settings| settings.api_key().map(String::from)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        assert_eq!(
            SettingsError::LoadFailed("permission denied".to_string()).to_string(),
            "Failed to load settings: permission denied"
        );
        assert_eq!(
            SettingsError::Serialization("expected value at line 1".to_string()).to_string(),
            "Serialization error: expected value at line 1"
        );
    }

    #[test]
    fn test_settings_error_implements_error_trait() {
        let err = SettingsError::Other("x".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
