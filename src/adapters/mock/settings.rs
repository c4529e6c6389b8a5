//! In-memory settings provider for testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::settings::Settings;
use crate::traits::{SettingsError, SettingsProvider};

/// In-memory settings provider for testing.
///
/// ```ignore
/// let settings = InMemorySettings::with_api_key("sk-test");
/// assert_eq!(settings.api_key().await?, Some("sk-test".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySettings {
    settings: Arc<Mutex<Option<Settings>>>,
    load_should_fail: Arc<Mutex<bool>>,
    load_count: Arc<Mutex<usize>>,
}

impl InMemorySettings {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a provider already holding an API key.
    pub fn with_api_key(key: &str) -> Self {
        let provider = Self::new();
        provider.set_settings(Some(Settings::with_api_key(key)));
        provider
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// Replace the stored settings synchronously.
    pub fn set_settings(&self, settings: Option<Settings>) {
        *self.settings.lock().unwrap() = settings;
    }

    /// How many times `load` was called.
    pub fn load_count(&self) -> usize {
        *self.load_count.lock().unwrap()
    }
}

#[async_trait]
impl SettingsProvider for InMemorySettings {
    async fn load(&self) -> Result<Option<Settings>, SettingsError> {
        *self.load_count.lock().unwrap() += 1;
        if *self.load_should_fail.lock().unwrap() {
            return Err(SettingsError::LoadFailed("Mock load failure".to_string()));
        }
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn save(&self, settings: &Settings) -> Result<(), SettingsError> {
        *self.settings.lock().unwrap() = Some(settings.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), SettingsError> {
        *self.settings.lock().unwrap() = None;
        Ok(())
    }
}
