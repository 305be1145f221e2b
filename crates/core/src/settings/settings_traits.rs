//! Repository and service traits for settings.

use async_trait::async_trait;

use crate::errors::Result;
use crate::settings::{GamificationSettings, GamificationSettingsUpdate};

/// Repository trait for key/value application settings.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key. Missing keys yield `DatabaseError::NotFound`.
    fn get_setting(&self, setting_key: &str) -> Result<String>;

    /// Insert or replace a single setting.
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<GamificationSettings>;

    async fn update_settings(
        &self,
        update: &GamificationSettingsUpdate,
    ) -> Result<GamificationSettings>;

    /// Get a single setting value by key. Returns None if not found.
    fn get_setting_value(&self, key: &str) -> Result<Option<String>>;
}
