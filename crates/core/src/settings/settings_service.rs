use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::settings_model::{
    ACHIEVEMENT_RANK_DIVISOR_KEY, CHALLENGE_RANK_DIVISOR_KEY, MAX_ACTIVE_CHALLENGES_KEY,
    XP_AMOUNT_DIVISOR_KEY,
};
use super::{
    GamificationSettings, GamificationSettingsUpdate, SettingsRepositoryTrait,
    SettingsServiceTrait,
};
use crate::errors::{DatabaseError, Error, Result};

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }

    fn parse_or<T: FromStr>(&self, key: &str, default: T) -> Result<T> {
        match self.get_setting_value(key)? {
            Some(raw) => raw.trim().parse::<T>().map_err(|_| {
                Error::InvalidConfigValue(format!("{} has invalid value '{}'", key, raw))
            }),
            None => Ok(default),
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<GamificationSettings> {
        let defaults = GamificationSettings::default();
        let settings = GamificationSettings {
            max_active_challenges: self
                .parse_or(MAX_ACTIVE_CHALLENGES_KEY, defaults.max_active_challenges)?,
            xp_amount_divisor: self.parse_or(XP_AMOUNT_DIVISOR_KEY, defaults.xp_amount_divisor)?,
            challenge_rank_divisor: self
                .parse_or(CHALLENGE_RANK_DIVISOR_KEY, defaults.challenge_rank_divisor)?,
            achievement_rank_divisor: self
                .parse_or(ACHIEVEMENT_RANK_DIVISOR_KEY, defaults.achievement_rank_divisor)?,
        };
        settings.validate()?;
        Ok(settings)
    }

    async fn update_settings(
        &self,
        update: &GamificationSettingsUpdate,
    ) -> Result<GamificationSettings> {
        let next = update.apply_to(&self.get_settings()?);
        next.validate()?;

        let entries = [
            (
                MAX_ACTIVE_CHALLENGES_KEY,
                update.max_active_challenges.map(|v| v.to_string()),
            ),
            (
                XP_AMOUNT_DIVISOR_KEY,
                update.xp_amount_divisor.map(|v| v.to_string()),
            ),
            (
                CHALLENGE_RANK_DIVISOR_KEY,
                update.challenge_rank_divisor.map(|v| v.to_string()),
            ),
            (
                ACHIEVEMENT_RANK_DIVISOR_KEY,
                update.achievement_rank_divisor.map(|v| v.to_string()),
            ),
        ];
        for (key, value) in entries {
            if let Some(value) = value {
                debug!("Updating setting {} = {}", key, value);
                self.settings_repository.update_setting(key, &value).await?;
            }
        }
        Ok(next)
    }

    fn get_setting_value(&self, key: &str) -> Result<Option<String>> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(Some(value)),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
