use serde::{Deserialize, Serialize};

use crate::constants::{
    ACHIEVEMENT_RANK_DIVISOR, CHALLENGE_RANK_DIVISOR, MAX_ACTIVE_CHALLENGES, XP_AMOUNT_DIVISOR,
};
use crate::errors::{Error, Result};

pub const MAX_ACTIVE_CHALLENGES_KEY: &str = "max_active_challenges";
pub const XP_AMOUNT_DIVISOR_KEY: &str = "xp_amount_divisor";
pub const CHALLENGE_RANK_DIVISOR_KEY: &str = "challenge_rank_divisor";
pub const ACHIEVEMENT_RANK_DIVISOR_KEY: &str = "achievement_rank_divisor";

/// Tunable rules of the gamification engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GamificationSettings {
    pub max_active_challenges: usize,
    pub xp_amount_divisor: i64,
    pub challenge_rank_divisor: i64,
    pub achievement_rank_divisor: i64,
}

impl Default for GamificationSettings {
    fn default() -> Self {
        Self {
            max_active_challenges: MAX_ACTIVE_CHALLENGES,
            xp_amount_divisor: XP_AMOUNT_DIVISOR,
            challenge_rank_divisor: CHALLENGE_RANK_DIVISOR,
            achievement_rank_divisor: ACHIEVEMENT_RANK_DIVISOR,
        }
    }
}

impl GamificationSettings {
    pub fn validate(&self) -> Result<()> {
        if self.max_active_challenges == 0 || self.max_active_challenges > MAX_ACTIVE_CHALLENGES {
            return Err(Error::InvalidConfigValue(format!(
                "{} must be between 1 and {}, got {}",
                MAX_ACTIVE_CHALLENGES_KEY, MAX_ACTIVE_CHALLENGES, self.max_active_challenges
            )));
        }
        for (key, value) in [
            (XP_AMOUNT_DIVISOR_KEY, self.xp_amount_divisor),
            (CHALLENGE_RANK_DIVISOR_KEY, self.challenge_rank_divisor),
            (ACHIEVEMENT_RANK_DIVISOR_KEY, self.achievement_rank_divisor),
        ] {
            if value <= 0 {
                return Err(Error::InvalidConfigValue(format!(
                    "{} must be positive, got {}",
                    key, value
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GamificationSettingsUpdate {
    pub max_active_challenges: Option<usize>,
    pub xp_amount_divisor: Option<i64>,
    pub challenge_rank_divisor: Option<i64>,
    pub achievement_rank_divisor: Option<i64>,
}

impl GamificationSettingsUpdate {
    pub fn apply_to(&self, settings: &GamificationSettings) -> GamificationSettings {
        GamificationSettings {
            max_active_challenges: self
                .max_active_challenges
                .unwrap_or(settings.max_active_challenges),
            xp_amount_divisor: self.xp_amount_divisor.unwrap_or(settings.xp_amount_divisor),
            challenge_rank_divisor: self
                .challenge_rank_divisor
                .unwrap_or(settings.challenge_rank_divisor),
            achievement_rank_divisor: self
                .achievement_rank_divisor
                .unwrap_or(settings.achievement_rank_divisor),
        }
    }
}
