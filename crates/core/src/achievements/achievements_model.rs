//! Achievement domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

/// Area of the app an achievement is tied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementCategory {
    Savings,
    Budget,
    Expenses,
    Income,
    Streaks,
    Special,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 6] = [
        AchievementCategory::Savings,
        AchievementCategory::Budget,
        AchievementCategory::Expenses,
        AchievementCategory::Income,
        AchievementCategory::Streaks,
        AchievementCategory::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Savings => "SAVINGS",
            AchievementCategory::Budget => "BUDGET",
            AchievementCategory::Expenses => "EXPENSES",
            AchievementCategory::Income => "INCOME",
            AchievementCategory::Streaks => "STREAKS",
            AchievementCategory::Special => "SPECIAL",
        }
    }

    /// How a reported value is folded into progress.
    pub fn progress_rule(&self) -> ProgressRule {
        match self {
            AchievementCategory::Streaks => ProgressRule::HighWaterMark,
            _ => ProgressRule::Accumulate,
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown achievement category '{}'",
                    s
                )))
            })
    }
}

/// Difficulty tier, easiest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AchievementTier {
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
}

impl AchievementTier {
    pub const ALL: [AchievementTier; 5] = [
        AchievementTier::Bronze,
        AchievementTier::Silver,
        AchievementTier::Gold,
        AchievementTier::Platinum,
        AchievementTier::Diamond,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementTier::Bronze => "BRONZE",
            AchievementTier::Silver => "SILVER",
            AchievementTier::Gold => "GOLD",
            AchievementTier::Platinum => "PLATINUM",
            AchievementTier::Diamond => "DIAMOND",
        }
    }
}

impl fmt::Display for AchievementTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementTier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown achievement tier '{}'",
                    s
                )))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressRule {
    /// Add the reported value to progress.
    Accumulate,
    /// Replace progress only when the reported value is higher.
    HighWaterMark,
}

/// Domain model representing an achievement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    pub tier: AchievementTier,
    pub points_reward: i32,
    pub icon_name: String,
    pub conditions: String,
    pub target_progress: i32,
    pub progress: i32,
    pub is_unlocked: bool,
    pub unlocked_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl Achievement {
    /// Folds `value` into progress according to `rule` and unlocks when the
    /// target is reached. Returns `None` when nothing changed.
    ///
    /// Unlocked achievements are frozen: progress and unlock stamp never move again.
    pub fn apply_progress(
        &self,
        value: i32,
        rule: ProgressRule,
        now: NaiveDateTime,
    ) -> Option<Achievement> {
        if self.is_unlocked {
            return None;
        }

        let progress = match rule {
            ProgressRule::Accumulate if value > 0 => self.progress.saturating_add(value),
            ProgressRule::HighWaterMark if value > self.progress => value,
            _ => self.progress,
        };
        let unlock = progress >= self.target_progress;

        if progress == self.progress && !unlock {
            return None;
        }

        Some(Achievement {
            progress,
            is_unlocked: unlock,
            unlocked_at: if unlock { Some(now) } else { None },
            ..self.clone()
        })
    }

    /// Unlock regardless of progress; `None` when already unlocked.
    pub fn unlocked(&self, now: NaiveDateTime) -> Option<Achievement> {
        if self.is_unlocked {
            return None;
        }
        Some(Achievement {
            is_unlocked: true,
            unlocked_at: Some(now),
            ..self.clone()
        })
    }
}
