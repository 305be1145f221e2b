//! Saving challenge domain models.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeDifficulty {
    Beginner,
    Easy,
    Medium,
    Hard,
    Expert,
}

impl ChallengeDifficulty {
    pub const ALL: [ChallengeDifficulty; 5] = [
        ChallengeDifficulty::Beginner,
        ChallengeDifficulty::Easy,
        ChallengeDifficulty::Medium,
        ChallengeDifficulty::Hard,
        ChallengeDifficulty::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeDifficulty::Beginner => "BEGINNER",
            ChallengeDifficulty::Easy => "EASY",
            ChallengeDifficulty::Medium => "MEDIUM",
            ChallengeDifficulty::Hard => "HARD",
            ChallengeDifficulty::Expert => "EXPERT",
        }
    }
}

impl fmt::Display for ChallengeDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeDifficulty {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown challenge difficulty '{}'",
                    s
                )))
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChallengeType {
    Daily,
    Weekly,
    NoSpend,
    Percentage,
    OneTime,
    Streak,
}

impl ChallengeType {
    pub const ALL: [ChallengeType; 6] = [
        ChallengeType::Daily,
        ChallengeType::Weekly,
        ChallengeType::NoSpend,
        ChallengeType::Percentage,
        ChallengeType::OneTime,
        ChallengeType::Streak,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChallengeType::Daily => "DAILY",
            ChallengeType::Weekly => "WEEKLY",
            ChallengeType::NoSpend => "NO_SPEND",
            ChallengeType::Percentage => "PERCENTAGE",
            ChallengeType::OneTime => "ONE_TIME",
            ChallengeType::Streak => "STREAK",
        }
    }
}

impl fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChallengeType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown challenge type '{}'",
                    s
                )))
            })
    }
}

/// Domain model representing a time-boxed saving challenge
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_amount: Decimal,
    pub reward_points: i32,
    pub difficulty: ChallengeDifficulty,
    pub challenge_type: ChallengeType,
    pub duration_days: i32,
    pub icon_name: Option<String>,
    pub color_code: Option<String>,
    pub is_active: bool,
    pub is_completed: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress: Decimal,
    pub created_at: NaiveDateTime,
}

/// Result of adding progress to a challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct ChallengeProgress {
    pub challenge: Challenge,
    /// `true` only on the call that crossed the target.
    pub newly_completed: bool,
}

impl Challenge {
    /// Adds `amount` to progress. Reaching the target completes the challenge
    /// and takes it out of the active set; completion is sticky.
    ///
    /// Fails with `InvalidInput` when the new progress does not fit a `Decimal`.
    pub fn with_progress(&self, amount: Decimal) -> crate::errors::Result<ChallengeProgress> {
        let progress = self.progress.checked_add(amount).ok_or_else(|| {
            ValidationError::InvalidInput(format!(
                "Progress of challenge {} overflows when adding {}",
                self.id, amount
            ))
        })?;
        let reached = progress >= self.target_amount;
        let newly_completed = reached && !self.is_completed;

        let challenge = Challenge {
            progress,
            is_completed: self.is_completed || reached,
            is_active: self.is_active && !newly_completed,
            ..self.clone()
        };
        Ok(ChallengeProgress {
            challenge,
            newly_completed,
        })
    }

    pub fn activated(&self, today: NaiveDate, duration_days: i32) -> Challenge {
        Challenge {
            is_active: true,
            start_date: Some(today),
            end_date: Some(today + Duration::days(i64::from(duration_days))),
            ..self.clone()
        }
    }

    /// Leaves the active set and drops all progress.
    pub fn abandoned(&self) -> Challenge {
        Challenge {
            is_active: false,
            progress: Decimal::ZERO,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn challenge(target: Decimal) -> Challenge {
        Challenge {
            id: "c".to_string(),
            title: "Daily saving".to_string(),
            description: String::new(),
            target_amount: target,
            reward_points: 30,
            difficulty: ChallengeDifficulty::Beginner,
            challenge_type: ChallengeType::Daily,
            duration_days: 7,
            icon_name: None,
            color_code: None,
            is_active: true,
            is_completed: false,
            start_date: None,
            end_date: None,
            progress: Decimal::ZERO,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn completes_on_the_call_that_reaches_target() {
        let first = challenge(dec!(50)).with_progress(dec!(30)).unwrap();
        assert!(!first.newly_completed);
        assert!(!first.challenge.is_completed);

        let second = first.challenge.with_progress(dec!(30)).unwrap();
        assert!(second.newly_completed);
        assert!(second.challenge.is_completed);
        assert!(!second.challenge.is_active);
        assert_eq!(second.challenge.progress, dec!(60));

        let third = second.challenge.with_progress(dec!(10)).unwrap();
        assert!(!third.newly_completed);
        assert!(third.challenge.is_completed);
    }

    #[test]
    fn zero_target_completes_immediately() {
        let result = challenge(dec!(0)).with_progress(dec!(1)).unwrap();
        assert!(result.newly_completed);
    }

    #[test]
    fn overflowing_progress_is_rejected() {
        let mut full = challenge(Decimal::MAX);
        full.progress = Decimal::MAX;
        assert!(matches!(
            full.with_progress(dec!(1)),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn activation_sets_window() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 28).unwrap();
        let active = challenge(dec!(50)).abandoned().activated(today, 7);
        assert!(active.is_active);
        assert_eq!(active.start_date, Some(today));
        assert_eq!(active.end_date, NaiveDate::from_ymd_opt(2024, 2, 4));
    }

    #[test]
    fn abandon_resets_progress() {
        let c = challenge(dec!(50))
            .with_progress(dec!(20))
            .unwrap()
            .challenge
            .abandoned();
        assert!(!c.is_active);
        assert_eq!(c.progress, Decimal::ZERO);
    }

    #[test]
    fn difficulty_orders_easiest_first() {
        assert!(ChallengeDifficulty::Beginner < ChallengeDifficulty::Expert);
        for t in ChallengeType::ALL {
            assert_eq!(t.as_str().parse::<ChallengeType>().unwrap(), t);
        }
    }
}
