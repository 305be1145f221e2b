//! Experience, level and rank domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_XP_PER_GRANT, RANK_THRESHOLDS, XP_TO_RANK_POINTS_DIVISOR};
use crate::errors::{Error, ValidationError};

/// "Saving hero" ranks, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SavingRank {
    Novice,
    Saver,
    MoneyMaster,
    BudgetNinja,
    WealthWarrior,
    FinanceLegend,
    EconomyTitan,
    SavingsSuperhero,
}

impl SavingRank {
    pub const ALL: [SavingRank; 8] = [
        SavingRank::Novice,
        SavingRank::Saver,
        SavingRank::MoneyMaster,
        SavingRank::BudgetNinja,
        SavingRank::WealthWarrior,
        SavingRank::FinanceLegend,
        SavingRank::EconomyTitan,
        SavingRank::SavingsSuperhero,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SavingRank::Novice => "NOVICE",
            SavingRank::Saver => "SAVER",
            SavingRank::MoneyMaster => "MONEY_MASTER",
            SavingRank::BudgetNinja => "BUDGET_NINJA",
            SavingRank::WealthWarrior => "WEALTH_WARRIOR",
            SavingRank::FinanceLegend => "FINANCE_LEGEND",
            SavingRank::EconomyTitan => "ECONOMY_TITAN",
            SavingRank::SavingsSuperhero => "SAVINGS_SUPERHERO",
        }
    }

    /// Position in the ascending rank ladder.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Rank points needed to enter this rank.
    pub fn threshold(&self) -> i64 {
        RANK_THRESHOLDS[self.index()]
    }

    /// Highest rank whose threshold is covered by `points`.
    pub fn from_points(points: i64) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|rank| points >= rank.threshold())
            .unwrap_or(SavingRank::Novice)
    }
}

impl fmt::Display for SavingRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SavingRank {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|rank| rank.as_str() == s)
            .ok_or_else(|| {
                Error::Validation(ValidationError::InvalidInput(format!(
                    "Unknown saving rank '{}'",
                    s
                )))
            })
    }
}

/// Cumulative XP needed to reach `level`. Saturates at `i64::MAX`.
pub fn xp_for_level(level: i32) -> i64 {
    let n = i64::from(level) - 1;
    let factor: i64 = match level {
        l if l <= 1 => return 0,
        2 => return 100,
        l if l <= 5 => 100,
        l if l <= 10 => 150,
        l if l <= 20 => 200,
        l if l <= 50 => 250,
        _ => 300,
    };
    factor.saturating_mul(n).saturating_mul(n)
}

/// XP gap between `level` and the next one. Zero once the table saturates.
pub fn xp_gap_for_level(level: i32) -> i64 {
    xp_for_level(level.saturating_add(1)).saturating_sub(xp_for_level(level))
}

/// Experience and rank of one user profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelState {
    pub user_id: String,
    pub level: i32,
    pub current_xp: i64,
    pub xp_to_next_level: i64,
    pub total_xp_earned: i64,
    pub rank: SavingRank,
    pub rank_points: i64,
    pub last_level_up_at: Option<NaiveDateTime>,
    pub streak_bonus: f64,
    pub last_updated: NaiveDateTime,
}

/// Result of granting experience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelUpOutcome {
    pub leveled_up: bool,
    pub new_level: i32,
}

impl LevelState {
    pub fn new(user_id: impl Into<String>, now: NaiveDateTime) -> Self {
        Self {
            user_id: user_id.into(),
            level: 1,
            current_xp: 0,
            xp_to_next_level: xp_gap_for_level(1),
            total_xp_earned: 0,
            rank: SavingRank::Novice,
            rank_points: 0,
            last_level_up_at: None,
            streak_bonus: 1.0,
            last_updated: now,
        }
    }

    /// Grants `base_xp * streak_bonus` (floored, capped at [`MAX_XP_PER_GRANT`])
    /// and converts a tenth of it into rank points.
    ///
    /// The level-up loop stops as soon as the gap to the next level is not
    /// positive, so a corrupted gap can never spin forever.
    pub fn with_experience(&self, base_xp: i64, streak_bonus: f64, now: NaiveDateTime) -> Self {
        let adjusted_xp = ((base_xp as f64 * streak_bonus).floor() as i64).min(MAX_XP_PER_GRANT);

        let mut next = self.clone();
        next.current_xp = next.current_xp.saturating_add(adjusted_xp);
        next.total_xp_earned = next.total_xp_earned.saturating_add(adjusted_xp);

        while next.xp_to_next_level > 0 && next.current_xp >= next.xp_to_next_level {
            next.current_xp -= next.xp_to_next_level;
            next.level += 1;
            next.xp_to_next_level = xp_gap_for_level(next.level);
            next.last_level_up_at = Some(now);
        }

        next.rank_points = next
            .rank_points
            .saturating_add(adjusted_xp / XP_TO_RANK_POINTS_DIVISOR);
        next.rank = SavingRank::from_points(next.rank_points);
        next.last_updated = now;
        next
    }

    pub fn with_rank_points(&self, points: i64, now: NaiveDateTime) -> Self {
        let rank_points = self.rank_points.saturating_add(points);
        Self {
            rank_points,
            rank: SavingRank::from_points(rank_points),
            last_updated: now,
            ..self.clone()
        }
    }

    pub fn with_streak_bonus(&self, streak_bonus: f64, now: NaiveDateTime) -> Self {
        Self {
            streak_bonus: streak_bonus.max(1.0),
            last_updated: now,
            ..self.clone()
        }
    }

    /// Progress towards the next level in percent.
    pub fn level_progress(&self) -> i32 {
        if self.xp_to_next_level <= 0 {
            return 100;
        }
        ((self.current_xp * 100) / self.xp_to_next_level).clamp(0, 100) as i32
    }
}
