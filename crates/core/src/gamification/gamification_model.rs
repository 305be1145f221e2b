//! Results and summaries produced by the gamification orchestrator.

use serde::Serialize;

use crate::achievements::Achievement;
use crate::challenges::Challenge;
use crate::levels::SavingRank;

/// Everything a single saving contribution triggered.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GamificationResult {
    /// Base XP of the contribution, before the streak multiplier.
    pub xp_earned: i64,
    pub streak_days: i32,
    pub leveled_up: bool,
    pub current_level: i32,
    pub completed_challenges: Vec<Challenge>,
    pub unlocked_achievements: Vec<Achievement>,
    pub streak_bonus: f64,
}

impl Default for GamificationResult {
    fn default() -> Self {
        Self {
            xp_earned: 0,
            streak_days: 0,
            leveled_up: false,
            current_level: 1,
            completed_challenges: Vec::new(),
            unlocked_achievements: Vec::new(),
            streak_bonus: 1.0,
        }
    }
}

impl GamificationResult {
    pub fn has_celebrations(&self) -> bool {
        self.leveled_up
            || !self.completed_challenges.is_empty()
            || !self.unlocked_achievements.is_empty()
    }
}

/// Consolidated profile figures for dashboards.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub level: i32,
    pub current_xp: i64,
    pub xp_to_next_level: i64,
    pub saving_rank: SavingRank,
    pub rank_points: i64,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub total_saving_days: i32,
    pub completed_challenges: i64,
    pub unlocked_achievements: i64,
    pub total_achievements: i64,
    /// Progress towards the next level, 0 to 100.
    pub level_progress: i32,
}
