use crate::errors::Result;
use crate::levels::levels_model::{LevelState, LevelUpOutcome};
use async_trait::async_trait;

/// Trait for level repository operations
#[async_trait]
pub trait LevelRepositoryTrait: Send + Sync {
    fn get_level(&self, user_id: &str) -> Result<Option<LevelState>>;
    async fn save_level(&self, level: LevelState) -> Result<LevelState>;
}

/// Trait for level service operations
#[async_trait]
pub trait LevelServiceTrait: Send + Sync {
    async fn initialize(&self) -> Result<LevelState>;
    fn get_level(&self) -> Result<LevelState>;
    async fn add_experience(&self, base_xp: i64, streak_bonus: f64) -> Result<LevelUpOutcome>;
    /// Returns `true` when the rank changed.
    async fn add_rank_points(&self, points: i64) -> Result<bool>;
    async fn update_streak_bonus(&self, streak_bonus: f64) -> Result<LevelState>;
    fn level_progress(&self) -> Result<i32>;
    /// Computes the outcome of granting `xp` without persisting it.
    fn preview_experience(&self, xp: i64) -> Result<LevelUpOutcome>;
}
