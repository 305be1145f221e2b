use crate::achievements::achievements_model::{Achievement, AchievementCategory};
use crate::errors::Result;
use async_trait::async_trait;

/// Trait for achievement repository operations
#[async_trait]
pub trait AchievementRepositoryTrait: Send + Sync {
    fn get_achievement(&self, achievement_id: &str) -> Result<Option<Achievement>>;
    /// All achievements ordered by category, then tier.
    fn list_achievements(&self) -> Result<Vec<Achievement>>;
    fn list_by_category(&self, category: AchievementCategory) -> Result<Vec<Achievement>>;
    /// Locked achievements of `category`.
    fn list_pending_by_category(&self, category: AchievementCategory) -> Result<Vec<Achievement>>;
    fn count_achievements(&self) -> Result<i64>;
    fn count_unlocked(&self) -> Result<i64>;
    async fn insert_achievements(&self, achievements: Vec<Achievement>) -> Result<usize>;
    async fn update_achievement(&self, achievement: Achievement) -> Result<Achievement>;
}

/// Trait for achievement service operations
#[async_trait]
pub trait AchievementServiceTrait: Send + Sync {
    fn get_achievements(&self) -> Result<Vec<Achievement>>;
    fn get_achievement(&self, achievement_id: &str) -> Result<Option<Achievement>>;
    fn get_unlocked_achievements(&self) -> Result<Vec<Achievement>>;
    fn get_locked_achievements(&self) -> Result<Vec<Achievement>>;
    fn get_achievements_by_category(&self, category: AchievementCategory)
        -> Result<Vec<Achievement>>;
    fn count_unlocked(&self) -> Result<i64>;
    fn count_total(&self) -> Result<i64>;
    /// Seeds the catalog when no achievement exists yet. Returns the number inserted.
    async fn seed_catalog(&self, catalog: Vec<Achievement>) -> Result<usize>;
    /// Adds `delta` to the achievement's progress. Returns it when this call unlocked it.
    async fn update_achievement_progress(
        &self,
        achievement_id: &str,
        delta: i32,
    ) -> Result<Option<Achievement>>;
    /// Unlocks the achievement. Returns it when this call unlocked it.
    async fn unlock_achievement(&self, achievement_id: &str) -> Result<Option<Achievement>>;
    /// Feeds `value` to every locked achievement of `category`; returns the ones unlocked now.
    async fn check_category(
        &self,
        category: AchievementCategory,
        value: i32,
    ) -> Result<Vec<Achievement>>;
    async fn check_all(
        &self,
        savings_amount: i32,
        streak_days: i32,
        budget_compliance: i32,
    ) -> Result<Vec<Achievement>>;
}
