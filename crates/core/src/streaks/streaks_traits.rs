use crate::errors::Result;
use crate::streaks::streaks_model::StreakState;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for streak repository operations
#[async_trait]
pub trait StreakRepositoryTrait: Send + Sync {
    fn get_streak(&self, user_id: &str) -> Result<Option<StreakState>>;
    async fn save_streak(&self, streak: StreakState) -> Result<StreakState>;
}

/// Trait for streak service operations
#[async_trait]
pub trait StreakServiceTrait: Send + Sync {
    /// Creates the zero-state row when the profile has none yet.
    async fn initialize(&self) -> Result<StreakState>;
    fn get_streak(&self) -> Result<StreakState>;
    async fn register_activity(&self, amount: Decimal) -> Result<StreakState>;
    async fn check_and_reset_streak(&self) -> Result<StreakState>;
    fn calculate_streak_bonus(&self) -> Result<f64>;
    async fn update_daily_target(&self, amount: Decimal) -> Result<StreakState>;
    fn is_active_today(&self) -> Result<bool>;
}
