use crate::challenges::challenges_model::{Challenge, ChallengeProgress, ChallengeType};
use crate::errors::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for challenge repository operations
#[async_trait]
pub trait ChallengeRepositoryTrait: Send + Sync {
    fn get_challenge(&self, challenge_id: &str) -> Result<Option<Challenge>>;
    /// All challenges, newest first.
    fn list_challenges(&self) -> Result<Vec<Challenge>>;
    /// Active challenges ordered by end date.
    fn list_active(&self) -> Result<Vec<Challenge>>;
    fn list_completed(&self) -> Result<Vec<Challenge>>;
    fn count_active(&self) -> Result<i64>;
    fn count_completed(&self) -> Result<i64>;
    async fn insert_challenges(&self, challenges: Vec<Challenge>) -> Result<usize>;
    async fn update_challenge(&self, challenge: Challenge) -> Result<Challenge>;
}

/// Trait for challenge service operations
#[async_trait]
pub trait ChallengeServiceTrait: Send + Sync {
    fn get_challenges(&self) -> Result<Vec<Challenge>>;
    fn get_challenge(&self, challenge_id: &str) -> Result<Option<Challenge>>;
    fn get_active_challenges(&self) -> Result<Vec<Challenge>>;
    fn get_completed_challenges(&self) -> Result<Vec<Challenge>>;
    /// Active challenges of one type.
    fn get_challenges_by_type(&self, challenge_type: ChallengeType) -> Result<Vec<Challenge>>;
    /// Challenges that are neither active nor completed, easiest first.
    fn get_available_challenges(&self, limit: usize) -> Result<Vec<Challenge>>;
    fn count_active(&self) -> Result<usize>;
    fn count_completed(&self) -> Result<i64>;
    async fn seed_catalog(&self, catalog: Vec<Challenge>) -> Result<usize>;
    /// Adds `amount` to the challenge's progress. Reaching the target marks it
    /// completed and inactive, which frees one of the active slots. Progress
    /// that would overflow is rejected with a validation error.
    async fn update_progress(&self, challenge_id: &str, amount: Decimal)
        -> Result<ChallengeProgress>;
    async fn activate(&self, challenge_id: &str, duration_days: i32) -> Result<Challenge>;
    async fn abandon(&self, challenge_id: &str) -> Result<Challenge>;
    /// Completes every active challenge whose progress already reaches its target.
    async fn check_completed_challenges(&self) -> Result<Vec<Challenge>>;
}
