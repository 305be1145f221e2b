use crate::errors::Result;
use crate::goals::goals_model::{NewSavingGoal, SavingGoal};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Trait for saving goal repository operations
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<SavingGoal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Option<SavingGoal>>;
    async fn insert_new_goal(&self, new_goal: NewSavingGoal) -> Result<SavingGoal>;
    async fn update_goal(&self, goal_update: SavingGoal) -> Result<SavingGoal>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
    /// Adds `amount` to the goal's current amount in a single write.
    async fn add_to_current_amount(&self, goal_id: &str, amount: Decimal) -> Result<SavingGoal>;
}

/// Trait for saving goal service operations
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn get_goals(&self) -> Result<Vec<SavingGoal>>;
    fn get_goal(&self, goal_id: &str) -> Result<Option<SavingGoal>>;
    async fn create_goal(&self, new_goal: NewSavingGoal) -> Result<SavingGoal>;
    async fn update_goal(&self, updated_goal_data: SavingGoal) -> Result<SavingGoal>;
    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize>;
    async fn add_contribution(&self, goal_id: &str, amount: Decimal) -> Result<SavingGoal>;
}
