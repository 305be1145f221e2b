use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::goals_model::{NewSavingGoal, SavingGoal};
use super::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
use crate::errors::{Result, ValidationError};

pub struct GoalService {
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl GoalService {
    pub fn new(goal_repo: Arc<dyn GoalRepositoryTrait>) -> Self {
        GoalService { goal_repo }
    }

    fn validate(name: &str, target_amount: Decimal) -> Result<()> {
        if name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()).into());
        }
        if target_amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Target amount must be positive, got {}",
                target_amount
            ))
            .into());
        }
        Ok(())
    }
}

#[async_trait]
impl GoalServiceTrait for GoalService {
    fn get_goals(&self) -> Result<Vec<SavingGoal>> {
        self.goal_repo.load_goals()
    }

    fn get_goal(&self, goal_id: &str) -> Result<Option<SavingGoal>> {
        self.goal_repo.get_goal(goal_id)
    }

    async fn create_goal(&self, new_goal: NewSavingGoal) -> Result<SavingGoal> {
        Self::validate(&new_goal.name, new_goal.target_amount)?;
        self.goal_repo.insert_new_goal(new_goal).await
    }

    async fn update_goal(&self, updated_goal_data: SavingGoal) -> Result<SavingGoal> {
        Self::validate(&updated_goal_data.name, updated_goal_data.target_amount)?;
        self.goal_repo.update_goal(updated_goal_data).await
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        self.goal_repo.delete_goal(goal_id_to_delete).await
    }

    async fn add_contribution(&self, goal_id: &str, amount: Decimal) -> Result<SavingGoal> {
        if amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "Contribution must be positive, got {}",
                amount
            ))
            .into());
        }
        let goal = self.goal_repo.add_to_current_amount(goal_id, amount).await?;
        debug!(
            "Goal '{}' now at {} of {}",
            goal.name, goal.current_amount, goal.target_amount
        );
        Ok(goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::InMemoryGoalRepository;
    use rust_decimal_macros::dec;

    fn new_goal(name: &str, target: Decimal) -> NewSavingGoal {
        NewSavingGoal {
            id: None,
            name: name.to_string(),
            target_amount: target,
            deadline: None,
            icon_name: None,
            color_code: None,
        }
    }

    #[tokio::test]
    async fn contributions_accumulate() {
        let service = GoalService::new(Arc::new(InMemoryGoalRepository::default()));
        let goal = service
            .create_goal(new_goal("Vacation", dec!(100)))
            .await
            .unwrap();

        service.add_contribution(&goal.id, dec!(60)).await.unwrap();
        let updated = service.add_contribution(&goal.id, dec!(45)).await.unwrap();

        assert_eq!(updated.current_amount, dec!(105));
        assert!(updated.is_achieved());
    }

    #[tokio::test]
    async fn rejects_invalid_input() {
        let service = GoalService::new(Arc::new(InMemoryGoalRepository::default()));
        assert!(service.create_goal(new_goal(" ", dec!(10))).await.is_err());
        assert!(service.create_goal(new_goal("Car", dec!(0))).await.is_err());

        let goal = service.create_goal(new_goal("Car", dec!(10))).await.unwrap();
        assert!(service.add_contribution(&goal.id, dec!(-5)).await.is_err());
    }

    #[tokio::test]
    async fn overflowing_contribution_is_rejected() {
        let service = GoalService::new(Arc::new(InMemoryGoalRepository::default()));
        let goal = service.create_goal(new_goal("Moon", dec!(10))).await.unwrap();
        service.add_contribution(&goal.id, Decimal::MAX).await.unwrap();

        assert!(matches!(
            service.add_contribution(&goal.id, Decimal::MAX).await,
            Err(crate::errors::Error::Validation(ValidationError::InvalidInput(_)))
        ));
        assert_eq!(
            service.get_goal(&goal.id).unwrap().unwrap().current_amount,
            Decimal::MAX
        );
    }

    #[tokio::test]
    async fn delete_removes_goal() {
        let service = GoalService::new(Arc::new(InMemoryGoalRepository::default()));
        let goal = service.create_goal(new_goal("Phone", dec!(10))).await.unwrap();
        assert_eq!(service.delete_goal(goal.id.clone()).await.unwrap(), 1);
        assert!(service.get_goal(&goal.id).unwrap().is_none());
        assert!(service.get_goals().unwrap().is_empty());
    }
}
