use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use rust_decimal::Decimal;

use super::streaks_model::{StreakState, StreakTransition};
use super::streaks_traits::{StreakRepositoryTrait, StreakServiceTrait};
use crate::clock::Clock;
use crate::errors::{Result, ValidationError};

pub struct StreakService {
    repository: Arc<dyn StreakRepositoryTrait>,
    clock: Arc<dyn Clock>,
    user_id: String,
}

impl StreakService {
    pub fn new(
        repository: Arc<dyn StreakRepositoryTrait>,
        clock: Arc<dyn Clock>,
        user_id: impl Into<String>,
    ) -> Self {
        StreakService {
            repository,
            clock,
            user_id: user_id.into(),
        }
    }

    fn load_or_default(&self) -> Result<StreakState> {
        Ok(self
            .repository
            .get_streak(&self.user_id)?
            .unwrap_or_else(|| StreakState::new(self.user_id.clone(), self.clock.timestamp())))
    }
}

#[async_trait]
impl StreakServiceTrait for StreakService {
    async fn initialize(&self) -> Result<StreakState> {
        if let Some(existing) = self.repository.get_streak(&self.user_id)? {
            return Ok(existing);
        }
        info!("Creating streak record for profile '{}'", self.user_id);
        self.repository
            .save_streak(StreakState::new(self.user_id.clone(), self.clock.timestamp()))
            .await
    }

    fn get_streak(&self) -> Result<StreakState> {
        self.load_or_default()
    }

    async fn register_activity(&self, amount: Decimal) -> Result<StreakState> {
        let current = self.load_or_default()?;
        let (next, transition) =
            current.register_activity(amount, self.clock.today(), self.clock.timestamp());

        debug!(
            "Streak activity of {} for '{}': {:?} (streak {} -> {})",
            amount, self.user_id, transition, current.current_streak, next.current_streak
        );

        match transition {
            StreakTransition::BelowTarget | StreakTransition::AlreadyActiveToday => Ok(current),
            _ => self.repository.save_streak(next).await,
        }
    }

    async fn check_and_reset_streak(&self) -> Result<StreakState> {
        let Some(current) = self.repository.get_streak(&self.user_id)? else {
            return self.load_or_default();
        };
        let next = current.reset_if_lapsed(self.clock.today(), self.clock.timestamp());
        if next == current {
            return Ok(current);
        }
        if next.current_streak != current.current_streak {
            info!(
                "Streak of {} day(s) for '{}' lapsed; resetting",
                current.current_streak, self.user_id
            );
        }
        self.repository.save_streak(next).await
    }

    fn calculate_streak_bonus(&self) -> Result<f64> {
        Ok(self.load_or_default()?.streak_bonus())
    }

    async fn update_daily_target(&self, amount: Decimal) -> Result<StreakState> {
        if amount.is_sign_negative() {
            return Err(ValidationError::InvalidInput(format!(
                "Daily target must not be negative, got {}",
                amount
            ))
            .into());
        }
        let current = self.load_or_default()?;
        self.repository
            .save_streak(current.with_daily_target(amount, self.clock.timestamp()))
            .await
    }

    fn is_active_today(&self) -> Result<bool> {
        Ok(self.load_or_default()?.is_active_today)
    }
}
