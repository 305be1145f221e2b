use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::levels_model::{LevelState, LevelUpOutcome};
use super::levels_traits::{LevelRepositoryTrait, LevelServiceTrait};
use crate::clock::Clock;
use crate::errors::Result;

pub struct LevelService {
    repository: Arc<dyn LevelRepositoryTrait>,
    clock: Arc<dyn Clock>,
    user_id: String,
}

impl LevelService {
    pub fn new(
        repository: Arc<dyn LevelRepositoryTrait>,
        clock: Arc<dyn Clock>,
        user_id: impl Into<String>,
    ) -> Self {
        LevelService {
            repository,
            clock,
            user_id: user_id.into(),
        }
    }

    fn load_or_default(&self) -> Result<LevelState> {
        Ok(self
            .repository
            .get_level(&self.user_id)?
            .unwrap_or_else(|| LevelState::new(self.user_id.clone(), self.clock.timestamp())))
    }
}

#[async_trait]
impl LevelServiceTrait for LevelService {
    async fn initialize(&self) -> Result<LevelState> {
        if let Some(existing) = self.repository.get_level(&self.user_id)? {
            return Ok(existing);
        }
        info!("Creating level record for profile '{}'", self.user_id);
        self.repository
            .save_level(LevelState::new(self.user_id.clone(), self.clock.timestamp()))
            .await
    }

    fn get_level(&self) -> Result<LevelState> {
        self.load_or_default()
    }

    async fn add_experience(&self, base_xp: i64, streak_bonus: f64) -> Result<LevelUpOutcome> {
        let current = self.load_or_default()?;
        let next = current.with_experience(base_xp, streak_bonus, self.clock.timestamp());
        let outcome = LevelUpOutcome {
            leveled_up: next.level > current.level,
            new_level: next.level,
        };

        debug!(
            "Granted {} base XP (x{}) to '{}': level {} -> {}, rank {} -> {}",
            base_xp, streak_bonus, self.user_id, current.level, next.level, current.rank, next.rank
        );
        if outcome.leveled_up {
            info!("Profile '{}' reached level {}", self.user_id, next.level);
        }

        self.repository.save_level(next).await?;
        Ok(outcome)
    }

    async fn add_rank_points(&self, points: i64) -> Result<bool> {
        let current = self.load_or_default()?;
        let next = current.with_rank_points(points, self.clock.timestamp());
        let rank_changed = next.rank != current.rank;
        if rank_changed {
            info!(
                "Profile '{}' moved from rank {} to {}",
                self.user_id, current.rank, next.rank
            );
        }
        self.repository.save_level(next).await?;
        Ok(rank_changed)
    }

    async fn update_streak_bonus(&self, streak_bonus: f64) -> Result<LevelState> {
        let current = self.load_or_default()?;
        if current.streak_bonus == streak_bonus {
            return Ok(current);
        }
        self.repository
            .save_level(current.with_streak_bonus(streak_bonus, self.clock.timestamp()))
            .await
    }

    fn level_progress(&self) -> Result<i32> {
        Ok(self.load_or_default()?.level_progress())
    }

    fn preview_experience(&self, xp: i64) -> Result<LevelUpOutcome> {
        let current = self.load_or_default()?;
        let next = current.with_experience(xp, current.streak_bonus, self.clock.timestamp());
        Ok(LevelUpOutcome {
            leveled_up: next.level > current.level,
            new_level: next.level,
        })
    }
}
