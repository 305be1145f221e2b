use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::catalog::{default_achievements, default_challenges};
use super::gamification_model::{GamificationResult, UserStats};
use crate::achievements::{Achievement, AchievementCategory, AchievementServiceTrait};
use crate::challenges::{Challenge, ChallengeServiceTrait};
use crate::clock::Clock;
use crate::constants::MAX_XP_PER_GRANT;
use crate::errors::{ChallengeError, Result};
use crate::goals::GoalServiceTrait;
use crate::levels::LevelServiceTrait;
use crate::settings::GamificationSettings;
use crate::streaks::{StreakServiceTrait, StreakState};

/// Entry point that sequences a saving contribution through every component.
#[async_trait]
pub trait GamificationServiceTrait: Send + Sync {
    /// Bootstraps profile rows, seeds the catalog and runs the daily streak check.
    async fn initialize(&self) -> Result<()>;

    async fn register_contribution(
        &self,
        goal_id: &str,
        amount: Decimal,
    ) -> Result<GamificationResult>;

    /// Activates a challenge for its own duration, unless the active set is full.
    async fn activate_challenge(&self, challenge_id: &str) -> Result<Challenge>;

    async fn abandon_challenge(&self, challenge_id: &str) -> Result<Challenge>;

    fn available_challenges(&self, limit: usize) -> Result<Vec<Challenge>>;

    fn has_saved_today(&self) -> Result<bool>;

    fn user_stats(&self) -> Result<UserStats>;

    /// Lapsed-streak reset plus completion sweep. Returns the challenges it completed.
    async fn run_daily_maintenance(&self) -> Result<Vec<Challenge>>;
}

pub struct GamificationService {
    goal_service: Arc<dyn GoalServiceTrait>,
    streak_service: Arc<dyn StreakServiceTrait>,
    level_service: Arc<dyn LevelServiceTrait>,
    challenge_service: Arc<dyn ChallengeServiceTrait>,
    achievement_service: Arc<dyn AchievementServiceTrait>,
    clock: Arc<dyn Clock>,
    settings: GamificationSettings,
}

impl GamificationService {
    pub fn new(
        goal_service: Arc<dyn GoalServiceTrait>,
        streak_service: Arc<dyn StreakServiceTrait>,
        level_service: Arc<dyn LevelServiceTrait>,
        challenge_service: Arc<dyn ChallengeServiceTrait>,
        achievement_service: Arc<dyn AchievementServiceTrait>,
        clock: Arc<dyn Clock>,
        settings: GamificationSettings,
    ) -> Self {
        GamificationService {
            goal_service,
            streak_service,
            level_service,
            challenge_service,
            achievement_service,
            clock,
            settings,
        }
    }

    fn base_xp(&self, amount: Decimal) -> i64 {
        (amount / Decimal::from(self.settings.xp_amount_divisor))
            .floor()
            .to_i64()
            .unwrap_or(MAX_XP_PER_GRANT)
            .clamp(1, MAX_XP_PER_GRANT)
    }

    /// Grants a reward's XP without streak multiplier plus `points / divisor` rank points.
    /// Returns `true` when the XP caused a level-up.
    async fn grant_reward(&self, points: i32, rank_divisor: i64) -> Result<bool> {
        let outcome = self
            .level_service
            .add_experience(i64::from(points), 1.0)
            .await?;
        self.level_service
            .add_rank_points(i64::from(points) / rank_divisor)
            .await?;
        Ok(outcome.leveled_up)
    }

    async fn reward_challenges(&self, completed: &[Challenge]) -> Result<bool> {
        let mut leveled_up = false;
        for challenge in completed {
            debug!(
                "Rewarding challenge '{}' with {} points",
                challenge.title, challenge.reward_points
            );
            leveled_up |= self
                .grant_reward(challenge.reward_points, self.settings.challenge_rank_divisor)
                .await?;
        }
        Ok(leveled_up)
    }

    async fn reward_achievements(&self, unlocked: &[Achievement]) -> Result<bool> {
        let mut leveled_up = false;
        for achievement in unlocked {
            debug!(
                "Rewarding achievement '{}' with {} points",
                achievement.title, achievement.points_reward
            );
            leveled_up |= self
                .grant_reward(
                    achievement.points_reward,
                    self.settings.achievement_rank_divisor,
                )
                .await?;
        }
        Ok(leveled_up)
    }

    async fn advance_challenges(&self, amount: Decimal) -> Result<Vec<Challenge>> {
        let mut completed = Vec::new();
        for challenge in self.challenge_service.get_active_challenges()? {
            let progress = self
                .challenge_service
                .update_progress(&challenge.id, amount)
                .await?;
            if progress.newly_completed {
                completed.push(progress.challenge);
            }
        }
        Ok(completed)
    }

    async fn evaluate_achievements(
        &self,
        amount: Decimal,
        streak: &StreakState,
    ) -> Result<Vec<Achievement>> {
        let savings_value = amount.floor().to_i32().unwrap_or(i32::MAX);
        let mut unlocked = self
            .achievement_service
            .check_category(AchievementCategory::Savings, savings_value)
            .await?;
        if streak.current_streak > 0 {
            unlocked.extend(
                self.achievement_service
                    .check_category(AchievementCategory::Streaks, streak.current_streak)
                    .await?,
            );
        }
        Ok(unlocked)
    }
}

#[async_trait]
impl GamificationServiceTrait for GamificationService {
    async fn initialize(&self) -> Result<()> {
        self.streak_service.initialize().await?;
        self.level_service.initialize().await?;

        let now = self.clock.timestamp();
        self.achievement_service
            .seed_catalog(default_achievements(now))
            .await?;
        self.challenge_service
            .seed_catalog(default_challenges(now))
            .await?;

        let streak = self.streak_service.check_and_reset_streak().await?;
        self.level_service
            .update_streak_bonus(streak.streak_bonus())
            .await?;
        info!(
            "Gamification ready: streak {} day(s), level {}",
            streak.current_streak,
            self.level_service.get_level()?.level
        );
        Ok(())
    }

    async fn register_contribution(
        &self,
        goal_id: &str,
        amount: Decimal,
    ) -> Result<GamificationResult> {
        if amount <= Decimal::ZERO {
            warn!("Ignoring non-positive contribution of {}", amount);
            return Ok(GamificationResult::default());
        }
        if self.goal_service.get_goal(goal_id)?.is_none() {
            warn!("Ignoring contribution to unknown goal {}", goal_id);
            return Ok(GamificationResult::default());
        }
        self.goal_service.add_contribution(goal_id, amount).await?;

        let streak = self.streak_service.register_activity(amount).await?;

        let streak_bonus = self.streak_service.calculate_streak_bonus()?;
        self.level_service.update_streak_bonus(streak_bonus).await?;

        let xp_earned = self.base_xp(amount);
        let mut leveled_up = self
            .level_service
            .add_experience(xp_earned, streak_bonus)
            .await?
            .leveled_up;

        let completed_challenges = self.advance_challenges(amount).await?;
        leveled_up |= self.reward_challenges(&completed_challenges).await?;

        let unlocked_achievements = self.evaluate_achievements(amount, &streak).await?;
        leveled_up |= self.reward_achievements(&unlocked_achievements).await?;

        let current_level = self.level_service.get_level()?.level;
        debug!(
            "Contribution of {} to goal {}: {} XP (x{}), streak {}, level {}, {} challenge(s), {} achievement(s)",
            amount,
            goal_id,
            xp_earned,
            streak_bonus,
            streak.current_streak,
            current_level,
            completed_challenges.len(),
            unlocked_achievements.len()
        );

        Ok(GamificationResult {
            xp_earned,
            streak_days: streak.current_streak,
            leveled_up,
            current_level,
            completed_challenges,
            unlocked_achievements,
            streak_bonus,
        })
    }

    async fn activate_challenge(&self, challenge_id: &str) -> Result<Challenge> {
        let challenge = self
            .challenge_service
            .get_challenge(challenge_id)?
            .ok_or_else(|| ChallengeError::NotFound(challenge_id.to_string()))?;
        if challenge.is_active {
            return Ok(challenge);
        }

        let active = self.challenge_service.count_active()?;
        let max = self.settings.max_active_challenges;
        if active >= max {
            warn!(
                "Cannot activate challenge '{}': {} of {} slots in use",
                challenge.title, active, max
            );
            return Err(ChallengeError::CapacityExceeded { active, max }.into());
        }

        self.challenge_service
            .activate(challenge_id, challenge.duration_days)
            .await
    }

    async fn abandon_challenge(&self, challenge_id: &str) -> Result<Challenge> {
        self.challenge_service.abandon(challenge_id).await
    }

    fn available_challenges(&self, limit: usize) -> Result<Vec<Challenge>> {
        self.challenge_service.get_available_challenges(limit)
    }

    fn has_saved_today(&self) -> Result<bool> {
        self.streak_service.is_active_today()
    }

    fn user_stats(&self) -> Result<UserStats> {
        let level = self.level_service.get_level()?;
        let streak = self.streak_service.get_streak()?;
        Ok(UserStats {
            level: level.level,
            current_xp: level.current_xp,
            xp_to_next_level: level.xp_to_next_level,
            saving_rank: level.rank,
            rank_points: level.rank_points,
            current_streak: streak.current_streak,
            longest_streak: streak.longest_streak,
            total_saving_days: streak.total_saving_days,
            completed_challenges: self.challenge_service.count_completed()?,
            unlocked_achievements: self.achievement_service.count_unlocked()?,
            total_achievements: self.achievement_service.count_total()?,
            level_progress: level.level_progress(),
        })
    }

    async fn run_daily_maintenance(&self) -> Result<Vec<Challenge>> {
        let streak = self.streak_service.check_and_reset_streak().await?;
        self.level_service
            .update_streak_bonus(streak.streak_bonus())
            .await?;

        let completed = self.challenge_service.check_completed_challenges().await?;
        self.reward_challenges(&completed).await?;
        if !completed.is_empty() {
            info!("Daily maintenance completed {} challenge(s)", completed.len());
        }
        Ok(completed)
    }
}
