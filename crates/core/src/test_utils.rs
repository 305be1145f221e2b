//! In-memory repositories and fixtures shared by the unit tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::achievements::{
    Achievement, AchievementCategory, AchievementRepositoryTrait, AchievementTier,
};
use crate::challenges::{Challenge, ChallengeDifficulty, ChallengeRepositoryTrait, ChallengeType};
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::goals::{GoalRepositoryTrait, NewSavingGoal, SavingGoal};
use crate::levels::{LevelRepositoryTrait, LevelState};
use crate::settings::SettingsRepositoryTrait;
use crate::streaks::{StreakRepositoryTrait, StreakState};

pub(crate) fn fixture_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub(crate) fn achievement_fixture(
    id: &str,
    category: AchievementCategory,
    tier: AchievementTier,
    target_progress: i32,
) -> Achievement {
    Achievement {
        id: id.to_string(),
        title: format!("Achievement {}", id),
        description: String::new(),
        category,
        tier,
        points_reward: 10,
        icon_name: "ic_achievement".to_string(),
        conditions: String::new(),
        target_progress,
        progress: 0,
        is_unlocked: false,
        unlocked_at: None,
        created_at: fixture_timestamp(),
    }
}

pub(crate) fn challenge_fixture(
    id: &str,
    target_amount: Decimal,
    difficulty: ChallengeDifficulty,
) -> Challenge {
    Challenge {
        id: id.to_string(),
        title: format!("Challenge {}", id),
        description: String::new(),
        target_amount,
        reward_points: 30,
        difficulty,
        challenge_type: ChallengeType::Daily,
        duration_days: 7,
        icon_name: None,
        color_code: None,
        is_active: false,
        is_completed: false,
        start_date: None,
        end_date: None,
        progress: Decimal::ZERO,
        created_at: fixture_timestamp(),
    }
}

fn not_found(what: &str, id: &str) -> Error {
    Error::Database(DatabaseError::NotFound(format!("{} {}", what, id)))
}

#[derive(Default)]
pub(crate) struct InMemoryStreakRepository {
    streaks: RwLock<HashMap<String, StreakState>>,
}

#[async_trait]
impl StreakRepositoryTrait for InMemoryStreakRepository {
    fn get_streak(&self, user_id: &str) -> Result<Option<StreakState>> {
        Ok(self.streaks.read().unwrap().get(user_id).cloned())
    }

    async fn save_streak(&self, streak: StreakState) -> Result<StreakState> {
        self.streaks
            .write()
            .unwrap()
            .insert(streak.user_id.clone(), streak.clone());
        Ok(streak)
    }
}

#[derive(Default)]
pub(crate) struct InMemoryLevelRepository {
    levels: RwLock<HashMap<String, LevelState>>,
}

#[async_trait]
impl LevelRepositoryTrait for InMemoryLevelRepository {
    fn get_level(&self, user_id: &str) -> Result<Option<LevelState>> {
        Ok(self.levels.read().unwrap().get(user_id).cloned())
    }

    async fn save_level(&self, level: LevelState) -> Result<LevelState> {
        self.levels
            .write()
            .unwrap()
            .insert(level.user_id.clone(), level.clone());
        Ok(level)
    }
}

#[derive(Default)]
pub(crate) struct InMemoryAchievementRepository {
    achievements: RwLock<Vec<Achievement>>,
}

impl InMemoryAchievementRepository {
    pub(crate) fn with(achievements: Vec<Achievement>) -> Self {
        Self {
            achievements: RwLock::new(achievements),
        }
    }
}

#[async_trait]
impl AchievementRepositoryTrait for InMemoryAchievementRepository {
    fn get_achievement(&self, achievement_id: &str) -> Result<Option<Achievement>> {
        Ok(self
            .achievements
            .read()
            .unwrap()
            .iter()
            .find(|a| a.id == achievement_id)
            .cloned())
    }

    fn list_achievements(&self) -> Result<Vec<Achievement>> {
        let mut all = self.achievements.read().unwrap().clone();
        all.sort_by_key(|a| (a.category, a.tier));
        Ok(all)
    }

    fn list_by_category(&self, category: AchievementCategory) -> Result<Vec<Achievement>> {
        Ok(self
            .achievements
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.category == category)
            .cloned()
            .collect())
    }

    fn list_pending_by_category(&self, category: AchievementCategory) -> Result<Vec<Achievement>> {
        Ok(self
            .list_by_category(category)?
            .into_iter()
            .filter(|a| !a.is_unlocked)
            .collect())
    }

    fn count_achievements(&self) -> Result<i64> {
        Ok(self.achievements.read().unwrap().len() as i64)
    }

    fn count_unlocked(&self) -> Result<i64> {
        Ok(self
            .achievements
            .read()
            .unwrap()
            .iter()
            .filter(|a| a.is_unlocked)
            .count() as i64)
    }

    async fn insert_achievements(&self, achievements: Vec<Achievement>) -> Result<usize> {
        let count = achievements.len();
        self.achievements.write().unwrap().extend(achievements);
        Ok(count)
    }

    async fn update_achievement(&self, achievement: Achievement) -> Result<Achievement> {
        let mut all = self.achievements.write().unwrap();
        let slot = all
            .iter_mut()
            .find(|a| a.id == achievement.id)
            .ok_or_else(|| not_found("Achievement", &achievement.id))?;
        *slot = achievement.clone();
        Ok(achievement)
    }
}

#[derive(Default)]
pub(crate) struct InMemoryChallengeRepository {
    challenges: RwLock<Vec<Challenge>>,
}

impl InMemoryChallengeRepository {
    pub(crate) fn with(challenges: Vec<Challenge>) -> Self {
        Self {
            challenges: RwLock::new(challenges),
        }
    }
}

#[async_trait]
impl ChallengeRepositoryTrait for InMemoryChallengeRepository {
    fn get_challenge(&self, challenge_id: &str) -> Result<Option<Challenge>> {
        Ok(self
            .challenges
            .read()
            .unwrap()
            .iter()
            .find(|c| c.id == challenge_id)
            .cloned())
    }

    fn list_challenges(&self) -> Result<Vec<Challenge>> {
        Ok(self.challenges.read().unwrap().clone())
    }

    fn list_active(&self) -> Result<Vec<Challenge>> {
        let mut active: Vec<Challenge> = self
            .challenges
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.is_active)
            .cloned()
            .collect();
        active.sort_by_key(|c| c.end_date);
        Ok(active)
    }

    fn list_completed(&self) -> Result<Vec<Challenge>> {
        Ok(self
            .challenges
            .read()
            .unwrap()
            .iter()
            .filter(|c| c.is_completed)
            .cloned()
            .collect())
    }

    fn count_active(&self) -> Result<i64> {
        Ok(self.list_active()?.len() as i64)
    }

    fn count_completed(&self) -> Result<i64> {
        Ok(self.list_completed()?.len() as i64)
    }

    async fn insert_challenges(&self, challenges: Vec<Challenge>) -> Result<usize> {
        let count = challenges.len();
        self.challenges.write().unwrap().extend(challenges);
        Ok(count)
    }

    async fn update_challenge(&self, challenge: Challenge) -> Result<Challenge> {
        let mut all = self.challenges.write().unwrap();
        let slot = all
            .iter_mut()
            .find(|c| c.id == challenge.id)
            .ok_or_else(|| not_found("Challenge", &challenge.id))?;
        *slot = challenge.clone();
        Ok(challenge)
    }
}

#[derive(Default)]
pub(crate) struct InMemoryGoalRepository {
    goals: RwLock<Vec<SavingGoal>>,
}

#[async_trait]
impl GoalRepositoryTrait for InMemoryGoalRepository {
    fn load_goals(&self) -> Result<Vec<SavingGoal>> {
        Ok(self.goals.read().unwrap().clone())
    }

    fn get_goal(&self, goal_id: &str) -> Result<Option<SavingGoal>> {
        Ok(self
            .goals
            .read()
            .unwrap()
            .iter()
            .find(|g| g.id == goal_id)
            .cloned())
    }

    async fn insert_new_goal(&self, new_goal: NewSavingGoal) -> Result<SavingGoal> {
        let goal = SavingGoal {
            id: new_goal
                .id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            name: new_goal.name,
            target_amount: new_goal.target_amount,
            current_amount: Decimal::ZERO,
            deadline: new_goal.deadline,
            icon_name: new_goal.icon_name,
            color_code: new_goal.color_code,
            created_at: fixture_timestamp(),
        };
        self.goals.write().unwrap().push(goal.clone());
        Ok(goal)
    }

    async fn update_goal(&self, goal_update: SavingGoal) -> Result<SavingGoal> {
        let mut goals = self.goals.write().unwrap();
        let slot = goals
            .iter_mut()
            .find(|g| g.id == goal_update.id)
            .ok_or_else(|| not_found("Goal", &goal_update.id))?;
        *slot = goal_update.clone();
        Ok(goal_update)
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        let mut goals = self.goals.write().unwrap();
        let before = goals.len();
        goals.retain(|g| g.id != goal_id_to_delete);
        Ok(before - goals.len())
    }

    async fn add_to_current_amount(&self, goal_id: &str, amount: Decimal) -> Result<SavingGoal> {
        let mut goals = self.goals.write().unwrap();
        let goal = goals
            .iter_mut()
            .find(|g| g.id == goal_id)
            .ok_or_else(|| not_found("Goal", goal_id))?;
        goal.current_amount = goal.current_amount.checked_add(amount).ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Goal {} amount overflows",
                goal_id
            )))
        })?;
        Ok(goal.clone())
    }
}

#[derive(Default)]
pub(crate) struct InMemorySettingsRepository {
    settings: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl SettingsRepositoryTrait for InMemorySettingsRepository {
    fn get_setting(&self, setting_key: &str) -> Result<String> {
        self.settings
            .read()
            .unwrap()
            .get(setting_key)
            .cloned()
            .ok_or_else(|| not_found("Setting", setting_key))
    }

    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()> {
        self.settings
            .write()
            .unwrap()
            .insert(setting_key.to_string(), setting_value.to_string());
        Ok(())
    }
}
