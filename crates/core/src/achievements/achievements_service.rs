use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};

use super::achievements_model::{Achievement, AchievementCategory, ProgressRule};
use super::achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
use crate::clock::Clock;
use crate::errors::{DatabaseError, Error, Result};

pub struct AchievementService {
    repository: Arc<dyn AchievementRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl AchievementService {
    pub fn new(repository: Arc<dyn AchievementRepositoryTrait>, clock: Arc<dyn Clock>) -> Self {
        AchievementService { repository, clock }
    }

    fn require(&self, achievement_id: &str) -> Result<Achievement> {
        self.repository
            .get_achievement(achievement_id)?
            .ok_or_else(|| {
                Error::Database(DatabaseError::NotFound(format!(
                    "Achievement {}",
                    achievement_id
                )))
            })
    }

    /// Persists `updated` and returns it when the update flipped it to unlocked.
    async fn store(&self, updated: Achievement) -> Result<Option<Achievement>> {
        let stored = self.repository.update_achievement(updated).await?;
        if stored.is_unlocked {
            info!(
                "Achievement '{}' unlocked ({} {}, {} points)",
                stored.title, stored.category, stored.tier, stored.points_reward
            );
            Ok(Some(stored))
        } else {
            Ok(None)
        }
    }
}

#[async_trait]
impl AchievementServiceTrait for AchievementService {
    fn get_achievements(&self) -> Result<Vec<Achievement>> {
        self.repository.list_achievements()
    }

    fn get_achievement(&self, achievement_id: &str) -> Result<Option<Achievement>> {
        self.repository.get_achievement(achievement_id)
    }

    fn get_unlocked_achievements(&self) -> Result<Vec<Achievement>> {
        let mut unlocked: Vec<Achievement> = self
            .repository
            .list_achievements()?
            .into_iter()
            .filter(|a| a.is_unlocked)
            .collect();
        unlocked.sort_by(|a, b| b.unlocked_at.cmp(&a.unlocked_at));
        Ok(unlocked)
    }

    fn get_locked_achievements(&self) -> Result<Vec<Achievement>> {
        Ok(self
            .repository
            .list_achievements()?
            .into_iter()
            .filter(|a| !a.is_unlocked)
            .collect())
    }

    fn get_achievements_by_category(
        &self,
        category: AchievementCategory,
    ) -> Result<Vec<Achievement>> {
        self.repository.list_by_category(category)
    }

    fn count_unlocked(&self) -> Result<i64> {
        self.repository.count_unlocked()
    }

    fn count_total(&self) -> Result<i64> {
        self.repository.count_achievements()
    }

    async fn seed_catalog(&self, catalog: Vec<Achievement>) -> Result<usize> {
        if self.repository.count_achievements()? > 0 {
            return Ok(0);
        }
        let inserted = self.repository.insert_achievements(catalog).await?;
        info!("Seeded {} achievements", inserted);
        Ok(inserted)
    }

    async fn update_achievement_progress(
        &self,
        achievement_id: &str,
        delta: i32,
    ) -> Result<Option<Achievement>> {
        let achievement = self.require(achievement_id)?;
        match achievement.apply_progress(delta, ProgressRule::Accumulate, self.clock.timestamp()) {
            Some(updated) => self.store(updated).await,
            None => Ok(None),
        }
    }

    async fn unlock_achievement(&self, achievement_id: &str) -> Result<Option<Achievement>> {
        let achievement = self.require(achievement_id)?;
        match achievement.unlocked(self.clock.timestamp()) {
            Some(updated) => self.store(updated).await,
            None => Ok(None),
        }
    }

    async fn check_category(
        &self,
        category: AchievementCategory,
        value: i32,
    ) -> Result<Vec<Achievement>> {
        let pending = self.repository.list_pending_by_category(category)?;
        debug!(
            "Checking {} pending {} achievement(s) with value {}",
            pending.len(),
            category,
            value
        );

        let rule = category.progress_rule();
        let now = self.clock.timestamp();
        let mut unlocked = Vec::new();
        for achievement in pending {
            if let Some(updated) = achievement.apply_progress(value, rule, now) {
                if let Some(newly_unlocked) = self.store(updated).await? {
                    unlocked.push(newly_unlocked);
                }
            }
        }
        Ok(unlocked)
    }

    async fn check_all(
        &self,
        savings_amount: i32,
        streak_days: i32,
        budget_compliance: i32,
    ) -> Result<Vec<Achievement>> {
        let mut unlocked = self
            .check_category(AchievementCategory::Savings, savings_amount)
            .await?;
        unlocked.extend(
            self.check_category(AchievementCategory::Streaks, streak_days)
                .await?,
        );
        unlocked.extend(
            self.check_category(AchievementCategory::Budget, budget_compliance)
                .await?,
        );
        Ok(unlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementTier;
    use crate::clock::FixedClock;
    use crate::test_utils::{achievement_fixture, InMemoryAchievementRepository};
    use chrono::NaiveDate;

    fn setup(seed: Vec<Achievement>) -> (AchievementService, Arc<InMemoryAchievementRepository>) {
        let repository = Arc::new(InMemoryAchievementRepository::with(seed));
        let clock = Arc::new(FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        (AchievementService::new(repository.clone(), clock), repository)
    }

    #[tokio::test]
    async fn savings_progress_accumulates_until_unlock() {
        let (service, _) = setup(vec![achievement_fixture(
            "save-100",
            AchievementCategory::Savings,
            AchievementTier::Silver,
            100,
        )]);

        assert!(service
            .check_category(AchievementCategory::Savings, 60)
            .await
            .unwrap()
            .is_empty());
        let unlocked = service
            .check_category(AchievementCategory::Savings, 60)
            .await
            .unwrap();

        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked[0].progress, 120);
        assert!(unlocked[0].unlocked_at.is_some());
        assert_eq!(service.count_unlocked().unwrap(), 1);
    }

    #[tokio::test]
    async fn streak_progress_is_a_high_water_mark() {
        let (service, repository) = setup(vec![achievement_fixture(
            "streak-7",
            AchievementCategory::Streaks,
            AchievementTier::Silver,
            7,
        )]);

        service
            .check_category(AchievementCategory::Streaks, 3)
            .await
            .unwrap();
        service
            .check_category(AchievementCategory::Streaks, 3)
            .await
            .unwrap();
        service
            .check_category(AchievementCategory::Streaks, 1)
            .await
            .unwrap();

        let stored = repository.get_achievement("streak-7").unwrap().unwrap();
        assert_eq!(stored.progress, 3);
        assert!(!stored.is_unlocked);
    }

    #[tokio::test]
    async fn unlocked_achievement_is_not_reported_twice() {
        let (service, _) = setup(vec![achievement_fixture(
            "first",
            AchievementCategory::Savings,
            AchievementTier::Bronze,
            1,
        )]);

        let first = service
            .check_category(AchievementCategory::Savings, 5)
            .await
            .unwrap();
        let second = service
            .check_category(AchievementCategory::Savings, 5)
            .await
            .unwrap();

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[tokio::test]
    async fn check_all_covers_three_categories() {
        let (service, _) = setup(vec![
            achievement_fixture("s", AchievementCategory::Savings, AchievementTier::Bronze, 1),
            achievement_fixture("k", AchievementCategory::Streaks, AchievementTier::Bronze, 3),
            achievement_fixture("b", AchievementCategory::Budget, AchievementTier::Gold, 30),
            achievement_fixture("i", AchievementCategory::Income, AchievementTier::Bronze, 1),
        ]);

        let unlocked = service.check_all(10, 3, 30).await.unwrap();

        let ids: Vec<&str> = unlocked.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["s", "k", "b"]);
        assert_eq!(service.get_locked_achievements().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn manual_progress_and_unlock() {
        let (service, _) = setup(vec![
            achievement_fixture("p", AchievementCategory::Special, AchievementTier::Gold, 10),
            achievement_fixture("u", AchievementCategory::Special, AchievementTier::Gold, 10),
        ]);

        assert!(service
            .update_achievement_progress("p", 4)
            .await
            .unwrap()
            .is_none());
        assert!(service
            .update_achievement_progress("p", 6)
            .await
            .unwrap()
            .is_some());
        assert!(service.unlock_achievement("u").await.unwrap().is_some());
        assert!(service.unlock_achievement("u").await.unwrap().is_none());
        assert!(service.unlock_achievement("missing").await.is_err());
    }

    #[tokio::test]
    async fn seed_catalog_only_once() {
        let (service, _) = setup(Vec::new());
        let catalog = vec![achievement_fixture(
            "s",
            AchievementCategory::Savings,
            AchievementTier::Bronze,
            1,
        )];
        assert_eq!(service.seed_catalog(catalog.clone()).await.unwrap(), 1);
        assert_eq!(service.seed_catalog(catalog).await.unwrap(), 0);
        assert_eq!(service.count_total().unwrap(), 1);
    }
}
