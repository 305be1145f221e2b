use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info, warn};
use rust_decimal::Decimal;

use super::challenges_model::{Challenge, ChallengeProgress, ChallengeType};
use super::challenges_traits::{ChallengeRepositoryTrait, ChallengeServiceTrait};
use crate::clock::Clock;
use crate::errors::{ChallengeError, Result};

pub struct ChallengeService {
    repository: Arc<dyn ChallengeRepositoryTrait>,
    clock: Arc<dyn Clock>,
}

impl ChallengeService {
    pub fn new(repository: Arc<dyn ChallengeRepositoryTrait>, clock: Arc<dyn Clock>) -> Self {
        ChallengeService { repository, clock }
    }

    fn require(&self, challenge_id: &str) -> Result<Challenge> {
        self.repository
            .get_challenge(challenge_id)?
            .ok_or_else(|| ChallengeError::NotFound(challenge_id.to_string()).into())
    }
}

#[async_trait]
impl ChallengeServiceTrait for ChallengeService {
    fn get_challenges(&self) -> Result<Vec<Challenge>> {
        self.repository.list_challenges()
    }

    fn get_challenge(&self, challenge_id: &str) -> Result<Option<Challenge>> {
        self.repository.get_challenge(challenge_id)
    }

    fn get_active_challenges(&self) -> Result<Vec<Challenge>> {
        self.repository.list_active()
    }

    fn get_completed_challenges(&self) -> Result<Vec<Challenge>> {
        self.repository.list_completed()
    }

    fn get_challenges_by_type(&self, challenge_type: ChallengeType) -> Result<Vec<Challenge>> {
        Ok(self
            .repository
            .list_active()?
            .into_iter()
            .filter(|c| c.challenge_type == challenge_type)
            .collect())
    }

    fn get_available_challenges(&self, limit: usize) -> Result<Vec<Challenge>> {
        let mut available: Vec<Challenge> = self
            .repository
            .list_challenges()?
            .into_iter()
            .filter(|c| !c.is_active && !c.is_completed)
            .collect();
        available.sort_by_key(|c| c.difficulty);
        available.truncate(limit);
        Ok(available)
    }

    fn count_active(&self) -> Result<usize> {
        Ok(self.repository.count_active()?.max(0) as usize)
    }

    fn count_completed(&self) -> Result<i64> {
        self.repository.count_completed()
    }

    async fn seed_catalog(&self, catalog: Vec<Challenge>) -> Result<usize> {
        if !self.repository.list_challenges()?.is_empty() {
            return Ok(0);
        }
        let inserted = self.repository.insert_challenges(catalog).await?;
        info!("Seeded {} challenges", inserted);
        Ok(inserted)
    }

    async fn update_progress(
        &self,
        challenge_id: &str,
        amount: Decimal,
    ) -> Result<ChallengeProgress> {
        let challenge = self.require(challenge_id)?;
        let ChallengeProgress {
            challenge: updated,
            newly_completed,
        } = challenge.with_progress(amount)?;

        debug!(
            "Challenge '{}' progress {} -> {} of {}",
            updated.title, challenge.progress, updated.progress, updated.target_amount
        );
        if newly_completed {
            info!("Challenge '{}' completed", updated.title);
        }

        let stored = self.repository.update_challenge(updated).await?;
        Ok(ChallengeProgress {
            challenge: stored,
            newly_completed,
        })
    }

    async fn activate(&self, challenge_id: &str, duration_days: i32) -> Result<Challenge> {
        let challenge = self.require(challenge_id)?;
        if challenge.is_completed {
            return Err(ChallengeError::AlreadyCompleted(challenge_id.to_string()).into());
        }
        if challenge.is_active {
            debug!("Challenge '{}' is already active", challenge.title);
            return Ok(challenge);
        }

        let activated = challenge.activated(self.clock.today(), duration_days);
        info!(
            "Activating challenge '{}' until {:?}",
            activated.title, activated.end_date
        );
        self.repository.update_challenge(activated).await
    }

    async fn abandon(&self, challenge_id: &str) -> Result<Challenge> {
        let challenge = self.require(challenge_id)?;
        if challenge.is_completed {
            warn!("Refusing to abandon completed challenge '{}'", challenge.title);
            return Err(ChallengeError::AlreadyCompleted(challenge_id.to_string()).into());
        }
        info!("Abandoning challenge '{}'", challenge.title);
        self.repository.update_challenge(challenge.abandoned()).await
    }

    async fn check_completed_challenges(&self) -> Result<Vec<Challenge>> {
        let mut completed = Vec::new();
        for challenge in self.repository.list_active()? {
            let result = challenge.with_progress(Decimal::ZERO)?;
            if result.newly_completed {
                completed.push(self.repository.update_challenge(result.challenge).await?);
            }
        }
        Ok(completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenges::ChallengeDifficulty;
    use crate::clock::FixedClock;
    use crate::errors::Error;
    use crate::test_utils::{challenge_fixture, InMemoryChallengeRepository};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn setup(seed: Vec<Challenge>) -> (ChallengeService, Arc<InMemoryChallengeRepository>) {
        let repository = Arc::new(InMemoryChallengeRepository::with(seed));
        let clock = Arc::new(FixedClock::at_date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
        (ChallengeService::new(repository.clone(), clock), repository)
    }

    #[tokio::test]
    async fn two_contributions_complete_challenge() {
        let (service, _) = setup(vec![challenge_fixture(
            "daily",
            dec!(50),
            ChallengeDifficulty::Beginner,
        )]);
        service.activate("daily", 7).await.unwrap();

        let first = service.update_progress("daily", dec!(30)).await.unwrap();
        assert!(!first.newly_completed);
        let second = service.update_progress("daily", dec!(30)).await.unwrap();

        assert!(second.newly_completed);
        assert!(second.challenge.is_completed);
        assert_eq!(second.challenge.progress, dec!(60));
        assert_eq!(service.count_completed().unwrap(), 1);
        assert_eq!(service.count_active().unwrap(), 0);
    }

    #[tokio::test]
    async fn activate_sets_dates_from_clock() {
        let (service, _) = setup(vec![challenge_fixture(
            "weekly",
            dec!(100),
            ChallengeDifficulty::Easy,
        )]);

        let active = service.activate("weekly", 7).await.unwrap();

        assert!(active.is_active);
        assert_eq!(active.start_date, NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(active.end_date, NaiveDate::from_ymd_opt(2024, 3, 8));
        assert_eq!(service.get_active_challenges().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn abandon_resets_and_frees_slot() {
        let (service, _) = setup(vec![challenge_fixture(
            "c",
            dec!(100),
            ChallengeDifficulty::Easy,
        )]);
        service.activate("c", 3).await.unwrap();
        service.update_progress("c", dec!(40)).await.unwrap();

        let abandoned = service.abandon("c").await.unwrap();

        assert!(!abandoned.is_active);
        assert_eq!(abandoned.progress, Decimal::ZERO);
        assert_eq!(service.count_active().unwrap(), 0);
        assert_eq!(service.get_available_challenges(5).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn completed_challenges_cannot_be_reactivated_or_abandoned() {
        let (service, _) = setup(vec![challenge_fixture(
            "c",
            dec!(10),
            ChallengeDifficulty::Easy,
        )]);
        service.activate("c", 3).await.unwrap();
        service.update_progress("c", dec!(10)).await.unwrap();

        assert!(matches!(
            service.activate("c", 3).await,
            Err(Error::Challenge(ChallengeError::AlreadyCompleted(_)))
        ));
        assert!(service.abandon("c").await.is_err());
    }

    #[tokio::test]
    async fn overflowing_progress_leaves_challenge_untouched() {
        let (service, repository) = setup(vec![challenge_fixture(
            "c",
            Decimal::MAX,
            ChallengeDifficulty::Easy,
        )]);
        service.activate("c", 7).await.unwrap();
        service.update_progress("c", Decimal::MAX).await.unwrap();

        assert!(matches!(
            service.update_progress("c", dec!(1)).await,
            Err(Error::Validation(_))
        ));
        let stored = repository.get_challenge("c").unwrap().unwrap();
        assert_eq!(stored.progress, Decimal::MAX);
        assert!(service.check_completed_challenges().await.is_ok());
    }

    #[tokio::test]
    async fn unknown_challenge_is_not_found() {
        let (service, _) = setup(Vec::new());
        assert!(matches!(
            service.update_progress("nope", dec!(1)).await,
            Err(Error::Challenge(ChallengeError::NotFound(_)))
        ));
    }

    #[tokio::test]
    async fn available_sorted_by_difficulty_and_limited() {
        let (service, _) = setup(vec![
            challenge_fixture("hard", dec!(500), ChallengeDifficulty::Hard),
            challenge_fixture("beginner", dec!(10), ChallengeDifficulty::Beginner),
            challenge_fixture("medium", dec!(100), ChallengeDifficulty::Medium),
        ]);
        service.activate("medium", 7).await.unwrap();

        let available = service.get_available_challenges(5).unwrap();
        let ids: Vec<&str> = available.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["beginner", "hard"]);
        assert_eq!(service.get_available_challenges(1).unwrap().len(), 1);
    }

    #[tokio::test]
    async fn check_completed_picks_up_already_reached_targets() {
        let mut reached = challenge_fixture("r", dec!(20), ChallengeDifficulty::Easy);
        reached.is_active = true;
        reached.progress = dec!(25);
        let (service, _) = setup(vec![reached]);

        let completed = service.check_completed_challenges().await.unwrap();

        assert_eq!(completed.len(), 1);
        assert!(completed[0].is_completed);
        assert!(service.check_completed_challenges().await.unwrap().is_empty());
    }
}
