//! Challenges module - time-boxed saving goals with progress tracking.

mod challenges_model;
mod challenges_service;
mod challenges_traits;

pub use challenges_model::{Challenge, ChallengeDifficulty, ChallengeProgress, ChallengeType};
pub use challenges_service::ChallengeService;
pub use challenges_traits::{ChallengeRepositoryTrait, ChallengeServiceTrait};
