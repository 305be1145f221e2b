//! Achievements module - catalog entries, progress rules and the evaluator.

mod achievements_model;
mod achievements_service;
mod achievements_traits;

pub use achievements_model::{Achievement, AchievementCategory, AchievementTier, ProgressRule};
pub use achievements_service::AchievementService;
pub use achievements_traits::{AchievementRepositoryTrait, AchievementServiceTrait};
