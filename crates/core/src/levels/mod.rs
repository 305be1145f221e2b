//! Levels module - experience, levels and saving ranks.

mod levels_model;
mod levels_service;
mod levels_traits;

pub use levels_model::{xp_for_level, xp_gap_for_level, LevelState, LevelUpOutcome, SavingRank};
pub use levels_service::LevelService;
pub use levels_traits::{LevelRepositoryTrait, LevelServiceTrait};
