//! Saving streaks module - domain models, services, and traits.

mod streaks_model;
mod streaks_service;
mod streaks_traits;

pub use streaks_model::{streak_bonus_for, StreakState, StreakTransition};
pub use streaks_service::StreakService;
pub use streaks_traits::{StreakRepositoryTrait, StreakServiceTrait};
