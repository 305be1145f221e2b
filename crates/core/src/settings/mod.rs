//! Settings module - persisted tuning of the gamification rules.

mod settings_model;
mod settings_service;
mod settings_traits;

pub use settings_model::{GamificationSettings, GamificationSettingsUpdate};
pub use settings_service::SettingsService;
pub use settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
