//! Gamification module - the orchestrator that turns a saving contribution
//! into streak, level, challenge and achievement updates.

mod catalog;
mod gamification_model;
mod gamification_service;


pub use catalog::{default_achievements, default_challenges};
pub use gamification_model::{GamificationResult, UserStats};
pub use gamification_service::{GamificationService, GamificationServiceTrait};
