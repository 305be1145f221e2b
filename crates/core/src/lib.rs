//! Finanz Hero Core - gamification domain entities, services, and traits.
//!
//! This crate contains the streak, level, achievement and challenge logic
//! plus the orchestrator that ties them to saving contributions.
//! It is database-agnostic and defines traits that are implemented
//! by the `storage-sqlite` crate.

pub mod achievements;
pub mod challenges;
pub mod clock;
pub mod constants;
pub mod errors;
pub mod gamification;
pub mod goals;
pub mod levels;
pub mod settings;
pub mod streaks;

#[cfg(test)]
pub(crate) mod test_utils;

pub use gamification::{GamificationResult, GamificationService, GamificationServiceTrait};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
