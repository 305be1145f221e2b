//! SQLite storage implementation for saving challenges.

mod model;
mod repository;

pub use model::ChallengeDB;
pub use repository::ChallengeRepository;
