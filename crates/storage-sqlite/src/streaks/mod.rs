//! SQLite storage implementation for saving streaks.

mod model;
mod repository;

pub use model::StreakDB;
pub use repository::StreakRepository;
