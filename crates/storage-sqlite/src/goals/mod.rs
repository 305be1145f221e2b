//! SQLite storage implementation for saving goals.

mod model;
mod repository;

pub use model::{NewSavingGoalDB, SavingGoalDB};
pub use repository::GoalRepository;
