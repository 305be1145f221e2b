//! SQLite storage implementation for levels and ranks.

mod model;
mod repository;

pub use model::LevelDB;
pub use repository::LevelRepository;
