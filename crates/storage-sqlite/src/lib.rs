//! SQLite storage implementation for Finanz Hero.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository traits defined in `finanzhero-core` and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for goals, streaks, levels, achievements and challenges
//! - Database-specific model types (with Diesel derives)
//!
//! # Architecture
//!
//! This crate is the only place in the workspace where Diesel dependencies exist.
//! `finanzhero-core` is database-agnostic and works with traits.
//!
//! ```text
//!          core (domain)
//!                  │
//!                  ▼
//!          storage-sqlite (this crate)
//!                  │
//!                  ▼
//!              SQLite DB
//! ```
//!
//! All writes go through a single [`WriteHandle`] so SQLite sees one writer at a time.

pub mod db;
pub mod errors;
pub mod schema;
pub mod utils;

// Repository implementations
pub mod achievements;
pub mod challenges;
pub mod goals;
pub mod levels;
pub mod settings;
pub mod streaks;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, get_db_path, init, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from finanzhero-core for convenience
pub use finanzhero_core::errors::{DatabaseError, Error, Result};
