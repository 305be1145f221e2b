use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use finanzhero_core::levels::{LevelRepositoryTrait, LevelState};
use finanzhero_core::Result;

use super::model::LevelDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::user_levels;

pub struct LevelRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl LevelRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        LevelRepository { pool, writer }
    }
}

#[async_trait]
impl LevelRepositoryTrait for LevelRepository {
    fn get_level(&self, user_id: &str) -> Result<Option<LevelState>> {
        let mut conn = get_connection(&self.pool)?;
        let level_db = user_levels::table
            .find(user_id)
            .select(LevelDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(level_db.map(LevelState::from))
    }

    async fn save_level(&self, level: LevelState) -> Result<LevelState> {
        let level_db = LevelDB::from(level);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<LevelState> {
                let result_db = diesel::insert_into(user_levels::table)
                    .values(&level_db)
                    .on_conflict(user_levels::user_id)
                    .do_update()
                    .set(&level_db)
                    .returning(LevelDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(LevelState::from(result_db))
            })
            .await
    }
}
