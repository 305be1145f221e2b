use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use finanzhero_core::streaks::{StreakRepositoryTrait, StreakState};
use finanzhero_core::Result;

use super::model::StreakDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::saving_streaks;

pub struct StreakRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl StreakRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        StreakRepository { pool, writer }
    }
}

#[async_trait]
impl StreakRepositoryTrait for StreakRepository {
    fn get_streak(&self, user_id: &str) -> Result<Option<StreakState>> {
        let mut conn = get_connection(&self.pool)?;
        let streak_db = saving_streaks::table
            .find(user_id)
            .select(StreakDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(streak_db.map(StreakState::from))
    }

    async fn save_streak(&self, streak: StreakState) -> Result<StreakState> {
        let streak_db = StreakDB::from(streak);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<StreakState> {
                let result_db = diesel::insert_into(saving_streaks::table)
                    .values(&streak_db)
                    .on_conflict(saving_streaks::user_id)
                    .do_update()
                    .set(&streak_db)
                    .returning(StreakDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(StreakState::from(result_db))
            })
            .await
    }
}
