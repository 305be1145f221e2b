use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use finanzhero_core::challenges::{Challenge, ChallengeRepositoryTrait};
use finanzhero_core::Result;

use super::model::ChallengeDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::saving_challenges;

pub struct ChallengeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ChallengeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ChallengeRepository { pool, writer }
    }
}

#[async_trait]
impl ChallengeRepositoryTrait for ChallengeRepository {
    fn get_challenge(&self, challenge_id: &str) -> Result<Option<Challenge>> {
        let mut conn = get_connection(&self.pool)?;
        let row = saving_challenges::table
            .find(challenge_id)
            .select(ChallengeDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Challenge::from))
    }

    fn list_challenges(&self) -> Result<Vec<Challenge>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = saving_challenges::table
            .select(ChallengeDB::as_select())
            .order(saving_challenges::created_at.desc())
            .load::<ChallengeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Challenge::from).collect())
    }

    fn list_active(&self) -> Result<Vec<Challenge>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = saving_challenges::table
            .filter(saving_challenges::is_active.eq(true))
            .select(ChallengeDB::as_select())
            .order(saving_challenges::end_date.asc())
            .load::<ChallengeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Challenge::from).collect())
    }

    fn list_completed(&self) -> Result<Vec<Challenge>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = saving_challenges::table
            .filter(saving_challenges::is_completed.eq(true))
            .select(ChallengeDB::as_select())
            .order(saving_challenges::end_date.desc())
            .load::<ChallengeDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Challenge::from).collect())
    }

    fn count_active(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(saving_challenges::table
            .filter(saving_challenges::is_active.eq(true))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?)
    }

    fn count_completed(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(saving_challenges::table
            .filter(saving_challenges::is_completed.eq(true))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?)
    }

    async fn insert_challenges(&self, challenges: Vec<Challenge>) -> Result<usize> {
        let rows: Vec<ChallengeDB> = challenges.into_iter().map(ChallengeDB::from).collect();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut inserted = 0;
                for row in &rows {
                    inserted += diesel::insert_or_ignore_into(saving_challenges::table)
                        .values(row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(inserted)
            })
            .await
    }

    async fn update_challenge(&self, challenge: Challenge) -> Result<Challenge> {
        let row = ChallengeDB::from(challenge);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Challenge> {
                let result_db = diesel::update(saving_challenges::table.find(row.id.clone()))
                    .set(&row)
                    .returning(ChallengeDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Challenge::from(result_db))
            })
            .await
    }
}
