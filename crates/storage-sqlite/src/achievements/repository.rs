use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;
use std::sync::Arc;

use finanzhero_core::achievements::{Achievement, AchievementCategory, AchievementRepositoryTrait};
use finanzhero_core::Result;

use super::model::AchievementDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::achievements;

pub struct AchievementRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl AchievementRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        AchievementRepository { pool, writer }
    }

    fn load(
        &self,
        category: Option<AchievementCategory>,
        locked_only: bool,
    ) -> Result<Vec<Achievement>> {
        let mut conn = get_connection(&self.pool)?;
        let mut query = achievements::table
            .select(AchievementDB::as_select())
            .into_boxed();
        if let Some(category) = category {
            query = query.filter(achievements::category.eq(category.as_str()));
        }
        if locked_only {
            query = query.filter(achievements::is_unlocked.eq(false));
        }
        let rows = query
            .order(achievements::created_at.asc())
            .load::<AchievementDB>(&mut conn)
            .map_err(StorageError::from)?;

        // Codes are text in the table; order by the domain enums instead.
        let mut list: Vec<Achievement> = rows.into_iter().map(Achievement::from).collect();
        list.sort_by_key(|a| (a.category, a.tier));
        Ok(list)
    }
}

#[async_trait]
impl AchievementRepositoryTrait for AchievementRepository {
    fn get_achievement(&self, achievement_id: &str) -> Result<Option<Achievement>> {
        let mut conn = get_connection(&self.pool)?;
        let row = achievements::table
            .find(achievement_id)
            .select(AchievementDB::as_select())
            .first(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Achievement::from))
    }

    fn list_achievements(&self) -> Result<Vec<Achievement>> {
        self.load(None, false)
    }

    fn list_by_category(&self, category: AchievementCategory) -> Result<Vec<Achievement>> {
        self.load(Some(category), false)
    }

    fn list_pending_by_category(&self, category: AchievementCategory) -> Result<Vec<Achievement>> {
        self.load(Some(category), true)
    }

    fn count_achievements(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(achievements::table
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?)
    }

    fn count_unlocked(&self) -> Result<i64> {
        let mut conn = get_connection(&self.pool)?;
        Ok(achievements::table
            .filter(achievements::is_unlocked.eq(true))
            .count()
            .get_result::<i64>(&mut conn)
            .map_err(StorageError::from)?)
    }

    async fn insert_achievements(&self, new_achievements: Vec<Achievement>) -> Result<usize> {
        let rows: Vec<AchievementDB> = new_achievements
            .into_iter()
            .map(AchievementDB::from)
            .collect();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut inserted = 0;
                for row in &rows {
                    inserted += diesel::insert_or_ignore_into(achievements::table)
                        .values(row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                Ok(inserted)
            })
            .await
    }

    async fn update_achievement(&self, achievement: Achievement) -> Result<Achievement> {
        let row = AchievementDB::from(achievement);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Achievement> {
                let result_db = diesel::update(achievements::table.find(row.id.clone()))
                    .set(&row)
                    .returning(AchievementDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Achievement::from(result_db))
            })
            .await
    }
}
