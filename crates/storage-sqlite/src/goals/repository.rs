use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::SqliteConnection;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use finanzhero_core::errors::{DatabaseError, Error, ValidationError};
use finanzhero_core::goals::{GoalRepositoryTrait, NewSavingGoal, SavingGoal};
use finanzhero_core::Result;

use super::model::{NewSavingGoalDB, SavingGoalDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::saving_goals;
use crate::schema::saving_goals::dsl::*;
use crate::utils::parse_decimal;

pub struct GoalRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        GoalRepository { pool, writer }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn load_goals(&self) -> Result<Vec<SavingGoal>> {
        let mut conn = get_connection(&self.pool)?;
        let goals_db = saving_goals
            .order(created_at.asc())
            .load::<SavingGoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(goals_db.into_iter().map(SavingGoal::from).collect())
    }

    fn get_goal(&self, goal_id: &str) -> Result<Option<SavingGoal>> {
        let mut conn = get_connection(&self.pool)?;
        let goal_db = saving_goals
            .find(goal_id)
            .first::<SavingGoalDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(goal_db.map(SavingGoal::from))
    }

    async fn insert_new_goal(&self, new_goal: NewSavingGoal) -> Result<SavingGoal> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SavingGoal> {
                let goal_id = new_goal
                    .id
                    .clone()
                    .unwrap_or_else(|| Uuid::new_v4().to_string());
                let new_goal_db =
                    NewSavingGoalDB::from_domain(new_goal, goal_id, Utc::now().naive_utc());

                let result_db = diesel::insert_into(saving_goals::table)
                    .values(&new_goal_db)
                    .returning(SavingGoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(SavingGoal::from(result_db))
            })
            .await
    }

    async fn update_goal(&self, goal_update: SavingGoal) -> Result<SavingGoal> {
        let goal_db = SavingGoalDB::from(goal_update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SavingGoal> {
                let result_db = diesel::update(saving_goals.find(goal_db.id.clone()))
                    .set((
                        name.eq(&goal_db.name),
                        target_amount.eq(&goal_db.target_amount),
                        current_amount.eq(&goal_db.current_amount),
                        deadline.eq(goal_db.deadline),
                        icon_name.eq(&goal_db.icon_name),
                        color_code.eq(&goal_db.color_code),
                    ))
                    .returning(SavingGoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(SavingGoal::from(result_db))
            })
            .await
    }

    async fn delete_goal(&self, goal_id_to_delete: String) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(saving_goals.find(goal_id_to_delete))
                    .execute(conn)
                    .map_err(StorageError::from)?)
            })
            .await
    }

    async fn add_to_current_amount(&self, goal_id: &str, amount: Decimal) -> Result<SavingGoal> {
        let goal_id = goal_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<SavingGoal> {
                let stored = saving_goals
                    .find(&goal_id)
                    .select(current_amount)
                    .first::<String>(conn)
                    .optional()
                    .map_err(StorageError::from)?
                    .ok_or_else(|| {
                        Error::Database(DatabaseError::NotFound(format!("Goal {}", goal_id)))
                    })?;

                let next = parse_decimal(&stored, "current_amount")
                    .checked_add(amount)
                    .ok_or_else(|| {
                        Error::Validation(ValidationError::InvalidInput(format!(
                            "Goal {} amount overflows when adding {}",
                            goal_id, amount
                        )))
                    })?;
                let result_db = diesel::update(saving_goals.find(&goal_id))
                    .set(current_amount.eq(next.to_string()))
                    .returning(SavingGoalDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(SavingGoal::from(result_db))
            })
            .await
    }
}
