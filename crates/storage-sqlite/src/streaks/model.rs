use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::utils::parse_decimal;
use finanzhero_core::streaks::StreakState;

/// Database model for a profile's saving streak
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::saving_streaks)]
#[diesel(primary_key(user_id))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StreakDB {
    pub user_id: String,
    pub current_streak: i32,
    pub longest_streak: i32,
    pub total_saving_days: i32,
    pub last_saving_date: Option<NaiveDate>,
    pub streak_start_date: Option<NaiveDate>,
    pub daily_target: String,
    pub is_active_today: bool,
    pub last_updated: NaiveDateTime,
}

impl From<StreakDB> for StreakState {
    fn from(db: StreakDB) -> Self {
        Self {
            daily_target: parse_decimal(&db.daily_target, "daily_target"),
            user_id: db.user_id,
            current_streak: db.current_streak,
            longest_streak: db.longest_streak,
            total_saving_days: db.total_saving_days,
            last_saving_date: db.last_saving_date,
            streak_start_date: db.streak_start_date,
            is_active_today: db.is_active_today,
            last_updated: db.last_updated,
        }
    }
}

impl From<StreakState> for StreakDB {
    fn from(domain: StreakState) -> Self {
        Self {
            user_id: domain.user_id,
            current_streak: domain.current_streak,
            longest_streak: domain.longest_streak,
            total_saving_days: domain.total_saving_days,
            last_saving_date: domain.last_saving_date,
            streak_start_date: domain.streak_start_date,
            daily_target: domain.daily_target.to_string(),
            is_active_today: domain.is_active_today,
            last_updated: domain.last_updated,
        }
    }
}
