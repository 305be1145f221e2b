use chrono::NaiveDateTime;
use diesel::prelude::*;

use finanzhero_core::levels::{LevelState, SavingRank};

/// Database model for a profile's level and rank
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::user_levels)]
#[diesel(primary_key(user_id))]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LevelDB {
    pub user_id: String,
    pub level: i32,
    pub current_xp: i64,
    pub xp_to_next_level: i64,
    pub total_xp_earned: i64,
    pub rank: String,
    pub rank_points: i64,
    pub last_level_up_at: Option<NaiveDateTime>,
    pub streak_bonus: f64,
    pub last_updated: NaiveDateTime,
}

impl From<LevelDB> for LevelState {
    fn from(db: LevelDB) -> Self {
        // The stored code is informational; points decide the rank.
        Self {
            rank: SavingRank::from_points(db.rank_points),
            user_id: db.user_id,
            level: db.level,
            current_xp: db.current_xp,
            xp_to_next_level: db.xp_to_next_level,
            total_xp_earned: db.total_xp_earned,
            rank_points: db.rank_points,
            last_level_up_at: db.last_level_up_at,
            streak_bonus: db.streak_bonus,
            last_updated: db.last_updated,
        }
    }
}

impl From<LevelState> for LevelDB {
    fn from(domain: LevelState) -> Self {
        Self {
            user_id: domain.user_id,
            level: domain.level,
            current_xp: domain.current_xp,
            xp_to_next_level: domain.xp_to_next_level,
            total_xp_earned: domain.total_xp_earned,
            rank: domain.rank.as_str().to_string(),
            rank_points: domain.rank_points,
            last_level_up_at: domain.last_level_up_at,
            streak_bonus: domain.streak_bonus,
            last_updated: domain.last_updated,
        }
    }
}
