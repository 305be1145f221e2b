use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::utils::{parse_code, parse_decimal};
use finanzhero_core::challenges::{Challenge, ChallengeDifficulty, ChallengeType};

/// Database model for saving challenges
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::saving_challenges)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ChallengeDB {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_amount: String,
    pub reward_points: i32,
    pub difficulty: String,
    pub challenge_type: String,
    pub duration_days: i32,
    pub icon_name: Option<String>,
    pub color_code: Option<String>,
    pub is_active: bool,
    pub is_completed: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub progress: String,
    pub created_at: NaiveDateTime,
}

impl From<ChallengeDB> for Challenge {
    fn from(db: ChallengeDB) -> Self {
        Self {
            target_amount: parse_decimal(&db.target_amount, "target_amount"),
            progress: parse_decimal(&db.progress, "progress"),
            difficulty: parse_code(&db.difficulty, "difficulty", ChallengeDifficulty::Beginner),
            challenge_type: parse_code(&db.challenge_type, "challenge_type", ChallengeType::OneTime),
            id: db.id,
            title: db.title,
            description: db.description,
            reward_points: db.reward_points,
            duration_days: db.duration_days,
            icon_name: db.icon_name,
            color_code: db.color_code,
            is_active: db.is_active,
            is_completed: db.is_completed,
            start_date: db.start_date,
            end_date: db.end_date,
            created_at: db.created_at,
        }
    }
}

impl From<Challenge> for ChallengeDB {
    fn from(domain: Challenge) -> Self {
        Self {
            id: domain.id,
            title: domain.title,
            description: domain.description,
            target_amount: domain.target_amount.to_string(),
            reward_points: domain.reward_points,
            difficulty: domain.difficulty.as_str().to_string(),
            challenge_type: domain.challenge_type.as_str().to_string(),
            duration_days: domain.duration_days,
            icon_name: domain.icon_name,
            color_code: domain.color_code,
            is_active: domain.is_active,
            is_completed: domain.is_completed,
            start_date: domain.start_date,
            end_date: domain.end_date,
            progress: domain.progress.to_string(),
            created_at: domain.created_at,
        }
    }
}
