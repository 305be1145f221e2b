use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::utils::parse_code;
use finanzhero_core::achievements::{Achievement, AchievementCategory, AchievementTier};

/// Database model for achievements
#[derive(Queryable, Identifiable, Insertable, AsChangeset, Selectable, Debug, Clone, PartialEq)]
#[diesel(table_name = crate::schema::achievements)]
#[diesel(treat_none_as_null = true)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AchievementDB {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tier: String,
    pub points_reward: i32,
    pub icon_name: String,
    pub conditions: String,
    pub target_progress: i32,
    pub progress: i32,
    pub is_unlocked: bool,
    pub unlocked_at: Option<NaiveDateTime>,
    pub created_at: NaiveDateTime,
}

impl From<AchievementDB> for Achievement {
    fn from(db: AchievementDB) -> Self {
        Self {
            category: parse_code(&db.category, "category", AchievementCategory::Special),
            tier: parse_code(&db.tier, "tier", AchievementTier::Bronze),
            id: db.id,
            title: db.title,
            description: db.description,
            points_reward: db.points_reward,
            icon_name: db.icon_name,
            conditions: db.conditions,
            target_progress: db.target_progress,
            progress: db.progress,
            is_unlocked: db.is_unlocked,
            unlocked_at: db.unlocked_at,
            created_at: db.created_at,
        }
    }
}

impl From<Achievement> for AchievementDB {
    fn from(domain: Achievement) -> Self {
        Self {
            id: domain.id,
            title: domain.title,
            description: domain.description,
            category: domain.category.as_str().to_string(),
            tier: domain.tier.as_str().to_string(),
            points_reward: domain.points_reward,
            icon_name: domain.icon_name,
            conditions: domain.conditions,
            target_progress: domain.target_progress,
            progress: domain.progress,
            is_unlocked: domain.is_unlocked,
            unlocked_at: domain.unlocked_at,
            created_at: domain.created_at,
        }
    }
}
