//! Database models for saving goals.

use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::parse_decimal;
use finanzhero_core::goals::{NewSavingGoal, SavingGoal};

/// Database model for saving goals
#[derive(
    Queryable,
    Identifiable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::saving_goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[serde(rename_all = "camelCase")]
pub struct SavingGoalDB {
    pub id: String,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub deadline: Option<NaiveDate>,
    pub icon_name: Option<String>,
    pub color_code: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for creating a new saving goal
#[derive(Insertable, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::saving_goals)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingGoalDB {
    pub id: String,
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub deadline: Option<NaiveDate>,
    pub icon_name: Option<String>,
    pub color_code: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<SavingGoalDB> for SavingGoal {
    fn from(db: SavingGoalDB) -> Self {
        Self {
            target_amount: parse_decimal(&db.target_amount, "target_amount"),
            current_amount: parse_decimal(&db.current_amount, "current_amount"),
            id: db.id,
            name: db.name,
            deadline: db.deadline,
            icon_name: db.icon_name,
            color_code: db.color_code,
            created_at: db.created_at,
        }
    }
}

impl From<SavingGoal> for SavingGoalDB {
    fn from(domain: SavingGoal) -> Self {
        Self {
            id: domain.id,
            name: domain.name,
            target_amount: domain.target_amount.to_string(),
            current_amount: domain.current_amount.to_string(),
            deadline: domain.deadline,
            icon_name: domain.icon_name,
            color_code: domain.color_code,
            created_at: domain.created_at,
        }
    }
}

impl NewSavingGoalDB {
    pub fn from_domain(domain: NewSavingGoal, id: String, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            name: domain.name,
            target_amount: domain.target_amount.to_string(),
            current_amount: Decimal::ZERO.to_string(),
            deadline: domain.deadline,
            icon_name: domain.icon_name,
            color_code: domain.color_code,
            created_at,
        }
    }
}
