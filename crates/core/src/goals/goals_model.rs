//! Saving goals domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a saving goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavingGoal {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: Option<NaiveDate>,
    pub icon_name: Option<String>,
    pub color_code: Option<String>,
    pub created_at: NaiveDateTime,
}

impl SavingGoal {
    pub fn is_achieved(&self) -> bool {
        self.current_amount >= self.target_amount
    }
}

/// Input model for creating a new saving goal
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewSavingGoal {
    pub id: Option<String>,
    pub name: String,
    pub target_amount: Decimal,
    pub deadline: Option<NaiveDate>,
    pub icon_name: Option<String>,
    pub color_code: Option<String>,
}
