//! Construction project models.

use chrono::NaiveDate;
use ledger_core::money::serialize_fixed;
use ledger_core::risk::ProjectSnapshot;
use ledger_core::types::{DbId, Money, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub location: Option<String>,
    #[serde(serialize_with = "serialize_fixed")]
    pub budget: Money,
    #[serde(serialize_with = "serialize_fixed")]
    pub actual_spend: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub completion_percentage: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// The budget and schedule fields consumed by the risk engine.
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            budget: self.budget,
            actual_spend: self.actual_spend,
            start_date: self.start_date,
            end_date: self.end_date,
            completion_percentage: self.completion_percentage,
        }
    }
}

/// DTO for creating a project. Spend and completion default to zero.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub location: Option<String>,
    pub budget: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub actual_spend: Option<Money>,
    pub completion_percentage: Option<i32>,
}

impl CreateProject {
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            budget: self.budget,
            actual_spend: self.actual_spend.unwrap_or(Money::ZERO),
            start_date: self.start_date,
            end_date: self.end_date,
            completion_percentage: self.completion_percentage.unwrap_or(0),
        }
    }
}
