//! Project risk scoring.
//!
//! A deterministic classifier over a single project's budget and schedule.
//! Signals are additive and the total is capped at [`MAX_RISK_SCORE`]. The
//! caller supplies `now` so identical inputs always produce identical output.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

use crate::error::CoreError;
use crate::money::{validate_amount, AMOUNT_PRECISION};
use crate::types::{Money, Timestamp};

// ---------------------------------------------------------------------------
// Scoring constants
// ---------------------------------------------------------------------------

pub const MAX_RISK_SCORE: u32 = 100;

/// Budget usage percentage above which the budget is exceeded.
pub const BUDGET_EXCEEDED_PCT: u32 = 100;
/// Budget usage percentage above which spend is high.
pub const HIGH_SPEND_PCT: u32 = 80;
/// Completion below which high spend counts as low progress.
pub const LOW_PROGRESS_PCT: i32 = 50;
/// Points by which expected progress may lead actual progress before lag is flagged.
pub const SCHEDULE_LAG_PCT: f64 = 20.0;

pub const BUDGET_EXCEEDED_POINTS: u32 = 50;
pub const HIGH_SPEND_POINTS: u32 = 30;
pub const OVERDUE_POINTS: u32 = 50;
pub const SCHEDULE_LAG_POINTS: u32 = 20;

pub const CRITICAL_THRESHOLD: u32 = 75;
pub const HIGH_THRESHOLD: u32 = 40;
pub const MEDIUM_THRESHOLD: u32 = 20;

/// Factor labels reported alongside the score.
pub mod factors {
    pub const BUDGET_EXCEEDED: &str = "CRITICAL: Budget Exceeded";
    pub const HIGH_SPEND_LOW_PROGRESS: &str = "High Spend vs Low Progress";
    pub const PROJECT_OVERDUE: &str = "CRITICAL: Project Overdue";
    pub const SCHEDULE_LAG: &str = "Significant Schedule Lag";
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Risk band derived from the capped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= CRITICAL_THRESHOLD {
            Self::Critical
        } else if score >= HIGH_THRESHOLD {
            Self::High
        } else if score >= MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

/// The budget and schedule fields of a project that feed the score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshot {
    pub budget: Money,
    pub actual_spend: Money,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub completion_percentage: i32,
}

/// Result of scoring one project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub risk_score: u32,
    pub risk_level: RiskLevel,
    pub factors: Vec<String>,
    /// Linear expected completion at `now`, rounded to the nearest integer.
    pub expected_progress: i32,
    pub actual_progress: i32,
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score a project snapshot at instant `now`.
///
/// Never fails: a zero budget skips the budget checks and a zero or negative
/// duration yields an expected progress of 0.
pub fn score(project: &ProjectSnapshot, now: Timestamp) -> RiskAssessment {
    let mut total = 0u32;
    let mut found = Vec::new();
    let completion = project.completion_percentage;

    // Budget.
    if let Some(usage) = budget_usage_pct(project.budget, project.actual_spend) {
        if usage > Money::from(BUDGET_EXCEEDED_PCT) {
            total += BUDGET_EXCEEDED_POINTS;
            found.push(factors::BUDGET_EXCEEDED.to_string());
        } else if usage > Money::from(HIGH_SPEND_PCT) && completion < LOW_PROGRESS_PCT {
            total += HIGH_SPEND_POINTS;
            found.push(factors::HIGH_SPEND_LOW_PROGRESS.to_string());
        }
    }

    // Schedule.
    let start = midnight_utc(project.start_date);
    let end = midnight_utc(project.end_date);
    let total_ms = (end - start).num_milliseconds();
    let elapsed_ms = (now - start).num_milliseconds();

    let expected = if total_ms <= 0 || elapsed_ms <= 0 {
        0.0
    } else {
        (elapsed_ms as f64 / total_ms as f64 * 100.0).min(100.0)
    };

    if now > end && completion < 100 {
        total += OVERDUE_POINTS;
        found.push(factors::PROJECT_OVERDUE.to_string());
    } else if expected - f64::from(completion) > SCHEDULE_LAG_PCT {
        total += SCHEDULE_LAG_POINTS;
        found.push(factors::SCHEDULE_LAG.to_string());
    }

    let risk_score = total.min(MAX_RISK_SCORE);

    RiskAssessment {
        risk_score,
        risk_level: RiskLevel::from_score(risk_score),
        factors: found,
        expected_progress: expected.round() as i32,
        actual_progress: completion,
    }
}

/// Validate the scoring inputs of a project before it is stored.
pub fn validate_snapshot(project: &ProjectSnapshot) -> Result<(), CoreError> {
    if project.budget <= Money::ZERO {
        return Err(CoreError::Validation("Budget must be greater than zero".into()));
    }
    if project.actual_spend.is_sign_negative() {
        return Err(CoreError::Validation("Actual spend must not be negative".into()));
    }
    validate_amount("Budget", project.budget, AMOUNT_PRECISION)?;
    validate_amount("Actual spend", project.actual_spend, AMOUNT_PRECISION)?;
    if !(0..=100).contains(&project.completion_percentage) {
        return Err(CoreError::Validation(
            "Completion percentage must be between 0 and 100".into(),
        ));
    }
    if project.end_date < project.start_date {
        return Err(CoreError::Validation(
            "End date must not be before start date".into(),
        ));
    }
    Ok(())
}

/// Spend as a percentage of budget, or `None` when the budget is not positive.
fn budget_usage_pct(budget: Money, actual_spend: Money) -> Option<Money> {
    if budget <= Money::ZERO {
        return None;
    }
    (actual_spend * Money::ONE_HUNDRED).checked_div(budget)
}

fn midnight_utc(date: NaiveDate) -> Timestamp {
    date.and_time(NaiveTime::MIN).and_utc()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
