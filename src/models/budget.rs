use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single planned, actual, or forecast budget line on a project.
///
/// `amount` is kept as the raw decimal string served by the backend.
/// Aggregation parses it through [`crate::money::parse_amount`], which
/// fails fast on malformed input instead of coercing to 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetEntry {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(rename = "type")]
    pub entry_type: BudgetType,
    /// Raw decimal string as served by the backend.
    pub amount: String,
    pub category: BudgetCategory,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Whether a budget line is planned, realized, or projected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetType {
    Planned,
    Actual,
    Forecast,
}

impl BudgetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Actual => "actual",
            Self::Forecast => "forecast",
        }
    }
}

/// Spending category of a budget line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    Capex,
    Opex,
    Resource,
    Vendor,
    Misc,
}

impl BudgetCategory {
    /// All categories, in canonical display order.
    pub const ALL: [BudgetCategory; 5] = [
        Self::Capex,
        Self::Opex,
        Self::Resource,
        Self::Vendor,
        Self::Misc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Capex => "capex",
            Self::Opex => "opex",
            Self::Resource => "resource",
            Self::Vendor => "vendor",
            Self::Misc => "misc",
        }
    }
}

/// Rolled-up budget totals across a set of entries.
///
/// `variance` is planned minus actual: positive means under budget.
/// `variance_percent` is (actual - planned) / planned as a percentage,
/// defined as 0 when nothing was planned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetSummary {
    pub total_planned: Decimal,
    pub total_actual: Decimal,
    pub total_forecast: Decimal,
    pub variance: Decimal,
    pub variance_percent: f64,
}
