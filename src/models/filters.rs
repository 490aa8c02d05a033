use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ProjectPriority, ProjectStatus, RiskIssueStatus, RiskIssueType};

/// Criteria for narrowing a project listing.
///
/// Every field is optional; an empty filter matches everything. How a
/// backend maps these to its query layer is its own business. The
/// in-memory source ([`crate::source::MemorySource`]) defines the
/// reference semantics: list fields match any-of, `search` is a
/// case-insensitive substring match over name and description, and the
/// date bounds constrain `start_date` (at or after) and `end_date`
/// (at or before).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectFilters {
    pub status: Option<Vec<ProjectStatus>>,
    pub priority: Option<Vec<ProjectPriority>>,
    pub owner_id: Option<Uuid>,
    pub portfolio_id: Option<Uuid>,
    pub search: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Criteria for narrowing a risk/issue listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskFilters {
    pub status: Option<Vec<RiskIssueStatus>>,
    pub entry_type: Option<RiskIssueType>,
    pub severity_min: Option<u8>,
    pub severity_max: Option<u8>,
}

impl ProjectFilters {
    /// Filter scoped to a single portfolio, everything else unconstrained.
    pub fn portfolio(portfolio_id: Uuid) -> Self {
        Self {
            portfolio_id: Some(portfolio_id),
            ..Self::default()
        }
    }
}

impl RiskFilters {
    /// Filter matching only open rows.
    pub fn open() -> Self {
        Self {
            status: Some(vec![RiskIssueStatus::Open]),
            ..Self::default()
        }
    }
}
