use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};

/// A risk or issue raised against a project.
///
/// `probability` and `impact` are 1 to 5 scores; `severity` is their
/// product (1 to 25) and is only meaningful when both factors are present.
/// The backend stores severity denormalized, so [`RiskIssue::severity_score`]
/// recomputes and validates it rather than trusting the stored column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskIssue {
    pub id: Uuid,
    pub project_id: Uuid,
    #[serde(rename = "type")]
    pub entry_type: RiskIssueType,
    pub title: String,
    pub description: Option<String>,
    pub probability: Option<u8>,
    pub impact: Option<u8>,
    pub severity: Option<u8>,
    pub owner_id: Option<Uuid>,
    pub status: RiskIssueStatus,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl RiskIssue {
    /// Severity recomputed from probability and impact.
    ///
    /// Returns `Ok(None)` when either factor is absent. A factor outside
    /// [1,5], or a stored severity without both factors, is a
    /// [`Error::DataIntegrity`].
    pub fn severity_score(&self) -> Result<Option<u8>> {
        for (name, factor) in [("probability", self.probability), ("impact", self.impact)] {
            if let Some(v) = factor {
                if !(1..=5).contains(&v) {
                    return Err(Error::DataIntegrity {
                        id: self.id,
                        detail: format!("{name} {v} outside [1,5]"),
                    });
                }
            }
        }

        match (self.probability, self.impact) {
            (Some(p), Some(i)) => Ok(Some(p * i)),
            _ if self.severity.is_some() => Err(Error::DataIntegrity {
                id: self.id,
                detail: "severity present without both probability and impact".to_string(),
            }),
            _ => Ok(None),
        }
    }
}

/// Whether a row tracks an uncertain risk or a materialized issue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskIssueType {
    Risk,
    Issue,
}

impl RiskIssueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Risk => "risk",
            Self::Issue => "issue",
        }
    }
}

/// Workflow status of a risk or issue.
///
/// Wire values use the backend's hyphenated spelling (`in-progress`).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RiskIssueStatus {
    Open,
    InProgress,
    Closed,
}

impl RiskIssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in-progress",
            Self::Closed => "closed",
        }
    }
}
