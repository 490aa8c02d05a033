use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A person or team that can be allocated to projects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    /// Hourly cost as a raw decimal string as served by the backend.
    pub cost_rate: String,
    /// How much of this resource's time is available at all, 0 to 100.
    pub availability_percent: f64,
    pub created_at: DateTime<Utc>,
}

/// A percentage assignment of a resource to a project over a date range.
///
/// A resource whose allocation percentages sum past its
/// `availability_percent` is over-allocated; see
/// [`crate::dashboard::allocation_report`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Allocation {
    pub id: Uuid,
    pub resource_id: Uuid,
    pub project_id: Uuid,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Share of the resource assigned to the project, 0 to 100.
    pub allocation_percentage: f64,
    pub created_at: DateTime<Utc>,
}
