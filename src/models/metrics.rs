use serde::{Deserialize, Serialize};

/// Headline numbers for the portfolio dashboard.
///
/// Produced by [`crate::dashboard::compute_metrics`]. Percent fields are
/// full-precision values; rounding happens at display time only
/// (see [`crate::display::format_percent`]).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardMetrics {
    pub total_projects: usize,
    pub active_projects: usize,
    /// Actual spend over planned spend, as a percentage. 0 when nothing
    /// is planned.
    pub budget_utilization_percent: f64,
    /// Completed projects over all projects, as a percentage. 0 when there
    /// are no projects.
    pub schedule_variance_percent: f64,
    /// Count of open risks and issues, as supplied by the caller.
    pub risk_count: usize,
    /// Mean allocation percentage per allocation record (not per distinct
    /// resource). 0 when there are no allocations.
    pub resource_utilization_percent: f64,
}
