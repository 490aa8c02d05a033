use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::charts::{
    allocation_report, budget_by_category, budget_summary, status_breakdown, upcoming_milestones,
    CategoryTotal, ResourceLoad, StatusCount, UpcomingMilestone,
};
use super::metrics::compute_metrics;
use crate::models::{BudgetSummary, DashboardMetrics, ProjectFilters, RiskFilters};
use crate::risk::{build_heatmap, Heatmap};
use crate::source::DataSource;

/// How many milestones the upcoming list shows.
const UPCOMING_LIMIT: usize = 5;

/// Everything one dashboard render needs, derived in a single pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub metrics: DashboardMetrics,
    pub status_breakdown: Vec<StatusCount>,
    pub budget_by_category: Vec<CategoryTotal>,
    pub heatmap: Heatmap,
    pub upcoming_milestones: Vec<UpcomingMilestone>,
}

/// The aggregation core's caller: fetches rows through an injected
/// [`DataSource`] and hands them to the pure aggregation functions.
///
/// Holds no state beyond the source itself. Every call fetches a fresh
/// snapshot; concurrent calls are fully independent and caching, if any,
/// belongs to the data source.
pub struct Dashboard<S: DataSource> {
    source: S,
}

impl<S: DataSource> Dashboard<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Assemble a full dashboard snapshot, optionally scoped to one
    /// portfolio. Only the project listing is scoped; budget, risk,
    /// allocation, and milestone rows stay portfolio-wide, matching the
    /// dashboard's queries. `today` anchors the milestone day counts so
    /// renders are reproducible.
    pub async fn snapshot(
        &self,
        portfolio_id: Option<Uuid>,
        today: NaiveDate,
    ) -> Result<DashboardSnapshot> {
        let project_filters = match portfolio_id {
            Some(id) => ProjectFilters::portfolio(id),
            None => ProjectFilters::default(),
        };

        let projects = self.source.projects(&project_filters).await?;
        let budget_entries = self.source.budget_entries(None).await?;
        let open_risks = self.source.risks(&RiskFilters::open()).await?;
        let allocations = self.source.allocations(None, None).await?;
        let milestones = self.source.milestones(None).await?;

        let metrics = compute_metrics(&projects, &budget_entries, &open_risks, &allocations)?;
        let snapshot = DashboardSnapshot {
            metrics,
            status_breakdown: status_breakdown(&projects),
            budget_by_category: budget_by_category(&budget_entries)?,
            heatmap: build_heatmap(&open_risks)?,
            upcoming_milestones: upcoming_milestones(&milestones, today, UPCOMING_LIMIT),
        };

        tracing::debug!(
            projects = snapshot.metrics.total_projects,
            open_risks = snapshot.metrics.risk_count,
            ?portfolio_id,
            "assembled dashboard snapshot"
        );

        Ok(snapshot)
    }

    /// Planned/actual/forecast totals across all budget entries, as shown
    /// on the budget page.
    pub async fn budget_overview(&self) -> Result<BudgetSummary> {
        let entries = self.source.budget_entries(None).await?;
        Ok(budget_summary(&entries)?)
    }

    /// Per-resource allocation load with over-allocation flags, as shown
    /// on the resources page.
    pub async fn resource_loads(&self) -> Result<Vec<ResourceLoad>> {
        let resources = self.source.resources().await?;
        let allocations = self.source.allocations(None, None).await?;
        Ok(allocation_report(&resources, &allocations))
    }
}
