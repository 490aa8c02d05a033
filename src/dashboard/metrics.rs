use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::Result;
use crate::models::{
    Allocation, BudgetEntry, BudgetType, DashboardMetrics, Project, ProjectStatus, RiskIssue,
};
use crate::money;

/// Compute the headline dashboard metrics from raw row collections.
///
/// Pure and deterministic: nothing is mutated, nothing is cached, and two
/// calls over the same snapshot return the same value. Input order is
/// irrelevant.
///
/// `open_risks` is trusted to be pre-filtered to open rows by the caller
/// (the data-fetch layer queries with that predicate); only its length is
/// used here.
///
/// Zero denominators are policy, not errors: with no planned budget the
/// utilization is 0, and with no projects the schedule variance is 0.
/// Monetary sums accumulate in [`Decimal`]; a malformed amount string is an
/// [`crate::error::Error::InvalidAmount`], never a silent 0.
pub fn compute_metrics(
    projects: &[Project],
    budget_entries: &[BudgetEntry],
    open_risks: &[RiskIssue],
    allocations: &[Allocation],
) -> Result<DashboardMetrics> {
    let total_projects = projects.len();
    let active_projects = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Active)
        .count();
    let completed_projects = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Completed)
        .count();

    let mut total_planned = Decimal::ZERO;
    let mut total_actual = Decimal::ZERO;
    for entry in budget_entries {
        let amount = money::parse_amount(entry.id, &entry.amount)?;
        match entry.entry_type {
            BudgetType::Planned => total_planned += amount,
            BudgetType::Actual => total_actual += amount,
            BudgetType::Forecast => {}
        }
    }

    let budget_utilization_percent = if total_planned > Decimal::ZERO {
        (total_actual / total_planned * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    } else {
        0.0
    };

    let schedule_variance_percent = if total_projects > 0 {
        completed_projects as f64 / total_projects as f64 * 100.0
    } else {
        0.0
    };

    // Mean percentage per allocation record, not per distinct resource.
    let allocation_total: f64 = allocations.iter().map(|a| a.allocation_percentage).sum();
    let resource_utilization_percent = allocation_total / allocations.len().max(1) as f64;

    let metrics = DashboardMetrics {
        total_projects,
        active_projects,
        budget_utilization_percent,
        schedule_variance_percent,
        risk_count: open_risks.len(),
        resource_utilization_percent,
    };

    tracing::debug!(
        total_projects,
        active_projects,
        risk_count = metrics.risk_count,
        "computed dashboard metrics"
    );

    Ok(metrics)
}
