use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates;
use crate::error::Result;
use crate::models::{
    Allocation, BudgetCategory, BudgetEntry, BudgetSummary, BudgetType, Milestone,
    MilestoneStatus, Project, ProjectStatus, Resource,
};
use crate::money;

/// Project count for one status band of the status chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusCount {
    pub status: ProjectStatus,
    pub count: usize,
}

/// Actual spend total for one slice of the budget-by-category chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: BudgetCategory,
    pub total: Decimal,
}

/// A milestone still in flight, annotated for the upcoming list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingMilestone {
    pub milestone: Milestone,
    /// Whole days until the due date; negative when overdue.
    pub days_until: i64,
    pub overdue: bool,
}

/// One resource's summed allocation against its availability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceLoad {
    pub resource_id: Uuid,
    pub name: String,
    pub total_allocation_percent: f64,
    pub availability_percent: f64,
    /// Set when the summed allocation exceeds the resource's availability.
    pub over_allocated: bool,
}

/// Project counts per status, in canonical status order. Statuses with no
/// projects are omitted, matching the status chart's bars.
pub fn status_breakdown(projects: &[Project]) -> Vec<StatusCount> {
    ProjectStatus::ALL
        .iter()
        .filter_map(|&status| {
            let count = projects.iter().filter(|p| p.status == status).count();
            (count > 0).then_some(StatusCount { status, count })
        })
        .collect()
}

/// Actual spend per category, in canonical category order. Categories with
/// no actual entries are omitted, matching the pie chart's slices.
pub fn budget_by_category(entries: &[BudgetEntry]) -> Result<Vec<CategoryTotal>> {
    let mut totals = [Decimal::ZERO; BudgetCategory::ALL.len()];
    let mut seen = [false; BudgetCategory::ALL.len()];

    for entry in entries {
        if entry.entry_type != BudgetType::Actual {
            continue;
        }
        let amount = money::parse_amount(entry.id, &entry.amount)?;
        let idx = BudgetCategory::ALL
            .iter()
            .position(|&c| c == entry.category)
            .unwrap_or(0);
        totals[idx] += amount;
        seen[idx] = true;
    }

    Ok(BudgetCategory::ALL
        .iter()
        .enumerate()
        .filter(|&(idx, _)| seen[idx])
        .map(|(idx, &category)| CategoryTotal {
            category,
            total: totals[idx],
        })
        .collect())
}

/// Planned/actual/forecast totals with variance across a set of entries.
///
/// `variance` is planned minus actual (positive means under budget);
/// `variance_percent` is (actual - planned) / planned as a percentage,
/// 0 when nothing was planned.
pub fn budget_summary(entries: &[BudgetEntry]) -> Result<BudgetSummary> {
    let mut total_planned = Decimal::ZERO;
    let mut total_actual = Decimal::ZERO;
    let mut total_forecast = Decimal::ZERO;

    for entry in entries {
        let amount = money::parse_amount(entry.id, &entry.amount)?;
        match entry.entry_type {
            BudgetType::Planned => total_planned += amount,
            BudgetType::Actual => total_actual += amount,
            BudgetType::Forecast => total_forecast += amount,
        }
    }

    let variance = total_planned - total_actual;
    let variance_percent = if total_planned > Decimal::ZERO {
        ((total_actual - total_planned) / total_planned * Decimal::ONE_HUNDRED)
            .to_f64()
            .unwrap_or(0.0)
    } else {
        0.0
    };

    Ok(BudgetSummary {
        total_planned,
        total_actual,
        total_forecast,
        variance,
        variance_percent,
    })
}

/// The next `limit` non-completed milestones by due date, annotated with
/// day counts relative to `today`.
pub fn upcoming_milestones(
    milestones: &[Milestone],
    today: NaiveDate,
    limit: usize,
) -> Vec<UpcomingMilestone> {
    let mut upcoming: Vec<&Milestone> = milestones
        .iter()
        .filter(|m| m.status != MilestoneStatus::Completed)
        .collect();
    upcoming.sort_by_key(|m| m.due_date);

    upcoming
        .into_iter()
        .take(limit)
        .map(|m| {
            let days_until = dates::days_until(m.due_date, today);
            UpcomingMilestone {
                milestone: m.clone(),
                days_until,
                overdue: days_until < 0,
            }
        })
        .collect()
}

/// Sum each resource's allocation percentages and flag over-allocation.
///
/// A resource is over-allocated when its summed allocation percentage
/// across all its allocation rows exceeds its availability percentage.
/// Resources are reported in input order, including those with no
/// allocations at all.
pub fn allocation_report(resources: &[Resource], allocations: &[Allocation]) -> Vec<ResourceLoad> {
    resources
        .iter()
        .map(|resource| {
            let total: f64 = allocations
                .iter()
                .filter(|a| a.resource_id == resource.id)
                .map(|a| a.allocation_percentage)
                .sum();
            ResourceLoad {
                resource_id: resource.id,
                name: resource.name.clone(),
                total_allocation_percent: total,
                availability_percent: resource.availability_percent,
                over_allocated: total > resource.availability_percent,
            }
        })
        .collect()
}
