//! Data access boundary.
//!
//! The dashboard never talks to a backend directly; it is handed a
//! [`DataSource`] and works over whatever rows that source returns. This
//! keeps the aggregation core free of ambient client state and lets tests
//! run against [`MemorySource`] with no network involved.

mod memory;

pub use memory::MemorySource;

use anyhow::Result;
use uuid::Uuid;

use crate::models::{
    Allocation, BudgetEntry, Milestone, Portfolio, Project, ProjectFilters, Resource, RiskFilters,
    RiskIssue,
};

/// Read-only access to the entity rows the dashboard consumes.
///
/// Implementations map the filter types onto their own query layer and
/// return rows in their backend's listing order. All methods are fallible
/// with the implementation's own error context; the analytics core adds
/// its own errors on top once rows are in hand.
#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// Projects matching `filters`, newest first.
    async fn projects(&self, filters: &ProjectFilters) -> Result<Vec<Project>>;

    /// All portfolios, ordered by name.
    async fn portfolios(&self) -> Result<Vec<Portfolio>>;

    /// Budget entries, optionally scoped to one project, newest date first.
    async fn budget_entries(&self, project_id: Option<Uuid>) -> Result<Vec<BudgetEntry>>;

    /// All resources, ordered by name.
    async fn resources(&self) -> Result<Vec<Resource>>;

    /// Allocations, optionally scoped by resource and/or project,
    /// latest start date first.
    async fn allocations(
        &self,
        resource_id: Option<Uuid>,
        project_id: Option<Uuid>,
    ) -> Result<Vec<Allocation>>;

    /// Risks and issues matching `filters`, highest severity first.
    async fn risks(&self, filters: &RiskFilters) -> Result<Vec<RiskIssue>>;

    /// Milestones, optionally scoped to one project, earliest due date first.
    async fn milestones(&self, project_id: Option<Uuid>) -> Result<Vec<Milestone>>;
}
