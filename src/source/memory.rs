use anyhow::Result;
use uuid::Uuid;

use super::DataSource;
use crate::models::{
    Allocation, BudgetEntry, Milestone, Portfolio, Project, ProjectFilters, Resource, RiskFilters,
    RiskIssue,
};

/// An in-memory [`DataSource`] over owned row collections.
///
/// Defines the reference semantics for the filter types and mirrors the
/// backend's listing order per entity. Used by the test suite and by
/// embedders that already hold rows and only want the analytics.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    projects: Vec<Project>,
    portfolios: Vec<Portfolio>,
    budget_entries: Vec<BudgetEntry>,
    resources: Vec<Resource>,
    allocations: Vec<Allocation>,
    risks: Vec<RiskIssue>,
    milestones: Vec<Milestone>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_portfolios(mut self, portfolios: Vec<Portfolio>) -> Self {
        self.portfolios = portfolios;
        self
    }

    pub fn with_budget_entries(mut self, entries: Vec<BudgetEntry>) -> Self {
        self.budget_entries = entries;
        self
    }

    pub fn with_resources(mut self, resources: Vec<Resource>) -> Self {
        self.resources = resources;
        self
    }

    pub fn with_allocations(mut self, allocations: Vec<Allocation>) -> Self {
        self.allocations = allocations;
        self
    }

    pub fn with_risks(mut self, risks: Vec<RiskIssue>) -> Self {
        self.risks = risks;
        self
    }

    pub fn with_milestones(mut self, milestones: Vec<Milestone>) -> Self {
        self.milestones = milestones;
        self
    }
}

fn matches_project(project: &Project, filters: &ProjectFilters) -> bool {
    if let Some(statuses) = &filters.status {
        if !statuses.contains(&project.status) {
            return false;
        }
    }
    if let Some(priorities) = &filters.priority {
        if !priorities.contains(&project.priority) {
            return false;
        }
    }
    if let Some(owner_id) = filters.owner_id {
        if project.owner_id != owner_id {
            return false;
        }
    }
    if let Some(portfolio_id) = filters.portfolio_id {
        if project.portfolio_id != portfolio_id {
            return false;
        }
    }
    if let Some(search) = &filters.search {
        let needle = search.to_lowercase();
        let in_name = project.name.to_lowercase().contains(&needle);
        let in_description = project
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle));
        if !in_name && !in_description {
            return false;
        }
    }
    if let Some(start) = filters.start_date {
        if project.start_date < start {
            return false;
        }
    }
    if let Some(end) = filters.end_date {
        if project.end_date > end {
            return false;
        }
    }
    true
}

fn matches_risk(risk: &RiskIssue, filters: &RiskFilters) -> bool {
    if let Some(statuses) = &filters.status {
        if !statuses.contains(&risk.status) {
            return false;
        }
    }
    if let Some(entry_type) = filters.entry_type {
        if risk.entry_type != entry_type {
            return false;
        }
    }
    if filters.severity_min.is_some() || filters.severity_max.is_some() {
        // Severity bounds only match rows that have a severity at all.
        let Some(severity) = risk.severity else {
            return false;
        };
        if filters.severity_min.is_some_and(|min| severity < min) {
            return false;
        }
        if filters.severity_max.is_some_and(|max| severity > max) {
            return false;
        }
    }
    true
}

impl DataSource for MemorySource {
    async fn projects(&self, filters: &ProjectFilters) -> Result<Vec<Project>> {
        let mut rows: Vec<Project> = self
            .projects
            .iter()
            .filter(|p| matches_project(p, filters))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn portfolios(&self) -> Result<Vec<Portfolio>> {
        let mut rows = self.portfolios.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn budget_entries(&self, project_id: Option<Uuid>) -> Result<Vec<BudgetEntry>> {
        let mut rows: Vec<BudgetEntry> = self
            .budget_entries
            .iter()
            .filter(|e| project_id.is_none_or(|id| e.project_id == id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(rows)
    }

    async fn resources(&self) -> Result<Vec<Resource>> {
        let mut rows = self.resources.clone();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn allocations(
        &self,
        resource_id: Option<Uuid>,
        project_id: Option<Uuid>,
    ) -> Result<Vec<Allocation>> {
        let mut rows: Vec<Allocation> = self
            .allocations
            .iter()
            .filter(|a| resource_id.is_none_or(|id| a.resource_id == id))
            .filter(|a| project_id.is_none_or(|id| a.project_id == id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.start_date.cmp(&a.start_date));
        Ok(rows)
    }

    async fn risks(&self, filters: &RiskFilters) -> Result<Vec<RiskIssue>> {
        let mut rows: Vec<RiskIssue> = self
            .risks
            .iter()
            .filter(|r| matches_risk(r, filters))
            .cloned()
            .collect();
        // Highest severity first, rows without a severity last.
        rows.sort_by(|a, b| match (a.severity, b.severity) {
            (Some(x), Some(y)) => y.cmp(&x),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });
        Ok(rows)
    }

    async fn milestones(&self, project_id: Option<Uuid>) -> Result<Vec<Milestone>> {
        let mut rows: Vec<Milestone> = self
            .milestones
            .iter()
            .filter(|m| project_id.is_none_or(|id| m.project_id == id))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.due_date.cmp(&b.due_date));
        Ok(rows)
    }
}
