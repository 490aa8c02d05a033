use beacon::dashboard::Dashboard;
use beacon::models::*;
use beacon::source::{DataSource, MemorySource};
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn today() -> NaiveDate {
    date(2026, 8, 30)
}

/// `age` pushes created_at into the past so listing order is observable.
fn project(name: &str, status: ProjectStatus, portfolio_id: Uuid, age: i64) -> Project {
    let created = Utc.with_ymd_and_hms(2026, 6, 1, 12, 0, 0).unwrap() - Duration::days(age);
    Project {
        id: Uuid::new_v4(),
        portfolio_id,
        owner_id: Uuid::new_v4(),
        name: name.to_string(),
        description: None,
        status,
        priority: ProjectPriority::Medium,
        start_date: date(2026, 1, 1),
        end_date: date(2026, 12, 31),
        budget_total: "0".to_string(),
        created_at: created,
        updated_at: created,
    }
}

fn entry(entry_type: BudgetType, category: BudgetCategory, amount: &str) -> BudgetEntry {
    BudgetEntry {
        id: Uuid::new_v4(),
        project_id: Uuid::new_v4(),
        entry_type,
        amount: amount.to_string(),
        category,
        date: date(2026, 3, 1),
        notes: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn risk(probability: u8, impact: u8, status: RiskIssueStatus) -> RiskIssue {
    RiskIssue {
        id: Uuid::new_v4(),
        project_id: Uuid::new_v4(),
        entry_type: RiskIssueType::Risk,
        title: "Risk".to_string(),
        description: None,
        probability: Some(probability),
        impact: Some(impact),
        severity: Some(probability * impact),
        owner_id: None,
        status,
        due_date: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn allocation(resource_id: Uuid, percentage: f64) -> Allocation {
    Allocation {
        id: Uuid::new_v4(),
        resource_id,
        project_id: Uuid::new_v4(),
        start_date: date(2026, 1, 1),
        end_date: date(2026, 6, 30),
        allocation_percentage: percentage,
        created_at: Utc::now(),
    }
}

fn milestone(title: &str, due: NaiveDate, status: MilestoneStatus) -> Milestone {
    Milestone {
        id: Uuid::new_v4(),
        project_id: Uuid::new_v4(),
        title: title.to_string(),
        due_date: due,
        status,
        owner_id: None,
        notes: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

fn resource(name: &str, availability: f64) -> Resource {
    Resource {
        id: Uuid::new_v4(),
        name: name.to_string(),
        role: "Engineer".to_string(),
        cost_rate: "120".to_string(),
        availability_percent: availability,
        created_at: Utc::now(),
    }
}

mod memory_source {
    use super::*;

    #[tokio::test]
    async fn filters_projects_by_status_list() {
        let portfolio = Uuid::new_v4();
        let source = MemorySource::new().with_projects(vec![
            project("A", ProjectStatus::Active, portfolio, 0),
            project("B", ProjectStatus::Completed, portfolio, 1),
            project("C", ProjectStatus::Cancelled, portfolio, 2),
        ]);

        let filters = ProjectFilters {
            status: Some(vec![ProjectStatus::Active, ProjectStatus::Completed]),
            ..ProjectFilters::default()
        };
        let rows = source.projects(&filters).await.expect("query");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|p| p.status != ProjectStatus::Cancelled));
    }

    #[tokio::test]
    async fn searches_name_and_description_case_insensitively() {
        let portfolio = Uuid::new_v4();
        let mut described = project("Platform", ProjectStatus::Active, portfolio, 0);
        described.description = Some("Payments MIGRATION work".to_string());
        let source = MemorySource::new().with_projects(vec![
            described,
            project("Migration Tooling", ProjectStatus::Active, portfolio, 1),
            project("Unrelated", ProjectStatus::Active, portfolio, 2),
        ]);

        let filters = ProjectFilters {
            search: Some("migration".to_string()),
            ..ProjectFilters::default()
        };
        let rows = source.projects(&filters).await.expect("query");
        assert_eq!(rows.len(), 2);
    }

    #[tokio::test]
    async fn scopes_projects_to_a_portfolio_and_orders_newest_first() {
        let mine = Uuid::new_v4();
        let theirs = Uuid::new_v4();
        let source = MemorySource::new().with_projects(vec![
            project("Old", ProjectStatus::Active, mine, 30),
            project("New", ProjectStatus::Active, mine, 0),
            project("Other", ProjectStatus::Active, theirs, 0),
        ]);

        let rows = source
            .projects(&ProjectFilters::portfolio(mine))
            .await
            .expect("query");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "New");
        assert_eq!(rows[1].name, "Old");
    }

    #[tokio::test]
    async fn bounds_projects_by_date_range() {
        let portfolio = Uuid::new_v4();
        let mut early = project("Early", ProjectStatus::Active, portfolio, 0);
        early.start_date = date(2025, 1, 1);
        let source = MemorySource::new().with_projects(vec![
            early,
            project("InRange", ProjectStatus::Active, portfolio, 1),
        ]);

        let filters = ProjectFilters {
            start_date: Some(date(2026, 1, 1)),
            ..ProjectFilters::default()
        };
        let rows = source.projects(&filters).await.expect("query");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "InRange");
    }

    #[tokio::test]
    async fn open_risk_filter_excludes_other_statuses() {
        let source = MemorySource::new().with_risks(vec![
            risk(5, 5, RiskIssueStatus::Open),
            risk(2, 2, RiskIssueStatus::Closed),
            risk(3, 3, RiskIssueStatus::InProgress),
        ]);

        let rows = source.risks(&RiskFilters::open()).await.expect("query");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, RiskIssueStatus::Open);
    }

    #[tokio::test]
    async fn risk_severity_bounds_order_highest_first() {
        let source = MemorySource::new().with_risks(vec![
            risk(1, 2, RiskIssueStatus::Open),
            risk(5, 5, RiskIssueStatus::Open),
            risk(3, 3, RiskIssueStatus::Open),
        ]);

        let filters = RiskFilters {
            severity_min: Some(6),
            ..RiskFilters::default()
        };
        let rows = source.risks(&filters).await.expect("query");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].severity, Some(25));
        assert_eq!(rows[1].severity, Some(9));
    }

    #[tokio::test]
    async fn lists_portfolios_by_name() {
        let owner = Uuid::new_v4();
        let portfolio = |name: &str| Portfolio {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            owner_id: owner,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let source =
            MemorySource::new().with_portfolios(vec![portfolio("Zeta"), portfolio("Apex")]);

        let rows = source.portfolios().await.expect("query");
        assert_eq!(rows[0].name, "Apex");
        assert_eq!(rows[1].name, "Zeta");
    }

    #[tokio::test]
    async fn scopes_budget_entries_and_allocations_to_a_project() {
        let project_id = Uuid::new_v4();
        let mut scoped = entry(BudgetType::Actual, BudgetCategory::Opex, "10");
        scoped.project_id = project_id;
        let mut scoped_alloc = allocation(Uuid::new_v4(), 50.0);
        scoped_alloc.project_id = project_id;
        let source = MemorySource::new()
            .with_budget_entries(vec![
                scoped,
                entry(BudgetType::Actual, BudgetCategory::Opex, "20"),
            ])
            .with_allocations(vec![scoped_alloc, allocation(Uuid::new_v4(), 80.0)]);

        let entries = source.budget_entries(Some(project_id)).await.expect("query");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].amount, "10");

        let allocations = source
            .allocations(None, Some(project_id))
            .await
            .expect("query");
        assert_eq!(allocations.len(), 1);
        assert_eq!(allocations[0].allocation_percentage, 50.0);
    }

    #[tokio::test]
    async fn milestones_order_by_due_date_ascending() {
        let source = MemorySource::new().with_milestones(vec![
            milestone("Second", date(2026, 10, 1), MilestoneStatus::Pending),
            milestone("First", date(2026, 9, 1), MilestoneStatus::Pending),
        ]);

        let rows = source.milestones(None).await.expect("query");
        assert_eq!(rows[0].title, "First");
        assert_eq!(rows[1].title, "Second");
    }
}

mod dashboard_snapshot {
    use super::*;

    fn seeded_source(portfolio: Uuid) -> MemorySource {
        let other = Uuid::new_v4();
        MemorySource::new()
            .with_projects(vec![
                project("Alpha", ProjectStatus::Active, portfolio, 0),
                project("Beta", ProjectStatus::Completed, portfolio, 1),
                project("Gamma", ProjectStatus::Completed, other, 2),
            ])
            .with_budget_entries(vec![
                entry(BudgetType::Planned, BudgetCategory::Capex, "1000"),
                entry(BudgetType::Actual, BudgetCategory::Capex, "400"),
                entry(BudgetType::Actual, BudgetCategory::Vendor, "100"),
                entry(BudgetType::Forecast, BudgetCategory::Opex, "700"),
            ])
            .with_risks(vec![
                risk(3, 4, RiskIssueStatus::Open),
                risk(5, 5, RiskIssueStatus::Open),
                risk(2, 2, RiskIssueStatus::Closed),
            ])
            .with_allocations(vec![
                allocation(Uuid::new_v4(), 50.0),
                allocation(Uuid::new_v4(), 100.0),
            ])
            .with_milestones(vec![
                milestone("Ship", date(2026, 9, 6), MilestoneStatus::Pending),
                milestone("Slipped", date(2026, 8, 27), MilestoneStatus::Delayed),
                milestone("Done", date(2026, 8, 1), MilestoneStatus::Completed),
            ])
    }

    #[tokio::test]
    async fn assembles_the_full_render_input() {
        let portfolio = Uuid::new_v4();
        let dashboard = Dashboard::new(seeded_source(portfolio));

        let snapshot = dashboard.snapshot(None, today()).await.expect("snapshot");

        assert_eq!(snapshot.metrics.total_projects, 3);
        assert_eq!(snapshot.metrics.active_projects, 1);
        assert_eq!(snapshot.metrics.budget_utilization_percent, 50.0);
        assert_eq!(snapshot.metrics.risk_count, 2);
        assert_eq!(snapshot.metrics.resource_utilization_percent, 75.0);

        assert_eq!(snapshot.heatmap.total(), 2);
        assert_eq!(snapshot.heatmap.count(3, 4), 1);
        assert_eq!(snapshot.heatmap.count(5, 5), 1);

        assert_eq!(snapshot.status_breakdown.len(), 2);
        assert_eq!(snapshot.budget_by_category.len(), 2);

        assert_eq!(snapshot.upcoming_milestones.len(), 2);
        assert_eq!(snapshot.upcoming_milestones[0].milestone.title, "Slipped");
        assert!(snapshot.upcoming_milestones[0].overdue);
    }

    #[tokio::test]
    async fn scopes_project_metrics_to_one_portfolio() {
        let portfolio = Uuid::new_v4();
        let dashboard = Dashboard::new(seeded_source(portfolio));

        let snapshot = dashboard
            .snapshot(Some(portfolio), today())
            .await
            .expect("snapshot");

        assert_eq!(snapshot.metrics.total_projects, 2);
        assert_eq!(snapshot.metrics.schedule_variance_percent, 50.0);
        // Budget, risk, and allocation rows stay portfolio-wide.
        assert_eq!(snapshot.metrics.budget_utilization_percent, 50.0);
        assert_eq!(snapshot.metrics.risk_count, 2);
    }

    #[tokio::test]
    async fn surfaces_invalid_amounts_from_the_snapshot_path() {
        let source = MemorySource::new().with_budget_entries(vec![entry(
            BudgetType::Planned,
            BudgetCategory::Capex,
            "not-a-number",
        )]);
        let dashboard = Dashboard::new(source);

        let err = dashboard.snapshot(None, today()).await.unwrap_err();
        assert!(err.to_string().contains("invalid amount"));
    }

    #[tokio::test]
    async fn budget_overview_matches_the_budget_page_totals() {
        let portfolio = Uuid::new_v4();
        let dashboard = Dashboard::new(seeded_source(portfolio));

        let summary = dashboard.budget_overview().await.expect("summary");
        assert_eq!(summary.total_planned, rust_decimal::Decimal::new(1000, 0));
        assert_eq!(summary.total_actual, rust_decimal::Decimal::new(500, 0));
        assert_eq!(summary.variance, rust_decimal::Decimal::new(500, 0));
    }

    #[tokio::test]
    async fn resource_loads_flag_over_allocation() {
        let busy = resource("Busy", 100.0);
        let busy_id = busy.id;
        let source = MemorySource::new()
            .with_resources(vec![busy])
            .with_allocations(vec![
                allocation(busy_id, 70.0),
                allocation(busy_id, 50.0),
            ]);
        let dashboard = Dashboard::new(source);

        let loads = dashboard.resource_loads().await.expect("loads");
        assert_eq!(loads.len(), 1);
        assert_eq!(loads[0].total_allocation_percent, 120.0);
        assert!(loads[0].over_allocated);
    }
}
