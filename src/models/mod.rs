//! Domain models for the portfolio analytics core.
//!
//! # Core Concepts
//!
//! Every type here is an immutable snapshot of a backend row. The backend
//! owns the rows; this crate only derives read-only aggregates from them and
//! never mutates or persists anything.
//!
//! - [`Project`]: the unit of delivery, grouped under a [`Portfolio`].
//! - [`BudgetEntry`]: planned/actual/forecast money attached to a project.
//!   Amounts arrive as raw decimal strings and are parsed explicitly
//!   (see [`crate::money`]), never coerced through binary floats.
//! - [`Resource`] and [`Allocation`]: people and their percentage
//!   assignments to projects.
//! - [`RiskIssue`]: a risk or issue with optional probability/impact scores
//!   whose product is its severity.
//! - [`Milestone`]: a dated checkpoint on a project.
//! - [`DashboardMetrics`] and [`BudgetSummary`]: derived value objects
//!   handed to presentation.

mod budget;
mod filters;
mod metrics;
mod milestone;
mod portfolio;
mod project;
mod resource;
mod risk;

pub use budget::*;
pub use filters::*;
pub use metrics::*;
pub use milestone::*;
pub use portfolio::*;
pub use project::*;
pub use resource::*;
pub use risk::*;
