//! Portfolio analytics core for PPM dashboards.
//!
//! The backend owns the rows; this crate owns the arithmetic. Given
//! snapshots of projects, budget entries, risks, allocations, and
//! milestones, it derives the dashboard's headline metrics, chart inputs,
//! the risk heatmap, and the severity/status display taxonomy. Every
//! derivation is a pure synchronous function over its inputs: no ambient
//! client, no cache, no retained state.
//!
//! Rows reach the core through the [`source::DataSource`] trait, injected
//! into [`dashboard::Dashboard`]. [`source::MemorySource`] implements it
//! over in-memory collections for tests and embedders that already hold
//! rows.
//!
//! Two hard rules hold throughout: monetary amounts accumulate as decimals
//! and malformed amount strings fail fast ([`error::Error::InvalidAmount`])
//! instead of coercing to 0, and a risk score outside its 1 to 5 range is
//! rejected ([`error::Error::DataIntegrity`]) instead of indexing a
//! neighboring heatmap cell.

pub mod dashboard;
pub mod dates;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod money;
pub mod risk;
pub mod source;

pub use error::{Error, Result};
