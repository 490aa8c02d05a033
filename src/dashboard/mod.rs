//! Dashboard aggregation.
//!
//! The pure functions here turn already-fetched rows into the derived
//! values the dashboard renders: headline metrics, chart inputs, the
//! upcoming-milestone list, and per-resource load. [`Dashboard`] is the
//! thin async caller that fetches rows through a [`crate::source::DataSource`]
//! and invokes them; the functions themselves never suspend and never
//! touch a backend.

mod charts;
mod metrics;
mod service;

pub use charts::*;
pub use metrics::*;
pub use service::*;
