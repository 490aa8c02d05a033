//! Severity classification and the probability/impact heatmap.

use serde::{Deserialize, Serialize};

use crate::display::Color;
use crate::error::Result;
use crate::models::{RiskIssue, RiskIssueStatus};

/// Three-band severity classification.
///
/// Bands are inclusive and exact: 1 to 5 is low, 6 to 12 is medium,
/// 13 to 25 is high.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Low,
    Medium,
    High,
}

impl SeverityTier {
    pub fn from_score(severity: u8) -> Self {
        if severity <= 5 {
            Self::Low
        } else if severity <= 12 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Low => Color::Green,
            Self::Medium => Color::Amber,
            Self::High => Color::Red,
        }
    }
}

/// Classify a severity score (probability times impact) into its tier.
pub fn classify_severity(severity: u8) -> SeverityTier {
    SeverityTier::from_score(severity)
}

/// A 5x5 grid of open-risk counts indexed by probability and impact.
///
/// Both axes run 1 to 5 ascending; presentation decides display order
/// (the dashboard renders probability descending). Counts are stored by
/// raw score value, so cell (p, i) always means probability p, impact i.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heatmap {
    cells: [[u32; 5]; 5],
}

impl Heatmap {
    /// Count at the given probability and impact, both 1 to 5.
    ///
    /// # Panics
    /// Panics if either score is outside 1 to 5.
    pub fn count(&self, probability: u8, impact: u8) -> u32 {
        self.cells[probability as usize - 1][impact as usize - 1]
    }

    /// Raw cells, probability-major, both axes ascending.
    pub fn cells(&self) -> &[[u32; 5]; 5] {
        &self.cells
    }

    /// Total number of risks counted into the grid.
    pub fn total(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }
}

/// Bucket risks into the probability/impact grid.
///
/// Only rows with status `open` and both probability and impact present
/// are counted; each contributes 1 to its cell. A factor outside [1,5] is
/// a [`crate::error::Error::DataIntegrity`] rather than an out-of-bounds
/// write into a neighboring cell.
pub fn build_heatmap(risks: &[RiskIssue]) -> Result<Heatmap> {
    let mut heatmap = Heatmap::default();

    for risk in risks {
        if risk.status != RiskIssueStatus::Open {
            continue;
        }
        // severity_score validates both factors are present and in range
        if risk.severity_score()?.is_some() {
            if let (Some(p), Some(i)) = (risk.probability, risk.impact) {
                heatmap.cells[p as usize - 1][i as usize - 1] += 1;
            }
        }
    }

    Ok(heatmap)
}
