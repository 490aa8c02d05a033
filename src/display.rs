//! Display classification and formatting helpers.
//!
//! The color mappers are total over arbitrary strings on purpose: the
//! backend may start serving status values this build does not know yet,
//! and an unknown value must degrade to gray rather than fail a render.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Display color tier used across badges, charts, and the heatmap.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Blue,
    Green,
    Yellow,
    Amber,
    Orange,
    Red,
    Gray,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Amber => "amber",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Gray => "gray",
        }
    }
}

/// Color for any status string the backend serves.
///
/// Covers project, risk/issue, and milestone statuses in one table, the
/// way the dashboard badges use it. Unknown values map to gray.
pub fn status_color(status: &str) -> Color {
    match status {
        "planned" => Color::Blue,
        "active" => Color::Green,
        "on-hold" => Color::Yellow,
        "completed" => Color::Gray,
        "cancelled" => Color::Red,
        "open" => Color::Red,
        "in-progress" => Color::Yellow,
        "closed" => Color::Green,
        "pending" => Color::Blue,
        "delayed" => Color::Red,
        _ => Color::Gray,
    }
}

/// Color for a project priority string. Unknown values map to gray.
pub fn priority_color(priority: &str) -> Color {
    match priority {
        "low" => Color::Blue,
        "medium" => Color::Yellow,
        "high" => Color::Orange,
        "critical" => Color::Red,
        _ => Color::Gray,
    }
}

/// Render a percent value with one decimal place, e.g. `66.7%`.
///
/// This is the display rounding policy; metric values themselves are kept
/// at full precision.
pub fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// Render a dollar amount with thousands separators and no cents,
/// e.g. `$1,200,500`. Fractions round to the nearest whole dollar.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round();
    let negative = rounded.is_sign_negative();
    let whole = rounded.abs().to_i128().unwrap_or(0).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Render a date the way the dashboard lists do, e.g. `Mar 5, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
