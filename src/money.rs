//! Decimal-safe parsing of monetary amounts.
//!
//! The backend serves numeric columns as decimal strings. Parsing is kept
//! out of the aggregation math so that a malformed amount fails fast as
//! [`Error::InvalidAmount`] instead of drifting through binary floats or
//! silently collapsing to 0.

use std::str::FromStr;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Parse a raw backend amount string into a non-negative [`Decimal`].
///
/// `id` identifies the row carrying the value, for error context.
pub fn parse_amount(id: Uuid, raw: &str) -> Result<Decimal> {
    let value = Decimal::from_str(raw.trim()).map_err(|e| Error::InvalidAmount {
        id,
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    if value.is_sign_negative() {
        return Err(Error::InvalidAmount {
            id,
            value: raw.to_string(),
            reason: "amount must be non-negative".to_string(),
        });
    }

    Ok(value)
}
