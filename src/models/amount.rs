//! Amount coercion
//!
//! Amounts are plain `f64` values. These helpers turn user text into a number
//! the way a spreadsheet would, tolerating a currency sign and thousands
//! separators.

use crate::error::{LedgerError, LedgerResult};

/// Coerce text such as `1500`, `-$60.00` or `$5,000.25` into a number
pub fn parse_amount(text: &str) -> LedgerResult<f64> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    let value: f64 = cleaned
        .parse()
        .map_err(|_| LedgerError::InvalidAmount(format!("'{}' is not a number", text.trim())))?;

    ensure_finite(value)
}

/// Reject NaN and infinities, which cannot be stored or summed meaningfully
pub fn ensure_finite(value: f64) -> LedgerResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LedgerError::InvalidAmount(format!(
            "{} is not a finite number",
            value
        )))
    }
}
