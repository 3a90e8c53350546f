//! Row classification and numeric parsing.
//!
//! Two operations over one line of text:
//!
//! - [`classify_numeric`]: is every field on the line a number? Used for
//!   header auto-detection on the first non-blank line.
//! - [`parse_numeric_row`]: convert the line to `f64` values, failing on
//!   empty or non-numeric fields.
//!
//! Numeric parsing goes through `str::parse::<f64>`, which accepts standard
//! decimal and exponential notation and rejects any trailing garbage after
//! the numeric literal.

use crate::io::tokenizer::Tokenizer;

/// Why a line failed to parse as a numeric row. Columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// A field was present but empty (e.g. the middle of `1,,3`).
    EmptyToken { column: usize },
    /// A field did not fully parse as a floating-point number.
    NonNumericToken { column: usize, token: String },
}

/// Check whether every field on `line` parses as a number.
///
/// Returns `Some(token_count)` when the line is all-numeric, `None` on the
/// first empty or non-numeric field. A blank line is vacuously all-numeric
/// with a count of zero.
pub fn classify_numeric(line: &str) -> Option<usize> {
    let mut count = 0;
    for token in Tokenizer::new(line) {
        if token.is_empty() || token.parse::<f64>().is_err() {
            return None;
        }
        count += 1;
    }
    Some(count)
}

/// Parse `line` into floating-point values.
///
/// An all-blank line yields `Ok(vec![])`; callers treat that as a line to
/// skip, not as an error.
pub fn parse_numeric_row(line: &str) -> Result<Vec<f64>, RowError> {
    let mut values = Vec::new();
    for (idx, token) in Tokenizer::new(line).enumerate() {
        let column = idx + 1;
        if token.is_empty() {
            return Err(RowError::EmptyToken { column });
        }
        match token.parse::<f64>() {
            Ok(v) => values.push(v),
            Err(_) => return Err(RowError::NonNumericToken { column, token }),
        }
    }
    Ok(values)
}
