//! Value-list parsing.

use crate::distribution::parse_notation;
use crate::{SweepError, SweepResult};

/// Parse a values text into an ordered list of numbers.
///
/// Generator notations (see [`crate::distribution`]) are tried first;
/// otherwise the text is treated as a comma-separated list. Segments are
/// trimmed and empty segments are discarded, so trailing or repeated commas
/// are tolerated. Any remaining segment that does not parse as a finite
/// number fails with [`SweepError::InvalidValues`] carrying the offending
/// text.
///
/// Whitespace-only input yields an empty list; callers treat that as "this
/// parameter is not active", never as a single empty combination.
///
/// # Examples
///
/// ```
/// use paramsweep::parse_values;
///
/// assert_eq!(parse_values("1, , 2,").unwrap(), vec![1.0, 2.0]);
/// assert_eq!(parse_values("0-10:5").unwrap(), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
/// assert!(parse_values("1,x,2").is_err());
/// ```
pub fn parse_values(text: &str) -> SweepResult<Vec<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    if let Some(values) = parse_notation(text)? {
        return Ok(values);
    }

    let mut values = Vec::new();
    for segment in text.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        let value: f64 = segment
            .parse()
            .map_err(|_| SweepError::invalid_values(segment))?;
        if !value.is_finite() {
            return Err(SweepError::invalid_values(segment));
        }
        values.push(value);
    }
    Ok(values)
}
