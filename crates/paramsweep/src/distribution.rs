//! Spaced value-sequence generators.
//!
//! Besides plain comma-separated lists, a values text may describe a
//! generated sequence:
//!
//! - range notation `START-END:COUNT` — linearly spaced;
//! - `linear:START-END:COUNT` — same, explicit;
//! - `log:START-END:COUNT[:BASE]` — logarithmically spaced (base 10 default);
//! - `exp:START-END:COUNT` — exponential growth from start to end.
//!
//! Generated values are rounded to four decimal places.

use crate::{SweepError, SweepResult};

/// Default base for logarithmic spacing.
pub const DEFAULT_LOG_BASE: f64 = 10.0;

/// Generate `count` equally spaced values from `start` to `end` inclusive.
///
/// A count of zero or one yields `[start]`.
pub fn linear_spaced(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count).map(|i| start + step * i as f64).collect()
}

/// Generate `count` logarithmically spaced values from `start` to `end`.
///
/// Fails with [`SweepError::InvalidValues`] when either bound is not
/// strictly positive.
pub fn log_spaced(start: f64, end: f64, count: usize, base: f64) -> SweepResult<Vec<f64>> {
    if count <= 1 {
        return Ok(vec![start]);
    }
    if start <= 0.0 || end <= 0.0 {
        return Err(SweepError::invalid_values(format!(
            "logarithmic spacing requires positive bounds ({start}-{end})"
        )));
    }
    let log_start = start.log(base);
    let log_end = end.log(base);
    let step = (log_end - log_start) / (count - 1) as f64;
    Ok((0..count)
        .map(|i| base.powf(log_start + step * i as f64))
        .collect())
}

/// Generate `count` values growing exponentially from `start` to `end`.
///
/// Solves `y = start * r^i` such that the last value equals `end`.
pub fn exp_spaced(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![start];
    }
    let growth = (end / start).powf(1.0 / (count - 1) as f64);
    (0..count).map(|i| start * growth.powi(i as i32)).collect()
}

/// Try to interpret `input` as generator notation.
///
/// Returns `Ok(None)` when the input does not look like a notation at all
/// (the caller falls back to comma-separated parsing), and an error when a
/// recognized notation is malformed or produces non-finite values.
pub(crate) fn parse_notation(input: &str) -> SweepResult<Option<Vec<f64>>> {
    if let Some((kind, rest)) = input.split_once(':') {
        if matches!(kind, "linear" | "log" | "exp") {
            let Some((start, end, count, base)) = split_range_spec(rest) else {
                return Err(SweepError::invalid_values(input));
            };
            let values = match kind {
                "log" => log_spaced(start, end, count, base.unwrap_or(DEFAULT_LOG_BASE))?,
                "exp" => exp_spaced(start, end, count),
                _ => linear_spaced(start, end, count),
            };
            return finite_rounded(values, input).map(Some);
        }
    }

    // Bare range notation: "1-10:5" (no base suffix).
    if let Some((start, end, count, None)) = split_range_spec(input) {
        return finite_rounded(linear_spaced(start, end, count), input).map(Some);
    }

    Ok(None)
}

/// Split `START-END:COUNT[:BASE]` into its parts.
///
/// Bounds and base accept unsigned decimals only, matching the notation
/// grammar; anything else is not a range spec.
fn split_range_spec(spec: &str) -> Option<(f64, f64, usize, Option<f64>)> {
    let (range, tail) = spec.split_once(':')?;
    let (count_text, base_text) = match tail.split_once(':') {
        Some((count, base)) => (count, Some(base)),
        None => (tail, None),
    };

    let (start_text, end_text) = range.split_once('-')?;
    let start = unsigned_decimal(start_text)?;
    let end = unsigned_decimal(end_text)?;

    if count_text.is_empty() || !count_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let count: usize = count_text.parse().ok()?;

    let base = match base_text {
        Some(text) => Some(unsigned_decimal(text)?),
        None => None,
    };

    Some((start, end, count, base))
}

fn unsigned_decimal(text: &str) -> Option<f64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    text.parse().ok()
}

fn finite_rounded(values: Vec<f64>, input: &str) -> SweepResult<Vec<f64>> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(SweepError::invalid_values(input));
    }
    Ok(values.into_iter().map(round4).collect())
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
