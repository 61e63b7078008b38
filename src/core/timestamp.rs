//! Unix timestamp labels rendered in local time.

use chrono::{DateTime, Local};

use crate::core::constants::TIMESTAMP_FORMAT;

/// Interpret `label` as seconds since the epoch (fractions allowed) and
/// render it in the local timezone. `None` when it is not a timestamp.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn local_label(label: &str) -> Option<String> {
    let secs = lexical_core::parse::<f64>(label.trim().as_bytes()).ok()?;
    if !secs.is_finite() || secs.abs() >= i64::MAX as f64 {
        return None;
    }
    let whole = secs.floor();
    let nanos = ((secs - whole) * 1e9) as u32;
    let utc = DateTime::from_timestamp(whole as i64, nanos.min(999_999_999))?;
    Some(
        utc.with_timezone(&Local)
            .format(TIMESTAMP_FORMAT)
            .to_string(),
    )
}
