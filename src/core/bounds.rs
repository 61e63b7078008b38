//! Geometry helpers: value range + terminal size plumbing.

use terminal_size::{Width, terminal_size};

use crate::core::{
    config::{Config, MaxMode, MinMode},
    constants::FALLBACK_TERMINAL_COLUMNS,
};

/// The `(lo, hi)` interval bars are normalised against, already on the
/// display scale (natural log under `--log`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub lo: f64,
    pub hi: f64,
}

impl Range {
    /// Resolve both bounds from the raw (untransformed) values.
    ///
    /// * An empty data set gives `(0, 0)`, which renders nothing anyway.
    /// * Under logarithmic scale every bound is passed through `ln`, the
    ///   caller guarantees that the values are positive.
    #[must_use]
    pub fn resolve(values: &[f64], config: &Config) -> Self {
        if values.is_empty() {
            return Self { lo: 0.0, hi: 0.0 };
        }

        let (mut low, mut high, mut sum) = (f64::INFINITY, f64::NEG_INFINITY, 0.0);
        for &v in values {
            low = low.min(v);
            high = high.max(v);
            sum += v;
        }

        let hi = match config.max {
            MaxMode::Explicit(v) => v,
            MaxMode::Total => sum,
            MaxMode::Auto => high,
        };
        let lo = match config.min {
            MinMode::Explicit(v) => v,
            MinMode::Auto => low,
            MinMode::Zero => 0.0,
        };

        if config.logarithmic {
            Self {
                lo: lo.ln(),
                hi: hi.ln(),
            }
        } else {
            Self { lo, hi }
        }
    }

    /// Position of `x` inside the range, clamped to `[0, 1]`.
    ///
    /// A collapsed or inverted range maps everything to 0.
    #[inline]
    #[must_use]
    pub fn ratio(&self, x: f64) -> f64 {
        let span = self.hi - self.lo;
        if span <= 0.0 || !span.is_finite() {
            return 0.0;
        }
        ((x - self.lo) / span).clamp(0.0, 1.0)
    }

    /// Number of fill cells for `x` out of `cells`.
    ///
    /// Values strictly inside the range never round onto either edge.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn cells(&self, x: f64, cells: usize) -> usize {
        let r = self.ratio(x);
        let n = (r * cells as f64).round() as usize;
        if r > 0.0 && r < 1.0 && cells >= 2 {
            n.clamp(1, cells - 1)
        } else {
            n.min(cells)
        }
    }
}

/// Current terminal width in columns (80 fallback).
#[inline]
#[must_use]
pub fn terminal_columns() -> usize {
    terminal_size().map_or(FALLBACK_TERMINAL_COLUMNS, |(Width(w), _)| usize::from(w))
}
