//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

use std::io::{Read, Write};

pub use crate::core::{
    bounds::{Range, terminal_columns},
    config::{Config, ConfigBuilder, MaxMode, MinMode},
    data::{Delimiter, Ingested, LoneField, Record, read_records},
    error::{ConfigError, HistError, RecordError},
    format::NumericFormat,
    style::BarStyle,
};

pub use render::{Layout, RenderSummary, Renderer};

/// Read records from `src` and render them to `out` in one go.
///
/// Records rejected while reading and while rendering are both reported in
/// the returned summary, in that order.
pub fn render_histogram<R: Read, W: Write>(
    src: R,
    delimiter: &Delimiter,
    config: &Config,
    terminal_columns: usize,
    out: &mut W,
) -> Result<RenderSummary, HistError> {
    let ingested = read_records(src, delimiter, lone_field(config))?;
    render_ingested(ingested, config, terminal_columns, out)
}

/// Render records that were already read.
pub fn render_ingested<W: Write>(
    ingested: Ingested,
    config: &Config,
    terminal_columns: usize,
    out: &mut W,
) -> Result<RenderSummary, HistError> {
    let Ingested {
        records,
        mut rejected,
    } = ingested;
    let mut summary = Renderer::new(config, terminal_columns).render(records, out)?;
    rejected.append(&mut summary.rejected);
    summary.rejected = rejected;
    Ok(summary)
}

/// A lone field is a timestamp when labels are timestamps, a value otherwise.
#[inline]
#[must_use]
pub fn lone_field(config: &Config) -> LoneField {
    if config.timestamp_labels {
        LoneField::Label
    } else {
        LoneField::Value
    }
}
