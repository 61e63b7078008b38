//! Single-pass histogram renderer:
//! - per-record transform (log scale, timestamp labels, numeric annotation)
//! - range resolution over every accepted record
//! - optional stable sort by descending value
//! - fixed-width layout so every row has the same length

use std::io::Write;

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use crate::{
    core::{
        bounds::Range,
        config::Config,
        constants::{
            BORDER_WIDTH, LABEL_SEPARATOR, MAX_BAR_WIDTH, MIN_BAR_WIDTH, NUMERIC_GUTTER,
        },
        data::Record,
        error::{HistError, RecordError},
        timestamp::local_label,
    },
    render::bar::{push_bar, push_right_aligned},
};

/// A record after every per-record transform has succeeded.
struct Row {
    label: String,
    annotation: Option<String>,
    value: f64,
    /// `value` on the display scale
    scaled: f64,
}

/// Column widths shared by all rows, in terminal cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Layout {
    pub label_width: usize,
    pub numeric_width: Option<usize>,
    /// Cells between the two boundary pipes.
    pub bar_width: usize,
}

impl Layout {
    /// Cells available to the fill; one is always taken by the terminator.
    #[inline]
    #[must_use]
    pub fn fill_cells(&self) -> usize {
        self.bar_width.saturating_sub(1)
    }

    #[inline]
    #[must_use]
    pub fn line_width(&self) -> usize {
        self.label_width
            + LABEL_SEPARATOR.len()
            + self.numeric_width.map_or(0, |w| w + NUMERIC_GUTTER)
            + BORDER_WIDTH
            + self.bar_width
    }
}

/// What a call to [`Renderer::render`] did.
#[derive(Debug, Default)]
pub struct RenderSummary {
    pub rendered: usize,
    pub rejected: Vec<RecordError>,
}

pub struct Renderer<'a> {
    config: &'a Config,
    terminal_columns: usize,
}

impl<'a> Renderer<'a> {
    /// `terminal_columns` is only consulted when the config has no width.
    #[inline]
    #[must_use]
    pub fn new(config: &'a Config, terminal_columns: usize) -> Self {
        Self {
            config,
            terminal_columns,
        }
    }

    fn prepare(&self, records: Vec<Record>, rejected: &mut Vec<RecordError>) -> Vec<Row> {
        let mut rows = Vec::with_capacity(records.len());

        for rec in records {
            let scaled = if self.config.logarithmic {
                if rec.value <= 0.0 {
                    rejected.push(RecordError::NonPositiveLog {
                        line: rec.line,
                        value: rec.value,
                    });
                    continue;
                }
                rec.value.ln()
            } else {
                rec.value
            };
            if !scaled.is_finite() {
                rejected.push(RecordError::NonFinite {
                    line: rec.line,
                    value: rec.value,
                });
                continue;
            }

            let label = if self.config.timestamp_labels {
                match local_label(&rec.label) {
                    Some(label) => label,
                    None => {
                        rejected.push(RecordError::BadTimestamp {
                            line: rec.line,
                            text: rec.label,
                        });
                        continue;
                    }
                }
            } else {
                rec.label
            };

            let annotation = self
                .config
                .numeric_format
                .as_ref()
                .map(|f| f.format_with_text(rec.value, &rec.value_text));

            rows.push(Row {
                label,
                annotation,
                value: rec.value,
                scaled,
            });
        }
        rows
    }

    fn layout(&self, rows: &[Row]) -> Layout {
        let label_width = rows
            .iter()
            .map(|r| r.label.width())
            .max()
            .unwrap_or(0);
        let numeric_width = self.config.numeric_format.as_ref().map(|_| {
            rows.iter()
                .filter_map(|r| r.annotation.as_deref())
                .map(UnicodeWidthStr::width)
                .max()
                .unwrap_or(0)
        });

        let reserved = label_width
            + LABEL_SEPARATOR.len()
            + numeric_width.map_or(0, |w| w + NUMERIC_GUTTER)
            + BORDER_WIDTH;
        let bar_width = self
            .config
            .width
            .unwrap_or_else(|| self.terminal_columns.saturating_sub(reserved))
            .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);

        Layout {
            label_width,
            numeric_width,
            bar_width,
        }
    }

    fn compose(&self, buf: &mut String, row: &Row, range: &Range, layout: &Layout) {
        push_right_aligned(buf, &row.label, layout.label_width);
        buf.push_str(LABEL_SEPARATOR);
        if let (Some(width), Some(annotation)) = (layout.numeric_width, &row.annotation) {
            push_right_aligned(buf, annotation, width);
            buf.push(' ');
        }
        let cells = range.cells(row.scaled, layout.fill_cells());
        push_bar(buf, self.config.style, cells, layout.bar_width);
    }

    /// Main render entry. Writes one line per accepted record to `out`.
    pub fn render<W: Write>(
        &self,
        records: Vec<Record>,
        out: &mut W,
    ) -> Result<RenderSummary, HistError> {
        let mut summary = RenderSummary::default();
        let mut rows = self.prepare(records, &mut summary.rejected);

        let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
        let range = Range::resolve(&values, self.config);

        if self.config.sort_by_value {
            // stable: ties keep input order
            rows.sort_by(|a, b| b.value.total_cmp(&a.value));
        }

        let layout = self.layout(&rows);
        debug!(
            lo = range.lo,
            hi = range.hi,
            rows = rows.len(),
            ?layout,
            "histogram layout resolved"
        );

        let mut line = String::with_capacity(layout.line_width() * 4 + 1);
        for row in &rows {
            line.clear();
            self.compose(&mut line, row, &range, &layout);
            line.push('\n');
            out.write_all(line.as_bytes())?;
            summary.rendered += 1;
        }
        Ok(summary)
    }
}
