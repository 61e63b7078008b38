use std::{
    io::{self, BufWriter, Write},
    time::Instant,
};

use tracing::{debug, warn};

use crate::{
    core::{
        bounds::terminal_columns,
        config::Config,
        data::{Delimiter, read_records_from_path},
        error::HistError,
    },
    lone_field, render_ingested,
};

use super::parse::Cli;

pub fn histogram(a: &Cli) -> Result<(), HistError> {
    // everything fallible about the configuration fails before any output
    let cfg = Config::builder()
        .sort_by_value(a.sort)
        .min_opt(a.min)
        .max_opt(a.max)
        .width_opt(a.width)
        .style(a.style.as_str())
        .numeric_format_opt(a.numeric_format.as_deref())
        .timestamp_labels(a.timestamp)
        .logarithmic(a.log)
        .build()?;
    let delimiter = match &a.delimiter {
        Some(pattern) => Delimiter::pattern(pattern)?,
        None => Delimiter::Whitespace,
    };

    let t_ingest = Instant::now();
    let ingested = read_records_from_path(&a.file, &delimiter, lone_field(&cfg))?;
    debug!(
        records = ingested.records.len(),
        rejected = ingested.rejected.len(),
        elapsed = ?t_ingest.elapsed(),
        "input read"
    );

    let columns = terminal_columns();
    let mut out = BufWriter::new(io::stdout().lock());
    let summary = render_ingested(ingested, &cfg, columns, &mut out)?;
    out.flush()?;

    for e in &summary.rejected {
        warn!("skipped record: {e}");
    }
    debug!(
        rendered = summary.rendered,
        skipped = summary.rejected.len(),
        columns,
        "histogram complete"
    );
    Ok(())
}

/// Print the long-form manual.
pub fn manual() {
    let bin = "histogram";
    println!(
        "\
NAME
    {bin} - render (label, value) records as an ASCII bar-chart histogram

SYNOPSIS
    {bin} [OPTIONS] [FILE]

DESCRIPTION
    Reads one record per line from FILE (or standard input when FILE is `-`
    or omitted) and prints one bar per record.

    A line with two or more fields is `label value [ignored...]`. A line with
    a single field is a value labelled by its line number; with --timestamp
    the single field is the timestamp and the line number is the value.
    Blank lines are skipped. Records whose value is not a finite number are
    skipped with a warning on stderr.

OPTIONS
    --sort                 Sort rows by descending value (ties keep input order)
    --min NUMBER|auto      Lower bound of the scale (default 0, auto with --log)
    --max NUMBER|auto|total
                           Upper bound; `total` scales against the sum
    -w, --width COLUMNS    Width of the bar field, pipes excluded
    -d, --delimiter REGEX  Field separator (default: runs of whitespace)
    --nf, --numeric-format FORMAT
                           Show the value with a printf format:
                           %d %i %u %f %.2f %e, flags - + 0 and space;
                           %s prints the value as written in the input
    --style CHAR           Fill character. `-` `=` `~` draw arrows (---->),
                           anything else a walled bar (####|)
    --ts, --timestamp      Labels are Unix timestamps, shown in local time
    --log                  Logarithmic scale; values <= 0 are skipped
    -v, --verbose          Diagnostics on stderr (RUST_LOG also honoured)
    --man                  This manual
    -h, --help             Short help

EXAMPLES
    printf 'a 10\\nb 20\\nc 5\\n' | {bin}
    du -s * | awk '{{print $2, $1}}' | {bin} --sort --nf %d
    {bin} --log --max total -d , counts.csv

EXIT STATUS
    0 on success, 1 on configuration or I/O errors, 2 on usage errors.
"
    );
}
