//! Line-oriented record loader with zero-allocation float parsing.
//!
//! Every input line becomes at most one [`Record`]. Lines that carry a bad
//! value are collected as [`RecordError`]s instead of aborting the read.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
};

use regex::Regex;

use crate::core::error::{ConfigError, RecordError};

// --- Public Row Structs ---
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub label: String,
    pub value: f64,
    /// `value` as it was written in the input, for `%s` annotations
    pub value_text: String,
    /// 1-based physical input line
    pub line: usize,
}

/// Splits a line into fields.
#[derive(Clone, Debug, Default)]
pub enum Delimiter {
    /// Runs of whitespace.
    #[default]
    Whitespace,
    /// User pattern, compiled once.
    Pattern(Regex),
}

impl Delimiter {
    pub fn pattern(pattern: &str) -> Result<Self, ConfigError> {
        Ok(Self::Pattern(Regex::new(pattern)?))
    }

    /// Fields of `line`; trailing empty fields are dropped.
    #[must_use]
    pub fn split<'a>(&self, line: &'a str) -> Vec<&'a str> {
        match self {
            Self::Whitespace => line.split_whitespace().collect(),
            Self::Pattern(re) => {
                let mut fields: Vec<&str> = re.split(line).collect();
                while fields.last().is_some_and(|f| f.trim().is_empty()) {
                    fields.pop();
                }
                fields
            }
        }
    }
}

/// Meaning of a line that holds a single field.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LoneField {
    /// The field is the value, the line number becomes the label.
    #[default]
    Value,
    /// The field is the label (a timestamp), the line number becomes the value.
    Label,
}

/// Result of one pass over the input.
#[derive(Debug, Default)]
pub struct Ingested {
    pub records: Vec<Record>,
    pub rejected: Vec<RecordError>,
}

// --- Helpers ---
#[inline]
fn parse_value(text: &str, line: usize) -> Result<f64, RecordError> {
    let value = lexical_core::parse::<f64>(text.as_bytes()).map_err(|_| RecordError::BadValue {
        line,
        text: text.to_owned(),
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RecordError::NonFinite { line, value })
    }
}

// --- Ingest ---
const BUF_CAP: usize = 1 << 20; // 1 MiB

pub fn read_records<R: Read>(
    src: R,
    delimiter: &Delimiter,
    lone: LoneField,
) -> io::Result<Ingested> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut out = Ingested::default();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        if rdr.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        // U+2212 MINUS SIGN shows up in pasted spreadsheet data
        let text = String::from_utf8_lossy(&buf).replace('\u{2212}', "-");
        let fields = delimiter.split(text.trim_start());

        let (label, value_text) = match fields.as_slice() {
            [] => continue,
            [only] => match lone {
                LoneField::Value => (line_no.to_string(), only.trim().to_owned()),
                LoneField::Label => (only.trim().to_owned(), line_no.to_string()),
            },
            [label, value, ..] => (label.trim().to_owned(), value.trim().to_owned()),
        };

        match parse_value(&value_text, line_no) {
            Ok(value) => out.records.push(Record {
                label,
                value,
                value_text,
                line: line_no,
            }),
            Err(e) => out.rejected.push(e),
        }
    }
    Ok(out)
}

pub fn read_records_from_path(
    path: &str,
    delimiter: &Delimiter,
    lone: LoneField,
) -> io::Result<Ingested> {
    if path == "-" {
        read_records(io::stdin().lock(), delimiter, lone)
    } else {
        read_records(File::open(path)?, delimiter, lone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> Ingested {
        read_records(input.as_bytes(), &Delimiter::Whitespace, LoneField::Value).unwrap()
    }

    fn pairs(ingested: &Ingested) -> Vec<(&str, f64)> {
        ingested
            .records
            .iter()
            .map(|r| (r.label.as_str(), r.value))
            .collect()
    }

    #[test]
    fn two_columns_split_on_whitespace() {
        let got = read("a 10\nb\t20\n  c   5  extra fields\n");
        assert_eq!(pairs(&got), [("a", 10.0), ("b", 20.0), ("c", 5.0)]);
        assert!(got.rejected.is_empty());
    }

    #[test]
    fn single_column_is_labelled_by_line_number() {
        let got = read("7\n\n9\n");
        assert_eq!(pairs(&got), [("1", 7.0), ("3", 9.0)]);
        assert_eq!(got.records[1].line, 3);
    }

    #[test]
    fn blank_lines_and_crlf_are_tolerated() {
        let got = read("x 1\r\n   \r\n\ny 2\r\n");
        assert_eq!(pairs(&got), [("x", 1.0), ("y", 2.0)]);
    }

    #[test]
    fn value_spelling_is_kept() {
        let got = read("a 10.50\nb \u{2212}1e3\n7\n");
        let texts: Vec<&str> = got.records.iter().map(|r| r.value_text.as_str()).collect();
        assert_eq!(texts, ["10.50", "-1e3", "7"]);

        let got = read_records("100\n".as_bytes(), &Delimiter::Whitespace, LoneField::Label)
            .unwrap();
        assert_eq!(got.records[0].value_text, "1");
    }

    #[test]
    fn unicode_minus_is_normalised() {
        let got = read("x \u{2212}4.5\n");
        assert_eq!(pairs(&got), [("x", -4.5)]);
    }

    #[test]
    fn bad_values_are_rejected_not_fatal() {
        let got = read("a 1\nb lots\nc NaN\nd 1e400\ne 2\n");
        assert_eq!(pairs(&got), [("a", 1.0), ("e", 2.0)]);
        let lines: Vec<usize> = got.rejected.iter().map(RecordError::line).collect();
        assert_eq!(lines, [2, 3, 4]);
        assert_eq!(
            got.rejected[0],
            RecordError::BadValue {
                line: 2,
                text: "lots".into()
            }
        );
    }

    #[test]
    fn custom_delimiter_pattern() {
        let delimiter = Delimiter::pattern(r"\s*,\s*").unwrap();
        let got = read_records(
            "New York , 3\nParis,4,,\n".as_bytes(),
            &delimiter,
            LoneField::Value,
        )
        .unwrap();
        assert_eq!(pairs(&got), [("New York", 3.0), ("Paris", 4.0)]);
    }

    #[test]
    fn invalid_delimiter_pattern_is_a_config_error() {
        assert!(matches!(
            Delimiter::pattern("("),
            Err(ConfigError::InvalidDelimiter(_))
        ));
    }

    #[test]
    fn lone_timestamp_becomes_the_label() {
        let got = read_records("100\n".as_bytes(), &Delimiter::Whitespace, LoneField::Label)
            .unwrap();
        assert_eq!(pairs(&got), [("100", 1.0)]);
    }
}
