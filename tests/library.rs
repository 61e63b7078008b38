use bar_histogram::{Config, Delimiter, MaxMode, MinMode, RecordError, render_histogram};

fn render(config: &Config, columns: usize, input: &str) -> (Vec<String>, Vec<RecordError>) {
    let mut out = Vec::new();
    let summary = render_histogram(
        input.as_bytes(),
        &Delimiter::Whitespace,
        config,
        columns,
        &mut out,
    )
    .unwrap();
    let lines: Vec<String> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect();
    assert_eq!(lines.len(), summary.rendered);
    (lines, summary.rejected)
}

fn fill(line: &str) -> usize {
    line.matches('~').count()
}

#[test]
fn rejects_from_reading_and_rendering_are_reported_in_order() {
    let cfg = Config::builder().logarithmic(true).build().unwrap();
    let (lines, rejected) = render(&cfg, 40, "a 0\nb oops\nc 3\n");
    assert_eq!(lines.len(), 1);
    let lines: Vec<usize> = rejected.iter().map(RecordError::line).collect();
    assert_eq!(lines, [2, 1]);
}

#[test]
fn interior_values_are_strictly_inside_and_monotonic() {
    let cfg = Config::builder()
        .width(11)
        .min(MinMode::Explicit(0.0))
        .max(MaxMode::Explicit(100.0))
        .build()
        .unwrap();
    let input: String = (1..100).map(|v| format!("v {v}\n")).collect();
    let (lines, _) = render(&cfg, 80, &input);

    let mut last = 0;
    for line in &lines {
        let n = fill(line);
        assert!(n > 0 && n < 10, "{line:?}");
        assert!(n >= last);
        last = n;
    }
}

#[test]
fn every_line_has_the_same_width() {
    let cfg = Config::builder().numeric_format("%+.3f").build().unwrap();
    let (lines, _) = render(&cfg, 100, "x 1\nmedium -4.5\nvery-long-label 1000\n 7\n");
    let widths: Vec<usize> = lines.iter().map(|l| l.chars().count()).collect();
    assert_eq!(widths, [100, 100, 100, 100]);
}

#[test]
fn sorted_rows_never_increase() {
    let cfg = Config::builder().sort_by_value(true).width(30).build().unwrap();
    let (lines, _) = render(&cfg, 80, "a 3\nb 17\nc 9\nd 17\ne 1\n");
    let labels: Vec<&str> = lines.iter().map(|l| &l[..1]).collect();
    assert_eq!(labels, ["b", "d", "c", "a", "e"]);
    let fills: Vec<usize> = lines.iter().map(|l| fill(l)).collect();
    assert!(fills.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn values_outside_an_explicit_range_are_clamped() {
    let cfg = Config::builder()
        .width(6)
        .min(MinMode::Explicit(10.0))
        .max(MaxMode::Explicit(20.0))
        .build()
        .unwrap();
    let (lines, _) = render(&cfg, 80, "lo 2\nhi 50\n");
    assert_eq!(lines, ["lo: |>     |", "hi: |~~~~~>|"]);
}
