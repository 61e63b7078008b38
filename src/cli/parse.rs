use clap::Parser;

use crate::core::config::{MaxMode, MinMode};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "histogram",
    version,
    about = "Render (label, value) records as an ASCII bar-chart histogram",
    after_help = "Run with --man for the full manual."
)]
pub struct Cli {
    /// Input path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Sort rows by descending value
    #[arg(long)]
    pub sort: bool,

    /// Lower bound: a number or `auto` (0 if omitted, `auto` with --log)
    #[arg(long, value_name = "NUMBER|auto", allow_hyphen_values = true)]
    pub min: Option<MinMode>,
    /// Upper bound: a number, `auto` or `total` (auto if omitted)
    #[arg(long, value_name = "NUMBER|auto|total", allow_hyphen_values = true)]
    pub max: Option<MaxMode>,

    /// Width of the bar field (fills the terminal if omitted)
    #[arg(short, long, value_name = "COLUMNS")]
    pub width: Option<usize>,

    /// Column delimiter regex (runs of whitespace if omitted)
    #[arg(short, long, value_name = "REGEX", allow_hyphen_values = true)]
    pub delimiter: Option<String>,

    /// printf-style format of a value column, e.g. `%d` or `%.2f`
    #[arg(
        long = "numeric-format",
        visible_alias = "nf",
        value_name = "FORMAT",
        allow_hyphen_values = true
    )]
    pub numeric_format: Option<String>,

    /// Bar fill character; `-`, `=` and `~` draw arrows
    #[arg(
        long,
        value_name = "CHAR",
        default_value = "~",
        allow_hyphen_values = true
    )]
    pub style: String,

    /// Labels are Unix timestamps, print them as local date-times
    #[arg(long, visible_alias = "ts")]
    pub timestamp: bool,

    /// Logarithmic scale
    #[arg(long)]
    pub log: bool,

    /// Print the full manual and exit
    #[arg(long)]
    pub man: bool,

    /// Emit diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("histogram").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&[]);
        assert_eq!(cli.file, "-");
        assert_eq!(cli.style, "~");
        assert!(cli.min.is_none() && cli.max.is_none() && cli.width.is_none());
        assert!(!cli.sort && !cli.log && !cli.timestamp && !cli.man);
    }

    #[test]
    fn aliases_and_bounds() {
        let cli = parse(&[
            "--nf", "%d", "--ts", "-w", "30", "-d", ",", "--min", "-5", "--max", "total",
            "--style", "-", "data.txt",
        ]);
        assert_eq!(cli.numeric_format.as_deref(), Some("%d"));
        assert!(cli.timestamp);
        assert_eq!(cli.width, Some(30));
        assert_eq!(cli.delimiter.as_deref(), Some(","));
        assert_eq!(cli.min, Some(MinMode::Explicit(-5.0)));
        assert_eq!(cli.max, Some(MaxMode::Total));
        assert_eq!(cli.style, "-");
        assert_eq!(cli.file, "data.txt");
    }

    #[test]
    fn bad_bound_is_a_usage_error() {
        let argv = ["histogram", "--max", "plenty"];
        assert!(Cli::try_parse_from(argv).is_err());
    }
}
