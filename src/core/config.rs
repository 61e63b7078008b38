//! Run-time configuration object + fluent builder.

use std::str::FromStr;

use crate::core::{
    constants::{MAX_BAR_WIDTH, MIN_BAR_WIDTH},
    error::ConfigError, format::NumericFormat, style::BarStyle,
};

/// Lower bound of the displayed range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MinMode {
    #[default]
    Zero,
    /// Smallest value in the data set.
    Auto,
    Explicit(f64),
}

/// Upper bound of the displayed range.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum MaxMode {
    /// Largest value in the data set.
    #[default]
    Auto,
    /// Sum of all values, so every bar shows its share of the whole.
    Total,
    Explicit(f64),
}

fn parse_bound(
    s: &str,
    bound: &'static str,
    expected: &'static str,
) -> Result<f64, ConfigError> {
    match lexical_core::parse::<f64>(s.trim().as_bytes()) {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ConfigError::InvalidBound {
            bound,
            text: s.to_owned(),
            expected,
        }),
    }
}

impl FromStr for MinMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "a number or `auto`";
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        parse_bound(s, "min", EXPECTED).map(Self::Explicit)
    }
}

impl FromStr for MaxMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "a number, `auto` or `total`";
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "total" => Ok(Self::Total),
            _ => parse_bound(s, "max", EXPECTED).map(Self::Explicit),
        }
    }
}

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct Config {
    pub sort_by_value: bool,
    pub min: MinMode,
    pub max: MaxMode,
    /// Cells between the two boundary pipes; `None` fills the terminal.
    pub width: Option<usize>,
    pub style: BarStyle,
    pub numeric_format: Option<NumericFormat>,
    pub timestamp_labels: bool,
    pub logarithmic: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sort_by_value: false,
            min: MinMode::Zero,
            max: MaxMode::Auto,
            width: None,
            style: BarStyle::default(),
            numeric_format: None,
            timestamp_labels: false,
            logarithmic: false,
        }
    }
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Fluent builder; every fallible check runs in `build`.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    sort_by_value: bool,
    min: Option<MinMode>,
    max: Option<MaxMode>,
    width: Option<usize>,
    style: Option<String>,
    numeric_format: Option<String>,
    timestamp_labels: bool,
    logarithmic: bool,
}

impl ConfigBuilder {
    #[inline]
    #[must_use]
    pub fn sort_by_value(mut self, on: bool) -> Self {
        self.sort_by_value = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn min(mut self, m: MinMode) -> Self {
        self.min = Some(m);
        self
    }
    #[inline]
    #[must_use]
    pub fn min_opt(mut self, m: Option<MinMode>) -> Self {
        if m.is_some() {
            self.min = m;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn max(mut self, m: MaxMode) -> Self {
        self.max = Some(m);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_opt(mut self, m: Option<MaxMode>) -> Self {
        if m.is_some() {
            self.max = m;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn width(mut self, w: usize) -> Self {
        self.width = Some(w);
        self
    }
    #[inline]
    #[must_use]
    pub fn width_opt(mut self, w: Option<usize>) -> Self {
        if w.is_some() {
            self.width = w;
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn style(mut self, token: impl Into<String>) -> Self {
        self.style = Some(token.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn numeric_format(mut self, template: impl Into<String>) -> Self {
        self.numeric_format = Some(template.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn numeric_format_opt(mut self, template: Option<&str>) -> Self {
        if let Some(t) = template {
            self.numeric_format = Some(t.to_owned());
        }
        self
    }
    #[inline]
    #[must_use]
    pub fn timestamp_labels(mut self, on: bool) -> Self {
        self.timestamp_labels = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn logarithmic(mut self, on: bool) -> Self {
        self.logarithmic = on;
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let style = match &self.style {
            Some(token) => BarStyle::intuit(token)?,
            None => BarStyle::default(),
        };

        if let Some(width) = self.width {
            if !(MIN_BAR_WIDTH..=MAX_BAR_WIDTH).contains(&width) {
                return Err(ConfigError::InvalidWidth {
                    width,
                    min: MIN_BAR_WIDTH,
                    max: MAX_BAR_WIDTH,
                });
            }
        }

        let numeric_format = self
            .numeric_format
            .as_deref()
            .map(NumericFormat::parse)
            .transpose()?;

        // log(0) is undefined, so an unset minimum follows the data instead
        let min = self.min.unwrap_or(if self.logarithmic {
            MinMode::Auto
        } else {
            MinMode::Zero
        });
        let max = self.max.unwrap_or_default();

        if self.logarithmic {
            match min {
                MinMode::Zero => {
                    return Err(ConfigError::NonPositiveLogBound {
                        bound: "min",
                        value: 0.0,
                    });
                }
                MinMode::Explicit(value) if value <= 0.0 => {
                    return Err(ConfigError::NonPositiveLogBound {
                        bound: "min",
                        value,
                    });
                }
                _ => {}
            }
            if let MaxMode::Explicit(value) = max {
                if value <= 0.0 {
                    return Err(ConfigError::NonPositiveLogBound {
                        bound: "max",
                        value,
                    });
                }
            }
        }

        Ok(Config {
            sort_by_value: self.sort_by_value,
            min,
            max,
            width: self.width,
            style,
            numeric_format,
            timestamp_labels: self.timestamp_labels,
            logarithmic: self.logarithmic,
        })
    }
}
