//! printf-style numeric annotations (`%d`, `%u`, `%.2f`, `%e`, `%s`, ...).
//!
//! A template holds literal text around exactly one conversion. Supported
//! flags are `-` (left align), `+`, space and `0`, followed by an optional
//! width and `.precision`. `%%` is a literal percent sign.

use std::{iter::Peekable, str::Chars};

use crate::core::error::ConfigError;

/// Default precision of `%f` and `%e`, as in C.
const DEFAULT_PRECISION: usize = 6;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Flags {
    left: bool,
    plus: bool,
    space: bool,
    zero: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Conversion {
    /// `%d`, `%i`: truncated toward zero.
    Signed,
    /// `%u`: truncated toward zero, negatives clamp to 0.
    Unsigned,
    /// `%f`
    Fixed,
    /// `%e`
    Exponent,
    /// `%s`: shortest round-trip representation of the value.
    Text,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Spec {
    flags: Flags,
    width: usize,
    precision: Option<usize>,
    conversion: Conversion,
}

/// Parsed annotation template.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NumericFormat {
    prefix: String,
    spec: Spec,
    suffix: String,
}

impl NumericFormat {
    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        let err = |reason| ConfigError::InvalidNumericFormat {
            template: template.to_owned(),
            reason,
        };

        let mut prefix = String::new();
        let mut suffix = String::new();
        let mut spec = None;
        let mut chars = template.chars().peekable();

        while let Some(c) = chars.next() {
            let literal = if spec.is_some() {
                &mut suffix
            } else {
                &mut prefix
            };
            if c != '%' {
                literal.push(c);
                continue;
            }
            if chars.peek() == Some(&'%') {
                chars.next();
                literal.push('%');
                continue;
            }
            if spec.is_some() {
                return Err(err("more than one conversion"));
            }
            spec = Some(Spec::parse(&mut chars).ok_or_else(|| err("unsupported conversion"))?);
        }

        Ok(Self {
            prefix,
            spec: spec.ok_or_else(|| err("no conversion"))?,
            suffix,
        })
    }

    /// Render `value` through the template. `%s` prints the shortest
    /// round-trip form of the value.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        self.format_with_text(value, &value.to_string())
    }

    /// Like [`format`](Self::format), but `%s` prints `text`, the value as
    /// it was written in the input.
    #[must_use]
    pub fn format_with_text(&self, value: f64, text: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + self.suffix.len() + 16);
        out.push_str(&self.prefix);
        self.spec.write(&mut out, value, text);
        out.push_str(&self.suffix);
        out
    }
}

impl Spec {
    fn parse(chars: &mut Peekable<Chars<'_>>) -> Option<Self> {
        let mut flags = Flags::default();
        while let Some(&c) = chars.peek() {
            match c {
                '-' => flags.left = true,
                '+' => flags.plus = true,
                ' ' => flags.space = true,
                '0' => flags.zero = true,
                _ => break,
            }
            chars.next();
        }

        let width = digits(chars).unwrap_or(0);
        let precision = if chars.peek() == Some(&'.') {
            chars.next();
            Some(digits(chars).unwrap_or(0))
        } else {
            None
        };

        let conversion = match chars.next()? {
            'd' | 'i' => Conversion::Signed,
            'u' => Conversion::Unsigned,
            'f' | 'F' => Conversion::Fixed,
            'e' => Conversion::Exponent,
            's' => Conversion::Text,
            _ => return None,
        };

        Some(Self {
            flags,
            width,
            precision,
            conversion,
        })
    }

    fn write(&self, out: &mut String, value: f64, text: &str) {
        let precision = self.precision.unwrap_or(DEFAULT_PRECISION);
        // integer digits come from the float itself, no u64 range limit
        let (negative, body) = match self.conversion {
            Conversion::Signed => {
                let t = value.trunc();
                (t < 0.0, format!("{:.0}", t.abs()))
            }
            Conversion::Unsigned => (false, format!("{:.0}", value.max(0.0).trunc().abs())),
            Conversion::Fixed => (value < 0.0, format!("{:.*}", precision, value.abs())),
            Conversion::Exponent => (value < 0.0, exponent(value.abs(), precision)),
            Conversion::Text => {
                let text: String = match self.precision {
                    Some(p) => text.chars().take(p).collect(),
                    None => text.to_owned(),
                };
                pad(out, "", &text, self.width, self.flags.left, false);
                return;
            }
        };

        let sign = if negative {
            "-"
        } else if self.flags.plus {
            "+"
        } else if self.flags.space {
            " "
        } else {
            ""
        };
        pad(out, sign, &body, self.width, self.flags.left, self.flags.zero);
    }
}

fn digits(chars: &mut Peekable<Chars<'_>>) -> Option<usize> {
    let mut n: Option<usize> = None;
    while let Some(d) = chars.peek().and_then(|c| c.to_digit(10)) {
        n = Some(n.unwrap_or(0).saturating_mul(10).saturating_add(d as usize));
        chars.next();
    }
    n
}

/// C style exponent: at least two exponent digits and an explicit sign.
fn exponent(v: f64, precision: usize) -> String {
    let raw = format!("{v:.precision$e}");
    let Some((mantissa, exp)) = raw.split_once('e') else {
        return raw;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.abs())
}

fn pad(out: &mut String, sign: &str, body: &str, width: usize, left: bool, zero: bool) {
    let len = sign.len() + body.chars().count();
    let fill = width.saturating_sub(len);
    if left {
        out.push_str(sign);
        out.push_str(body);
        out.extend(std::iter::repeat_n(' ', fill));
    } else if zero {
        out.push_str(sign);
        out.extend(std::iter::repeat_n('0', fill));
        out.push_str(body);
    } else {
        out.extend(std::iter::repeat_n(' ', fill));
        out.push_str(sign);
        out.push_str(body);
    }
}
