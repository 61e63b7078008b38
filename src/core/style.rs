//! Bar glyph styles.

use unicode_width::UnicodeWidthChar;

use crate::core::{
    constants::{ARROW_HEAD, BOUNDARY_GLYPH},
    error::ConfigError,
};

/// Glyph set used to draw one bar.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BarStyle {
    /// Fill followed by an `>` arrow head.
    Arrow(char),
    /// Fill followed by a `|` wall.
    Plain(char),
}

/// Tokens that draw an arrow rather than a walled bar.
const ARROW_STYLES: [(char, BarStyle); 3] = [
    ('-', BarStyle::Arrow('-')),
    ('=', BarStyle::Arrow('=')),
    ('~', BarStyle::Arrow('~')),
];

impl Default for BarStyle {
    fn default() -> Self {
        Self::Arrow('~')
    }
}

impl BarStyle {
    /// Resolve a user supplied style token.
    ///
    /// The three arrow glyphs come from a fixed table, any other single
    /// printable single-cell character becomes a plain fill.
    pub fn intuit(token: &str) -> Result<Self, ConfigError> {
        let mut chars = token.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(ConfigError::InvalidStyle(token.to_owned()));
        };
        if c.is_control() || c.width() != Some(1) {
            return Err(ConfigError::InvalidStyle(token.to_owned()));
        }

        Ok(ARROW_STYLES
            .iter()
            .find_map(|&(glyph, style)| (glyph == c).then_some(style))
            .unwrap_or(Self::Plain(c)))
    }

    #[inline]
    #[must_use]
    pub fn fill(self) -> char {
        match self {
            Self::Arrow(c) | Self::Plain(c) => c,
        }
    }

    /// Leading edge drawn right after the fill.
    #[inline]
    #[must_use]
    pub fn terminator(self) -> char {
        match self {
            Self::Arrow(_) => ARROW_HEAD,
            Self::Plain(_) => BOUNDARY_GLYPH,
        }
    }

    #[inline]
    #[must_use]
    pub fn boundary(self) -> char {
        BOUNDARY_GLYPH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_tokens_resolve_from_table() {
        for token in ["-", "=", "~"] {
            let style = BarStyle::intuit(token).unwrap();
            assert!(matches!(style, BarStyle::Arrow(_)));
            assert_eq!(style.fill().to_string(), token);
            assert_eq!(style.terminator(), '>');
            assert_eq!(style.boundary(), '|');
        }
    }

    #[test]
    fn other_characters_fall_back_to_plain() {
        let style = BarStyle::intuit("#").unwrap();
        assert_eq!(style, BarStyle::Plain('#'));
        assert_eq!(style.terminator(), '|');

        assert_eq!(BarStyle::intuit("█").unwrap(), BarStyle::Plain('█'));
    }

    #[test]
    fn default_is_tilde_arrow() {
        assert_eq!(BarStyle::default(), BarStyle::Arrow('~'));
    }

    #[test]
    fn rejects_empty_multi_char_control_and_wide_tokens() {
        for token in ["", "->", "ab", "\t", "\u{301}", "漢"] {
            assert!(
                matches!(BarStyle::intuit(token), Err(ConfigError::InvalidStyle(_))),
                "{token:?} should be rejected"
            );
        }
    }
}
