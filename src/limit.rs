//! The user-supplied number of cat facts to request.

use std::fmt;

use tracing::debug;

use crate::error::LimitParseError;

/// Number of cat facts to request, always within [`Limit::MIN`]..=[`Limit::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(u8);

impl Limit {
    /// Smallest accepted limit.
    pub const MIN: u8 = 1;
    /// Largest accepted limit.
    pub const MAX: u8 = 10;
    /// Limit used when the form value is missing or rejected.
    pub const DEFAULT: Limit = Limit(5);

    /// Parse a raw form value.
    ///
    /// Surrounding whitespace, a leading sign and single underscores between
    /// digits (`1_0`) are accepted; anything else must be decimal digits.
    pub fn parse(raw: &str) -> Result<Self, LimitParseError> {
        let value =
            parse_integer(raw).ok_or_else(|| LimitParseError::NotANumber(raw.to_string()))?;

        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Limit(value as u8))
        } else {
            Err(LimitParseError::OutOfRange {
                value,
                min: Self::MIN,
                max: Self::MAX,
            })
        }
    }

    /// Resolve an optional form value, falling back to [`Limit::DEFAULT`].
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(Self::parse) {
            Some(Ok(limit)) => limit,
            Some(Err(e)) => {
                debug!(error = %e, "Rejected limit, using default");
                Self::DEFAULT
            }
            None => Self::DEFAULT,
        }
    }

    /// The limit as a plain integer.
    pub fn get(self) -> u8 {
        self.0
    }
}

/// Decimal integer with optional sign and digit-group underscores.
fn parse_integer(raw: &str) -> Option<i64> {
    let text = raw.trim();
    let (sign, digits) = match text.strip_prefix(|c: char| c == '+' || c == '-') {
        Some(rest) => (&text[..1], rest),
        None => ("", text),
    };

    if digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return None;
    }
    if !digits.chars().all(|c| c.is_ascii_digit() || c == '_') {
        return None;
    }

    format!("{sign}{}", digits.replace('_', "")).parse().ok()
}

impl Default for Limit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
