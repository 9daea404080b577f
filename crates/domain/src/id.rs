//! Typed person identifier backed by a signed 64-bit integer.

use std::fmt;
use std::str::FromStr;

use crate::error::ParsePersonIdError;

/// Unique identifier for a [`Person`](crate::person::Person).
///
/// Backed by `i64`, the native `SQLite` integer primary key range. The
/// identifier deliberately implements neither `Serialize` nor
/// `Deserialize`: it never travels in a JSON body, only in URL paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonId(i64);

impl PersonId {
    /// Wrap a raw integer identifier.
    #[must_use]
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Access the inner integer.
    #[must_use]
    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for PersonId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for PersonId {
    type Err = ParsePersonIdError;

    /// Parse a decimal digit literal.
    ///
    /// Anything containing a non-digit byte (including the empty string and
    /// signed literals) is [`ParsePersonIdError::NonNumeric`]; an all-digit
    /// literal above `i64::MAX` is [`ParsePersonIdError::OutOfRange`]. The
    /// two cases surface differently on the HTTP side, so the distinction
    /// matters.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParsePersonIdError::NonNumeric);
        }
        s.parse::<i64>()
            .map(Self)
            .map_err(|_| ParsePersonIdError::OutOfRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_decimal_digits() {
        let id: PersonId = "42".parse().unwrap();
        assert_eq!(id, PersonId::new(42));
    }

    #[test]
    fn should_parse_largest_supported_identifier() {
        let id: PersonId = "9223372036854775807".parse().unwrap();
        assert_eq!(id.get(), i64::MAX);
    }

    #[test]
    fn should_report_out_of_range_when_digits_overflow() {
        let err = PersonId::from_str("9223372036854775808").unwrap_err();
        assert_eq!(err, ParsePersonIdError::OutOfRange);
    }

    #[test]
    fn should_report_non_numeric_when_segment_has_other_bytes() {
        for raw in ["abc", "12a", "1.5", "-1", "+1", ""] {
            let err = PersonId::from_str(raw).unwrap_err();
            assert_eq!(err, ParsePersonIdError::NonNumeric, "input: {raw:?}");
        }
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = PersonId::new(7);
        let text = id.to_string();
        let parsed: PersonId = text.parse().unwrap();
        assert_eq!(id, parsed);
    }
}
