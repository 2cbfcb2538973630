//! Validated column count.
//!
//! A column count is always at least one. The raw constructor is never exported;
//! use [`ColumnCount::new`], `TryFrom` or `FromStr`.

use super::error::LayoutError;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

/// Number of masonry columns, guaranteed positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnCount(NonZeroUsize);

impl ColumnCount {
    /// Smart constructor: rejects zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use newsgrid::model::ColumnCount;
    /// assert_eq!(ColumnCount::new(3).unwrap().get(), 3);
    /// assert!(ColumnCount::new(0).is_err());
    /// ```
    pub fn new(raw: usize) -> Result<Self, LayoutError> {
        NonZeroUsize::new(raw)
            .map(ColumnCount)
            .ok_or_else(|| LayoutError::invalid_column_count(raw))
    }

    /// The count as a plain `usize`.
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl fmt::Display for ColumnCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for ColumnCount {
    type Error = LayoutError;

    fn try_from(raw: usize) -> Result<Self, Self::Error> {
        ColumnCount::new(raw)
    }
}

impl TryFrom<i64> for ColumnCount {
    type Error = LayoutError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        let positive = usize::try_from(raw).map_err(|_| LayoutError::invalid_column_count(raw))?;
        ColumnCount::new(positive)
    }
}

impl FromStr for ColumnCount {
    type Err = LayoutError;

    /// Parses a base-10 integer. Fractions ("2.5"), signs on zero, negatives
    /// and non-numeric input are all rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let raw: i64 = trimmed
            .parse()
            .map_err(|_| LayoutError::invalid_column_count(trimmed))?;
        ColumnCount::try_from(raw)
    }
}

impl From<ColumnCount> for usize {
    fn from(count: ColumnCount) -> usize {
        count.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_positive_counts() {
        for raw in [1, 2, 7, 64] {
            assert_eq!(ColumnCount::new(raw).unwrap().get(), raw);
        }
    }

    #[test]
    fn new_rejects_zero() {
        let err = ColumnCount::new(0).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidArgument { ref value, .. } if value == "0"));
    }

    #[test]
    fn try_from_negative_i64_is_invalid_argument() {
        let err = ColumnCount::try_from(-1i64).unwrap_err();
        assert!(matches!(err, LayoutError::InvalidArgument { ref value, .. } if value == "-1"));
    }

    #[test]
    fn try_from_positive_i64_succeeds() {
        assert_eq!(ColumnCount::try_from(4i64).unwrap().get(), 4);
    }

    #[test]
    fn from_str_rejects_non_integer() {
        for input in ["2.5", "abc", "", "-3", "0", "1e2"] {
            assert!(
                input.parse::<ColumnCount>().is_err(),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_str_trims_whitespace() {
        assert_eq!(" 3 ".parse::<ColumnCount>().unwrap().get(), 3);
    }
}
