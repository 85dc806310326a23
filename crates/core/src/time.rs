// SPDX-License-Identifier: MIT

//!
//! The time index type
//!

use serde::{Deserialize, Serialize};

/// The year that time index `0` refers to
pub const BASE_YEAR: i32 = 1800;

/// The number of years in a dataset (1800 to 2014 inclusive)
pub const YEAR_COUNT: usize = 215;

/// The largest valid time index
pub const MAX_TIME_INDEX: usize = YEAR_COUNT - 1;

/// An offset from [`BASE_YEAR`].  The value is always within
/// `0..=MAX_TIME_INDEX`.
#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(derive_more::Display, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct TimeIndex(usize);

impl TimeIndex {
    /// Create a time index, clamping to `0..=MAX_TIME_INDEX`
    pub fn new(index: usize) -> Self {
        Self(index.min(MAX_TIME_INDEX))
    }

    /// Create the time index for a calendar year, clamping to the years
    /// covered by a dataset
    pub fn from_year(year: i32) -> Self {
        let offset = year.saturating_sub(BASE_YEAR).max(0);
        Self::new(offset as usize)
    }

    /// The first time index
    pub fn first() -> Self {
        Self(0)
    }

    /// The last time index
    pub fn last() -> Self {
        Self(MAX_TIME_INDEX)
    }

    /// Get the underlying index
    pub fn value(&self) -> usize {
        self.0
    }

    /// Get the calendar year
    pub fn year(&self) -> i32 {
        BASE_YEAR + self.0 as i32
    }

    /// The following time index, wrapping back to the first after the last
    pub fn next(self) -> Self {
        if self.0 < MAX_TIME_INDEX {
            Self(self.0 + 1)
        } else {
            Self(0)
        }
    }
}

impl From<usize> for TimeIndex {
    fn from(value: usize) -> Self {
        TimeIndex::new(value)
    }
}

impl From<TimeIndex> for usize {
    fn from(value: TimeIndex) -> Self {
        value.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_clamps() {
        assert_eq!(TimeIndex::new(0).value(), 0);
        assert_eq!(TimeIndex::new(214).value(), 214);
        assert_eq!(TimeIndex::new(215).value(), 214);
        assert_eq!(TimeIndex::new(usize::MAX).value(), 214);
    }

    #[test]
    fn years() {
        assert_eq!(TimeIndex::first().year(), 1800);
        assert_eq!(TimeIndex::last().year(), 2014);
        assert_eq!(TimeIndex::from_year(1900).value(), 100);
        assert_eq!(TimeIndex::from_year(1700).value(), 0);
        assert_eq!(TimeIndex::from_year(3000).value(), 214);
        assert_eq!(TimeIndex::from_year(i32::MIN).value(), 0);
        assert_eq!(TimeIndex::from_year(i32::MAX).value(), 214);
    }

    #[test]
    fn next_wraps() {
        assert_eq!(TimeIndex::new(0).next().value(), 1);
        assert_eq!(TimeIndex::new(213).next().value(), 214);
        assert_eq!(TimeIndex::new(214).next().value(), 0);
    }

    #[test]
    fn deserialize_clamps() {
        let time: TimeIndex = serde_json::from_str("500").unwrap();
        assert_eq!(time, TimeIndex::last());
        assert_eq!(serde_json::to_string(&TimeIndex::new(3)).unwrap(), "3");
    }
}
