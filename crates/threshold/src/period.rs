//! Climatological reference periods.

use serde::{Deserialize, Serialize};

use crate::error::ThresholdError;

/// Number of whole years in a reference period.
pub const REFERENCE_PERIOD_YEARS: i32 = 30;

/// A 30-year climatological baseline `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(i32, i32)", into = "(i32, i32)")]
pub struct ReferencePeriod {
    start: i32,
    end: i32,
}

impl ReferencePeriod {
    /// Creates a reference period from its first and last year.
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::InvalidReferencePeriod`] unless
    /// `end - start + 1 == 30`.
    pub fn new(start: i32, end: i32) -> Result<Self, ThresholdError> {
        if end.checked_sub(start).and_then(|d| d.checked_add(1)) != Some(REFERENCE_PERIOD_YEARS) {
            return Err(ThresholdError::InvalidReferencePeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// The WMO standard normal 1961–1990 used by ETCCDI.
    pub fn standard() -> Self {
        Self {
            start: 1961,
            end: 1990,
        }
    }

    /// First year of the period.
    pub fn start(self) -> i32 {
        self.start
    }

    /// Last year of the period.
    pub fn end(self) -> i32 {
        self.end
    }

    /// Returns `true` if `year` lies inside the period.
    pub fn contains(self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }
}

impl TryFrom<(i32, i32)> for ReferencePeriod {
    type Error = ThresholdError;

    fn try_from((start, end): (i32, i32)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl From<ReferencePeriod> for (i32, i32) {
    fn from(period: ReferencePeriod) -> Self {
        (period.start, period.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_years_accepted() {
        let p = ReferencePeriod::new(1981, 2010).unwrap();
        assert_eq!(p.start(), 1981);
        assert_eq!(p.end(), 2010);
        assert!(p.contains(1981));
        assert!(p.contains(2010));
        assert!(!p.contains(2011));
    }

    #[test]
    fn wrong_spans_rejected() {
        for (start, end) in [(1961, 1989), (1961, 1991), (1990, 1961), (2000, 2000)] {
            assert_eq!(
                ReferencePeriod::new(start, end).unwrap_err(),
                ThresholdError::InvalidReferencePeriod { start, end }
            );
        }
    }

    #[test]
    fn overflow_rejected() {
        assert!(ReferencePeriod::new(i32::MIN, i32::MAX).is_err());
    }

    #[test]
    fn standard_is_valid() {
        let p = ReferencePeriod::standard();
        assert_eq!(ReferencePeriod::new(p.start(), p.end()).unwrap(), p);
    }
}
