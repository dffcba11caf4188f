//! Leap-folded day-of-year labels.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::year::is_leap_year;

/// Ordinal day of February 29 in a leap year.
pub const FEB_29_ORDINAL: u32 = 60;

/// Day-of-year in the 365-day folded calendar (1..=365).
///
/// In leap years February 29 carries the same label as February 28 and every
/// later day is shifted down by one, so day 365 is always December 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Doy(u16);

/// Day-of-year on which each month starts (index 0 unused, index 1 = January starts at DOY 1, ...).
pub(crate) const MONTH_START_DOY: [u16; 13] =
    [0, 1, 32, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335];

impl Doy {
    /// Creates a new `Doy` from a day-of-year value.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDoy`] if `doy` is not in 1..=365.
    pub fn new(doy: u16) -> Result<Self, CalendarError> {
        if !(1..=365).contains(&doy) {
            return Err(CalendarError::InvalidDoy { doy });
        }
        Ok(Self(doy))
    }

    /// Returns the folded day-of-year of a Gregorian date.
    ///
    /// Feb 29 maps onto Feb 28 (59); in leap years every day from Mar 1 on
    /// is decremented by one so it matches the non-leap label.
    pub fn from_date(date: NaiveDate) -> Self {
        let ordinal = date.ordinal();
        let folded = if is_leap_year(date.year()) && ordinal >= FEB_29_ORDINAL {
            ordinal - 1
        } else {
            ordinal
        };
        // ordinal is 1..=366, folded is 1..=365
        Self(folded as u16)
    }

    /// Returns the inner day-of-year value (1..=365).
    pub fn get(self) -> u16 {
        self.0
    }

    /// Returns the 0-based index suitable for array indexing (0..=364).
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Returns the `(month, day)` pair in the non-leap calendar.
    pub fn month_day(self) -> (u8, u8) {
        let month = (1..=12u8)
            .rev()
            .find(|&m| MONTH_START_DOY[m as usize] <= self.0)
            .unwrap_or(1);
        let day = self.0 - MONTH_START_DOY[month as usize] + 1;
        (month, day as u8)
    }
}
