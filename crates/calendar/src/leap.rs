//! Alignment between 365-entry profiles and 366-day series.

use crate::error::CalendarError;
use crate::year::{LEAP_YEAR_LEN, NON_LEAP_YEAR_LEN};

/// Position duplicated when a 365-entry profile is stretched to 366 entries.
pub const LEAP_INSERT_INDEX: usize = 59;

/// Expands a 365-entry profile to 366 entries.
///
/// The result is the first 59 entries, entry 59 twice, then entries 60..365,
/// so it can be compared day for day against a leap-year series.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidAlignmentLength`] if `profile` does not
/// hold exactly 365 entries.
pub fn expand_to_leap<T: Clone>(profile: &[T]) -> Result<Vec<T>, CalendarError> {
    if profile.len() != NON_LEAP_YEAR_LEN {
        return Err(CalendarError::InvalidAlignmentLength {
            expected: NON_LEAP_YEAR_LEN,
            got: profile.len(),
        });
    }
    let mut out = Vec::with_capacity(LEAP_YEAR_LEN);
    out.extend_from_slice(&profile[..LEAP_INSERT_INDEX]);
    out.push(profile[LEAP_INSERT_INDEX].clone());
    out.extend_from_slice(&profile[LEAP_INSERT_INDEX..]);
    Ok(out)
}

/// Contracts a 366-day series to 365 entries.
///
/// Feb 28 (index 58) and Feb 29 (index 59) are combined with `merge` into a
/// single entry, matching the day-of-year folding used for calibration.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidAlignmentLength`] if `series` does not
/// hold exactly 366 entries.
pub fn contract_from_leap<T, F>(series: &[T], merge: F) -> Result<Vec<T>, CalendarError>
where
    T: Clone,
    F: FnOnce(&T, &T) -> T,
{
    if series.len() != LEAP_YEAR_LEN {
        return Err(CalendarError::InvalidAlignmentLength {
            expected: LEAP_YEAR_LEN,
            got: series.len(),
        });
    }
    let feb_28 = LEAP_INSERT_INDEX - 1;
    let mut out = Vec::with_capacity(NON_LEAP_YEAR_LEN);
    out.extend_from_slice(&series[..feb_28]);
    out.push(merge(&series[feb_28], &series[LEAP_INSERT_INDEX]));
    out.extend_from_slice(&series[LEAP_INSERT_INDEX + 1..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expand_layout() {
        let profile: Vec<usize> = (0..365).collect();
        let expanded = expand_to_leap(&profile).unwrap();
        assert_eq!(expanded.len(), 366);
        assert_eq!(&expanded[..59], &profile[..59]);
        assert_eq!(expanded[59], 59);
        assert_eq!(expanded[60], 59);
        assert_eq!(&expanded[61..], &profile[60..]);
    }

    #[test]
    fn expand_rejects_wrong_length() {
        let err = expand_to_leap(&[0.0; 366]).unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidAlignmentLength {
                expected: 365,
                got: 366
            }
        );
    }

    #[test]
    fn contract_merges_feb_28_and_29() {
        let series: Vec<f64> = (0..366).map(|i| i as f64).collect();
        let contracted = contract_from_leap(&series, |a, b| (a + b) / 2.0).unwrap();
        assert_eq!(contracted.len(), 365);
        assert_eq!(contracted[57], 57.0);
        assert_eq!(contracted[58], 58.5);
        assert_eq!(contracted[59], 60.0);
        assert_eq!(contracted[364], 365.0);
    }

    #[test]
    fn contract_rejects_wrong_length() {
        assert!(contract_from_leap(&[0u8; 365], |a, _| *a).is_err());
    }
}
