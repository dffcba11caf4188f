//! One year of daily observations.

use etccdi_calendar::is_valid_year_length;

use crate::comparison::Comparison;
use crate::error::IndexError;

/// One year of daily values for a single variable, in calendar order.
///
/// Missing days are `None`. Every present value is finite. The length is not
/// constrained here; indices return `None` for anything but 365 or 366 days.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailySeries {
    values: Vec<Option<f64>>,
}

impl DailySeries {
    /// Wraps daily values.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NonFiniteValue`] if a present value is NaN or
    /// infinite.
    pub fn new(values: Vec<Option<f64>>) -> Result<Self, IndexError> {
        if let Some(index) = values
            .iter()
            .position(|v| v.is_some_and(|x| !x.is_finite()))
        {
            return Err(IndexError::NonFiniteValue { index });
        }
        Ok(Self { values })
    }

    /// Builds a series from plain floats where NaN marks a missing day.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::NonFiniteValue`] for an infinite value.
    pub fn from_nan_padded(values: &[f64]) -> Result<Self, IndexError> {
        Self::new(
            values
                .iter()
                .map(|&v| if v.is_nan() { None } else { Some(v) })
                .collect(),
        )
    }

    /// Daily values in calendar order.
    pub fn values(&self) -> &[Option<f64>] {
        &self.values
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the series holds no days.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of missing days.
    pub fn n_missing(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Returns `true` if the series spans exactly one calendar year.
    pub fn is_full_year(&self) -> bool {
        is_valid_year_length(&self.values)
    }

    /// Per-day flags for `value <cmp> threshold`. Missing days are `false`.
    pub fn condition(&self, cmp: Comparison, threshold: f64) -> Vec<bool> {
        self.values
            .iter()
            .map(|&v| cmp.holds(v, Some(threshold)))
            .collect()
    }
}

impl TryFrom<Vec<Option<f64>>> for DailySeries {
    type Error = IndexError;

    fn try_from(values: Vec<Option<f64>>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite() {
        let err = DailySeries::new(vec![Some(1.0), Some(f64::NAN)]).unwrap_err();
        assert_eq!(err, IndexError::NonFiniteValue { index: 1 });
    }

    #[test]
    fn nan_padded_maps_nan_to_missing() {
        let s = DailySeries::from_nan_padded(&[1.0, f64::NAN, 3.0]).unwrap();
        assert_eq!(s.values(), &[Some(1.0), None, Some(3.0)]);
        assert_eq!(s.n_missing(), 1);
    }

    #[test]
    fn nan_padded_rejects_infinity() {
        let err = DailySeries::from_nan_padded(&[f64::NEG_INFINITY]).unwrap_err();
        assert_eq!(err, IndexError::NonFiniteValue { index: 0 });
    }

    #[test]
    fn full_year_gate() {
        assert!(DailySeries::new(vec![None; 365]).unwrap().is_full_year());
        assert!(DailySeries::new(vec![None; 366]).unwrap().is_full_year());
        assert!(!DailySeries::new(vec![None; 364]).unwrap().is_full_year());
        assert!(!DailySeries::default().is_full_year());
    }

    #[test]
    fn condition_treats_missing_as_false() {
        let s = DailySeries::new(vec![Some(-1.0), None, Some(2.0)]).unwrap();
        assert_eq!(s.condition(Comparison::Lt, 0.0), vec![true, false, false]);
        assert_eq!(s.condition(Comparison::Ne, 0.0), vec![true, false, true]);
    }
}
