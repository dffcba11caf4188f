//! Fixed-threshold indices: day counts, longest spells and degree days.
//!
//! All thresholds are in °C or mm/day. Each index returns `None` for a
//! series that is not a full calendar year.

use crate::comparison::Comparison;
use crate::reduce::{count_fixed, longest_run_fixed};
use crate::series::DailySeries;

/// Frost and icing threshold, °C.
pub const FREEZING_POINT: f64 = 0.0;
/// Summer day threshold on tmax, °C.
pub const SUMMER_DAY_THRESHOLD: f64 = 25.0;
/// Tropical night threshold on tmin, °C.
pub const TROPICAL_NIGHT_THRESHOLD: f64 = 20.0;
/// Heavy precipitation threshold, mm/day.
pub const HEAVY_PRECIP_THRESHOLD: f64 = 10.0;
/// Very heavy precipitation threshold, mm/day.
pub const VERY_HEAVY_PRECIP_THRESHOLD: f64 = 20.0;
/// Wet day threshold, mm/day. Days below it are dry.
pub const WET_DAY_THRESHOLD: f64 = 1.0;
/// Heating degree-day base temperature, °C.
pub const HEATING_BASE: f64 = 17.0;

/// FD: days with tmin below 0 °C.
pub fn frost_days(tmin: &DailySeries) -> Option<usize> {
    count_fixed(tmin, Comparison::Lt, FREEZING_POINT)
}

/// SD: days with tmax above 25 °C.
pub fn summer_days(tmax: &DailySeries) -> Option<usize> {
    count_fixed(tmax, Comparison::Gt, SUMMER_DAY_THRESHOLD)
}

/// ID: days with tmax below 0 °C.
pub fn icing_days(tmax: &DailySeries) -> Option<usize> {
    count_fixed(tmax, Comparison::Lt, FREEZING_POINT)
}

/// TN: days with tmin above 20 °C.
pub fn tropical_nights(tmin: &DailySeries) -> Option<usize> {
    count_fixed(tmin, Comparison::Gt, TROPICAL_NIGHT_THRESHOLD)
}

/// RR10: days with at least 10 mm of precipitation.
pub fn heavy_precip_days(precip: &DailySeries) -> Option<usize> {
    count_fixed(precip, Comparison::Ge, HEAVY_PRECIP_THRESHOLD)
}

/// RR20: days with at least 20 mm of precipitation.
pub fn very_heavy_precip_days(precip: &DailySeries) -> Option<usize> {
    count_fixed(precip, Comparison::Ge, VERY_HEAVY_PRECIP_THRESHOLD)
}

/// CFD: longest spell of frost days.
pub fn consecutive_frost_days(tmin: &DailySeries) -> Option<usize> {
    longest_run_fixed(tmin, Comparison::Lt, FREEZING_POINT)
}

/// CSD: longest spell of summer days.
pub fn consecutive_summer_days(tmax: &DailySeries) -> Option<usize> {
    longest_run_fixed(tmax, Comparison::Gt, SUMMER_DAY_THRESHOLD)
}

/// CDD: longest spell of days with less than 1 mm of precipitation.
pub fn consecutive_dry_days(precip: &DailySeries) -> Option<usize> {
    longest_run_fixed(precip, Comparison::Lt, WET_DAY_THRESHOLD)
}

/// HDD: sum of `17 - tmean` over days with tmean below 17 °C.
///
/// Missing days contribute nothing.
pub fn heating_degree_days(tmean: &DailySeries) -> Option<f64> {
    if !tmean.is_full_year() {
        return None;
    }
    Some(
        tmean
            .values()
            .iter()
            .flatten()
            .filter(|&&v| Comparison::Lt.apply(v, HEATING_BASE))
            .map(|&v| HEATING_BASE - v)
            .sum(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(values: &[f64]) -> DailySeries {
        DailySeries::from_nan_padded(values).unwrap()
    }

    #[test]
    fn boundaries_are_strict_or_inclusive_as_defined() {
        let mut values = vec![0.0; 365];
        values[0] = -0.1;
        values[1] = 25.0;
        values[2] = 25.1;
        values[3] = 20.0;
        values[4] = 20.5;
        let s = series(&values);
        assert_eq!(frost_days(&s), Some(1));
        assert_eq!(icing_days(&s), Some(1));
        assert_eq!(summer_days(&s), Some(1));
        assert_eq!(tropical_nights(&s), Some(3));
    }

    #[test]
    fn precip_thresholds_are_inclusive() {
        let mut values = vec![0.0; 365];
        values[10] = 10.0;
        values[11] = 19.9;
        values[12] = 20.0;
        let s = series(&values);
        assert_eq!(heavy_precip_days(&s), Some(3));
        assert_eq!(very_heavy_precip_days(&s), Some(1));
    }

    #[test]
    fn dry_spell_broken_by_wet_day() {
        let mut values = vec![5.0; 365];
        for v in &mut values[20..30] {
            *v = 0.9;
        }
        values[25] = 1.0;
        let s = series(&values);
        assert_eq!(consecutive_dry_days(&s), Some(5));
    }

    #[test]
    fn summer_spell_longest_wins() {
        let mut values = vec![10.0; 366];
        for v in &mut values[150..160] {
            *v = 30.0;
        }
        for v in &mut values[200..204] {
            *v = 30.0;
        }
        assert_eq!(consecutive_summer_days(&series(&values)), Some(10));
    }

    #[test]
    fn heating_degree_days_sum() {
        let mut values = vec![20.0; 365];
        values[0] = 15.0;
        values[1] = 7.0;
        values[2] = f64::NAN;
        values[3] = 17.0;
        assert_relative_eq!(heating_degree_days(&series(&values)).unwrap(), 12.0);
    }

    #[test]
    fn every_index_gates_on_length() {
        let s = series(&[-1.0; 200]);
        assert_eq!(frost_days(&s), None);
        assert_eq!(summer_days(&s), None);
        assert_eq!(icing_days(&s), None);
        assert_eq!(tropical_nights(&s), None);
        assert_eq!(heavy_precip_days(&s), None);
        assert_eq!(very_heavy_precip_days(&s), None);
        assert_eq!(consecutive_frost_days(&s), None);
        assert_eq!(consecutive_summer_days(&s), None);
        assert_eq!(consecutive_dry_days(&s), None);
        assert_eq!(heating_degree_days(&s), None);
    }
}
