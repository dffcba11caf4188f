use approx::assert_relative_eq;
use chrono::{Datelike, NaiveDate};
use etccdi_threshold::{CalibrationConfig, ReferencePeriod, ThresholdError, calibrate};

fn dates_between(start: (i32, u32, u32), end: (i32, u32, u32)) -> Vec<NaiveDate> {
    let start = NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap();
    let end = NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap();
    start.iter_days().take_while(|d| *d <= end).collect()
}

fn period() -> ReferencePeriod {
    ReferencePeriod::new(1971, 2000).unwrap()
}

#[test]
fn fully_missing_series_gives_fully_missing_profile() {
    let dates = dates_between((1971, 1, 1), (2000, 12, 31));
    let values = vec![None; dates.len()];
    let config = CalibrationConfig::new(period()).with_min_fraction(0.0);

    let profile = calibrate(&dates, &values, &config).unwrap();
    assert_eq!(profile.values().len(), 365);
    assert!(profile.values().iter().all(Option::is_none));
}

#[test]
fn feb_29_shares_the_feb_28_bucket() {
    let dates = dates_between((1971, 1, 1), (2000, 12, 31));
    let values: Vec<Option<f64>> = dates
        .iter()
        .map(|d| {
            if d.month() == 2 && d.day() == 29 {
                Some(10.0)
            } else {
                Some(0.0)
            }
        })
        .collect();
    let config = CalibrationConfig::new(period())
        .with_window(1)
        .with_percentile(1.0);

    let profile = calibrate(&dates, &values, &config).unwrap();
    let v = profile.values();
    assert_relative_eq!(v[58].unwrap(), 10.0); // label 59: Feb 28 + Feb 29
    assert_relative_eq!(v[59].unwrap(), 0.0); // label 60: Mar 1
    assert!(v.iter().enumerate().all(|(i, t)| i == 58 || t == &Some(0.0)));
}

#[test]
fn quantile_is_taken_across_years() {
    let dates = dates_between((1971, 1, 1), (2000, 12, 31));
    let values: Vec<Option<f64>> = dates.iter().map(|d| Some((d.year() - 1970) as f64)).collect();
    let config = CalibrationConfig::new(period())
        .with_window(1)
        .with_percentile(0.5);

    let profile = calibrate(&dates, &values, &config).unwrap();
    // Median of 1..=30.
    assert_relative_eq!(profile.values()[0].unwrap(), 15.5, epsilon = 1e-12);
    assert_relative_eq!(profile.values()[200].unwrap(), 15.5, epsilon = 1e-12);
}

#[test]
fn padding_days_come_from_outside_the_period() {
    let config = CalibrationConfig::new(period())
        .with_window(5)
        .with_min_fraction(1.0);

    let inside = dates_between((1971, 1, 1), (2000, 12, 31));
    let profile = calibrate(&inside, &vec![Some(1.0); inside.len()], &config).unwrap();
    let missing: Vec<usize> = profile
        .values()
        .iter()
        .enumerate()
        .filter(|(_, t)| t.is_none())
        .map(|(i, _)| i + 1)
        .collect();
    assert_eq!(missing, vec![1, 2, 364, 365]);

    let padded = dates_between((1970, 12, 30), (2001, 1, 2));
    let profile = calibrate(&padded, &vec![Some(1.0); padded.len()], &config).unwrap();
    assert_eq!(profile.n_missing(), 0);
}

#[test]
fn min_fraction_gates_sparse_days() {
    let dates = dates_between((1971, 1, 1), (2000, 12, 31));
    // Drop Jan 15 in the first ten years: 20 of 30 values remain.
    let values: Vec<Option<f64>> = dates
        .iter()
        .map(|d| {
            if d.month() == 1 && d.day() == 15 && d.year() < 1981 {
                None
            } else {
                Some(3.0)
            }
        })
        .collect();
    let strict = CalibrationConfig::new(period()).with_window(1).with_min_fraction(0.8);
    let loose = strict.clone().with_min_fraction(0.5);

    assert_eq!(calibrate(&dates, &values, &strict).unwrap().values()[14], None);
    assert_eq!(calibrate(&dates, &values, &loose).unwrap().values()[14], Some(3.0));
}

#[test]
fn unordered_input_is_accepted() {
    let mut dates = dates_between((1971, 1, 1), (2000, 12, 31));
    dates.reverse();
    let values = vec![Some(-2.0); dates.len()];
    let config = CalibrationConfig::new(period()).with_min_fraction(0.5);
    let profile = calibrate(&dates, &values, &config).unwrap();
    assert_eq!(profile.n_missing(), 0);
}

#[test]
fn contract_violations_are_errors() {
    let dates = dates_between((1971, 1, 1), (1971, 1, 3));
    let values = vec![Some(1.0); 3];

    let bad_pct = CalibrationConfig::new(period()).with_percentile(2.0);
    assert!(matches!(
        calibrate(&dates, &values, &bad_pct),
        Err(ThresholdError::InvalidPercentile { .. })
    ));

    let bad_frac = CalibrationConfig::new(period()).with_min_fraction(-1.0);
    assert!(matches!(
        calibrate(&dates, &values, &bad_frac),
        Err(ThresholdError::InvalidMinFraction { .. })
    ));

    assert!(matches!(
        ReferencePeriod::new(1971, 1999),
        Err(ThresholdError::InvalidReferencePeriod { .. })
    ));
}
