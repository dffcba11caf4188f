use chrono::{Datelike, NaiveDate};
use etccdi_calendar::{
    Doy, contract_from_leap, date_range, days_in_year, expand_to_leap, is_leap_year, year_bounds,
};

#[test]
fn folded_labels_cover_every_year_of_a_reference_period() {
    let (start, end) = year_bounds(1961, 1990).unwrap();
    let dates = date_range(start, end).unwrap();

    for year in 1961..=1990 {
        let labels: Vec<u16> = dates
            .iter()
            .filter(|d| d.year() == year)
            .map(|&d| Doy::from_date(d).get())
            .collect();
        assert_eq!(labels.len(), days_in_year(year));
        assert_eq!(labels[0], 1);
        assert_eq!(*labels.last().unwrap(), 365, "year {year} must end on 365");

        let mut distinct = labels.clone();
        distinct.dedup();
        assert_eq!(distinct.len(), 365, "year {year} must use all labels");

        if is_leap_year(year) {
            // Feb 28 and Feb 29 share label 59.
            assert_eq!(labels[58], 59);
            assert_eq!(labels[59], 59);
        }
    }
}

#[test]
fn label_matches_non_leap_month_day() {
    for year in [1999, 2000] {
        let dates = date_range(
            NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(year, 12, 31).unwrap(),
        )
        .unwrap();
        for date in dates {
            if date.month() == 2 && date.day() == 29 {
                continue;
            }
            let (m, d) = Doy::from_date(date).month_day();
            assert_eq!(
                (u32::from(m), u32::from(d)),
                (date.month(), date.day()),
                "label mismatch for {date}"
            );
        }
    }
}

#[test]
fn expand_then_contract_restores_profile() {
    let profile: Vec<f64> = (0..365).map(|i| i as f64 * 0.5).collect();
    let expanded = expand_to_leap(&profile).unwrap();
    assert_eq!(expanded.len(), 366);

    // Drop the duplicated entry again by keeping the second of the pair.
    let mut restored = expanded.clone();
    restored.remove(59);
    assert_eq!(restored, profile);

    let contracted = contract_from_leap(&expanded, |a, _| *a).unwrap();
    assert_eq!(contracted.len(), 365);
}
