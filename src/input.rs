//! Station CSV reader.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::{debug, info};

use crate::config::InputToml;

/// A dated daily record with one value column per requested CSV column.
#[derive(Debug, Default)]
pub struct StationRecord {
    pub dates: Vec<NaiveDate>,
    columns: BTreeMap<String, Vec<Option<f64>>>,
}

impl StationRecord {
    /// Values of a column that was requested when reading.
    pub fn column(&self, name: &str) -> Result<&[Option<f64>]> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .with_context(|| format!("column {name:?} was not read"))
    }
}

/// Parses one cell. Empty cells, the missing marker and NaN are missing.
fn parse_cell(raw: &str, missing_marker: Option<&str>) -> Result<Option<f64>> {
    let cell = raw.trim();
    if cell.is_empty() || missing_marker == Some(cell) {
        return Ok(None);
    }
    let value: f64 = cell
        .parse()
        .with_context(|| format!("invalid number {cell:?}"))?;
    if value.is_nan() {
        return Ok(None);
    }
    if !value.is_finite() {
        bail!("non-finite value {cell:?}");
    }
    Ok(Some(value))
}

/// Reads the date column and `columns` from a station CSV with a header row.
pub fn read_station_csv(path: &Path, input: &InputToml, columns: &[&str]) -> Result<StationRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open CSV file: {}", path.display()))?;

    let headers = reader
        .headers()
        .with_context(|| format!("failed to read CSV header: {}", path.display()))?
        .clone();
    let position = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("column {name:?} not found in {}", path.display()))
    };
    let date_idx = position(&input.date_column)?;
    let value_idx: Vec<(String, usize)> = columns
        .iter()
        .map(|&name| Ok((name.to_string(), position(name)?)))
        .collect::<Result<_>>()?;

    let mut record = StationRecord::default();
    for (name, _) in &value_idx {
        record.columns.entry(name.clone()).or_default();
    }

    let marker = input.missing_marker.as_deref();
    for (row, result) in reader.records().enumerate() {
        // header is line 1
        let line = row + 2;
        let fields = result.with_context(|| format!("failed to read CSV line {line}"))?;
        let date_raw = fields.get(date_idx).unwrap_or_default();
        let date = NaiveDate::parse_from_str(date_raw, &input.date_format)
            .with_context(|| format!("line {line}: invalid date {date_raw:?}"))?;
        record.dates.push(date);
        for (name, idx) in &value_idx {
            let value = parse_cell(fields.get(*idx).unwrap_or_default(), marker)
                .with_context(|| format!("line {line}, column {name:?}"))?;
            if value.is_none() {
                debug!(line, column = name.as_str(), "missing value");
            }
            if let Some(values) = record.columns.get_mut(name) {
                values.push(value);
            }
        }
    }

    info!(
        path = %path.display(),
        n_days = record.dates.len(),
        n_columns = value_idx.len(),
        "station record loaded"
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn parse_cell_missing_forms() {
        assert_eq!(parse_cell("", None).unwrap(), None);
        assert_eq!(parse_cell("  ", None).unwrap(), None);
        assert_eq!(parse_cell("NaN", None).unwrap(), None);
        assert_eq!(parse_cell("-99.9", Some("-99.9")).unwrap(), None);
        assert_eq!(parse_cell("-99.9", None).unwrap(), Some(-99.9));
        assert_eq!(parse_cell(" 3.5 ", None).unwrap(), Some(3.5));
        assert!(parse_cell("inf", None).is_err());
        assert!(parse_cell("abc", None).is_err());
    }

    #[test]
    fn reads_requested_columns() {
        let file = write_csv("date,tmin,precip\n2000-01-01,-1.5,0.0\n2000-01-02,,2.5\n2000-01-03,0.5,-9\n");
        let input = InputToml {
            missing_marker: Some("-9".to_string()),
            ..InputToml::default()
        };
        let record = read_station_csv(file.path(), &input, &["tmin", "precip"]).unwrap();
        assert_eq!(record.dates.len(), 3);
        assert_eq!(record.dates[1], NaiveDate::from_ymd_opt(2000, 1, 2).unwrap());
        assert_eq!(record.column("tmin").unwrap(), &[Some(-1.5), None, Some(0.5)]);
        assert_eq!(record.column("precip").unwrap(), &[Some(0.0), Some(2.5), None]);
        assert!(record.column("tmax").is_err());
    }

    #[test]
    fn missing_column_is_an_error() {
        let file = write_csv("date,tmin\n2000-01-01,1.0\n");
        let err = read_station_csv(file.path(), &InputToml::default(), &["tmax"]).unwrap_err();
        assert!(err.to_string().contains("\"tmax\" not found"));
    }

    #[test]
    fn bad_date_reports_line() {
        let file = write_csv("date,tmin\n2000-01-01,1.0\n01/02/2000,2.0\n");
        let err = read_station_csv(file.path(), &InputToml::default(), &["tmin"]).unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }
}
