//! ETCCDI-style climate extreme indices over one year of daily data.
//!
//! Every index takes a [`DailySeries`] for a single calendar year and
//! returns `None` unless it holds exactly 365 or 366 days. Counts and spells
//! derive a boolean condition from a [`Comparison`] against a threshold;
//! spells and persistence indices then run-length encode it.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │ split_by_year │────▶│   condition    │────▶│  count / encode  │
//!  │ (DailySeries) │     │ (Comparison)   │     │  (index value)   │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use etccdi_indices::{ClimateIndex, DailySeries, frost_days};
//!
//! let tmin = DailySeries::from_nan_padded(&[-1.0; 365]).unwrap();
//! assert_eq!(frost_days(&tmin), Some(365));
//! assert_eq!(ClimateIndex::Cfd.compute(&tmin, None).unwrap(), Some(365.0));
//! ```

pub mod annual;
pub mod catalog;
pub mod comparison;
pub mod error;
pub mod fixed;
pub mod persistence;
pub mod reduce;
pub mod series;

pub use annual::{annual_index, split_by_year};
pub use catalog::{ClimateIndex, Variable};
pub use comparison::Comparison;
pub use error::IndexError;
pub use etccdi_calendar::is_valid_year_length;
pub use fixed::{
    consecutive_dry_days, consecutive_frost_days, consecutive_summer_days, frost_days,
    heating_degree_days, heavy_precip_days, icing_days, summer_days, tropical_nights,
    very_heavy_precip_days,
};
pub use persistence::{cold_nights, growing_season_length};
pub use reduce::{count_where, longest_run_where};
pub use series::DailySeries;
