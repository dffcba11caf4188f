//! # etccdi-calendar
//!
//! Calendar arithmetic shared by the threshold calibrator and the index
//! library: leap-folded day-of-year labels, the year-length gate, and the
//! alignment between 365-entry threshold profiles and 366-day series.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"Doy::from_date()"| B["Doy (1..=365, Feb 29 folded)"]
//!     C["year bounds"] -->|"pad_range() / date_range()"| D["Vec of NaiveDate"]
//!     E["365-entry profile"] -->|"expand_to_leap()"| F["366-entry profile"]
//!     G["366-day series"] -->|"contract_from_leap()"| H["365-entry series"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use etccdi_calendar::{Doy, expand_to_leap, is_valid_year_length};
//!
//! let feb_29 = NaiveDate::from_ymd_opt(2000, 2, 29).unwrap();
//! assert_eq!(Doy::from_date(feb_29).get(), 59);
//!
//! assert!(is_valid_year_length(&[0.0; 366]));
//!
//! let profile = vec![1.0; 365];
//! assert_eq!(expand_to_leap(&profile).unwrap().len(), 366);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Leap-folded day-of-year newtype |
//! | `year` | Leap-year rules and the year-length gate |
//! | `leap` | Expansion and contraction around Feb 29 |
//! | `range` | Inclusive Gregorian date ranges |
//! | `error` | Error types |

mod doy;
mod error;
mod leap;
mod range;
mod year;

pub use doy::{Doy, FEB_29_ORDINAL};
pub use error::CalendarError;
pub use leap::{LEAP_INSERT_INDEX, contract_from_leap, expand_to_leap};
pub use range::{date_range, pad_range, year_bounds};
pub use year::{
    LEAP_YEAR_LEN, NON_LEAP_YEAR_LEN, days_in_year, is_leap_year, is_valid_year_length,
    july_first_index,
};
