//! Run-length encoding for the ETCCDI index engine.
//!
//! Consecutive-run indices encode a boolean condition series and look for
//! the longest `true` run; persistence indices select `true` runs of a
//! minimum length. Both go through [`encode`].
//!
//! ```
//! use etccdi_rle::encode;
//!
//! let frost = [true, true, false, true, true, true];
//! let rle = encode(&frost);
//! assert_eq!(rle.longest_run_of(&true), 3);
//! assert_eq!(rle.decode(), frost);
//! ```

mod encoding;
mod error;

pub use encoding::{Run, RunEncoding, encode, encode_iter};
pub use error::RleError;
