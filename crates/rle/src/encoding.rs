//! Run-length encoding and its inverse.

use crate::error::RleError;

/// Run-length encoding of an ordered sequence.
///
/// Stores the value of each maximal run of equal elements next to the
/// run's length. The lengths always sum to the length of the encoded
/// sequence, and [`RunEncoding::decode`] reproduces it exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunEncoding<T> {
    values: Vec<T>,
    lengths: Vec<usize>,
}

/// A single run of an encoding, borrowed from its [`RunEncoding`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a, T> {
    /// Value repeated across the run.
    pub value: &'a T,
    /// Number of consecutive elements in the run (always > 0).
    pub length: usize,
    /// 0-based position of the run's first element in the decoded sequence.
    pub start: usize,
}

impl<T> Run<'_, T> {
    /// 0-based position one past the run's last element.
    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Encodes `sequence` into maximal runs of equal values.
///
/// Single left-to-right pass; runs keep their original order.
///
/// # Example
///
/// ```
/// use etccdi_rle::encode;
///
/// let rle = encode(&[false, false, true, true, true, false]);
/// assert_eq!(rle.values(), &[false, true, false]);
/// assert_eq!(rle.lengths(), &[2, 3, 1]);
/// ```
pub fn encode<T: PartialEq + Clone>(sequence: &[T]) -> RunEncoding<T> {
    encode_iter(sequence.iter().cloned())
}

/// Encodes any iterator of comparable values.
pub fn encode_iter<T, I>(iter: I) -> RunEncoding<T>
where
    T: PartialEq,
    I: IntoIterator<Item = T>,
{
    let mut values: Vec<T> = Vec::new();
    let mut lengths: Vec<usize> = Vec::new();
    for item in iter {
        match values.last() {
            Some(last) if *last == item => {
                if let Some(n) = lengths.last_mut() {
                    *n += 1;
                }
            }
            _ => {
                values.push(item);
                lengths.push(1);
            }
        }
    }
    RunEncoding { values, lengths }
}

impl<T> RunEncoding<T> {
    /// Builds an encoding from parallel run values and lengths.
    ///
    /// # Errors
    ///
    /// Returns [`RleError::LengthMismatch`] if the vectors differ in size,
    /// [`RleError::ZeroLengthRun`] for an empty run, or
    /// [`RleError::AdjacentEqualRuns`] if two neighbouring runs are not
    /// maximal.
    pub fn from_parts(values: Vec<T>, lengths: Vec<usize>) -> Result<Self, RleError>
    where
        T: PartialEq,
    {
        if values.len() != lengths.len() {
            return Err(RleError::LengthMismatch {
                values: values.len(),
                lengths: lengths.len(),
            });
        }
        if let Some(run) = lengths.iter().position(|&n| n == 0) {
            return Err(RleError::ZeroLengthRun { run });
        }
        if let Some(run) = values.windows(2).position(|w| w[0] == w[1]) {
            return Err(RleError::AdjacentEqualRuns { run });
        }
        Ok(Self { values, lengths })
    }

    /// Run values in order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Run lengths in order.
    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    /// Number of runs.
    pub fn n_runs(&self) -> usize {
        self.values.len()
    }

    /// Length of the encoded sequence (sum of run lengths).
    pub fn total_len(&self) -> usize {
        self.lengths.iter().sum()
    }

    /// Returns `true` if the encoded sequence was empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over runs with their start positions.
    pub fn runs(&self) -> impl Iterator<Item = Run<'_, T>> + '_ {
        let mut start = 0;
        self.values
            .iter()
            .zip(self.lengths.iter())
            .map(move |(value, &length)| {
                let run = Run {
                    value,
                    length,
                    start,
                };
                start += length;
                run
            })
    }

    /// Each run's length repeated across the positions it covers.
    ///
    /// The result has the same length as the decoded sequence.
    pub fn per_position_lengths(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.total_len());
        for &n in &self.lengths {
            out.extend(std::iter::repeat_n(n, n));
        }
        out
    }

    /// Length of the longest run whose value equals `value`, or 0 if none.
    pub fn longest_run_of(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.runs()
            .filter(|run| run.value == value)
            .map(|run| run.length)
            .max()
            .unwrap_or(0)
    }

    /// Reconstructs the encoded sequence.
    pub fn decode(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::with_capacity(self.total_len());
        for (value, &n) in self.values.iter().zip(self.lengths.iter()) {
            out.extend(std::iter::repeat_n(value, n).cloned());
        }
        out
    }
}
