//! Statistical helper functions for the ETCCDI index engine.
//!
//! Missing observations are `None`; helpers that work on gappy data say how
//! they treat gaps.

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// R's default quantile algorithm (type=7), the linear interpolation used by
/// pandas and numpy.
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Type-7 quantile over the present values of a gappy slice.
///
/// Returns `None` when no value is present.
pub fn quantile_present(values: &[Option<f64>], p: f64) -> Option<f64> {
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(|a, b| a.total_cmp(b));
    Some(quantile_type7(&present, p))
}

/// Fraction of entries that are present. Returns 0.0 for an empty slice.
pub fn present_fraction(values: &[Option<f64>]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().filter(|v| v.is_some()).count() as f64 / values.len() as f64
}

/// Centered rolling mean of width `window` over gappy data.
///
/// An output entry is present only when its whole window lies inside the
/// input and every value in it is present. For an even width the window
/// reaches `window / 2` entries back and `window / 2 - 1` forward, the same
/// placement as pandas' `rolling(window, center=True)`.
///
/// A `window` of 0 yields an all-missing result.
pub fn centered_rolling_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut out = vec![None; n];
    if window == 0 || window > n {
        return out;
    }
    let ahead = (window - 1) / 2;
    let behind = window - 1 - ahead;

    let mut buf = Vec::with_capacity(window);
    for (i, slot) in out.iter_mut().enumerate() {
        if i < behind || i + ahead >= n {
            continue;
        }
        buf.clear();
        let complete = values[i - behind..=i + ahead].iter().all(|v| match v {
            Some(x) => {
                buf.push(*x);
                true
            }
            None => false,
        });
        if complete {
            *slot = Some(mean(&buf));
        }
    }
    out
}
