//! Comparison kinds for deriving boolean condition series.

/// How a daily value is compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `value < threshold`
    Lt,
    /// `value <= threshold`
    Le,
    /// `value == threshold`
    Eq,
    /// `value != threshold`
    Ne,
    /// `value >= threshold`
    Ge,
    /// `value > threshold`
    Gt,
}

impl Comparison {
    /// Compares two present values.
    #[inline]
    pub fn apply(self, value: f64, threshold: f64) -> bool {
        match self {
            Self::Lt => value < threshold,
            Self::Le => value <= threshold,
            Self::Eq => value == threshold,
            Self::Ne => value != threshold,
            Self::Ge => value >= threshold,
            Self::Gt => value > threshold,
        }
    }

    /// Compares possibly missing values. A missing side never satisfies the
    /// comparison, `Ne` included.
    #[inline]
    pub fn holds(self, value: Option<f64>, threshold: Option<f64>) -> bool {
        match (value, threshold) {
            (Some(v), Some(t)) => self.apply(v, t),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_each_kind() {
        assert!(Comparison::Lt.apply(-0.1, 0.0));
        assert!(!Comparison::Lt.apply(0.0, 0.0));
        assert!(Comparison::Le.apply(0.0, 0.0));
        assert!(Comparison::Eq.apply(5.0, 5.0));
        assert!(Comparison::Ne.apply(5.0, 5.5));
        assert!(Comparison::Ge.apply(10.0, 10.0));
        assert!(Comparison::Gt.apply(25.1, 25.0));
        assert!(!Comparison::Gt.apply(25.0, 25.0));
    }

    #[test]
    fn missing_never_holds() {
        for cmp in [
            Comparison::Lt,
            Comparison::Le,
            Comparison::Eq,
            Comparison::Ne,
            Comparison::Ge,
            Comparison::Gt,
        ] {
            assert!(!cmp.holds(None, Some(0.0)), "{cmp:?} with missing value");
            assert!(!cmp.holds(Some(0.0), None), "{cmp:?} with missing threshold");
        }
    }
}
