use serde::*;

/// A quantity of study days.
/// Fractional values are meaningful; the allocator never rounds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct StudyDays(qtty::Days);

impl StudyDays {
    /// Create a new study-day quantity.
    pub fn new<V: Into<qtty::Days>>(v: V) -> Self {
        Self(v.into())
    }

    /// Raw value as f64 days.
    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Zero days.
    pub fn zero() -> Self {
        Self::new(0.0)
    }

    /// True when the quantity is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.value() > 0.0
    }
}

impl From<f64> for StudyDays {
    fn from(v: f64) -> Self {
        StudyDays::new(v)
    }
}

impl std::fmt::Display for StudyDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}
