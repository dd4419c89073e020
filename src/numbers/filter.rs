//! Number predicates.

use std::fmt;

use super::Number;

/// A pure predicate deciding whether a number is retained.
pub trait NumberFilter {
    /// Return true to keep `number`. Must not have side effects.
    fn keep(&self, number: Number) -> bool;

    /// Short label for diagnostics, e.g. `GT(10)`.
    fn describe(&self) -> String;
}

impl fmt::Debug for dyn NumberFilter + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Keeps even numbers, negatives included.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EvenFilter;

impl NumberFilter for EvenFilter {
    fn keep(&self, number: Number) -> bool {
        number % 2 == 0
    }

    fn describe(&self) -> String {
        "EVEN".to_string()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OddFilter;

impl NumberFilter for OddFilter {
    fn keep(&self, number: Number) -> bool {
        number % 2 != 0
    }

    fn describe(&self) -> String {
        "ODD".to_string()
    }
}

/// Keeps numbers strictly greater than the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreaterThanFilter {
    threshold: Number,
}

impl GreaterThanFilter {
    pub fn new(threshold: Number) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Number {
        self.threshold
    }
}

impl NumberFilter for GreaterThanFilter {
    fn keep(&self, number: Number) -> bool {
        number > self.threshold
    }

    fn describe(&self) -> String {
        format!("GT({})", self.threshold)
    }
}
