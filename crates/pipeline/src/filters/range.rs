//! Inclusive integer range shared by the footage, price, rooms and
//! bathrooms filters.

use crate::error::{PredicateError, Result};

/// Keeps values in `min..=max`.
///
/// ## Arguments
/// `min [max]`. With only `min`, the upper bound is `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    pub min: i64,
    pub max: i64,
}

impl IntRange {
    /// Range covering every representable value; matches everything
    pub const OPEN: IntRange = IntRange {
        min: i64::MIN,
        max: i64::MAX,
    };

    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Parse `min [max]` tokens for the filter called `predicate`.
    ///
    /// Tokens after the second are ignored. A `min` above `max` is accepted
    /// and simply matches nothing.
    pub fn parse<S: AsRef<str>>(predicate: &str, args: &[S]) -> Result<Self> {
        let first = args
            .first()
            .ok_or_else(|| PredicateError::InsufficientArguments {
                predicate: predicate.to_string(),
                expected: 1,
                found: 0,
            })?;

        let min = parse_bound(predicate, first.as_ref())?;
        let max = match args.get(1) {
            Some(token) => parse_bound(predicate, token.as_ref())?,
            None => i64::MAX,
        };

        Ok(Self { min, max })
    }

    /// Both bounds are inclusive
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for IntRange {
    fn default() -> Self {
        Self::OPEN
    }
}

fn parse_bound(predicate: &str, token: &str) -> Result<i64> {
    token
        .trim()
        .parse()
        .map_err(|_| PredicateError::InvalidArgument {
            predicate: predicate.to_string(),
            value: token.to_string(),
        })
}
