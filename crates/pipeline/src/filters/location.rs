//! Filter to keep listings within a radius of a point.
//!
//! Distances are straight-line on a flat plane, not geodesic.

use crate::error::{PredicateError, Result};
use records::{Coordinate, Property};

/// Keeps listings whose location is at most `radius` away from `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Radius {
    pub center: Coordinate,
    pub radius: f64,
}

impl Radius {
    /// Infinite radius around the origin; matches everything
    pub const UNBOUNDED: Radius = Radius {
        center: Coordinate { x: 0.0, y: 0.0 },
        radius: f64::INFINITY,
    };

    pub fn new(center: Coordinate, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Parse `x y radius`
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.len() < 3 {
            return Err(PredicateError::InsufficientArguments {
                predicate: "location".to_string(),
                expected: 3,
                found: args.len(),
            });
        }

        let x = parse_float(args[0].as_ref())?;
        let y = parse_float(args[1].as_ref())?;
        let radius = parse_float(args[2].as_ref())?;

        Ok(Self::new(Coordinate::new(x, y), radius))
    }

    pub fn matches(&self, property: &Property) -> bool {
        property.distance_to(self.center) <= self.radius
    }
}

fn parse_float(token: &str) -> Result<f64> {
    token
        .trim()
        .parse()
        .map_err(|_| PredicateError::InvalidArgument {
            predicate: "location".to_string(),
            value: token.to_string(),
        })
}
