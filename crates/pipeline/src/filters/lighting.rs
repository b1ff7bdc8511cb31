//! Filter on the lighting level of a listing.

use crate::error::{PredicateError, Result};
use records::{Lighting, Property};

/// Keeps listings with exactly the requested lighting level.
///
/// A filter holding `Lighting::Unset` matches every listing, which is what
/// an empty or missing level token produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightingFilter {
    pub level: Lighting,
}

impl LightingFilter {
    /// Matches everything
    pub const ANY: LightingFilter = LightingFilter {
        level: Lighting::Unset,
    };

    pub fn new(level: Lighting) -> Self {
        Self { level }
    }

    /// Parse `[level]`: `low`, `medium` (or `med`), `high`, or nothing
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let token = args.first().map(|s| s.as_ref()).unwrap_or("");
        let level = Lighting::from_level(token).ok_or_else(|| PredicateError::InvalidArgument {
            predicate: "lighting".to_string(),
            value: token.to_string(),
        })?;
        Ok(Self { level })
    }

    pub fn matches(&self, property: &Property) -> bool {
        self.level == Lighting::Unset || property.lighting == self.level
    }
}
