//! Filter to keep listings that have a given amenity.

use crate::error::{PredicateError, Result};
use records::Property;

/// Keeps listings where `amenities[name]` is present and true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmenityFilter {
    pub name: String,
}

impl AmenityFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Parse `name`. Only the first token is used.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let name = args
            .first()
            .ok_or_else(|| PredicateError::InsufficientArguments {
                predicate: "ammenities".to_string(),
                expected: 1,
                found: 0,
            })?;
        let name: &str = name.as_ref();
        Ok(Self::new(name))
    }

    pub fn matches(&self, property: &Property) -> bool {
        property.has_amenity(&self.name)
    }
}
