//! The closed set of predicates a run can filter by.
//!
//! One `Predicate` is built per invocation from the raw argument tokens and
//! then evaluated against every record with a single exhaustive `match`.

use crate::error::Result;
use crate::filters::{AmenityFilter, DescriptionFilter, IntRange, LightingFilter, Radius};
use records::Property;
use std::fmt;

/// Which dimension a predicate filters on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateKind {
    Footage,
    Price,
    Rooms,
    Bathrooms,
    Lighting,
    Location,
    Description,
    Amenities,
}

impl PredicateKind {
    pub const ALL: [PredicateKind; 8] = [
        PredicateKind::Footage,
        PredicateKind::Price,
        PredicateKind::Rooms,
        PredicateKind::Bathrooms,
        PredicateKind::Lighting,
        PredicateKind::Location,
        PredicateKind::Description,
        PredicateKind::Amenities,
    ];

    /// Command name of this kind, as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            PredicateKind::Footage => "footage",
            PredicateKind::Price => "price",
            PredicateKind::Rooms => "rooms",
            PredicateKind::Bathrooms => "bathrooms",
            PredicateKind::Lighting => "lighting",
            PredicateKind::Location => "location",
            PredicateKind::Description => "description",
            PredicateKind::Amenities => "ammenities",
        }
    }
}

impl fmt::Display for PredicateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed filter, carrying its own arguments.
///
/// ## Design Note
/// - Range payloads are shared; the variant decides which field is compared
/// - `Clone` but not `PartialEq`, since compiled regexes have no equality
#[derive(Debug, Clone)]
pub enum Predicate {
    Footage(IntRange),
    Price(IntRange),
    Rooms(IntRange),
    Bathrooms(IntRange),
    Lighting(LightingFilter),
    Location(Radius),
    Description(DescriptionFilter),
    Amenity(AmenityFilter),
}

impl Predicate {
    /// Parse raw argument tokens for the given kind.
    ///
    /// # Errors
    /// * `InvalidArgument` - a token does not parse
    /// * `InsufficientArguments` - required tokens are missing
    /// * `InvalidPattern` - the description pattern is not a valid regex
    pub fn parse<S: AsRef<str>>(kind: PredicateKind, args: &[S]) -> Result<Self> {
        let predicate = match kind {
            PredicateKind::Footage => Predicate::Footage(IntRange::parse(kind.name(), args)?),
            PredicateKind::Price => Predicate::Price(IntRange::parse(kind.name(), args)?),
            PredicateKind::Rooms => Predicate::Rooms(IntRange::parse(kind.name(), args)?),
            PredicateKind::Bathrooms => Predicate::Bathrooms(IntRange::parse(kind.name(), args)?),
            PredicateKind::Lighting => Predicate::Lighting(LightingFilter::parse(args)?),
            PredicateKind::Location => Predicate::Location(Radius::parse(args)?),
            PredicateKind::Description => Predicate::Description(DescriptionFilter::parse(args)?),
            PredicateKind::Amenities => Predicate::Amenity(AmenityFilter::parse(args)?),
        };
        tracing::debug!("Parsed predicate: {:?}", predicate);
        Ok(predicate)
    }

    pub fn kind(&self) -> PredicateKind {
        match self {
            Predicate::Footage(_) => PredicateKind::Footage,
            Predicate::Price(_) => PredicateKind::Price,
            Predicate::Rooms(_) => PredicateKind::Rooms,
            Predicate::Bathrooms(_) => PredicateKind::Bathrooms,
            Predicate::Lighting(_) => PredicateKind::Lighting,
            Predicate::Location(_) => PredicateKind::Location,
            Predicate::Description(_) => PredicateKind::Description,
            Predicate::Amenity(_) => PredicateKind::Amenities,
        }
    }

    /// Returns the name of this predicate (for logging/debugging)
    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Evaluate against one record
    pub fn matches(&self, property: &Property) -> bool {
        match self {
            Predicate::Footage(range) => range.contains(saturating_i64(property.square_footage)),
            Predicate::Price(range) => range.contains(property.price.0),
            Predicate::Rooms(range) => range.contains(saturating_i64(property.rooms)),
            Predicate::Bathrooms(range) => range.contains(saturating_i64(property.bathrooms)),
            Predicate::Lighting(filter) => filter.matches(property),
            Predicate::Location(filter) => filter.matches(property),
            Predicate::Description(filter) => filter.matches(property),
            Predicate::Amenity(filter) => filter.matches(property),
        }
    }
}

/// Counts above `i64::MAX` compare as `i64::MAX`
fn saturating_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
