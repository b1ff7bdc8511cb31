//! Filter implementations, one per listing dimension.
//!
//! Each filter parses its own argument tokens and evaluates a single
//! Property. `Predicate` wraps them into one closed enum.

pub mod amenity;
pub mod description;
pub mod lighting;
pub mod location;
pub mod range;

// Re-export for convenience
pub use amenity::AmenityFilter;
pub use description::DescriptionFilter;
pub use lighting::LightingFilter;
pub use location::Radius;
pub use range::IntRange;

#[cfg(test)]
pub(crate) fn test_property() -> records::Property {
    use records::{Amenities, Cents, Coordinate, Lighting, Property};

    Property {
        square_footage: 1200,
        lighting: Lighting::Medium,
        price: Cents(250000),
        rooms: 3,
        bathrooms: 2,
        location: Coordinate::new(37.7749, -122.4194),
        description: "A cozy family home in a quiet neighborhood.".to_string(),
        amenities: Amenities::default(),
    }
}
