//! # Records Crate
//!
//! This crate owns the property listing data model and its two wire formats.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Property, Lighting, Coordinate, Amenities, Cents)
//! - **codec**: Format detection, CSV/JSON decoding and encoding, output format resolution
//! - **error**: Error types for decoding and encoding
//!
//! ## Example Usage
//!
//! ```ignore
//! use records::{decode, encode, resolve_output_format};
//!
//! // Detect the format from the content
//! let (properties, input_format) = decode(&bytes, None)?;
//!
//! // Write them back out, honouring the destination extension
//! let format = resolve_output_format(Some(Path::new("out.json")), None, Some(input_format));
//! let out = encode(&properties, format)?;
//! ```
//!
//! ## Learning Goals
//!
//! 1. **Newtypes**: `Cents` and `Amenities` give primitive data a meaning
//! 2. **Error Handling**: Using Result<T> and custom error types
//! 3. **serde**: One domain type, two wire shapes
//! 4. **Traits**: `FromStr`, `Display`, `TryFrom` for conversions

// Public modules
pub mod error;
pub mod types;
pub mod codec;

// Re-export commonly used types for convenience
pub use error::{RecordError, Result};
pub use types::{Amenities, Cents, Coordinate, Lighting, Property};
pub use codec::{decode, decode_as, encode, resolve_output_format, Format, CSV_HEADER};

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(rooms: u64) -> Property {
        Property {
            square_footage: 1000,
            lighting: Lighting::High,
            price: Cents(200000),
            rooms,
            bathrooms: 1,
            location: Coordinate::new(0.0, 0.0),
            description: "Test listing".to_string(),
            amenities: [("garage", true)].into_iter().collect(),
        }
    }

    #[test]
    fn test_duplicates_survive_round_trip() {
        // Duplicate input records must stay duplicates
        let properties = vec![listing(2), listing(2), listing(3)];
        let bytes = encode(&properties, Format::Csv).unwrap();
        let (back, format) = decode(&bytes, None).unwrap();

        assert_eq!(format, Format::Csv);
        assert_eq!(back, properties);
    }

    #[test]
    fn test_header_only_is_empty_csv() {
        let header = format!("{}\n", CSV_HEADER.join(","));
        let (properties, format) = decode(header.as_bytes(), None).unwrap();
        assert_eq!(format, Format::Csv);
        assert!(properties.is_empty());
    }

    #[test]
    fn test_empty_json_array() {
        let (properties, format) = decode(b"[]", None).unwrap();
        assert_eq!(format, Format::Json);
        assert!(properties.is_empty());
    }
}
