//! Core domain types for property listings.
//!
//! This module defines the record that flows through the whole tool and the
//! value types it is built from. Key Rust concepts demonstrated here:
//! - Newtypes (`Cents`, `Amenities`) to give primitive data a domain meaning
//! - `FromStr` / `Display` pairs for embedded text micro-formats
//! - serde attributes to control the JSON shape without hand-written impls

use crate::error::RecordError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Currency
// =============================================================================

/// Fixed-point currency in minor units (cents).
///
/// Prices are compared as integers so there is never any rounding drift.
/// Converting to dollars is a presentation concern and does not happen here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cents(pub i64);

// =============================================================================
// Lighting
// =============================================================================

/// Lighting level of a listing.
///
/// `Unset` is a real stored value (an empty cell), not "no filter". On the
/// wire it is the empty string; `unset` is accepted as an alias when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lighting {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "", alias = "unset")]
    Unset,
}

impl Lighting {
    /// Parse a user-supplied lighting level.
    ///
    /// Case-insensitive, accepts `med` as shorthand for `medium`, and maps the
    /// empty token to `Unset`. Returns `None` for anything else.
    pub fn from_level(level: &str) -> Option<Self> {
        match level.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Lighting::Low),
            "medium" | "med" => Some(Lighting::Medium),
            "high" => Some(Lighting::High),
            "" | "unset" => Some(Lighting::Unset),
            _ => None,
        }
    }

    /// Wire form of this level
    pub fn as_str(&self) -> &'static str {
        match self {
            Lighting::Low => "low",
            Lighting::Medium => "medium",
            Lighting::High => "high",
            Lighting::Unset => "",
        }
    }
}

impl fmt::Display for Lighting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Coordinate
// =============================================================================

/// A point on a flat Euclidean plane.
///
/// JSON carries it as a two-element array `[x, y]`; CSV carries the text form
/// `[x, y]` with six decimals (see the `FromStr` and `Display` impls).
///
/// Both halves are finite whenever a coordinate comes out of a decoder;
/// JSON has no spelling for NaN or infinity.
///
/// Rust concept: `#[serde(try_from, into)]` reuses the array impls of serde
/// instead of writing a custom Serializer/Deserializer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point
    pub fn distance_to(&self, other: Coordinate) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl TryFrom<[f64; 2]> for Coordinate {
    type Error = RecordError;

    fn try_from([x, y]: [f64; 2]) -> Result<Self, Self::Error> {
        if !x.is_finite() || !y.is_finite() {
            return Err(RecordError::MalformedCoordinate {
                value: format!("[{}, {}]", x, y),
                reason: "coordinates must be finite".to_string(),
            });
        }
        Ok(Self { x, y })
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(c: Coordinate) -> Self {
        [c.x, c.y]
    }
}

impl FromStr for Coordinate {
    type Err = RecordError;

    /// Parse `[x, y]`. Whitespace around either half is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: String| RecordError::MalformedCoordinate {
            value: s.to_string(),
            reason,
        };

        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| malformed("missing [ ] delimiters".to_string()))?;

        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| malformed("expected two comma-separated values".to_string()))?;
        if y.contains(',') {
            return Err(malformed("expected two comma-separated values".to_string()));
        }

        let x = parse_half(x)
            .map_err(|reason| malformed(format!("invalid X value: {}", reason)))?;
        let y = parse_half(y)
            .map_err(|reason| malformed(format!("invalid Y value: {}", reason)))?;

        Ok(Self { x, y })
    }
}

fn parse_half(token: &str) -> Result<f64, String> {
    let value = token.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if !value.is_finite() {
        return Err(format!("{} is not finite", value));
    }
    Ok(value)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.x, self.y)
    }
}

// =============================================================================
// Amenities
// =============================================================================

/// Named boolean flags such as `garage`, `pool` or `yard`.
///
/// A missing key and a `false` value mean the same thing. Keys are kept in a
/// `BTreeMap` so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amenities(pub BTreeMap<String, bool>);

impl Amenities {
    /// True only when `name` is present and set
    pub fn has(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Amenities {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl FromStr for Amenities {
    type Err = RecordError;

    /// Parse a compact JSON object literal, e.g. `{"garage":true}`.
    /// A `null` literal is the empty set.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str::<Option<Amenities>>(s)
            .map(Option::unwrap_or_default)
            .map_err(|e| RecordError::MalformedAmenitySet {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

/// Reads a missing or `null` amenity object as the empty set
fn null_as_empty<'de, D>(deserializer: D) -> Result<Amenities, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Amenities>::deserialize(deserializer)?.unwrap_or_default())
}

impl fmt::Display for Amenities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let literal = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&literal)
    }
}

// =============================================================================
// Property
// =============================================================================

/// One real-estate listing.
///
/// Properties are never mutated after decoding; the filter stage only
/// selects references to them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub square_footage: u64,
    pub lighting: Lighting,
    /// Price in cents
    pub price: Cents,
    pub rooms: u64,
    pub bathrooms: u64,
    pub location: Coordinate,
    pub description: String,
    /// Serialized under the historical `ammenities` field name
    #[serde(rename = "ammenities", default, deserialize_with = "null_as_empty")]
    pub amenities: Amenities,
}

impl Property {
    pub fn has_amenity(&self, name: &str) -> bool {
        self.amenities.has(name)
    }

    pub fn distance_to(&self, point: Coordinate) -> f64 {
        self.location.distance_to(point)
    }
}
