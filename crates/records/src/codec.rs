//! Reading and writing property records as CSV or JSON.
//!
//! - CSV: header row plus one row per record; the `location` cell is the
//!   `[x, y]` text form and the `ammenities` cell is an embedded JSON object.
//! - JSON: an indented array of objects with the same field names, where
//!   `location` is a numeric array and `ammenities` a nested object.
//!
//! Rust concepts you'll see here:
//! - A private "wire row" struct plus `TryFrom` to keep per-format quirks
//!   out of the domain type
//! - Generic functions over `IntoIterator<Item = &Property>` so callers can
//!   pass owned records or borrowed selections
//! - Early returns to try one decoder and fall back to another

use crate::error::{RecordError, Result};
use crate::types::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Column names of the CSV encoding, in order
pub const CSV_HEADER: [&str; 8] = [
    "squareFootage",
    "lighting",
    "price",
    "rooms",
    "bathrooms",
    "location",
    "description",
    "ammenities",
];

// =============================================================================
// Format
// =============================================================================

/// The two supported tabular encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Csv,
    Json,
}

impl Format {
    /// Pick a format from a file extension (`.csv` / `.json`, any case).
    ///
    /// Returns `None` when the path has no extension or an unknown one, so the
    /// caller can fall back to other hints.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "csv" => Some(Format::Csv),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Csv => "csv",
            Format::Json => "json",
        }
    }
}

impl FromStr for Format {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            _ => Err(RecordError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// CSV wire row
// =============================================================================

/// One CSV row before the embedded micro-formats are parsed
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRow {
    square_footage: u64,
    lighting: Lighting,
    price: Cents,
    rooms: u64,
    bathrooms: u64,
    location: String,
    description: String,
    ammenities: String,
}

impl TryFrom<CsvRow> for Property {
    type Error = RecordError;

    fn try_from(row: CsvRow) -> Result<Self> {
        Ok(Property {
            square_footage: row.square_footage,
            lighting: row.lighting,
            price: row.price,
            rooms: row.rooms,
            bathrooms: row.bathrooms,
            location: row.location.parse()?,
            description: row.description,
            amenities: row.ammenities.parse()?,
        })
    }
}

impl From<&Property> for CsvRow {
    fn from(p: &Property) -> Self {
        CsvRow {
            square_footage: p.square_footage,
            lighting: p.lighting,
            price: p.price,
            rooms: p.rooms,
            bathrooms: p.bathrooms,
            location: p.location.to_string(),
            description: p.description.clone(),
            ammenities: p.amenities.to_string(),
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a full input buffer.
///
/// With an explicit `format` only that encoding is tried and its error is
/// returned as-is. Without one, CSV is tried first and then JSON; if both
/// fail the result is `UnrecognizedFormat` carrying both messages.
///
/// Returns the records together with the format that was actually used.
pub fn decode(bytes: &[u8], format: Option<Format>) -> Result<(Vec<Property>, Format)> {
    match format {
        Some(format) => {
            let records = decode_as(bytes, format)?;
            tracing::debug!("Decoded {} records as {}", records.len(), format);
            Ok((records, format))
        }
        None => detect(bytes),
    }
}

/// Decode with one specific encoding
pub fn decode_as(bytes: &[u8], format: Format) -> Result<Vec<Property>> {
    match format {
        Format::Csv => decode_csv(bytes),
        Format::Json => decode_json(bytes),
    }
}

fn detect(bytes: &[u8]) -> Result<(Vec<Property>, Format)> {
    let csv_err = match decode_csv(bytes) {
        Ok(records) => {
            tracing::debug!("Detected CSV input ({} records)", records.len());
            return Ok((records, Format::Csv));
        }
        Err(e) => e,
    };

    let json_err = match decode_json(bytes) {
        Ok(records) => {
            tracing::debug!("Detected JSON input ({} records)", records.len());
            return Ok((records, Format::Json));
        }
        Err(e) => e,
    };

    Err(RecordError::UnrecognizedFormat {
        csv: csv_err.to_string(),
        json: json_err.to_string(),
    })
}

fn decode_csv(bytes: &[u8]) -> Result<Vec<Property>> {
    let mut reader = csv::ReaderBuilder::new().from_reader(bytes);

    // The header has to match exactly, otherwise JSON text whose first line
    // happens to split on commas could slip through
    let headers = reader.headers()?;
    if !headers.iter().eq(CSV_HEADER.iter().copied()) {
        return Err(RecordError::HeaderMismatch {
            expected: CSV_HEADER.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<CsvRow>() {
        records.push(Property::try_from(row?)?);
    }
    Ok(records)
}

fn decode_json(bytes: &[u8]) -> Result<Vec<Property>> {
    Ok(serde_json::from_slice(bytes)?)
}

// =============================================================================
// Encoding
// =============================================================================

/// Serialize records into a complete output buffer.
///
/// CSV always gets a header row, even when there are no records. JSON is
/// pretty-printed with two-space indentation and ends with a newline.
pub fn encode<'a, I>(records: I, format: Format) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a Property>,
{
    match format {
        Format::Csv => encode_csv(records),
        Format::Json => encode_json(records),
    }
}

fn encode_csv<'a, I>(records: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a Property>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for property in records {
        writer.serialize(CsvRow::from(property))?;
    }

    writer
        .into_inner()
        .map_err(|e| RecordError::Io(e.into_error()))
}

fn encode_json<'a, I>(records: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a Property>,
{
    let records: Vec<&Property> = records.into_iter().collect();
    let mut out = serde_json::to_vec_pretty(&records)?;
    out.push(b'\n');
    Ok(out)
}

// =============================================================================
// Output format resolution
// =============================================================================

/// Decide which encoding to write.
///
/// Priority: a recognised extension on `destination`, then the `requested`
/// format, then the `input` format. If nothing resolves, CSV is used.
pub fn resolve_output_format(
    destination: Option<&Path>,
    requested: Option<Format>,
    input: Option<Format>,
) -> Format {
    destination
        .and_then(Format::from_path)
        .or(requested)
        .or(input)
        .unwrap_or_else(|| {
            tracing::warn!("No output format could be resolved, defaulting to CSV");
            Format::Csv
        })
}
