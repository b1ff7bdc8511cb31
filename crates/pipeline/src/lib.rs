//! Predicate model and filter execution for property listings.
//!
//! This crate provides:
//! - One filter type per listing dimension (range, lighting, location, description, amenity)
//! - `Predicate`, the closed enum over those filters
//! - `FilterExecutor`, which applies one predicate (or its complement) to all records
//!
//! ## Architecture
//! A run goes through three stages:
//! 1. Raw argument tokens are parsed into a `Predicate`
//! 2. The executor keeps records where `matches != exclude`, preserving order
//! 3. The selection is handed back to the records codec for output
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterExecutor, Predicate, PredicateKind};
//!
//! let predicate = Predicate::parse(PredicateKind::Location, &["0.0", "0.0", "100.0"])?;
//! let selected = FilterExecutor::new(predicate, false).apply(&properties);
//! ```

pub mod error;
pub mod filters;
pub mod predicate;
pub mod executor;

// Re-export main types
pub use error::{PredicateError, Result};
pub use predicate::{Predicate, PredicateKind};
pub use executor::{FilterExecutor, PARALLEL_THRESHOLD};
