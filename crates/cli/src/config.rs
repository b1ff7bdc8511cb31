//! Immutable run configuration built once from the command line.

use crate::Cli;
use anyhow::{Context, Result};
use pipeline::{FilterExecutor, Predicate};
use records::Format;
use std::path::PathBuf;

/// Everything one invocation needs, resolved up front.
///
/// Built once in `main` and passed by reference into the run; nothing in it
/// changes afterwards.
#[derive(Debug)]
pub struct RunConfig {
    /// Source path, `None` for stdin
    pub input: Option<PathBuf>,
    /// Destination path, `None` for stdout
    pub output: Option<PathBuf>,
    /// Declared input encoding; skips content detection
    pub input_format: Option<Format>,
    /// Requested output encoding
    pub output_format: Option<Format>,
    /// The parsed predicate and exclude toggle
    pub filter: FilterExecutor,
}

impl RunConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let input_format = parse_format(cli.input_format.as_deref())?;
        let output_format = parse_format(cli.output_format.as_deref())?;

        let (kind, args) = cli.command.into_parts();
        let predicate = Predicate::parse(kind, args.as_slice())
            .with_context(|| format!("failed to parse {} filter", kind))?;

        Ok(Self {
            input: cli.input,
            output: cli.output,
            input_format,
            output_format,
            filter: FilterExecutor::new(predicate, cli.exclude),
        })
    }

    /// Input encoding to decode with, if one is known before reading.
    ///
    /// An explicit `--input-format` wins over the input file extension.
    /// `None` means the content has to be detected.
    pub fn declared_input_format(&self) -> Option<Format> {
        self.input_format
            .or_else(|| self.input.as_deref().and_then(Format::from_path))
    }
}

fn parse_format(name: Option<&str>) -> Result<Option<Format>> {
    Ok(name.map(str::parse::<Format>).transpose()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pipeline::PredicateKind;
    use std::path::Path;

    fn parse_args(args: &[&str]) -> Result<RunConfig> {
        let cli = Cli::try_parse_from(std::iter::once("propfilter").chain(args.iter().copied()))?;
        RunConfig::from_cli(cli)
    }

    #[test]
    fn test_flags_before_subcommand() {
        let config = parse_args(&["-e", "-i", "examples/data.csv", "rooms", "4"]).unwrap();

        assert_eq!(config.input.as_deref(), Some(Path::new("examples/data.csv")));
        assert!(config.output.is_none());
        assert!(config.filter.exclude());
        assert_eq!(config.filter.predicate().kind(), PredicateKind::Rooms);
        assert_eq!(config.declared_input_format(), Some(Format::Csv));
    }

    #[test]
    fn test_flags_after_subcommand() {
        let config = parse_args(&["ammenities", "yard", "--exclude", "-o", "out.json"]).unwrap();
        assert!(config.filter.exclude());
        assert_eq!(config.output.as_deref(), Some(Path::new("out.json")));
        assert_eq!(config.filter.predicate().kind(), PredicateKind::Amenities);
    }

    #[test]
    fn test_amenities_alias() {
        let config = parse_args(&["amenities", "pool"]).unwrap();
        assert_eq!(config.filter.predicate().kind(), PredicateKind::Amenities);
    }

    #[test]
    fn test_negative_coordinates() {
        let config = parse_args(&["location", "-10.5", "20", "3"]).unwrap();
        assert_eq!(config.filter.predicate().kind(), PredicateKind::Location);
        assert!(!config.filter.exclude());
    }

    #[test]
    fn test_explicit_input_format_wins() {
        let config = parse_args(&["-i", "listings.csv", "-t", "JSON", "lighting", "low"]).unwrap();
        assert_eq!(config.declared_input_format(), Some(Format::Json));

        // stdin without a declared format is detected from content
        let config = parse_args(&["lighting"]).unwrap();
        assert_eq!(config.declared_input_format(), None);
    }

    #[test]
    fn test_unsupported_format_name() {
        let err = parse_args(&["-f", "tsv", "rooms", "1"]).unwrap_err();
        assert!(err.to_string().contains("unsupported file type: tsv"));
    }

    #[test]
    fn test_bad_predicate_arguments() {
        let err = parse_args(&["location", "1", "2"]).unwrap_err();
        assert!(format!("{:#}", err).contains("insufficient arguments"));

        let err = parse_args(&["description", "(oops"]).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("invalid pattern"));
        // The regex cause is printed once, not repeated by the error chain
        assert_eq!(message.matches("unclosed group").count(), 1, "{message}");
    }
}
