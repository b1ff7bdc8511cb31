use clap::{Parser, Subcommand};
use colored::Colorize;
use pipeline::PredicateKind;
use std::path::PathBuf;
use std::process::ExitCode;

mod config;
mod run;

use config::RunConfig;

/// propfilter - Real estate listing filter
#[derive(Parser, Debug)]
#[command(name = "propfilter")]
#[command(
    about = "Filter large sets of real estate properties based on their particular attributes",
    long_about = None
)]
struct Cli {
    /// Read listings from FILE instead of standard input
    #[arg(short, long, value_name = "FILE", global = true)]
    input: Option<PathBuf>,

    /// Write results to FILE instead of standard output
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Keep the listings the filter rejects instead
    #[arg(short, long, global = true)]
    exclude: bool,

    /// Input encoding (csv, json). Only necessary when reading from stdin
    #[arg(short = 't', long, value_name = "FORMAT", global = true)]
    input_format: Option<String>,

    /// Output encoding (csv, json) when the output file has no known extension
    #[arg(short = 'f', long, value_name = "FORMAT", global = true)]
    output_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Filter square footage by RANGE: MIN [MAX]
    Footage {
        #[arg(value_name = "RANGE", allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// Filter price in cents by RANGE: MIN [MAX]
    Price {
        #[arg(value_name = "RANGE", allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// Filter rooms by RANGE: MIN [MAX]
    Rooms {
        #[arg(value_name = "RANGE", allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// Filter bathrooms by RANGE: MIN [MAX]
    Bathrooms {
        #[arg(value_name = "RANGE", allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// Filter by a certain LEVEL of lighting: low, medium, high
    Lighting {
        #[arg(value_name = "LEVEL")]
        args: Vec<String>,
    },

    /// Filter by distance from a point: X Y RADIUS
    Location {
        #[arg(value_name = "X Y RADIUS", allow_negative_numbers = true)]
        args: Vec<String>,
    },

    /// Filter description by QUERY. Supports regex queries
    Description {
        #[arg(value_name = "QUERY")]
        args: Vec<String>,
    },

    /// Filter by an included amenity NAME (yard, garage, pool, ...)
    #[command(alias = "amenities")]
    Ammenities {
        #[arg(value_name = "NAME")]
        args: Vec<String>,
    },
}

impl Commands {
    /// Split a subcommand into its predicate kind and raw tokens
    fn into_parts(self) -> (PredicateKind, Vec<String>) {
        match self {
            Commands::Footage { args } => (PredicateKind::Footage, args),
            Commands::Price { args } => (PredicateKind::Price, args),
            Commands::Rooms { args } => (PredicateKind::Rooms, args),
            Commands::Bathrooms { args } => (PredicateKind::Bathrooms, args),
            Commands::Lighting { args } => (PredicateKind::Lighting, args),
            Commands::Location { args } => (PredicateKind::Location, args),
            Commands::Description { args } => (PredicateKind::Description, args),
            Commands::Ammenities { args } => (PredicateKind::Amenities, args),
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing; stdout is reserved for the filtered listings
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match RunConfig::from_cli(cli).and_then(|config| run::run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
