//! Convert a listing file between CSV and JSON.
//!
//! Run with: cargo run --package records --example convert -- listings.csv listings.json

use records::{decode, encode, resolve_output_format, Format};
use std::path::Path;
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, output) = match args.as_slice() {
        [input, output] => (Path::new(input), Path::new(output)),
        _ => {
            eprintln!("usage: convert <INPUT> <OUTPUT>");
            std::process::exit(2);
        }
    };

    let start = Instant::now();
    let bytes = std::fs::read(input).expect("Failed to read input");
    let (properties, input_format) =
        decode(&bytes, Format::from_path(input)).expect("Failed to parse input");

    let output_format = resolve_output_format(Some(output), None, Some(input_format));
    let out = encode(&properties, output_format).expect("Failed to serialize");
    std::fs::write(output, out).expect("Failed to write output");

    println!(
        "Converted {} listings from {} to {} in {:?}",
        properties.len(),
        input_format,
        output_format,
        start.elapsed()
    );
}
