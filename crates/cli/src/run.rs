//! One pass: read, decode, filter, encode, write.

use crate::config::RunConfig;
use anyhow::{Context, Result};
use records::{decode, encode, resolve_output_format};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Execute a configured run.
///
/// The whole output buffer is built before the destination is opened, so a
/// failure never leaves a half-written file behind.
pub fn run(config: &RunConfig) -> Result<()> {
    run_with(config, io::stdin().lock(), io::stdout().lock())
}

/// Same as [`run`], with the standard streams supplied by the caller.
///
/// `stdin` is only read when no input path is configured, `stdout` only
/// written when no output path is.
pub fn run_with<R: Read, W: Write>(config: &RunConfig, stdin: R, stdout: W) -> Result<()> {
    let bytes = read_input(config.input.as_deref(), stdin)?;

    let (properties, input_format) =
        decode(&bytes, config.declared_input_format()).context("failed to parse input data")?;
    tracing::info!("Read {} records as {}", properties.len(), input_format);

    let selected = config.filter.apply(&properties);

    let output_format = resolve_output_format(
        config.output.as_deref(),
        config.output_format,
        Some(input_format),
    );
    tracing::info!("Writing {} records as {}", selected.len(), output_format);

    let buffer = encode(selected, output_format).context("failed to serialize results")?;
    write_output(config.output.as_deref(), &buffer, stdout)
}

fn read_input<R: Read>(path: Option<&Path>, mut stdin: R) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to open file: {}", path.display()))
        }
        None => {
            let mut bytes = Vec::new();
            stdin
                .read_to_end(&mut bytes)
                .context("Failed to read standard input")?;
            Ok(bytes)
        }
    }
}

fn write_output<W: Write>(path: Option<&Path>, buffer: &[u8], mut stdout: W) -> Result<()> {
    match path {
        Some(path) => fs::write(path, buffer)
            .with_context(|| format!("Failed to write file: {}", path.display())),
        None => stdout
            .write_all(buffer)
            .and_then(|_| stdout.flush())
            .context("Failed to write standard output"),
    }
}
