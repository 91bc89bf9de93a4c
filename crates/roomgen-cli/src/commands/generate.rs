//! Generate command implementation
//!
//! Renders a room script from the parsed options and writes it to the output
//! target. The target is opened only after the parameters validate, so
//! invalid parameters never leave a file behind.

use anyhow::{Context, Result};
use colored::Colorize;
use roomgen_room::RoomParams;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{error_codes, GenerateOutput, GenerateResult, JsonError};
use crate::cli_args::Cli;
use crate::output::{OutputTarget, WrittenRoom};

/// Run the generate command
///
/// # Arguments
/// * `cli` - Parsed command-line options
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(cli: &Cli) -> Result<ExitCode> {
    let target = cli.output_target();
    if cli.json {
        return run_json(cli, &target);
    }

    let params = cli.room_params()?;
    status(
        &target,
        cli.quiet,
        format!("{} {}", "Generating:".cyan().bold(), target),
    );

    let written = target
        .write_room(&params)
        .with_context(|| format!("Failed to generate room: {}", target))?;

    status(
        &target,
        cli.quiet,
        format!(
            "{} Wrote {} bytes ({} segments) to {}",
            "SUCCESS".green().bold(),
            written.bytes,
            params.segments.len(),
            target
        ),
    );

    Ok(ExitCode::SUCCESS)
}

fn run_json(cli: &Cli, target: &OutputTarget) -> Result<ExitCode> {
    let start = Instant::now();

    let output = match generate_to(cli, target) {
        Ok((params, written)) => GenerateOutput::success(GenerateResult {
            output: cli.output_file.clone(),
            segment_count: params.segments.len(),
            bytes: written.bytes,
            script_hash: written.script_hash,
            duration_ms: start.elapsed().as_millis() as u64,
        }),
        Err(error) => GenerateOutput::failure(vec![error]),
    };

    let json = serde_json::to_string_pretty(&output).context("Failed to serialize JSON output")?;
    // Keep stdout clean when the room itself goes there.
    if target.is_stdout() {
        eprintln!("{}", json);
    } else {
        println!("{}", json);
    }

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

fn generate_to(cli: &Cli, target: &OutputTarget) -> Result<(RoomParams, WrittenRoom), JsonError> {
    let params = cli
        .room_params()
        .map_err(|e| JsonError::new(error_codes::INVALID_OPTIONS, format!("{:#}", e)))?;
    let written = target.write_room(&params).map_err(|e| JsonError::from(&e))?;
    Ok((params, written))
}

fn status(target: &OutputTarget, quiet: bool, message: String) {
    if quiet {
        return;
    }
    if target.is_stdout() {
        eprintln!("{}", message);
    } else {
        println!("{}", message);
    }
}
