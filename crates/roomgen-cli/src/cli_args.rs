//! Command-line argument definitions for `roomgen`.
//!
//! The option table mirrors the room parameter set one to one. Multi-value
//! options take a fixed number of values; repeating any single-occurrence
//! option keeps the last one.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use roomgen_room::{Echo, Fog, Reverb, RoomParams, RoomParamsBuilder, Rotation, DEFAULT_LENGTH};

use crate::output::OutputTarget;

/// Generate a generic Smash Hit room
#[derive(Debug, Parser)]
#[command(name = "roomgen")]
#[command(author, version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Cli {
    /// File to which the room will be written ("-" for stdout)
    #[arg(short = 'o', long = "output-file", value_name = "output-file")]
    pub output_file: String,

    /// Add a segment to the pool; repeat for more segments (at least one)
    #[arg(
        short = 's',
        long = "segment",
        value_name = "segment",
        required = true,
        action = ArgAction::Append,
        allow_negative_numbers = true
    )]
    pub segments: Vec<String>,

    /// Segment placed first when the level starts a sequence here
    #[arg(long = "start", value_name = "start-segment", allow_negative_numbers = true)]
    pub start_segment: Option<String>,

    /// Segment placed last when the level ends a sequence here
    #[arg(long = "end", value_name = "end-segment", allow_negative_numbers = true)]
    pub end_segment: Option<String>,

    /// Room length
    #[arg(
        short = 'l',
        long,
        value_name = "length",
        default_value_t = DEFAULT_LENGTH,
        value_parser = parse_finite,
        allow_negative_numbers = true
    )]
    pub length: f64,

    /// Room length in training mode
    #[arg(
        long = "training-length",
        value_name = "length",
        value_parser = parse_finite,
        allow_negative_numbers = true
    )]
    pub training_length: Option<f64>,

    /// Room length in mayhem mode
    #[arg(
        long = "mayhem-length",
        value_name = "length",
        value_parser = parse_finite,
        allow_negative_numbers = true
    )]
    pub mayhem_length: Option<f64>,

    /// Rotation amount and range in degrees; a range of 0 rotates CW/CCW
    #[arg(
        short = 'r',
        long,
        num_args = 2,
        value_names = ["amount", "range"],
        value_parser = parse_finite,
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    pub rotation: Option<Vec<f64>>,

    /// Gravity
    #[arg(
        short = 'g',
        long,
        value_name = "gravity",
        value_parser = parse_finite,
        allow_negative_numbers = true
    )]
    pub gravity: Option<f64>,

    /// Fog color, upper then lower RGB; white-black by default
    #[arg(
        short = 'f',
        long,
        num_args = 6,
        value_names = ["r_upper", "g_upper", "b_upper", "r_lower", "g_lower", "b_lower"],
        default_values_t = vec![1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        value_parser = parse_finite,
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    pub fog: Vec<f64>,

    /// Particle effect; stock values are starfield, lowrising, lowrising2,
    /// sidesrising, fallinglite, bubbles, dustyfalling
    #[arg(
        short = 'p',
        long,
        value_name = "particles",
        allow_negative_numbers = true
    )]
    pub particles: Option<String>,

    /// Music track
    #[arg(short = 'm', long, value_name = "music", allow_negative_numbers = true)]
    pub music: Option<String>,

    /// Echo effect
    #[arg(
        short = 'E',
        long,
        num_args = 4,
        value_names = ["volume", "delay", "fallback_volume", "fallback_lowpass"],
        value_parser = parse_finite,
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    pub echo: Option<Vec<f64>>,

    /// Reverberation effect
    #[arg(
        short = 'R',
        long,
        num_args = 3,
        value_names = ["volume", "length", "lowpass"],
        value_parser = parse_finite,
        allow_negative_numbers = true,
        action = ArgAction::Set
    )]
    pub reverb: Option<Vec<f64>>,

    /// Low pass effect
    #[arg(
        short = 'L',
        long,
        value_name = "strength",
        value_parser = parse_finite,
        allow_negative_numbers = true
    )]
    pub lowpass: Option<f64>,

    /// Output machine-readable JSON diagnostics (no colored output)
    #[arg(long)]
    pub json: bool,

    /// Suppress status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    /// Where the room goes. Nothing is opened yet.
    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::from_arg(&self.output_file)
    }

    /// Converts the parsed options into a room parameter set.
    pub fn room_params(&self) -> Result<RoomParams> {
        let mut builder = RoomParamsBuilder::new()
            .segments(self.segments.iter().cloned())
            .length(self.length)
            .fog(Fog::from_components(fixed(&self.fog, "fog")?));

        if let Some(start) = &self.start_segment {
            builder = builder.start_segment(start.clone());
        }
        if let Some(end) = &self.end_segment {
            builder = builder.end_segment(end.clone());
        }
        if let Some(length) = self.training_length {
            builder = builder.training_length(length);
        }
        if let Some(length) = self.mayhem_length {
            builder = builder.mayhem_length(length);
        }
        if let Some(values) = &self.rotation {
            let [amount, range]: [f64; 2] = fixed(values, "rotation")?;
            builder = builder.rotation(Rotation::new(amount, range));
        }
        if let Some(gravity) = self.gravity {
            builder = builder.gravity(gravity);
        }
        if let Some(particles) = &self.particles {
            builder = builder.particles(particles.clone());
        }
        if let Some(music) = &self.music {
            builder = builder.music(music.clone());
        }
        if let Some(values) = &self.echo {
            let [volume, delay, fallback_volume, fallback_lowpass]: [f64; 4] =
                fixed(values, "echo")?;
            builder = builder.echo(Echo {
                volume,
                delay,
                fallback_volume,
                fallback_lowpass,
            });
        }
        if let Some(values) = &self.reverb {
            let [volume, length, lowpass]: [f64; 3] = fixed(values, "reverb")?;
            builder = builder.reverb(Reverb {
                volume,
                length,
                lowpass,
            });
        }
        if let Some(lowpass) = self.lowpass {
            builder = builder.lowpass(lowpass);
        }

        Ok(builder.build())
    }
}

/// Parses a float, rejecting NaN and infinities.
fn parse_finite(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", s))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("'{}' is not a finite number", s))
    }
}

fn fixed<const N: usize>(values: &[f64], option: &str) -> Result<[f64; N]> {
    values
        .try_into()
        .with_context(|| format!("--{} takes {} values, got {}", option, N, values.len()))
}
