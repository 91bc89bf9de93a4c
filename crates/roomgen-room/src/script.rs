//! Room script emission.
//!
//! A room script is a Lua chunk with two functions. `init()` configures the
//! environment, registers the segment pool, and places segments until the
//! target length is reached. `tick()` is empty.
//!
//! Statements are emitted in a fixed order and each optional parameter maps
//! to its own line (or block), so leaving a parameter out never changes any
//! other line of the output.

use std::io::Write;

use crate::error::RoomError;
use crate::lua;
use crate::params::RoomParams;

/// Comment lines written at the top of every script.
pub const HEADER: [&str; 2] = [
    "-- generated using roomgen",
    "-- https://github.com/yorshex/sh-roomgen",
];

/// `player.mode` value for training mode.
pub const TRAINING_MODE: &str = "0";
/// `player.mode` value for mayhem mode.
pub const MAYHEM_MODE: &str = "2";

/// Line-oriented text buffer indenting with one tab per level.
struct Emitter {
    buf: String,
}

impl Emitter {
    fn new() -> Self {
        Self { buf: String::new() }
    }

    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.buf.push('\t');
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn call(&mut self, depth: usize, function: &str, args: &str) {
        self.line(depth, &format!("{}({})", function, args));
    }

    /// Places `segment` (a Lua expression) at the current offset.
    fn place(&mut self, depth: usize, segment: &str) {
        self.line(depth, &format!("l = l + mgSegment({}, -l)", segment));
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Renders the room script for `params`.
///
/// Validates the parameters first; the same parameters always produce the
/// same text.
pub fn generate_script(params: &RoomParams) -> Result<String, RoomError> {
    params.validate()?;

    let mut out = Emitter::new();
    for line in HEADER {
        out.line(0, line);
    }
    out.blank();

    out.line(0, "function init()");
    out.line(1, "pStart = mgGetBool(\"start\", false)");
    out.line(1, "pEnd = mgGetBool(\"end\", false)");
    out.blank();

    emit_environment(&mut out, params);
    out.blank();

    emit_length(&mut out, params);
    out.blank();

    for segment in &params.segments {
        out.call(1, "confSegment", &format!("{}, 1", lua::string(segment)));
    }
    out.blank();

    emit_placement(&mut out, params);
    out.blank();

    out.line(1, "mgLength(l)");
    out.line(0, "end");
    out.blank();

    out.line(0, "function tick()");
    out.line(0, "end");

    Ok(out.finish())
}

/// Renders the script and writes it to `writer`, returning the byte count.
///
/// Nothing is written if validation fails.
pub fn write_script<W: Write>(params: &RoomParams, writer: &mut W) -> Result<usize, RoomError> {
    let script = generate_script(params)?;
    writer.write_all(script.as_bytes())?;
    writer.flush()?;
    Ok(script.len())
}

fn emit_environment(out: &mut Emitter, params: &RoomParams) {
    if let Some(rotation) = &params.rotation {
        out.call(
            1,
            "mgRotation",
            &lua::numbers(&[rotation.amount, rotation.range_radians()]),
        );
    }
    if let Some(gravity) = params.gravity {
        out.call(1, "mgGravity", &lua::number(gravity));
    }
    out.call(1, "mgFogColor", &lua::numbers(&params.fog.components()));
    if let Some(particles) = &params.particles {
        out.call(1, "mgParticles", &lua::string(particles));
    }
    if let Some(music) = &params.music {
        out.call(1, "mgMusic", &lua::string(music));
    }
    if let Some(echo) = &params.echo {
        out.call(1, "mgEcho", &lua::numbers(&echo.components()));
    }
    if let Some(reverb) = &params.reverb {
        out.call(1, "mgReverb", &lua::numbers(&reverb.components()));
    }
    if let Some(lowpass) = params.lowpass {
        out.call(1, "mgLowPass", &lua::number(lowpass));
    }
}

fn emit_length(out: &mut Emitter, params: &RoomParams) {
    out.line(1, "local l = 0");
    out.blank();
    out.line(1, &format!("local L = {}", lua::number(params.length)));

    let overrides = [
        (TRAINING_MODE, params.length_training),
        (MAYHEM_MODE, params.length_mayhem),
    ];
    for (mode, length) in overrides {
        if let Some(length) = length {
            out.line(
                1,
                &format!(
                    "if mgGet(\"player.mode\")=={} then L = {} end",
                    lua::string(mode),
                    lua::number(length)
                ),
            );
        }
    }
}

fn emit_placement(out: &mut Emitter, params: &RoomParams) {
    if let Some(start) = &params.start_segment {
        out.line(1, "if pStart then");
        out.place(2, &lua::string(start));
        out.line(1, "end");
    }

    // Terminates only if every segment reports a positive length; that is
    // the runtime's responsibility.
    out.line(1, "while l < L do");
    out.line(2, "s = nextSegment()");
    out.place(2, "s");
    out.line(1, "end");

    if let Some(end) = &params.end_segment {
        out.line(1, "if pEnd then");
        out.place(2, &lua::string(end));
        out.line(1, "end");
    }
}
