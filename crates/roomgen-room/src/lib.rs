//! Room script generation for Smash Hit levels.
//!
//! This crate turns a [`RoomParams`] set into a Lua room script: an `init()`
//! that configures rotation, gravity, fog, particles, music, and audio
//! effects, registers a segment pool, and places segments until a target
//! length is reached, plus an empty `tick()`.
//!
//! # Example
//!
//! ```
//! use roomgen_room::{generate_script, RoomParams, Rotation};
//!
//! let params = RoomParams::builder("basic/s1")
//!     .segment("basic/s2")
//!     .start_segment("basic/start")
//!     .rotation(Rotation::new(1.0, 45.0))
//!     .music("ambient")
//!     .build();
//!
//! let script = generate_script(&params).unwrap();
//! assert!(script.contains("confSegment(\"basic/s2\", 1)"));
//! assert!(script.contains("mgMusic(\"ambient\")"));
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error types and stable error codes
//! - [`params`]: The parameter set and its builder
//! - [`lua`]: Lua literal formatting
//! - [`script`]: Script emission

pub mod error;
pub mod lua;
pub mod params;
pub mod script;

pub use error::{ErrorCode, RoomError};
pub use params::{Echo, Fog, Reverb, RoomParams, RoomParamsBuilder, Rotation, DEFAULT_LENGTH};
pub use script::{generate_script, write_script, HEADER};
