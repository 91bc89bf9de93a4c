//! Room parameter set and its builder.

use serde::{Deserialize, Serialize};

use crate::error::RoomError;

/// Target room length used when none is given.
pub const DEFAULT_LENGTH: f64 = 100.0;

/// Camera rotation: an amount and a swing range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Rotation amount
    pub amount: f64,
    /// Swing range in degrees; 0 gives continuous CW/CCW rotation
    pub range_degrees: f64,
}

impl Rotation {
    /// Creates a rotation from an amount and a range in degrees.
    pub fn new(amount: f64, range_degrees: f64) -> Self {
        Self {
            amount,
            range_degrees,
        }
    }

    /// Returns the range converted to radians, as the runtime expects it.
    pub fn range_radians(&self) -> f64 {
        self.range_degrees.to_radians()
    }
}

/// Fog gradient, upper and lower RGB colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fog {
    pub upper: [f64; 3],
    pub lower: [f64; 3],
}

impl Fog {
    /// Builds a fog from `[r_upper, g_upper, b_upper, r_lower, g_lower, b_lower]`.
    pub fn from_components(c: [f64; 6]) -> Self {
        Self {
            upper: [c[0], c[1], c[2]],
            lower: [c[3], c[4], c[5]],
        }
    }

    /// Returns the six components, upper color first.
    pub fn components(&self) -> [f64; 6] {
        let [ur, ug, ub] = self.upper;
        let [lr, lg, lb] = self.lower;
        [ur, ug, ub, lr, lg, lb]
    }
}

impl Default for Fog {
    /// White at the top, black at the bottom.
    fn default() -> Self {
        Self::from_components([1.0, 1.0, 1.0, 0.0, 0.0, 0.0])
    }
}

/// Echo effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    pub volume: f64,
    pub delay: f64,
    pub fallback_volume: f64,
    pub fallback_lowpass: f64,
}

impl Echo {
    pub fn components(&self) -> [f64; 4] {
        [
            self.volume,
            self.delay,
            self.fallback_volume,
            self.fallback_lowpass,
        ]
    }
}

/// Reverberation effect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reverb {
    pub volume: f64,
    pub length: f64,
    pub lowpass: f64,
}

impl Reverb {
    pub fn components(&self) -> [f64; 3] {
        [self.volume, self.length, self.lowpass]
    }
}

/// Everything needed to emit one room script.
///
/// Optional fields are independent of each other: leaving one out only drops
/// the corresponding statement from the generated script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomParams {
    /// Segment pool, in registration order
    pub segments: Vec<String>,
    /// Segment placed first when the level asks for a sequence start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_segment: Option<String>,
    /// Segment placed last when the level asks for a sequence end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_segment: Option<String>,
    /// Target room length
    pub length: f64,
    /// Target length in training mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_training: Option<f64>,
    /// Target length in mayhem mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length_mayhem: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gravity: Option<f64>,
    pub fog: Fog,
    /// Particle effect name, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub particles: Option<String>,
    /// Music track name, passed through verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echo: Option<Echo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reverb: Option<Reverb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lowpass: Option<f64>,
}

impl RoomParams {
    /// Creates a builder seeded with the first pool segment.
    pub fn builder(segment: impl Into<String>) -> RoomParamsBuilder {
        RoomParamsBuilder::new().segment(segment)
    }

    /// Checks the invariants the script emitter relies on.
    ///
    /// The segment pool must be non-empty and every number must be finite,
    /// since NaN and infinities have no Lua literal form. Names are not
    /// checked against any asset list.
    pub fn validate(&self) -> Result<(), RoomError> {
        if self.segments.is_empty() {
            return Err(RoomError::NoSegments);
        }

        check_finite("length", self.length)?;
        check_optional("training length", self.length_training)?;
        check_optional("mayhem length", self.length_mayhem)?;
        if let Some(rotation) = &self.rotation {
            check_all("rotation", &[rotation.amount, rotation.range_degrees])?;
        }
        check_optional("gravity", self.gravity)?;
        check_all("fog", &self.fog.components())?;
        if let Some(echo) = &self.echo {
            check_all("echo", &echo.components())?;
        }
        if let Some(reverb) = &self.reverb {
            check_all("reverb", &reverb.components())?;
        }
        check_optional("lowpass", self.lowpass)?;

        Ok(())
    }
}

fn check_finite(field: &'static str, value: f64) -> Result<(), RoomError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RoomError::NonFiniteValue { field, value })
    }
}

fn check_optional(field: &'static str, value: Option<f64>) -> Result<(), RoomError> {
    value.map_or(Ok(()), |v| check_finite(field, v))
}

fn check_all(field: &'static str, values: &[f64]) -> Result<(), RoomError> {
    values.iter().try_for_each(|&v| check_finite(field, v))
}

/// Builder for [`RoomParams`].
#[derive(Debug, Clone)]
pub struct RoomParamsBuilder {
    params: RoomParams,
}

impl RoomParamsBuilder {
    /// Creates a builder with an empty segment pool and default settings.
    pub fn new() -> Self {
        Self {
            params: RoomParams {
                segments: Vec::new(),
                start_segment: None,
                end_segment: None,
                length: DEFAULT_LENGTH,
                length_training: None,
                length_mayhem: None,
                rotation: None,
                gravity: None,
                fog: Fog::default(),
                particles: None,
                music: None,
                echo: None,
                reverb: None,
                lowpass: None,
            },
        }
    }

    /// Appends a segment to the pool.
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.params.segments.push(segment.into());
        self
    }

    /// Appends several segments to the pool, keeping their order.
    pub fn segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.params
            .segments
            .extend(segments.into_iter().map(Into::into));
        self
    }

    pub fn start_segment(mut self, segment: impl Into<String>) -> Self {
        self.params.start_segment = Some(segment.into());
        self
    }

    pub fn end_segment(mut self, segment: impl Into<String>) -> Self {
        self.params.end_segment = Some(segment.into());
        self
    }

    pub fn length(mut self, length: f64) -> Self {
        self.params.length = length;
        self
    }

    pub fn training_length(mut self, length: f64) -> Self {
        self.params.length_training = Some(length);
        self
    }

    pub fn mayhem_length(mut self, length: f64) -> Self {
        self.params.length_mayhem = Some(length);
        self
    }

    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.params.rotation = Some(rotation);
        self
    }

    pub fn gravity(mut self, gravity: f64) -> Self {
        self.params.gravity = Some(gravity);
        self
    }

    pub fn fog(mut self, fog: Fog) -> Self {
        self.params.fog = fog;
        self
    }

    pub fn particles(mut self, particles: impl Into<String>) -> Self {
        self.params.particles = Some(particles.into());
        self
    }

    pub fn music(mut self, music: impl Into<String>) -> Self {
        self.params.music = Some(music.into());
        self
    }

    pub fn echo(mut self, echo: Echo) -> Self {
        self.params.echo = Some(echo);
        self
    }

    pub fn reverb(mut self, reverb: Reverb) -> Self {
        self.params.reverb = Some(reverb);
        self
    }

    pub fn lowpass(mut self, lowpass: f64) -> Self {
        self.params.lowpass = Some(lowpass);
        self
    }

    /// Builds the parameter set. Call [`RoomParams::validate`] before emitting.
    pub fn build(self) -> RoomParams {
        self.params
    }
}

impl Default for RoomParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
