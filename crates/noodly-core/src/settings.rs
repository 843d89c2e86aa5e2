use std::time::Duration;

use crate::color::Rgb;
use crate::constants::*;
use crate::error::ConfigError;
use crate::eye::EyeSequence;

/// Which end of the strip a sweep starts from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Sweep walks from the last pixel down to pixel 0.
    #[default]
    Forward,
    /// Mirrored: walks from pixel 0 up to the last pixel.
    Reverse,
}

/// Per-animator tuning shared by every channel.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationParams {
    /// Animation frames are computed on every Nth tick only.
    pub slowdown: u32,
    /// How many consecutive pixels each palette colour covers.
    pub pixel_repeat: usize,
    pub palette: Vec<Rgb>,
    /// Restart a running sweep on touch instead of letting it finish.
    pub retrigger: bool,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            slowdown: DEFAULT_ANIMATION_SLOWDOWN,
            pixel_repeat: DEFAULT_PIXEL_REPEAT,
            palette: DEFAULT_SWEEP_PALETTE.to_vec(),
            retrigger: DEFAULT_RETRIGGER,
        }
    }
}

impl AnimationParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slowdown == 0 {
            return Err(ConfigError::ZeroSlowdown);
        }
        if self.pixel_repeat == 0 {
            return Err(ConfigError::ZeroPixelRepeat);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }

    /// Pixels covered by one full sweep palette.
    pub fn sweep_width(&self) -> usize {
        self.palette.len() * self.pixel_repeat
    }
}

/// Decoupled wiring: a single touch input drives one primary appendage, and
/// that appendage finishing lights up all the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cascade {
    pub input: usize,
    pub primary: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    /// Control loop period; the time base for everything else.
    pub tick: Duration,
    pub animation: AnimationParams,
    /// Per-channel sweep direction. Channels past the end are `Forward`.
    pub directions: Vec<Direction>,
    pub cascade: Option<Cascade>,
    /// Quiet time after the last touch effect before idle effects start.
    pub idle_threshold: Duration,
    /// Minimum spacing between idle effects.
    pub idle_repeat: Duration,
    pub eye_sequence: EyeSequence,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick: DEFAULT_TICK,
            animation: AnimationParams::default(),
            directions: Vec::new(),
            cascade: None,
            idle_threshold: DEFAULT_IDLE_THRESHOLD,
            idle_repeat: DEFAULT_IDLE_REPEAT,
            eye_sequence: EyeSequence::default(),
        }
    }
}

impl Settings {
    pub fn direction(&self, channel: usize) -> Direction {
        self.directions.get(channel).copied().unwrap_or_default()
    }

    /// Check everything that can be checked without knowing the hardware.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick.is_zero() {
            return Err(ConfigError::ZeroTick);
        }
        self.animation.validate()
    }

    /// Check against the output channels and touch inputs actually present.
    pub fn validate_for_hardware(&self, channels: usize, inputs: usize) -> Result<(), ConfigError> {
        self.validate()?;
        if channels == 0 {
            return Err(ConfigError::NoChannels);
        }
        if let Some(cascade) = self.cascade {
            if cascade.primary >= channels {
                return Err(ConfigError::CascadeOutOfRange {
                    role: "primary",
                    index: cascade.primary,
                    available: channels,
                });
            }
            if cascade.input >= inputs {
                return Err(ConfigError::CascadeOutOfRange {
                    role: "input",
                    index: cascade.input,
                    available: inputs,
                });
            }
        }
        Ok(())
    }

    /// Ticks between frames that actually change the strips.
    pub fn frame_period(&self) -> Duration {
        self.tick * self.animation.slowdown
    }
}
