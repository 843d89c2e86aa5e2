use smallvec::SmallVec;
use std::time::Duration;

use crate::color::Rgb;
use crate::constants::{EYE_RESTING_COLOR, EYE_TIME_UNIT};

/// One step of an eye sequence: morph to `color`, then hold it.
///
/// Durations are in device time units of [`EYE_TIME_UNIT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EyeStep {
    pub color: Rgb,
    pub morph_ticks: u8,
    pub hold_ticks: u8,
}

impl EyeStep {
    pub const fn new(color: Rgb, morph_ticks: u8, hold_ticks: u8) -> Self {
        Self {
            color,
            morph_ticks,
            hold_ticks,
        }
    }

    pub fn morph(&self) -> Duration {
        EYE_TIME_UNIT * self.morph_ticks as u32
    }

    pub fn hold(&self) -> Duration {
        EYE_TIME_UNIT * self.hold_ticks as u32
    }
}

/// Ordered list of steps played by an eye device when a sweep reaches it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EyeSequence {
    steps: SmallVec<[EyeStep; 8]>,
}

impl EyeSequence {
    pub fn new(steps: impl IntoIterator<Item = EyeStep>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    pub fn steps(&self) -> &[EyeStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Colour the device ends up showing once the sequence has played out.
    pub fn resting_color(&self) -> Rgb {
        self.steps
            .last()
            .map(|s| s.color)
            .unwrap_or(EYE_RESTING_COLOR)
    }

    /// Playing time up to the final step's hold running out.
    pub fn total_duration(&self) -> Duration {
        self.steps.iter().map(|s| s.morph() + s.hold()).sum()
    }
}

impl Default for EyeSequence {
    /// The rainbow played back in reverse order of the strips, followed by a
    /// slow fade into white. The trailing white steps keep the eye white for
    /// minutes when nobody touches anything.
    fn default() -> Self {
        Self::new([
            EyeStep::new(Rgb::new(0xff, 0x00, 0x00), 1, 1),
            EyeStep::new(Rgb::new(0xff, 0xff, 0x00), 1, 1),
            EyeStep::new(Rgb::new(0x00, 0xff, 0x00), 1, 1),
            EyeStep::new(Rgb::new(0x00, 0x00, 0xff), 1, 1),
            EyeStep::new(Rgb::new(0x10, 0x00, 0xff), 1, 1),
            EyeStep::new(EYE_RESTING_COLOR, 10, u8::MAX),
            EyeStep::new(EYE_RESTING_COLOR, 0, u8::MAX),
            EyeStep::new(EYE_RESTING_COLOR, 0, u8::MAX),
        ])
    }
}
