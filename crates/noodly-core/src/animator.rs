use std::f32::consts::TAU;

use crate::color::Rgb;
use crate::constants::{AMBIENT_WAVE_FLOOR, AMBIENT_WAVE_SCALE, AMBIENT_WAVE_SPATIAL_FREQUENCY};
use crate::error::ConfigError;
use crate::settings::{AnimationParams, Direction};

/// `sweep_position` while no sweep is running.
pub const SWEEP_IDLE: isize = -1;

/// Animation state of a single appendage.
///
/// Every call to [`advance_frame`](Self::advance_frame) is one tick. Only every
/// `slowdown`-th tick actually renders: the ambient wave is repainted over the
/// whole strip and, if a sweep is running, the palette is painted on top and
/// the sweep moves one pixel. Both layers share that gate so they never drift
/// apart.
#[derive(Clone, Debug)]
pub struct Animator {
    pixels: Vec<Rgb>,
    direction: Direction,
    phase_seed: u32,
    sweep_position: isize,
    tick_counter: u32,
    params: AnimationParams,
}

impl Animator {
    /// `phase_seed` offsets the ambient wave so neighbouring strips don't
    /// pulse in lockstep; draw it from a shared RNG.
    pub fn new(
        channel_length: usize,
        direction: Direction,
        phase_seed: u32,
        params: AnimationParams,
    ) -> Result<Self, ConfigError> {
        if channel_length == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        params.validate()?;
        Ok(Self {
            pixels: vec![Rgb::BLACK; channel_length],
            direction,
            phase_seed,
            sweep_position: SWEEP_IDLE,
            tick_counter: 0,
            params,
        })
    }

    /// Touch input for this tick. A new sweep starts unless one is already
    /// running; with retrigger enabled it always restarts from the top.
    pub fn trigger(&mut self, is_active: bool) {
        if !is_active {
            return;
        }
        if self.params.retrigger || !self.is_sweeping() {
            self.sweep_position = self.pixels.len() as isize;
        }
    }

    /// Advance one tick. Returns true exactly once per sweep, on the frame it
    /// finishes.
    pub fn advance_frame(&mut self) -> bool {
        let tick = self.tick_counter;
        self.tick_counter = self.tick_counter.wrapping_add(1);
        if tick % self.params.slowdown != 0 {
            return false;
        }

        self.paint_ambient();

        if !self.is_sweeping() {
            return false;
        }
        self.paint_sweep();

        // Position 0 would put the head at pixel -1, i.e. nothing left on the
        // strip, so that frame is folded into completion.
        self.sweep_position -= 1;
        if self.sweep_position == 0 {
            self.sweep_position = SWEEP_IDLE;
        }
        self.sweep_position == SWEEP_IDLE
    }

    fn paint_ambient(&mut self) {
        let len = self.pixels.len();
        let phase = background_phase(self.phase_seed, self.tick_counter, len);
        for (i, px) in self.pixels.iter_mut().enumerate() {
            *px = ambient_color(i, len, phase);
        }
    }

    fn paint_sweep(&mut self) {
        let len = self.pixels.len() as isize;
        let repeat = isize::try_from(self.params.pixel_repeat).unwrap_or(isize::MAX);
        // Highest position still to paint; colours run down from the head.
        let mut top = (self.sweep_position - 1).min(len - 1);
        for &color in &self.params.palette {
            if top < 0 {
                break;
            }
            let bottom = top.saturating_sub(repeat - 1).max(0);
            for pos in bottom..=top {
                let index = match self.direction {
                    Direction::Forward => pos,
                    Direction::Reverse => len - 1 - pos,
                };
                self.pixels[index as usize] = color;
            }
            top = top.saturating_sub(repeat);
        }
    }

    pub fn is_sweeping(&self) -> bool {
        self.sweep_position >= 0
    }

    pub fn sweep_position(&self) -> isize {
        self.sweep_position
    }

    pub fn tick_counter(&self) -> u32 {
        self.tick_counter
    }

    pub fn phase_seed(&self) -> u32 {
        self.phase_seed
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn channel_length(&self) -> usize {
        self.pixels.len()
    }

    /// The frame as last rendered.
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }
}

/// Offset of the ambient wave along a strip of `channel_length` pixels.
///
/// Wraps cleanly for any seed and tick value.
#[inline]
pub fn background_phase(phase_seed: u32, tick_counter: u32, channel_length: usize) -> usize {
    phase_seed.wrapping_add(tick_counter / 2) as usize % channel_length
}

/// Brightness of the ambient wave at `index`, within
/// `AMBIENT_WAVE_FLOOR..=AMBIENT_WAVE_FLOOR + 2 * AMBIENT_WAVE_SCALE`.
pub fn ambient_intensity(index: usize, channel_length: usize, phase: usize) -> u8 {
    let fraction =
        (AMBIENT_WAVE_SPATIAL_FREQUENCY * index as f32 + phase as f32) / channel_length as f32;
    let brightness = (TAU * fraction).cos();
    ((brightness + 1.0) * AMBIENT_WAVE_SCALE + AMBIENT_WAVE_FLOOR)
        .round()
        .clamp(0.0, u8::MAX as f32) as u8
}

/// Ambient wave colour at `index`: warm yellow, red and green at equal
/// intensity.
#[inline]
pub fn ambient_color(index: usize, channel_length: usize, phase: usize) -> Rgb {
    let level = ambient_intensity(index, channel_length, phase);
    Rgb::new(level, level, 0)
}
