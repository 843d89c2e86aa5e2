//! Boundaries to the hardware and the outside world.
//!
//! The core only ever talks to these traits. Implementations are expected to
//! be bounded-time; the engine has no timeouts of its own.

use std::io;
use std::path::Path;

use crate::color::Rgb;
use crate::eye::EyeSequence;

/// LED strips, one buffer per channel, flushed together.
pub trait OutputSink {
    fn channel_count(&self) -> usize;

    fn channel_length(&self, channel: usize) -> usize;

    /// Stage a pixel. `index` is always below `channel_length(channel)`.
    fn set_pixel(&mut self, channel: usize, index: usize, color: Rgb);

    /// Push every staged channel to the strips at once.
    fn commit_all(&mut self) -> io::Result<()>;
}

/// Capacitive touch inputs, polled once per tick.
pub trait TouchSource {
    /// Number of inputs this source can report on.
    fn input_count(&self) -> usize;

    /// Latch a fresh sample of every input.
    fn refresh_samples(&mut self) -> io::Result<()>;

    /// State from the last `refresh_samples`. Unknown inputs read as untouched.
    fn is_touched(&self, input: usize) -> bool;
}

/// Secondary ambient light ("eye").
pub trait EyeDevice {
    fn set_static_color(&mut self, color: Rgb);

    /// Replace whatever the device is playing with `sequence`. Returns at once.
    fn play_sequence(&mut self, sequence: &EyeSequence);
}

/// Fire-and-forget sound playback.
pub trait SoundTrigger {
    fn play(&mut self, file: &Path);
}
