use std::time::Duration;

use crate::color::Rgb;

// Installation defaults. Everything here can be overridden through `Settings`.

// Layout
pub const DEFAULT_APPENDAGES: usize = 12; // touch inputs and LED strips
pub const DEFAULT_LEDS_PER_APPENDAGE: usize = 48;

// Timing
pub const DEFAULT_TICK: Duration = Duration::from_millis(10); // control loop period
pub const DEFAULT_ANIMATION_SLOWDOWN: u32 = 2; // animation frames advance every Nth tick
pub const DEFAULT_PIXEL_REPEAT: usize = 3; // pixels per palette entry in a sweep
pub const DEFAULT_RETRIGGER: bool = false; // let a running sweep finish first
pub const DEFAULT_IDLE_THRESHOLD: Duration = Duration::from_secs(30);
pub const DEFAULT_IDLE_REPEAT: Duration = Duration::from_secs(15);

// Ambient wave: intensity = (cos + 1) * SCALE + FLOOR, so it spans FLOOR..=FLOOR + 2 * SCALE
pub const AMBIENT_WAVE_SCALE: f32 = 63.0;
pub const AMBIENT_WAVE_FLOOR: f32 = 64.0;
pub const AMBIENT_WAVE_SPATIAL_FREQUENCY: f32 = 3.0; // wave crests per strip length, roughly

/// Sweep palette, painted from the tip of the appendage inwards.
pub const DEFAULT_SWEEP_PALETTE: [Rgb; 6] = [
    Rgb::from_packed(0x1000FF), // violet
    Rgb::from_packed(0x0000FF), // blue
    Rgb::from_packed(0x00FF00), // green
    Rgb::from_packed(0xFFFF00), // yellow
    Rgb::from_packed(0xFF1000), // orange
    Rgb::from_packed(0xFF0000), // red
];

// Eye devices count time in quarter seconds.
pub const EYE_TIME_UNIT: Duration = Duration::from_millis(250);
pub const EYE_RESTING_COLOR: Rgb = Rgb::WHITE;

// Sound files whose name starts with this are played on touch; the rest when idle.
pub const DEFAULT_TOUCH_SOUND_PREFIX: &str = "touch";
