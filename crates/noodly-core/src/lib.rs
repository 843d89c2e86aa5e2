//! Animation engine and orchestration for a touch-reactive light and sound
//! installation.
//!
//! Each physical LED strip ("appendage") is driven by an [`Animator`] that
//! layers a triggered rainbow sweep over a slow ambient wave. The
//! [`Orchestrator`] ticks all animators in lockstep, flushes the strips in one
//! go, and fans sweep completions out to the eye devices and sound player.
//! When nobody has touched anything for a while the idle watchdog plays the
//! same effects with a separate sound pool.
//!
//! Hardware lives behind the traits in [`hal`]; nothing in this crate talks to
//! a bus or spawns a process.

pub mod animator;
pub mod clock;
pub mod color;
pub mod constants;
pub mod error;
pub mod eye;
pub mod hal;
pub mod idle;
pub mod orchestrator;
pub mod settings;
pub mod sound;

pub use animator::*;
pub use clock::*;
pub use color::*;
pub use constants::*;
pub use error::{ConfigError, Error};
pub use eye::*;
pub use hal::*;
pub use idle::*;
pub use orchestrator::*;
pub use settings::*;
pub use sound::*;
