use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::SmallVec;
use std::fmt;

use crate::animator::Animator;
use crate::clock::Clock;
use crate::error::{ConfigError, Error, Result};
use crate::hal::{EyeDevice, OutputSink, SoundTrigger, TouchSource};
use crate::idle::IdleWatchdog;
use crate::settings::Settings;
use crate::sound::SoundPools;

/// Which kind of secondary effect fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// A touch-started sweep reached the eye.
    Trigger,
    /// Nothing happened for a while.
    Idle,
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::Trigger => f.write_str("touch"),
            Effect::Idle => f.write_str("idle"),
        }
    }
}

/// What happened during one tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Channels whose sweep finished this tick.
    pub completed: SmallVec<[usize; 16]>,
    pub effect: Option<Effect>,
}

/// Everything the engine drives but does not own the logic of.
pub struct Hardware<S, T, P, C> {
    pub sink: S,
    pub touch: T,
    pub eyes: Vec<Box<dyn EyeDevice>>,
    pub sound: P,
    pub clock: C,
}

/// The control loop: touch in, frames out, effects on completion or idle.
pub struct Orchestrator<S, T, P, C> {
    settings: Settings,
    animators: Vec<Animator>,
    sink: S,
    touch: T,
    eyes: Vec<Box<dyn EyeDevice>>,
    sound: P,
    clock: C,
    pools: SoundPools,
    rng: StdRng,
    watchdog: IdleWatchdog,
    ticks: u64,
}

impl<S, T, P, C> Orchestrator<S, T, P, C>
where
    S: OutputSink,
    T: TouchSource,
    P: SoundTrigger,
    C: Clock,
{
    /// Build one animator per output channel and park the eyes on their
    /// resting colour. `seed` feeds every random choice the engine makes.
    pub fn new(
        settings: Settings,
        hardware: Hardware<S, T, P, C>,
        pools: SoundPools,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        let Hardware {
            sink,
            touch,
            mut eyes,
            sound,
            clock,
        } = hardware;

        let channels = sink.channel_count();
        let inputs = touch.input_count();
        settings.validate_for_hardware(channels, inputs)?;
        if settings.cascade.is_none() && inputs < channels {
            warn!("only {inputs} touch inputs for {channels} appendages");
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let animators = (0..channels)
            .map(|channel| {
                let len = sink.channel_length(channel);
                if len == 0 {
                    return Err(ConfigError::EmptyChannel { channel });
                }
                Animator::new(
                    len,
                    settings.direction(channel),
                    rng.gen(),
                    settings.animation.clone(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;

        let resting = settings.eye_sequence.resting_color();
        for eye in &mut eyes {
            eye.set_static_color(resting);
        }

        let watchdog = IdleWatchdog::new(settings.idle_threshold, settings.idle_repeat, clock.now());

        info!(
            "{} appendages, {} eyes, {} touch / {} idle sounds, tick {:?}",
            animators.len(),
            eyes.len(),
            pools.touch.len(),
            pools.idle.len(),
            settings.tick
        );
        if let Some(cascade) = settings.cascade {
            info!(
                "cascade: input {} drives appendage {}",
                cascade.input, cascade.primary
            );
        }

        Ok(Self {
            settings,
            animators,
            sink,
            touch,
            eyes,
            sound,
            clock,
            pools,
            rng,
            watchdog,
            ticks: 0,
        })
    }

    /// Run until a hardware error. Never returns otherwise.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.tick()?;
        }
    }

    /// One iteration of the loop: sleep, sample, animate, flush, react.
    pub fn tick(&mut self) -> Result<TickReport> {
        self.clock.sleep(self.settings.tick);
        self.ticks += 1;

        self.touch.refresh_samples().map_err(Error::Touch)?;
        self.feed_touch();

        let mut report = TickReport::default();
        for (channel, animator) in self.animators.iter_mut().enumerate() {
            if animator.advance_frame() {
                debug!("appendage {channel} sweep complete");
                report.completed.push(channel);
            }
        }

        self.flush()?;

        let triggered = match self.settings.cascade {
            Some(cascade) => {
                let primary_done = report.completed.contains(&cascade.primary);
                if primary_done {
                    for (channel, animator) in self.animators.iter_mut().enumerate() {
                        if channel != cascade.primary {
                            animator.trigger(true);
                        }
                    }
                }
                primary_done
            }
            None => !report.completed.is_empty(),
        };

        let now = self.clock.now();
        if triggered {
            self.watchdog.record_trigger(now);
            report.effect = Some(Effect::Trigger);
        } else if self.watchdog.poll(now) {
            report.effect = Some(Effect::Idle);
        }
        if let Some(effect) = report.effect {
            self.dispatch(effect);
        }

        Ok(report)
    }

    fn feed_touch(&mut self) {
        match self.settings.cascade {
            Some(cascade) => {
                let touched = self.touch.is_touched(cascade.input);
                self.animators[cascade.primary].trigger(touched);
            }
            None => {
                for (input, animator) in self.animators.iter_mut().enumerate() {
                    animator.trigger(self.touch.is_touched(input));
                }
            }
        }
    }

    /// Stage every channel, then commit once so strips never show frames from
    /// different ticks.
    fn flush(&mut self) -> Result<()> {
        for (channel, animator) in self.animators.iter().enumerate() {
            for (index, &color) in animator.pixels().iter().enumerate() {
                self.sink.set_pixel(channel, index, color);
            }
        }
        self.sink.commit_all().map_err(Error::Output)
    }

    fn dispatch(&mut self, effect: Effect) {
        match self.pools.pick(effect, &mut self.rng) {
            Some(file) => {
                info!("{effect} effect, playing {}", file.display());
                self.sound.play(file);
            }
            None => info!("{effect} effect, no sounds configured"),
        }
        for eye in &mut self.eyes {
            eye.play_sequence(&self.settings.eye_sequence);
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn animators(&self) -> &[Animator] {
        &self.animators
    }

    pub fn animator(&self, channel: usize) -> Option<&Animator> {
        self.animators.get(channel)
    }

    pub fn watchdog(&self) -> &IdleWatchdog {
        &self.watchdog
    }

    /// Ticks run so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn touch_mut(&mut self) -> &mut T {
        &mut self.touch
    }

    pub fn sound(&self) -> &P {
        &self.sound
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn eye_count(&self) -> usize {
        self.eyes.len()
    }
}
