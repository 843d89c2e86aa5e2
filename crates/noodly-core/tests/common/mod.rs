// Recording stand-ins for the hardware traits, shared by the integration tests.

#![allow(dead_code)]

use noodly_core::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

/// Keeps a staging buffer and a copy of what was last committed.
pub struct RecordingSink {
    lengths: Vec<usize>,
    staged: Vec<Vec<Rgb>>,
    pub committed: Vec<Vec<Rgb>>,
    pub commits: usize,
    pub staged_since_commit: usize,
    pub staged_per_commit: Vec<usize>,
    pub fail_commit: bool,
}

impl RecordingSink {
    pub fn new(lengths: &[usize]) -> Self {
        Self {
            lengths: lengths.to_vec(),
            staged: lengths.iter().map(|&n| vec![Rgb::BLACK; n]).collect(),
            committed: lengths.iter().map(|&n| vec![Rgb::BLACK; n]).collect(),
            commits: 0,
            staged_since_commit: 0,
            staged_per_commit: Vec::new(),
            fail_commit: false,
        }
    }
}

impl OutputSink for RecordingSink {
    fn channel_count(&self) -> usize {
        self.lengths.len()
    }

    fn channel_length(&self, channel: usize) -> usize {
        self.lengths[channel]
    }

    fn set_pixel(&mut self, channel: usize, index: usize, color: Rgb) {
        assert!(index < self.lengths[channel], "pixel {index} out of range on channel {channel}");
        self.staged[channel][index] = color;
        self.staged_since_commit += 1;
    }

    fn commit_all(&mut self) -> io::Result<()> {
        if self.fail_commit {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "strip bus down"));
        }
        self.committed = self.staged.clone();
        self.commits += 1;
        self.staged_per_commit.push(self.staged_since_commit);
        self.staged_since_commit = 0;
        Ok(())
    }
}

/// Inputs held down by the test, latched on refresh.
pub struct ScriptedTouch {
    pub inputs: usize,
    held: HashSet<usize>,
    latched: HashSet<usize>,
    pub refreshes: usize,
    pub fail: bool,
}

impl Default for ScriptedTouch {
    fn default() -> Self {
        Self {
            inputs: 12,
            held: HashSet::new(),
            latched: HashSet::new(),
            refreshes: 0,
            fail: false,
        }
    }
}

impl ScriptedTouch {
    pub fn press(&mut self, input: usize) {
        self.held.insert(input);
    }

    pub fn release(&mut self, input: usize) {
        self.held.remove(&input);
    }
}

impl TouchSource for ScriptedTouch {
    fn input_count(&self) -> usize {
        self.inputs
    }

    fn refresh_samples(&mut self) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::TimedOut, "i2c nak"));
        }
        self.latched = self.held.clone();
        self.refreshes += 1;
        Ok(())
    }

    fn is_touched(&self, input: usize) -> bool {
        self.latched.contains(&input)
    }
}

#[derive(Default)]
pub struct RecordingSound {
    pub played: Vec<PathBuf>,
}

impl SoundTrigger for RecordingSound {
    fn play(&mut self, file: &Path) {
        self.played.push(file.to_path_buf());
    }
}

#[derive(Default)]
pub struct EyeLog {
    pub static_colors: Vec<Rgb>,
    pub sequences: Vec<EyeSequence>,
}

pub struct RecordingEye(pub Rc<RefCell<EyeLog>>);

impl EyeDevice for RecordingEye {
    fn set_static_color(&mut self, color: Rgb) {
        self.0.borrow_mut().static_colors.push(color);
    }

    fn play_sequence(&mut self, sequence: &EyeSequence) {
        self.0.borrow_mut().sequences.push(sequence.clone());
    }
}

pub type TestOrchestrator = Orchestrator<RecordingSink, ScriptedTouch, RecordingSound, ManualClock>;

pub const SEED: u64 = 42;

pub fn pools(touch: &[&str], idle: &[&str]) -> SoundPools {
    SoundPools {
        touch: touch.iter().map(PathBuf::from).collect(),
        idle: idle.iter().map(PathBuf::from).collect(),
    }
}

/// Settings with idle effects pushed far out of the way.
pub fn quiet_settings() -> Settings {
    Settings {
        idle_threshold: Duration::from_secs(3600),
        idle_repeat: Duration::from_secs(3600),
        ..Settings::default()
    }
}

pub fn build_with(
    settings: Settings,
    sink: RecordingSink,
    eyes: usize,
    pools: SoundPools,
) -> Result<(TestOrchestrator, Vec<Rc<RefCell<EyeLog>>>), ConfigError> {
    let logs: Vec<_> = (0..eyes)
        .map(|_| Rc::new(RefCell::new(EyeLog::default())))
        .collect();
    let hardware = Hardware {
        sink,
        touch: ScriptedTouch::default(),
        eyes: logs
            .iter()
            .map(|log| Box::new(RecordingEye(Rc::clone(log))) as Box<dyn EyeDevice>)
            .collect(),
        sound: RecordingSound::default(),
        clock: ManualClock::new(),
    };
    let orchestrator = Orchestrator::new(settings, hardware, pools, SEED)?;
    Ok((orchestrator, logs))
}

pub fn build(
    settings: Settings,
    lengths: &[usize],
    eyes: usize,
    pools: SoundPools,
) -> (TestOrchestrator, Vec<Rc<RefCell<EyeLog>>>) {
    build_with(settings, RecordingSink::new(lengths), eyes, pools).expect("valid test setup")
}
