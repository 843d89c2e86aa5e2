// Host-side stand-ins for the installation hardware.

use fnv::FnvHashSet;
use log::{debug, info, warn};
use noodly_core::{EyeDevice, EyeSequence, OutputSink, Rgb, SoundTrigger, TouchSource};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Holds one buffer per strip. On commit the whole frame, channel after
/// channel as raw RGB bytes, is optionally appended to a dump file.
pub struct FrameSink {
    channels: Vec<Vec<Rgb>>,
    dump: Option<BufWriter<File>>,
    frames: u64,
}

impl FrameSink {
    pub fn new(lengths: &[usize], dump: Option<&Path>) -> io::Result<Self> {
        let dump = match dump {
            Some(path) => {
                info!("writing frames to {}", path.display());
                Some(BufWriter::new(File::create(path)?))
            }
            None => None,
        };
        Ok(Self {
            channels: lengths.iter().map(|&n| vec![Rgb::BLACK; n]).collect(),
            dump,
            frames: 0,
        })
    }
}

impl OutputSink for FrameSink {
    fn channel_count(&self) -> usize {
        self.channels.len()
    }

    fn channel_length(&self, channel: usize) -> usize {
        self.channels[channel].len()
    }

    fn set_pixel(&mut self, channel: usize, index: usize, color: Rgb) {
        self.channels[channel][index] = color;
    }

    fn commit_all(&mut self) -> io::Result<()> {
        if let Some(out) = &mut self.dump {
            for channel in &self.channels {
                out.write_all(bytemuck::cast_slice(channel))?;
            }
            out.flush()?;
        }
        self.frames += 1;
        if self.frames % 6000 == 0 {
            debug!("{} frames committed", self.frames);
        }
        Ok(())
    }
}

/// Touch simulation from stdin: every whitespace-separated number on a line
/// reads as that input being touched for one sample.
pub struct StdinTouch {
    inputs: usize,
    rx: Receiver<usize>,
    touched: FnvHashSet<usize>,
    closed: bool,
}

impl StdinTouch {
    pub fn spawn(inputs: usize) -> io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        thread::Builder::new()
            .name("touch-stdin".into())
            .spawn(move || {
                for line in io::stdin().lock().lines() {
                    let Ok(line) = line else { break };
                    for token in line.split_whitespace() {
                        match token.parse::<usize>() {
                            Ok(input) if input >= inputs => {
                                warn!("ignoring touch input {input}, only {inputs} inputs")
                            }
                            Ok(input) => {
                                if tx.send(input).is_err() {
                                    return;
                                }
                            }
                            Err(_) => warn!("ignoring touch input {token:?}"),
                        }
                    }
                }
            })?;
        Ok(Self {
            inputs,
            rx,
            touched: FnvHashSet::default(),
            closed: false,
        })
    }
}

impl TouchSource for StdinTouch {
    fn input_count(&self) -> usize {
        self.inputs
    }

    fn refresh_samples(&mut self) -> io::Result<()> {
        self.touched.clear();
        loop {
            match self.rx.try_recv() {
                Ok(input) => {
                    debug!("touch {input}");
                    self.touched.insert(input);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    if !self.closed {
                        info!("stdin closed, no more touches");
                        self.closed = true;
                    }
                    break;
                }
            }
        }
        Ok(())
    }

    fn is_touched(&self, input: usize) -> bool {
        self.touched.contains(&input)
    }
}

/// Eye that only reports what it was asked to show.
pub struct LogEye {
    id: usize,
}

impl LogEye {
    pub fn new(id: usize) -> Self {
        Self { id }
    }
}

impl EyeDevice for LogEye {
    fn set_static_color(&mut self, color: Rgb) {
        info!("eye {}: colour #{:06x}", self.id, color.packed());
    }

    fn play_sequence(&mut self, sequence: &EyeSequence) {
        info!(
            "eye {}: {} step sequence, {:?} to rest on #{:06x}",
            self.id,
            sequence.len(),
            sequence.total_duration(),
            sequence.resting_color().packed()
        );
    }
}

/// Plays a file by starting an external player and not waiting for it.
pub struct ProcessPlayer {
    program: String,
    args: Vec<String>,
}

impl ProcessPlayer {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }
}

impl SoundTrigger for ProcessPlayer {
    fn play(&mut self, file: &Path) {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let mut child = match child {
            Ok(child) => child,
            Err(e) => {
                warn!("could not start {}: {e}", self.program);
                return;
            }
        };
        // Reap in the background so finished players don't pile up.
        let file: PathBuf = file.to_path_buf();
        let reaper = thread::Builder::new()
            .name("player-reaper".into())
            .spawn(move || match child.wait() {
                Ok(status) if !status.success() => {
                    warn!("player exited with {status} on {}", file.display())
                }
                Ok(_) => {}
                Err(e) => warn!("waiting for player failed: {e}"),
            });
        if let Err(e) = reaper {
            warn!("could not watch player process: {e}");
        }
    }
}
