use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use noodly_core::{
    AnimationParams, Cascade, Direction, EyeDevice, Hardware, Orchestrator, Settings, SoundPools,
    SystemClock, DEFAULT_ANIMATION_SLOWDOWN, DEFAULT_APPENDAGES, DEFAULT_IDLE_REPEAT,
    DEFAULT_IDLE_THRESHOLD, DEFAULT_LEDS_PER_APPENDAGE, DEFAULT_PIXEL_REPEAT,
    DEFAULT_SWEEP_PALETTE, DEFAULT_TICK, DEFAULT_TOUCH_SOUND_PREFIX,
};

mod hardware;

use hardware::{FrameSink, LogEye, ProcessPlayer, StdinTouch};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of appendages (LED strips and touch inputs)
    #[arg(long, default_value_t = DEFAULT_APPENDAGES)]
    appendages: usize,

    /// LEDs on each appendage
    #[arg(long, default_value_t = DEFAULT_LEDS_PER_APPENDAGE)]
    leds: usize,

    /// Number of touch inputs on the sensor
    #[arg(long, default_value_t = DEFAULT_APPENDAGES)]
    touch_inputs: usize,

    /// Control loop period in milliseconds
    #[arg(long, default_value_t = DEFAULT_TICK.as_millis() as u64)]
    tick_ms: u64,

    /// Animate on every Nth tick only
    #[arg(long, default_value_t = DEFAULT_ANIMATION_SLOWDOWN)]
    slowdown: u32,

    /// Pixels per sweep colour
    #[arg(long, default_value_t = DEFAULT_PIXEL_REPEAT)]
    pixel_repeat: usize,

    /// Restart a running sweep when touched again
    #[arg(long)]
    retrigger: bool,

    /// Channels whose sweep runs from the other end
    #[arg(long, value_delimiter = ',')]
    reverse: Vec<usize>,

    /// Single touch input that drives the primary appendage
    #[arg(long, requires = "cascade_primary")]
    cascade_input: Option<usize>,

    /// Appendage whose finished sweep lights up all the others
    #[arg(long, requires = "cascade_input")]
    cascade_primary: Option<usize>,

    /// Seconds without touch before idle effects start
    #[arg(long, default_value_t = DEFAULT_IDLE_THRESHOLD.as_secs())]
    idle_secs: u64,

    /// Minimum seconds between idle effects
    #[arg(long, default_value_t = DEFAULT_IDLE_REPEAT.as_secs())]
    idle_repeat_secs: u64,

    /// Sound files starting with this name play on touch, others when idle
    #[arg(long, default_value = DEFAULT_TOUCH_SOUND_PREFIX)]
    touch_prefix: String,

    /// Program used to play sound files
    #[arg(long, default_value = "mpg123")]
    player: String,

    /// Extra argument for the player, before the file name (repeatable)
    #[arg(long, allow_hyphen_values = true)]
    player_arg: Vec<String>,

    /// Add an eye that logs what it is told to show
    #[arg(long)]
    log_eye: bool,

    /// Append every committed frame as raw RGB bytes to this file
    #[arg(long)]
    frame_dump: Option<PathBuf>,

    /// Random seed for wave phases and sound choice
    #[arg(long)]
    seed: Option<u64>,

    /// Sound files
    sounds: Vec<PathBuf>,
}

impl Args {
    fn settings(&self) -> Settings {
        let mut directions = vec![Direction::Forward; self.appendages];
        for &channel in &self.reverse {
            if let Some(d) = directions.get_mut(channel) {
                *d = Direction::Reverse;
            } else {
                log::warn!("--reverse {channel}: no such appendage");
            }
        }
        let cascade = match (self.cascade_input, self.cascade_primary) {
            (Some(input), Some(primary)) => Some(Cascade { input, primary }),
            _ => None,
        };
        Settings {
            tick: Duration::from_millis(self.tick_ms),
            animation: AnimationParams {
                slowdown: self.slowdown,
                pixel_repeat: self.pixel_repeat,
                palette: DEFAULT_SWEEP_PALETTE.to_vec(),
                retrigger: self.retrigger,
            },
            directions,
            cascade,
            idle_threshold: Duration::from_secs(self.idle_secs),
            idle_repeat: Duration::from_secs(self.idle_repeat_secs),
            ..Settings::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let settings = args.settings();
    settings.validate().context("invalid settings")?;

    for missing in args.sounds.iter().filter(|p| !p.exists()) {
        log::warn!("sound file {} does not exist", missing.display());
    }
    let pools = SoundPools::classify(&args.sounds, &args.touch_prefix);
    if pools.is_empty() {
        log::warn!("no sound files given, effects will be silent");
    }

    let lengths = vec![args.leds; args.appendages];
    let sink = FrameSink::new(&lengths, args.frame_dump.as_deref())
        .context("could not open frame dump")?;
    let touch = StdinTouch::spawn(args.touch_inputs).context("could not start touch reader")?;
    let mut eyes: Vec<Box<dyn EyeDevice>> = Vec::new();
    if args.log_eye {
        eyes.push(Box::new(LogEye::new(0)));
    }
    let sound = ProcessPlayer::new(args.player.clone(), args.player_arg.clone());

    let hardware = Hardware {
        sink,
        touch,
        eyes,
        sound,
        clock: SystemClock::new(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut orchestrator =
        Orchestrator::new(settings, hardware, pools, seed).context("invalid installation setup")?;

    log::info!("running with seed {seed}");
    orchestrator.run().context("control loop stopped")?;
    Ok(())
}
