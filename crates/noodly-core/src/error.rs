use thiserror::Error;

/// Rejected at construction time, before the control loop starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no output channels configured")]
    NoChannels,
    #[error("channel {channel} has no pixels")]
    EmptyChannel { channel: usize },
    #[error("strip has no pixels")]
    EmptyStrip,
    #[error("animation slowdown must be at least 1")]
    ZeroSlowdown,
    #[error("pixel repeat must be at least 1")]
    ZeroPixelRepeat,
    #[error("sweep palette is empty")]
    EmptyPalette,
    #[error("tick interval must be non-zero")]
    ZeroTick,
    #[error("cascade {role} channel {index} out of range ({available} available)")]
    CascadeOutOfRange {
        role: &'static str,
        index: usize,
        available: usize,
    },
}

/// Anything that stops the control loop. Hardware failures are not retried;
/// the process is expected to exit and be restarted by its supervisor.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("output sink failed")]
    Output(#[source] std::io::Error),
    #[error("touch source failed")]
    Touch(#[source] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
