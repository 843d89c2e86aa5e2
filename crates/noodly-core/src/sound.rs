use rand::seq::SliceRandom;
use rand::Rng;
use std::path::{Path, PathBuf};

use crate::orchestrator::Effect;

/// Sound files split by the effect they accompany.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SoundPools {
    pub touch: Vec<PathBuf>,
    pub idle: Vec<PathBuf>,
}

impl SoundPools {
    /// Files whose base name starts with `touch_prefix` are touch sounds,
    /// everything else plays when idle. Order is preserved within each pool.
    pub fn classify<I, P>(files: I, touch_prefix: &str) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut pools = Self::default();
        for file in files {
            let file = file.into();
            if is_touch_sound(&file, touch_prefix) {
                pools.touch.push(file);
            } else {
                pools.idle.push(file);
            }
        }
        pools
    }

    pub fn pool(&self, effect: Effect) -> &[PathBuf] {
        match effect {
            Effect::Trigger => &self.touch,
            Effect::Idle => &self.idle,
        }
    }

    /// Uniformly random file for `effect`, or `None` if that pool is empty.
    pub fn pick<R: Rng + ?Sized>(&self, effect: Effect, rng: &mut R) -> Option<&Path> {
        self.pool(effect).choose(rng).map(PathBuf::as_path)
    }

    pub fn is_empty(&self) -> bool {
        self.touch.is_empty() && self.idle.is_empty()
    }
}

pub fn is_touch_sound(file: &Path, touch_prefix: &str) -> bool {
    file.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(touch_prefix))
}
