use std::env;
use std::time::Duration;

use flashdeck_core::flip::DEFAULT_FLIP_DURATION;

use crate::error::ConfigError;

/// How often the deck is reshuffled.
pub const DEFAULT_RESHUFFLE_INTERVAL: Duration = Duration::from_secs(15);

const RESHUFFLE_SECS_KEY: &str = "FLASHDECK_RESHUFFLE_SECS";
const FLIP_MS_KEY: &str = "FLASHDECK_FLIP_MS";

/// Timing knobs for the deck screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckConfig {
    reshuffle_interval: Duration,
    flip_duration: Duration,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            reshuffle_interval: DEFAULT_RESHUFFLE_INTERVAL,
            flip_duration: DEFAULT_FLIP_DURATION,
        }
    }
}

impl DeckConfig {
    /// Defaults overridden by `FLASHDECK_RESHUFFLE_SECS` and `FLASHDECK_FLIP_MS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when a variable is set but is not a
    /// positive whole number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for zero or unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(secs) = positive_number(&lookup, RESHUFFLE_SECS_KEY)? {
            config.reshuffle_interval = Duration::from_secs(secs);
        }
        if let Some(ms) = positive_number(&lookup, FLIP_MS_KEY)? {
            config.flip_duration = Duration::from_millis(ms);
        }
        Ok(config)
    }

    #[must_use]
    pub fn with_reshuffle_interval(mut self, interval: Duration) -> Self {
        self.reshuffle_interval = interval;
        self
    }

    #[must_use]
    pub fn with_flip_duration(mut self, duration: Duration) -> Self {
        self.flip_duration = duration;
        self
    }

    #[must_use]
    pub fn reshuffle_interval(&self) -> Duration {
        self.reshuffle_interval
    }

    #[must_use]
    pub fn flip_duration(&self) -> Duration {
        self.flip_duration
    }
}

fn positive_number(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<u64>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    if raw.trim().is_empty() {
        return Ok(None);
    }
    match raw.trim().parse::<u64>() {
        Ok(value) if value > 0 => Ok(Some(value)),
        _ => Err(ConfigError::InvalidValue { key, raw }),
    }
}
