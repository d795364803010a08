//! Tuning constants for the sketch and their URL query overrides.

use std::str::FromStr;

use thiserror::Error;
use tracing::{warn, Level};

/// Query parameter keys understood by [`SketchConfig::from_query_pairs`].
pub const QUERY_KEYS: [&str; 6] = ["seed", "waves", "speed", "spawn", "flip", "log"];

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for `{key}`: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("`{key}` out of range: {reason}")]
    OutOfRange { key: &'static str, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    /// RNG seed; `None` lets the shell pick one from the clock.
    pub seed: Option<u64>,
    /// Number of concentric wave shapes.
    pub wave_count: usize,
    /// Time advanced per frame.
    pub speed: f64,
    pub initial_radius: f64,
    pub reset_radius: f64,
    pub initial_amplitude: f64,
    pub reset_amplitude: f64,
    /// Reset progress gained per frame.
    pub reset_step: f64,
    /// Peak of the half-sine bounce added to the reset radius.
    pub bounce_height: f64,
    /// Gray level the background eases toward while resetting.
    pub reset_background: f64,
    /// Wave expansion target during a click burst.
    pub burst_target: f64,
    /// Expansion above which the burst ends.
    pub burst_threshold: f64,
    /// Per-frame probability of spawning a particle.
    pub spawn_chance: f64,
    /// Max per-axis particle jitter per frame.
    pub jitter: f64,
    /// Frames between move-direction flips.
    pub flip_interval: u64,
    /// Angular step between wave vertices, in radians.
    pub vertex_step: f64,
    pub log_level: Level,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            seed: None,
            wave_count: 25,
            speed: 0.02,
            initial_radius: 50.0,
            reset_radius: 180.0,
            initial_amplitude: 15.0,
            reset_amplitude: 50.0,
            reset_step: 0.05,
            bounce_height: 10.0,
            reset_background: 50.0,
            burst_target: 1.5,
            burst_threshold: 1.4,
            spawn_chance: 0.2,
            jitter: 5.0,
            flip_interval: 180,
            vertex_step: 0.15,
            log_level: Level::INFO,
        }
    }
}

impl SketchConfig {
    /// Build a config from `key=value` pairs, starting from the defaults.
    /// Unknown keys are logged and skipped; a malformed value for a known
    /// key fails the whole parse.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            match key {
                "seed" => config.seed = Some(parse(key, value)?),
                "waves" => config.wave_count = parse(key, value)?,
                "speed" => config.speed = parse(key, value)?,
                "spawn" => config.spawn_chance = parse(key, value)?,
                "flip" => config.flip_interval = parse(key, value)?,
                "log" => config.log_level = parse(key, value)?,
                other => warn!(key = other, "ignoring unknown query parameter"),
            }
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wave_count == 0 {
            return Err(ConfigError::OutOfRange {
                key: "waves",
                reason: "at least one wave is required",
            });
        }
        if self.flip_interval == 0 {
            return Err(ConfigError::OutOfRange {
                key: "flip",
                reason: "interval must be positive",
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(ConfigError::OutOfRange {
                key: "spawn",
                reason: "probability must lie in [0, 1]",
            });
        }
        if self.vertex_step.is_nan() || self.vertex_step <= 0.0 {
            return Err(ConfigError::OutOfRange {
                key: "vertex_step",
                reason: "angular step must be positive",
            });
        }
        if !self.speed.is_finite() {
            return Err(ConfigError::OutOfRange {
                key: "speed",
                reason: "must be finite",
            });
        }
        Ok(())
    }
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}
