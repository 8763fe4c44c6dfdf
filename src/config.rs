//! Tunable pacing constants.
//!
//! Defaults reproduce the reference game: an 8 s traversal, clamped to
//! 2..=12 s, 10% faster per hit, 10% slower per miss, 25 words per tier.
//! With the `serde` feature the structs can be (de)serialized; missing fields
//! fall back to these defaults.

use crate::error::GameError;

pub const DEFAULT_BASE_SECS: f64 = 8.0;
pub const DEFAULT_MIN_SECS: f64 = 2.0;
pub const DEFAULT_MAX_SECS: f64 = 12.0;
pub const DEFAULT_INCREASE_FACTOR: f64 = 0.90; // <1: shorter traversal, faster word
pub const DEFAULT_DECREASE_FACTOR: f64 = 1.10; // >1: longer traversal, slower word
pub const DEFAULT_WORDS_PER_TIER: u32 = 25;

/// Traversal duration bounds and the multiplicative step factors.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpeedConfig {
    pub base_secs: f64,
    pub min_secs: f64,
    pub max_secs: f64,
    pub increase_factor: f64,
    pub decrease_factor: f64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            base_secs: DEFAULT_BASE_SECS,
            min_secs: DEFAULT_MIN_SECS,
            max_secs: DEFAULT_MAX_SECS,
            increase_factor: DEFAULT_INCREASE_FACTOR,
            decrease_factor: DEFAULT_DECREASE_FACTOR,
        }
    }
}

impl SpeedConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        let finite = [
            ("speed.base_secs", self.base_secs),
            ("speed.min_secs", self.min_secs),
            ("speed.max_secs", self.max_secs),
            ("speed.increase_factor", self.increase_factor),
            ("speed.decrease_factor", self.decrease_factor),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(GameError::invalid(field, format!("must be finite (got {value})")));
            }
        }
        if self.min_secs <= 0.0 {
            return Err(GameError::invalid(
                "speed.min_secs",
                format!("must be positive (got {:.1})", self.min_secs),
            ));
        }
        if self.min_secs > self.max_secs {
            return Err(GameError::invalid(
                "speed.min_secs",
                format!("{:.2} exceeds max {:.2}", self.min_secs, self.max_secs),
            ));
        }
        if self.base_secs < self.min_secs || self.base_secs > self.max_secs {
            return Err(GameError::invalid(
                "speed.base_secs",
                format!(
                    "must be between {:.2} and {:.2} (got {:.2})",
                    self.min_secs, self.max_secs, self.base_secs
                ),
            ));
        }
        if !(self.increase_factor > 0.0 && self.increase_factor < 1.0) {
            return Err(GameError::invalid(
                "speed.increase_factor",
                format!("must be in (0, 1) (got {:.2})", self.increase_factor),
            ));
        }
        if self.decrease_factor <= 1.0 {
            return Err(GameError::invalid(
                "speed.decrease_factor",
                format!("must be greater than 1 (got {:.2})", self.decrease_factor),
            ));
        }
        Ok(())
    }
}

/// Top-level game configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub speed: SpeedConfig,
    /// Correct words needed before the next tier (and a speed reset).
    pub words_per_tier: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            speed: SpeedConfig::default(),
            words_per_tier: DEFAULT_WORDS_PER_TIER,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        self.speed.validate()?;
        if self.words_per_tier == 0 {
            return Err(GameError::invalid("words_per_tier", "must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config; absent fields keep their defaults.
    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| GameError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
