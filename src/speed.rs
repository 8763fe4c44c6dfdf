//! Speed controller. "Speed" is expressed as the traversal duration in seconds,
//! so a faster word has a smaller value.

use crate::config::SpeedConfig;

#[derive(Clone, Debug)]
pub struct SpeedController {
    cfg: SpeedConfig,
    duration_secs: f64,
}

impl SpeedController {
    pub fn new(cfg: SpeedConfig) -> Self {
        Self {
            duration_secs: cfg.base_secs.clamp(cfg.min_secs, cfg.max_secs),
            cfg,
        }
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn config(&self) -> &SpeedConfig {
        &self.cfg
    }

    /// Correct word: shorten the traversal, never below `min_secs`.
    pub fn on_success(&mut self) {
        self.duration_secs = (self.duration_secs * self.cfg.increase_factor).max(self.cfg.min_secs);
    }

    /// Missed word: lengthen the traversal, never above `max_secs`.
    pub fn on_failure(&mut self) {
        self.duration_secs = (self.duration_secs * self.cfg.decrease_factor).min(self.cfg.max_secs);
    }

    pub fn reset_to_base(&mut self) {
        self.duration_secs = self.cfg.base_secs;
    }
}

/// Speed as shown to the player: one decimal.
pub fn format_speed(duration_secs: f64) -> String {
    format!("{duration_secs:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_reference_sequence() {
        let mut s = SpeedController::new(SpeedConfig::default());
        assert!(approx(s.duration_secs(), 8.0));
        s.on_success();
        assert!(approx(s.duration_secs(), 7.2));
        s.on_success();
        assert!(approx(s.duration_secs(), 6.48));
        s.on_failure();
        assert!(approx(s.duration_secs(), 7.128));
    }

    #[test]
    fn test_successes_clamp_at_min() {
        let mut s = SpeedController::new(SpeedConfig::default());
        for _ in 0..200 {
            s.on_success();
            assert!(s.duration_secs() >= 2.0);
        }
        assert!(approx(s.duration_secs(), 2.0));
    }

    #[test]
    fn test_failures_clamp_at_max() {
        let mut s = SpeedController::new(SpeedConfig::default());
        for _ in 0..200 {
            s.on_failure();
            assert!(s.duration_secs() <= 12.0);
        }
        assert!(approx(s.duration_secs(), 12.0));
    }

    #[test]
    fn test_mixed_sequence_stays_in_bounds() {
        let mut s = SpeedController::new(SpeedConfig::default());
        for i in 0..500u32 {
            if i.wrapping_mul(2_654_435_761) % 3 == 0 {
                s.on_failure();
            } else {
                s.on_success();
            }
            assert!((2.0..=12.0).contains(&s.duration_secs()));
        }
        s.reset_to_base();
        assert!(approx(s.duration_secs(), 8.0));
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(8.0), "8.0");
        assert_eq!(format_speed(7.128), "7.1");
        assert_eq!(format_speed(6.48), "6.5");
    }
}
