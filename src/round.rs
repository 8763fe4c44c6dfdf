//! A single round: one word crossing the track once.
//!
//! Timing is derived from the round's own first-frame timestamp rather than
//! accumulated frame deltas, so dropped or uneven frames do not drift.

use crate::words::normalize;

/// Lifecycle phase of the game loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Phase {
    /// Before launch, or terminal after the word bank ran dry.
    Idle,
    Running,
    Succeeded,
    Expired,
}

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundOutcome {
    Succeeded { tier_advanced: bool },
    Expired,
}

/// Progress sample for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundTick {
    /// Fraction of the track covered, in `[0, 1]`.
    pub progress: f64,
    /// Token x position for this progress.
    pub x: f64,
    pub expired: bool,
}

#[derive(Clone, Debug)]
pub struct Round {
    word: String,
    normalized: String,
    duration_secs: f64,    // fixed at start, not re-read mid-flight
    start_ms: Option<f64>, // set by the first frame
    elapsed_secs: f64,
    start_x: f64,
    end_x: f64,
}

impl Round {
    /// `track_width` and `token_width` define the path: from the right edge of
    /// the track until the token is fully past the left edge.
    pub fn new(word: &str, duration_secs: f64, track_width: f64, token_width: f64) -> Self {
        Self {
            word: word.to_string(),
            normalized: normalize(word),
            duration_secs,
            start_ms: None,
            elapsed_secs: 0.0,
            start_x: track_width,
            end_x: -token_width,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn start_ms(&self) -> Option<f64> {
        self.start_ms
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn start_x(&self) -> f64 {
        self.start_x
    }

    pub fn end_x(&self) -> f64 {
        self.end_x
    }

    /// Typed text matches the word, ignoring case and surrounding whitespace.
    pub fn matches(&self, typed: &str) -> bool {
        normalize(typed) == self.normalized
    }

    /// Progress at `now_ms` for a round started at `start_ms`, clamped to `[0, 1]`.
    pub fn progress_at(&self, start_ms: f64, now_ms: f64) -> f64 {
        let elapsed = ((now_ms - start_ms) / 1000.0).max(0.0);
        if self.duration_secs <= 0.0 {
            return 1.0;
        }
        (elapsed / self.duration_secs).clamp(0.0, 1.0)
    }

    pub fn position_at(&self, progress: f64) -> f64 {
        self.start_x + (self.end_x - self.start_x) * progress
    }

    /// Advance to frame time `now_ms`. The first call anchors the start time.
    pub fn tick(&mut self, now_ms: f64) -> RoundTick {
        let start = *self.start_ms.get_or_insert(now_ms);
        self.elapsed_secs = ((now_ms - start) / 1000.0).max(0.0);
        let progress = self.progress_at(start, now_ms);
        RoundTick {
            progress,
            x: self.position_at(progress),
            expired: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_anchors_start() {
        let mut r = Round::new("kat", 8.0, 800.0, 40.0);
        assert_eq!(r.start_ms(), None);
        let t = r.tick(5_000.0);
        assert_eq!(r.start_ms(), Some(5_000.0));
        assert_eq!(t.progress, 0.0);
        assert_eq!(t.x, 800.0);
        assert!(!t.expired);
    }

    #[test]
    fn test_progress_is_linear_in_elapsed_time() {
        let mut r = Round::new("kat", 8.0, 800.0, 40.0);
        r.tick(1_000.0);
        let t = r.tick(5_000.0);
        assert!((t.progress - 0.5).abs() < 1e-9);
        assert!((t.x - 380.0).abs() < 1e-9);
        assert!((r.elapsed_secs() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_expires_at_full_duration_and_clamps() {
        let mut r = Round::new("kat", 2.0, 100.0, 10.0);
        r.tick(0.0);
        assert!(!r.tick(1_999.0).expired);
        let t = r.tick(2_000.0);
        assert!(t.expired);
        assert_eq!(t.x, -10.0);
        let late = r.tick(60_000.0);
        assert_eq!(late.progress, 1.0);
    }

    #[test]
    fn test_clock_going_backwards_clamps_to_zero() {
        let r = Round::new("kat", 8.0, 100.0, 10.0);
        assert_eq!(r.progress_at(1_000.0, 500.0), 0.0);
    }

    #[test]
    fn test_matches_trimmed_case_insensitive() {
        let r = Round::new("kat", 8.0, 100.0, 10.0);
        assert!(r.matches(" Kat "));
        assert!(r.matches("KAT"));
        assert!(!r.matches("ka"));
        assert!(!r.matches("k a t"));
        let dk = Round::new("økonomi", 8.0, 100.0, 10.0);
        assert!(dk.matches("Økonomi"));
    }
}
