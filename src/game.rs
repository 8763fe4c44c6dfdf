//! Game loop controller.
//!
//! `Game` owns the pacing state, the active round and the single pending frame
//! handle. Two host events drive it: [`Game::on_input`] on every edit of the
//! text field and [`Game::on_frame`] for every granted animation frame.
//! Whichever event ends a round first wins; the other one finds the game no
//! longer `Running` for that round and does nothing.
//!
//! Every round start cancels the previous frame request and removes the
//! previous token before anything else, so at most one traversal is ever in
//! flight.

use log::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::progression::Progression;
use crate::rng::{IndexSource, WordRng};
use crate::round::{Phase, Round, RoundOutcome};
use crate::speed::SpeedController;
use crate::surface::Host;
use crate::words::WordBank;

/// Process-wide pacing state: tier progress, speed and score.
#[derive(Clone, Debug)]
pub struct GameState {
    pub progression: Progression,
    pub speed: SpeedController,
    pub score: u32,
}

impl GameState {
    pub fn new(cfg: &GameConfig, tier_count: usize) -> Self {
        Self {
            progression: Progression::new(cfg.words_per_tier, tier_count),
            speed: SpeedController::new(cfg.speed),
            score: 0,
        }
    }
}

/// Read-only view for hosts and debugging.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub tier_index: usize,
    pub tier_name: String,
    pub correct_in_tier: u32,
    pub duration_secs: f64,
    pub active_word: Option<String>,
}

#[cfg(feature = "serde_json")]
impl GameSnapshot {
    pub fn to_json(&self) -> Result<String, GameError> {
        serde_json::to_string(self).map_err(|e| GameError::Config(e.to_string()))
    }
}

pub struct Game<H: Host, R: IndexSource = WordRng> {
    host: H,
    rng: R,
    bank: WordBank,
    state: GameState,
    phase: Phase,
    round: Option<Round>,
    token: Option<H::Token>,
    frame: Option<H::FrameHandle>,
    halted: Option<GameError>,
}

impl<H: Host> Game<H, WordRng> {
    /// Built-in word tiers and an entropy-seeded picker.
    pub fn new(host: H, config: GameConfig) -> Result<Self, GameError> {
        Self::with_parts(host, config, WordBank::builtin(), WordRng::from_entropy())
    }
}

impl<H: Host, R: IndexSource> Game<H, R> {
    pub fn with_parts(
        host: H,
        config: GameConfig,
        bank: WordBank,
        rng: R,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let state = GameState::new(&config, bank.tier_count());
        Ok(Self {
            host,
            rng,
            bank,
            state,
            phase: Phase::Idle,
            round: None,
            token: None,
            frame: None,
            halted: None,
        })
    }

    /// Page-ready entry: reset the read-outs, start the first round and focus
    /// the input.
    pub fn launch(&mut self) -> Result<(), GameError> {
        self.host.show_score(self.state.score);
        self.host.show_speed(self.state.speed.duration_secs());
        let started = self.start();
        self.host.focus_input();
        started
    }

    /// Begin a new round, discarding any round in flight.
    ///
    /// On word bank exhaustion the game goes idle for good and the error is
    /// returned; later input and frames are ignored.
    pub fn start(&mut self) -> Result<(), GameError> {
        self.discard_round();

        let tier = self.state.progression.tier_index();
        let word = match self.bank.pick_word(tier, &mut self.rng) {
            Ok(w) => w.to_owned(),
            Err(err) => {
                warn!("no word available, game idle: {err}");
                self.phase = Phase::Idle;
                self.halted = Some(err.clone());
                return Err(err);
            }
        };

        self.host.clear_input();
        let token = self.host.create_token(&word);
        let track_width = self.host.measure_track_width();
        let token_width = self.host.measure_width(&token);
        let round = Round::new(
            &word,
            self.state.speed.duration_secs(),
            track_width,
            token_width,
        );
        self.host.set_position(&token, round.start_x());
        debug!(
            "round start: '{}' tier {} over {:.2}s",
            word,
            tier,
            round.duration_secs()
        );

        self.token = Some(token);
        self.round = Some(round);
        self.phase = Phase::Running;
        self.frame = self.host.request_frame();
        if self.frame.is_none() {
            warn!("host refused an animation frame; round '{word}' cannot expire");
        }
        Ok(())
    }

    /// Input field changed. Returns the outcome if the edit completed the word.
    pub fn on_input(&mut self) -> Option<RoundOutcome> {
        if self.phase != Phase::Running {
            return None;
        }
        let typed = self.host.input_value();
        if !self.round.as_ref().is_some_and(|r| r.matches(&typed)) {
            return None;
        }

        self.cancel_frame();
        self.phase = Phase::Succeeded;
        let record = self.state.progression.record_success();
        self.state.speed.on_success();
        if record.tier_advanced {
            // Reset wins over the success speed-up.
            self.state.speed.reset_to_base();
            info!(
                "tier threshold reached, now tier {} at {:.1}s",
                self.state.progression.tier_index(),
                self.state.speed.duration_secs()
            );
        }
        self.state.score += 1;
        self.host.show_score(self.state.score);
        self.host.show_speed(self.state.speed.duration_secs());

        if let Err(err) = self.start() {
            debug!("no next round after success: {err}");
        }
        Some(RoundOutcome::Succeeded {
            tier_advanced: record.tier_advanced,
        })
    }

    /// Animation frame at host time `now_ms`. Moves the token and expires the
    /// round once the traversal completes.
    pub fn on_frame(&mut self, now_ms: f64) -> Option<RoundOutcome> {
        if self.phase != Phase::Running {
            return None;
        }
        // The delivered request is spent.
        self.frame = None;
        let tick = self.round.as_mut()?.tick(now_ms);
        if let Some(token) = &self.token {
            self.host.set_position(token, tick.x);
        }
        if !tick.expired {
            self.frame = self.host.request_frame();
            return None;
        }

        self.phase = Phase::Expired;
        self.state.speed.on_failure();
        self.host.show_speed(self.state.speed.duration_secs());
        debug!(
            "round expired, slowing to {:.2}s",
            self.state.speed.duration_secs()
        );
        if let Err(err) = self.start() {
            debug!("no next round after expiry: {err}");
        }
        Some(RoundOutcome::Expired)
    }

    fn cancel_frame(&mut self) {
        if let Some(handle) = self.frame.take() {
            self.host.cancel_frame(handle);
        }
    }

    fn discard_round(&mut self) {
        self.cancel_frame();
        if let Some(token) = self.token.take() {
            self.host.remove_token(token);
        }
        self.round = None;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn tier_index(&self) -> usize {
        self.state.progression.tier_index()
    }

    pub fn correct_in_tier(&self) -> u32 {
        self.state.progression.correct_in_tier()
    }

    pub fn duration_secs(&self) -> f64 {
        self.state.speed.duration_secs()
    }

    pub fn active_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn active_word(&self) -> Option<&str> {
        self.round.as_ref().map(Round::word)
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame.is_some()
    }

    /// Why the game went idle, if the word bank ran dry.
    pub fn halted(&self) -> Option<&GameError> {
        self.halted.as_ref()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let tier_index = self.tier_index();
        GameSnapshot {
            phase: self.phase,
            score: self.state.score,
            tier_index,
            tier_name: self
                .bank
                .tier(tier_index)
                .map(|t| t.name.clone())
                .unwrap_or_default(),
            correct_in_tier: self.correct_in_tier(),
            duration_secs: self.duration_secs(),
            active_word: self.active_word().map(str::to_owned),
        }
    }
}
