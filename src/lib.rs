//! Word Drift core crate.
//!
//! A word drifts from the right edge of the track to the left; the player must
//! type it before it leaves. Hits shorten the next traversal, misses lengthen
//! it, and every `words_per_tier` hits move play to a list of longer words and
//! reset the pace.
//!
//! The game loop (`game`, `round`, `speed`, `progression`, `words`) is host
//! independent and tested natively. `web` binds it to the DOM and
//! `requestAnimationFrame` for the wasm build.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod error;
pub mod game;
pub mod progression;
pub mod rng;
pub mod round;
pub mod speed;
pub mod surface;
pub mod words;

mod logging;
pub mod web;

pub use config::{GameConfig, SpeedConfig};
pub use error::GameError;
pub use game::{Game, GameSnapshot, GameState};
pub use progression::{Progression, SuccessRecord};
pub use rng::{IndexSource, WordRng};
pub use round::{Phase, Round, RoundOutcome, RoundTick};
pub use speed::{SpeedController, format_speed};
pub use surface::{DisplaySurface, FrameScheduler, Host, InputSurface, RenderSurface};
pub use words::{Tier, WordBank, normalize};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}

// -----------------------------------------------------------------------------
// JS entrypoints
// -----------------------------------------------------------------------------

/// Start with the default pacing once the page has loaded.
#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    web::launch_when_ready(GameConfig::default())?;
    Ok(())
}

/// Start with pacing overrides, e.g. `{"words_per_tier": 10}`.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_game_with_config(json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(json)?;
    web::launch_when_ready(config)?;
    Ok(())
}

/// Current score, tier and speed as JSON; `undefined` before start.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn game_snapshot() -> Option<String> {
    web::snapshot_json()
}
