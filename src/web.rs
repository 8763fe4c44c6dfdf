//! Browser host: DOM implementation of the collaborator seams plus the
//! `requestAnimationFrame` / `input` wiring that feeds [`Game`].
//!
//! The page is expected to carry the reference elements (`#word-container`,
//! `#input-field`, `#words-count`, `#speed-display`); any that are missing are
//! created and appended to `<body>` so the game also runs on a bare page.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, Window, window};

use crate::config::GameConfig;
use crate::error::GameError;
use crate::game::Game;
use crate::speed::format_speed;
use crate::surface::{DisplaySurface, FrameScheduler, InputSurface, RenderSurface};

pub const TRACK_ID: &str = "word-container";
pub const INPUT_ID: &str = "input-field";
pub const SCORE_ID: &str = "words-count";
pub const SPEED_ID: &str = "speed-display";

/// Handle to the `<span>` carrying the active word. Empty if the DOM refused
/// to create it; every operation on an empty token is a no-op.
pub struct WordToken(Option<HtmlElement>);

pub struct WebHost {
    window: Window,
    document: Document,
    track: HtmlElement,
    input: HtmlInputElement,
    score: Element,
    speed: Element,
}

impl WebHost {
    /// Bind to (or create) the game elements in `document`.
    pub fn from_document(window: Window, document: Document) -> Result<Self, GameError> {
        let track: HtmlElement = ensure_element(
            &document,
            TRACK_ID,
            "div",
            "position:relative; overflow:hidden; width:100%; height:64px; border:1px solid #333; border-radius:6px; background:#181818;",
        )?
        .dyn_into()
        .map_err(|_| GameError::Host(format!("#{TRACK_ID} is not an HTML element")))?;
        let input: HtmlInputElement = ensure_element(
            &document,
            INPUT_ID,
            "input",
            "font-family:'Fira Code', monospace; font-size:20px; padding:4px 10px; margin-top:12px;",
        )?
        .dyn_into()
        .map_err(|_| GameError::Host(format!("#{INPUT_ID} is not an <input>")))?;
        input.set_attribute("autocomplete", "off").ok();
        let score = ensure_element(&document, SCORE_ID, "span", "margin-right:12px;")?;
        let speed = ensure_element(&document, SPEED_ID, "span", "")?;
        Ok(Self {
            window,
            document,
            track,
            input,
            score,
            speed,
        })
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }

    pub fn track(&self) -> &HtmlElement {
        &self.track
    }
}

fn ensure_element(doc: &Document, id: &str, tag: &str, style: &str) -> Result<Element, GameError> {
    if let Some(el) = doc.get_element_by_id(id) {
        return Ok(el);
    }
    let body = doc
        .body()
        .ok_or_else(|| GameError::Host("document has no <body>".into()))?;
    let el = doc.create_element(tag).map_err(js_err)?;
    el.set_id(id);
    if !style.is_empty() {
        el.set_attribute("style", style).ok();
    }
    body.append_child(&el).map_err(js_err)?;
    Ok(el)
}

fn js_err(err: JsValue) -> GameError {
    GameError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl RenderSurface for WebHost {
    type Token = WordToken;

    fn create_token(&mut self, text: &str) -> WordToken {
        let span = match self
            .document
            .create_element("span")
            .and_then(|el| el.dyn_into::<HtmlElement>().map_err(JsValue::from))
        {
            Ok(span) => span,
            Err(err) => {
                log::error!("could not create word token: {:?}", err);
                return WordToken(None);
            }
        };
        span.set_class_name("moving-word");
        span.set_text_content(Some(text));
        let style = span.style();
        style.set_property("position", "absolute").ok();
        style.set_property("white-space", "nowrap").ok();
        style.set_property("top", "50%").ok();
        style.set_property("transform", "translateY(-50%)").ok();
        if let Err(err) = self.track.append_child(&span) {
            log::error!("could not attach word token: {:?}", err);
            return WordToken(None);
        }
        WordToken(Some(span))
    }

    fn measure_width(&self, token: &WordToken) -> f64 {
        token.0.as_ref().map(|el| el.client_width() as f64).unwrap_or(0.0)
    }

    fn measure_track_width(&self) -> f64 {
        self.track.client_width() as f64
    }

    fn set_position(&mut self, token: &WordToken, x: f64) {
        if let Some(el) = &token.0 {
            el.style().set_property("left", &format!("{x}px")).ok();
        }
    }

    fn remove_token(&mut self, token: WordToken) {
        if let Some(el) = token.0 {
            el.remove();
        }
    }
}

impl InputSurface for WebHost {
    fn input_value(&self) -> String {
        self.input.value()
    }

    fn clear_input(&mut self) {
        self.input.set_value("");
    }

    fn focus_input(&mut self) {
        self.input.focus().ok();
    }
}

impl DisplaySurface for WebHost {
    fn show_score(&mut self, score: u32) {
        self.score.set_text_content(Some(&score.to_string()));
    }

    fn show_speed(&mut self, duration_secs: f64) {
        self.speed.set_text_content(Some(&format_speed(duration_secs)));
    }
}

impl FrameScheduler for WebHost {
    type FrameHandle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        FRAME_CALLBACK.with(|cell| {
            let cb = cell.borrow();
            let cb = cb.as_ref()?;
            match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(handle) => Some(handle),
                Err(err) => {
                    log::error!("requestAnimationFrame failed: {:?}", err);
                    None
                }
            }
        })
    }

    fn cancel_frame(&mut self, handle: i32) {
        self.window.cancel_animation_frame(handle).ok();
    }
}

// --- Global loop state (wasm is single threaded) ----------------------------

thread_local! {
    static GAME: RefCell<Option<Game<WebHost>>> = const { RefCell::new(None) };
    static FRAME_CALLBACK: RefCell<Option<Closure<dyn FnMut(f64)>>> = const { RefCell::new(None) };
}

/// Start the game now if the page has finished loading, otherwise on `load`.
pub fn launch_when_ready(config: GameConfig) -> Result<(), GameError> {
    config.validate()?;
    let win = window().ok_or_else(|| GameError::Host("no window".into()))?;
    let doc = win
        .document()
        .ok_or_else(|| GameError::Host("no document".into()))?;

    if doc.ready_state() == "complete" {
        return install(config);
    }
    let closure = Closure::once(move |_evt: web_sys::Event| {
        if let Err(err) = install(config) {
            log::error!("game failed to start: {err}");
        }
    });
    win.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

fn install(config: GameConfig) -> Result<(), GameError> {
    if GAME.with(|g| g.borrow().is_some()) {
        log::warn!("game already running; ignoring second start");
        return Ok(());
    }
    let win = window().ok_or_else(|| GameError::Host("no window".into()))?;
    let doc = win
        .document()
        .ok_or_else(|| GameError::Host("no document".into()))?;
    let host = WebHost::from_document(win, doc)?;
    let input = host.input().clone();
    let game = Game::new(host, config)?;

    install_frame_callback();

    // Every edit is compared against the active word.
    {
        let closure = Closure::wrap(Box::new(move |_evt: web_sys::Event| {
            GAME.with(|cell| {
                if let Some(game) = cell.borrow_mut().as_mut() {
                    game.on_input();
                }
            });
        }) as Box<dyn FnMut(_)>);
        input
            .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        closure.forget();
    }
    // Enter must not submit an enclosing form.
    {
        let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
            if evt.key() == "Enter" {
                evt.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        input
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        closure.forget();
    }

    GAME.with(|cell| {
        let mut slot = cell.borrow_mut();
        let game = slot.insert(game);
        if let Err(err) = game.launch() {
            // Word bank exhausted: stays idle, nothing else to do.
            log::warn!("game idle after launch: {err}");
        }
    });
    log::info!("word drift started");
    Ok(())
}

fn install_frame_callback() {
    FRAME_CALLBACK.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_some() {
            return;
        }
        *slot = Some(Closure::wrap(Box::new(move |ts: f64| {
            GAME.with(|state_cell| {
                if let Some(game) = state_cell.borrow_mut().as_mut() {
                    game.on_frame(ts);
                }
            });
        }) as Box<dyn FnMut(f64)>));
    });
}

/// JSON view of the running game, if any.
#[cfg(feature = "serde_json")]
pub fn snapshot_json() -> Option<String> {
    GAME.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|game| game.snapshot().to_json().ok())
    })
}
