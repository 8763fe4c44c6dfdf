//! Collaborator seams between the game core and its host.
//!
//! The core never touches the DOM directly. A host implements these four traits
//! (the browser host in `web.rs`, a recording fake in tests) and the blanket
//! [`Host`] impl bundles them for [`crate::Game`].

/// Places and moves the visual token that carries the active word.
pub trait RenderSurface {
    type Token;

    fn create_token(&mut self, text: &str) -> Self::Token;
    /// Rendered width of the token in track units (px in the browser).
    fn measure_width(&self, token: &Self::Token) -> f64;
    fn measure_track_width(&self) -> f64;
    fn set_position(&mut self, token: &Self::Token, x: f64);
    fn remove_token(&mut self, token: Self::Token);
}

/// The player's text field.
pub trait InputSurface {
    fn input_value(&self) -> String;
    fn clear_input(&mut self);
    fn focus_input(&mut self);
}

/// Score and speed read-outs.
pub trait DisplaySurface {
    fn show_score(&mut self, score: u32);
    /// Current traversal duration in seconds; see [`crate::speed::format_speed`].
    fn show_speed(&mut self, duration_secs: f64);
}

/// Per-frame callback primitive (`requestAnimationFrame` in the browser).
///
/// The host delivers each granted frame by calling [`crate::Game::on_frame`]
/// with a monotonic timestamp in milliseconds.
pub trait FrameScheduler {
    type FrameHandle;

    /// `None` when the host could not schedule a frame.
    fn request_frame(&mut self) -> Option<Self::FrameHandle>;
    fn cancel_frame(&mut self, handle: Self::FrameHandle);
}

pub trait Host: RenderSurface + InputSurface + DisplaySurface + FrameScheduler {}

impl<T> Host for T where T: RenderSurface + InputSurface + DisplaySurface + FrameScheduler {}
