//! Background video autoplay.
//!
//! Browsers may refuse to start even a muted autoplay video, so playback is
//! retried when metadata loads, when enough data is buffered and whenever the
//! tab becomes visible again. Refusals are logged and otherwise ignored.

use tracing::{debug, warn};

use crate::error::MenuError;

/// The video element as seen by [`VideoAutoplay`].
pub trait MediaElement {
    fn is_paused(&self) -> bool;

    /// Requests playback. An `Err` is a synchronous refusal; asynchronous ones
    /// are reported back through [`VideoAutoplay::record_rejection`].
    fn play(&self) -> Result<(), MenuError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayTrigger {
    Mount,
    LoadedMetadata,
    CanPlay,
    VisibilityChange { visible: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// [`VideoAutoplay::initialize`] has not run yet.
    Uninitialized,
    /// The tab went hidden; nothing to do.
    Hidden,
    AlreadyPlaying,
    Requested,
    Rejected,
}

/// Per-instance autoplay state. The initialization guard lives here rather
/// than in a global so two menu sections never share it.
#[derive(Debug, Default, Clone)]
pub struct VideoAutoplay {
    initialized: bool,
    attempts: u32,
    rejections: u32,
    last_error: Option<String>,
}

impl VideoAutoplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// First call arms the controller and makes the initial play attempt.
    /// Returns `false`, doing nothing, on every later call.
    pub fn initialize<M: MediaElement>(&mut self, media: &M) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.handle(media, PlayTrigger::Mount);
        true
    }

    pub fn handle<M: MediaElement>(&mut self, media: &M, trigger: PlayTrigger) -> PlayOutcome {
        if !self.initialized {
            return PlayOutcome::Uninitialized;
        }
        if trigger == (PlayTrigger::VisibilityChange { visible: false }) {
            return PlayOutcome::Hidden;
        }
        if !media.is_paused() {
            return PlayOutcome::AlreadyPlaying;
        }

        self.attempts += 1;
        debug!("requesting video playback ({:?})", trigger);
        match media.play() {
            Ok(()) => PlayOutcome::Requested,
            Err(e) => {
                self.record_rejection(e.to_string());
                PlayOutcome::Rejected
            }
        }
    }

    pub fn record_rejection(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!("Video play error: {}", reason);
        self.rejections += 1;
        self.last_error = Some(reason);
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn rejections(&self) -> u32 {
        self.rejections
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
