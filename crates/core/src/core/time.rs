pub use core::time::Duration;

// The browser has no `std` clock; `web-time` reads `performance.now()` instead.
#[cfg(target_arch = "wasm32")]
pub use web_time::Instant;

#[cfg(not(target_arch = "wasm32"))]
pub use std::time::Instant;

/// Monotonic milliseconds since a [`Clock`] was created.
pub type Millis = u64;

/// Millisecond clock anchored at construction.
///
/// The switcher and the tests work in plain [`Millis`]; only the front end
/// needs a real clock to produce them.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Delay from `now` until `deadline`, zero when it already passed.
pub fn until(deadline: Millis, now: Millis) -> Duration {
    Duration::from_millis(deadline.saturating_sub(now))
}
