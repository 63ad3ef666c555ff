//! Timing and threshold knobs.
//!
//! Every field has a default matching the stylesheet the page ships with, so an
//! empty JSON object is a valid config.

use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::time::Millis;

/// Longest delay accepted for any timing field.
pub const MAX_DELAY_MS: Millis = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuTiming {
    /// Fade-out of the old items before the list is swapped.
    pub fade_out_ms: Millis,
    /// Gap between the swap and clearing the fading flag.
    pub settle_ms: Millis,
    /// Per-item entrance offset.
    pub stagger_ms: Millis,
    /// Delay after a swap before the scroll reveal helper rescans the page.
    pub rescan_delay_ms: Millis,
}

impl MenuTiming {
    fn fields(&self) -> [(&'static str, Millis); 4] {
        [
            ("fade_out_ms", self.fade_out_ms),
            ("settle_ms", self.settle_ms),
            ("stagger_ms", self.stagger_ms),
            ("rescan_delay_ms", self.rescan_delay_ms),
        ]
    }
}

impl Default for MenuTiming {
    fn default() -> Self {
        Self {
            fade_out_ms: 300,
            settle_ms: 50,
            stagger_ms: 50,
            rescan_delay_ms: 350,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub timing: MenuTiming,
    /// Widest viewport, in CSS pixels, still treated as mobile.
    pub mobile_max_width: f64,
    /// Fraction of the viewport height an element's top must rise above to reveal.
    pub reveal_ratio: f64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            timing: MenuTiming::default(),
            mobile_max_width: 768.0,
            reveal_ratio: 0.8,
        }
    }
}

impl MenuConfig {
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), MenuError> {
        for (name, value) in self.timing.fields() {
            if value > MAX_DELAY_MS {
                return Err(MenuError::InvalidConfig(format!(
                    "timing.{name} must be at most {MAX_DELAY_MS} ms, got {value}"
                )));
            }
        }
        if !self.reveal_ratio.is_finite() || self.reveal_ratio <= 0.0 || self.reveal_ratio > 1.0 {
            return Err(MenuError::InvalidConfig(format!(
                "reveal_ratio must be in (0, 1], got {}",
                self.reveal_ratio
            )));
        }
        if !self.mobile_max_width.is_finite() || self.mobile_max_width < 0.0 {
            return Err(MenuError::InvalidConfig(format!(
                "mobile_max_width must be a non-negative width, got {}",
                self.mobile_max_width
            )));
        }
        Ok(())
    }
}
