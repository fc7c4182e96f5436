//! Transient "saved" confirmation state for the settings modal.

use serde::{Deserialize, Serialize};

/// Delays applied after a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackTiming {
    /// How long the saved confirmation stays visible
    #[serde(default = "default_saved_flash_ms")]
    pub saved_flash_ms: u32,
    /// Delay between a save and the modal closing itself
    #[serde(default = "default_close_delay_ms")]
    pub close_delay_ms: u32,
}

fn default_saved_flash_ms() -> u32 {
    2000
}

fn default_close_delay_ms() -> u32 {
    500
}

impl Default for FeedbackTiming {
    fn default() -> Self {
        Self {
            saved_flash_ms: default_saved_flash_ms(),
            close_delay_ms: default_close_delay_ms(),
        }
    }
}

/// Saved flag plus a generation counter.
///
/// Every save bumps the generation. A scheduled reset carries the generation
/// it was scheduled for and only clears the flag if no newer save happened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveFeedback {
    saved: bool,
    generation: u32,
}

impl SaveFeedback {
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Set the flag and return the generation the reset must present.
    pub fn mark_saved(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.saved = true;
        self.generation
    }

    /// Clear the flag if `generation` is still the latest save.
    /// Returns whether the flag was cleared.
    pub fn expire(&mut self, generation: u32) -> bool {
        if self.saved && self.generation == generation {
            self.saved = false;
            true
        } else {
            false
        }
    }
}
