//! A per-viewer boolean paired with its public counter.

use serde::{Deserialize, Serialize};

/// A viewer-specific toggle (liked, joined, attending, prayed) and the
/// counter it feeds. Toggling flips the flag and moves the counter by
/// exactly one in the same direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountedFlag {
    pub active: bool,
    pub count: u32,
}

impl CountedFlag {
    pub fn new(active: bool, count: u32) -> Self {
        Self { active, count }
    }

    /// Fresh item: flag off, counter at zero.
    pub fn zero() -> Self {
        Self {
            active: false,
            count: 0,
        }
    }

    /// Flips the flag and adjusts the counter by ±1 in the direction of
    /// the new flag value. The counter never goes below zero, even on
    /// inconsistent input.
    pub fn toggle(&mut self) {
        if self.active {
            self.active = false;
            self.count = self.count.saturating_sub(1);
        } else {
            self.active = true;
            self.count += 1;
        }
    }
}
