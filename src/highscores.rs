//! Session best score
//!
//! Lives in memory only and survives restarts for the lifetime of the process.

use serde::{Deserialize, Serialize};

/// Best score across the runs of this session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBest {
    pub best: u32,
    /// Finished runs
    pub runs: u32,
}

impl SessionBest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a score would beat the current best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished run. Returns true when it set a new best.
    pub fn record(&mut self, score: u32) -> bool {
        self.runs += 1;
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        true
    }

    /// Text for the score display
    pub fn display_text(&self) -> String {
        format!("High Score: {}", self.best)
    }
}
