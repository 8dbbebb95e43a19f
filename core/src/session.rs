use core::time::Duration;
use serde::{Deserialize, Serialize};
use web_time::Instant;

use crate::*;

/// Valid transitions:
/// - NotStarted -> InProgress
/// - InProgress -> Over
/// - Over -> InProgress
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Initial state, nothing baked yet
    NotStarted,
    /// Pizza is in the oven
    InProgress,
    /// Bake ended, by the player or by the time limit
    Over,
}

impl GameState {
    pub const fn next(self) -> Self {
        use GameState::*;
        match self {
            NotStarted => InProgress,
            InProgress => Over,
            Over => InProgress,
        }
    }

    pub const fn is_baking(self) -> bool {
        matches!(self, Self::InProgress)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// Runtime state of the game, reused for every bake.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GameSession {
    state: GameState,
    bake_started_at: Instant,
    elapsed_seconds: Seconds,
    quality: Option<CookQuality>,
    bakes: u32,
}

impl GameSession {
    pub fn new(now: Instant) -> Self {
        Self {
            state: Default::default(),
            bake_started_at: now,
            elapsed_seconds: 0,
            quality: None,
            bakes: 0,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn bake_started_at(&self) -> Instant {
        self.bake_started_at
    }

    /// Seconds into the current bake, frozen once the bake is over.
    pub fn elapsed_seconds(&self) -> Seconds {
        self.elapsed_seconds
    }

    /// Band computed by the last tick of the current or last bake, `None` before its first tick.
    pub fn quality(&self) -> Option<CookQuality> {
        self.quality
    }

    /// Number of bakes started so far.
    pub fn bakes(&self) -> u32 {
        self.bakes
    }

    pub(crate) fn set_state(&mut self, state: GameState) {
        self.state = state;
    }

    pub(crate) fn start_bake(&mut self, now: Instant) {
        self.bake_started_at = now;
        self.elapsed_seconds = 0;
        self.quality = None;
        self.bakes = self.bakes.saturating_add(1);
    }

    /// Updates elapsed time and band from a tick timestamp, truncating to whole seconds.
    pub(crate) fn record_tick(
        &mut self,
        timestamp: Instant,
        thresholds: &CookThresholds,
    ) -> (Seconds, CookQuality) {
        self.elapsed_seconds = timestamp
            .checked_duration_since(self.bake_started_at)
            .unwrap_or(Duration::ZERO)
            .as_secs();
        let quality = thresholds.classify(self.elapsed_seconds);
        self.quality = Some(quality);
        (self.elapsed_seconds, quality)
    }
}
