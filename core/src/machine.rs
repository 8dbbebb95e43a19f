use web_time::Instant;

use crate::*;

/// Inputs the machine reacts to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameEvent {
    /// The player pressed the start/stop button
    Advance,
    /// The clock ticked at the given time
    ClockTick(Instant),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: GameState,
    pub to: GameState,
}

impl Transition {
    pub const fn ends_bake(self) -> bool {
        matches!(self.to, GameState::Over)
    }
}

/// Outcome of a clock tick
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// No bake running, the tick was dropped
    Ignored,
    /// Tick processed, nothing visible changed
    NoChange,
    /// Tick processed and the display was updated
    Baking,
    /// The bake hit the time limit and was ended
    Finished(Transition),
}

impl TickOutcome {
    /// Whether this outcome could have caused an update to the display
    pub const fn has_update(self) -> bool {
        use TickOutcome::*;
        match self {
            Ignored => false,
            NoChange => false,
            Baking => true,
            Finished(_) => true,
        }
    }
}

/// Owns the game session and keeps the display in sync with it.
#[derive(Debug)]
pub struct GameMachine<C> {
    clock: C,
    thresholds: CookThresholds,
    session: GameSession,
    display: DisplayState,
}

impl<C: GameClock> GameMachine<C> {
    pub fn new(clock: C, config: BakeConfig) -> Self {
        let session = GameSession::new(clock.now());
        let mut machine = Self {
            clock,
            thresholds: config.thresholds,
            session,
            display: DisplayState::new(),
        };
        machine.enter(GameState::NotStarted);
        machine
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn elapsed_seconds(&self) -> Seconds {
        self.session.elapsed_seconds()
    }

    /// Quality of the current bake as of its last tick, frozen once the bake is over.
    pub fn quality(&self) -> Option<CookQuality> {
        self.session.quality()
    }

    pub fn thresholds(&self) -> &CookThresholds {
        &self.thresholds
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut DisplayState {
        &mut self.display
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Moves to the next state in the `NotStarted -> InProgress -> Over -> InProgress` cycle.
    pub fn advance(&mut self) -> Transition {
        let from = self.session.state();
        let to = from.next();

        // the entry effects for Over read the cook status of the bake that is ending
        self.enter(to);
        self.session.set_state(to);

        log::debug!("game state: {:?} -> {:?}", from, to);
        Transition { from, to }
    }

    pub fn on_clock_tick(&mut self, timestamp: Instant) -> TickOutcome {
        if !self.session.state().is_baking() {
            log::trace!("tick ignored in state {:?}", self.session.state());
            return TickOutcome::Ignored;
        }

        let (elapsed, quality) = self.session.record_tick(timestamp, &self.thresholds);
        let updated = self.display.show_progress(elapsed, quality);
        log::trace!("tick: {}s {:?}", elapsed, quality);

        if elapsed == BAKE_LIMIT_SECS {
            log::info!("bake reached {}s, taking the pizza out", BAKE_LIMIT_SECS);
            TickOutcome::Finished(self.advance())
        } else if updated {
            TickOutcome::Baking
        } else {
            TickOutcome::NoChange
        }
    }

    /// Feeds an event to the machine, returns whether the display may have changed.
    pub fn handle(&mut self, event: GameEvent) -> bool {
        match event {
            GameEvent::Advance => {
                self.advance();
                true
            }
            GameEvent::ClockTick(timestamp) => self.on_clock_tick(timestamp).has_update(),
        }
    }

    fn enter(&mut self, state: GameState) {
        use GameState::*;
        match state {
            NotStarted => self.display.show_idle(),
            InProgress => {
                let now = self.clock.now();
                self.session.start_bake(now);
                self.clock.start();
                self.display.show_baking()
            }
            Over => self.display.show_over(),
        }
    }
}
