use core::time::Duration;
use web_time::Instant;

/// Interval between two clock ticks, also the delay before the first one.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Source of once-per-second ticks that drive a bake.
///
/// Ticks are delivered by whoever owns the clock calling
/// [`GameMachine::on_clock_tick`](crate::GameMachine::on_clock_tick) with the tick timestamp.
/// There is no `stop`, ticks that arrive while no bake is running are ignored by the machine.
pub trait GameClock {
    /// Starts a fresh tick sequence, first tick one [`TICK_INTERVAL`] from now.
    fn start(&mut self);

    fn now(&self) -> Instant;
}

/// Clock that only moves when told to, and records how often it was started.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ManualClock {
    now: Instant,
    started_at: Option<Instant>,
    start_count: u32,
}

impl ManualClock {
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            started_at: None,
            start_count: 0,
        }
    }

    pub fn set(&mut self, now: Instant) {
        self.now = now;
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn start_count(&self) -> u32 {
        self.start_count
    }

    /// When the current tick sequence was started.
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    /// Timestamps a real clock started at [`ManualClock::started_at`] would have emitted up to
    /// and including `until`.
    pub fn ticks_until(&self, until: Instant) -> impl Iterator<Item = Instant> + use<> {
        let mut next = self.started_at.map(|started_at| started_at + TICK_INTERVAL);
        core::iter::from_fn(move || {
            let tick = next.filter(|&tick| tick <= until)?;
            next = Some(tick + TICK_INTERVAL);
            Some(tick)
        })
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl GameClock for ManualClock {
    fn start(&mut self) {
        log::trace!("manual clock started");
        self.started_at = Some(self.now);
        self.start_count += 1;
    }

    fn now(&self) -> Instant {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unstarted_clock_emits_nothing() {
        let clock = ManualClock::default();
        let until = clock.now() + Duration::from_secs(10);

        assert_eq!(clock.ticks_until(until).count(), 0);
    }

    #[test]
    fn first_tick_comes_one_interval_after_start() {
        let t0 = Instant::now();
        let mut clock = ManualClock::new(t0);
        clock.start();

        let ticks: Vec<_> = clock.ticks_until(t0 + Duration::from_millis(3500)).collect();

        assert_eq!(
            ticks,
            [
                t0 + Duration::from_secs(1),
                t0 + Duration::from_secs(2),
                t0 + Duration::from_secs(3),
            ]
        );
    }

    #[test]
    fn restart_begins_a_fresh_sequence() {
        let t0 = Instant::now();
        let mut clock = ManualClock::new(t0);
        clock.start();
        clock.advance(Duration::from_millis(2500));
        clock.start();

        let first = clock.ticks_until(t0 + Duration::from_secs(10)).next();

        assert_eq!(clock.start_count(), 2);
        assert_eq!(first, Some(t0 + Duration::from_millis(3500)));
    }
}
