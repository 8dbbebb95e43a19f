use gloo::timers::callback::Interval;
use overbake_core::{GameClock, TICK_INTERVAL};
use web_time::Instant;
use yew::Callback;

/// Game clock backed by a browser interval timer.
#[derive(Debug)]
pub(crate) struct IntervalClock {
    on_tick: Callback<Instant>,
    interval: Option<Interval>,
}

impl IntervalClock {
    pub(crate) fn new(on_tick: Callback<Instant>) -> Self {
        Self {
            on_tick,
            interval: None,
        }
    }
}

impl GameClock for IntervalClock {
    fn start(&mut self) {
        let on_tick = self.on_tick.clone();
        let millis = TICK_INTERVAL.as_millis() as u32;
        // replacing the interval drops, and so cancels, the previous sequence
        self.interval = Some(Interval::new(millis, move || on_tick.emit(Instant::now())));
        log::debug!("clock started, ticking every {}ms", millis);
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}
