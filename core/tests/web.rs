#![cfg(target_arch = "wasm32")]

use core::time::Duration;
use overbake_core::*;
use wasm_bindgen_test::*;
use web_time::Instant;

#[wasm_bindgen_test]
fn bake_runs_to_time_limit_on_wasm() {
    let t0 = Instant::now();
    let mut machine = GameMachine::new(ManualClock::new(t0), BakeConfig::default());
    machine.advance();

    let ticks: Vec<_> = machine
        .clock()
        .ticks_until(t0 + Duration::from_secs(BAKE_LIMIT_SECS))
        .collect();
    for tick in ticks {
        machine.on_clock_tick(tick);
    }

    assert_eq!(machine.state(), GameState::Over);
    assert_eq!(machine.quality(), Some(CookQuality::Overbaked));
}
