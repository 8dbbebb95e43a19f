use core::fmt;
use overbake_core as game;
use std::cell::Cell;
use std::rc::Rc;
use web_time::Instant;
use yew::prelude::*;

use crate::clock::IntervalClock;

/// CSS hex notation for a tint, alpha included.
fn css_color(color: game::Rgba) -> String {
    let [r, g, b, a] = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
}

/// Marks `dirty` whenever the property changes, so the next update re-renders.
fn watch<T>(property: &mut game::Observable<T>, name: &'static str, dirty: &Rc<Cell<bool>>)
where
    T: PartialEq + fmt::Debug + 'static,
{
    let dirty = dirty.clone();
    property.subscribe(move |value: &T| {
        log::trace!("{}: {:?}", name, value);
        dirty.set(true);
    });
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Advance,
    Tick(Instant),
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct BakeProps {
    pub config: game::BakeConfig,
}

#[derive(Debug)]
pub(crate) struct BakeView {
    machine: game::GameMachine<IntervalClock>,
    dirty: Rc<Cell<bool>>,
}

impl BakeView {
    fn get_game_state_class(&self) -> Classes {
        use game::GameState::*;
        classes!(match self.machine.state() {
            NotStarted => "not-started",
            InProgress => "in-progress",
            Over => "over",
        })
    }
}

impl Component for BakeView {
    type Message = Msg;
    type Properties = BakeProps;

    fn create(ctx: &Context<Self>) -> Self {
        let clock = IntervalClock::new(ctx.link().callback(Msg::Tick));
        let mut machine = game::GameMachine::new(clock, ctx.props().config);
        log::debug!("thresholds: {}", machine.thresholds());

        let dirty = Rc::new(Cell::new(false));
        let display = machine.display_mut();
        watch(&mut display.status_label, "status_label", &dirty);
        watch(&mut display.button_label, "button_label", &dirty);
        watch(&mut display.cook_status, "cook_status", &dirty);
        watch(&mut display.timer_label, "timer_label", &dirty);
        watch(&mut display.pizza_color, "pizza_color", &dirty);

        Self { machine, dirty }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let event = match msg {
            Advance => {
                log::debug!("bake button pressed in {:?}", self.machine.state());
                game::GameEvent::Advance
            }
            Tick(timestamp) => game::GameEvent::ClockTick(timestamp),
        };
        self.machine.handle(event);

        self.dirty.replace(false)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let display = self.machine.display();
        let game_state_class = self.get_game_state_class();
        let pizza_fill = css_color(*display.pizza_color.get());
        let cb_advance = ctx.link().callback(|_: MouseEvent| Msg::Advance);

        html! {
            <div class={classes!("overbake", game_state_class)}>
                <p class="instructions">{display.status_label.get().clone()}</p>
                <svg class="pizza" viewBox="0 0 100 100" role="img">
                    <circle cx="50" cy="50" r="46" fill={pizza_fill}/>
                </svg>
                <nav>
                    <aside class="cook-status">{display.cook_status.get().clone()}</aside>
                    <button onclick={cb_advance}>{display.button_label.get().clone()}</button>
                    <aside class="timer">{display.timer_label.get().clone()}</aside>
                </nav>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tints_render_as_css_hex() {
        assert_eq!(css_color(game::Rgba::RAW_DOUGH), "#ffefd8ff");
        assert_eq!(css_color(game::Rgba::CRISPY), "#b58700ff");
    }

    #[test]
    fn watched_property_marks_dirty_only_on_change() {
        let dirty = Rc::new(Cell::new(false));
        let mut label = game::Observable::new("Start Baking!".to_string());
        watch(&mut label, "button_label", &dirty);

        label.set("Start Baking!".to_string());
        assert!(!dirty.get());

        label.set("Stop Baking".to_string());
        assert!(dirty.replace(false));
    }
}
