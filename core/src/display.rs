use crate::*;

pub const IDLE_BUTTON_TEXT: &str = "Start Baking!";
pub const BAKING_BUTTON_TEXT: &str = "Stop Baking";
pub const RESTART_BUTTON_TEXT: &str = "Start Baking";
pub const BAKING_STATUS_TEXT: &str = "Baking in progress...";

/// Everything the presentation layer renders, as observable properties.
#[derive(Debug)]
pub struct DisplayState {
    pub status_label: Observable<String>,
    pub button_label: Observable<String>,
    pub cook_status: Observable<String>,
    pub timer_label: Observable<String>,
    pub pizza_color: Observable<Rgba>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self {
            status_label: Observable::new(String::new()),
            button_label: Observable::new(IDLE_BUTTON_TEXT.to_string()),
            cook_status: Observable::new(String::new()),
            timer_label: Observable::new("0".to_string()),
            pizza_color: Observable::new(Rgba::RAW_DOUGH),
        }
    }

    /// Snapshot of the current values, handy for comparisons and logging.
    pub fn snapshot(&self) -> DisplaySnapshot {
        DisplaySnapshot {
            status_label: self.status_label.get().clone(),
            button_label: self.button_label.get().clone(),
            cook_status: self.cook_status.get().clone(),
            timer_label: self.timer_label.get().clone(),
            pizza_color: *self.pizza_color.get(),
        }
    }

    pub(crate) fn show_idle(&mut self) {
        self.button_label.set(IDLE_BUTTON_TEXT.to_string());
        self.status_label.set(String::new());
        self.cook_status.set(String::new());
    }

    pub(crate) fn show_baking(&mut self) {
        self.timer_label.set("0".to_string());
        self.pizza_color.set(Rgba::RAW_DOUGH);
        self.button_label.set(BAKING_BUTTON_TEXT.to_string());
        self.status_label.set(BAKING_STATUS_TEXT.to_string());
    }

    pub(crate) fn show_over(&mut self) {
        let final_status = self.cook_status.get().clone();
        self.button_label.set(RESTART_BUTTON_TEXT.to_string());
        self.status_label.set(final_status);
    }

    pub(crate) fn show_progress(&mut self, elapsed: Seconds, quality: CookQuality) -> bool {
        let mut updated = self.timer_label.set(elapsed.to_string());
        if let Some(text) = quality.status_text() {
            updated |= self.cook_status.set(text.to_string());
        }
        if let Some(color) = quality.color() {
            updated |= self.pizza_color.set(color);
        }
        updated
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DisplaySnapshot {
    pub status_label: String,
    pub button_label: String,
    pub cook_status: String,
    pub timer_label: String,
    pub pizza_color: Rgba,
}
