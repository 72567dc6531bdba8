use floem::{HasViewId, prelude::*};

use crate::state::{StateStore, WidgetKey};

pub const BUTTON_WIDTH: f64 = 200.0;
pub const BUTTON_PADDING: f64 = 16.0;

/// Key of the click counter in the [`StateStore`].
pub const COUNTER_KEY: WidgetKey = WidgetKey::new("responsive-button.clicks");

pub fn counter_label(count: u64) -> String {
    format!("Clicked {count} times")
}

/// Increment-only click counter.
///
/// Starts at zero, grows by exactly one per activation and is never reset
/// while the process lives.
#[derive(Clone, Copy)]
pub struct CounterState {
    count: RwSignal<u64>,
}

impl CounterState {
    pub fn from_store(store: &StateStore) -> Self {
        Self {
            count: store.signal(COUNTER_KEY, || 0),
        }
    }

    pub fn count(&self) -> u64 {
        self.count.get()
    }

    /// Records one activation and returns the new count.
    pub fn activate(&self) -> u64 {
        self.count.update(|count| *count = count.saturating_add(1));
        let count = self.count.get_untracked();
        tracing::debug!(count, "counter activated");
        count
    }

    pub fn label(&self) -> String {
        counter_label(self.count())
    }
}

pub fn responsive_button(store: &StateStore) -> impl IntoView + use<> {
    let counter = CounterState::from_store(store);
    let view = button(label(move || counter.label()))
        .action(move || {
            counter.activate();
        })
        .style(|s| s.width(BUTTON_WIDTH).padding(BUTTON_PADDING));
    store.bind_view(COUNTER_KEY, view.view_id());
    view
}
