use std::time::Duration;

use dioxus::prelude::*;

use crate::platform::timer::sleep;

/// Tracks which scheduled action is the latest one.
///
/// Every trigger arms a new ticket; only the holder of the newest ticket may fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebounceGate {
    generation: u64,
}

impl DebounceGate {
    pub fn arm(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation == ticket
    }
}

/// Returns a callback that runs `action` once `delay` has passed without another call.
pub fn use_debounced<T: 'static>(delay: Duration, action: impl FnMut(T) + 'static) -> Callback<T> {
    let mut gate = use_signal(DebounceGate::default);
    let action = use_callback(action);

    use_callback(move |value: T| {
        let ticket = gate.write().arm();
        spawn(async move {
            sleep(delay).await;
            if gate.peek().is_current(ticket) {
                action.call(value);
            }
        });
    })
}
