//! Animated "assistant is typing" dots shown while a reply is pending.

#[cfg(test)]
#[path = "typing_indicator_test.rs"]
mod typing_indicator_test;

use leptos::prelude::*;

#[cfg(feature = "csr")]
const TICK_MS: u32 = 400;
const MAX_DOTS: usize = 3;

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn next_frame(frame: usize) -> usize {
    frame % MAX_DOTS + 1
}

/// Typing indicator. Mount it only while a turn is pending: the animation
/// interval lives exactly as long as the component.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    let frame = RwSignal::new(1_usize);

    #[cfg(feature = "csr")]
    {
        let ticker = gloo_timers::callback::Interval::new(TICK_MS, move || {
            frame.try_update(|f| *f = next_frame(*f));
        });
        // Dropped (and cancelled) when this component's owner is disposed.
        let _ticker = StoredValue::new_local(ticker);
    }

    view! {
        <div class="chat-panel__typing" aria-label="Assistant is typing">
            {move || "•".repeat(frame.get())}
        </div>
    }
}
