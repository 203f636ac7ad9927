//! Chat panel showing the transcript, a typing indicator, and a prompt input.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::Style;

use crate::components::typing_indicator::TypingIndicator;
use crate::config::ChatConfig;
use crate::controller::ChatController;
use crate::net::completion::{CompletionClient, HttpCompletionClient};
use crate::state::transcript::Message;
use crate::util::storage::BrowserStore;

#[cfg(feature = "csr")]
use crate::util::fullscreen::Fullscreen;

const PANEL_CSS: &str = r"
.chat-panel { display: flex; flex-direction: column; width: 100%; max-width: 48rem; height: 600px; margin: 0 auto; border: 1px solid #e4e4e7; border-radius: 0.75rem; }
.chat-panel--expanded { position: fixed; inset: 0; max-width: none; height: auto; margin: 0; border-radius: 0; z-index: 50; background: inherit; }
.chat-panel--hidden { display: none; }
.chat-panel__header { display: flex; align-items: center; justify-content: space-between; padding: 1rem 1.25rem; }
.chat-panel__messages { flex: 1; overflow-y: auto; padding: 0 1.25rem; }
.chat-panel__message { display: flex; gap: 0.75rem; margin-bottom: 1rem; justify-content: flex-start; }
.chat-panel__message--user { justify-content: flex-end; }
.chat-panel__bubble { max-width: 80%; padding: 0.5rem 1rem; border-radius: 0.5rem; background: #f4f4f5; white-space: pre-wrap; }
.chat-panel__message--user .chat-panel__bubble { background: #18181b; color: #fafafa; }
.chat-panel__typing { margin: 0 0 1rem 3rem; letter-spacing: 0.2em; color: #71717a; }
.chat-panel__input-row { display: flex; gap: 0.5rem; padding: 1rem; border-top: 1px solid #e4e4e7; }
.chat-panel__input { flex: 1; }
";

/// Chat panel bound to one [`ChatController`].
///
/// Submitting runs the completion call on the local executor; if the panel
/// is unmounted before the reply arrives the reply is dropped.
#[component]
pub fn ChatPanel(config: ChatConfig) -> impl IntoView {
    let client: Rc<dyn CompletionClient> = Rc::new(HttpCompletionClient::from_config(&config));
    let client = StoredValue::new_local(client);
    let controller = RwSignal::new_local(ChatController::mount(config, BrowserStore::open()));

    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "csr")]
    let fullscreen = StoredValue::new_local(Fullscreen::detect());
    #[cfg(feature = "csr")]
    watch_fullscreen_exit(fullscreen, controller);

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = controller.with(|c| c.messages().len());

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        let Some(text) = controller.try_with_untracked(|c| c.draft().to_owned()) else {
            return;
        };
        let Some(Some(turn)) = controller.try_update(|c| c.submit(&text)) else {
            return;
        };
        let Some(client) = client.try_get_value() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let resolution = turn.run(&*client).await;
            if controller.try_update(|c| c.resolve(resolution)).is_none() {
                leptos::logging::log!("chat panel unmounted before the reply arrived; reply dropped");
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        do_send();
    };

    let on_toggle_visible = move |_| controller.update(ChatController::toggle_visible);

    let on_toggle_expanded = move |_| {
        let Some(expanded) = controller.try_update(|c| {
            c.toggle_expanded();
            c.panel().expanded
        }) else {
            return;
        };
        #[cfg(feature = "csr")]
        sync_fullscreen(fullscreen, panel_ref, expanded);
        #[cfg(not(feature = "csr"))]
        let _ = expanded;
    };

    let visible = move || controller.with(|c| c.panel().visible);
    let expanded = move || controller.with(|c| c.panel().expanded);
    let pending = move || controller.with(ChatController::pending);
    let can_send = move || controller.with(|c| !c.pending() && !c.draft().trim().is_empty());

    view! {
        <Style>{PANEL_CSS}</Style>

        {move || {
            (!visible())
                .then(|| {
                    view! {
                        <button class="btn btn--primary chat-launcher" on:click=on_toggle_visible>
                            "Open chat"
                        </button>
                    }
                })
        }}

        <div
            class="chat-panel"
            class:chat-panel--hidden=move || !visible()
            class:chat-panel--expanded=expanded
            node_ref=panel_ref
        >
            <div class="chat-panel__header">
                <h2 class="chat-panel__title">"AI Assistant"</h2>
                <div class="chat-panel__actions">
                    <button class="btn" on:click=on_toggle_expanded>
                        {move || if expanded() { "Collapse" } else { "Expand" }}
                    </button>
                    <button class="btn" on:click=on_toggle_visible>
                        "Hide"
                    </button>
                </div>
            </div>

            <div class="chat-panel__messages" node_ref=messages_ref>
                <For
                    each=move || controller.with(|c| c.messages().to_vec())
                    key=|msg: &Message| msg.id.clone()
                    children=move |msg: Message| view! { <MessageRow message=msg/> }
                />
                {move || pending().then(|| view! { <TypingIndicator/> })}
            </div>

            <form class="chat-panel__input-row" on:submit=on_submit>
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || controller.with(|c| c.draft().to_owned())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        controller.update(|c| c.set_draft(value));
                    }
                />
                <button class="btn btn--primary" type="submit" disabled=move || !can_send()>
                    "Send"
                </button>
            </form>
        </div>
    }
}

/// One transcript row, aligned by author.
#[component]
fn MessageRow(message: Message) -> impl IntoView {
    let is_user = message.is_user();
    view! {
        <div class="chat-panel__message" class:chat-panel__message--user=is_user>
            <span class="chat-panel__author">{if is_user { "You" } else { "AI" }}</span>
            <div class="chat-panel__bubble">{message.content}</div>
        </div>
    }
}

/// Enter or leave fullscreen to match the expanded flag, when supported.
#[cfg(feature = "csr")]
fn sync_fullscreen(
    fullscreen: StoredValue<Option<Fullscreen>, LocalStorage>,
    panel_ref: NodeRef<leptos::html::Div>,
    expanded: bool,
) {
    fullscreen.with_value(|fs| {
        let Some(fs) = fs else {
            return;
        };
        if !expanded {
            fs.exit();
            return;
        }
        if let Some(el) = panel_ref.get_untracked() {
            if let Err(e) = fs.enter(&el) {
                leptos::logging::warn!("fullscreen request refused, keeping CSS layout: {e}");
            }
        }
    });
}

/// Collapse the panel when the user leaves fullscreen with the browser's own
/// controls (Esc). The listener is released with the component.
#[cfg(feature = "csr")]
fn watch_fullscreen_exit(
    fullscreen: StoredValue<Option<Fullscreen>, LocalStorage>,
    controller: RwSignal<ChatController<BrowserStore>, LocalStorage>,
) {
    let subscription = fullscreen.with_value(|fs| {
        fs.as_ref().map(|fs| {
            fs.on_change(move |active| {
                if !active {
                    controller.try_update(|c| c.set_expanded(false));
                }
            })
        })
    });
    match subscription {
        Some(Ok(subscription)) => {
            let _subscription = StoredValue::new_local(subscription);
        }
        Some(Err(e)) => leptos::logging::warn!("fullscreen listener not attached: {e}"),
        None => leptos::logging::warn!("fullscreen API unavailable; expanded mode is layout-only"),
    }
}
