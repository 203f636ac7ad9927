//! Root application component: page shell around the chat panel.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::chat_panel::ChatPanel;
use crate::config::ChatConfig;
use crate::error::ErrorCode;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = load_config();

    view! {
        <Title text="FreeGPT"/>

        <main class="page">
            <div class="page__hero">
                <h1 class="page__title">"FreeGPT"</h1>
                <p class="page__tagline">"Your personal AI assistant powered by open-source LLMs"</p>
            </div>
            <ChatPanel config/>
        </main>
    }
}

/// Environment config, or defaults with a warning when it is invalid.
fn load_config() -> ChatConfig {
    ChatConfig::from_env().unwrap_or_else(|e| {
        leptos::logging::warn!("chat config rejected, using defaults: code={} {e}", e.error_code());
        ChatConfig::default()
    })
}
