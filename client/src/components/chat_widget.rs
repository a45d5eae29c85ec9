//! Chat widget: scrolling message log plus input row.

use leptos::prelude::*;

use crate::app::SocketSender;
use crate::state::chat::{ChatState, prepare_outbound};

/// The whole chat surface: log, text input, and send button.
///
/// Message text renders as a literal text node, so markup in a message
/// body shows up verbatim instead of restructuring the log.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let sender = expect_context::<RwSignal<SocketSender>>();

    let input = RwSignal::new(String::new());
    let log_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry visible as the log grows.
    Effect::new(move || {
        let _ = chat.get().entries.len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = log_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let Some(message) = prepare_outbound(&input.get()) else {
            return;
        };

        if !sender.get().send(&message) {
            leptos::logging::warn!("socket unavailable, message rendered locally only");
        }
        // Optimistic local echo: the relay does not send our message back.
        chat.update(|c| c.apply_inbound(message));
        input.set(String::new());
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            do_send();
        }
    };

    view! {
        <div class="chat">
            <div id="chat-box" node_ref=log_ref>
                {move || {
                    let entries = chat.get().entries;
                    entries
                        .iter()
                        .map(|entry| {
                            view! {
                                <div class=format!("message {}", entry.style_class())>
                                    <strong>{format!("{}:", entry.display_label())}</strong>
                                    " "
                                    {entry.text.clone()}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="chat-input-row">
                <input
                    id="message-input"
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button id="send-button" on:click=on_click>
                    "Send"
                </button>
            </div>
        </div>
    }
}
