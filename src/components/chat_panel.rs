//! Retrieval-backed chat panel: transcript, source tags, question input.

use leptos::prelude::*;

use crate::state::chat::{ChatState, Role, Turn};

/// Chat panel showing the conversation transcript and an input for asking
/// questions about the uploaded documents.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = RwSignal::new(ChatState::default());
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest turn (or the thinking bubble) visible whenever the
    // transcript changes.
    Effect::new(move || {
        let _ = chat.get().turns().len();

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let raw = input.get();
        let mut accepted = None;
        chat.update(|state| accepted = state.submit(&raw));
        let Some(question) = accepted else {
            return;
        };
        input.set(String::new());

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::ask(&question).await {
                Ok(resp) => {
                    chat.update(|state| state.resolve(resp.answer, resp.sources.as_deref()));
                }
                Err(err) => {
                    log::warn!("query failed: {err}");
                    chat.update(|state| state.resolve_error());
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = question;
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="chat-panel card">
            <div class="chat-panel__header">
                <span class="chat-panel__bot-dot" aria-hidden="true"></span>
                <h2 class="chat-panel__title">"Medical Assistant"</h2>
            </div>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let state = chat.get();
                    if state.turns().is_empty() && !state.is_awaiting() {
                        return view! {
                            <div class="chat-panel__empty">
                                <p>"Ask a question about the uploaded documents..."</p>
                            </div>
                        }
                            .into_any();
                    }

                    state
                        .turns()
                        .iter()
                        .map(turn_view)
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                <Show when=move || chat.get().is_awaiting()>
                    <div class="chat-panel__row chat-panel__row--assistant">
                        <div class="chat-panel__bubble chat-panel__bubble--thinking">
                            "Thinking..."
                        </div>
                    </div>
                </Show>
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type your question..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_click
                    disabled=move || chat.get().is_awaiting()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}

/// Render one transcript turn as a chat bubble with optional source tags.
fn turn_view(turn: &Turn) -> impl IntoView {
    let (row_class, bubble_class) = match turn.role {
        Role::User => (
            "chat-panel__row chat-panel__row--user",
            "chat-panel__bubble chat-panel__bubble--user",
        ),
        Role::Assistant => (
            "chat-panel__row chat-panel__row--assistant",
            "chat-panel__bubble chat-panel__bubble--assistant",
        ),
    };
    let text = turn.text.clone();
    let sources = turn.sources.clone();
    let source_tags = (!sources.is_empty()).then(|| {
        view! {
            <div class="chat-panel__sources">
                {sources
                    .into_iter()
                    .map(|src| view! { <span class="chat-panel__source-tag">{src}</span> })
                    .collect::<Vec<_>>()}
            </div>
        }
    });

    view! {
        <div class=row_class>
            <div class=bubble_class>
                <p class="chat-panel__text">{text}</p>
                {source_tags}
            </div>
        </div>
    }
}
