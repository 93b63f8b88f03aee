//! Transcript bubble for one voice Q&A turn.

use leptos::prelude::*;

use crate::content::records::ChatTurn;

/// Avatar, speaker line, and message for one transcript turn. Turns without
/// a portrait fall back to an initial-letter avatar; the speaking turn gets
/// a pulse indicator.
#[component]
pub fn ChatBubble(turn: ChatTurn) -> impl IntoView {
    let ChatTurn { speaker, role, message, speaking, avatar_url } = turn;

    let initial = speaker.chars().next().unwrap_or('?').to_string();
    let avatar = match avatar_url {
        Some(url) => view! {
            <img class="chat-bubble__avatar" src=url alt=speaker.clone()/>
        }
        .into_any(),
        None => view! {
            <div class="chat-bubble__avatar chat-bubble__avatar--initial">{initial}</div>
        }
        .into_any(),
    };

    view! {
        <div class="chat-bubble">
            {avatar}
            <div class="chat-bubble__content">
                <div class="chat-bubble__speaker">
                    {speaker}
                    <span
                        class="chat-bubble__role"
                        class:chat-bubble__role--active=move || speaking
                    >
                        {role}
                    </span>
                </div>
                <div
                    class="chat-bubble__message"
                    class:chat-bubble__message--speaking=move || speaking
                >
                    <span>{message}</span>
                    {speaking.then(|| view! { <span class="chat-bubble__pulse">"●●●"</span> })}
                </div>
            </div>
        </div>
    }
}
