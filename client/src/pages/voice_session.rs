//! Voice Q&A screen: transcript, voice input, session controls, and the
//! investor sidebar with live analytics.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::components::chat_bubble::ChatBubble;
use crate::components::score_bar::ScoreBar;
use crate::content::provider::ContentState;

#[component]
pub fn VoiceSessionPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    let investor = move || content.get().live.investor;

    view! {
        <AppShell>
            <div class="voice-session">
                <div class="voice-session__main">
                    <h1 class="page-title">"Voice Q&A Session"</h1>
                    <p class="page-lede">"Real-time, personalized Q&A with AI investor personas"</p>

                    <div class="card voice-session__transcript">
                        {move || {
                            content
                                .get()
                                .live
                                .transcript
                                .into_iter()
                                .map(|turn| view! { <ChatBubble turn/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>

                    <div class="voice-session__input">
                        <span class="voice-session__input-status">
                            "Voice recognition active - speak your response"
                        </span>
                        <input
                            class="voice-session__input-field"
                            placeholder="Type your response or press the mic button..."
                        />
                        <button class="voice-session__mic" title="Speak">
                            <svg viewBox="0 0 24 24" aria-hidden="true">
                                <path d="M12 18c1.66 0 3-1.34 3-3V7c0-1.66-1.34-3-3-3s-3 1.34-3 3v8c0 1.66 1.34 3 3 3zm5-3c0 2.33-1.46 4.32-3.5 4.77V21h-3v-1.23C8.46 19.32 7 17.33 7 15h2c0 1.3.84 2.4 2 2.82V21h2v-3.18c1.16-.42 2-1.52 2-2.82h2z"/>
                            </svg>
                        </button>
                    </div>

                    <div class="card voice-session__controls">
                        <button class="btn">"Pause Session"</button>
                        <button class="btn">"Repeat Question"</button>
                        <button class="btn">"Adjust Volume"</button>
                        <button class="btn btn--danger voice-session__end">"End Q&A Session"</button>
                    </div>
                </div>

                <div class="voice-session__sidebar">
                    <div class="card investor-card">
                        <img
                            class="investor-card__avatar"
                            src=move || investor().avatar_url
                            alt=move || investor().name
                        />
                        <div class="investor-card__name">{move || investor().name}</div>
                        <div class="investor-card__title">{move || investor().title}</div>
                        <div class="investor-card__stars">
                            {move || {
                                (0..investor().rating).map(|_| render_star()).collect::<Vec<_>>()
                            }}
                        </div>
                        <div class="investor-card__bio">{move || investor().bio}</div>
                    </div>

                    <div class="card analytics-card">
                        <div class="card__title">"Session Analytics"</div>
                        {move || {
                            content
                                .get()
                                .live
                                .analytics
                                .into_iter()
                                .map(|metric| {
                                    view! { <ScoreBar label=metric.label value=metric.value/> }
                                })
                                .collect::<Vec<_>>()
                        }}
                        <div class="analytics-card__categories">
                            <div class="analytics-card__categories-title">
                                "Top Question Categories"
                            </div>
                            <svg viewBox="0 0 120 80" class="analytics-card__pie" aria-hidden="true">
                                <circle cx="60" cy="40" r="32" fill="#232323"/>
                                <path d="M60 40 L60 8 A32 32 0 0 1 92 40 Z" fill="#ff9900"/>
                                <path d="M60 40 L92 40 A32 32 0 1 1 60 8 Z" fill="#26e67c"/>
                                <path d="M60 40 L60 72 A32 32 0 0 1 28 40 Z" fill="#fff" fill-opacity="0.2"/>
                            </svg>
                            <div class="analytics-card__legend">
                                <span class="analytics-card__legend-revenue">"Revenue Model (40%)"</span>
                                <span class="analytics-card__legend-competition">"Competition (30%)"</span>
                                <span class="analytics-card__legend-other">"Other (30%)"</span>
                            </div>
                        </div>
                    </div>

                    <div class="card suggestions-card">
                        <div class="card__title">"Suggested Responses"</div>
                        {move || {
                            content
                                .get()
                                .live
                                .suggestions
                                .into_iter()
                                .map(|tip| view! { <div class="suggestions-card__tip">{tip}</div> })
                                .collect::<Vec<_>>()
                        }}
                        <button class="btn btn--outline suggestions-card__more">
                            "Generate More Suggestions"
                        </button>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}

fn render_star() -> impl IntoView {
    view! {
        <svg viewBox="0 0 20 20" class="investor-card__star" aria-hidden="true">
            <polygon points="10,1 12,7 18,7 13,11 15,17 10,13 5,17 7,11 2,7 8,7"/>
        </svg>
    }
}
