//! Landing-screen intro panel: headline and product bullets.

use leptos::prelude::*;

#[derive(Clone, Copy)]
enum BulletIcon {
    Play,
    Bars,
    Lines,
}

const BULLETS: &[(&str, BulletIcon)] = &[
    ("AI-powered presentation analysis", BulletIcon::Play),
    ("Data-driven improvement suggestions", BulletIcon::Bars),
    ("Real-time delivery feedback", BulletIcon::Lines),
];

/// Informational half of the landing screen.
#[component]
pub fn IntroPanel() -> impl IntoView {
    view! {
        <div class="intro-panel">
            <h1 class="intro-panel__headline">
                "Elevate Your " <span>"Pitch"</span>
            </h1>
            <p class="intro-panel__lede">
                "Create compelling presentations with real-time AI feedback and coaching"
            </p>
            <ul class="intro-panel__bullets">
                {BULLETS
                    .iter()
                    .map(|&(copy, icon)| {
                        view! {
                            <li class="intro-panel__bullet">
                                <span class="intro-panel__bullet-icon">{render_icon(icon)}</span>
                                <span>{copy}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

fn render_icon(icon: BulletIcon) -> impl IntoView {
    match icon {
        BulletIcon::Play => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="12" r="12"/>
                <polygon class="intro-panel__bullet-glyph" points="10,8 16,12 10,16"/>
            </svg>
        }
        .into_any(),
        BulletIcon::Bars => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="12" r="12"/>
                <rect class="intro-panel__bullet-glyph" x="8" y="12" width="2" height="4"/>
                <rect class="intro-panel__bullet-glyph" x="12" y="10" width="2" height="6"/>
                <rect class="intro-panel__bullet-glyph" x="16" y="8" width="2" height="8"/>
            </svg>
        }
        .into_any(),
        BulletIcon::Lines => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="12" r="12"/>
                <path class="intro-panel__bullet-stroke" d="M8 12h8M8 16h5"/>
            </svg>
        }
        .into_any(),
    }
}
