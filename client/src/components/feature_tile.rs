//! Feature card used on the dashboard and the partner directory.

use leptos::prelude::*;

use crate::content::records::{FeatureCard, FeatureIcon};

/// One feature block; the call-to-action line is omitted when absent.
#[component]
pub fn FeatureTile(card: FeatureCard) -> impl IntoView {
    view! {
        <div class="feature-tile">
            <div class="feature-tile__icon">{render_icon(card.icon)}</div>
            <h4 class="feature-tile__title">{card.title}</h4>
            <p class="feature-tile__blurb">{card.blurb}</p>
            {card.cta.map(|cta| view! { <button class="feature-tile__cta">{cta}</button> })}
        </div>
    }
}

fn render_icon(icon: FeatureIcon) -> impl IntoView {
    match icon {
        FeatureIcon::Disc => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="12" r="12"/>
            </svg>
        }
        .into_any(),
        FeatureIcon::Square => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <rect x="4" y="4" width="16" height="16" rx="3"/>
            </svg>
        }
        .into_any(),
        FeatureIcon::Triangle => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <polygon points="12,2 22,22 2,22"/>
            </svg>
        }
        .into_any(),
    }
}
