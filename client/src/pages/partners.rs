//! VC partner directory: searchable card grid and simulation overview.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::components::feature_tile::FeatureTile;
use crate::components::partner_card::PartnerCard;
use crate::content::fixtures;
use crate::content::provider::ContentState;

#[component]
pub fn PartnersPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    view! {
        <AppShell>
            <h1 class="page-title">"Venture Capitalist Partners"</h1>
            <p class="page-lede">
                "Explore our network of outstanding profiles that PitchDeck AI can simulate \
                 and challenge your pitch for positive outcomes."
            </p>

            <div class="partners__search">
                <input class="partners__search-input" placeholder="Search partners..."/>
                <button class="btn btn--primary partners__search-btn">"Search"</button>
            </div>

            <div class="partners__grid">
                {move || {
                    content
                        .get()
                        .partners
                        .into_iter()
                        .map(|profile| view! { <PartnerCard profile/> })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="partners__features">
                {fixtures::partner_features()
                    .into_iter()
                    .map(|card| view! { <FeatureTile card/> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="partners__footer">
                <div class="partners__footer-actions">
                    <button class="btn btn--primary">"Request New Company Profile"</button>
                    <button class="btn btn--outline">"Contact Us"</button>
                </div>
                <div class="partners__tip">
                    <span>
                        "Pro Tip: Study your target VC's background and portfolio to tailor \
                         your pitch and anticipate their questions."
                    </span>
                    <svg viewBox="0 0 24 24" class="partners__tip-icon" aria-hidden="true">
                        <rect x="4" y="4" width="16" height="16" rx="3"/>
                    </svg>
                </div>
            </div>
        </AppShell>
    }
}
