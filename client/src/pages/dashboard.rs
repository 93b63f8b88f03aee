//! Dashboard: session entry points, recent uploads, feature overview.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::components::feature_tile::FeatureTile;
use crate::components::upload_card::UploadCard;
use crate::content::fixtures;
use crate::content::provider::ContentState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    view! {
        <AppShell>
            <h1 class="page-title">
                "Start Your " <span class="page-title__accent">"AI-Powered Pitch Session"</span>
            </h1>
            <p class="page-lede">
                "Upload your pitch deck and practice with our AI investor simulation"
            </p>

            <div class="dashboard__actions">
                <div class="action-card">
                    <h2 class="action-card__title">"Upload Your Pitch Deck"</h2>
                    <p class="action-card__hint">"Supported formats: PDF, PPT, PPTX (Max: 50MB)"</p>
                    <button class="btn btn--outline">"Choose File"</button>
                </div>
                <div class="action-card">
                    <h2 class="action-card__title">"Start Pitch Simulation"</h2>
                    <p class="action-card__hint">
                        "Practice your pitch with AI-simulated investor questions"
                    </p>
                    <button class="btn btn--primary">"Start Session"</button>
                </div>
            </div>

            <div class="card dashboard__uploads">
                <h3 class="card__title">"Your recent uploads will appear here"</h3>
                <div class="dashboard__uploads-row">
                    {move || {
                        content
                            .get()
                            .uploads
                            .into_iter()
                            .map(|record| view! { <UploadCard record/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>

            <div class="dashboard__features">
                {fixtures::dashboard_features()
                    .into_iter()
                    .map(|card| view! { <FeatureTile card/> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="pro-tip">
                <h5 class="pro-tip__title">"Pro Tip: Prepare for Success"</h5>
                <p class="pro-tip__copy">
                    "For the best results, ensure your pitch deck clearly outlines your value \
                     proposition, market opportunity, business model, and financials. AI will \
                     focus questions on these key areas."
                </p>
                <span class="pro-tip__link">"Upgrade to Pro for advanced features →"</span>
            </div>
        </AppShell>
    }
}
