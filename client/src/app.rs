//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::provider::ContentState;
use crate::pages::{
    dashboard::DashboardPage, landing::LandingPage, not_found::NotFoundPage,
    partners::PartnersPage, pitch_prep::PitchPrepPage, session_review::SessionReviewPage,
    voice_session::VoiceSessionPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Resolves the content tables once, provides them via context, and maps the
/// six literal paths to their screens. Anything else falls through to the
/// not-found screen.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Fixture-backed today; swapping the source in ContentState::default is
    // the only change a live backend needs.
    let content = RwSignal::new(ContentState::default());
    provide_context(content);

    view! {
        <Stylesheet id="leptos" href="/pkg/pitchflow.css"/>
        <Title text="PitchDeck AI Flow"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("voice-agent") view=VoiceSessionPage/>
                <Route path=StaticSegment("session-review") view=SessionReviewPage/>
                <Route path=StaticSegment("company-pitch-prep") view=PitchPrepPage/>
                <Route path=StaticSegment("vc-partners") view=PartnersPage/>
            </Routes>
        </Router>
    }
}
