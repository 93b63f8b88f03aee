//! Landing screen: intro panel and sign-up form, side by side.
//!
//! The only screen without the shared chrome.

use leptos::prelude::*;

use crate::components::intro_panel::IntroPanel;
use crate::components::signup_panel::SignUpPanel;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <div class="landing-page__intro">
                <IntroPanel/>
            </div>
            <div class="landing-page__signup">
                <SignUpPanel/>
            </div>
        </div>
    }
}
