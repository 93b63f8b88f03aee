//! Screen for paths outside the route table.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1 class="not-found-page__code">"404"</h1>
            <p class="not-found-page__copy">"That page does not exist."</p>
            <a class="btn btn--primary" href="/">"Back to PitchDeck AI Flow"</a>
        </div>
    }
}
