//! Top bar: session actions and the signed-in identity glyph.

use leptos::prelude::*;

/// Horizontal bar across the top of every chrome screen.
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header class="top-bar">
            <div class="top-bar__actions">
                <button class="btn">"New Session"</button>
                <button class="btn btn--primary">"Start Pitch"</button>
            </div>
            <div class="top-bar__identity">
                <span class="top-bar__name">"Alex"</span>
                <div class="top-bar__avatar">"A"</div>
            </div>
        </header>
    }
}
