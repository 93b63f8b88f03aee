//! Labeled metric bar with a proportional fill.

use leptos::prelude::*;

use crate::util::percent;

/// A label/value row over a track whose fill width is `value`% of the track.
#[component]
pub fn ScoreBar(label: String, value: u8) -> impl IntoView {
    view! {
        <div class="score-bar">
            <div class="score-bar__head">
                <span>{label}</span>
                <span class="score-bar__value">{percent::label(value)}</span>
            </div>
            <div class="score-bar__track">
                <div class="score-bar__fill" style=percent::fill_width(value)></div>
            </div>
        </div>
    }
}
