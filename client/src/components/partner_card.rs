//! Directory card for a single VC partner.

use leptos::prelude::*;

use crate::content::records::PartnerProfile;

/// Backdrop image, avatar, identity lines, and blurb for one partner.
#[component]
pub fn PartnerCard(profile: PartnerProfile) -> impl IntoView {
    let backdrop = format!("background-image:url({})", profile.backdrop_url);
    let alt = profile.name.clone();

    view! {
        <div class="partner-card">
            <div class="partner-card__backdrop" style=backdrop></div>
            <div class="partner-card__header">
                <img class="partner-card__avatar" src=profile.avatar_url alt=alt/>
                <div class="partner-card__who">
                    <div class="partner-card__name">{profile.name}</div>
                    <div class="partner-card__title">{profile.title}</div>
                </div>
            </div>
            <div class="partner-card__body">
                <p class="partner-card__blurb">{profile.blurb}</p>
                <button class="partner-card__link">"Page >"</button>
            </div>
        </div>
    }
}
