//! Fixed-width side rail: brand mark, navigation list, session promo.

use leptos::prelude::*;

use crate::content::records::NavItem;

/// Side rail with one entry per nav item, in input order.
#[component]
pub fn NavRail(items: Vec<NavItem>) -> impl IntoView {
    view! {
        <aside class="nav-rail">
            <div class="nav-rail__brand">
                <svg class="nav-rail__brand-mark" viewBox="0 0 24 24" aria-hidden="true">
                    <circle cx="12" cy="12" r="10"/>
                </svg>
                <span class="nav-rail__brand-name">
                    "PitchDeck AI"
                    <br/>
                    <span class="nav-rail__brand-sub">"Flow"</span>
                </span>
            </div>
            <nav class="nav-rail__nav">
                <ul class="nav-rail__list">
                    {items
                        .into_iter()
                        .map(|item| {
                            view! {
                                <li class="nav-rail__item">
                                    <span class="nav-rail__icon">{item.icon}</span>
                                    <span>{item.label}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </nav>
            <div class="nav-rail__promo">
                <div class="nav-rail__promo-kicker">"Upcoming"</div>
                <div class="nav-rail__promo-copy">
                    "Your scheduled pitch practice with 'NextGen VC' is in 2 hours."
                </div>
                <button class="btn btn--primary nav-rail__promo-action">"Prepare Now"</button>
            </div>
        </aside>
    }
}
