//! Shared two-region chrome wrapped around every non-landing screen.
//!
//! ARCHITECTURE
//! ============
//! The shell is pure structural composition: a fixed side rail, a top bar,
//! and a slot for the screen's own content fragment. Screens differ only in
//! what they put in the slot.

use leptos::prelude::*;

use crate::components::nav_rail::NavRail;
use crate::components::top_bar::TopBar;
use crate::content::fixtures;
use crate::content::records::NavItem;

/// Application chrome: side rail + top bar around a content slot.
#[component]
pub fn AppShell(
    /// Side-rail entries; defaults to the standard seven-item set.
    #[prop(default = fixtures::nav_items())]
    nav: Vec<NavItem>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-shell">
            <NavRail items=nav/>
            <div class="app-shell__main">
                <TopBar/>
                <section class="app-shell__content">{children()}</section>
            </div>
        </div>
    }
}
