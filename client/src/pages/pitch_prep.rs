//! Company pitch preparation screen: details form and generated pitch card.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::content::provider::ContentState;
use crate::util::percent;

const FORM_FIELDS: &[&str] = &[
    "Company Name",
    "Industry",
    "Target Customer",
    "Unique Value Proposition",
    "Key Message",
];

#[component]
pub fn PitchPrepPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    let pitch = move || content.get().pitch;

    view! {
        <AppShell>
            <h1 class="page-title">"Company Pitch Preparation"</h1>
            <p class="page-lede">
                "Prepare company details below to generate an AI-powered pitch that will \
                 impress investors."
            </p>

            <div class="pitch-prep">
                <form class="card pitch-prep__form">
                    <div class="card__title">"Company Details"</div>
                    {FORM_FIELDS
                        .iter()
                        .map(|&placeholder| {
                            view! { <input class="pitch-prep__input" placeholder=placeholder/> }
                        })
                        .collect::<Vec<_>>()}
                    <button class="btn btn--primary pitch-prep__generate" type="submit">
                        "Generate Pitch"
                    </button>
                </form>

                <div class="card pitch-prep__output">
                    <div class="card__title pitch-prep__output-title">
                        <svg viewBox="0 0 24 24" class="pitch-prep__output-icon" aria-hidden="true">
                            <rect x="4" y="4" width="16" height="16" rx="3"/>
                        </svg>
                        "AI-Generated Pitch"
                    </div>
                    <textarea
                        class="pitch-prep__body"
                        readonly=true
                        prop:value=move || pitch().body
                    ></textarea>
                    <div class="pitch-prep__output-row">
                        <button class="btn btn--outline pitch-prep__copy">
                            <svg viewBox="0 0 24 24" aria-hidden="true">
                                <path d="M8 12h8M12 8v8"/>
                            </svg>
                            "Copy"
                        </button>
                        <div class="pitch-prep__quality">
                            <span class="pitch-prep__quality-label">"Pitch Quality"</span>
                            <div class="pitch-prep__quality-track">
                                <div
                                    class="pitch-prep__quality-fill"
                                    style=move || percent::fill_width(pitch().quality)
                                ></div>
                            </div>
                            <span class="pitch-prep__quality-value">
                                {move || percent::label(pitch().quality)}
                            </span>
                        </div>
                    </div>
                </div>
            </div>

            <div class="pro-tip pitch-prep__tip">
                <div class="pro-tip__body">
                    <h5 class="pro-tip__title">"Pro Tip: Refine Your Pitch"</h5>
                    <p class="pro-tip__copy">
                        "For the best results, ensure your pitch details are concise, \
                         differentiated, and tailored to your target audience. Use the \
                         AI-generated pitch as a starting point, then personalize for maximum \
                         impact."
                    </p>
                </div>
                <input class="pro-tip__notes" placeholder="Add your own notes..."/>
            </div>
        </AppShell>
    }
}
