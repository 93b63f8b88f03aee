//! Landing-screen sign-up card.
//!
//! The form is presentational: fields and buttons render but nothing is
//! wired to input handling or submission.

use leptos::prelude::*;

#[derive(Clone, Copy)]
struct FieldDef {
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    helper: Option<&'static str>,
}

const FIELDS: &[FieldDef] = &[
    FieldDef {
        label: "Full Name",
        kind: "text",
        placeholder: "Enter your full name",
        helper: None,
    },
    FieldDef {
        label: "Email Address",
        kind: "email",
        placeholder: "Enter your email",
        helper: None,
    },
    FieldDef {
        label: "Password",
        kind: "password",
        placeholder: "Create a password",
        helper: Some("Must be at least 8 characters with 1 number and 1 special character"),
    },
];

/// Sign-up half of the landing screen.
#[component]
pub fn SignUpPanel() -> impl IntoView {
    view! {
        <div class="signup-panel">
            <div class="signup-panel__brand">
                <svg class="signup-panel__brand-mark" viewBox="0 0 24 24" aria-hidden="true">
                    <circle cx="12" cy="12" r="10"/>
                </svg>
                <span class="signup-panel__brand-name">
                    "PitchDeck AI"
                    <br/>
                    <span class="signup-panel__brand-sub">"Flow"</span>
                </span>
            </div>
            <h2 class="signup-panel__title">"Create your account"</h2>
            <p class="signup-panel__subtitle">
                "Join thousands of professionals improving their pitch skills"
            </p>
            <form class="signup-panel__form">
                {FIELDS
                    .iter()
                    .map(|field| {
                        view! {
                            <div class="signup-panel__field">
                                <label class="signup-panel__label">{field.label}</label>
                                <input
                                    class="signup-panel__input"
                                    type=field.kind
                                    placeholder=field.placeholder
                                />
                                {field
                                    .helper
                                    .map(|helper| {
                                        view! {
                                            <span class="signup-panel__helper">{helper}</span>
                                        }
                                    })}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
                <div class="signup-panel__terms">
                    <input type="checkbox"/>
                    <span>
                        "I agree to the "
                        <span class="signup-panel__terms-link">"Terms of Service"</span>
                        " and "
                        <span class="signup-panel__terms-link">"Privacy Policy"</span>
                    </span>
                </div>
                <button class="btn btn--primary signup-panel__submit" type="submit">
                    "Create Account"
                </button>
            </form>
            <div class="signup-panel__divider">
                <hr/>
                <span>"or continue with"</span>
                <hr/>
            </div>
            <div class="signup-panel__oauth">
                <button class="btn btn--outline signup-panel__oauth-btn">"Google"</button>
                <button class="btn btn--outline signup-panel__oauth-btn">"LinkedIn"</button>
            </div>
            <div class="signup-panel__signin">
                "Already have an account? "
                <a class="signup-panel__signin-link" href="#">"Sign in"</a>
            </div>
        </div>
    }
}
