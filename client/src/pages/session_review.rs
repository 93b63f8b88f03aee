//! Session review screen: score summaries, trend charts, the Q&A recap,
//! and the final feedback breakdown.

use leptos::prelude::*;

use crate::components::app_shell::AppShell;
use crate::components::score_bar::ScoreBar;
use crate::content::provider::ContentState;
use crate::content::records::ScoreMetric;

const SUMMARY_PIES: &[&str] = &["Overall Performance", "Response Quality", "Clarity Score"];

const FEEDBACK_NOTES: &[(FeedbackIcon, &str, &str)] = &[
    (
        FeedbackIcon::Disc,
        "Strengths",
        "Strong market understanding, clear value proposition, and effective use of visuals \
         for trend illustration.",
    ),
    (
        FeedbackIcon::Triangle,
        "Opportunities",
        "Could improve storytelling and engagement, especially when explaining complex data.",
    ),
    (
        FeedbackIcon::Square,
        "Areas to Improve",
        "Work on pacing and clarity, and reduce filler words during transitions.",
    ),
];

#[derive(Clone, Copy)]
enum FeedbackIcon {
    Disc,
    Triangle,
    Square,
}

#[component]
pub fn SessionReviewPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    view! {
        <AppShell>
            <div class="session-review">
                <div class="session-review__header">
                    <div>
                        <h1 class="page-title">"Pitch Session Review"</h1>
                        <div class="session-review__date">
                            {move || content.get().report.held_on}
                        </div>
                    </div>
                    <div class="session-review__header-actions">
                        <button class="btn">"Download Report"</button>
                        <button class="btn btn--primary">"Share"</button>
                    </div>
                </div>

                <div class="session-review__pies">
                    {SUMMARY_PIES.iter().map(|&label| render_pie_card(label)).collect::<Vec<_>>()}
                </div>

                <div class="session-review__row">
                    <div class="card session-review__trends">
                        <div class="card__title">"Performance Trends"</div>
                        <svg viewBox="0 0 400 60" class="session-review__trend-chart" aria-hidden="true">
                            <rect x="0" y="0" width="400" height="60" fill="#232323"/>
                            <polyline
                                points="0,50 40,40 80,35 120,30 160,25 200,20 240,25 280,30 320,35 360,40 400,45"
                                fill="none"
                                stroke="#ff9900"
                                stroke-width="4"
                            />
                        </svg>
                    </div>
                    <div class="card session-review__key-areas">
                        <div class="card__title">"Key Areas for Improvement"</div>
                        {metric_bars(move || content.get().report.key_areas)}
                    </div>
                </div>

                <div class="card session-review__questions">
                    <div class="card__title">"All Questions & Your Responses"</div>
                    {move || {
                        content
                            .get()
                            .report
                            .questions
                            .into_iter()
                            .enumerate()
                            .map(|(i, question)| {
                                view! {
                                    <div class="review-question">
                                        <div class="review-question__number">
                                            {format!("Question {}:", i + 1)}
                                        </div>
                                        <div class="review-question__prompt">{question.prompt}</div>
                                        <div class="review-question__response">
                                            {question.response}
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>

                <div class="session-review__row">
                    <div class="card session-review__analysis">
                        <div class="card__title">"Delivery Analysis"</div>
                        {metric_bars(move || content.get().report.delivery)}
                        <svg viewBox="0 0 400 40" class="session-review__sparkline" aria-hidden="true">
                            <rect x="0" y="0" width="400" height="40" fill="#232323"/>
                            <polyline
                                points="0,30 40,28 80,25 120,20 160,18 200,15 240,18 280,20 320,25 360,28 400,30"
                                fill="none"
                                stroke="#ff9900"
                                stroke-width="3"
                            />
                        </svg>
                    </div>
                    <div class="card session-review__analysis">
                        <div class="card__title">"Content Analysis"</div>
                        {metric_bars(move || content.get().report.content)}
                        <svg viewBox="0 0 400 40" class="session-review__sparkline" aria-hidden="true">
                            <rect x="0" y="0" width="400" height="40" fill="#232323"/>
                            <polyline
                                points="0,30 40,28 80,25 120,20 160,18 200,15 240,18 280,20 320,25 360,28 400,30"
                                fill="none"
                                stroke="#26e67c"
                                stroke-width="3"
                            />
                        </svg>
                    </div>
                </div>

                <div class="session-review__cta">
                    <div class="session-review__cta-copy">"Ready to improve your pitch?"</div>
                    <button class="session-review__cta-btn">"Get Feedback"</button>
                </div>

                <div class="card session-review__summary">
                    <div class="card__title">"All Feedback Summary"</div>
                    <div class="session-review__summary-cols">
                        <div class="session-review__notes">
                            {FEEDBACK_NOTES
                                .iter()
                                .map(|&(icon, title, copy)| {
                                    view! {
                                        <div class="feedback-note">
                                            <div class="feedback-note__head">
                                                {render_feedback_icon(icon)}
                                                <span class="feedback-note__title">{title}</span>
                                            </div>
                                            <div class="feedback-note__copy">{copy}</div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <div class="session-review__breakdown">
                            <div class="card__title">"Score Breakdown"</div>
                            {metric_bars(move || content.get().report.breakdown)}
                        </div>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}

/// Project a metric list into score bars, preserving input order.
fn metric_bars(
    metrics: impl Fn() -> Vec<ScoreMetric> + Clone + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <div class="metric-bars">
            {move || {
                metrics()
                    .into_iter()
                    .map(|metric| view! { <ScoreBar label=metric.label value=metric.value/> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

fn render_pie_card(label: &'static str) -> impl IntoView {
    view! {
        <div class="card pie-card">
            <div class="pie-card__label">{label}</div>
            <svg viewBox="0 0 100 100" class="pie-card__chart" aria-hidden="true">
                <circle cx="50" cy="50" r="40" fill="#232323"/>
                <path d="M50 50 L50 10 A40 40 0 0 1 90 50 Z" fill="#ff9900"/>
                <path d="M50 50 L90 50 A40 40 0 1 1 50 10 Z" fill="#26e67c"/>
                <path d="M50 50 L50 90 A40 40 0 0 1 10 50 Z" fill="#fff" fill-opacity="0.2"/>
            </svg>
            <div class="pie-card__legend">
                <span class="pie-card__legend-pitch">"Pitch"</span>
                <span class="pie-card__legend-qa">"Q&A"</span>
                <span class="pie-card__legend-other">"Other"</span>
            </div>
        </div>
    }
}

fn render_feedback_icon(icon: FeedbackIcon) -> impl IntoView {
    match icon {
        FeedbackIcon::Disc => view! {
            <svg viewBox="0 0 24 24" class="feedback-note__icon" aria-hidden="true">
                <circle cx="12" cy="12" r="10"/>
            </svg>
        }
        .into_any(),
        FeedbackIcon::Triangle => view! {
            <svg viewBox="0 0 24 24" class="feedback-note__icon" aria-hidden="true">
                <polygon points="12,2 22,22 2,22"/>
            </svg>
        }
        .into_any(),
        FeedbackIcon::Square => view! {
            <svg viewBox="0 0 24 24" class="feedback-note__icon" aria-hidden="true">
                <rect x="4" y="4" width="16" height="16" rx="3"/>
            </svg>
        }
        .into_any(),
    }
}
