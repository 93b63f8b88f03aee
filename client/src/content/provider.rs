//! Provider boundary between screens and the data they do not own.
//!
//! DESIGN
//! ======
//! `ContentSource` is the contract an eventual backend would implement:
//! already-resolved, read-only lists in display order. `StaticContent`
//! implements it from the fixture tables, and `ContentState` is the resolved
//! bundle that `App` provides to the component tree via context. Fragments
//! stay agnostic to where the records came from.
//!
//! Navigation items and feature-card copy are UI-owned configuration, so
//! pages take those straight from `fixtures` instead of going through the
//! provider.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use super::fixtures;
use super::records::{
    GeneratedPitch, LiveSession, PartnerProfile, SessionReport, UploadRecord,
};

/// Read-only source of the record lists an external backend would own.
pub trait ContentSource {
    /// Partner directory entries in display order.
    fn partners(&self) -> Vec<PartnerProfile>;

    /// Recent pitch-deck uploads, newest first.
    fn recent_uploads(&self) -> Vec<UploadRecord>;

    /// The in-progress voice Q&A session.
    fn live_session(&self) -> LiveSession;

    /// The most recent completed-session report.
    fn session_report(&self) -> SessionReport;

    /// The last generator output for the pitch-prep screen.
    fn generated_pitch(&self) -> GeneratedPitch;
}

/// Fixture-backed [`ContentSource`] standing in for a real backend.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticContent;

impl ContentSource for StaticContent {
    fn partners(&self) -> Vec<PartnerProfile> {
        fixtures::partners()
    }

    fn recent_uploads(&self) -> Vec<UploadRecord> {
        fixtures::recent_uploads()
    }

    fn live_session(&self) -> LiveSession {
        LiveSession {
            investor: fixtures::investor(),
            transcript: fixtures::transcript(),
            analytics: fixtures::session_analytics(),
            suggestions: fixtures::suggestions(),
        }
    }

    fn session_report(&self) -> SessionReport {
        SessionReport {
            held_on: fixtures::report_held_on(),
            key_areas: fixtures::key_areas(),
            delivery: fixtures::delivery_metrics(),
            content: fixtures::content_metrics(),
            breakdown: fixtures::score_breakdown(),
            questions: fixtures::review_questions(),
        }
    }

    fn generated_pitch(&self) -> GeneratedPitch {
        fixtures::generated_pitch()
    }
}

/// Resolved content bundle provided to the component tree via context.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentState {
    pub partners: Vec<PartnerProfile>,
    pub uploads: Vec<UploadRecord>,
    pub live: LiveSession,
    pub report: SessionReport,
    pub pitch: GeneratedPitch,
}

impl ContentState {
    /// Resolve every table from the given source.
    pub fn from_source(source: &impl ContentSource) -> Self {
        Self {
            partners: source.partners(),
            uploads: source.recent_uploads(),
            live: source.live_session(),
            report: source.session_report(),
            pitch: source.generated_pitch(),
        }
    }
}

impl Default for ContentState {
    fn default() -> Self {
        Self::from_source(&StaticContent)
    }
}
