use super::*;
use crate::content::records::{InvestorProfile, LiveSession, SessionReport};

/// Source with nothing to show; fragments projected from it must render
/// zero repeated blocks.
struct EmptySource;

impl ContentSource for EmptySource {
    fn partners(&self) -> Vec<PartnerProfile> {
        Vec::new()
    }

    fn recent_uploads(&self) -> Vec<UploadRecord> {
        Vec::new()
    }

    fn live_session(&self) -> LiveSession {
        LiveSession {
            investor: InvestorProfile {
                name: String::new(),
                title: String::new(),
                bio: String::new(),
                avatar_url: String::new(),
                rating: 0,
            },
            transcript: Vec::new(),
            analytics: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    fn session_report(&self) -> SessionReport {
        SessionReport {
            held_on: String::new(),
            key_areas: Vec::new(),
            delivery: Vec::new(),
            content: Vec::new(),
            breakdown: Vec::new(),
            questions: Vec::new(),
        }
    }

    fn generated_pitch(&self) -> GeneratedPitch {
        GeneratedPitch { body: String::new(), quality: 0 }
    }
}

// =============================================================
// StaticContent
// =============================================================

#[test]
fn static_source_resolves_every_table() {
    let state = ContentState::from_source(&StaticContent);
    assert_eq!(state.partners.len(), 6);
    assert_eq!(state.uploads.len(), 3);
    assert_eq!(state.live.transcript.len(), 3);
    assert_eq!(state.report.questions.len(), 4);
    assert!(!state.pitch.body.is_empty());
}

#[test]
fn default_state_is_the_static_source() {
    assert_eq!(ContentState::default(), ContentState::from_source(&StaticContent));
}

#[test]
fn static_source_preserves_fixture_order() {
    let state = ContentState::from_source(&StaticContent);
    assert_eq!(state.partners[0].name, "Sarah Chen");
    assert_eq!(state.partners[5].name, "Tej Patel");
    assert_eq!(state.report.breakdown[0].label, "Overall");
}

// =============================================================
// Empty source baseline
// =============================================================

#[test]
fn empty_source_yields_empty_tables() {
    let state = ContentState::from_source(&EmptySource);
    assert!(state.partners.is_empty());
    assert!(state.uploads.is_empty());
    assert!(state.live.transcript.is_empty());
    assert!(state.live.analytics.is_empty());
    assert!(state.report.key_areas.is_empty());
}
