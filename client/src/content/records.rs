//! Display record shapes shared by every screen.
//!
//! These mirror what an eventual backend would serve, so they are kept
//! serde-compatible even though the current tables are fixtures.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

/// A side-rail navigation entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NavItem {
    pub label: String,
    /// Single-glyph icon rendered before the label.
    pub icon: String,
}

/// A VC partner directory entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PartnerProfile {
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub avatar_url: String,
    pub backdrop_url: String,
}

/// Icon variants used by feature cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureIcon {
    Disc,
    Square,
    Triangle,
}

/// A product feature blurb with an optional call-to-action line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeatureCard {
    pub title: String,
    pub blurb: String,
    pub icon: FeatureIcon,
    #[serde(default)]
    pub cta: Option<String>,
}

/// A labeled percentage that drives a proportional bar fill.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScoreMetric {
    pub label: String,
    /// Expected in `0..=100`; out-of-range values are clamped at render time.
    pub value: u8,
}

/// A recent pitch-deck upload entry.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UploadRecord {
    pub filename: String,
    /// Relative timestamp text, e.g. "Uploaded 1 min ago".
    pub uploaded: String,
}

/// One turn of the voice Q&A transcript.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChatTurn {
    pub speaker: String,
    pub role: String,
    pub message: String,
    /// Whether the speaking indicator is shown next to the message.
    pub speaking: bool,
    /// Portrait URL; turns without one render an initial-letter avatar.
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// The AI investor persona shown alongside a live session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InvestorProfile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar_url: String,
    /// Star rating out of five.
    pub rating: u8,
}

/// A question asked during a session together with the given response.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReviewQuestion {
    pub prompt: String,
    pub response: String,
}

/// Output of the pitch generator with its quality estimate.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedPitch {
    pub body: String,
    pub quality: u8,
}

/// Everything the voice Q&A screen renders.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LiveSession {
    pub investor: InvestorProfile,
    pub transcript: Vec<ChatTurn>,
    pub analytics: Vec<ScoreMetric>,
    pub suggestions: Vec<String>,
}

/// Everything the session-review screen renders.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SessionReport {
    /// Human-readable session date line.
    pub held_on: String,
    pub key_areas: Vec<ScoreMetric>,
    pub delivery: Vec<ScoreMetric>,
    pub content: Vec<ScoreMetric>,
    pub breakdown: Vec<ScoreMetric>,
    pub questions: Vec<ReviewQuestion>,
}
