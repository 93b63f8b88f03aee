//! Literal content tables.
//!
//! DESIGN
//! ======
//! Every list a fragment projects lives here, one function per table, in the
//! order it renders. Nothing is computed; the copy is the product.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use super::records::{
    ChatTurn, FeatureCard, FeatureIcon, GeneratedPitch, InvestorProfile, NavItem, PartnerProfile,
    ReviewQuestion, ScoreMetric, UploadRecord,
};

const INVESTOR_AVATAR: &str = "https://randomuser.me/api/portraits/women/44.jpg";

/// The seven side-rail entries, identical on every chrome screen.
pub fn nav_items() -> Vec<NavItem> {
    [
        ("Sign Up", "👤"),
        ("Pitch Session", "🎤"),
        ("Analytics", "📊"),
        ("My Decks", "📁"),
        ("VC Network", "🌐"),
        ("Company Profile", "🏢"),
        ("Settings", "⚙️"),
    ]
    .into_iter()
    .map(|(label, icon)| NavItem { label: label.to_owned(), icon: icon.to_owned() })
    .collect()
}

/// Feature cards on the dashboard, each with a call-to-action line.
pub fn dashboard_features() -> Vec<FeatureCard> {
    vec![
        FeatureCard {
            title: "AI Investor Simulation".to_owned(),
            blurb: "Our AI simulates real investor questions based on your pitch deck content \
                    and delivery."
                .to_owned(),
            icon: FeatureIcon::Disc,
            cta: Some("Try voice Q&A →".to_owned()),
        },
        FeatureCard {
            title: "Performance Analytics".to_owned(),
            blurb: "Get detailed feedback on your pitch delivery, including pacing, clarity, \
                    and persuasiveness."
                .to_owned(),
            icon: FeatureIcon::Disc,
            cta: Some("View analytics →".to_owned()),
        },
        FeatureCard {
            title: "VC Personas".to_owned(),
            blurb: "Practice with different investor personas, from angel investors to VCs."
                .to_owned(),
            icon: FeatureIcon::Disc,
            cta: Some("Explore personas →".to_owned()),
        },
    ]
}

/// "How investor simulation works" cards on the partner directory.
pub fn partner_features() -> Vec<FeatureCard> {
    vec![
        FeatureCard {
            title: "Discovery".to_owned(),
            blurb: "Explore a wide range of VC partners, simulating their questioning styles, \
                    investing their specialties using AI investor personas."
                .to_owned(),
            icon: FeatureIcon::Disc,
            cta: None,
        },
        FeatureCard {
            title: "Industry Knowledge".to_owned(),
            blurb: "Understand what matters most to each investor, from SaaS metrics to \
                    healthcare innovation."
                .to_owned(),
            icon: FeatureIcon::Square,
            cta: None,
        },
        FeatureCard {
            title: "Personalized Simulation".to_owned(),
            blurb: "Practice your pitch with tailored feedback and simulated Q&A from your \
                    chosen VC persona."
                .to_owned(),
            icon: FeatureIcon::Triangle,
            cta: None,
        },
    ]
}

/// The six-entry partner directory, rendered in table order.
pub fn partners() -> Vec<PartnerProfile> {
    vec![
        PartnerProfile {
            name: "Sarah Chen".to_owned(),
            title: "Partner, Sequoia Capital".to_owned(),
            blurb: "Expert in SaaS, AI, and large-scale enterprise growth. Focused on \
                    early-stage investments."
                .to_owned(),
            avatar_url: INVESTOR_AVATAR.to_owned(),
            backdrop_url: "https://images.unsplash.com/photo-1464983953574-0892a716854b?auto=format&fit=crop&w=400&q=80".to_owned(),
        },
        PartnerProfile {
            name: "M.J. Williams".to_owned(),
            title: "Managing Partner, GrowthX".to_owned(),
            blurb: "Specializes in fintech and B2B SaaS. Known for hands-on mentorship and \
                    scaling startups."
                .to_owned(),
            avatar_url: "https://randomuser.me/api/portraits/men/32.jpg".to_owned(),
            backdrop_url: "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=400&q=80".to_owned(),
        },
        PartnerProfile {
            name: "Mai Lan".to_owned(),
            title: "Principal, Vertex Ventures".to_owned(),
            blurb: "Deep experience in healthtech and consumer apps. Passionate about impact \
                    investing."
                .to_owned(),
            avatar_url: "https://randomuser.me/api/portraits/women/65.jpg".to_owned(),
            backdrop_url: "https://images.unsplash.com/photo-1465101046530-73398c7f28ca?auto=format&fit=crop&w=400&q=80".to_owned(),
        },
        PartnerProfile {
            name: "Klaus Viktor".to_owned(),
            title: "Partner, Northzone".to_owned(),
            blurb: "Focus on marketplaces and logistics. Invests in high-growth European \
                    startups."
                .to_owned(),
            avatar_url: "https://randomuser.me/api/portraits/men/45.jpg".to_owned(),
            backdrop_url: "https://images.unsplash.com/photo-1465101178521-c1a9136a3b99?auto=format&fit=crop&w=400&q=80".to_owned(),
        },
        PartnerProfile {
            name: "Nia Lang".to_owned(),
            title: "Venture Partner, Lightspeed".to_owned(),
            blurb: "Expert in product-led growth and SaaS. Loves working with diverse founding \
                    teams."
                .to_owned(),
            avatar_url: "https://randomuser.me/api/portraits/women/68.jpg".to_owned(),
            backdrop_url: "https://images.unsplash.com/photo-1465101046530-73398c7f28ca?auto=format&fit=crop&w=400&q=80".to_owned(),
        },
        PartnerProfile {
            name: "Tej Patel".to_owned(),
            title: "General Partner, Accel".to_owned(),
            blurb: "Specializes in AI, cloud, and security. Invests in global scale-ups."
                .to_owned(),
            avatar_url: "https://randomuser.me/api/portraits/men/67.jpg".to_owned(),
            backdrop_url: "https://images.unsplash.com/photo-1464983953574-0892a716854b?auto=format&fit=crop&w=400&q=80".to_owned(),
        },
    ]
}

/// Recent uploads strip on the dashboard.
pub fn recent_uploads() -> Vec<UploadRecord> {
    [
        ("Test1_Pitch_v2.pdf", "Uploaded 1 min ago"),
        ("Investor_Deck_2023.ppt", "Uploaded 3 min ago"),
        ("Seed_Round_Pitch.ppt", "Uploaded 5 min ago"),
    ]
    .into_iter()
    .map(|(filename, uploaded)| UploadRecord {
        filename: filename.to_owned(),
        uploaded: uploaded.to_owned(),
    })
    .collect()
}

/// The AI investor persona for the voice Q&A screen.
pub fn investor() -> InvestorProfile {
    InvestorProfile {
        name: "Sarah Chen".to_owned(),
        title: "Partner at Sequoia Capital".to_owned(),
        bio: "Nigerian-born AI English questions and answers on startup growth, \
              product-market fit, and business models. Pitch decks since 2018."
            .to_owned(),
        avatar_url: INVESTOR_AVATAR.to_owned(),
        rating: 5,
    }
}

/// Fixed three-turn transcript for the voice Q&A screen.
pub fn transcript() -> Vec<ChatTurn> {
    vec![
        ChatTurn {
            speaker: "Sarah Chen".to_owned(),
            role: "Partner at Sequoia Capital".to_owned(),
            message: "Tell me about your revenue model. How do you plan to monetize your \
                      product?"
                .to_owned(),
            speaking: false,
            avatar_url: Some(INVESTOR_AVATAR.to_owned()),
        },
        ChatTurn {
            speaker: "You".to_owned(),
            role: "Active".to_owned(),
            message: "We have a tiered subscription model. Our freemium tier offers basic \
                      features, while our premium tiers are $29 and $99 per month, providing \
                      advanced analytics and priority support. We also offer volume discounts \
                      for enterprise customers."
                .to_owned(),
            speaking: true,
            avatar_url: None,
        },
        ChatTurn {
            speaker: "Sarah Chen".to_owned(),
            role: "Partner at Sequoia Capital".to_owned(),
            message: "That's interesting. What is your estimated acquisition cost, and how \
                      does that compare to your lifetime value?"
                .to_owned(),
            speaking: false,
            avatar_url: Some(INVESTOR_AVATAR.to_owned()),
        },
    ]
}

/// Live-session analytics bars.
pub fn session_analytics() -> Vec<ScoreMetric> {
    metric_table(&[("Response Quality", 81), ("Confidence Level", 74), ("Data Accuracy", 92)])
}

/// Suggested responses shown next to the live session.
pub fn suggestions() -> Vec<String> {
    vec![
        "When planning an expanded digital marketing strategy, consider aligning spend with \
         acquisition cost and expected LTV. Highlight your unique value proposition and \
         traction."
            .to_owned(),
        "Our gross margin includes recurring software revenue and professional services. \
         Investors often look for >70% in SaaS businesses."
            .to_owned(),
        "\u{201c}We\u{2019}re focusing on scaling CAC through community-building and channel \
         partnerships. Explore more suggestions below.\u{201d}"
            .to_owned(),
    ]
}

/// Session date line on the review screen.
pub fn report_held_on() -> String {
    "Monday, May 13, 2024 \u{2022} 12:45 PM".to_owned()
}

/// "Key Areas for Improvement" bars.
pub fn key_areas() -> Vec<ScoreMetric> {
    metric_table(&[
        ("Response Quality", 78),
        ("Content Clarity", 64),
        ("Engagement", 82),
        ("Organization", 56),
    ])
}

/// Delivery-analysis bars.
pub fn delivery_metrics() -> Vec<ScoreMetric> {
    metric_table(&[("Pace", 72), ("Filler Words", 18), ("Voice Modulation", 85)])
}

/// Content-analysis bars.
pub fn content_metrics() -> Vec<ScoreMetric> {
    metric_table(&[("Market Positioning", 80), ("Value Proposition", 70), ("Storytelling", 65)])
}

/// Final score breakdown in the feedback summary.
pub fn score_breakdown() -> Vec<ScoreMetric> {
    metric_table(&[("Overall", 82), ("Delivery", 76), ("Content", 88)])
}

/// Q&A recap entries on the review screen.
pub fn review_questions() -> Vec<ReviewQuestion> {
    (0..4)
        .map(|_| ReviewQuestion {
            prompt: "Explain your biggest market need and why they need your solution."
                .to_owned(),
            response: "Our solution addresses a significant gap in the market by providing..."
                .to_owned(),
        })
        .collect()
}

/// Canned generator output on the pitch-prep screen.
pub fn generated_pitch() -> GeneratedPitch {
    GeneratedPitch {
        body: "PitchBot Solutions is redefining the investment process...".to_owned(),
        quality: 80,
    }
}

fn metric_table(entries: &[(&str, u8)]) -> Vec<ScoreMetric> {
    entries
        .iter()
        .map(|&(label, value)| ScoreMetric { label: label.to_owned(), value })
        .collect()
}
