use super::*;

// =============================================================
// Navigation
// =============================================================

#[test]
fn nav_has_seven_entries_in_rail_order() {
    let items = nav_items();
    let labels: Vec<&str> = items.iter().map(|item| item.label.as_str()).collect();
    assert_eq!(
        labels,
        [
            "Sign Up",
            "Pitch Session",
            "Analytics",
            "My Decks",
            "VC Network",
            "Company Profile",
            "Settings",
        ]
    );
}

#[test]
fn nav_entries_all_carry_a_glyph() {
    assert!(nav_items().iter().all(|item| !item.icon.is_empty()));
}

// =============================================================
// Partner directory
// =============================================================

#[test]
fn partner_table_has_six_entries_in_table_order() {
    let names: Vec<String> = partners().into_iter().map(|p| p.name).collect();
    assert_eq!(
        names,
        ["Sarah Chen", "M.J. Williams", "Mai Lan", "Klaus Viktor", "Nia Lang", "Tej Patel"]
    );
}

#[test]
fn partner_entries_are_fully_populated() {
    for partner in partners() {
        assert!(!partner.title.is_empty(), "{} missing title", partner.name);
        assert!(!partner.blurb.is_empty(), "{} missing blurb", partner.name);
        assert!(partner.avatar_url.starts_with("https://"));
        assert!(partner.backdrop_url.starts_with("https://"));
    }
}

// =============================================================
// Metric tables
// =============================================================

#[test]
fn score_breakdown_matches_review_screen() {
    let breakdown = score_breakdown();
    let pairs: Vec<(&str, u8)> =
        breakdown.iter().map(|m| (m.label.as_str(), m.value)).collect();
    assert_eq!(pairs, [("Overall", 82), ("Delivery", 76), ("Content", 88)]);
}

#[test]
fn all_metric_tables_stay_in_bar_range() {
    let tables = [
        session_analytics(),
        key_areas(),
        delivery_metrics(),
        content_metrics(),
        score_breakdown(),
    ];
    for metric in tables.iter().flatten() {
        assert!(metric.value <= 100, "{} out of range: {}", metric.label, metric.value);
    }
}

#[test]
fn key_areas_preserve_input_order() {
    let labels: Vec<String> = key_areas().into_iter().map(|m| m.label).collect();
    assert_eq!(labels, ["Response Quality", "Content Clarity", "Engagement", "Organization"]);
}

// =============================================================
// Transcript and uploads
// =============================================================

#[test]
fn transcript_has_one_speaking_turn() {
    let turns = transcript();
    assert_eq!(turns.len(), 3);
    assert_eq!(turns.iter().filter(|turn| turn.speaking).count(), 1);
    assert!(turns[1].speaking, "the user's reply is the speaking turn");
    assert_eq!(turns[1].avatar_url, None);
}

#[test]
fn recent_uploads_list_newest_first() {
    let uploads = recent_uploads();
    assert_eq!(uploads.len(), 3);
    assert_eq!(uploads[0].filename, "Test1_Pitch_v2.pdf");
    assert_eq!(uploads[0].uploaded, "Uploaded 1 min ago");
}

// =============================================================
// Feature cards
// =============================================================

#[test]
fn dashboard_features_all_carry_a_cta() {
    let features = dashboard_features();
    assert_eq!(features.len(), 3);
    assert!(features.iter().all(|card| card.cta.is_some()));
}

#[test]
fn partner_features_have_no_cta() {
    let features = partner_features();
    assert_eq!(features.len(), 3);
    assert!(features.iter().all(|card| card.cta.is_none()));
}

// =============================================================
// Pitch generator output
// =============================================================

#[test]
fn generated_pitch_quality_is_eighty_percent() {
    let pitch = generated_pitch();
    assert_eq!(pitch.quality, 80);
    assert!(!pitch.body.is_empty());
}
