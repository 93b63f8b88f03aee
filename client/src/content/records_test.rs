use super::*;

// =============================================================
// Optional-field fallbacks
// =============================================================

#[test]
fn chat_turn_without_avatar_deserializes_to_none() {
    let turn: ChatTurn = serde_json::from_value(serde_json::json!({
        "speaker": "You",
        "role": "Active",
        "message": "We have a tiered subscription model.",
        "speaking": true
    }))
    .expect("turn without avatar_url should deserialize");
    assert_eq!(turn.avatar_url, None);
    assert!(turn.speaking);
}

#[test]
fn feature_card_without_cta_deserializes_to_none() {
    let card: FeatureCard = serde_json::from_value(serde_json::json!({
        "title": "Discovery",
        "blurb": "Explore a wide range of VC partners.",
        "icon": "disc"
    }))
    .expect("card without cta should deserialize");
    assert_eq!(card.cta, None);
    assert_eq!(card.icon, FeatureIcon::Disc);
}

// =============================================================
// FeatureIcon wire names
// =============================================================

#[test]
fn feature_icon_serializes_lowercase() {
    let json = serde_json::to_value(FeatureIcon::Triangle).expect("serialize");
    assert_eq!(json, serde_json::json!("triangle"));
}
