use super::*;

fn sample_book() -> BookRef {
    BookRef {
        id: "abc123".to_owned(),
        title: "Dune".to_owned(),
        author: "Frank Herbert".to_owned(),
        cover_url: "https://covers.example/dune.jpg".to_owned(),
    }
}

fn sample_record() -> CustomizationRecord {
    CustomizationRecord {
        book: sample_book(),
        note: "happy birthday!\n\nlove,  me".to_owned(),
        font: "Caveat".to_owned(),
        stickers: vec![
            StickerPlacement { emoji: "🎉".to_owned(), left: 12.0, top: 34.0, font_size: 40.0 },
            StickerPlacement { emoji: "🎉".to_owned(), left: 56.0, top: 78.0, font_size: 21.5 },
        ],
        sender_name: "Ana".to_owned(),
        timestamp: "2025-06-01T12:00:00.000Z".to_owned(),
    }
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn book_ref_serializes_with_camel_case_cover_url() {
    let json = serde_json::to_value(sample_book()).unwrap();
    assert_eq!(json["coverUrl"], "https://covers.example/dune.jpg");
    assert!(json.get("cover_url").is_none());
}

#[test]
fn sticker_placement_serializes_with_camel_case_font_size() {
    let placement =
        StickerPlacement { emoji: "⭐".to_owned(), left: 1.0, top: 2.0, font_size: 33.0 };
    let json = serde_json::to_value(placement).unwrap();
    assert_eq!(json["fontSize"], 33.0);
    assert_eq!(json["emoji"], "⭐");
    assert!(json.get("font_size").is_none());
}

#[test]
fn record_serializes_with_camel_case_sender_name() {
    let json = serde_json::to_value(sample_record()).unwrap();
    assert_eq!(json["senderName"], "Ana");
    assert_eq!(json["font"], "Caveat");
    assert!(json.get("sender_name").is_none());
}

#[test]
fn record_round_trips_through_json() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();
    let back: CustomizationRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn record_round_trip_preserves_sticker_order() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();
    let back: CustomizationRecord = serde_json::from_str(&json).unwrap();
    let lefts: Vec<f64> = back.stickers.iter().map(|s| s.left).collect();
    assert_eq!(lefts, vec![12.0, 56.0]);
}

#[test]
fn record_round_trip_preserves_note_whitespace() {
    let record = sample_record();
    let json = serde_json::to_string(&record).unwrap();
    let back: CustomizationRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back.note, "happy birthday!\n\nlove,  me");
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn note_state_default_is_empty_caveat() {
    let note = NoteState::default();
    assert!(note.content.is_empty());
    assert_eq!(note.font_family, "Caveat");
}

#[test]
fn session_mode_default_is_editable() {
    assert_eq!(SessionMode::default(), SessionMode::Editable);
}

#[test]
fn session_mode_variants_are_distinct() {
    assert_ne!(SessionMode::Editable, SessionMode::ViewOnly);
}
