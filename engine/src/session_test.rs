use super::*;

const SURFACE: Size = Size { width: 300.0, height: 450.0 };
const STICKER: Size = Size { width: 60.0, height: 60.0 };

fn book() -> BookRef {
    BookRef {
        id: "vol1".to_owned(),
        title: "The Hobbit".to_owned(),
        author: "J. R. R. Tolkien".to_owned(),
        cover_url: "https://covers.example/hobbit.jpg".to_owned(),
    }
}

// =============================================================
// Defaults and book selection
// =============================================================

#[test]
fn new_session_is_blank() {
    let session = SessionState::new();
    assert!(session.book().is_none());
    assert!(session.note().content.is_empty());
    assert!(session.stickers().is_empty());
}

#[test]
fn select_book_commits_current_selection() {
    let mut session = SessionState::new();
    session.select_book(book());
    assert_eq!(session.book().map(|b| b.id.as_str()), Some("vol1"));
}

#[test]
fn selecting_again_replaces_the_book() {
    let mut session = SessionState::new();
    session.select_book(book());
    let mut other = book();
    other.id = "vol2".to_owned();
    session.select_book(other);
    assert_eq!(session.book().map(|b| b.id.as_str()), Some("vol2"));
}

// =============================================================
// Note
// =============================================================

#[test]
fn note_content_and_font_are_mutable() {
    let mut session = SessionState::new();
    session.set_note_content("for you\nwith love");
    session.set_note_font("Dancing Script");
    assert_eq!(session.note().content, "for you\nwith love");
    assert_eq!(session.note().font_family, "Dancing Script");
}

// =============================================================
// Stickers
// =============================================================

#[test]
fn add_sticker_centers_it_with_default_size() {
    let mut session = SessionState::new();
    let id = session.add_sticker("🎁", SURFACE, STICKER);
    let placed = session.sticker(id).unwrap();
    assert_eq!(placed.placement.left, 120.0);
    assert_eq!(placed.placement.top, 195.0);
    assert_eq!(placed.placement.font_size, 40.0);
    assert_eq!(placed.placement.emoji, "🎁");
}

#[test]
fn stickers_keep_insertion_order() {
    let mut session = SessionState::new();
    session.add_sticker("❤️", SURFACE, STICKER);
    session.add_sticker("⭐", SURFACE, STICKER);
    session.add_sticker("🎉", SURFACE, STICKER);
    let emojis: Vec<&str> =
        session.stickers().iter().map(|s| s.placement.emoji.as_str()).collect();
    assert_eq!(emojis, vec!["❤️", "⭐", "🎉"]);
}

#[test]
fn duplicate_emojis_get_distinct_handles() {
    let mut session = SessionState::new();
    let a = session.add_sticker("⭐", SURFACE, STICKER);
    let b = session.add_sticker("⭐", SURFACE, STICKER);
    assert_ne!(a, b);
}

#[test]
fn move_and_resize_persist_into_placement() {
    let mut session = SessionState::new();
    let id = session.add_sticker("⭐", SURFACE, STICKER);
    assert!(session.move_sticker(id, 10.0, 20.0));
    assert!(session.resize_sticker(id, 55.0));
    let placed = session.sticker(id).unwrap();
    assert_eq!(placed.placement.left, 10.0);
    assert_eq!(placed.placement.top, 20.0);
    assert_eq!(placed.placement.font_size, 55.0);
}

#[test]
fn move_unknown_handle_is_rejected() {
    let mut session = SessionState::new();
    assert!(!session.move_sticker(uuid::Uuid::new_v4(), 1.0, 2.0));
    assert!(!session.resize_sticker(uuid::Uuid::new_v4(), 30.0));
}

#[test]
fn remove_sticker_is_idempotent() {
    let mut session = SessionState::new();
    let id = session.add_sticker("⭐", SURFACE, STICKER);
    assert!(session.remove_sticker(id));
    assert!(!session.remove_sticker(id));
    assert!(session.stickers().is_empty());
}

#[test]
fn remove_only_touches_the_named_sticker() {
    let mut session = SessionState::new();
    let a = session.add_sticker("⭐", SURFACE, STICKER);
    let b = session.add_sticker("⭐", SURFACE, STICKER);
    session.remove_sticker(a);
    assert!(session.sticker(b).is_some());
    assert_eq!(session.stickers().len(), 1);
}

#[test]
fn placements_are_value_copies_without_handles() {
    let mut session = SessionState::new();
    let id = session.add_sticker("⭐", SURFACE, STICKER);
    let mut placements = session.placements();
    placements[0].left = 999.0;
    // Mutating the copy must not affect the live sticker.
    assert_eq!(session.sticker(id).unwrap().placement.left, 120.0);
}

// =============================================================
// clear / snapshot
// =============================================================

#[test]
fn clear_resets_everything() {
    let mut session = SessionState::new();
    session.select_book(book());
    session.set_note_content("hello");
    session.set_note_font("Pacifico");
    session.add_sticker("⭐", SURFACE, STICKER);
    session.clear();
    assert!(session.book().is_none());
    assert!(session.note().content.is_empty());
    assert_eq!(session.note().font_family, "Caveat");
    assert!(session.stickers().is_empty());
}

#[test]
fn snapshot_without_book_fails_precondition() {
    let session = SessionState::new();
    assert_eq!(
        session.snapshot("Ana", "2025-06-01T00:00:00Z"),
        Err(GiftError::NoBookSelected)
    );
}

#[test]
fn snapshot_captures_full_customization() {
    let mut session = SessionState::new();
    session.select_book(book());
    session.set_note_content("enjoy!");
    session.set_note_font("Caveat");
    let id = session.add_sticker("🎉", SURFACE, STICKER);
    session.move_sticker(id, 5.0, 6.0);

    let record = session.snapshot("  Ana  ", "2025-06-01T00:00:00Z").unwrap();
    assert_eq!(record.book.id, "vol1");
    assert_eq!(record.note, "enjoy!");
    assert_eq!(record.font, "Caveat");
    assert_eq!(record.sender_name, "Ana");
    assert_eq!(record.timestamp, "2025-06-01T00:00:00Z");
    assert_eq!(record.stickers.len(), 1);
    assert_eq!(record.stickers[0].left, 5.0);
}

#[test]
fn snapshot_round_trips_identically_through_json() {
    let mut session = SessionState::new();
    session.select_book(book());
    session.set_note_content("line one\n  spaced  line");
    session.add_sticker("⭐", SURFACE, STICKER);
    session.add_sticker("❤️", SURFACE, STICKER);

    let record = session.snapshot("Ana", "2025-06-01T00:00:00Z").unwrap();
    let json = serde_json::to_string(&record).unwrap();
    let back: crate::model::CustomizationRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
    assert_eq!(back.stickers, session.placements());
}
