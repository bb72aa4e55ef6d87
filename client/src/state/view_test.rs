use super::*;

// ============================================================================
// Greeting
// ============================================================================

#[test]
fn heading_names_the_sender() {
    assert_eq!(
        sender_heading("Alice"),
        "Alice has sent you a book recommendation, tap to see what's inside!"
    );
}

#[test]
fn blank_sender_falls_back_to_someone() {
    assert_eq!(
        sender_heading(""),
        "Someone has sent you a book recommendation, tap to see what's inside!"
    );
    assert_eq!(
        sender_heading("   "),
        "Someone has sent you a book recommendation, tap to see what's inside!"
    );
}

// ============================================================================
// Defaults
// ============================================================================

#[test]
fn default_state_is_closed_and_unloaded() {
    let state = ViewState::default();
    assert!(state.target.is_none());
    assert!(state.record.is_none());
    assert!(state.error.is_none());
    assert!(!state.loading);
    assert!(!state.open);
}
