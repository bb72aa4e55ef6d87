//! View-only page state: the loaded record or the failure that replaced it.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use giftbook::model::CustomizationRecord;
use giftbook::share::ViewTarget;

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Parsed once from the query string at startup; `None` in edit mode.
    pub target: Option<ViewTarget>,
    pub record: Option<CustomizationRecord>,
    /// Human-readable load failure. Set exactly when the error page shows.
    pub error: Option<String>,
    pub loading: bool,
    /// Whether the book visual is open. Toggled by tapping the cover and
    /// set automatically shortly after the record loads.
    pub open: bool,
}

/// Greeting shown above the shared book. Blank sender names fall back to
/// "Someone".
#[must_use]
pub fn sender_heading(sender_name: &str) -> String {
    let sender = sender_name.trim();
    let sender = if sender.is_empty() { "Someone" } else { sender };
    format!("{sender} has sent you a book recommendation, tap to see what's inside!")
}
