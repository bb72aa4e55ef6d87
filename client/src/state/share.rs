//! Share-page state: the frozen preview, sender name, and link feedback.
//!
//! Opening the share page freezes a value-copy of the session (the preview)
//! so the projection cannot drift while the share flow runs. The copy-link
//! flow builds its record from this preview plus the sender input.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use giftbook::consts::DEFAULT_NOTE_FONT;
use giftbook::error::GiftError;
use giftbook::model::{BookRef, CustomizationRecord, StickerPlacement};
use giftbook::session::SessionState;

/// Value-copy of the session taken when the share page opens.
#[derive(Debug, Clone, PartialEq)]
pub struct SharePreview {
    pub book: Option<BookRef>,
    pub note: String,
    pub font: String,
    pub stickers: Vec<StickerPlacement>,
}

impl Default for SharePreview {
    fn default() -> Self {
        Self {
            book: None,
            note: String::new(),
            font: DEFAULT_NOTE_FONT.to_owned(),
            stickers: Vec::new(),
        }
    }
}

impl SharePreview {
    /// Freeze the current session into a preview.
    #[must_use]
    pub fn from_session(session: &SessionState) -> Self {
        Self {
            book: session.book().cloned(),
            note: session.note().content.clone(),
            font: session.note().font_family.clone(),
            stickers: session.placements(),
        }
    }

    /// Build the persistable record from the preview.
    ///
    /// # Errors
    ///
    /// Returns [`GiftError::NoBookSelected`] when the preview holds no book;
    /// the share flow must prompt and attempt no persistence.
    pub fn to_record(
        &self,
        sender_name: &str,
        timestamp: &str,
    ) -> Result<CustomizationRecord, GiftError> {
        let Some(book) = self.book.clone() else {
            return Err(GiftError::NoBookSelected);
        };
        Ok(CustomizationRecord {
            book,
            note: self.note.clone(),
            font: self.font.clone(),
            stickers: self.stickers.clone(),
            sender_name: sender_name.trim().to_owned(),
            timestamp: timestamp.to_owned(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ShareState {
    pub preview: SharePreview,
    /// Raw sender input; trimmed when the record is built.
    pub sender_name: String,
    /// The last successfully created link, shown under the copy button.
    pub link: Option<String>,
    /// True while the "Link copied!" tooltip is visible.
    pub tooltip_visible: bool,
    /// Precondition or failure message shown near the copy button.
    pub prompt: Option<String>,
    /// True while persistence is in flight; disables the copy button.
    pub saving: bool,
}

impl ShareState {
    /// Reset feedback when (re)entering the share page with a fresh preview.
    pub fn open_with(&mut self, preview: SharePreview) {
        self.preview = preview;
        self.link = None;
        self.tooltip_visible = false;
        self.prompt = None;
        self.saving = false;
    }
}
