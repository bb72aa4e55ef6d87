//! In-memory session state owning the live customization.
//!
//! One `SessionState` exists per page load. It holds the single current
//! book and note plus the ordered sticker sequence, and is mutated directly
//! by the decoration engine and note subsystem. Projections (the share
//! preview and view-only page) read value-copies via [`SessionState::placements`]
//! and [`SessionState::snapshot`]; live sticker ids never leave this layer.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use uuid::Uuid;

use crate::consts::DEFAULT_STICKER_FONT_PX;
use crate::error::GiftError;
use crate::gesture::{Size, centered_position};
use crate::model::{BookRef, CustomizationRecord, NoteState, StickerId, StickerPlacement};

/// A placed sticker plus the live handle that keys it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSticker {
    pub id: StickerId,
    pub placement: StickerPlacement,
}

/// The session's customization-in-progress.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    book: Option<BookRef>,
    note: NoteState,
    stickers: Vec<PlacedSticker>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Book ---

    /// Commit a book as the session's current selection.
    pub fn select_book(&mut self, book: BookRef) {
        self.book = Some(book);
    }

    #[must_use]
    pub fn book(&self) -> Option<&BookRef> {
        self.book.as_ref()
    }

    // --- Note ---

    pub fn set_note_content(&mut self, content: impl Into<String>) {
        self.note.content = content.into();
    }

    pub fn set_note_font(&mut self, font_family: impl Into<String>) {
        self.note.font_family = font_family.into();
    }

    #[must_use]
    pub fn note(&self) -> &NoteState {
        &self.note
    }

    // --- Stickers ---

    /// Add a sticker centered within the decoration surface and return its
    /// live handle. Order is insertion order, used for deterministic
    /// re-rendering.
    pub fn add_sticker(&mut self, emoji: &str, surface: Size, sticker_size: Size) -> StickerId {
        let id = Uuid::new_v4();
        let center = centered_position(surface, sticker_size);
        self.stickers.push(PlacedSticker {
            id,
            placement: StickerPlacement {
                emoji: emoji.to_owned(),
                left: center.x,
                top: center.y,
                font_size: DEFAULT_STICKER_FONT_PX,
            },
        });
        id
    }

    /// Persist a dragged sticker's position. Returns false if the handle is
    /// no longer present.
    pub fn move_sticker(&mut self, id: StickerId, left: f64, top: f64) -> bool {
        let Some(sticker) = self.stickers.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        sticker.placement.left = left;
        sticker.placement.top = top;
        true
    }

    /// Persist a resized sticker's font size. Returns false if the handle is
    /// no longer present.
    pub fn resize_sticker(&mut self, id: StickerId, font_size: f64) -> bool {
        let Some(sticker) = self.stickers.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        sticker.placement.font_size = font_size;
        true
    }

    /// Remove a sticker. Idempotent: removing an absent handle is a no-op.
    pub fn remove_sticker(&mut self, id: StickerId) -> bool {
        let before = self.stickers.len();
        self.stickers.retain(|s| s.id != id);
        self.stickers.len() != before
    }

    #[must_use]
    pub fn stickers(&self) -> &[PlacedSticker] {
        &self.stickers
    }

    #[must_use]
    pub fn sticker(&self, id: StickerId) -> Option<&PlacedSticker> {
        self.stickers.iter().find(|s| s.id == id)
    }

    /// Value-copy of the ordered placements, stripped of live handles.
    /// This is the only sticker data that crosses into projections or
    /// persistence.
    #[must_use]
    pub fn placements(&self) -> Vec<StickerPlacement> {
        self.stickers.iter().map(|s| s.placement.clone()).collect()
    }

    // --- Lifecycle ---

    /// Irreversible reset: clears book, note, and all stickers. Used when
    /// navigating back to selection and after a share finalizes the gift.
    pub fn clear(&mut self) {
        self.book = None;
        self.note = NoteState::default();
        self.stickers.clear();
    }

    /// Build the serializable record from the current state.
    ///
    /// # Errors
    ///
    /// Returns [`GiftError::NoBookSelected`] when no book has been chosen;
    /// callers must surface a prompt and attempt no persistence.
    pub fn snapshot(
        &self,
        sender_name: &str,
        timestamp: &str,
    ) -> Result<CustomizationRecord, GiftError> {
        let Some(book) = self.book.clone() else {
            return Err(GiftError::NoBookSelected);
        };
        Ok(CustomizationRecord {
            book,
            note: self.note.content.clone(),
            font: self.note.font_family.clone(),
            stickers: self.placements(),
            sender_name: sender_name.trim().to_owned(),
            timestamp: timestamp.to_owned(),
        })
    }
}
