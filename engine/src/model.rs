//! Core data types for a gift-book customization session.
//!
//! Field renames keep the serialized JSON identical to what the original
//! application wrote to its document store and to local storage, so records
//! persisted by either implementation remain readable by the other.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::DEFAULT_NOTE_FONT;

/// Unique identifier for a live placed sticker.
///
/// This is the element identity required by the session invariant: no two
/// placements share an id, while duplicates by content are permitted.
pub type StickerId = Uuid;

/// Minimal identity and display record for a selected book.
///
/// Immutable once fetched from the search collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRef {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(rename = "coverUrl")]
    pub cover_url: String,
}

/// A single positioned, sized decorative emoji element.
///
/// `left` and `top` are CSS pixels from the decoration surface's top-left
/// corner. `font_size` is bounded to [20, 70] px by the gesture engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerPlacement {
    pub emoji: String,
    pub left: f64,
    pub top: f64,
    #[serde(rename = "fontSize")]
    pub font_size: f64,
}

/// The freeform note and its font choice. One instance per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteState {
    pub content: String,
    #[serde(rename = "fontFamily")]
    pub font_family: String,
}

impl Default for NoteState {
    fn default() -> Self {
        Self {
            content: String::new(),
            font_family: DEFAULT_NOTE_FONT.to_owned(),
        }
    }
}

/// The serializable snapshot shared via a link.
///
/// Created at share time and immutable once persisted. `timestamp` is an
/// ISO-8601 string supplied by the caller so the engine stays clock-free.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationRecord {
    pub book: BookRef,
    pub note: String,
    pub font: String,
    pub stickers: Vec<StickerPlacement>,
    #[serde(rename = "senderName")]
    pub sender_name: String,
    pub timestamp: String,
}

/// Whether the current page load is editable or a read-only view.
///
/// Fixed for the lifetime of a page load, derived once from the presence of
/// a `view` identifier in the navigation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionMode {
    #[default]
    Editable,
    ViewOnly,
}
