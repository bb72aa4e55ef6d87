//! Local-storage persistence.
//!
//! Two kinds of data live here. Draft keys (`selectedBook`, `bookNote`)
//! survive page reloads during editing and are cleared when a share
//! finalizes or the user walks back to selection. Customization records
//! (`bookCustomization_<id>`) back the local share fallback and are read by
//! view-only links carrying `local=true`.

use giftbook::consts::{NOTE_KEY, SELECTED_BOOK_KEY};
use giftbook::error::GiftError;
use giftbook::model::BookRef;
use giftbook::share::{StoredRecord, storage_key};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

// --- Draft keys ---

pub fn save_draft_book(book: &BookRef) {
    if let Some(storage) = local_storage() {
        if let Ok(json) = serde_json::to_string(book) {
            let _ = storage.set_item(SELECTED_BOOK_KEY, &json);
        }
    }
}

pub fn save_draft_note(content: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(NOTE_KEY, content);
    }
}

#[must_use]
pub fn load_draft_note() -> Option<String> {
    local_storage()?.get_item(NOTE_KEY).ok().flatten()
}

/// Remove both draft keys. Called when a share finalizes the gift and when
/// the user abandons the customization.
pub fn clear_draft() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SELECTED_BOOK_KEY);
        let _ = storage.remove_item(NOTE_KEY);
    }
}

// --- Customization records ---

/// Persist a record under its customization key.
///
/// # Errors
///
/// Returns [`GiftError::Save`] when storage is unavailable or the write is
/// rejected (quota, private browsing).
pub fn store_record(stored: &StoredRecord) -> Result<(), GiftError> {
    let storage = local_storage()
        .ok_or_else(|| GiftError::Save("local storage unavailable".to_owned()))?;
    let json = serde_json::to_string(stored).map_err(|e| GiftError::Save(e.to_string()))?;
    storage
        .set_item(&storage_key(&stored.id), &json)
        .map_err(|_| GiftError::Save("local storage write rejected".to_owned()))
}

/// Load a record previously written by the local share fallback.
///
/// # Errors
///
/// Returns [`GiftError::NotFound`] when the key is missing or the stored
/// JSON does not parse.
pub fn load_record(id: &str) -> Result<StoredRecord, GiftError> {
    let json = local_storage()
        .and_then(|storage| storage.get_item(&storage_key(id)).ok().flatten())
        .ok_or_else(|| GiftError::NotFound(id.to_owned()))?;
    serde_json::from_str(&json).map_err(|_| GiftError::NotFound(id.to_owned()))
}
