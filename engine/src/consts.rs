//! Shared constants for the gift-book engine.

// ── Stickers ────────────────────────────────────────────────────

/// Smallest allowed sticker emoji font size, in CSS pixels.
pub const MIN_STICKER_FONT_PX: f64 = 20.0;

/// Largest allowed sticker emoji font size, in CSS pixels.
pub const MAX_STICKER_FONT_PX: f64 = 70.0;

/// Font size given to a freshly added sticker, in CSS pixels.
pub const DEFAULT_STICKER_FONT_PX: f64 = 40.0;

/// Resize sensitivity: pointer delta (dx + dy) is scaled by this factor
/// before being added to the starting font size.
pub const RESIZE_SENSITIVITY: f64 = 0.2;

// ── Note ────────────────────────────────────────────────────────

/// Default handwriting font for the note.
pub const DEFAULT_NOTE_FONT: &str = "Caveat";

// ── Search ──────────────────────────────────────────────────────

/// Quiet period after the last keystroke before a search is issued.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Result cap for user-initiated searches.
pub const SEARCH_MAX_RESULTS: u32 = 20;

/// Result cap for the default recommendation list.
pub const TOP_BOOKS_MAX_RESULTS: u32 = 12;

/// Canned query used for the default recommendation list.
pub const TOP_BOOKS_QUERY: &str = "bestsellers fiction";

/// Placeholder cover for search-result cards with no usable image.
pub const GRID_PLACEHOLDER_COVER: &str =
    "https://placehold.co/120x180/cccccc/ffffff?text=No+Cover";

/// Placeholder cover for the large book visual.
pub const BOOK_PLACEHOLDER_COVER: &str =
    "https://placehold.co/300x450/8B7355/ffffff?text=No+Cover";

// ── Presentation timing ─────────────────────────────────────────

/// Delay before the customize-page book auto-opens after selection.
pub const BOOK_OPEN_DELAY_MS: u32 = 300;

/// Delay before the view-only book auto-opens after the record loads.
pub const VIEW_OPEN_DELAY_MS: u32 = 500;

/// How long the link-copied tooltip stays visible.
pub const COPY_TOOLTIP_MS: u32 = 2000;

// ── Local storage ───────────────────────────────────────────────

/// Key holding the draft selected book as JSON.
pub const SELECTED_BOOK_KEY: &str = "selectedBook";

/// Key holding the draft note text.
pub const NOTE_KEY: &str = "bookNote";

/// Prefix for locally persisted customization records; the record id is
/// appended to form the full key.
pub const CUSTOMIZATION_KEY_PREFIX: &str = "bookCustomization_";
