//! Share-link protocol: view targets, persisted record shape, and the
//! ordered persistence fallback.
//!
//! A share persists the [`CustomizationRecord`](crate::model::CustomizationRecord)
//! through the backends in [`PERSIST_ORDER`]: the remote document store
//! first, then local storage keyed by a freshly generated id and flagged
//! `local`. The resulting [`SavedShare`] maps to a URL whose query carries
//! the record id (plus `local=true` for the fallback path); the inverse
//! [`view_target`] parse drives view-only loads.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use serde::{Deserialize, Serialize};

use crate::consts::CUSTOMIZATION_KEY_PREFIX;
use crate::model::CustomizationRecord;

/// Query parameter carrying the record identifier.
pub const VIEW_PARAM: &str = "view";

/// Query parameter selecting local-storage lookup.
pub const LOCAL_PARAM: &str = "local";

/// Persistence backends in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// The remote document store.
    Remote,
    /// Browser local storage, used when the remote path fails.
    Local,
}

/// One-shot fallback order: remote first, local second. Nothing is retried.
pub const PERSIST_ORDER: [BackendKind; 2] = [BackendKind::Remote, BackendKind::Local];

/// Outcome of a successful share: where the record landed and under what id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedShare {
    pub id: String,
    pub backend: BackendKind,
}

impl SavedShare {
    #[must_use]
    pub fn is_local(&self) -> bool {
        self.backend == BackendKind::Local
    }

    /// Shareable URL for this record: `{origin}{path}?view=<id>` plus
    /// `&local=true` when the record lives in local storage.
    #[must_use]
    pub fn to_url(&self, origin: &str, path: &str) -> String {
        let mut url = format!("{origin}{path}?{VIEW_PARAM}={}", self.id);
        if self.is_local() {
            url.push_str("&local=true");
        }
        url
    }
}

/// A view-only navigation target parsed from the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTarget {
    /// Record identifier to load.
    pub id: String,
    /// Whether to read from local storage instead of the remote store.
    pub local: bool,
}

/// Parse the `view`/`local` query parameters into a view target. Returns
/// `None` when no usable `view` id is present, which keeps the session
/// editable.
#[must_use]
pub fn view_target(view: Option<String>, local: Option<String>) -> Option<ViewTarget> {
    let id = view?.trim().to_owned();
    if id.is_empty() {
        return None;
    }
    let local = local.as_deref().is_some_and(|value| value.eq_ignore_ascii_case("true"));
    Some(ViewTarget { id, local })
}

/// Local-storage key for a persisted customization record.
#[must_use]
pub fn storage_key(id: &str) -> String {
    format!("{CUSTOMIZATION_KEY_PREFIX}{id}")
}

/// The shape written to local storage: the record plus its id and the
/// `local` marker, flattened so the JSON matches the remote record with two
/// extra fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    #[serde(flatten)]
    pub record: CustomizationRecord,
    pub id: String,
    pub local: bool,
}

impl StoredRecord {
    /// Wrap a record for the local-fallback path.
    #[must_use]
    pub fn local(record: CustomizationRecord, id: String) -> Self {
        Self { record, id, local: true }
    }
}
