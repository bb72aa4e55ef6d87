//! Error taxonomy for the gift-book engine and client.
//!
//! Every failure mode has exactly one recovery path and none are retried
//! automatically: network failures degrade the search UI inline, auth and
//! save failures fall back to local-only persistence, missing records land
//! on the terminal error page, and the missing-book precondition blocks the
//! share action before any I/O happens.

use thiserror::Error;

/// Failures surfaced by engine operations and the client's collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GiftError {
    /// A search or recommendation fetch failed.
    #[error("search request failed: {0}")]
    Network(String),

    /// The identity provider or remote store rejected the session.
    /// Recoverable: callers degrade to local-only persistence.
    #[error("authentication unavailable: {0}")]
    Auth(String),

    /// Remote persistence failed; callers fall back to local storage.
    #[error("remote save failed: {0}")]
    Save(String),

    /// A view-only record was absent or unreadable in the chosen store.
    #[error("record not found: {0}")]
    NotFound(String),

    /// Share attempted without a selected book. No state change.
    #[error("no book selected")]
    NoBookSelected,
}
