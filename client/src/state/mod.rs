//! Reactive page state: plain structs held in `RwSignal` contexts.
//!
//! Everything here is pure data plus presentation logic (headings, status
//! messages, staleness guards), so it is testable natively. DOM wiring lives
//! in `pages/` and `components/`.

pub mod auth;
pub mod search;
pub mod share;
pub mod view;
