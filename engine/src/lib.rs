//! Interaction engine for the gift-book customizer.
//!
//! This crate owns all client-side state that does not touch the DOM: the
//! customization session (selected book, note, placed stickers), the pointer
//! gesture state machine for dragging and resizing stickers, the page
//! navigation state machine, the book-search wire types, and the
//! share/persistence protocol. The Leptos UI crate is responsible only for
//! wiring DOM events and network calls to this engine and rendering the
//! resulting state.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Core data types: book, sticker, note, customization record |
//! | [`session`] | In-memory session state owning the live customization |
//! | [`gesture`] | Drag/resize gesture state machine and clamping math |
//! | [`nav`] | Page navigation state machine and session mode |
//! | [`search`] | Book-search wire types and cover resolution preference |
//! | [`share`] | Share-link protocol, view targets, stored records |
//! | [`error`] | Error taxonomy shared across engine and client |
//! | [`consts`] | Shared constants (size bounds, delays, storage keys) |

pub mod consts;
pub mod error;
pub mod gesture;
pub mod model;
pub mod nav;
pub mod search;
pub mod session;
pub mod share;
