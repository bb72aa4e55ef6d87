//! # giftbook-client
//!
//! Leptos + WASM frontend for the gift-book customizer. Renders the three
//! editable surfaces (selection, customize, share) plus the read-only view
//! page, and wires DOM events, network calls, and browser storage to the
//! pure `giftbook` engine crate.
//!
//! Browser-only codepaths (HTTP, timers, clipboard promises, mounting) sit
//! behind the `csr` cargo feature with inert off-browser stubs, so the crate
//! compiles and its state tests run natively.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;
