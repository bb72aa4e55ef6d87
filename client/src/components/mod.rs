//! Reusable view pieces shared across pages.

pub mod book_card;
pub mod book_model;
pub mod floating_menu;
pub mod sticker_layer;
