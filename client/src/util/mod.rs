//! Browser glue: local storage, clipboard, and window-level helpers.

pub mod browser;
pub mod clipboard;
pub mod storage;
