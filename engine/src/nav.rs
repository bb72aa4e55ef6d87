//! Page navigation state machine.
//!
//! Exactly one page is visible at a time. The initial state is resolved
//! synchronously at load: a `view` identifier in the navigation target puts
//! the whole session in view-only mode on the `ViewOnly` page; otherwise the
//! session starts editable on `Selection`. Transition methods return whether
//! the transition applied, so callers can skip side effects (clearing the
//! session, refetching recommendations) for rejected transitions.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::model::SessionMode;

/// The visible page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Book search and recommendation grid.
    #[default]
    Selection,
    /// The editable book with note and stickers.
    Customize,
    /// Share surface: preview, sender name, link creation.
    Share,
    /// Read-only rendering of a loaded record.
    ViewOnly,
    /// Terminal failure page for unloadable records.
    Error,
}

/// Current page plus the session mode fixed at load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavMachine {
    page: Page,
    mode: SessionMode,
}

impl NavMachine {
    /// Fresh editable session starting at book selection.
    #[must_use]
    pub fn editable() -> Self {
        Self { page: Page::Selection, mode: SessionMode::Editable }
    }

    /// View-only session for a shared record.
    #[must_use]
    pub fn view_only() -> Self {
        Self { page: Page::ViewOnly, mode: SessionMode::ViewOnly }
    }

    /// Resolve the initial state from whether the navigation target carries
    /// a view identifier.
    #[must_use]
    pub fn initial(viewing: bool) -> Self {
        if viewing { Self::view_only() } else { Self::editable() }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    #[must_use]
    pub fn is_view_only(&self) -> bool {
        self.mode == SessionMode::ViewOnly
    }

    /// Selection → Customize, after the user commits a book.
    pub fn choose_book(&mut self) -> bool {
        if self.mode == SessionMode::Editable && self.page == Page::Selection {
            self.page = Page::Customize;
            return true;
        }
        false
    }

    /// Customize → Share. The caller snapshots the customization into the
    /// share surface when this applies.
    pub fn open_share(&mut self) -> bool {
        if self.mode == SessionMode::Editable && self.page == Page::Customize {
            self.page = Page::Share;
            return true;
        }
        false
    }

    /// Share → Customize. Disabled in view-only mode.
    pub fn back_to_editing(&mut self) -> bool {
        if self.mode == SessionMode::Editable && self.page == Page::Share {
            self.page = Page::Customize;
            return true;
        }
        false
    }

    /// Customize/Share → Selection. The caller performs the irreversible
    /// session reset when this applies.
    pub fn back_to_selection(&mut self) -> bool {
        if self.mode == SessionMode::Editable
            && matches!(self.page, Page::Customize | Page::Share)
        {
            self.page = Page::Selection;
            return true;
        }
        false
    }

    /// ViewOnly/Error → Selection, resetting the mode to editable. The
    /// caller clears the view identifier from the navigation target.
    pub fn create_your_own(&mut self) -> bool {
        if matches!(self.page, Page::ViewOnly | Page::Error) {
            self.page = Page::Selection;
            self.mode = SessionMode::Editable;
            return true;
        }
        false
    }

    /// Enter the terminal error page. Not retried; the only exits are the
    /// browser's back navigation or [`NavMachine::create_your_own`].
    pub fn fail(&mut self) {
        self.page = Page::Error;
    }
}

impl Default for NavMachine {
    fn default() -> Self {
        Self::editable()
    }
}
