//! Selection-page search state with a generation guard.
//!
//! Every fetch (debounced search or immediate top-books load) begins by
//! bumping `generation`; responses carry the generation they were started
//! with and are dropped if a newer fetch has begun since. This both cancels
//! pending debounce timers and prevents a slow earlier response from
//! overwriting a faster later one.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use giftbook::model::BookRef;

/// Where the current fetch stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// A fetch is in flight (also the initial state, since entering the
    /// selection page immediately loads top books).
    #[default]
    Loading,
    /// The latest fetch resolved with results (possibly zero).
    Loaded,
    /// The latest fetch failed; the grid shows an error and no stale results.
    Failed,
}

#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Raw input value. Blank (after trimming) means the top-books view.
    pub query: String,
    pub results: Vec<BookRef>,
    pub phase: SearchPhase,
    generation: u64,
}

impl SearchState {
    /// Start a new fetch for `query`, invalidating everything in flight.
    /// Returns the generation the caller must present back to
    /// [`complete`](Self::complete) or [`fail`](Self::fail).
    pub fn begin(&mut self, query: impl Into<String>) -> u64 {
        self.query = query.into();
        self.generation += 1;
        self.phase = SearchPhase::Loading;
        self.generation
    }

    /// True when `generation` still identifies the latest fetch. Debounce
    /// timers check this after sleeping and bail out when stale.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Apply results for `generation`. Stale completions are dropped.
    pub fn complete(&mut self, generation: u64, results: Vec<BookRef>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.results = results;
        self.phase = SearchPhase::Loaded;
        true
    }

    /// Record a failed fetch for `generation`. Clears any previous results
    /// so the grid never shows data that does not match the heading.
    pub fn fail(&mut self, generation: u64) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.results.clear();
        self.phase = SearchPhase::Failed;
        true
    }

    /// True when the input is blank and the grid shows recommendations.
    #[must_use]
    pub fn is_browsing(&self) -> bool {
        self.query.trim().is_empty()
    }

    /// Section heading above the grid.
    #[must_use]
    pub fn title(&self) -> String {
        match self.phase {
            SearchPhase::Loading if self.is_browsing() => "Top Recommended Books".to_owned(),
            SearchPhase::Loading => "Searching...".to_owned(),
            SearchPhase::Failed => "Search Failed".to_owned(),
            SearchPhase::Loaded if self.is_browsing() => "Top Recommended Books".to_owned(),
            SearchPhase::Loaded => format!("{} results found", self.results.len()),
        }
    }

    /// In-grid text while a fetch is in flight.
    #[must_use]
    pub fn loading_message(&self) -> &'static str {
        if self.is_browsing() {
            "Loading top books..."
        } else {
            "Searching for books..."
        }
    }

    /// In-grid text after a failed fetch.
    #[must_use]
    pub fn failure_message(&self) -> &'static str {
        if self.is_browsing() {
            "Failed to load top books. Please try again."
        } else {
            "Failed to load search results. Please try again."
        }
    }
}
