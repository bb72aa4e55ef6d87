//! Book selection page: search input plus the result grid.
//!
//! A blank input shows the canned recommendation list and fetches it
//! immediately; anything else is debounced. Every fetch runs under the
//! search state's generation guard, so abandoned debounce timers and slow
//! responses are dropped instead of clobbering newer results.

use leptos::prelude::*;

use giftbook::consts::{
    SEARCH_DEBOUNCE_MS, SEARCH_MAX_RESULTS, TOP_BOOKS_MAX_RESULTS, TOP_BOOKS_QUERY,
};
use giftbook::model::BookRef;
use giftbook::nav::NavMachine;
use giftbook::session::SessionState;

use crate::components::book_card::BookCard;
use crate::state::search::{SearchPhase, SearchState};
use crate::util::storage;

#[component]
pub fn SelectionPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavMachine>>();
    let search = expect_context::<RwSignal<SearchState>>();

    // Entering selection always refetches whatever the input shows: top
    // books when blank, otherwise the search itself, with no debounce.
    let initial = search.with_untracked(|s| s.query.clone());
    if initial.trim().is_empty() {
        fetch_top_books(search, initial);
    } else {
        immediate_search(search, initial);
    }

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        if value.trim().is_empty() {
            // Back to browsing: no debounce, straight to top books.
            fetch_top_books(search, value);
        } else {
            debounced_search(search, value);
        }
    };

    let on_clear = move |_| fetch_top_books(search, String::new());

    let on_select = Callback::new(move |book: BookRef| {
        storage::save_draft_book(&book);
        session.update(|s| s.select_book(book));
        nav.update(|n| {
            n.choose_book();
        });
    });

    view! {
        <div class="selection-page">
            <header class="selection-page__header">
                <h1 class="selection-page__title">"Gift a Book"</h1>
                <p class="selection-page__tagline">
                    "Pick a book, make it personal, send it to someone."
                </p>
            </header>
            <div class="selection-page__search">
                <input
                    class="selection-page__search-input"
                    type="text"
                    placeholder="Search for a book..."
                    prop:value=move || search.get().query
                    on:input=on_input
                />
                {move || {
                    (!search.get().query.is_empty())
                        .then(|| {
                            view! {
                                <button class="selection-page__clear" on:click=on_clear>
                                    "✕"
                                </button>
                            }
                        })
                }}
            </div>
            <h2 class="selection-page__heading">{move || search.get().title()}</h2>
            {move || {
                let state = search.get();
                match state.phase {
                    SearchPhase::Loading => {
                        view! { <p class="selection-page__status">{state.loading_message()}</p> }
                            .into_any()
                    }
                    SearchPhase::Failed => {
                        view! {
                            <p class="selection-page__status selection-page__status--error">
                                {state.failure_message()}
                            </p>
                        }
                            .into_any()
                    }
                    SearchPhase::Loaded if state.results.is_empty() => {
                        view! { <p class="selection-page__status">"No books found."</p> }
                            .into_any()
                    }
                    SearchPhase::Loaded => {
                        view! {
                            <div class="selection-page__grid">
                                {state
                                    .results
                                    .iter()
                                    .cloned()
                                    .map(|book| view! { <BookCard book=book on_select=on_select /> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

/// Load the recommendation list immediately. `raw_query` is what stays in
/// the input box (blank or whitespace).
fn fetch_top_books(search: RwSignal<SearchState>, raw_query: String) {
    let generation = search.try_update(|s| s.begin(raw_query)).unwrap_or_default();
    run_fetch(search, generation, TOP_BOOKS_QUERY.to_owned(), TOP_BOOKS_MAX_RESULTS, 0);
}

/// Schedule a user search after the debounce quiet period.
fn debounced_search(search: RwSignal<SearchState>, raw_query: String) {
    let api_query = raw_query.trim().to_owned();
    let generation = search.try_update(|s| s.begin(raw_query)).unwrap_or_default();
    run_fetch(search, generation, api_query, SEARCH_MAX_RESULTS, SEARCH_DEBOUNCE_MS);
}

/// Run a user search right away, for page entry with a query already set.
fn immediate_search(search: RwSignal<SearchState>, raw_query: String) {
    let api_query = raw_query.trim().to_owned();
    let generation = search.try_update(|s| s.begin(raw_query)).unwrap_or_default();
    run_fetch(search, generation, api_query, SEARCH_MAX_RESULTS, 0);
}

fn run_fetch(
    search: RwSignal<SearchState>,
    generation: u64,
    api_query: String,
    max_results: u32,
    delay_ms: u32,
) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if delay_ms > 0 {
            crate::util::browser::sleep_ms(delay_ms).await;
            // A newer keystroke supersedes this fetch.
            if !search.with_untracked(|s| s.is_current(generation)) {
                return;
            }
        }
        match crate::net::api::search_volumes(&api_query, max_results).await {
            Ok(books) => {
                search.update(|s| {
                    s.complete(generation, books);
                });
            }
            Err(err) => {
                log::warn!("book search failed: {err}");
                search.update(|s| {
                    s.fail(generation);
                });
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (search, generation, api_query, max_results, delay_ms);
    }
}
