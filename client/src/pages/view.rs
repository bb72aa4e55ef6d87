//! View-only page for shared records, plus the terminal error page.
//!
//! The record id comes from the query string, parsed once at startup.
//! `local=true` links read the record from this browser's local storage;
//! anything else asks the remote store. A failed load lands on the error
//! page, whose only exits are the browser's back navigation and starting a
//! fresh gift.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use giftbook::consts::BOOK_PLACEHOLDER_COVER;
use giftbook::nav::NavMachine;
use giftbook::session::SessionState;

use crate::components::book_model::BookModel;
use crate::components::sticker_layer::StaticStickers;
use crate::state::view::{ViewState, sender_heading};
use crate::util::browser;

#[component]
pub fn ViewOnlyPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavMachine>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let view_state = expect_context::<RwSignal<ViewState>>();

    load_record(view_state, nav);

    let on_cover_tap = Callback::new(move |()| view_state.update(|v| v.open = !v.open));

    let navigate = use_navigate();
    let on_create = move |_| {
        let mut applied = false;
        nav.update(|n| applied = n.create_your_own());
        if applied {
            session.update(SessionState::clear);
            view_state.update(|v| *v = ViewState::default());
            // Drop the view identifier from the URL without a reload.
            navigate("/", NavigateOptions::default());
        }
    };

    view! {
        <div class="view-page">
            {move || {
                let state = view_state.get();
                match state.record {
                    None => {
                        view! { <p class="view-page__status">"Opening your gift..."</p> }
                            .into_any()
                    }
                    Some(record) => {
                        let heading = sender_heading(&record.sender_name);
                        let cover = if record.book.cover_url.is_empty() {
                            BOOK_PLACEHOLDER_COVER.to_owned()
                        } else {
                            record.book.cover_url.clone()
                        };
                        let title = record.book.title.clone();
                        let note_font = record.font.clone();
                        let note_text = record.note.clone();
                        let stickers = record.stickers.clone();
                        let open = Signal::derive(move || view_state.get().open);
                        view! {
                            <h2 class="view-page__heading">{heading}</h2>
                            <BookModel
                                cover_url=Signal::derive(move || cover.clone())
                                title=Signal::derive(move || title.clone())
                                open=open
                                on_cover_tap=on_cover_tap
                            >
                                <div class="decoration-surface decoration-surface--static">
                                    <div class="note-display" style:font-family=note_font>
                                        {note_text}
                                    </div>
                                    <StaticStickers stickers=stickers />
                                </div>
                            </BookModel>
                        }
                            .into_any()
                    }
                }
            }}
            <button class="view-page__create-own" on:click=on_create>
                "Create your own book gift"
            </button>
        </div>
    }
}

/// Terminal failure page for unloadable records.
#[component]
pub fn ErrorPage() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavMachine>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let view_state = expect_context::<RwSignal<ViewState>>();

    let message = move || {
        view_state
            .get()
            .error
            .unwrap_or_else(|| "Something went wrong opening this gift.".to_owned())
    };

    let on_go_back = move |_| browser::go_back();

    let navigate = use_navigate();
    let on_create = move |_| {
        let mut applied = false;
        nav.update(|n| applied = n.create_your_own());
        if applied {
            session.update(SessionState::clear);
            view_state.update(|v| *v = ViewState::default());
            navigate("/", NavigateOptions::default());
        }
    };

    view! {
        <div class="error-page">
            <h2 class="error-page__heading">"Book Not Found"</h2>
            <p class="error-page__message">{message}</p>
            <div class="error-page__actions">
                <button class="error-page__go-back" on:click=on_go_back>
                    "Go Back"
                </button>
                <button class="error-page__create-own" on:click=on_create>
                    "Create your own book gift"
                </button>
            </div>
        </div>
    }
}

/// Kick off the one-shot record load for the page's view target.
fn load_record(view_state: RwSignal<ViewState>, nav: RwSignal<NavMachine>) {
    let Some(target) = view_state.with_untracked(|v| v.target.clone()) else {
        view_state.update(|v| {
            v.error = Some("This link is missing its book identifier.".to_owned());
        });
        nav.update(NavMachine::fail);
        return;
    };
    view_state.update(|v| v.loading = true);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = if target.local {
            crate::util::storage::load_record(&target.id).map(|stored| stored.record)
        } else {
            crate::net::store::fetch_customization(&target.id).await
        };
        match result {
            Ok(record) => {
                view_state.update(|v| {
                    v.loading = false;
                    v.record = Some(record);
                });
                browser::sleep_ms(giftbook::consts::VIEW_OPEN_DELAY_MS).await;
                view_state.update(|v| v.open = true);
            }
            Err(err) => {
                log::error!("failed to load the shared record: {err}");
                let message = if target.local {
                    "This book could not be found on this device. Local links only open in the browser that created them."
                } else {
                    "This book recommendation could not be found. The link may be wrong or the gift may have been removed."
                };
                view_state.update(|v| {
                    v.loading = false;
                    v.error = Some(message.to_owned());
                });
                nav.update(NavMachine::fail);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = target;
        view_state.update(|v| v.loading = false);
    }
}
