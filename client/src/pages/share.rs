//! Share page: frozen preview, sender name, and link creation.
//!
//! Copying the link is the commit point of the whole flow. The record is
//! built from the frozen preview, persisted remote-first with a local
//! fallback, copied to the clipboard, and only then does the working
//! session reset to a blank slate. Failures leave the session untouched so
//! nothing is lost.

use leptos::prelude::*;

use giftbook::consts::BOOK_PLACEHOLDER_COVER;
use giftbook::nav::NavMachine;
use giftbook::search::encode_component;
use giftbook::session::SessionState;

use crate::components::book_model::BookModel;
use crate::components::sticker_layer::StaticStickers;
use crate::state::auth::AuthState;
use crate::state::share::ShareState;
use crate::util::browser;

#[component]
pub fn SharePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavMachine>>();
    let share = expect_context::<RwSignal<ShareState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    // The preview was frozen when this page opened; later session changes
    // (including the post-share reset) must not repaint it.
    let preview = share.with_untracked(|s| s.preview.clone());
    let cover = preview
        .book
        .as_ref()
        .map_or_else(|| BOOK_PLACEHOLDER_COVER.to_owned(), |b| b.cover_url.clone());
    let book_title = preview
        .book
        .as_ref()
        .map_or_else(|| "Your book".to_owned(), |b| b.title.clone());
    let cover_url = Signal::derive(move || cover.clone());
    let title = Signal::derive(move || book_title.clone());

    let open = RwSignal::new(true);
    let on_cover_tap = Callback::new(move |()| open.update(|o| *o = !*o));

    // After a finalized share the session is empty; "back" then means
    // starting over at selection rather than editing a gift that no longer
    // exists.
    let on_back = move |_| {
        if session.with_untracked(|s| s.book().is_some()) {
            nav.update(|n| {
                n.back_to_editing();
            });
        } else {
            nav.update(|n| {
                n.back_to_selection();
            });
        }
    };

    let on_sender_input = move |ev| {
        let value = event_target_value(&ev);
        share.update(|s| s.sender_name = value);
    };

    let on_copy = move |_| {
        if share.with_untracked(|s| s.saving) {
            return;
        }
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(create_link(session, share, auth));
        #[cfg(not(feature = "csr"))]
        let _ = (session, auth);
    };

    let on_email = move |_| {
        let Some(link) = share.with_untracked(|s| s.link.clone()) else {
            share.update(|s| {
                s.prompt = Some("Create the link first, then share it.".to_owned());
            });
            return;
        };
        let body = encode_component(&format!("I picked a book for you! Open it here: {link}"));
        browser::open_url(&format!("mailto:?subject=A%20book%20gift%20for%20you&body={body}"));
    };

    let note_font = preview.font.clone();
    let note_text = preview.note.clone();
    let stickers = preview.stickers.clone();

    view! {
        <div class="share-page">
            <button class="share-page__back" on:click=on_back>
                "← Back to editing"
            </button>
            <h2 class="share-page__heading">"Share your gift"</h2>
            <BookModel cover_url=cover_url title=title open=open.into() on_cover_tap=on_cover_tap>
                <div class="decoration-surface decoration-surface--static">
                    <div class="note-display" style:font-family=note_font>{note_text}</div>
                    <StaticStickers stickers=stickers />
                </div>
            </BookModel>
            <div class="share-page__controls">
                <input
                    class="share-page__sender"
                    type="text"
                    placeholder="Your name (optional)"
                    prop:value=move || share.get().sender_name
                    on:input=on_sender_input
                />
                <button
                    class="share-page__copy"
                    disabled=move || share.get().saving
                    on:click=on_copy
                >
                    {move || if share.get().saving { "Creating link..." } else { "Copy shareable link" }}
                </button>
                {move || {
                    share
                        .get()
                        .tooltip_visible
                        .then(|| view! { <span class="share-page__tooltip">"Link copied!"</span> })
                }}
                {move || {
                    share
                        .get()
                        .prompt
                        .map(|prompt| view! { <p class="share-page__prompt">{prompt}</p> })
                }}
                {move || {
                    share
                        .get()
                        .link
                        .map(|link| {
                            view! {
                                <p class="share-page__link">
                                    <a href=link.clone() target="_blank">{link.clone()}</a>
                                </p>
                            }
                        })
                }}
                <button class="share-page__email" on:click=on_email>
                    "Share via email"
                </button>
            </div>
        </div>
    }
}

/// The full copy-link flow: build, persist, copy, finalize.
#[cfg(feature = "csr")]
async fn create_link(
    session: RwSignal<SessionState>,
    share: RwSignal<ShareState>,
    auth: RwSignal<AuthState>,
) {
    let sender = share.with_untracked(|s| s.sender_name.clone());
    let timestamp = browser::now_iso();
    let record = match share.with_untracked(|s| s.preview.to_record(&sender, &timestamp)) {
        Ok(record) => record,
        Err(err) => {
            log::warn!("cannot share yet: {err}");
            share.update(|s| s.prompt = Some("Please select a book first!".to_owned()));
            return;
        }
    };

    share.update(|s| {
        s.saving = true;
        s.prompt = None;
    });

    let local_only = auth.with_untracked(|a| a.local_only);
    let saved = match persist_record(&record, local_only).await {
        Ok(saved) => saved,
        Err(err) => {
            log::error!("share failed on every backend: {err}");
            share.update(|s| {
                s.saving = false;
                s.prompt =
                    Some("Failed to generate shareable link. Please try again.".to_owned());
            });
            return;
        }
    };

    let url = saved.to_url(&browser::origin(), &browser::pathname());
    log::info!("shareable link created: {url}");
    let copied = crate::util::clipboard::copy_text(&url).await;
    if !copied {
        log::warn!("could not copy the link; it is shown on the page instead");
    }
    share.update(|s| {
        s.saving = false;
        s.link = Some(url);
        s.tooltip_visible = copied;
    });

    // The gift is sealed: the working session and its drafts reset so a
    // new gift starts blank.
    session.update(SessionState::clear);
    crate::util::storage::clear_draft();

    if copied {
        browser::sleep_ms(giftbook::consts::COPY_TOOLTIP_MS).await;
        share.update(|s| s.tooltip_visible = false);
    }
}

/// Try each persistence backend in order until one accepts the record.
#[cfg(feature = "csr")]
async fn persist_record(
    record: &giftbook::model::CustomizationRecord,
    local_only: bool,
) -> Result<giftbook::share::SavedShare, giftbook::error::GiftError> {
    use giftbook::share::{BackendKind, PERSIST_ORDER, SavedShare, StoredRecord};

    for backend in PERSIST_ORDER {
        match backend {
            BackendKind::Remote => {
                if local_only {
                    log::warn!("session is local-only; skipping the remote store");
                    continue;
                }
                match crate::net::store::create_customization(record).await {
                    Ok(id) => return Ok(SavedShare { id, backend }),
                    Err(err) => {
                        log::warn!("remote save failed, falling back to local storage: {err}");
                    }
                }
            }
            BackendKind::Local => {
                let id = uuid::Uuid::new_v4().to_string();
                crate::util::storage::store_record(&StoredRecord::local(record.clone(), id.clone()))?;
                return Ok(SavedShare { id, backend });
            }
        }
    }
    Err(giftbook::error::GiftError::Save(
        "no persistence backend accepted the record".to_owned(),
    ))
}
