//! Customize page: the open book with its note editor and sticker layer.
//!
//! The note has two renderings that swap on focus: a textarea while editing
//! and a styled display once the user taps away with content present. Both
//! stay mounted so the swap never loses the textarea's caret; visibility is
//! toggled by class. Note text autosaves to the draft key on every input.

use leptos::html::Div;
use leptos::prelude::*;

use giftbook::consts::BOOK_PLACEHOLDER_COVER;
use giftbook::gesture::Size;
use giftbook::nav::NavMachine;
use giftbook::session::SessionState;

use crate::components::book_model::BookModel;
use crate::components::floating_menu::FloatingMenu;
use crate::components::sticker_layer::{StickerLayer, surface_size};
use crate::state::share::{SharePreview, ShareState};
use crate::util::storage;

#[component]
pub fn CustomizePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let nav = expect_context::<RwSignal<NavMachine>>();
    let share = expect_context::<RwSignal<ShareState>>();

    let open = RwSignal::new(false);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        // Let the page transition settle before the cover swings.
        crate::util::browser::sleep_ms(giftbook::consts::BOOK_OPEN_DELAY_MS).await;
        open.set(true);
    });
    #[cfg(not(feature = "csr"))]
    open.set(true);

    // Restore the note draft, without clobbering in-session edits.
    if let Some(saved) = storage::load_draft_note() {
        if session.with_untracked(|s| s.note().content.is_empty()) {
            session.update(|s| s.set_note_content(saved));
        }
    }

    let editing = RwSignal::new(true);
    let surface_ref = NodeRef::<Div>::new();

    let cover_url = Signal::derive(move || {
        session.with(|s| {
            s.book()
                .map_or_else(|| BOOK_PLACEHOLDER_COVER.to_owned(), |b| b.cover_url.clone())
        })
    });
    let title = Signal::derive(move || {
        session.with(|s| s.book().map_or_else(|| "Your book".to_owned(), |b| b.title.clone()))
    });
    let note_font = Signal::derive(move || session.with(|s| s.note().font_family.clone()));

    let show_editor =
        move || editing.get() || session.with(|s| s.note().content.trim().is_empty());

    let on_note_input = move |ev| {
        let value = event_target_value(&ev);
        storage::save_draft_note(&value);
        session.update(|s| s.set_note_content(value));
    };
    let on_note_blur = move |_| {
        if session.with_untracked(|s| !s.note().content.trim().is_empty()) {
            editing.set(false);
        }
    };
    let on_note_tap = move |_| editing.set(true);

    let on_font = Callback::new(move |font: String| session.update(|s| s.set_note_font(font)));

    let on_sticker = Callback::new(move |emoji: String| {
        let surface = surface_size(surface_ref);
        session.update(|s| {
            // Freshly added stickers have not been measured yet; a nominal
            // footprint keeps the centering sane until the first drag.
            s.add_sticker(&emoji, surface, Size::new(48.0, 48.0));
        });
    });

    let on_share = Callback::new(move |()| {
        let preview = session.with_untracked(SharePreview::from_session);
        share.update(|s| s.open_with(preview));
        nav.update(|n| {
            n.open_share();
        });
    });

    // Abandoning the customization is irreversible.
    let on_back = move |_| {
        session.update(SessionState::clear);
        storage::clear_draft();
        nav.update(|n| {
            n.back_to_selection();
        });
    };

    let on_cover_tap = Callback::new(move |()| open.set(true));

    view! {
        <div class="customize-page">
            <button class="customize-page__back" on:click=on_back>
                "← Back to book selection"
            </button>
            <h2 class="customize-page__heading">"Make it personal"</h2>
            <BookModel cover_url=cover_url title=title open=open.into() on_cover_tap=on_cover_tap>
                <div class="decoration-surface" node_ref=surface_ref>
                    <textarea
                        class="note-editor"
                        class=("is-hidden", move || !show_editor())
                        placeholder="Write a note..."
                        prop:value=move || session.with(|s| s.note().content.clone())
                        style:font-family=move || note_font.get()
                        on:input=on_note_input
                        on:blur=on_note_blur
                    ></textarea>
                    <div
                        class="note-display"
                        class=("is-hidden", show_editor)
                        style:font-family=move || note_font.get()
                        on:click=on_note_tap
                    >
                        {move || session.with(|s| s.note().content.clone())}
                    </div>
                    <StickerLayer session=session surface_ref=surface_ref />
                </div>
            </BookModel>
            <FloatingMenu
                active_font=note_font
                on_font=on_font
                on_sticker=on_sticker
                on_share=on_share
            />
        </div>
    }
}
