//! The 3D-ish book visual: a front cover that swings open to reveal the
//! first page. Used by the customize, share, and view-only pages; the
//! caller owns the open/closed signal and decides what a cover tap does.

use leptos::prelude::*;

#[component]
pub fn BookModel(
    /// Cover image URL, reactive so the placeholder can swap in.
    cover_url: Signal<String>,
    /// Accessible title for the cover image.
    title: Signal<String>,
    open: Signal<bool>,
    /// Fired when the front cover is tapped.
    on_cover_tap: Callback<()>,
    /// First-page content: the note and the sticker layer.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="book-model" class=("book-model--open", move || open.get())>
            <div class="book-model__cover" on:click=move |_| on_cover_tap.run(())>
                <img
                    class="book-model__cover-image"
                    src=move || cover_url.get()
                    alt=move || title.get()
                />
            </div>
            <div class="book-model__first-page">{children()}</div>
        </div>
    }
}
