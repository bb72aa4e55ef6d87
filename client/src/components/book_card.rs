//! One result card in the selection grid.

use leptos::prelude::*;

use giftbook::model::BookRef;

#[component]
pub fn BookCard(book: BookRef, on_select: Callback<BookRef>) -> impl IntoView {
    let selected = book.clone();
    let alt = book.title.clone();
    view! {
        <div class="book-card" on:click=move |_| on_select.run(selected.clone())>
            <img class="book-card__cover" src=book.cover_url.clone() alt=alt loading="lazy" />
            <div class="book-card__title">{book.title.clone()}</div>
            <div class="book-card__author">{book.author.clone()}</div>
        </div>
    }
}
