//! Floating action menu on the customize page: font picker, sticker
//! palette, and the share button. One submenu is open at a time; picking
//! an option closes it.

use leptos::prelude::*;

use giftbook::consts::DEFAULT_NOTE_FONT;

/// Handwriting fonts offered for the note.
pub const FONT_CHOICES: [&str; 4] = [
    DEFAULT_NOTE_FONT,
    "Dancing Script",
    "Shadows Into Light",
    "Indie Flower",
];

/// Emoji offered by the sticker palette.
pub const STICKER_CHOICES: [&str; 8] = ["❤️", "⭐", "🎉", "🎁", "📚", "🌸", "✨", "😊"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SubMenu {
    #[default]
    None,
    Font,
    Sticker,
}

#[component]
pub fn FloatingMenu(
    /// Currently selected note font, for highlighting.
    active_font: Signal<String>,
    on_font: Callback<String>,
    on_sticker: Callback<String>,
    on_share: Callback<()>,
) -> impl IntoView {
    let submenu = RwSignal::new(SubMenu::None);

    let toggle = move |target: SubMenu| {
        submenu.update(|open| {
            *open = if *open == target { SubMenu::None } else { target };
        });
    };

    view! {
        <div class="floating-menu">
            <button
                class="floating-menu__button"
                class=("floating-menu__button--active", move || submenu.get() == SubMenu::Font)
                on:click=move |_| toggle(SubMenu::Font)
            >
                "Aa"
            </button>
            <button
                class="floating-menu__button"
                class=("floating-menu__button--active", move || submenu.get() == SubMenu::Sticker)
                on:click=move |_| toggle(SubMenu::Sticker)
            >
                "😊"
            </button>
            <button class="floating-menu__button floating-menu__share" on:click=move |_| on_share.run(())>
                "Share"
            </button>

            {move || match submenu.get() {
                SubMenu::None => ().into_any(),
                SubMenu::Font => view! {
                    <div class="floating-menu__panel floating-menu__fonts">
                        {FONT_CHOICES
                            .iter()
                            .map(|font| {
                                let font = (*font).to_owned();
                                let label = font.clone();
                                let chosen = font.clone();
                                view! {
                                    <button
                                        class="floating-menu__font-option"
                                        class=("floating-menu__font-option--active", {
                                            let font = font.clone();
                                            move || active_font.get() == font
                                        })
                                        style:font-family=font.clone()
                                        on:click=move |_| {
                                            on_font.run(chosen.clone());
                                            submenu.set(SubMenu::None);
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
                SubMenu::Sticker => view! {
                    <div class="floating-menu__panel floating-menu__stickers">
                        {STICKER_CHOICES
                            .iter()
                            .map(|emoji| {
                                let emoji = (*emoji).to_owned();
                                let label = emoji.clone();
                                view! {
                                    <button
                                        class="floating-menu__sticker-option"
                                        on:click=move |_| {
                                            on_sticker.run(emoji.clone());
                                            submenu.set(SubMenu::None);
                                        }
                                    >
                                        {label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
