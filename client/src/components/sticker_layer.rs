//! Sticker decoration layer.
//!
//! Drag and resize both follow the same shape: pointer-down on a sticker
//! captures the pointer on the sticker element and starts a gesture in the
//! engine's state machine; pointermove drives it and pointerup/pointercancel
//! finish it. Pointer capture keeps the events flowing to the sticker even
//! when fast pointer travel leaves the element or the surface, so a gesture
//! can never be dropped mid-drag.

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use giftbook::gesture::{GestureState, GestureUpdate, Point, Size};
use giftbook::model::{StickerId, StickerPlacement};
use giftbook::session::SessionState;

/// Surface frame captured at pointer-down: page-space origin plus size, so
/// pointer events can be translated into surface-local coordinates
/// mid-gesture without re-reading layout.
#[derive(Debug, Clone, Copy)]
struct SurfaceFrame {
    origin: Point,
    size: Size,
}

impl Default for SurfaceFrame {
    fn default() -> Self {
        Self {
            origin: Point::new(0.0, 0.0),
            size: Size::new(0.0, 0.0),
        }
    }
}

/// Measure the decoration surface. Before layout (or off-browser) this
/// falls back to the book page's natural proportions.
#[must_use]
pub fn surface_size(surface_ref: NodeRef<Div>) -> Size {
    surface_ref.get_untracked().map_or_else(
        || Size::new(300.0, 450.0),
        |el| {
            let rect = el.get_bounding_client_rect();
            Size::new(rect.width(), rect.height())
        },
    )
}

fn surface_frame(surface_ref: NodeRef<Div>) -> Option<SurfaceFrame> {
    let el = surface_ref.get_untracked()?;
    let rect = el.get_bounding_client_rect();
    Some(SurfaceFrame {
        origin: Point::new(rect.left(), rect.top()),
        size: Size::new(rect.width(), rect.height()),
    })
}

fn local_point(frame: SurfaceFrame, ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(
        f64::from(ev.client_x()) - frame.origin.x,
        f64::from(ev.client_y()) - frame.origin.y,
    )
}

fn capture_target(ev: &leptos::ev::PointerEvent) -> Option<web_sys::Element> {
    ev.current_target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
}

/// Footprint of the sticker element under the pointer, for clamping. Falls
/// back to an emoji-proportional estimate when the target is unmeasurable.
fn measured_sticker_size(ev: &leptos::ev::PointerEvent, font_size: f64) -> Size {
    ev.current_target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlElement>().ok())
        .map_or_else(
            || Size::new(font_size * 1.2, font_size * 1.2),
            |el| Size::new(f64::from(el.offset_width()), f64::from(el.offset_height())),
        )
}

/// Editable sticker layer covering the decoration surface.
#[component]
pub fn StickerLayer(
    session: RwSignal<SessionState>,
    /// The decoration surface; positions are local to it.
    surface_ref: NodeRef<Div>,
) -> impl IntoView {
    let gesture = StoredValue::new(GestureState::default());
    let frame = StoredValue::new(SurfaceFrame::default());

    let begin_drag = move |id: StickerId, ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        let Some(current) = surface_frame(surface_ref) else {
            return;
        };
        let Some((origin_pos, font_size)) = session.with_untracked(|s| {
            s.sticker(id).map(|placed| {
                (
                    Point::new(placed.placement.left, placed.placement.top),
                    placed.placement.font_size,
                )
            })
        }) else {
            return;
        };
        let pointer = local_point(current, &ev);
        let sticker_size = measured_sticker_size(&ev, font_size);
        let mut started = false;
        gesture.update_value(|g| {
            started = g.begin_drag(id, pointer, origin_pos, sticker_size);
        });
        if started {
            frame.set_value(current);
            if let Some(el) = capture_target(&ev) {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let begin_resize = move |id: StickerId, ev: leptos::ev::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        let Some(current) = surface_frame(surface_ref) else {
            return;
        };
        let Some(font_size) =
            session.with_untracked(|s| s.sticker(id).map(|placed| placed.placement.font_size))
        else {
            return;
        };
        let pointer = local_point(current, &ev);
        let mut started = false;
        gesture.update_value(|g| {
            started = g.begin_resize(id, pointer, font_size);
        });
        if started {
            frame.set_value(current);
            // Capture on the handle; move/up events bubble to the sticker.
            if let Some(el) = capture_target(&ev) {
                let _ = el.set_pointer_capture(ev.pointer_id());
            }
        }
    };

    let track = move |ev: leptos::ev::PointerEvent| {
        let pointer = local_point(frame.get_value(), &ev);
        let update = gesture.get_value().pointer_move(pointer, frame.get_value().size);
        if let Some(update) = update {
            session.update(|s| match update {
                GestureUpdate::Moved { sticker, left, top } => {
                    s.move_sticker(sticker, left, top);
                }
                GestureUpdate::Sized { sticker, font_size } => {
                    s.resize_sticker(sticker, font_size);
                }
            });
        }
    };

    let finish = move |ev: leptos::ev::PointerEvent| {
        if let Some(el) = capture_target(&ev) {
            let _ = el.release_pointer_capture(ev.pointer_id());
        }
        gesture.update_value(|g| {
            g.finish();
        });
    };

    let remove = move |id: StickerId| {
        session.update(|s| {
            s.remove_sticker(id);
        });
    };

    // Keyed rendering keeps each sticker's DOM node stable across updates;
    // recreating the node mid-gesture would drop its pointer capture.
    view! {
        <div class="sticker-layer">
            <For
                each=move || {
                    session.with(|s| s.stickers().iter().map(|p| p.id).collect::<Vec<_>>())
                }
                key=|id| *id
                children=move |id: StickerId| {
                    let placement = move |f: fn(&StickerPlacement) -> f64| {
                        session.with(|s| s.sticker(id).map_or(0.0, |p| f(&p.placement)))
                    };
                    let emoji = move || {
                        session
                            .with(|s| s.sticker(id).map(|p| p.placement.emoji.clone()))
                            .unwrap_or_default()
                    };
                    view! {
                        <div
                            class="sticker"
                            style:left=move || format!("{}px", placement(|p| p.left))
                            style:top=move || format!("{}px", placement(|p| p.top))
                            on:pointerdown=move |ev| begin_drag(id, ev)
                            on:pointermove=track
                            on:pointerup=finish
                            on:pointercancel=finish
                        >
                            <span
                                class="sticker__emoji"
                                style:font-size=move || {
                                    format!("{}px", placement(|p| p.font_size))
                                }
                            >
                                {emoji}
                            </span>
                            <button
                                class="sticker__remove"
                                on:pointerdown=move |ev| ev.stop_propagation()
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    remove(id);
                                }
                            >
                                "✕"
                            </button>
                            <span
                                class="sticker__resize"
                                on:pointerdown=move |ev| begin_resize(id, ev)
                            ></span>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Read-only sticker rendering for the share preview and view-only page.
#[component]
pub fn StaticStickers(stickers: Vec<StickerPlacement>) -> impl IntoView {
    view! {
        <div class="sticker-layer sticker-layer--static">
            {stickers
                .into_iter()
                .map(|placement| {
                    view! {
                        <div
                            class="sticker sticker--static"
                            style:left=format!("{}px", placement.left)
                            style:top=format!("{}px", placement.top)
                        >
                            <span
                                class="sticker__emoji"
                                style:font-size=format!("{}px", placement.font_size)
                            >
                                {placement.emoji}
                            </span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
