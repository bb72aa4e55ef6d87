//! Pointer gesture state machine for dragging and resizing stickers.
//!
//! `GestureState` is the active gesture being tracked between pointer-down
//! and pointer-up, carrying the context needed to compute incremental
//! updates: the grab offset for drags (so the sticker does not jump when the
//! gesture starts) and the starting point plus starting font size for
//! resizes. Exactly one gesture is active at a time; `begin_*` only succeed
//! from `Idle`, which makes drag and resize mutually exclusive.
//!
//! All coordinates are CSS pixels local to the decoration surface. Mouse and
//! touch input both arrive here as a single logical pointer.

#[cfg(test)]
#[path = "gesture_test.rs"]
mod gesture_test;

use crate::consts::{MAX_STICKER_FONT_PX, MIN_STICKER_FONT_PX, RESIZE_SENSITIVITY};
use crate::model::StickerId;

/// A point in surface-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of the decoration surface or a sticker element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Clamp a desired top-left position so the sticker stays fully inside the
/// surface. When the surface is smaller than the sticker the lower bound
/// wins and the sticker pins to the origin edge.
#[must_use]
pub fn clamp_position(desired: Point, surface: Size, sticker: Size) -> Point {
    let max_x = surface.width - sticker.width;
    let max_y = surface.height - sticker.height;
    Point {
        x: desired.x.min(max_x).max(0.0),
        y: desired.y.min(max_y).max(0.0),
    }
}

/// Top-left position that centers a sticker within the surface.
#[must_use]
pub fn centered_position(surface: Size, sticker: Size) -> Point {
    Point {
        x: surface.width / 2.0 - sticker.width / 2.0,
        y: surface.height / 2.0 - sticker.height / 2.0,
    }
}

/// New font size for a resize gesture: horizontal and vertical travel from
/// the gesture's start point are combined, scaled by the fixed sensitivity
/// factor, and the result is clamped to the allowed size range.
#[must_use]
pub fn scaled_font(start_font: f64, start: Point, pointer: Point) -> f64 {
    let delta = (pointer.x - start.x) + (pointer.y - start.y);
    (start_font + delta * RESIZE_SENSITIVITY).clamp(MIN_STICKER_FONT_PX, MAX_STICKER_FONT_PX)
}

/// Placement change produced by a pointer-move during an active gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureUpdate {
    /// The dragged sticker has a new clamped top-left position.
    Moved { sticker: StickerId, left: f64, top: f64 },
    /// The resized sticker has a new clamped font size.
    Sized { sticker: StickerId, font_size: f64 },
}

/// The active gesture, if any.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A sticker is being moved across the surface.
    Dragging {
        /// Id of the sticker being dragged.
        sticker: StickerId,
        /// Pointer offset from the sticker's top-left at pointer-down.
        grab: Point,
        /// Sticker element size at pointer-down, used for clamping.
        sticker_size: Size,
    },
    /// A sticker's emoji is being scaled from its resize handle.
    Resizing {
        /// Id of the sticker being resized.
        sticker: StickerId,
        /// Pointer position at pointer-down.
        start: Point,
        /// Font size at pointer-down.
        start_font: f64,
    },
}

impl GestureState {
    /// Start dragging a sticker. `origin` is the sticker's current top-left.
    /// Returns false (and changes nothing) if another gesture is active.
    pub fn begin_drag(
        &mut self,
        sticker: StickerId,
        pointer: Point,
        origin: Point,
        sticker_size: Size,
    ) -> bool {
        if !matches!(self, Self::Idle) {
            return false;
        }
        *self = Self::Dragging {
            sticker,
            grab: Point::new(pointer.x - origin.x, pointer.y - origin.y),
            sticker_size,
        };
        true
    }

    /// Start resizing a sticker from its current font size.
    /// Returns false (and changes nothing) if another gesture is active.
    pub fn begin_resize(&mut self, sticker: StickerId, pointer: Point, current_font: f64) -> bool {
        if !matches!(self, Self::Idle) {
            return false;
        }
        *self = Self::Resizing { sticker, start: pointer, start_font: current_font };
        true
    }

    /// Compute the placement update for a pointer-move, or `None` when idle.
    #[must_use]
    pub fn pointer_move(&self, pointer: Point, surface: Size) -> Option<GestureUpdate> {
        match *self {
            Self::Idle => None,
            Self::Dragging { sticker, grab, sticker_size } => {
                let desired = Point::new(pointer.x - grab.x, pointer.y - grab.y);
                let clamped = clamp_position(desired, surface, sticker_size);
                Some(GestureUpdate::Moved { sticker, left: clamped.x, top: clamped.y })
            }
            Self::Resizing { sticker, start, start_font } => Some(GestureUpdate::Sized {
                sticker,
                font_size: scaled_font(start_font, start, pointer),
            }),
        }
    }

    /// End the active gesture, returning the sticker it was acting on.
    pub fn finish(&mut self) -> Option<StickerId> {
        let sticker = match *self {
            Self::Idle => None,
            Self::Dragging { sticker, .. } | Self::Resizing { sticker, .. } => Some(sticker),
        };
        *self = Self::Idle;
        sticker
    }

    /// Whether a gesture is currently in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
