//! Input abstraction layer.
//!
//! Normalizes host pointer, click, and keyboard events into a unified
//! `InputEvent` enum consumed by the session. The host stays responsible
//! for event targeting (which block a pointer-down landed on, whether a
//! click fell on a toolbar control) and for layout measurement.

use tb_core::geometry::Size;
use tb_core::id::BlockId;

/// A normalized input event from the host environment.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed on a block's own region (not on a nested control
    /// that consumes the event itself). `width`/`height` are the block's
    /// rendered extent measured by the host at press time.
    PointerDown {
        block: BlockId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },

    /// Pointer moved. Only meaningful mid-gesture; ignored otherwise.
    PointerMove { x: f32, y: f32 },

    /// Pointer released. Capture is global for the gesture, so no position
    /// is carried — the block rests wherever the last move clamped it.
    PointerUp,

    /// Document-wide click, used for deselection.
    Click { target: ClickTarget },

    /// Key-down with modifier state.
    Key {
        key: String,
        ctrl: bool,
        shift: bool,
        meta: bool,
    },
}

impl InputEvent {
    /// Extract position if this is a pointer event.
    pub fn position(&self) -> Option<(f32, f32)> {
        match self {
            Self::PointerDown { x, y, .. } | Self::PointerMove { x, y } => Some((*x, *y)),
            _ => None,
        }
    }

    /// The measured extent carried by a pointer-down.
    pub fn extent(&self) -> Option<Size> {
        match self {
            Self::PointerDown { width, height, .. } => Some(Size::new(*width, *height)),
            _ => None,
        }
    }
}

/// What a document-wide click landed on, as classified by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// A text block (or anything nested inside one).
    Block(BlockId),
    /// Any toolbar control.
    Toolbar,
    /// Empty canvas or anything else — clears the selection.
    Outside,
}
