//! Core data model for a TextBoard canvas.
//!
//! The canvas is a flat, ordered sequence of text blocks. Paint order follows
//! document order, except that at most one block may be *raised* above the
//! rest while a drag gesture is in flight. Undo works on whole-canvas
//! snapshots, so everything here is plain cloneable value data — a snapshot
//! is a `Canvas` clone, nothing more.

use crate::geometry::Point;
use crate::id::BlockId;
use serde::{Deserialize, Serialize};

/// Font the toolbar falls back to when a block's family matches nothing.
pub const FALLBACK_FONT: &str = "Arial";

/// Font sizes never go below this (decreasing at the floor is a no-op).
pub const MIN_FONT_SIZE: u32 = 1;

/// Size newly created blocks render at, matching the browser default.
pub const DEFAULT_FONT_SIZE: u32 = 16;

// ─── Style keywords ──────────────────────────────────────────────────────

/// CSS `font-weight` keyword, reduced to the two states the toolbar toggles
/// between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    /// Parse a host-supplied computed value. Only the exact keyword counts
    /// as bold; anything else (numeric weights included) is the off state,
    /// so a toggle from it lands on bold.
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "bold" => FontWeight::Bold,
            _ => FontWeight::Normal,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            FontWeight::Normal => FontWeight::Bold,
            FontWeight::Bold => FontWeight::Normal,
        }
    }

    pub fn is_bold(self) -> bool {
        self == FontWeight::Bold
    }
}

/// CSS `font-style` keyword (italic toggle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontSlant {
    #[default]
    Normal,
    Italic,
}

impl FontSlant {
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "italic" => FontSlant::Italic,
            _ => FontSlant::Normal,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            FontSlant::Normal => "normal",
            FontSlant::Italic => "italic",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            FontSlant::Normal => FontSlant::Italic,
            FontSlant::Italic => FontSlant::Normal,
        }
    }

    pub fn is_italic(self) -> bool {
        self == FontSlant::Italic
    }
}

/// CSS `text-decoration` keyword (underline toggle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextDecoration {
    #[default]
    None,
    Underline,
}

impl TextDecoration {
    pub fn from_css(value: &str) -> Self {
        match value.trim() {
            "underline" => TextDecoration::Underline,
            _ => TextDecoration::None,
        }
    }

    pub fn as_css(self) -> &'static str {
        match self {
            TextDecoration::None => "none",
            TextDecoration::Underline => "underline",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            TextDecoration::None => TextDecoration::Underline,
            TextDecoration::Underline => TextDecoration::None,
        }
    }

    pub fn is_underline(self) -> bool {
        self == TextDecoration::Underline
    }
}

// ─── Text style ──────────────────────────────────────────────────────────

/// The four stylable attributes of a block (size counts the ± pair as one).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Integer pixel size; stepped ±1, floored at [`MIN_FONT_SIZE`].
    pub size_px: u32,
    /// Font family string as the host supplied it — may be a quoted,
    /// comma-separated stack. Never validated against a whitelist.
    pub family: String,
    pub weight: FontWeight,
    pub slant: FontSlant,
    pub decoration: TextDecoration,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size_px: DEFAULT_FONT_SIZE,
            family: FALLBACK_FONT.to_string(),
            weight: FontWeight::default(),
            slant: FontSlant::default(),
            decoration: TextDecoration::default(),
        }
    }
}

// ─── Blocks ──────────────────────────────────────────────────────────────

/// A single positioned, styled text element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub id: BlockId,
    /// Editable text content. Live edits do not checkpoint on their own —
    /// they ride along with the next snapshot.
    pub content: String,
    /// Top-left corner within the container, px.
    pub position: Point,
    pub style: TextStyle,
    /// Lifted above all siblings while a drag gesture is in flight.
    pub raised: bool,
}

impl TextBlock {
    pub fn new(content: impl Into<String>, position: Point) -> Self {
        Self {
            id: BlockId::next(),
            content: content.into(),
            position,
            style: TextStyle::default(),
            raised: false,
        }
    }
}

// ─── Canvas ──────────────────────────────────────────────────────────────

/// The root container: an ordered sequence of blocks. Owns every block;
/// everything else refers to them by [`BlockId`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    blocks: Vec<TextBlock>,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a block and return its ID.
    pub fn add_block(&mut self, block: TextBlock) -> BlockId {
        let id = block.id;
        self.blocks.push(block);
        id
    }

    pub fn block(&self, id: BlockId) -> Option<&TextBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut TextBlock> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.block(id).is_some()
    }

    /// Blocks in document (paint) order.
    pub fn blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Lift `id` above all other blocks. Any previously raised block drops
    /// back first — at most one block is raised at a time.
    pub fn raise(&mut self, id: BlockId) {
        for block in &mut self.blocks {
            block.raised = block.id == id;
        }
    }

    /// Drop every block back to document-order stacking.
    pub fn clear_raised(&mut self) {
        for block in &mut self.blocks {
            block.raised = false;
        }
    }

    pub fn raised(&self) -> Option<BlockId> {
        self.blocks.iter().find(|b| b.raised).map(|b| b.id)
    }
}
