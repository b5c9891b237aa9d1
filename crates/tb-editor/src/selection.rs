//! Selection tracking and toolbar reconciliation.
//!
//! At most one block is selected at a time. Selecting a block synchronizes
//! the toolbar's displayed values from the block's style; deselection keeps
//! the last values showing. Style commands read the selection but never own
//! the blocks — everything goes through [`BlockId`].

use crate::input::ClickTarget;
use serde::Serialize;
use smallvec::SmallVec;
use tb_core::id::BlockId;
use tb_core::model::{Canvas, FALLBACK_FONT, TextStyle};

/// Families offered by the stock font selector.
pub const DEFAULT_FONTS: [&str; 6] = [
    "Arial",
    "Verdana",
    "Helvetica",
    "Times New Roman",
    "Georgia",
    "Courier New",
];

/// The style values the toolbar currently displays, mirrored by the host.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolbarState {
    pub size_px: u32,
    /// The matched entry from the font list (best-effort, see [`ToolbarState::sync_to`]).
    pub family: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    fonts: SmallVec<[String; 8]>,
}

impl ToolbarState {
    pub fn new() -> Self {
        Self::with_fonts(DEFAULT_FONTS)
    }

    pub fn with_fonts<I, S>(fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let style = TextStyle::default();
        let mut toolbar = Self {
            size_px: style.size_px,
            family: FALLBACK_FONT.to_string(),
            bold: false,
            italic: false,
            underline: false,
            fonts: fonts.into_iter().map(Into::into).collect(),
        };
        toolbar.sync_to(&style);
        toolbar
    }

    /// The selectable font list, in display order.
    pub fn fonts(&self) -> &[String] {
        &self.fonts
    }

    /// Refresh every displayed value from `style`.
    ///
    /// Family matching is best-effort: quotes are stripped from the block's
    /// family string, then the first list entry *contained* in it wins, so a
    /// stack like `"Courier New", monospace` still lights up "Courier New".
    /// No match falls back to [`FALLBACK_FONT`] rather than leaving the
    /// selector blank.
    pub fn sync_to(&mut self, style: &TextStyle) {
        self.size_px = style.size_px;
        self.family = self.match_font(&style.family);
        self.bold = style.weight.is_bold();
        self.italic = style.slant.is_italic();
        self.underline = style.decoration.is_underline();
    }

    fn match_font(&self, computed: &str) -> String {
        let family = computed.replace(['\'', '"'], "");
        self.fonts
            .iter()
            .find(|font| family.contains(font.as_str()))
            .cloned()
            .unwrap_or_else(|| FALLBACK_FONT.to_string())
    }
}

impl Default for ToolbarState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks which single block is active.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<BlockId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<BlockId> {
        self.current
    }

    /// Select `id`, replacing any previous selection, and sync the toolbar
    /// to the block's style. Selecting a block that does not exist is a
    /// no-op; returns whether the selection took.
    pub fn select(&mut self, id: BlockId, canvas: &Canvas, toolbar: &mut ToolbarState) -> bool {
        let Some(block) = canvas.block(id) else {
            return false;
        };
        self.current = Some(id);
        toolbar.sync_to(&block.style);
        true
    }

    /// Clear the selection if the click landed outside both the blocks and
    /// the toolbar. Returns whether anything changed.
    pub fn deselect_if_outside(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Block(_) | ClickTarget::Toolbar => false,
            ClickTarget::Outside => self.current.take().is_some(),
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Drop the selection when its block is no longer on the canvas.
    /// Used after a snapshot restore. Returns whether the selection survived.
    pub fn retain_existing(&mut self, canvas: &Canvas) -> bool {
        match self.current {
            Some(id) if canvas.contains(id) => true,
            _ => {
                self.current = None;
                false
            }
        }
    }
}
