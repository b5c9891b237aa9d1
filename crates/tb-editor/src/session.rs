//! Editor session state.
//!
//! `EditorState` owns the canvas, viewport, history, selection, toolbar and
//! drag controller as one explicit value — no module-level globals — so
//! multiple independent editors can coexist and tests can drive the whole
//! flow without a host. All mutations happen synchronously inside the
//! handler that received the event; a handler always runs to completion
//! before the next event arrives.
//!
//! The `bool` results tell the host when to re-render (or, for key events,
//! when to suppress the default behavior).

use crate::commands::StyleCommand;
use crate::drag::{DragController, Guides};
use crate::history::{DEFAULT_HISTORY_DEPTH, History};
use crate::input::{ClickTarget, InputEvent};
use crate::selection::{Selection, ToolbarState};
use crate::shortcuts::{EditorAction, ShortcutMap};
use tb_core::geometry::{Point, Size, Viewport};
use tb_core::id::BlockId;
use tb_core::model::{Canvas, TextBlock};

/// Content of the starter block inserted on load.
pub const DEFAULT_TEXT: &str = "Welcome to the Editor! Click to edit.";

/// Content of blocks created by the add-text control.
pub const NEW_BLOCK_TEXT: &str = "Click to edit";

const DEFAULT_BLOCK_POSITION: Point = Point::new(20.0, 20.0);
const NEW_BLOCK_POSITION: Point = Point::new(50.0, 50.0);

/// One editor instance: the whole mutable state behind a canvas.
#[derive(Debug, Clone)]
pub struct EditorState {
    canvas: Canvas,
    viewport: Viewport,
    history: History,
    selection: Selection,
    toolbar: ToolbarState,
    drag: DragController,
}

impl EditorState {
    /// An empty editor. The empty canvas is checkpointed immediately so
    /// undo always has a floor to return to.
    pub fn new(viewport: Viewport) -> Self {
        Self::with_toolbar(viewport, ToolbarState::new())
    }

    /// An empty editor with a custom font selector list.
    pub fn with_fonts<I, S>(viewport: Viewport, fonts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_toolbar(viewport, ToolbarState::with_fonts(fonts))
    }

    fn with_toolbar(viewport: Viewport, toolbar: ToolbarState) -> Self {
        let canvas = Canvas::new();
        let mut history = History::new(DEFAULT_HISTORY_DEPTH);
        history.checkpoint(&canvas);
        Self {
            canvas,
            viewport,
            history,
            selection: Selection::new(),
            toolbar,
            drag: DragController::new(),
        }
    }

    /// Insert the fixed starter block, select it, and checkpoint. Hosts
    /// call this once on load, after `new`.
    pub fn load_default_content(&mut self) -> BlockId {
        self.insert_block(DEFAULT_TEXT, DEFAULT_BLOCK_POSITION)
    }

    /// The add-text control: a fresh block, selected, checkpointed.
    pub fn add_text(&mut self) -> BlockId {
        self.insert_block(NEW_BLOCK_TEXT, NEW_BLOCK_POSITION)
    }

    fn insert_block(&mut self, content: &str, position: Point) -> BlockId {
        let id = self.canvas.add_block(TextBlock::new(content, position));
        self.selection.select(id, &self.canvas, &mut self.toolbar);
        self.history.checkpoint(&self.canvas);
        log::debug!("inserted block {id} at ({}, {})", position.x, position.y);
        id
    }

    // ─── Event entry points ──────────────────────────────────────────────

    /// Single-entry dispatch for hosts that prefer one call site.
    /// Returns whether the event had an effect the host must mirror.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::PointerDown {
                block,
                x,
                y,
                width,
                height,
            } => self.pointer_down(*block, *x, *y, Size::new(*width, *height)),
            InputEvent::PointerMove { x, y } => self.pointer_move(*x, *y),
            InputEvent::PointerUp => self.pointer_up(),
            InputEvent::Click { target } => self.click(*target),
            InputEvent::Key {
                key,
                ctrl,
                shift,
                meta,
            } => self.key(key, *ctrl, *shift, *meta),
        }
    }

    /// Pointer-down on a block: begin the drag gesture and select the
    /// block. `extent` is the block's rendered size measured by the host.
    pub fn pointer_down(&mut self, id: BlockId, x: f32, y: f32, extent: Size) -> bool {
        if !self.drag.begin(&mut self.canvas, id, x, y, extent) {
            return false;
        }
        self.selection.select(id, &self.canvas, &mut self.toolbar);
        true
    }

    /// Pointer-move: reclamp and reposition mid-gesture. Never checkpoints.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.drag.update(&mut self.canvas, self.viewport, x, y)
    }

    /// Pointer-up: end the gesture and checkpoint the final resting
    /// position — the single snapshot for the whole drag. No-op without an
    /// active gesture.
    pub fn pointer_up(&mut self) -> bool {
        if !self.drag.finish(&mut self.canvas) {
            return false;
        }
        self.history.checkpoint(&self.canvas);
        true
    }

    /// Document-wide click routing: clears the selection when the click
    /// landed outside both the blocks and the toolbar.
    pub fn click(&mut self, target: ClickTarget) -> bool {
        self.selection.deselect_if_outside(target)
    }

    /// Apply a style command to the selected block and checkpoint. With no
    /// selection this is a no-op, not an error.
    pub fn apply_style(&mut self, command: &StyleCommand) -> bool {
        let Some(id) = self.selection.current() else {
            return false;
        };
        let Some(block) = self.canvas.block_mut(id) else {
            return false;
        };
        command.apply(&mut block.style);
        self.toolbar.sync_to(&block.style);
        self.history.checkpoint(&self.canvas);
        true
    }

    /// Live content edit from the host's editable region. Deliberately not
    /// checkpointed — the edit rides along with the next snapshot, the way
    /// contenteditable edits always have.
    pub fn set_block_text(&mut self, id: BlockId, text: &str) -> bool {
        let Some(block) = self.canvas.block_mut(id) else {
            return false;
        };
        block.content = text.to_string();
        true
    }

    /// Key-down routing for the undo/redo combos. Returns whether the host
    /// must suppress the default behavior (true for a bound combo even when
    /// the stack had nothing to do).
    pub fn key(&mut self, key: &str, ctrl: bool, shift: bool, meta: bool) -> bool {
        match ShortcutMap::resolve(key, ctrl, shift, meta) {
            Some(EditorAction::Undo) => {
                self.undo();
                true
            }
            Some(EditorAction::Redo) => {
                self.redo();
                true
            }
            None => false,
        }
    }

    // ─── History ─────────────────────────────────────────────────────────

    /// Step back one snapshot. Returns whether the canvas changed and the
    /// host must re-render.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.restore(snapshot);
        log::debug!("undo -> {} block(s)", self.canvas.len());
        true
    }

    /// Step forward one snapshot.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.restore(snapshot);
        log::debug!("redo -> {} block(s)", self.canvas.len());
        true
    }

    /// Replace the canvas and reconcile everything that refers into it:
    /// an in-flight drag is aborted without a checkpoint, a selection whose
    /// block vanished is cleared, and a surviving selection resyncs the
    /// toolbar to the restored style.
    fn restore(&mut self, snapshot: Canvas) {
        self.drag.abort(&mut self.canvas);
        self.canvas = snapshot;
        if self.selection.retain_existing(&self.canvas)
            && let Some(id) = self.selection.current()
            && let Some(block) = self.canvas.block(id)
        {
            self.toolbar.sync_to(&block.style);
        }
    }

    // ─── Accessors for the rendering collaborator ────────────────────────

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn toolbar(&self) -> &ToolbarState {
        &self.toolbar
    }

    pub fn selected(&self) -> Option<BlockId> {
        self.selection.current()
    }

    pub fn guides(&self) -> Guides {
        self.drag.guides()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn boot_inserts_selected_default_block() {
        let mut editor = EditorState::new(Viewport::default());
        let id = editor.load_default_content();

        assert_eq!(editor.canvas().len(), 1);
        let block = editor.canvas().block(id).unwrap();
        assert_eq!(block.content, DEFAULT_TEXT);
        assert_eq!(block.position, Point::new(20.0, 20.0));
        assert_eq!(editor.selected(), Some(id));
        // Floor checkpoint plus the default-content checkpoint.
        assert_eq!(editor.history().depth(), 2);
    }

    #[test]
    fn style_command_without_selection_is_noop() {
        let mut editor = EditorState::new(Viewport::default());
        let id = editor.load_default_content();
        editor.click(ClickTarget::Outside);

        let depth = editor.history().depth();
        assert!(!editor.apply_style(&StyleCommand::ToggleBold));
        assert_eq!(editor.history().depth(), depth);
        assert!(!editor.canvas().block(id).unwrap().style.weight.is_bold());
    }

    #[test]
    fn style_command_checkpoints_and_syncs_toolbar() {
        let mut editor = EditorState::new(Viewport::default());
        let id = editor.load_default_content();

        let depth = editor.history().depth();
        assert!(editor.apply_style(&StyleCommand::IncreaseFontSize));
        assert_eq!(editor.history().depth(), depth + 1);

        let size = editor.canvas().block(id).unwrap().style.size_px;
        assert_eq!(editor.toolbar().size_px, size);
    }

    #[test]
    fn bound_key_combo_is_consumed_even_at_the_floor() {
        let mut editor = EditorState::new(Viewport::default());
        // Nothing to undo, but the combo still suppresses the host default.
        assert!(editor.key("z", true, false, false));
        assert!(!editor.key("z", false, false, false));
    }

    #[test]
    fn text_edit_rides_along_with_next_checkpoint() {
        let mut editor = EditorState::new(Viewport::default());
        let id = editor.load_default_content();

        let depth = editor.history().depth();
        assert!(editor.set_block_text(id, "edited"));
        // No checkpoint of its own...
        assert_eq!(editor.history().depth(), depth);

        // ...but the next discrete mutation snapshots the edited content.
        editor.apply_style(&StyleCommand::ToggleItalic);
        editor.undo();
        editor.redo();
        assert_eq!(editor.canvas().block(id).unwrap().content, "edited");
    }
}
