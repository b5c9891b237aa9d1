//! Snapshot-based undo/redo history.
//!
//! Every discrete mutation (add block, end of drag, style change)
//! checkpoints the whole canvas as a deep-copied value. Continuous pointer
//! movement never checkpoints — a drag gesture contributes exactly one
//! entry when it ends.
//!
//! The top of the past stack is the *current* canvas representation; undo
//! moves it to the redo stack and restores the entry beneath it. The oldest
//! retained entry is the floor — undo never goes past it.

use tb_core::model::Canvas;

/// Default maximum undo depth.
pub const DEFAULT_HISTORY_DEPTH: usize = 100;

/// Manages the undo/redo snapshot stacks.
#[derive(Debug, Clone)]
pub struct History {
    past: Vec<Canvas>,
    future: Vec<Canvas>,
    /// Maximum undo depth; oldest entries are trimmed beyond it.
    max_depth: usize,
}

impl History {
    pub fn new(max_depth: usize) -> Self {
        Self {
            past: Vec::with_capacity(max_depth.min(DEFAULT_HISTORY_DEPTH)),
            future: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Push a snapshot of `canvas` onto the past stack and discard any redo
    /// candidates. Called once per discrete mutation.
    pub fn checkpoint(&mut self, canvas: &Canvas) {
        self.past.push(canvas.clone());
        if self.past.len() > self.max_depth {
            self.past.remove(0);
        }
        self.future.clear();
    }

    /// Step back one snapshot. Returns the canvas to restore, or `None` at
    /// the floor (the initial state is never undone past).
    pub fn undo(&mut self) -> Option<Canvas> {
        if self.past.len() <= 1 {
            return None;
        }
        let current = self.past.pop()?;
        self.future.push(current);
        // The new top stays on the stack as the current representation.
        self.past.last().cloned()
    }

    /// Step forward one snapshot. Returns the canvas to restore, or `None`
    /// if nothing was undone.
    pub fn redo(&mut self) -> Option<Canvas> {
        let snapshot = self.future.pop()?;
        self.past.push(snapshot.clone());
        Some(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        self.past.len() > 1
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Number of retained past snapshots, floor included.
    pub fn depth(&self) -> usize {
        self.past.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tb_core::geometry::Point;
    use tb_core::model::TextBlock;

    fn canvas_with(texts: &[&str]) -> Canvas {
        let mut canvas = Canvas::new();
        for text in texts {
            canvas.add_block(TextBlock::new(*text, Point::default()));
        }
        canvas
    }

    #[test]
    fn undo_walks_back_to_floor_then_stops() {
        let mut history = History::default();
        let floor = canvas_with(&[]);
        let s1 = canvas_with(&["one"]);
        let s2 = canvas_with(&["one", "two"]);

        history.checkpoint(&floor);
        history.checkpoint(&s1);
        history.checkpoint(&s2);

        assert_eq!(history.undo(), Some(s1.clone()));
        assert_eq!(history.undo(), Some(floor.clone()));
        // At the floor: a further undo is a no-op.
        assert_eq!(history.undo(), None);
        assert!(!history.can_undo());
    }

    #[test]
    fn undo_then_redo_restores_exactly() {
        let mut history = History::default();
        let floor = canvas_with(&[]);
        let s1 = canvas_with(&["one"]);

        history.checkpoint(&floor);
        history.checkpoint(&s1);

        assert_eq!(history.undo(), Some(floor));
        assert_eq!(history.redo(), Some(s1.clone()));
        // Back on top: undo works again and redo is exhausted.
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn checkpoint_clears_redo_candidates() {
        let mut history = History::default();
        history.checkpoint(&canvas_with(&[]));
        history.checkpoint(&canvas_with(&["one"]));

        history.undo();
        assert!(history.can_redo());

        history.checkpoint(&canvas_with(&["other"]));
        assert!(!history.can_redo());
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn redo_on_empty_stack_is_noop() {
        let mut history = History::default();
        history.checkpoint(&canvas_with(&[]));
        assert_eq!(history.redo(), None);
        assert!(!history.can_redo());
    }

    #[test]
    fn depth_cap_trims_oldest() {
        let mut history = History::new(3);
        for i in 0..5 {
            history.checkpoint(&canvas_with(&[&i.to_string()]));
        }
        assert_eq!(history.depth(), 3);

        // Only two undos remain above the (shifted) floor.
        let mut undo_count = 0;
        while history.undo().is_some() {
            undo_count += 1;
        }
        assert_eq!(undo_count, 2);
    }
}
