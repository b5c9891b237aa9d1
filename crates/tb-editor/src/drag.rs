//! Drag gesture state machine.
//!
//! One gesture: pointer-down on a block begins a session, every move
//! reclamps and writes the block's position, pointer-up ends the session.
//! The session owns the grab offset and the block extent measured at
//! gesture start; the guideline indicators track the clamped position the
//! whole way.
//!
//! Moves never checkpoint. The controller reports when a gesture actually
//! ended so the caller can push the single end-of-drag snapshot.

use serde::Serialize;
use tb_core::geometry::{Point, Size, Viewport, clamp_to_container};
use tb_core::id::BlockId;
use tb_core::model::Canvas;

/// Ephemeral per-gesture state. Exists only between pointer-down and
/// pointer-up.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub target: BlockId,
    /// Pointer position minus the block's top-left at gesture start.
    grab_dx: f32,
    grab_dy: f32,
    /// Block extent measured by the host at gesture start.
    extent: Size,
}

/// Guideline indicator state for the rendering collaborator: a vertical
/// line at `x` and a horizontal line at `y` while visible.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Guides {
    pub visible: bool,
    pub x: f32,
    pub y: f32,
}

impl Guides {
    fn at(position: Point) -> Self {
        Self {
            visible: true,
            x: position.x,
            y: position.y,
        }
    }
}

/// Per-editor drag state: IDLE (no session) or DRAGGING (one session).
#[derive(Debug, Clone, Default)]
pub struct DragController {
    session: Option<DragSession>,
    guides: Guides,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn guides(&self) -> Guides {
        self.guides
    }

    /// IDLE → DRAGGING. Captures the grab offset against the block's
    /// current position, raises the block, and shows the guides there.
    /// Returns `false` (and stays IDLE) when the block does not exist.
    pub fn begin(
        &mut self,
        canvas: &mut Canvas,
        id: BlockId,
        px: f32,
        py: f32,
        extent: Size,
    ) -> bool {
        let Some(block) = canvas.block(id) else {
            return false;
        };
        let origin = block.position;
        self.session = Some(DragSession {
            target: id,
            grab_dx: px - origin.x,
            grab_dy: py - origin.y,
            extent,
        });
        canvas.raise(id);
        self.guides = Guides::at(origin);
        log::trace!("drag begin on {id} at ({px}, {py})");
        true
    }

    /// Recompute and write the clamped position for a pointer move.
    /// Ignored (returns `false`) when no session is active — including a
    /// move that arrives out of order after pointer-up.
    pub fn update(&mut self, canvas: &mut Canvas, container: Viewport, px: f32, py: f32) -> bool {
        let Some(session) = &self.session else {
            return false;
        };
        let candidate = Point::new(px - session.grab_dx, py - session.grab_dy);
        let clamped = clamp_to_container(candidate, session.extent, container);
        let Some(block) = canvas.block_mut(session.target) else {
            return false;
        };
        block.position = clamped;
        self.guides = Guides::at(clamped);
        true
    }

    /// DRAGGING → IDLE on pointer-up: drop the z-order raise, clear the
    /// session, hide the guides. Returns whether a gesture actually ended —
    /// the caller checkpoints exactly once when it did. Pointer-up with no
    /// session is a no-op.
    pub fn finish(&mut self, canvas: &mut Canvas) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };
        canvas.clear_raised();
        self.guides = Guides::default();
        log::trace!("drag finished for {}", session.target);
        true
    }

    /// Abort an in-flight gesture without signalling a checkpoint. Used
    /// when a snapshot restore lands mid-drag.
    pub fn abort(&mut self, canvas: &mut Canvas) {
        if self.session.take().is_some() {
            canvas.clear_raised();
            self.guides = Guides::default();
            log::debug!("drag aborted by snapshot restore");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tb_core::model::TextBlock;

    const CONTAINER: Viewport = Viewport {
        width: 300.0,
        height: 300.0,
    };
    const EXTENT: Size = Size {
        width: 50.0,
        height: 50.0,
    };

    fn block_at_origin() -> (Canvas, BlockId) {
        let mut canvas = Canvas::new();
        let id = canvas.add_block(TextBlock::new("drag me", Point::new(0.0, 0.0)));
        (canvas, id)
    }

    #[test]
    fn gesture_moves_and_clamps() {
        let (mut canvas, id) = block_at_origin();
        let mut drag = DragController::new();

        assert!(drag.begin(&mut canvas, id, 10.0, 10.0, EXTENT));
        assert!(drag.is_dragging());
        assert_eq!(canvas.raised(), Some(id));

        // In-range move: block follows the pointer minus the grab offset.
        assert!(drag.update(&mut canvas, CONTAINER, 110.0, 60.0));
        assert_eq!(canvas.block(id).unwrap().position, Point::new(100.0, 50.0));

        // Far out of range: clamped to the container's far corner.
        assert!(drag.update(&mut canvas, CONTAINER, 500.0, 500.0));
        assert_eq!(canvas.block(id).unwrap().position, Point::new(250.0, 250.0));

        assert!(drag.finish(&mut canvas));
        assert!(!drag.is_dragging());
        assert_eq!(canvas.raised(), None);
        assert_eq!(canvas.block(id).unwrap().position, Point::new(250.0, 250.0));
    }

    #[test]
    fn begin_on_missing_block_stays_idle() {
        let (mut canvas, _) = block_at_origin();
        let mut drag = DragController::new();
        assert!(!drag.begin(&mut canvas, BlockId::next(), 5.0, 5.0, EXTENT));
        assert!(!drag.is_dragging());
        assert_eq!(canvas.raised(), None);
    }

    #[test]
    fn move_without_session_is_ignored() {
        let (mut canvas, id) = block_at_origin();
        let mut drag = DragController::new();

        assert!(!drag.update(&mut canvas, CONTAINER, 100.0, 100.0));
        assert_eq!(canvas.block(id).unwrap().position, Point::new(0.0, 0.0));
    }

    #[test]
    fn move_after_up_is_ignored() {
        let (mut canvas, id) = block_at_origin();
        let mut drag = DragController::new();

        drag.begin(&mut canvas, id, 10.0, 10.0, EXTENT);
        drag.update(&mut canvas, CONTAINER, 60.0, 60.0);
        drag.finish(&mut canvas);

        // A stale move delivered after pointer-up must not reposition.
        assert!(!drag.update(&mut canvas, CONTAINER, 200.0, 200.0));
        assert_eq!(canvas.block(id).unwrap().position, Point::new(50.0, 50.0));
    }

    #[test]
    fn up_without_session_is_noop() {
        let (mut canvas, _) = block_at_origin();
        let mut drag = DragController::new();
        assert!(!drag.finish(&mut canvas));
    }

    #[test]
    fn guides_track_then_hide() {
        let (mut canvas, id) = block_at_origin();
        let mut drag = DragController::new();

        drag.begin(&mut canvas, id, 10.0, 10.0, EXTENT);
        assert!(drag.guides().visible);
        assert_eq!((drag.guides().x, drag.guides().y), (0.0, 0.0));

        drag.update(&mut canvas, CONTAINER, 110.0, 60.0);
        assert_eq!((drag.guides().x, drag.guides().y), (100.0, 50.0));

        drag.finish(&mut canvas);
        assert!(!drag.guides().visible);
    }

    #[test]
    fn abort_clears_without_reporting_a_gesture() {
        let (mut canvas, id) = block_at_origin();
        let mut drag = DragController::new();

        drag.begin(&mut canvas, id, 10.0, 10.0, EXTENT);
        drag.abort(&mut canvas);
        assert!(!drag.is_dragging());
        assert_eq!(canvas.raised(), None);
        // Nothing left to finish.
        assert!(!drag.finish(&mut canvas));
    }
}
