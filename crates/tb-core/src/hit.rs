//! Hit testing: point → block lookup.
//!
//! Walks blocks front-to-back (a raised block first, then reverse document
//! order) to find which block sits under a canvas position. Block extents
//! come from the host's layout measurements; blocks the host has not
//! measured yet are skipped.

use crate::geometry::{Rect, Size};
use crate::id::BlockId;
use crate::model::Canvas;
use std::collections::HashMap;

/// Find the topmost block at position (px, py).
/// Returns `None` if the point lands on empty canvas.
pub fn hit_test(
    canvas: &Canvas,
    extents: &HashMap<BlockId, Size>,
    px: f32,
    py: f32,
) -> Option<BlockId> {
    let contains = |id: BlockId| {
        let block = canvas.block(id)?;
        let extent = extents.get(&id)?;
        Rect::from_parts(block.position, *extent)
            .contains(px, py)
            .then_some(id)
    };

    // A raised block paints above everything else.
    if let Some(raised) = canvas.raised()
        && let Some(hit) = contains(raised)
    {
        return Some(hit);
    }

    // Otherwise last painted = topmost.
    canvas
        .blocks()
        .iter()
        .rev()
        .filter(|b| !b.raised)
        .find_map(|b| contains(b.id))
}
