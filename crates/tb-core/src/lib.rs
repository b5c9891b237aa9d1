pub mod geometry;
pub mod hit;
pub mod id;
pub mod model;

pub use geometry::{Point, Rect, Size, Viewport, clamp_to_container};
pub use hit::hit_test;
pub use id::BlockId;
pub use model::*;
