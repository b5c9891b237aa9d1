pub mod commands;
pub mod drag;
pub mod history;
pub mod input;
pub mod selection;
pub mod session;
pub mod shortcuts;

pub use commands::StyleCommand;
pub use drag::{DragController, DragSession, Guides};
pub use history::History;
pub use input::{ClickTarget, InputEvent};
pub use selection::{Selection, ToolbarState};
pub use session::EditorState;
pub use shortcuts::{EditorAction, ShortcutMap};
