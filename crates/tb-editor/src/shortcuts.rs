//! Keyboard shortcut mapping.
//!
//! Maps key + modifier combos to semantic `EditorAction`s. Uses
//! platform-aware modifier detection: on macOS `meta` is ⌘, elsewhere
//! `ctrl` serves the same role. A resolved combo means the host must
//! suppress its default behavior.

/// Actions that keyboard shortcuts can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    Undo,
    Redo,
}

/// Resolves key events into editor actions.
pub struct ShortcutMap;

impl ShortcutMap {
    /// Resolve a key event to an action.
    ///
    /// `key` is the `KeyboardEvent.key` value (e.g. `"z"`).
    /// Returns `None` if the key combo has no binding.
    pub fn resolve(key: &str, ctrl: bool, shift: bool, meta: bool) -> Option<EditorAction> {
        let cmd = ctrl || meta;

        if cmd && shift {
            return match key {
                "z" | "Z" => Some(EditorAction::Redo),
                _ => None,
            };
        }

        if cmd {
            return match key {
                "z" | "Z" => Some(EditorAction::Undo),
                "y" | "Y" => Some(EditorAction::Redo),
                _ => None,
            };
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_undo() {
        // Ctrl+Z and Cmd+Z.
        assert_eq!(
            ShortcutMap::resolve("z", true, false, false),
            Some(EditorAction::Undo)
        );
        assert_eq!(
            ShortcutMap::resolve("z", false, false, true),
            Some(EditorAction::Undo)
        );
    }

    #[test]
    fn resolve_redo() {
        // Ctrl+Y, Cmd+Y, and Cmd+Shift+Z.
        assert_eq!(
            ShortcutMap::resolve("y", true, false, false),
            Some(EditorAction::Redo)
        );
        assert_eq!(
            ShortcutMap::resolve("y", false, false, true),
            Some(EditorAction::Redo)
        );
        assert_eq!(
            ShortcutMap::resolve("z", false, true, true),
            Some(EditorAction::Redo)
        );
    }

    #[test]
    fn bare_keys_resolve_to_nothing() {
        assert_eq!(ShortcutMap::resolve("z", false, false, false), None);
        assert_eq!(ShortcutMap::resolve("y", false, false, false), None);
    }

    #[test]
    fn unknown_combos_resolve_to_nothing() {
        assert_eq!(ShortcutMap::resolve("a", true, false, false), None);
        assert_eq!(ShortcutMap::resolve("y", true, true, false), None);
    }
}
