//! Style commands for the selected block.
//!
//! Each command mutates exactly one style attribute. The session checks the
//! selection precondition and pushes the one history checkpoint; the command
//! itself is a pure in-place mutation.

use tb_core::model::{MIN_FONT_SIZE, TextStyle};

/// One toolbar action against the selected block's style.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleCommand {
    /// +1 px.
    IncreaseFontSize,
    /// −1 px, floored at [`MIN_FONT_SIZE`] — never zero or negative.
    DecreaseFontSize,
    /// Externally supplied font name; not validated against any whitelist.
    SetFontFamily(String),
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
}

impl StyleCommand {
    /// Apply the mutation to `style` in place.
    pub fn apply(&self, style: &mut TextStyle) {
        match self {
            StyleCommand::IncreaseFontSize => {
                style.size_px = style.size_px.saturating_add(1);
            }
            StyleCommand::DecreaseFontSize => {
                style.size_px = style.size_px.saturating_sub(1).max(MIN_FONT_SIZE);
            }
            StyleCommand::SetFontFamily(family) => {
                style.family = family.clone();
            }
            StyleCommand::ToggleBold => {
                style.weight = style.weight.toggled();
            }
            StyleCommand::ToggleItalic => {
                style.slant = style.slant.toggled();
            }
            StyleCommand::ToggleUnderline => {
                style.decoration = style.decoration.toggled();
            }
        }
    }
}
