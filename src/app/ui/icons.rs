//! Unicode UI icon constants.
//!
//! BMP-only so the default fonts cover them.

pub const ICON_MENU: &str = "☰";
pub const ICON_ADD: &str = "✚";
pub const ICON_DELETE: &str = "✖";
pub const ICON_SAVE: &str = "⇩";
pub const ICON_OPEN: &str = "⟳";
