// Identifiers and style values for the admin button shortcut.
// Kept free of web-sys types so host-side tests can include this file.

// Element whose visibility the shortcut controls
pub const ADMIN_BUTTON_ID: &str = "adminBtn";

// Shortcut: Shift + this key, compared case-insensitively
pub const SHORTCUT_KEY: &str = "a";
pub const SHORTCUT_REQUIRES_SHIFT: bool = true;

// CSS property the toggle writes, and its two values
pub const DISPLAY_PROPERTY: &str = "display";
pub const DISPLAY_VISIBLE: &str = "inline-block";
pub const DISPLAY_HIDDEN: &str = "none";

// DOM event the listener is registered for
pub const KEYDOWN_EVENT: &str = "keydown";
