use super::constants::{
    ADMIN_BUTTON_ID, DISPLAY_HIDDEN, DISPLAY_VISIBLE, SHORTCUT_KEY, SHORTCUT_REQUIRES_SHIFT,
};
use super::shortcut::Shortcut;

/// Everything the toggle needs to know about its target and trigger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleConfig {
    pub target_id: &'static str,
    pub shortcut: Shortcut,
    pub visible_display: &'static str,
    pub hidden_display: &'static str,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            target_id: ADMIN_BUTTON_ID,
            shortcut: Shortcut {
                key: SHORTCUT_KEY,
                shift: SHORTCUT_REQUIRES_SHIFT,
            },
            visible_display: DISPLAY_VISIBLE,
            hidden_display: DISPLAY_HIDDEN,
        }
    }
}
