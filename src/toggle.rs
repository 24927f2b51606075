// Visibility state for the admin button and the keyboard entry point that
// flips it. Element lookup sits behind `StyleTarget` so the state machine
// runs the same against the browser document and test doubles.

use super::config::ToggleConfig;
use super::constants::DISPLAY_PROPERTY;
use super::shortcut::KeyPress;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Visible,
            Visibility::Visible => Visibility::Hidden,
        }
    }

    #[inline]
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    /// CSS `display` value for this state under `config`.
    #[inline]
    pub fn display_value(self, config: &ToggleConfig) -> &'static str {
        match self {
            Visibility::Visible => config.visible_display,
            Visibility::Hidden => config.hidden_display,
        }
    }
}

/// Something that can set one inline style property on an element by id.
///
/// Only `property` changes; other inline declarations on the element stay.
pub trait StyleTarget {
    /// Returns `false` when no styleable element with `element_id` exists;
    /// that is not an error and leaves the document untouched.
    fn set_style_property(&self, element_id: &str, property: &str, value: &str) -> bool;
}

/// Owns the visibility flag and the document it writes to.
///
/// Starts hidden and never writes a style until the first matching key press.
pub struct AdminToggle<D> {
    config: ToggleConfig,
    visibility: Visibility,
    target: D,
}

impl<D: StyleTarget> AdminToggle<D> {
    pub fn new(target: D) -> Self {
        Self::with_config(target, ToggleConfig::default())
    }

    pub fn with_config(target: D, config: ToggleConfig) -> Self {
        Self {
            config,
            visibility: Visibility::Hidden,
            target,
        }
    }

    /// Handle one key press. Returns whether the shortcut fired.
    pub fn handle_key(&mut self, press: &KeyPress) -> bool {
        if !self.config.shortcut.matches(press) {
            return false;
        }
        self.visibility = self.visibility.toggled();
        // Missing element: flag already flipped, nothing to draw.
        _ = self.target.set_style_property(
            self.config.target_id,
            DISPLAY_PROPERTY,
            self.visibility.display_value(&self.config),
        );
        true
    }

    #[inline]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    pub fn target(&self) -> &D {
        &self.target
    }
}
