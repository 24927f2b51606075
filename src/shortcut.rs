/// Host-neutral view of a key press: the `key` identifier as reported by the
/// browser plus the Shift modifier state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub shift: bool,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, shift: bool) -> Self {
        Self {
            key: key.into(),
            shift,
        }
    }
}

/// A single-key shortcut with an optional Shift requirement.
///
/// Ctrl/Alt/Meta are not inspected; Shift+Ctrl+A still fires a Shift+A
/// shortcut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub shift: bool,
}

impl Shortcut {
    #[inline]
    pub fn matches(&self, press: &KeyPress) -> bool {
        if self.shift && !press.shift {
            return false;
        }
        press.key.eq_ignore_ascii_case(self.key)
    }
}

impl std::fmt::Display for Shortcut {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.shift {
            write!(f, "Shift+{}", self.key.to_ascii_uppercase())
        } else {
            write!(f, "{}", self.key.to_ascii_uppercase())
        }
    }
}
