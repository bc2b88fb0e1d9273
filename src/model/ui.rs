//! UI state - presentation state separate from item data

/// Input bar mode.
///
/// Transitions are set-based, never toggled: gaining focus sets
/// `Editing`, submit or cancel sets `Browse`. Repeated focus events are
/// therefore idempotent and cannot desynchronise the mode from the
/// actual focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Browse,
    Editing,
}

impl InputMode {
    pub fn is_editing(&self) -> bool {
        *self == InputMode::Editing
    }
}

/// Which input-bar field currently has focus while editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    #[default]
    Title,
    Time,
}

impl InputField {
    /// The other field (Tab cycles between the two).
    pub fn next(&self) -> InputField {
        match self {
            InputField::Title => InputField::Time,
            InputField::Time => InputField::Title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_field_cycles() {
        assert_eq!(InputField::Title.next(), InputField::Time);
        assert_eq!(InputField::Time.next(), InputField::Title);
    }

    #[test]
    fn test_default_mode_is_browse() {
        assert_eq!(InputMode::default(), InputMode::Browse);
        assert!(!InputMode::default().is_editing());
    }
}
