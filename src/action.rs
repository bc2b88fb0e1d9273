//! Action enum - All possible application actions
//!
//! Components convert raw terminal events into Actions; the App
//! processes Actions to update state. No state changes happen outside
//! this dispatch.

use std::fmt;

/// All possible actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Regular tick for time-based updates
    Tick,
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // List Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Move cursor to next item
    NextItem,
    /// Move cursor to previous item
    PrevItem,
    /// Jump to first item
    FirstItem,
    /// Jump to last item
    LastItem,
    /// Move cursor to a specific row (mouse click); `toggle` marks a
    /// click on the done-glyph column
    ClickItem { index: usize, toggle: bool },

    // ─────────────────────────────────────────────────────────────────────────
    // Item Mutations
    // ─────────────────────────────────────────────────────────────────────────
    /// Flip the done state of the item under the cursor
    ToggleDone,
    /// Open the delete confirmation for the item under the cursor
    OpenDeleteDialog,

    // ─────────────────────────────────────────────────────────────────────────
    // Input Bar
    // ─────────────────────────────────────────────────────────────────────────
    /// Focus the input bar (sets Editing)
    FocusInput,
    /// Leave the input bar without submitting (sets Browse)
    CancelInput,
    /// Submit the current draft
    SubmitInput,
    /// Append a character to the draft
    InputChar(char),
    /// Remove the last character from the draft
    InputBackspace,
    /// Switch focus between the title field and the time picker
    NextInputField,
    /// Nudge the due time forward
    TimeUp,
    /// Nudge the due time backward
    TimeDown,
    /// Nudge the due time forward one hour
    TimeUpHour,
    /// Nudge the due time backward one hour
    TimeDownHour,

    // ─────────────────────────────────────────────────────────────────────────
    // Header Gesture
    // ─────────────────────────────────────────────────────────────────────────
    /// Press began inside the header banner
    HeaderDragStart(u16, u16),
    /// Pointer moved while dragging the banner
    HeaderDragUpdate(u16, u16),
    /// Press released; the banner snaps back
    HeaderDragEnd,

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Close the current modal
    CloseModal,
    /// Confirm the current modal action
    ConfirmModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextItem => write!(f, "NextItem"),
            Action::PrevItem => write!(f, "PrevItem"),
            Action::FirstItem => write!(f, "FirstItem"),
            Action::LastItem => write!(f, "LastItem"),
            Action::ClickItem { index, toggle } => {
                write!(f, "ClickItem({}, toggle={})", index, toggle)
            }
            Action::ToggleDone => write!(f, "ToggleDone"),
            Action::OpenDeleteDialog => write!(f, "OpenDeleteDialog"),
            Action::FocusInput => write!(f, "FocusInput"),
            Action::CancelInput => write!(f, "CancelInput"),
            Action::SubmitInput => write!(f, "SubmitInput"),
            Action::InputChar(c) => write!(f, "InputChar('{}')", c),
            Action::InputBackspace => write!(f, "InputBackspace"),
            Action::NextInputField => write!(f, "NextInputField"),
            Action::TimeUp => write!(f, "TimeUp"),
            Action::TimeDown => write!(f, "TimeDown"),
            Action::TimeUpHour => write!(f, "TimeUpHour"),
            Action::TimeDownHour => write!(f, "TimeDownHour"),
            Action::HeaderDragStart(x, y) => write!(f, "HeaderDragStart({}, {})", x, y),
            Action::HeaderDragUpdate(x, y) => write!(f, "HeaderDragUpdate({}, {})", x, y),
            Action::HeaderDragEnd => write!(f, "HeaderDragEnd"),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::CloseModal => write!(f, "CloseModal"),
            Action::ConfirmModal => write!(f, "ConfirmModal"),
        }
    }
}
