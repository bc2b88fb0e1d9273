//! Component trait - Interface for UI components
//!
//! Components convert events to Actions, update their own state when
//! the App dispatches an Action to them, and render themselves.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` / `handle_mouse_event` - convert events to Actions
/// 2. `update` - process Actions and update state
/// 3. `draw` - render the component
pub trait Component {
    /// One-time setup after construction.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Convert a key event into a semantic Action. State is not
    /// modified here.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Convert a mouse event into a semantic Action.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        let _ = mouse;
        Ok(None)
    }

    /// Process an Action. May return a follow-up Action.
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Render the component into `area`.
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
