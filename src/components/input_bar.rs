//! Input bar component
//!
//! A single-line text field for the new item's title plus an
//! hour+minute due-time picker, pinned to the bottom of the screen.
//! Submitting a non-empty draft asks the store to create the item; the
//! guard is an exact comparison against the empty string, so
//! whitespace-only titles pass it.

use crate::action::Action;
use crate::component::Component;
use crate::model::ui::InputField;
use crate::store::DataProvider;
use anyhow::Result;
use chrono::{Duration, Local, NaiveTime, Timelike};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PLACEHOLDER: &str = "Write a new task...";

/// Inline creation bar: draft title + due time
pub struct InputBar {
    /// In-progress, not-yet-submitted title text.
    pub draft: String,
    /// Due time for the next item; defaults to the current time.
    pub time: NaiveTime,
    /// Which field has focus while editing.
    pub field: InputField,
}

impl Default for InputBar {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBar {
    pub fn new() -> Self {
        let now = Local::now().time();
        Self {
            draft: String::new(),
            time: now
                .with_second(0)
                .and_then(|t| t.with_nanosecond(0))
                .unwrap_or(now),
            field: InputField::Title,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn backspace(&mut self) {
        self.draft.pop();
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    /// Nudge the due time, wrapping past midnight.
    pub fn nudge_time(&mut self, minutes: i64) {
        let (time, _) = self.time.overflowing_add_signed(Duration::minutes(minutes));
        self.time = time;
    }

    /// Submit the draft.
    ///
    /// Creates an item iff the draft is not the empty string (exact
    /// match, no trimming). Either way the draft resets to empty and
    /// focus returns to the title field; the picked time is kept for
    /// the next item.
    pub fn submit(&mut self, store: &mut dyn DataProvider) -> bool {
        let created = if !self.draft.is_empty() {
            let date = store.formatted_date_for_user_data(self.time);
            store.create_item(&self.draft, &date);
            true
        } else {
            false
        };

        self.draft.clear();
        self.field = InputField::Title;
        created
    }

    /// Render the bar. `editing` highlights the focused field and shows
    /// the cursor.
    pub fn draw_bar(&mut self, frame: &mut Frame, area: Rect, editing: bool) {
        let border_style = if editing {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" New task ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 10 || inner.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(8)])
            .split(inner);

        // Title field
        let title_focused = editing && self.field == InputField::Title;
        let text_line = if self.draft.is_empty() && !title_focused {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            let avail = chunks[0].width.saturating_sub(2) as usize;
            let visible = tail_fitting(&self.draft, avail);
            let mut spans = vec![Span::styled(
                visible.to_string(),
                Style::default().fg(Color::White),
            )];
            if title_focused {
                spans.push(Span::styled(
                    "▏",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ));
            }
            Line::from(spans)
        };
        frame.render_widget(Paragraph::new(text_line), chunks[0]);

        // Time picker
        let time_focused = editing && self.field == InputField::Time;
        let time_style = if time_focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        let time_line = Line::from(Span::styled(
            self.time.format("%H:%M").to_string(),
            time_style,
        ));
        frame.render_widget(
            Paragraph::new(time_line).alignment(ratatui::layout::Alignment::Right),
            chunks[1],
        );
    }
}

/// Longest suffix of `s` that fits in `avail` columns, so the cursor end
/// of a long draft stays visible.
fn tail_fitting(s: &str, avail: usize) -> &str {
    let mut width = s.width();
    let mut rest = s;
    while width > avail {
        let mut chars = rest.chars();
        match chars.next() {
            Some(c) => {
                width -= c.width().unwrap_or(0);
                rest = chars.as_str();
            }
            None => break,
        }
    }
    rest
}

impl Component for InputBar {
    /// Editing-mode key map. Only consulted while the bar has focus.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc => Some(Action::CancelInput),
            KeyCode::Enter => Some(Action::SubmitInput),
            KeyCode::Tab | KeyCode::BackTab => Some(Action::NextInputField),

            // Time picker keys apply only while it has focus
            KeyCode::Up if self.field == InputField::Time => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    Some(Action::TimeUpHour)
                } else {
                    Some(Action::TimeUp)
                }
            }
            KeyCode::Down if self.field == InputField::Time => {
                if key.modifiers.contains(KeyModifiers::SHIFT) {
                    Some(Action::TimeDownHour)
                } else {
                    Some(Action::TimeDown)
                }
            }

            KeyCode::Char(c) if self.field == InputField::Title => Some(Action::InputChar(c)),
            KeyCode::Backspace if self.field == InputField::Title => Some(Action::InputBackspace),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_bar, which takes the editing flag
        Ok(())
    }
}
