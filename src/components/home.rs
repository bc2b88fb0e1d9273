//! Home component - the task list screen
//!
//! Renders the count line and the item rows in store order, and owns
//! the list cursor. The whole region dims while the input bar has
//! focus; that is purely cosmetic.

use crate::action::Action;
use crate::component::Component;
use crate::components::item_row;
use crate::model::item::Item;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListState, Paragraph},
    Frame,
};

/// Width of the toggle-glyph column at the start of each row.
const TOGGLE_COLUMNS: u16 = 3;
/// Each item renders as two lines (title + date).
const ROW_HEIGHT: u16 = 2;

/// Task list screen
pub struct HomeComponent {
    /// List cursor state
    pub list_state: ListState,

    /// Inner list area rendered last frame, for mouse hit-testing.
    pub list_inner: Rect,

    /// Item count rendered last frame.
    last_len: usize,
}

impl Default for HomeComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl HomeComponent {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
            list_inner: Rect::default(),
            last_len: 0,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Cursor
    // ─────────────────────────────────────────────────────────────────────────

    /// Move the cursor to the next item, wrapping at the end.
    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(_) => 0,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    /// Move the cursor to the previous item, wrapping at the start.
    pub fn previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let prev = match self.list_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(prev));
    }

    pub fn select_first(&mut self, len: usize) {
        self.list_state.select(if len == 0 { None } else { Some(0) });
    }

    pub fn select_last(&mut self, len: usize) {
        if len > 0 {
            self.list_state.select(Some(len - 1));
        }
    }

    /// Move the cursor to a specific row (mouse click).
    pub fn select(&mut self, index: usize, len: usize) {
        if index < len {
            self.list_state.select(Some(index));
        }
    }

    /// Reconcile the cursor after the item sequence changed underneath
    /// it (the store's revision moved).
    pub fn clamp(&mut self, len: usize) {
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
    }

    /// The item under the cursor.
    pub fn selected_item<'a>(&self, items: &'a [Item]) -> Option<&'a Item> {
        items.get(self.list_state.selected()?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mouse
    // ─────────────────────────────────────────────────────────────────────────

    /// Map a click to the row under the pointer. A click on the toggle
    /// glyph column also flips the item's done state.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<Action> {
        if !self.list_inner.contains(Position::new(x, y)) {
            return None;
        }
        let row = (y - self.list_inner.y) / ROW_HEIGHT;
        let index = self.list_state.offset() + row as usize;
        if index >= self.last_len {
            return None;
        }
        Some(Action::ClickItem {
            index,
            toggle: x < self.list_inner.x + TOGGLE_COLUMNS,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    /// Render the item list in store order.
    pub fn render_list(&mut self, frame: &mut Frame, area: Rect, items: &[Item], dimmed: bool) {
        let border_style = if dimmed {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style);
        self.list_inner = block.inner(area);
        self.last_len = items.len();

        let rows: Vec<_> = items
            .iter()
            .map(|item| item_row::render(item, dimmed))
            .collect();

        let list = List::new(rows).block(block).highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Component for HomeComponent {
    /// Browse-mode key map.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('j') | KeyCode::Down => Some(Action::NextItem),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::PrevItem),
            KeyCode::Char('g') => Some(Action::FirstItem),
            KeyCode::Char('G') => Some(Action::LastItem),

            KeyCode::Char(' ') | KeyCode::Enter => Some(Action::ToggleDone),
            KeyCode::Char('d') => Some(Action::OpenDeleteDialog),

            KeyCode::Char('i') | KeyCode::Char('/') => Some(Action::FocusInput),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),

            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through render_list, which takes the items
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Free rendering functions
// ─────────────────────────────────────────────────────────────────────────────

/// The count line text.
pub fn count_line(count: usize) -> String {
    format!("{} Tasks Today", count)
}

pub fn render_count_line(frame: &mut Frame, area: Rect, count: usize, dimmed: bool) {
    let style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };
    let line = Line::from(Span::styled(format!(" {}", count_line(count)), style));
    frame.render_widget(Paragraph::new(line), area);
}

pub fn render_help_bar(frame: &mut Frame, area: Rect, editing: bool) {
    let hints: &[(&str, &str)] = if editing {
        &[
            ("Enter", "Add"),
            ("Tab", "Field"),
            ("↑/↓", "Time"),
            ("Esc", "Back"),
        ]
    } else {
        &[
            ("j/k", "Move"),
            ("Space", "Toggle"),
            ("d", "Delete"),
            ("i", "New task"),
            ("q", "Quit"),
        ]
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("{}  ", label),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
