//! Delete confirmation dialog component
//!
//! Deletion is the row's secondary action and always confirms first.
//! The actual removal happens in the store; the list re-renders from
//! its updated sequence.

use crate::action::Action;
use crate::component::Component;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Per-item delete confirmation
pub struct DeleteDialog;

impl Default for DeleteDialog {
    fn default() -> Self {
        Self
    }
}

impl DeleteDialog {
    /// Draw the dialog naming the item about to be deleted.
    pub fn draw_with_title(&mut self, frame: &mut Frame, area: Rect, title: &str) -> Result<()> {
        let popup_area = centered_popup(area, 44, 7);

        frame.render_widget(Clear, popup_area);

        // Keep long titles from blowing up the popup
        let shown: String = if title.chars().count() > 30 {
            let head: String = title.chars().take(29).collect();
            format!("{}…", head)
        } else {
            title.to_string()
        };

        let content = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("Delete \""),
                Span::styled(
                    shown,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("\"?"),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " y ",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw("Delete  "),
                Span::styled(
                    " n/Esc ",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("Keep"),
            ]),
        ];

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Delete ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            )
            .alignment(ratatui::layout::Alignment::Center);

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

impl Component for DeleteDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmModal),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::CloseModal),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_with_title, which takes the item title
        Ok(())
    }
}
