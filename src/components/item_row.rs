//! Item row rendering
//!
//! One task renders as two lines: the done affordance and title, then
//! the due date indented underneath. The row holds no state of its own;
//! toggling and deleting go through the store and the list re-renders
//! from its updated sequence.

use crate::model::item::Item;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::ListItem,
};

/// Completion affordance: filled when done, empty circle otherwise.
pub fn toggle_glyph(is_done: bool) -> &'static str {
    if is_done {
        "◉"
    } else {
        "○"
    }
}

/// Build the two display lines for an item.
pub fn lines(item: &Item, dimmed: bool) -> Vec<Line<'static>> {
    let glyph_style = if item.is_done {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut title_style = if dimmed {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };
    if item.is_done {
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
    }

    vec![
        Line::from(vec![
            Span::styled(format!(" {} ", toggle_glyph(item.is_done)), glyph_style),
            Span::styled(item.title.clone(), title_style),
        ]),
        Line::from(Span::styled(
            format!("   {}", item.date),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

/// Render an item as a list entry.
pub fn render(item: &Item, dimmed: bool) -> ListItem<'static> {
    ListItem::new(lines(item, dimmed))
}
