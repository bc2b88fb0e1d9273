//! Header banner component
//!
//! Purely decorative: the app title and today's date over a dotted
//! backdrop. A mouse drag tilts the banner - the text lines shift with
//! the pointer and the backdrop lags behind for a parallax feel, and
//! everything snaps back on release. No task data flows through here
//! besides the header date string.

use crate::action::Action;
use crate::component::Component;
use crate::model::gesture::DragState;
use anyhow::Result;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Text lines follow the pointer at 1/15 of the translation.
const TEXT_PARALLAX: i32 = 15;
/// The backdrop lags further behind at 1/25.
const BACKDROP_PARALLAX: i32 = 25;

/// Decorative gesture-reactive banner
pub struct HeaderBanner {
    pub drag: DragState,
    /// Area rendered into last frame, for mouse hit-testing.
    pub last_area: Rect,
}

impl Default for HeaderBanner {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderBanner {
    pub fn new() -> Self {
        Self {
            drag: DragState::new(),
            last_area: Rect::default(),
        }
    }

    /// Whether a terminal cell lies inside the banner.
    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.last_area.contains(Position::new(x, y))
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }

    /// Draw the banner. `date` comes from the data provider's header
    /// date query.
    pub fn draw_banner(&mut self, frame: &mut Frame, area: Rect, date: &str) {
        self.last_area = area;

        let border_style = if self.drag.dragging {
            Style::default().fg(Color::Magenta)
        } else {
            Style::default().fg(Color::Blue)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.width < 4 || inner.height < 3 {
            return;
        }

        let (tx, ty) = parallax(self.drag.offset, TEXT_PARALLAX);
        let (bx, by) = parallax(self.drag.offset, BACKDROP_PARALLAX);

        // Dotted backdrop across the middle, on the slower layer
        let backdrop_base = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
        let backdrop_area = shifted(backdrop_base, inner, bx, by);
        let dots = "· ".repeat(inner.width as usize / 2 + 1);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                dots,
                Style::default().fg(Color::Blue),
            ))),
            backdrop_area,
        );

        // Title, top-left
        let title = "SimpList";
        let title_base = Rect::new(inner.x + 2, inner.y, title.len() as u16, 1);
        let title_area = shifted(title_base, inner, tx, ty);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                title,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))),
            title_area,
        );

        // Header date, bottom-right, same layer as the title
        let date_width = date.chars().count() as u16;
        let date_base = Rect::new(
            inner.right().saturating_sub(date_width + 2),
            inner.bottom().saturating_sub(1),
            date_width,
            1,
        );
        let date_area = shifted(date_base, inner, tx, ty);
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                date.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ))),
            date_area,
        );
    }
}

/// Scale a drag translation down to a parallax layer offset.
fn parallax(offset: (i32, i32), divisor: i32) -> (i32, i32) {
    (offset.0 / divisor, offset.1 / divisor)
}

/// Shift `base` by (dx, dy), clamped so it stays inside `bounds`.
fn shifted(base: Rect, bounds: Rect, dx: i32, dy: i32) -> Rect {
    let min_x = i32::from(bounds.left());
    let max_x = i32::from(bounds.right().saturating_sub(base.width)).max(min_x);
    let min_y = i32::from(bounds.top());
    let max_y = i32::from(bounds.bottom().saturating_sub(base.height)).max(min_y);

    let x = (i32::from(base.x) + dx).clamp(min_x, max_x);
    let y = (i32::from(base.y) + dy).clamp(min_y, max_y);

    Rect::new(
        x as u16,
        y as u16,
        base.width.min(bounds.width),
        base.height.min(bounds.height),
    )
}

impl Component for HeaderBanner {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::HeaderDragStart(x, y) => self.drag.start(x, y),
            Action::HeaderDragUpdate(x, y) => self.drag.update(x, y),
            Action::HeaderDragEnd => self.drag.end(),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Drawing goes through draw_banner, which takes the header date
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_actions_drive_the_state_machine() {
        let mut header = HeaderBanner::new();
        header.update(Action::HeaderDragStart(40, 20)).unwrap();
        header.update(Action::HeaderDragUpdate(70, 10)).unwrap();
        assert!(header.is_dragging());
        assert_eq!(header.drag.offset, (30, -10));

        header.update(Action::HeaderDragEnd).unwrap();
        assert!(!header.is_dragging());
        assert_eq!(header.drag.offset, (0, 0));
    }

    #[test]
    fn test_hit_test_uses_last_area() {
        let mut header = HeaderBanner::new();
        header.last_area = Rect::new(0, 0, 80, 7);
        assert!(header.contains(5, 3));
        assert!(!header.contains(5, 7));
        assert!(!header.contains(80, 3));
    }

    #[test]
    fn test_parallax_layers_scale_down() {
        assert_eq!(parallax((30, -10), 15), (2, 0));
        assert_eq!(parallax((30, -10), 25), (1, 0));
        assert_eq!(parallax((-45, 50), 15), (-3, 3));
    }

    #[test]
    fn test_shifted_clamps_to_bounds() {
        let bounds = Rect::new(1, 1, 78, 5);
        let base = Rect::new(3, 1, 8, 1);

        assert_eq!(shifted(base, bounds, 0, 0), base);
        assert_eq!(shifted(base, bounds, -10, 0).x, 1);
        assert_eq!(shifted(base, bounds, 1000, 0).x, bounds.right() - 8);
        assert_eq!(shifted(base, bounds, 0, 100).y, bounds.bottom() - 1);
    }
}
