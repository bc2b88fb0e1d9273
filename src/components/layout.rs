//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main screen layout areas
pub struct MainLayout {
    pub header: Rect,
    pub count: Rect,
    pub list: Rect,
    pub input: Rect,
    pub help: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = (area.width.saturating_sub(width)) / 2;
    let popup_y = (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Calculate the main screen layout: banner on top, count line, the item
/// list taking the remaining space, the input bar pinned above a one-line
/// help bar.
pub fn calculate_main_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);

    MainLayout {
        header: chunks[0],
        count: chunks[1],
        list: chunks[2],
        input: chunks[3],
        help: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_partitions_the_screen() {
        let area = Rect::new(0, 0, 80, 30);
        let layout = calculate_main_layout(area);

        assert_eq!(layout.header.height, 7);
        assert_eq!(layout.count.height, 1);
        assert_eq!(layout.input.height, 3);
        assert_eq!(layout.help.height, 1);
        assert_eq!(layout.list.height, 30 - 7 - 1 - 3 - 1);

        // Stacked top to bottom
        assert_eq!(layout.count.y, layout.header.bottom());
        assert_eq!(layout.list.y, layout.count.bottom());
        assert_eq!(layout.input.y, layout.list.bottom());
        assert_eq!(layout.help.y, layout.input.bottom());
    }

    #[test]
    fn test_centered_popup_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let popup = centered_popup(area, 40, 8);
        assert_eq!(popup, Rect::new(20, 8, 40, 8));

        // Larger than the area: clamped
        let popup = centered_popup(area, 100, 50);
        assert_eq!(popup.width, 80);
        assert_eq!(popup.height, 24);
    }
}
