use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Return a rectangle centered in `r`, sized as a percentage of it.
///
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Return a rectangle of at most `width` x `height` anchored to the top
/// right corner of `r`, one cell away from its edges.
///
pub fn top_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width.saturating_sub(2));
    let height = height.min(r.height.saturating_sub(2));
    Rect {
        x: r.x + r.width.saturating_sub(width + 1),
        y: r.y + 1.min(r.height),
        width,
        height,
    }
}
