use super::Frame;
use crate::state::State;
use crate::ui::widgets::{layout::top_right_rect, styling};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};
use std::time::Instant;

const TOAST_WIDTH: u16 = 44;
const TOAST_HEIGHT: u16 = 6;

/// Render the open toast in the top right corner with its countdown bar.
///
pub fn toast(frame: &mut Frame, size: Rect, state: &State, now: Instant) {
    let toast = state.toast();
    let theme = state.get_theme();
    let area = top_right_rect(TOAST_WIDTH, TOAST_HEIGHT, size);
    if area.width < 4 || area.height < 3 {
        return;
    }
    frame.render_widget(Clear, area);

    let accent = styling::toast_style(theme, toast.kind());
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", toast.kind().title()),
            accent.add_modifier(Modifier::BOLD),
        ))
        .border_style(accent);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    let message = Paragraph::new(Line::from(Span::styled(
        toast.message(),
        styling::normal_text_style(theme),
    )))
    .wrap(Wrap { trim: true });
    frame.render_widget(message, chunks[0]);

    let countdown = Gauge::default()
        .gauge_style(accent)
        .ratio(toast.remaining(now))
        .label("");
    frame.render_widget(countdown, chunks[1]);
}
