use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the application banner with the product count and theme.
///
pub fn header(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(" ▣ ", styling::active_list_item_style(theme)),
        Span::styled("Inventario", styling::banner_style(theme)),
    ]));
    frame.render_widget(title, chunks[0]);

    let count = state.store().len();
    let summary = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("{} productos", count),
            styling::normal_text_style(theme),
        ),
        Span::styled(format!("  ·  {} ", theme.name), styling::muted_text_style(theme)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(summary, chunks[1]);
}
