use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const SEARCH_PLACEHOLDER: &str = "Buscar productos por nombre o descripción...";

/// Render the search box next to the sort controls.
///
pub fn filter_bar(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(28)])
        .split(size);

    let searching = state.is_search_mode();
    let term = state.get_search_term();
    let search_line = if term.is_empty() && !searching {
        Line::from(Span::styled(SEARCH_PLACEHOLDER, styling::muted_text_style(theme)))
    } else {
        let mut spans = vec![Span::styled(term.to_string(), styling::normal_text_style(theme))];
        if searching {
            spans.push(Span::styled(
                "▏",
                Style::default()
                    .fg(theme.primary.to_color())
                    .add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    };
    let border_style = if searching {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    let search = Paragraph::new(search_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Buscar ")
            .border_style(border_style),
    );
    frame.render_widget(search, chunks[0]);

    let criteria = state.criteria();
    let sort = Paragraph::new(Line::from(vec![
        Span::styled(criteria.sort_by.label(), styling::active_list_item_style(theme)),
        Span::styled(
            format!(" {}", criteria.sort_order.arrow()),
            styling::normal_text_style(theme),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Ordenar ")
            .border_style(styling::normal_block_border_style(theme)),
    );
    frame.render_widget(sort, chunks[1]);
}
