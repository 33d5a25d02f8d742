use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

/// Render log widget according to state.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(styling::active_block_border_style(theme));

    let items: Vec<ListItem> = state
        .get_debug_entries()
        .into_iter()
        .map(|entry| ListItem::new(Line::from(Span::styled(entry, styling::normal_text_style(theme)))))
        .collect();

    let list = List::new(items)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::active_list_item_style(theme))
        .block(block);

    let mut list_state = ListState::default();
    list_state.select(Some(state.get_debug_index()));
    frame.render_stateful_widget(list, size, &mut list_state);
}
