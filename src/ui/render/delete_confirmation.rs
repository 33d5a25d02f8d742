use super::Frame;
use crate::state::State;
use crate::ui::widgets::{layout::centered_rect, styling};
use crate::utils::text_processing::ellipsize;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Longest product name shown in the dialog.
const NAME_WIDTH: usize = 45;

/// Render the delete confirmation dialog for the pending product.
///
pub fn delete_confirmation(frame: &mut Frame, size: Rect, state: &State) {
    let name = match state.pending_delete() {
        Some(product) => ellipsize(&product.name, NAME_WIDTH),
        None => return,
    };
    let theme = state.get_theme();
    let popup_area = centered_rect(60, 35, size);
    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "¿Eliminar producto?",
            Style::default()
                .fg(theme.text.to_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Estás a punto de eliminar ", styling::muted_text_style(theme)),
            Span::styled(
                format!("\"{}\"", name),
                Style::default()
                    .fg(theme.text.to_color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(".", styling::muted_text_style(theme)),
        ]),
        Line::from(Span::styled(
            "Esta acción no se puede deshacer y el producto será eliminado permanentemente.",
            styling::muted_text_style(theme),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Eliminar, Esc: Cancelar",
            Style::default().fg(theme.warning.to_color()),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(
                    " Confirmar ",
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ))
                .border_style(
                    Style::default()
                        .fg(theme.error.to_color())
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, popup_area);
}
