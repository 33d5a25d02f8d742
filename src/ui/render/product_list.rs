use super::Frame;
use crate::inventory::Product;
use crate::state::State;
use crate::ui::widgets::styling;
use crate::utils::text_processing::{ellipsize, format_creation_date};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
};

/// Widest description shown in a table cell.
const DESCRIPTION_WIDTH: usize = 48;

/// Render the current page of products, or the empty state.
///
pub fn product_list(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let listing = state.listing();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" Productos ", styling::active_block_title_style()))
        .border_style(styling::active_block_border_style(theme));

    if listing.is_empty() {
        let inner = block.inner(size);
        frame.render_widget(block, size);
        let top_padding = inner.height.saturating_sub(2) / 2;
        let mut lines = vec![Line::from(""); top_padding as usize];
        lines.push(Line::from(Span::styled(
            "No hay productos disponibles.",
            styling::active_list_item_style(theme),
        )));
        lines.push(Line::from(Span::styled(
            "Agrega un nuevo producto para comenzar.",
            styling::muted_text_style(theme),
        )));
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(block.inner(size));
    frame.render_widget(block, size);

    let header = Row::new(vec!["Código", "Nombre", "Descripción", "Stock", "Creación"])
        .style(styling::active_list_item_style(theme))
        .bottom_margin(1);
    let rows: Vec<Row> = listing.items.iter().map(|product| product_row(product)).collect();
    let widths = [
        Constraint::Length(10),
        Constraint::Percentage(25),
        Constraint::Min(20),
        Constraint::Length(14),
        Constraint::Length(12),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::selected_row_style(theme))
        .highlight_symbol("▶ ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.selected_index()));
    frame.render_stateful_widget(table, chunks[0], &mut table_state);

    let pager = state.pager();
    let status = Line::from(vec![
        Span::styled(
            format!(
                " Mostrando {} de {} productos",
                listing.items.len(),
                listing.total
            ),
            styling::muted_text_style(theme),
        ),
        Span::styled(
            format!(
                "  ·  Página {} de {}  ·  Por página: {}",
                listing.page,
                listing.page_count,
                pager.page_size()
            ),
            styling::normal_text_style(theme),
        ),
    ]);
    frame.render_widget(Paragraph::new(status), chunks[1]);
}

fn product_row(product: &Product) -> Row<'static> {
    Row::new(vec![
        Cell::from(product.code.to_string()),
        Cell::from(product.name.clone()),
        Cell::from(ellipsize(&product.description, DESCRIPTION_WIDTH)),
        Cell::from(format!("{} unidades", product.quantity)),
        Cell::from(format_creation_date(&product.created_at)),
    ])
}
