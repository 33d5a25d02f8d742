use super::Frame;
use crate::inventory::MAX_DESCRIPTION_LENGTH;
use crate::state::{FormField, FormMode, ProductForm, State};
use crate::ui::widgets::{layout::centered_rect, styling};
use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};

fn intro_text(mode: FormMode) -> &'static str {
    match mode {
        FormMode::Add => "Complete los detalles del producto a continuación.",
        FormMode::Edit => "Modifique los detalles del producto a continuación.",
        FormMode::Copy => "Revise los detalles del producto copiado.",
    }
}

/// Render the product form as a modal over the listing.
///
pub fn product_form(frame: &mut Frame, size: Rect, state: &State) {
    let form = match state.form() {
        Some(form) => form,
        None => return,
    };
    let theme = state.get_theme();
    let popup_area = centered_rect(70, 85, size);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {} ", form.mode().title()),
            styling::banner_style(theme),
        ))
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Min(6),
            Constraint::Length(4),
            Constraint::Length(1),
        ])
        .split(inner);

    let intro = Paragraph::new(format!(
        "{} Todos los campos son obligatorios.",
        intro_text(form.mode())
    ))
    .style(styling::muted_text_style(theme))
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, chunks[0]);

    input_field(frame, chunks[1], theme, form, FormField::Code);
    input_field(frame, chunks[2], theme, form, FormField::Name);
    description(frame, chunks[3], theme, form);
    input_field(frame, chunks[4], theme, form, FormField::Quantity);

    let actions = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Enter: {} ", form.mode().submit_label()),
            Style::default()
                .fg(theme.highlight_fg.to_color())
                .bg(theme.primary.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Esc: Cancelar", styling::muted_text_style(theme)),
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(actions, chunks[5]);
}

/// Block for one input, highlighted when focused and red when invalid.
///
fn field_block<'a>(theme: &Theme, form: &ProductForm, field: FormField) -> Block<'a> {
    let border_style = if form.error(field).is_some() {
        styling::error_text_style(theme)
    } else if form.focus() == field {
        styling::active_block_border_style(theme)
    } else {
        styling::normal_block_border_style(theme)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", field.label()))
        .border_style(border_style)
}

fn value_line<'a>(theme: &Theme, form: &'a ProductForm, field: FormField) -> Line<'a> {
    let mut spans = vec![Span::styled(form.value(field), styling::normal_text_style(theme))];
    if form.focus() == field {
        spans.push(Span::styled("▏", styling::active_list_item_style(theme)));
    }
    Line::from(spans)
}

fn error_line<'a>(theme: &Theme, form: &ProductForm, field: FormField) -> Line<'a> {
    match form.error(field) {
        Some(error) => Line::from(Span::styled(error.message(), styling::error_text_style(theme))),
        None => Line::from(""),
    }
}

fn input_field(frame: &mut Frame, size: Rect, theme: &Theme, form: &ProductForm, field: FormField) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(size);
    let input = Paragraph::new(value_line(theme, form, field)).block(field_block(theme, form, field));
    frame.render_widget(input, chunks[0]);
    frame.render_widget(Paragraph::new(error_line(theme, form, field)), chunks[1]);
}

fn description(frame: &mut Frame, size: Rect, theme: &Theme, form: &ProductForm) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)])
        .split(size);
    let mut textarea = form.description_area().clone();
    textarea.set_block(field_block(theme, form, FormField::Description));
    textarea.set_style(styling::normal_text_style(theme));
    textarea.set_cursor_line_style(Style::default());
    if form.focus() == FormField::Description {
        textarea.set_cursor_style(styling::active_list_item_style(theme));
    } else {
        textarea.set_cursor_style(Style::default());
    }
    frame.render_widget(textarea.widget(), chunks[0]);

    let counter = Gauge::default()
        .gauge_style(styling::counter_style(theme, form.char_level()))
        .ratio(form.char_progress().clamp(0.0, 1.0))
        .label(format!("{}/{} caracteres", form.char_count(), MAX_DESCRIPTION_LENGTH));
    frame.render_widget(counter, chunks[1]);
    frame.render_widget(
        Paragraph::new(error_line(theme, form, FormField::Description)),
        chunks[2],
    );
}
