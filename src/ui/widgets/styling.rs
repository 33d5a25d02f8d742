use crate::state::{CounterLevel, ToastKind};
use crate::ui::theme::Theme;
use ratatui::style::{Modifier, Style};

/// Return the border style for active blocks.
///
pub fn active_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_active.to_color())
}

/// Return the border style for normal blocks.
///
pub fn normal_block_border_style(theme: &Theme) -> Style {
    Style::default().fg(theme.border_normal.to_color())
}

/// Return the title style for active blocks.
///
pub fn active_block_title_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Return the style for the highlighted table row.
///
pub fn selected_row_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.highlight_fg.to_color())
        .bg(theme.highlight_bg.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for active list items.
///
pub fn active_list_item_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.primary.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for normal text.
///
pub fn normal_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text.to_color())
}

pub fn muted_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.text_muted.to_color())
}

/// Return the style for the application title.
///
pub fn banner_style(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.accent.to_color())
        .add_modifier(Modifier::BOLD)
}

/// Return the style for inline validation messages.
///
pub fn error_text_style(theme: &Theme) -> Style {
    Style::default().fg(theme.error.to_color())
}

/// Return the accent style of a toast.
///
pub fn toast_style(theme: &Theme, kind: ToastKind) -> Style {
    let color = match kind {
        ToastKind::Success => theme.success,
        ToastKind::Error => theme.error,
        ToastKind::Warning => theme.warning,
        ToastKind::Info => theme.info,
    };
    Style::default().fg(color.to_color())
}

/// Return the style of the description character counter.
///
pub fn counter_style(theme: &Theme, level: CounterLevel) -> Style {
    let color = match level {
        CounterLevel::Normal => theme.success,
        CounterLevel::Warning => theme.warning,
        CounterLevel::Critical => theme.error,
    };
    Style::default().fg(color.to_color())
}
