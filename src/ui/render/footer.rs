use super::Frame;
use crate::config::{build_footer_text, HotkeyAction};
use crate::state::{Mode, State, View};
use crate::ui::theme::ColorSpec;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the mode badge, its color and the hotkey hints for the footer.
///
fn footer_content(state: &State) -> (&'static str, ColorSpec, String) {
    let hotkeys = state.get_hotkeys();
    let theme = state.get_theme();
    match state.current_mode() {
        Mode::Search => (
            "BUSCAR:",
            theme.footer_search,
            format!(
                " Escribe para buscar,{}",
                build_footer_text(
                    &hotkeys.search_mode,
                    &[
                        (HotkeyAction::SearchConfirm, "aplicar", None),
                        (HotkeyAction::SearchCancel, "limpiar", None),
                    ],
                )
            ),
        ),
        Mode::DeleteConfirmation => (
            "ELIMINAR:",
            theme.footer_delete,
            build_footer_text(
                &hotkeys.delete_confirmation,
                &[
                    (HotkeyAction::DeleteConfirm, "eliminar", None),
                    (HotkeyAction::DeleteCancel, "cancelar", None),
                ],
            ),
        ),
        Mode::Debug => (
            "DEBUG:",
            theme.footer_debug,
            build_footer_text(
                &hotkeys.debug_mode,
                &[
                    (
                        HotkeyAction::DebugModeNavigateNext,
                        "navegar logs",
                        Some(HotkeyAction::DebugModeNavigatePrev),
                    ),
                    (HotkeyAction::DebugModeExit, "salir", None),
                ],
            ),
        ),
        Mode::Normal if state.current_view() == &View::ProductForm => (
            "FORMULARIO:",
            theme.footer_form,
            format!(
                " Escribe para editar,{}",
                build_footer_text(
                    &hotkeys.product_form,
                    &[
                        (
                            HotkeyAction::NextField,
                            "campo",
                            Some(HotkeyAction::PrevField),
                        ),
                        (HotkeyAction::InsertNewline, "nueva línea", None),
                        (HotkeyAction::SubmitForm, "guardar", None),
                        (HotkeyAction::Cancel, "cancelar", None),
                    ],
                )
            ),
        ),
        Mode::Normal => (
            "PRODUCTOS:",
            theme.footer_normal,
            build_footer_text(
                &hotkeys.product_list,
                &[
                    (
                        HotkeyAction::NavigateNext,
                        "navegar",
                        Some(HotkeyAction::NavigatePrev),
                    ),
                    (
                        HotkeyAction::PrevPage,
                        "página",
                        Some(HotkeyAction::NextPage),
                    ),
                    (HotkeyAction::NewProduct, "nuevo", None),
                    (HotkeyAction::EditProduct, "editar", None),
                    (HotkeyAction::CopyProduct, "copiar", None),
                    (HotkeyAction::DuplicateProduct, "duplicar", None),
                    (HotkeyAction::DeleteProduct, "eliminar", None),
                    (HotkeyAction::EnterSearch, "buscar", None),
                    (
                        HotkeyAction::CycleSort,
                        "ordenar",
                        Some(HotkeyAction::ToggleSortOrder),
                    ),
                    (HotkeyAction::CyclePageSize, "por página", None),
                    (HotkeyAction::CycleTheme, "tema", None),
                    (HotkeyAction::EnterDebug, "logs", None),
                    (HotkeyAction::Quit, "salir", None),
                ],
            ),
        ),
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let (badge, badge_color, controls_text) = footer_content(state);
    let controls = Line::from(vec![
        Span::styled(
            badge,
            Style::default()
                .fg(theme.text.to_color())
                .bg(badge_color.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(controls_text, Style::default().fg(theme.warning.to_color())),
    ]);
    frame.render_widget(Paragraph::new(controls), size);
}
