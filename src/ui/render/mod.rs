mod delete_confirmation;
mod filter_bar;
mod footer;
mod header;
mod log;
mod product_form;
mod product_list;
mod toast;

use self::log::log;
use super::*;
use crate::state::{Mode, State, View};
use delete_confirmation::delete_confirmation;
use filter_bar::filter_bar;
use footer::footer;
use header::header;
use product_form::product_form;
use product_list::product_list;
use ratatui::layout::{Constraint, Direction, Layout};
use std::time::Instant;
use toast::toast;

/// Height of the log panel while debug mode is active.
const LOG_PANEL_HEIGHT: u16 = 10;

/// Render the whole screen according to state. Overlays (form, delete
/// confirmation, toast) are drawn last so they sit on top of the listing.
///
pub fn render(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let log_height = if state.is_debug_mode() {
        LOG_PANEL_HEIGHT
    } else {
        0
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(log_height),
            Constraint::Length(1),
        ])
        .split(size);

    header(frame, chunks[0], state);
    filter_bar(frame, chunks[1], state);
    product_list(frame, chunks[2], state);
    if state.is_debug_mode() {
        log(frame, chunks[3], state);
    }
    footer(frame, chunks[4], state);

    if state.current_view() == &View::ProductForm {
        product_form(frame, size, state);
    }
    if state.current_mode() == &Mode::DeleteConfirmation {
        delete_confirmation(frame, size, state);
    }
    if state.toast().is_open() {
        toast(frame, size, state, Instant::now());
    }
}
