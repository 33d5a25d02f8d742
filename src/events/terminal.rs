use crate::config::{get_action_for_event, get_action_for_special_mode, HotkeyAction};
use crate::state::{Mode, State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use tui_textarea::CursorMove;
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => error!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => error!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(dispatch(state, event)),
            Event::Tick => {
                state.on_tick(Instant::now());
                Ok(true)
            }
        }
    }
}

/// Apply one key event to the state. Returns false if exit was requested.
///
pub fn dispatch(state: &mut State, event: KeyEvent) -> bool {
    if event.kind == KeyEventKind::Release {
        return true;
    }
    if event.code == KeyCode::Char('c') && event.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    let mode = *state.current_mode();
    match mode {
        Mode::Search => handle_search(state, &event),
        Mode::DeleteConfirmation => handle_delete_confirmation(state, &event),
        Mode::Debug => handle_debug(state, &event),
        Mode::Normal => match *state.current_view() {
            View::ProductForm => handle_form(state, &event),
            View::ProductList => return handle_list(state, &event),
        },
    }
    true
}

/// Return the character typed by a plain or shifted key press.
///
fn typed_char(event: &KeyEvent) -> Option<char> {
    match event.code {
        KeyCode::Char(c) if !event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(c)
        }
        _ => None,
    }
}

/// Cursor movement for the keys the description editor understands.
///
fn cursor_move(event: &KeyEvent) -> Option<CursorMove> {
    match event.code {
        KeyCode::Left => Some(CursorMove::Back),
        KeyCode::Right => Some(CursorMove::Forward),
        KeyCode::Up => Some(CursorMove::Up),
        KeyCode::Down => Some(CursorMove::Down),
        KeyCode::Home => Some(CursorMove::Head),
        KeyCode::End => Some(CursorMove::End),
        _ => None,
    }
}

fn handle_search(state: &mut State, event: &KeyEvent) {
    match get_action_for_special_mode(event, &Mode::Search, state.get_hotkeys()) {
        Some(HotkeyAction::SearchConfirm) => {
            debug!("Processing exit search mode event '{:?}'...", event);
            state.exit_search_mode();
        }
        Some(HotkeyAction::SearchCancel) => {
            debug!("Processing cancel search event '{:?}'...", event);
            state.cancel_search();
        }
        _ if event.code == KeyCode::Backspace => {
            state.remove_search_char();
        }
        _ => {
            if let Some(c) = typed_char(event) {
                state.add_search_char(c);
            }
        }
    }
}

fn handle_delete_confirmation(state: &mut State, event: &KeyEvent) {
    match get_action_for_special_mode(event, &Mode::DeleteConfirmation, state.get_hotkeys()) {
        Some(HotkeyAction::DeleteConfirm) => {
            debug!("Processing confirm delete event '{:?}'...", event);
            state.confirm_delete();
        }
        Some(HotkeyAction::DeleteCancel) => {
            debug!("Processing cancel delete event '{:?}'...", event);
            state.cancel_delete();
        }
        _ => debug!("Skipping processing of terminal event '{:?}'...", event),
    }
}

fn handle_debug(state: &mut State, event: &KeyEvent) {
    match get_action_for_special_mode(event, &Mode::Debug, state.get_hotkeys()) {
        Some(HotkeyAction::DebugModeNavigateNext) => {
            state.next_debug();
        }
        Some(HotkeyAction::DebugModeNavigatePrev) => {
            state.previous_debug();
        }
        Some(HotkeyAction::DebugModeExit) => {
            state.exit_debug_mode();
        }
        _ => (),
    }
}

fn handle_form(state: &mut State, event: &KeyEvent) {
    let action = get_action_for_event(event, &View::ProductForm, state.get_hotkeys());
    if let Some(HotkeyAction::SubmitForm) = action {
        debug!("Processing submit form event '{:?}'...", event);
        if let Err(e) = state.submit_form() {
            warn!("Failed to submit form: {}", e);
        }
        return;
    }
    if let Some(HotkeyAction::Cancel) = action {
        debug!("Processing cancel form event '{:?}'...", event);
        state.cancel_form();
        return;
    }

    let form = match state.form_mut() {
        Ok(form) => form,
        Err(e) => {
            warn!("Ignoring form input: {}", e);
            return;
        }
    };
    match action {
        Some(HotkeyAction::NextField) => form.focus_next(),
        Some(HotkeyAction::PrevField) => form.focus_prev(),
        Some(HotkeyAction::InsertNewline) => {
            form.insert_newline();
        }
        _ if event.code == KeyCode::Backspace => {
            form.backspace();
        }
        _ if event.code == KeyCode::Delete => {
            form.delete_forward();
        }
        _ => {
            if let Some(movement) = cursor_move(event) {
                form.move_cursor(movement);
            } else if let Some(c) = typed_char(event) {
                if !form.insert_char(c) {
                    debug!("Rejected '{}' for field {:?}", c, form.focus());
                }
            }
        }
    }
}

fn handle_list(state: &mut State, event: &KeyEvent) -> bool {
    let action = match get_action_for_event(event, &View::ProductList, state.get_hotkeys()) {
        Some(action) => action,
        None => {
            debug!("Skipping processing of terminal event '{:?}'...", event);
            return true;
        }
    };
    debug!("Processing {:?} event '{:?}'...", action, event);

    let result = match action {
        HotkeyAction::Quit => return false,
        HotkeyAction::NavigateNext => {
            state.select_next();
            Ok(())
        }
        HotkeyAction::NavigatePrev => {
            state.select_previous();
            Ok(())
        }
        HotkeyAction::NextPage => {
            state.next_page();
            Ok(())
        }
        HotkeyAction::PrevPage => {
            state.previous_page();
            Ok(())
        }
        HotkeyAction::CyclePageSize => {
            state.cycle_page_size();
            Ok(())
        }
        HotkeyAction::NewProduct => {
            state.open_add_form();
            Ok(())
        }
        HotkeyAction::EditProduct => state.open_edit_form(),
        HotkeyAction::CopyProduct => state.open_copy_form(),
        HotkeyAction::DuplicateProduct => state.duplicate_selected(),
        HotkeyAction::DeleteProduct => state.request_delete(),
        HotkeyAction::EnterSearch => {
            state.enter_search_mode();
            Ok(())
        }
        HotkeyAction::CycleSort => {
            state.cycle_sort();
            Ok(())
        }
        HotkeyAction::ToggleSortOrder => {
            state.toggle_sort_order();
            Ok(())
        }
        HotkeyAction::EnterDebug => {
            state.enter_debug_mode();
            Ok(())
        }
        HotkeyAction::CycleTheme => {
            state.cycle_theme();
            Ok(())
        }
        HotkeyAction::Cancel => {
            state.dismiss_toast();
            Ok(())
        }
        _ => Ok(()),
    };
    if let Err(e) = result {
        debug!("Ignoring {:?}: {}", action, e);
    }
    true
}
