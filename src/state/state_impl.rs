use crate::app::ConfigSaveSender;
use crate::config::ViewHotkeys;
use crate::inventory::{
    derive, FilterCriteria, Listing, Pager, Product, ProductId, ProductStore, SortBy, SortOrder,
};
use crate::logger::LogBuffer;
use crate::ui::Theme;
use log::*;
use ratatui::layout::Rect;
use std::time::{Duration, Instant};

use super::error::StateError;
use super::form::{FormError, FormMode, ProductForm, Submission};
use super::navigation::{Mode, View};
use super::notification::Toast;

/// Houses data representative of application state.
///
/// The product collection, the listing controls, the open form, the pending
/// delete and the toast all live here; every user operation goes through
/// one of the methods below.
pub struct State {
    config_save_sender: Option<ConfigSaveSender>,
    terminal_size: Rect,
    view_stack: Vec<View>,
    mode: Mode,
    store: ProductStore,
    criteria: FilterCriteria,
    pager: Pager,
    selected_index: usize, // Row within the current page
    form: Option<ProductForm>,
    pending_delete: Option<ProductId>,
    toast: Toast,
    log_buffer: LogBuffer,
    debug_index: usize,
    theme: Theme,
    hotkeys: ViewHotkeys,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            config_save_sender: None,
            terminal_size: Rect::default(),
            view_stack: vec![View::ProductList],
            mode: Mode::Normal,
            store: ProductStore::new(),
            criteria: FilterCriteria::default(),
            pager: Pager::default(),
            selected_index: 0,
            form: None,
            pending_delete: None,
            toast: Toast::default(),
            log_buffer: LogBuffer::default(),
            debug_index: 0,
            theme: Theme::default(),
            hotkeys: ViewHotkeys::default(),
        }
    }
}

impl State {
    pub fn new(
        config_save_sender: ConfigSaveSender,
        store: ProductStore,
        theme: Theme,
        hotkeys: ViewHotkeys,
        page_size: usize,
        notification_duration: Duration,
        log_buffer: LogBuffer,
    ) -> Self {
        State {
            config_save_sender: Some(config_save_sender),
            store,
            theme,
            hotkeys,
            pager: Pager::with_page_size(page_size),
            toast: Toast::new(notification_duration),
            log_buffer,
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the next theme and persist the choice.
    ///
    pub fn cycle_theme(&mut self) -> &mut Self {
        self.theme = self.theme.next();
        info!("Switched theme to {}", self.theme.name);
        self.request_config_save();
        self
    }

    /// Get the hotkey bindings.
    ///
    pub fn get_hotkeys(&self) -> &ViewHotkeys {
        &self.hotkeys
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Sets the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    /// Return the current view.
    ///
    pub fn current_view(&self) -> &View {
        self.view_stack.last().unwrap_or(&View::ProductList)
    }

    fn push_view(&mut self, view: View) {
        if self.current_view() != &view {
            self.view_stack.push(view);
        }
    }

    fn pop_view(&mut self) -> Option<View> {
        if self.view_stack.len() > 1 {
            self.view_stack.pop()
        } else {
            None
        }
    }

    /// Return the current input mode.
    ///
    pub fn current_mode(&self) -> &Mode {
        &self.mode
    }

    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    /// Run the filter, sort and paginate pipeline over the current store.
    ///
    pub fn listing(&self) -> Listing<'_> {
        derive(self.store.products(), &self.criteria, &self.pager)
    }

    /// Pull the pager and the selection back inside the current listing.
    ///
    fn sync_listing(&mut self) {
        let (total, rows) = {
            let listing = self.listing();
            (listing.total, listing.items.len())
        };
        self.pager.set_page(self.pager.page(), total);
        self.selected_index = self.selected_index.min(rows.saturating_sub(1));
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Return the highlighted product of the current page.
    ///
    pub fn selected_product(&self) -> Option<&Product> {
        self.listing().items.get(self.selected_index).copied()
    }

    /// Highlight the next row of the page, wrapping to the first.
    ///
    pub fn select_next(&mut self) -> &mut Self {
        let rows = self.listing().items.len();
        if rows > 0 {
            self.selected_index = (self.selected_index + 1) % rows;
        }
        self
    }

    /// Highlight the previous row of the page, wrapping to the last.
    ///
    pub fn select_previous(&mut self) -> &mut Self {
        let rows = self.listing().items.len();
        if rows > 0 {
            self.selected_index = if self.selected_index == 0 {
                rows - 1
            } else {
                self.selected_index - 1
            };
        }
        self
    }

    pub fn next_page(&mut self) -> &mut Self {
        let total = self.listing().total;
        self.pager.next_page(total);
        self.selected_index = 0;
        self
    }

    pub fn previous_page(&mut self) -> &mut Self {
        let total = self.listing().total;
        self.pager.prev_page(total);
        self.selected_index = 0;
        self
    }

    /// Switch to the next page size, back on the first page, and persist it.
    ///
    pub fn cycle_page_size(&mut self) -> &mut Self {
        let page_size = self.pager.cycle_page_size();
        self.selected_index = 0;
        debug!("Page size set to {}", page_size);
        self.request_config_save();
        self
    }

    pub fn page_size(&self) -> usize {
        self.pager.page_size()
    }

    /// Sort by the next key in the cycle.
    ///
    pub fn cycle_sort(&mut self) -> &mut Self {
        self.criteria.sort_by = self.criteria.sort_by.next();
        debug!("Sorting {}", self.criteria.sort_by.label());
        self
    }

    pub fn toggle_sort_order(&mut self) -> &mut Self {
        self.criteria.sort_order = self.criteria.sort_order.toggle();
        self
    }

    pub fn set_sort(&mut self, sort_by: SortBy, sort_order: SortOrder) -> &mut Self {
        self.criteria.sort_by = sort_by;
        self.criteria.sort_order = sort_order;
        self
    }

    /// Enter search mode for typing the search term.
    ///
    pub fn enter_search_mode(&mut self) -> &mut Self {
        self.mode = Mode::Search;
        self
    }

    /// Leave search mode, keeping the term.
    ///
    pub fn exit_search_mode(&mut self) -> &mut Self {
        self.mode = Mode::Normal;
        self
    }

    /// Leave search mode and clear the term.
    ///
    pub fn cancel_search(&mut self) -> &mut Self {
        self.criteria.search_term.clear();
        self.mode = Mode::Normal;
        self.sync_listing();
        self
    }

    pub fn add_search_char(&mut self, c: char) -> &mut Self {
        self.criteria.search_term.push(c);
        self.sync_listing();
        self
    }

    pub fn remove_search_char(&mut self) -> &mut Self {
        self.criteria.search_term.pop();
        self.sync_listing();
        self
    }

    pub fn is_search_mode(&self) -> bool {
        self.mode == Mode::Search
    }

    pub fn get_search_term(&self) -> &str {
        &self.criteria.search_term
    }

    /// Open a blank form for a new product.
    ///
    pub fn open_add_form(&mut self) -> &mut Self {
        self.open_form(FormMode::Add, None);
        self
    }

    /// Open the form seeded with the highlighted product for editing.
    ///
    pub fn open_edit_form(&mut self) -> Result<(), StateError> {
        let product = self.selected_product().cloned().ok_or(StateError::NoProductSelected)?;
        self.open_form(FormMode::Edit, Some(&product));
        Ok(())
    }

    /// Open the form seeded with a copy of the highlighted product.
    ///
    pub fn open_copy_form(&mut self) -> Result<(), StateError> {
        let product = self.selected_product().cloned().ok_or(StateError::NoProductSelected)?;
        self.open_form(FormMode::Copy, Some(&product));
        Ok(())
    }

    fn open_form(&mut self, mode: FormMode, seed: Option<&Product>) {
        debug!("Opening {:?} form", mode);
        self.form = Some(ProductForm::new(mode, seed));
        self.mode = Mode::Normal;
        self.push_view(View::ProductForm);
    }

    pub fn form(&self) -> Option<&ProductForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Result<&mut ProductForm, StateError> {
        self.form.as_mut().ok_or(StateError::FormNotOpen)
    }

    /// Submit the open form. Invalid drafts stay open with their errors;
    /// valid ones are applied to the store, announced and closed.
    ///
    pub fn submit_form(&mut self) -> Result<(), StateError> {
        let form = self.form.as_mut().ok_or(StateError::FormNotOpen)?;
        match form.submit() {
            Ok(Submission::Create(draft)) => {
                let product = self.store.add(draft);
                info!("Added product {} ({})", product.name, product.id);
                self.toast.success(format!(
                    "El producto \"{}\" ha sido agregado correctamente.",
                    product.name
                ));
            }
            Ok(Submission::Update(product)) => match self.store.update(product) {
                Ok(product) => {
                    info!("Updated product {} ({})", product.name, product.id);
                    self.toast
                        .success(format!("El producto \"{}\" ha sido actualizado.", product.name));
                }
                Err(e) => warn!("Discarding update: {}", e),
            },
            Err(FormError::Invalid { errors }) => {
                debug!("Form submission rejected with {} error(s)", errors.len());
                return Ok(());
            }
        }
        self.close_form();
        self.sync_listing();
        Ok(())
    }

    /// Discard the open form.
    ///
    pub fn cancel_form(&mut self) -> &mut Self {
        debug!("Cancelling form");
        self.close_form();
        self
    }

    fn close_form(&mut self) {
        self.form = None;
        if self.current_view() == &View::ProductForm {
            self.pop_view();
        }
    }

    /// Ask for confirmation before deleting the highlighted product.
    ///
    pub fn request_delete(&mut self) -> Result<(), StateError> {
        let id = self.selected_product().map(|product| product.id).ok_or(StateError::NoProductSelected)?;
        self.pending_delete = Some(id);
        self.mode = Mode::DeleteConfirmation;
        Ok(())
    }

    /// Return the product awaiting delete confirmation.
    ///
    pub fn pending_delete(&self) -> Option<&Product> {
        self.pending_delete.and_then(|id| self.store.get(id))
    }

    /// Delete the product awaiting confirmation.
    ///
    pub fn confirm_delete(&mut self) -> &mut Self {
        if let Some(id) = self.pending_delete.take() {
            match self.store.remove(id) {
                Ok(product) => {
                    info!("Removed product {} ({})", product.name, product.id);
                    self.toast
                        .success(format!("El producto \"{}\" ha sido eliminado.", product.name));
                }
                Err(e) => warn!("Discarding removal: {}", e),
            }
        }
        self.mode = Mode::Normal;
        self.sync_listing();
        self
    }

    pub fn cancel_delete(&mut self) -> &mut Self {
        self.pending_delete = None;
        self.mode = Mode::Normal;
        self
    }

    /// Append a copy of the highlighted product right away.
    ///
    pub fn duplicate_selected(&mut self) -> Result<(), StateError> {
        let product = self.selected_product().cloned().ok_or(StateError::NoProductSelected)?;
        let copy = self.store.duplicate(&product);
        info!("Duplicated product {} as {}", product.id, copy.id);
        self.toast
            .success(format!("Se ha creado una copia de \"{}\".", product.name));
        Ok(())
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    /// Close the toast before its countdown ends.
    ///
    pub fn dismiss_toast(&mut self) -> &mut Self {
        self.toast.hide();
        self
    }

    /// Advance time-driven state.
    ///
    pub fn on_tick(&mut self, now: Instant) -> &mut Self {
        if self.toast.tick(now) {
            debug!("Toast dismissed");
        }
        self
    }

    /// Enter debug mode for browsing logs.
    ///
    pub fn enter_debug_mode(&mut self) -> &mut Self {
        self.mode = Mode::Debug;
        self.debug_index = self.log_buffer.len().saturating_sub(1);
        self
    }

    pub fn exit_debug_mode(&mut self) -> &mut Self {
        self.mode = Mode::Normal;
        self
    }

    pub fn is_debug_mode(&self) -> bool {
        self.mode == Mode::Debug
    }

    pub fn get_debug_index(&self) -> usize {
        self.debug_index
    }

    /// Navigate to next log entry.
    ///
    pub fn next_debug(&mut self) -> &mut Self {
        let len = self.log_buffer.len();
        if len > 0 {
            self.debug_index = (self.debug_index + 1) % len;
        }
        self
    }

    /// Navigate to previous log entry.
    ///
    pub fn previous_debug(&mut self) -> &mut Self {
        let len = self.log_buffer.len();
        if len > 0 {
            self.debug_index = if self.debug_index == 0 || self.debug_index >= len {
                len - 1
            } else {
                self.debug_index - 1
            };
        }
        self
    }

    /// Get debug entries for rendering.
    ///
    pub fn get_debug_entries(&self) -> Vec<String> {
        self.log_buffer.entries()
    }

    /// Ask the config saver thread to persist the current preferences.
    ///
    fn request_config_save(&self) {
        if let Some(sender) = &self.config_save_sender {
            if let Err(err) = sender.send(()) {
                error!("Failed to request config save: {}", err);
            }
        }
    }
}
