//! Navigation-related state types.
//!
//! This module contains enums related to views and input modes.

/// Specifying the different views.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum View {
    ProductList,
    ProductForm,
}

/// Specifying input modes layered on top of the current view.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    Normal,
    Search,
    DeleteConfirmation,
    Debug,
}
