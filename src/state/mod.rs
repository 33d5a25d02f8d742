//! Application state management module.
//!
//! This module contains the core state management for the application, including:
//! - Main `State` struct that orchestrates the product store, listing and form
//! - Navigation types (View, Mode)
//! - The product form state machine and the toast notification
//! - State error handling

mod error;
mod form;
mod navigation;
mod notification;

pub use error::StateError;
pub use form::{
    CounterLevel, FieldError, FieldRule, FormError, FormField, FormMode, ProductForm, Submission,
    FIELD_RULES,
};
pub use navigation::{Mode, View};
pub use notification::{Toast, ToastKind, DEFAULT_AUTO_HIDE};

// State struct, methods and Default impl are in state_impl.rs
#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
