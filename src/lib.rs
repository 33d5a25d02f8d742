//! Terminal user interface for managing a product inventory.
//!
//! Products live in memory for the session. They can be created, edited,
//! copied, duplicated and deleted, and are browsed through a searchable,
//! sortable and paginated listing.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod inventory;
pub mod logger;
pub mod state;
pub mod ui;
pub mod utils;
