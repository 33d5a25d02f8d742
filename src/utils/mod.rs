//! Shared utilities.

pub mod text_processing;
