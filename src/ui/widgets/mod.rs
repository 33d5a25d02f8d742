//! Reusable UI widget components.
//!
//! This module contains styling utilities and layout helpers.

pub mod layout;
pub mod styling;
