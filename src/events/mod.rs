//! Event handling module.
//!
//! Terminal events (key presses and periodic ticks) are polled on a separate
//! thread and applied to the application state here.

pub mod terminal;
