//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// No product is highlighted in the list
    #[error("No product selected")]
    NoProductSelected,

    /// A form operation was requested while no form is open
    #[error("No form is open")]
    FormNotOpen,
}
