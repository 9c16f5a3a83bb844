//! Domain-level error type shared across the workspace.

/// Errors produced by domain logic, independent of any transport.
///
/// The API crate maps each variant onto an HTTP status code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input failed a domain validation rule.
    #[error("{0}")]
    Validation(String),
}
