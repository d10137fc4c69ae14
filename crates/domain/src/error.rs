//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`EmonError`]
//! via `#[from]` (or an explicit `From` impl when the source is foreign).

/// Base error type crossing port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum EmonError {
    /// A value failed domain validation.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The document has no `<body>` to append toasts to.
    #[error("document has no body")]
    MissingBody,

    /// The document has no `<head>` to inject the stylesheet into.
    #[error("document has no head")]
    MissingHead,

    /// The document adapter failed to perform a DOM operation.
    #[error("document operation failed")]
    Document(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain validation failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The auto-dismiss delay is zero, so toasts would never be readable.
    #[error("auto-dismiss delay must be non-zero")]
    ZeroAutoDismiss,
}
