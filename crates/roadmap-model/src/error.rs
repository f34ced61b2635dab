//! Error types for record parsing

/// Errors raised while interpreting record values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Label is not of the form `RHEL {major}`
    #[error("invalid version label: '{0}'")]
    InvalidVersionLabel(String),
}
