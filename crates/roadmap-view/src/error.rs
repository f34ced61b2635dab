//! Error types for the view engine
//!
//! View transitions never fail; only parsing a named option from text does.

/// A textual value did not name any known option
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct ParseValueError {
    /// Which option set was being parsed
    pub kind: &'static str,
    /// The rejected value
    pub value: String,
}

impl ParseValueError {
    /// Create error for an option set
    #[inline]
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_value_error_display() {
        let err = ParseValueError::new("view scope", "everything");
        assert_eq!(err.to_string(), "unknown view scope: 'everything'");
    }
}
