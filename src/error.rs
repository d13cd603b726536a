//! Error types for rs-profile-extract.
//!
//! Only document-level failures are errors. Missing sections and malformed
//! items inside a parsed page never surface here; they fall back to the
//! record's default values.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input is not textual markup (e.g. binary data).
    #[error("Input is not HTML text: {0}")]
    InvalidInput(String),

    /// A configured selector is not valid CSS.
    #[error("Invalid selector for `{field}`: {selector:?}")]
    InvalidSelector {
        /// Name of the `Selectors` field holding the bad value.
        field: &'static str,
        /// The rejected selector text.
        selector: String,
    },

    /// JSON serialization or deserialization of a record failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_selector_message_names_field() {
        let err = Error::InvalidSelector {
            field: "full_name",
            selector: "div..name".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("full_name"));
        assert!(msg.contains("div..name"));
    }

    #[test]
    fn json_errors_convert() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Json(_)));
    }
}
