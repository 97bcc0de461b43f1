use thiserror::Error;

/// Errors from inline span parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A delimiter occurred an odd number of times in one plain span.
    #[error("Unmatched `{delimiter}` delimiter in {text:?}")]
    MalformedMarkdown {
        delimiter: &'static str,
        text: String,
    },

    /// A splitting step was handed no spans at all.
    #[error("No spans to split in {step}")]
    EmptyInput { step: &'static str },

    #[error("Unrecognized span kind: {0}")]
    UnrecognizedSpanKind(String),
}
