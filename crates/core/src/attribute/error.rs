use thiserror::Error;

/// Errors raised while translating values into or out of [`super::AttributeValue`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Unsupported value type: {kind}")]
    Unsupported { kind: String },
    #[error("Expected a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },
}

impl ConversionError {
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::Unsupported { kind: kind.into() }
    }
}
