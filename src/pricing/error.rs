use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("cannot access file {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {context}: {source}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("cannot convert {field} value {value} to a number")]
    Conversion { field: String, value: String },
    /// Numeric, but beyond what a 96-bit decimal holds (about ±7.9e28).
    #[error("{field} value {value} is outside the supported decimal range")]
    OutOfRange { field: String, value: String },
    #[error("no entries in {0}")]
    EmptyInput(&'static str),
}

impl QuoteError {
    pub(crate) fn parse(context: impl Into<String>, source: serde_json::Error) -> Self {
        QuoteError::Parse {
            context: context.into(),
            source,
        }
    }
}
