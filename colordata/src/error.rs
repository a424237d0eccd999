use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ColorDataError {
    /// The section ended early or a read failed. Truncated and corrupt input look the same.
    #[error("Invalid color data: cannot read {field}")]
    InvalidFormat { field: &'static str },
    #[error("Offset {offset} is past the end of the input ({length} bytes)")]
    OffsetOutOfRange { offset: usize, length: usize },
    #[error("Cannot read file `{path}`: {source}")]
    IOError {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
}

impl ColorDataError {
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat { .. })
    }
}
