/// Errors that can occur while reading or writing records.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// An I/O error occurred on the input or output stream.
    #[error("record I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The output stream stopped accepting bytes mid-record.
    #[error("output closed (incomplete record)")]
    OutputClosed,
}

pub type Result<T> = std::result::Result<T, RecordError>;
